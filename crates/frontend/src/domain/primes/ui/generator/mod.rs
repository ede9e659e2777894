//! Primes Generator UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: request construction and the call to the primes service
//! - view_model.rs: ViewModel holding the form state and running requests
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::PrimesGenerator;
pub use view_model::PrimesGeneratorViewModel;
