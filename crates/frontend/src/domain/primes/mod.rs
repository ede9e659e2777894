//! Primes generation form
//!
//! - validation.rs: client-side check of the entered limit
//! - state.rs: view state and the reducer driving it
//! - display.rs: pure mapping from state to what gets rendered
//! - ui/: Leptos wiring (model, view model, view)

pub mod display;
pub mod state;
pub mod ui;
pub mod validation;
