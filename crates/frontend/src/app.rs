use crate::domain::primes::ui::generator::PrimesGenerator;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <PrimesGenerator />
    }
}
