use leptos::prelude::*;

use super::view_model::PrimesGeneratorViewModel;
use crate::domain::primes::display::{PrimesArea, PRIMES_EMPTY_TEST_ID};
use crate::shared::components::ui::{Button, Input};

#[component]
pub fn PrimesGenerator() -> impl IntoView {
    let vm = PrimesGeneratorViewModel::new();
    let shown = vm.display();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.generate_command();
    };

    view! {
        <div class="App">
            <header class="App-header">
                <p>"Prime Number Generation Example UI"</p>
            </header>

            <form on:submit=on_submit>
                <fieldset class="App-LimitEntry">
                    <legend>"Generate Primes"</legend>
                    <Input
                        label="From Zero To:"
                        id="limit"
                        name="limit"
                        test_id="limitInput"
                        value={vm.generation_limit()}
                        on_input=Callback::new(move |value: String| vm.set_generation_limit(value))
                    />
                    <Button button_type="submit">"Go!"</Button>
                </fieldset>
            </form>

            <fieldset class="App-PrimesBox">
                <legend class=move || shown.get().legend_class>
                    {move || shown.get().legend}
                </legend>
                <div class="App-PrimesWrap">
                    {move || match shown.get().area {
                        PrimesArea::Empty => view! {
                            <span class="App-VSpacer" data-testid=PRIMES_EMPTY_TEST_ID></span>
                        }
                        .into_any(),
                        PrimesArea::Cells(cells) => cells
                            .into_iter()
                            .map(|cell| view! { <p data-testid={cell.test_id}>{cell.text}</p> })
                            .collect_view()
                            .into_any(),
                    }}
                </div>
            </fieldset>
        </div>
    }
}
