use leptos::prelude::*;

/// Labelled text input.
///
/// Renders `label`, spacer, `input`, spacer so it can sit inline with a
/// submit button inside a fieldset.
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new text on every edit
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// ID for the input element, also the label's `for`
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Form field name
    #[prop(optional, into)]
    name: MaybeProp<String>,
    /// `data-testid` attribute
    #[prop(optional, into)]
    test_id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_name = move || name.get().unwrap_or_default();
    let input_test_id = move || test_id.get().unwrap_or_default();

    view! {
        {move || label.get().map(|l| view! {
            <label for=input_id>{l}</label>
        })}
        <span class="App-HSpacer"></span>
        <input
            id=input_id
            name=input_name
            type="text"
            data-testid=input_test_id
            prop:value=move || value.get()
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
        />
        <span class="App-HSpacer"></span>
    }
}
