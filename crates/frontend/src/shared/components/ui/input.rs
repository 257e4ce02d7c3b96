use leptos::prelude::*;

/// Text input bound to a string signal.
#[component]
pub fn Input(
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler (fires on every keystroke)
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <input
            type="text"
            class=move || format!("form__input {}", class.get().unwrap_or_default())
            placeholder=move || placeholder.get().unwrap_or_default()
            prop:value=move || value.get()
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
        />
    }
}
