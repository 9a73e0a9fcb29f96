use leptos::prelude::*;

/// Input component with label, prefix/suffix and error state.
///
/// После вызова `on_input` значение в DOM выравнивается по `value`:
/// если обработчик отклонил ввод и не изменил сигнал, нажатие просто
/// не оставляет следа в поле.
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Virtual keyboard hint: "decimal", "numeric", "text" (default)
    #[prop(optional, into)]
    inputmode: MaybeProp<String>,
    /// Blur on Enter (hides the on-screen keyboard)
    #[prop(optional)]
    blur_on_enter: bool,
    /// Error state (reactive)
    #[prop(optional, into)]
    invalid: MaybeProp<bool>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Content before the input (icon)
    #[prop(optional, into)]
    prefix: Option<ViewFn>,
    /// Content after the input (unit, clear button)
    #[prop(optional, into)]
    suffix: Option<ViewFn>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_mode = move || inputmode.get().unwrap_or_else(|| "text".to_string());
    let is_invalid = move || invalid.get().unwrap_or(false);
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <div class=move || {
                let error_class = if is_invalid() { "form__field--error" } else { "" };
                format!("form__field {} {}", error_class, additional_class())
            }>
                {prefix.map(|p| view! { <span class="form__prefix">{p.run()}</span> })}
                <input
                    id=input_id
                    class="form__input"
                    type="text"
                    inputmode=input_mode
                    enterkeyhint=move || if blur_on_enter { "done" } else { "enter" }
                    prop:value=move || value.get()
                    placeholder=input_placeholder
                    aria-invalid=move || if is_invalid() { "true" } else { "false" }
                    on:input=move |ev| {
                        if let Some(handler) = on_input {
                            handler.run(event_target_value(&ev));
                        }
                        let input = event_target::<web_sys::HtmlInputElement>(&ev);
                        let current = value.get_untracked();
                        if input.value() != current {
                            input.set_value(&current);
                        }
                    }
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if blur_on_enter && ev.key() == "Enter" {
                            let _ = event_target::<web_sys::HtmlInputElement>(&ev).blur();
                        }
                    }
                />
                {suffix.map(|s| view! { <span class="form__suffix">{s.run()}</span> })}
            </div>
        </div>
    }
}
