use super::view_model::MeasurementFieldViewModel;
use crate::shared::components::ui::Input;
use crate::shared::icons::icon;
use contracts::domain::a001_measurement::MeasurementValue;
use leptos::prelude::*;

#[component]
pub fn MeasurementField(
    /// Initial state (label, unit, text)
    value: MeasurementValue,
    /// Called after every accepted change or clear
    #[prop(optional)]
    on_change: Option<Callback<MeasurementValue>>,
) -> impl IntoView {
    let vm = MeasurementFieldViewModel::new(value);
    let field_id = format!("measurement-{}", vm.label().to_lowercase().replace(' ', "-"));

    let notify = move || {
        if let Some(handler) = on_change {
            handler.run(vm.value.get_untracked());
        }
    };

    let on_input = Callback::new(move |proposed: String| {
        if vm.input_command(proposed).is_accepted() {
            notify();
        }
    });

    let on_clear = move |_: leptos::ev::MouseEvent| {
        vm.clear_command();
        notify();
    };

    view! {
        <div class="measurement-field">
            <Input
                id=field_id
                label=vm.label()
                value=Signal::derive(move || vm.text())
                on_input=on_input
                inputmode="decimal"
                blur_on_enter=true
                invalid=Signal::derive(move || vm.is_error())
                prefix=move || icon("search")
                suffix=move || view! {
                    {move || if vm.show_clear() {
                        view! {
                            <button
                                type="button"
                                class="measurement-field__clear"
                                aria-label="Clear text"
                                on:click=on_clear
                            >
                                {icon("x")}
                            </button>
                        }.into_any()
                    } else {
                        view! {
                            <span class="measurement-field__unit">{vm.unit()}</span>
                        }.into_any()
                    }}
                }
            />
        </div>
    }
}
