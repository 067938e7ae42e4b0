use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

const INPUT_CLASS: &str = "rounded-lg border-neutral-2 focus:ring-2 transition-all min-h-[44px] text-base px-4 py-3";
const INVALID_CLASS: &str = "border-error focus:border-error focus:ring-error/30 animate-shake";

fn field_class(base: &str, invalid: bool) -> String {
    if invalid {
        format!("{} {}", base, INVALID_CLASS)
    } else {
        base.to_string()
    }
}

fn error_id(id: &str) -> String {
    format!("{}-error", id)
}

/// Inline message under a field
#[component]
fn FieldError(id: &'static str, error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|err| {
            view! {
                <span id=error_id(id) class="flex items-center gap-1 text-error text-sm animate-fade-in">
                    <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                    {err}
                </span>
            }
        })
    }
}

/// Text input with label and inline error
#[component]
pub fn FormField(
    /// DOM id, also the target of the label
    id: &'static str,
    /// Field label text
    label: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Fired when the field loses focus
    on_blur: Callback<()>,
    /// Error to display; `None` hides the message
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-2">
            <label for=id class="font-heading text-base text-neutral-7 mb-1">{label}</label>
            <input
                id=id
                type="text"
                class=move || field_class(INPUT_CLASS, error.get().is_some())
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| on_blur.run(())
                aria-invalid=move || error.get().is_some().to_string()
                aria-describedby=error_id(id)
            />
            <FieldError id=id error=error/>
        </div>
    }
}

/// Text area form field component
#[component]
pub fn TextAreaField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    on_blur: Callback<()>,
    /// Hard cap on input length, applied by the browser
    #[prop(optional)]
    max_length: Option<usize>,
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-2">
            <label for=id class="font-heading text-base text-neutral-7 mb-1">{label}</label>
            <textarea
                id=id
                class=move || field_class(&format!("{} min-h-[64px]", INPUT_CLASS), error.get().is_some())
                placeholder=placeholder
                maxlength=max_length.map(|n| n.to_string())
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| on_blur.run(())
                aria-invalid=move || error.get().is_some().to_string()
                aria-describedby=error_id(id)
            />
            <FieldError id=id error=error/>
        </div>
    }
}

/// Select/dropdown form field component
#[component]
pub fn SelectField(
    id: &'static str,
    label: &'static str,
    /// Text of the empty first option
    placeholder: &'static str,
    /// Current value; empty string selects the placeholder
    value: Signal<String>,
    on_change: Callback<String>,
    on_blur: Callback<()>,
    /// Options as (value, display_text) pairs
    options: Vec<(&'static str, String)>,
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-2">
            <label for=id class="font-heading text-base text-neutral-7 mb-1">{label}</label>
            <select
                id=id
                class=move || field_class(INPUT_CLASS, error.get().is_some())
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                on:blur=move |_| on_blur.run(())
                aria-invalid=move || error.get().is_some().to_string()
                aria-describedby=error_id(id)
            >
                <option value="">{placeholder}</option>
                {options.into_iter().map(|(val, text)| {
                    view! { <option value=val>{text}</option> }
                }).collect_view()}
            </select>
            <FieldError id=id error=error/>
        </div>
    }
}

/// Radio buttons rendered as selectable pills
#[component]
pub fn RadioGroupField(
    id: &'static str,
    label: &'static str,
    /// Options as (value, display_text) pairs
    options: Vec<(&'static str, String)>,
    /// Currently selected value, empty when nothing is chosen
    value: Signal<String>,
    on_change: Callback<String>,
    on_blur: Callback<()>,
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-2" role="radiogroup" aria-labelledby=format!("{}-label", id)>
            <span id=format!("{}-label", id) class="font-heading text-base text-neutral-7 mb-1">{label}</span>
            <div class="flex gap-4">
                {options.into_iter().map(|(val, text)| {
                    let checked = move || value.get() == val;
                    view! {
                        <label class=move || {
                            if checked() {
                                "flex items-center gap-2 rounded-lg px-3 py-2 min-w-[44px] min-h-[44px] cursor-pointer border transition-all border-genlingo-accent bg-light-blue/30 scale-105 shadow-card"
                            } else {
                                "flex items-center gap-2 rounded-lg px-3 py-2 min-w-[44px] min-h-[44px] cursor-pointer border border-neutral-2 transition-all"
                            }
                        }>
                            <input
                                type="radio"
                                name=id
                                value=val
                                class="accent-genlingo-accent w-5 h-5"
                                prop:checked=checked
                                on:change=move |_| on_change.run(val.to_string())
                                on:blur=move |_| on_blur.run(())
                                aria-checked=move || checked().to_string()
                                aria-invalid=move || error.get().is_some().to_string()
                            />
                            <span class="capitalize font-body text-base">{text}</span>
                        </label>
                    }
                }).collect_view()}
            </div>
            <FieldError id=id error=error/>
        </div>
    }
}

/// Checkbox form field component
#[component]
pub fn CheckboxField(
    id: &'static str,
    label: &'static str,
    checked: Signal<bool>,
    on_change: Callback<bool>,
    on_blur: Callback<()>,
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 min-h-[44px]">
            <input
                type="checkbox"
                id=id
                class="accent-genlingo-blue w-6 h-6 rounded-md border-neutral-2 focus:ring-2 focus:ring-genlingo-blue/30 transition-all"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
                on:blur=move |_| on_blur.run(())
                aria-checked=move || checked.get().to_string()
                aria-invalid=move || error.get().is_some().to_string()
            />
            <label for=id class="font-body text-base text-neutral-7 select-none">{label}</label>
            <FieldError id=id error=error/>
        </div>
    }
}

/// On/off switch
#[component]
pub fn Switch(
    checked: Signal<bool>,
    on_change: Callback<bool>,
    /// Accessible name
    label: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="button"
            role="switch"
            aria-label=label
            aria-checked=move || checked.get().to_string()
            class=move || {
                if checked.get() {
                    "relative inline-flex h-6 w-11 items-center rounded-full transition-colors bg-genlingo-blue"
                } else {
                    "relative inline-flex h-6 w-11 items-center rounded-full transition-colors bg-neutral-2"
                }
            }
            on:click=move |ev| {
                // The switch sits inside a clickable row
                ev.stop_propagation();
                on_change.run(!checked.get_untracked());
            }
        >
            <span class=move || {
                if checked.get() {
                    "inline-block h-5 w-5 transform rounded-full bg-white shadow transition-transform translate-x-5"
                } else {
                    "inline-block h-5 w-5 transform rounded-full bg-white shadow transition-transform translate-x-0.5"
                }
            }/>
        </button>
    }
}
