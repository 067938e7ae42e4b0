//! Mobile demo form: name, feedback, level, gender and agreement

use leptos::prelude::*;

use crate::core::{
    DemoField, DemoFormData, DemoFormEvent, DemoFormFields, DemoFormInitial, Gender, Level,
    MAX_FEEDBACK_LENGTH,
};
use crate::ui::common::{CheckboxField, FormField, RadioGroupField, SelectField, TextAreaField};

#[component]
pub fn DemoMobileForm(
    /// Receives the form data once every rule passes
    on_submit: Callback<DemoFormData>,
    /// Values to pre-fill
    #[prop(optional)]
    initial: Option<DemoFormInitial>,
) -> impl IntoView {
    let form = RwSignal::new(DemoFormFields::with_initial(initial.unwrap_or_default()));

    let dispatch = move |event: DemoFormEvent| {
        if let Some(data) = form.try_update(|f| f.apply(event)).flatten() {
            on_submit.run(data);
        }
    };
    let on_blur = move |field: DemoField| Callback::new(move |_: ()| dispatch(DemoFormEvent::Blurred(field)));
    let message = move |field: DemoField| {
        Signal::derive(move || form.with(|f| f.message_for(field)).map(|e| e.to_string()))
    };

    let level_options = Level::ALL
        .into_iter()
        .map(|l| (l.as_str(), l.to_string()))
        .collect::<Vec<_>>();
    let gender_options = Gender::ALL
        .into_iter()
        .map(|g| (g.as_str(), g.to_string()))
        .collect::<Vec<_>>();

    view! {
        <form
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                dispatch(DemoFormEvent::SubmitRequested);
            }
            class="w-full max-w-md mx-auto flex flex-col gap-6 p-4 sm:p-8 bg-white rounded-xl shadow-card"
            autocomplete="off"
        >
            <FormField
                id=DemoField::Name.id()
                label="Name"
                placeholder="Enter your name"
                value=Signal::derive(move || form.with(|f| f.name.value.clone()))
                on_input=Callback::new(move |v: String| dispatch(DemoFormEvent::NameChanged(v)))
                on_blur=on_blur(DemoField::Name)
                error=message(DemoField::Name)
            />
            <TextAreaField
                id=DemoField::Feedback.id()
                label="Feedback"
                placeholder="Share your thoughts..."
                value=Signal::derive(move || form.with(|f| f.feedback.value.clone()))
                on_input=Callback::new(move |v: String| dispatch(DemoFormEvent::FeedbackChanged(v)))
                on_blur=on_blur(DemoField::Feedback)
                max_length=MAX_FEEDBACK_LENGTH
                error=message(DemoField::Feedback)
            />
            <SelectField
                id=DemoField::Level.id()
                label="Level"
                placeholder="Select your level"
                value=Signal::derive(move || {
                    form.with(|f| f.level.value.map(|l| l.as_str()).unwrap_or_default().to_string())
                })
                on_change=Callback::new(move |v: String| dispatch(DemoFormEvent::LevelChanged(Level::parse(&v))))
                on_blur=on_blur(DemoField::Level)
                options=level_options
                error=message(DemoField::Level)
            />
            <RadioGroupField
                id=DemoField::Gender.id()
                label="Gender"
                options=gender_options
                value=Signal::derive(move || {
                    form.with(|f| f.gender.value.map(|g| g.as_str()).unwrap_or_default().to_string())
                })
                on_change=Callback::new(move |v: String| {
                    if let Some(gender) = Gender::ALL.into_iter().find(|g| g.as_str() == v) {
                        dispatch(DemoFormEvent::GenderChanged(gender));
                    }
                })
                on_blur=on_blur(DemoField::Gender)
                error=message(DemoField::Gender)
            />
            <CheckboxField
                id=DemoField::Agree.id()
                label="I agree to the terms"
                checked=Signal::derive(move || form.with(|f| f.agree.value))
                on_change=Callback::new(move |v: bool| dispatch(DemoFormEvent::AgreeChanged(v)))
                on_blur=on_blur(DemoField::Agree)
                error=message(DemoField::Agree)
            />
            <button
                type="submit"
                class="bg-genlingo-blue hover:bg-genlingo-red text-white rounded-genlingo w-full py-3 min-h-[44px] text-lg font-bold shadow-button transition-all duration-200 ease-bounce active:scale-95 focus:outline-none focus:ring-4 focus:ring-genlingo-blue/40 disabled:opacity-50 disabled:cursor-not-allowed"
                prop:disabled=move || form.with(|f| f.submit_disabled())
                data-testid="demoform-submit"
            >
                "Submit"
            </button>
        </form>
    }
}
