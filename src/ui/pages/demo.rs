//! Demo form page

use leptos::logging::log;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::DemoFormData;
use crate::ui::demo_form::DemoMobileForm;

/// Standalone page hosting the mobile demo form
#[component]
pub fn DemoPage() -> impl IntoView {
    let last_submitted = RwSignal::new(None::<DemoFormData>);

    let handle_submit = Callback::new(move |data: DemoFormData| {
        log!("Demo form submitted: {:?}", data);
        last_submitted.set(Some(data));
    });

    view! {
        <Title text="Genlingo - Demo Form"/>

        <div class="min-h-screen flex flex-col items-center gap-6 py-12 px-4 bg-gradient-to-b from-light-blue via-neutral-0 to-light-red">
            <h1 class="font-heading text-2xl font-bold text-genlingo-blue">"Tell us about you"</h1>
            <DemoMobileForm on_submit=handle_submit/>
            {move || last_submitted.get().map(|data| view! {
                <p class="text-genlingo-blue font-heading font-semibold" role="status">
                    {format!("Thanks, {}!", data.name)}
                </p>
            })}
            <A href="/" attr:class="text-sm text-neutral-5 hover:underline">"Back to Genlingo"</A>
        </div>
    }
}
