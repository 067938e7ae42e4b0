//! Feedback dialog
//!
//! Renders [`FeedbackFlow`] and carries out the effects its reducer returns:
//! calling the submit callback, waiting on its completion, arming the reset
//! timer and asking the owner to close the dialog.

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::{
    FeedbackEffect, FeedbackEvent, FeedbackFlow, FeedbackSubmission, MAX_FEEDBACK_LENGTH,
    MIN_FEEDBACK_LENGTH, Rating, SubmitCompletion,
};
use crate::ui::common::BaseModal;
use crate::ui::icon::{Icon, icons};

fn rating_icon(rating: Rating) -> &'static str {
    match rating {
        Rating::Great => icons::SMILE,
        Rating::Good => icons::STAR,
        Rating::Okay => icons::MEH,
        Rating::Bad => icons::FROWN,
    }
}

async fn sleep(delay: Duration) {
    #[cfg(not(feature = "ssr"))]
    {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }
    #[cfg(feature = "ssr")]
    tokio::time::sleep(delay).await;
}

/// Handles needed to run the flow's effects
#[derive(Clone, Copy)]
struct FlowDriver {
    flow: RwSignal<FeedbackFlow>,
    on_submit: Callback<FeedbackSubmission, SubmitCompletion>,
    on_open_change: Callback<bool>,
}

impl FlowDriver {
    fn dispatch(self, event: FeedbackEvent) {
        // `None` once the dialog has been torn down; pending tasks then do nothing
        if let Some(effect) = self.flow.try_update(|flow| flow.apply(event)).flatten() {
            self.perform(effect);
        }
    }

    fn perform(self, effect: FeedbackEffect) {
        match effect {
            FeedbackEffect::Submit(submission) => {
                let completion = self.on_submit.run(submission);
                spawn_local(async move {
                    completion.wait().await;
                    self.dispatch(FeedbackEvent::SubmitResolved);
                });
            }
            FeedbackEffect::ScheduleReset(delay) => {
                spawn_local(async move {
                    sleep(delay).await;
                    self.dispatch(FeedbackEvent::ResetElapsed);
                });
            }
            FeedbackEffect::Close => self.on_open_change.run(false),
        }
    }
}

/// Feedback dialog with rating buttons and a free-text field
#[component]
pub fn FeedbackDialog(
    /// Whether the dialog is visible
    open: Signal<bool>,
    /// Requested visibility changes (close button, backdrop, auto-close)
    on_open_change: Callback<bool>,
    /// Receives the validated feedback; the returned completion gates the success state
    on_submit: Callback<FeedbackSubmission, SubmitCompletion>,
) -> impl IntoView {
    let flow = RwSignal::new(FeedbackFlow::new());
    let driver = FlowDriver {
        flow,
        on_submit,
        on_open_change,
    };

    let can_submit = Memo::new(move |_| flow.with(|f| f.can_submit()));
    let input_disabled = Memo::new(move |_| flow.with(|f| f.input_disabled()));
    let show_confirmation = Memo::new(move |_| flow.with(|f| f.show_confirmation()));

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        driver.dispatch(FeedbackEvent::SubmitRequested);
    };

    view! {
        <BaseModal
            title="Share Your Thoughts"
            description="We’d love your feedback! How do you feel about Genlingo so far?"
            is_open=open
            on_close=Callback::new(move |_: ()| on_open_change.run(false))
        >
            <form on:submit=on_form_submit class="flex flex-col gap-0">
                // Rating
                <div class="flex flex-row items-center justify-center gap-3 py-2" role="group" aria-label="Rating">
                    {Rating::ALL.into_iter().map(|rating| {
                        let selected = move || flow.with(|f| f.rating() == Some(rating));
                        view! {
                            <button
                                type="button"
                                aria-label=rating.to_string()
                                aria-pressed=move || selected().to_string()
                                class=move || {
                                    if selected() {
                                        "transition-all duration-200 ease-bounce rounded-full p-2 border-2 focus:outline-none focus:ring-2 focus:ring-genlingo-red scale-110 border-genlingo-red bg-light-red shadow-card"
                                    } else {
                                        "transition-all duration-200 ease-bounce rounded-full p-2 border-2 border-transparent bg-neutral-1 hover:bg-light-red focus:outline-none focus:ring-2 focus:ring-genlingo-red"
                                    }
                                }
                                on:click=move |_| driver.dispatch(FeedbackEvent::RatingSelected(rating))
                                data-testid=format!("feedback-emoji-{}", rating.value())
                            >
                                <Icon name=rating_icon(rating) class="w-7 h-7"/>
                            </button>
                        }
                    }).collect_view()}
                </div>

                // Text
                <div class="px-6 pb-4">
                    <textarea
                        class="w-full rounded-lg border-neutral-2 focus:border-genlingo-blue focus:ring-2 focus:ring-genlingo-blue/30 transition-all min-h-[96px] text-base"
                        placeholder="Type your feedback here..."
                        required=true
                        minlength=MIN_FEEDBACK_LENGTH.to_string()
                        maxlength=MAX_FEEDBACK_LENGTH.to_string()
                        prop:value=move || flow.with(|f| f.text().to_string())
                        prop:disabled=move || input_disabled.get()
                        on:input=move |ev| driver.dispatch(FeedbackEvent::TextChanged(event_target_value(&ev)))
                        aria-invalid=move || flow.with(|f| f.text_error().is_some()).to_string()
                        aria-describedby="feedback-text-error"
                        data-testid="feedback-textarea"
                    />
                    {move || flow.with(|f| f.text_error()).map(|err| view! {
                        <span id="feedback-text-error" class="text-error text-sm animate-fade-in">
                            {err.to_string()}
                        </span>
                    })}
                </div>

                // Submit and confirmation
                <div class="px-6 pb-6 flex flex-col gap-2">
                    <button
                        type="submit"
                        class="bg-genlingo-red hover:bg-genlingo-blue text-white rounded-genlingo w-full py-3 text-lg font-bold shadow-button transition-all duration-200 ease-bounce active:scale-95 focus:outline-none focus:ring-4 focus:ring-genlingo-red/40 disabled:opacity-50 disabled:cursor-not-allowed"
                        prop:disabled=move || !can_submit.get()
                        data-testid="feedback-submit"
                    >
                        <Show when=move || flow.with(|f| f.is_submitting())>
                            <Icon name=icons::LOADER class="inline-block w-5 h-5 mr-2 -mt-1 animate-spin"/>
                        </Show>
                        {move || flow.with(|f| f.submit_label())}
                    </button>
                    <Show when=move || show_confirmation.get()>
                        <div class="flex flex-col items-center gap-1 animate-in fade-in zoom-in-90" role="status">
                            <Icon name=icons::SMILE class="w-8 h-8 animate-bounce"/>
                            <span class="text-genlingo-blue font-heading font-semibold">
                                "Thank you for your feedback!"
                            </span>
                        </div>
                    </Show>
                </div>
            </form>
        </BaseModal>
    }
}
