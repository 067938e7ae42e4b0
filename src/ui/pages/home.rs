//! Home page component
//!
//! The single-page shell of the app:
//! - Header with mascot and wordmark
//! - Tab content (Learn landing, Scenarios teaser, Profile settings)
//! - Footer
//! - Floating feedback button and the feedback dialog

use leptos::logging::log;
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::{FeedbackSubmission, NavigationState, SubmitCompletion, Tab, UserProfile};
use crate::ui::feedback_dialog::FeedbackDialog;
use crate::ui::icon::{Icon, icons};
use crate::ui::main_navigation::MainNavigation;
use crate::ui::profile_settings::ProfileSettings;

/// Home page with tab navigation
#[component]
pub fn HomePage() -> impl IntoView {
    let feedback_open = RwSignal::new(false);
    let navigation = RwSignal::new(NavigationState::default());
    let current_tab = Signal::derive(move || navigation.with(|n| n.current()));

    // Placeholder: log feedback until there is an API to send it to
    let handle_feedback_submit =
        Callback::<FeedbackSubmission, SubmitCompletion>::new(|data: FeedbackSubmission| {
            SubmitCompletion::deferred(async move {
                match serde_json::to_string(&data) {
                    Ok(json) => log!("Feedback submitted: {}", json),
                    Err(_) => log!("Feedback submitted: {:?}", data),
                }
            })
        });

    // Placeholder: no auth backend yet
    let handle_sign_out = Callback::new(|_: ()| log!("User signed out"));

    view! {
        <SeoMeta/>

        <div class="min-h-screen flex flex-col items-center justify-between bg-gradient-to-b from-light-blue via-neutral-0 to-light-red">
            <MainNavigation
                current_tab=current_tab
                on_tab_change=Callback::new(move |tab: Tab| {
                    navigation.update(|n| {
                        n.select(tab);
                    })
                })
            />

            <Header/>

            <main class="flex flex-col items-center flex-1 w-full px-4">
                {move || match current_tab.get() {
                    Tab::Learn => view! { <LearnTab/> }.into_any(),
                    Tab::Scenarios => view! { <ScenariosTab/> }.into_any(),
                    Tab::Profile => view! {
                        <ProfileSettings
                            user=UserProfile::new("Charan").with_level(5)
                            on_sign_out=handle_sign_out
                        />
                    }.into_any(),
                }}
            </main>

            <Footer/>

            // Floating feedback button
            <button
                type="button"
                class="fixed bottom-20 right-6 z-50 bg-genlingo-red hover:bg-genlingo-blue text-white rounded-full w-14 h-14 shadow-lg flex items-center justify-center text-2xl animate-bounce"
                on:click=move |_| feedback_open.set(true)
                aria-label="Give Feedback"
                data-testid="open-feedback"
            >
                <Icon name=icons::MESSAGE_CIRCLE class="w-7 h-7"/>
            </button>
            <FeedbackDialog
                open=feedback_open.into()
                on_open_change=Callback::new(move |open: bool| feedback_open.set(open))
                on_submit=handle_feedback_submit
            />
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="w-full flex justify-center py-8">
            <div class="flex items-center gap-3">
                <div class="w-10 h-10 rounded-full bg-genlingo-blue flex items-center justify-center shadow-card animate-bounce">
                    <span class="text-2xl" role="img" aria-label="Genlingo Mascot">"🇰🇷"</span>
                </div>
                <span class="font-heading text-2xl font-bold text-genlingo-blue tracking-tight">"Genlingo"</span>
            </div>
        </header>
    }
}

#[component]
fn LearnTab() -> impl IntoView {
    view! {
        <div class="w-full max-w-content flex flex-col items-center gap-8">
            // Hero illustration
            <div class="w-full flex justify-center">
                <div class="w-[320px] h-[200px] sm:w-[480px] sm:h-[300px] bg-gradient-to-tr from-genlingo-blue/80 to-genlingo-red/80 rounded-xl shadow-card flex items-center justify-center animate-pulse">
                    <span class="text-5xl sm:text-7xl" role="img" aria-label="Korean BBQ Illustration">"🍖🎤🛒"</span>
                </div>
            </div>
            <h1 class="font-heading text-display-m sm:text-display-d text-genlingo-blue text-center font-bold leading-tight">
                "Learn Korean for Real Life"
            </h1>
            <p class="font-body text-body-m sm:text-body-d text-neutral-6 text-center max-w-xl">
                "Enjoy Korean songs, dramas, and culture like a native! Genlingo makes learning fun, scenario-based, and truly effective."
            </p>
            <button
                type="button"
                class="bg-genlingo-blue hover:bg-genlingo-red text-white rounded-genlingo px-8 py-4 text-lg font-bold shadow-button transition-all duration-200 ease-bounce active:scale-95 focus:outline-none focus:ring-4 focus:ring-genlingo-blue/40 animate-bounce"
                data-testid="cta-start"
            >
                <Icon name=icons::SPARKLES class="inline-block w-5 h-5 mr-2 -mt-1"/>
                "Start Learning for Free"
            </button>
        </div>

        <div class="mt-16 grid grid-cols-1 sm:grid-cols-3 gap-6 w-full max-w-content">
            <FeatureCard
                accent="text-genlingo-blue"
                title="Learn Real Conversations"
                description="Practice scenarios you’ll actually use in Korea."
            />
            <FeatureCard
                accent="text-genlingo-red"
                title="Sound Like a Native"
                description="Master pronunciation and natural expressions."
            />
            <FeatureCard
                accent="text-genlingo-accent"
                title="Culture Immersion"
                description="Learn with music, food, and real-life stories."
            />
        </div>
    }
}

#[component]
fn FeatureCard(
    /// Text color class for the title
    accent: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-card p-6 flex flex-col items-center gap-2">
            <Icon name=icons::SPARKLES class="w-8 h-8 mb-1"/>
            <span class=format!("font-heading text-lg font-semibold {}", accent)>{title}</span>
            <span class="font-body text-sm text-neutral-5 text-center">{description}</span>
        </div>
    }
}

#[component]
fn ScenariosTab() -> impl IntoView {
    view! {
        <div class="w-full max-w-content flex flex-col items-center gap-8 py-24">
            <h2 class="font-heading text-h2-m sm:text-h2-d text-genlingo-red font-bold">"Scenarios"</h2>
            <p class="font-body text-body-m text-neutral-6 text-center">
                "Scenario-based lessons coming soon!"
            </p>
        </div>
    }
}

/// Footer year, taken in UTC on both sides so hydration sees the same text
fn current_year() -> i32 {
    #[cfg(feature = "ssr")]
    {
        use chrono::Datelike;
        chrono::Utc::now().year()
    }
    #[cfg(not(feature = "ssr"))]
    {
        js_sys::Date::new_0().get_utc_full_year() as i32
    }
}

fn copyright_line(year: i32) -> String {
    format!("© {} Genlingo. All rights reserved.", year)
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="w-full flex flex-col items-center py-8 gap-2 text-neutral-4 text-sm">
            <div class="flex gap-4">
                <a href="#" class="hover:underline">"About Us"</a>
                <a href="#" class="hover:underline">"Privacy Policy"</a>
            </div>
            <span>{copyright_line(current_year())}</span>
        </footer>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Genlingo - Playful Korean Learning"/>
        <Meta
            name="description"
            content="Learn Korean through playful, scenario-based lessons. Enjoy songs, dramas, and culture like a native!"
        />
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use chrono::{Datelike, Utc};

    #[test]
    fn test_footer_year_is_utc() {
        let before = Utc::now().year();
        let year = current_year();
        let after = Utc::now().year();
        assert!(year == before || year == after);
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 Genlingo. All rights reserved."
        );
    }
}
