//! Profile tab: user card, settings rows and sign-out confirmation

use leptos::prelude::*;

use crate::core::{ProfileEffect, ProfileEvent, ProfileSettingsState, SettingsRow, UserProfile};
use crate::ui::common::{ConfirmDialog, Switch};
use crate::ui::icon::{Icon, icons};

fn row_icon(row: SettingsRow) -> &'static str {
    match row {
        SettingsRow::Account => icons::USER,
        SettingsRow::Notifications => icons::BELL,
        SettingsRow::Language => icons::GLOBE,
        SettingsRow::About => icons::INFO,
    }
}

const ROW_CLASS: &str = "flex items-center justify-between px-5 py-4 min-h-[44px] rounded-xl bg-white shadow-card transition-all cursor-pointer group";

/// Profile card and settings list
#[component]
pub fn ProfileSettings(
    /// User shown on the card; placeholders are used when absent
    #[prop(optional)]
    user: Option<UserProfile>,
    /// Called once the user confirms sign-out
    #[prop(optional)]
    on_sign_out: Option<Callback<()>>,
) -> impl IntoView {
    let user = user.unwrap_or_default();
    let state = RwSignal::new(ProfileSettingsState::new());

    let dispatch = move |event: ProfileEvent| {
        let effect = state.try_update(|s| s.apply(event)).flatten();
        if let Some(ProfileEffect::SignOut) = effect {
            if let Some(callback) = on_sign_out.as_ref() {
                callback.run(());
            }
        }
    };

    let notifications = Signal::derive(move || state.with(|s| s.notifications));
    let confirm_open = Signal::derive(move || state.with(|s| s.sign_out_confirm));

    view! {
        <div class="w-full max-w-md mx-auto flex flex-col gap-6">
            <ProfileCard user=user/>

            // Settings list
            <div class="flex flex-col gap-3">
                {SettingsRow::ALL.into_iter().map(|row| {
                    view! {
                        <div
                            class=format!("{} hover:bg-light-blue/40 active:bg-light-blue/60", ROW_CLASS)
                            tabindex="0"
                            role="button"
                            aria-label=row.to_string()
                            on:click=move |_| dispatch(ProfileEvent::RowActivated(row))
                            data-testid=format!("settings-{}", row.key())
                        >
                            <div class="flex items-center gap-3">
                                <Icon name=row_icon(row) class="w-6 h-6 text-genlingo-blue group-hover:text-genlingo-red transition-all"/>
                                <span class="font-body text-base text-neutral-7 group-hover:text-genlingo-red">
                                    {row.to_string()}
                                </span>
                            </div>
                            {if row.is_toggle() {
                                view! {
                                    <Switch
                                        checked=notifications
                                        on_change=Callback::new(move |on: bool| dispatch(ProfileEvent::NotificationsSet(on)))
                                        label="Notifications"
                                    />
                                }.into_any()
                            } else {
                                view! {
                                    <Icon name=icons::CHEVRON_RIGHT class="w-4 h-4 text-neutral-4"/>
                                }.into_any()
                            }}
                        </div>
                    }
                }).collect_view()}

                // Sign out row
                <div
                    class=format!("{} hover:bg-light-red/40 active:bg-light-red/60", ROW_CLASS)
                    tabindex="0"
                    role="button"
                    aria-label="Sign Out"
                    on:click=move |_| dispatch(ProfileEvent::SignOutRequested)
                    data-testid="settings-signout"
                >
                    <div class="flex items-center gap-3">
                        <Icon name=icons::LOG_OUT class="w-6 h-6 text-error group-hover:text-genlingo-red transition-all"/>
                        <span class="font-body text-base text-error group-hover:text-genlingo-red">"Sign Out"</span>
                    </div>
                </div>
            </div>

            <ConfirmDialog
                title="Sign Out?"
                message="Are you sure you want to sign out?"
                is_open=confirm_open
                on_confirm=Callback::new(move |_: ()| dispatch(ProfileEvent::SignOutConfirmed))
                on_cancel=Callback::new(move |_: ()| dispatch(ProfileEvent::SignOutCancelled))
                confirm_text="Yes, Sign Out"
                test_id="signout"
            />
        </div>
    }
}

#[component]
fn ProfileCard(user: UserProfile) -> impl IntoView {
    let avatar = match user.avatar_url.clone() {
        Some(url) => view! {
            <img src=url alt=user.display_name().to_string() class="w-20 h-20 rounded-full object-cover"/>
        }
        .into_any(),
        None => view! {
            <span class="w-20 h-20 rounded-full bg-genlingo-blue text-white text-3xl flex items-center justify-center">
                {user.initial()}
            </span>
        }
        .into_any(),
    };

    view! {
        <div class="flex flex-col items-center gap-3 py-8 px-6 bg-white rounded-xl shadow-card">
            <div class="mb-2 shadow-card rounded-full">{avatar}</div>
            <div class="font-heading text-xl font-bold text-genlingo-blue">{user.display_name().to_string()}</div>
            <div class="flex items-center gap-2 text-genlingo-accent font-body text-sm">
                <span class="font-semibold">{format!("Level {}", user.display_level())}</span>
                <span class="inline-block w-2 h-2 rounded-full bg-genlingo-accent animate-pulse"/>
            </div>
        </div>
    }
}
