//! Profile tab state: user card defaults, notification switch and the
//! two-step sign-out confirmation.

use super::options::SettingsRow;

/// Level shown when the user record has none
pub const DEFAULT_LEVEL: u32 = 5;

/// User shown on the profile card
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub avatar_url: Option<String>,
    pub level: Option<u32>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Your Name"
        } else {
            &self.name
        }
    }

    /// Avatar fallback letter
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_else(|| "U".to_string())
    }

    pub fn display_level(&self) -> u32 {
        self.level.unwrap_or(DEFAULT_LEVEL)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileEvent {
    RowActivated(SettingsRow),
    /// Notification switch moved to the given position
    NotificationsSet(bool),
    SignOutRequested,
    SignOutCancelled,
    SignOutConfirmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileEffect {
    SignOut,
}

/// Settings panel state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileSettingsState {
    pub notifications: bool,
    pub sign_out_confirm: bool,
}

impl Default for ProfileSettingsState {
    fn default() -> Self {
        Self {
            notifications: true,
            sign_out_confirm: false,
        }
    }
}

impl ProfileSettingsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: ProfileEvent) -> Option<ProfileEffect> {
        match event {
            ProfileEvent::RowActivated(SettingsRow::Notifications) => {
                self.notifications = !self.notifications;
                None
            }
            // Account, language and about pages are not built yet
            ProfileEvent::RowActivated(_) => None,
            ProfileEvent::NotificationsSet(on) => {
                self.notifications = on;
                None
            }
            ProfileEvent::SignOutRequested => {
                self.sign_out_confirm = true;
                None
            }
            ProfileEvent::SignOutCancelled => {
                self.sign_out_confirm = false;
                None
            }
            ProfileEvent::SignOutConfirmed => {
                if !self.sign_out_confirm {
                    return None;
                }
                self.sign_out_confirm = false;
                Some(ProfileEffect::SignOut)
            }
        }
    }
}
