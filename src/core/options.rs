//! Closed option sets offered by the interface
//!
//! Every selectable value in the app (learner level, gender, feedback rating,
//! navigation tab, settings row) is an enum here, so an unknown selection cannot
//! be stored in component state.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Self-assessed learner level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[display("Beginner")]
    Beginner,
    #[display("Intermediate")]
    Intermediate,
    #[display("Advanced")]
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    /// Value used for the `<option value=...>` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }

    /// Parse a select value. The empty placeholder option maps to `None`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[display("male")]
    Male,
    #[display("female")]
    Female,
    #[display("other")]
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

/// Feedback rating. Four qualitative options; there is deliberately no value 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Rating {
    #[display("Great")]
    Great,
    #[display("Good")]
    Good,
    #[display("Okay")]
    Okay,
    #[display("Bad")]
    Bad,
}

impl Rating {
    /// Display order in the dialog, best first
    pub const ALL: [Rating; 4] = [Rating::Great, Rating::Good, Rating::Okay, Rating::Bad];

    pub fn value(&self) -> u8 {
        match self {
            Rating::Great => 5,
            Rating::Good => 4,
            Rating::Okay => 3,
            Rating::Bad => 2,
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::ALL
            .into_iter()
            .find(|r| r.value() == value)
            .ok_or_else(|| format!("rating must be one of 2, 3, 4, 5 (got {})", value))
    }
}

/// Top-level navigation tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Tab {
    #[default]
    #[display("Learn")]
    Learn,
    #[display("Scenarios")]
    Scenarios,
    #[display("Profile")]
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Learn, Tab::Scenarios, Tab::Profile];

    /// Stable key, used for test ids
    pub fn key(&self) -> &'static str {
        match self {
            Tab::Learn => "learn",
            Tab::Scenarios => "scenarios",
            Tab::Profile => "profile",
        }
    }
}

/// Rows of the settings list on the profile tab (sign-out is handled separately)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SettingsRow {
    #[display("Account Settings")]
    Account,
    #[display("Notification Preferences")]
    Notifications,
    #[display("App Language")]
    Language,
    #[display("About Genlingo")]
    About,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 4] = [
        SettingsRow::Account,
        SettingsRow::Notifications,
        SettingsRow::Language,
        SettingsRow::About,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SettingsRow::Account => "account",
            SettingsRow::Notifications => "notifications",
            SettingsRow::Language => "language",
            SettingsRow::About => "about",
        }
    }

    /// Whether the row carries an inline switch instead of a chevron
    pub fn is_toggle(&self) -> bool {
        matches!(self, SettingsRow::Notifications)
    }
}
