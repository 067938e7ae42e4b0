pub mod common;
pub mod demo_form;
pub mod feedback_dialog;
pub mod icon;
pub mod main_navigation;
pub mod pages;
pub mod profile_settings;

pub use demo_form::DemoMobileForm;
pub use feedback_dialog::FeedbackDialog;
pub use icon::{Icon, icons};
pub use main_navigation::MainNavigation;
pub use pages::{DemoPage, HomePage, NotFoundPage};
pub use profile_settings::ProfileSettings;
