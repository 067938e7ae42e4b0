//! Application pages module
//!
//! - Home page (landing, tabs, feedback)
//! - Demo form page
//! - Not found page

mod demo;
mod home;
mod not_found;

pub use demo::DemoPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
