use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon file name without the .svg extension
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icon file names, served from `/icons` out of the assets dir
pub mod icons {
    pub const HOME: &str = "home";
    pub const BOOK_OPEN: &str = "book-open";
    pub const USER: &str = "user";
    pub const BELL: &str = "bell";
    pub const GLOBE: &str = "globe";
    pub const INFO: &str = "info";
    pub const LOG_OUT: &str = "log-out";
    pub const SPARKLES: &str = "sparkles";
    pub const MESSAGE_CIRCLE: &str = "message-circle";
    pub const SMILE: &str = "smile";
    pub const STAR: &str = "star";
    pub const MEH: &str = "meh";
    pub const FROWN: &str = "frown";
    pub const X: &str = "x";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const LOADER: &str = "loader";
}
