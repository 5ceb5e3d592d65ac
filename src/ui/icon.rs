use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file stem under /icons)
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icon names shipped in `public/icons`
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const LOCK: &str = "lock";
    pub const LOGOUT: &str = "logout";
    pub const EYE: &str = "eye";
    pub const EYE_CLOSED: &str = "eye-closed";
    pub const BOOK: &str = "book";
    pub const USERS: &str = "users";
    pub const CLIPBOARD: &str = "clipboard";
    pub const AWARD: &str = "award";
    pub const CALENDAR: &str = "calendar";
}
