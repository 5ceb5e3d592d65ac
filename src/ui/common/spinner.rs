use leptos::prelude::*;

/// Spinner size options
#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "spinner-sm",
            SpinnerSize::Medium => "spinner-md",
            SpinnerSize::Large => "spinner-lg",
        }
    }
}

/// Loading spinner component
#[component]
pub fn Spinner(
    /// Spinner size
    #[prop(default = SpinnerSize::Medium)]
    size: SpinnerSize,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
    /// Optional label text
    #[prop(default = String::new())]
    label: String,
    /// Whether to center the spinner
    #[prop(default = false)]
    centered: bool,
) -> impl IntoView {
    let classes = format!("spinner spinner-circle {} {}", size.class(), class);

    let container_class = if centered {
        "spinner-container spinner-centered"
    } else {
        "spinner-container"
    };

    view! {
        <div class=container_class>
            <div class=classes.trim_end().to_string() role="status" aria-live="polite">
                <div class="spinner-circle-inner"></div>
                <span class="sr-only">"Loading..."</span>
            </div>
            {(!label.is_empty()).then(|| view! {
                <div class="spinner-label">{label.clone()}</div>
            })}
        </div>
    }
}

/// Simple loading spinner with default settings
#[component]
pub fn LoadingSpinner(
    /// Optional loading message
    #[prop(default = String::new())]
    message: String,
) -> impl IntoView {
    view! {
        <Spinner size=SpinnerSize::Large label=message centered=true />
    }
}

/// Inline spinner for buttons or text
#[component]
pub fn InlineSpinner(
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    view! {
        <Spinner size=SpinnerSize::Small class=format!("spinner-inline {}", class) />
    }
}
