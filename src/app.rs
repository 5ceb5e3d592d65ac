use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::core::Config;
use crate::core::session::Role;
use crate::ui::auth::provide_auth_context;
use crate::ui::pages::{DashboardPage, HomePage, LoginPage, NotFoundPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // The one session for the whole tree; every guard and page reads it
    provide_auth_context(Config::from_env());

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/lms-portal.css"/>

        <Title text="LMS Portal"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("admin") view=|| view! { <DashboardPage role=Role::Admin/> }/>
                <Route path=StaticSegment("manager") view=|| view! { <DashboardPage role=Role::Manager/> }/>
                <Route path=StaticSegment("employee") view=|| view! { <DashboardPage role=Role::Employee/> }/>
            </Routes>
        </Router>
    }
}
