//! Role-scoped dashboards
//!
//! Each role gets a landing page listing the areas it manages. The
//! resource screens behind those links talk to the backend through
//! [`crate::core::ApiClient`].

use leptos::prelude::*;

use crate::core::session::Role;
use crate::ui::auth::{ProtectedRoute, UserMenu};
use crate::ui::icon::{Icon, icons};

/// A dashboard tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

const COURSES: Section = Section {
    title: "Courses",
    description: "Create and organise training courses",
    icon: icons::BOOK,
};

const EMPLOYEES: Section = Section {
    title: "Employees",
    description: "Manage accounts and course assignments",
    icon: icons::USERS,
};

const QUIZZES: Section = Section {
    title: "Quizzes",
    description: "Assessments attached to courses",
    icon: icons::CLIPBOARD,
};

const CERTIFICATES: Section = Section {
    title: "Certificates",
    description: "Issued and earned certificates",
    icon: icons::AWARD,
};

const CALENDAR: Section = Section {
    title: "Calendar",
    description: "Scheduled sessions and deadlines",
    icon: icons::CALENDAR,
};

/// Tiles shown for a role
pub fn sections(role: Role) -> &'static [Section] {
    match role {
        Role::Admin => &[COURSES, EMPLOYEES, QUIZZES, CERTIFICATES, CALENDAR],
        Role::Manager => &[COURSES, EMPLOYEES, CERTIFICATES, CALENDAR],
        Role::Employee => &[COURSES, QUIZZES, CERTIFICATES, CALENDAR],
    }
}

fn title(role: Role) -> &'static str {
    match role {
        Role::Admin => "Admin Dashboard",
        Role::Manager => "Manager Dashboard",
        Role::Employee => "My Learning",
    }
}

/// Dashboard for one role, guarded by that role
#[component]
pub fn DashboardPage(role: Role) -> impl IntoView {
    view! {
        <ProtectedRoute required_role=role>
            <div class="min-h-screen bg-theme-primary">
                <header class="border-b border-theme">
                    <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex items-center justify-between h-16">
                        <h1 class="text-xl font-bold text-theme-primary">{title(role)}</h1>
                        <UserMenu />
                    </div>
                </header>
                <main class="max-w-7xl mx-auto p-6 grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                    {sections(role)
                        .iter()
                        .map(|section| view! { <SectionCard section=*section /> })
                        .collect_view()}
                </main>
            </div>
        </ProtectedRoute>
    }
}

#[component]
fn SectionCard(section: Section) -> impl IntoView {
    view! {
        <div class="p-5 rounded-xl border border-theme bg-theme-secondary">
            <div class="flex items-center gap-3 mb-2">
                <Icon name=section.icon class="w-6 h-6" />
                <h2 class="text-lg font-semibold text-theme-primary">{section.title}</h2>
            </div>
            <p class="text-sm text-theme-secondary">{section.description}</p>
        </div>
    }
}
