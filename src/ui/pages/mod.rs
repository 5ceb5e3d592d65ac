//! Application pages module
//!
//! - Login page
//! - Home (forwards to the role dashboard)
//! - Role dashboards (Admin / Manager / Employee)
//! - 404 page

mod dashboard;
mod home;
mod login;
mod not_found;

pub use dashboard::{DashboardPage, Section, sections};
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
