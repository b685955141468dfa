mod auth;
pub use auth::AuthForm;

mod dashboard;
pub use dashboard::Dashboard;

mod not_found;
pub use not_found::PageNotFound;
