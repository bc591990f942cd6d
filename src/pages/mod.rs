pub mod analyze;
pub mod auth;
pub mod home;
pub mod profile;
pub mod reset_password;
