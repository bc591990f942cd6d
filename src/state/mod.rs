pub mod auth;
pub mod session;
pub mod session_monitor;
