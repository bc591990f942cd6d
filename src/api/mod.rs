mod analyze;
mod auth;
pub mod client;
pub mod types;

pub use analyze::AnalyzeUpload;
pub use auth::ProfileFallback;
pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
