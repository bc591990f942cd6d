use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::AnalyzePanel;

#[component]
pub fn AnalyzePage() -> impl IntoView {
    view! { <AnalyzePanel /> }
}
