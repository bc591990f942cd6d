use leptos::*;
use leptos_meta::*;
use leptos_router::*;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test_support;

use pages::{
    analyze::AnalyzePage, auth::AuthPage, home::HomePage, profile::ProfilePage,
    reset_password::ResetPasswordPage,
};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="MailOps"/>
        <state::auth::AuthProvider>
            <Router>
                <state::session_monitor::SessionTimeout/>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/auth" view=AuthPage/>
                    <Route path="/reset-password" view=ResetPasswordPage/>
                    <Route path="/app/analyze" view=ProtectedAnalyze/>
                    <Route path="/app/profile" view=ProtectedProfile/>
                    <Route path="/*any" view=|| view! { <Redirect path="/"/> }/>
                </Routes>
            </Router>
        </state::auth::AuthProvider>
    }
}

#[component]
fn ProtectedAnalyze() -> impl IntoView {
    view! {
        <components::guard::RequireAuth>
            <components::layout::AppShell>
                <AnalyzePage/>
            </components::layout::AppShell>
        </components::guard::RequireAuth>
    }
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! {
        <components::guard::RequireAuth>
            <components::layout::AppShell>
                <ProfilePage/>
            </components::layout::AppShell>
        </components::guard::RequireAuth>
    }
}
