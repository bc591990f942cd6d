#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::UserProfile;
    use crate::state::auth::{AuthContext, AuthState};
    use leptos::*;

    pub fn sample_user() -> UserProfile {
        UserProfile {
            id: 1,
            username: "alice".into(),
            email: "alice@example.com".into(),
        }
    }

    pub fn provide_auth(user: Option<UserProfile>) -> AuthContext {
        let is_authenticated = user.is_some();
        let auth: AuthContext = create_rw_signal(AuthState {
            user,
            is_authenticated,
            loading: false,
        });
        provide_context(auth);
        auth
    }
}
