//! Reactive view of the signed-in user, shared through Leptos context.
//!
//! The persisted slots in [`session`] stay the source of truth; this module
//! mirrors them into a signal so headers and guards re-render on changes
//! they make themselves. Cross-tab changes are picked up on the next read.

use leptos::*;

use crate::api::UserProfile;
use crate::state::session;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub is_authenticated: bool,
    pub loading: bool,
}

pub type AuthContext = RwSignal<AuthState>;

/// Returns the shared auth signal, or a detached one seeded from storage
/// when no provider is mounted (SSR test renders).
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_rw_signal(seed_state()))
}

pub(crate) fn seed_state() -> AuthState {
    AuthState {
        user: session::current_user(),
        is_authenticated: session::auth_token().is_some(),
        loading: false,
    }
}

/// Marks the session signed in after a successful login or registration.
pub fn sign_in(auth: AuthContext, user: UserProfile) {
    auth.set(AuthState {
        user: Some(user),
        is_authenticated: true,
        loading: false,
    });
}

/// Clears the persisted session and resets the signal.
pub fn sign_out(auth: AuthContext) {
    session::clear_session();
    auth.set(AuthState::default());
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = create_rw_signal(seed_state());
    provide_context::<AuthContext>(auth);

    #[cfg(target_arch = "wasm32")]
    hydrate(auth);

    children()
}

/// Refreshes the cached profile from the server in the background. A 401
/// during the fetch clears the session slots, which is observed here and
/// reflected as a signed-out state.
#[cfg(target_arch = "wasm32")]
fn hydrate(auth: AuthContext) {
    use crate::api::{ApiClient, ProfileFallback};

    if session::auth_token().is_none() {
        return;
    }
    let client = use_context::<ApiClient>().unwrap_or_default();
    auth.update(|state| state.loading = true);
    spawn_local(async move {
        let cached = session::current_user();
        let fallback = ProfileFallback {
            username: cached.as_ref().map(|user| user.username.clone()),
            email: cached.as_ref().map(|user| user.email.clone()),
        };
        let me = client.safe_fetch_me(fallback).await;
        if session::auth_token().is_some() {
            session::set_current_user(&me);
            auth.set(AuthState {
                user: Some(me),
                is_authenticated: true,
                loading: false,
            });
        } else {
            auth.set(AuthState::default());
        }
    });
}
