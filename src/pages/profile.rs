use leptos::*;

use crate::state::auth::{self, use_auth};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let user = create_memo(move |_| auth.get().user);

    #[cfg(target_arch = "wasm32")]
    refresh_profile(auth);

    let on_logout = move |_| {
        auth::sign_out(auth);
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/auth?mode=login");
        }
    };

    view! {
        <div class="max-w-lg">
            <div class="bg-white rounded-lg shadow p-6">
                <h2 class="text-lg font-semibold text-slate-900 mb-4">"Your profile"</h2>
                {move || match user.get() {
                    Some(user) => view! {
                        <dl class="space-y-3">
                            <div>
                                <dt class="text-sm font-medium text-slate-500">"Username"</dt>
                                <dd class="text-sm text-slate-900">{user.username}</dd>
                            </div>
                            <div>
                                <dt class="text-sm font-medium text-slate-500">"Email"</dt>
                                <dd class="text-sm text-slate-900">{user.email}</dd>
                            </div>
                        </dl>
                    }
                    .into_view(),
                    None => view! {
                        <p class="text-sm text-slate-500">"Profile details are unavailable."</p>
                    }
                    .into_view(),
                }}
                <button
                    on:click=on_logout
                    class="mt-6 py-2 px-4 rounded-md border border-slate-300 text-sm font-medium text-slate-700 hover:bg-slate-50"
                >
                    "Sign out"
                </button>
            </div>
        </div>
    }
}

/// Re-fetches the profile so a stale cached copy gets replaced. Bails out
/// if the page was torn down before the response arrived.
#[cfg(target_arch = "wasm32")]
fn refresh_profile(auth: crate::state::auth::AuthContext) {
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::api::ApiClient;
    use crate::state::session;

    if session::auth_token().is_none() {
        return;
    }
    // Cached profile with a real username is already good enough.
    if session::current_user().is_some_and(|user| !user.username.is_empty()) {
        return;
    }
    let alive = Rc::new(Cell::new(true));
    {
        let alive = Rc::clone(&alive);
        on_cleanup(move || alive.set(false));
    }
    let client = use_context::<ApiClient>().unwrap_or_default();
    spawn_local(async move {
        if let Ok(me) = client.get_me().await {
            session::set_current_user(&me);
            if alive.get() {
                auth.update(|state| state.user = Some(me));
            }
        }
    });
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, sample_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn profile_shows_cached_details() {
        let html = render_to_string(move || {
            provide_auth(Some(sample_user()));
            view! { <ProfilePage /> }
        });
        assert!(html.contains("alice"));
        assert!(html.contains("alice@example.com"));
    }

    #[test]
    fn profile_degrades_without_a_cached_user() {
        let html = render_to_string(move || {
            provide_auth(None);
            view! { <ProfilePage /> }
        });
        assert!(html.contains("Profile details are unavailable."));
    }
}
