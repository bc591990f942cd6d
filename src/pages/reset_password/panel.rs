use leptos::{ev::SubmitEvent, *};

use super::view_model::use_reset_password_view_model;
use crate::components::layout::{ErrorMessage, SuccessMessage};
use crate::pages::auth::utils::is_password_strong;

#[component]
pub fn ResetPasswordPanel() -> impl IntoView {
    let vm = use_reset_password_view_model();
    let error = vm.error;
    let done_message = vm.done_message;
    let reset_action = vm.reset_action;
    let token = store_value(vm.token.clone());
    let has_token = token.with_value(|token| token.is_some());

    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
    let pending = reset_action.pending();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let token = match token.get_value() {
            Some(token) => token,
            None => return,
        };
        let new_password = password.get_untracked();
        if !is_password_strong(&new_password) {
            error.set(Some(
                "Password must be at least 8 characters and include an uppercase letter, a lowercase letter and a digit.".into(),
            ));
            return;
        }
        if new_password != confirm.get_untracked() {
            error.set(Some("Passwords do not match.".into()));
            return;
        }
        error.set(None);
        reset_action.dispatch((token, new_password));
    };

    view! {
        <div class="min-h-screen bg-slate-50 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white rounded-lg shadow p-8">
                <h1 class="text-2xl font-semibold text-slate-900 mb-6">"Choose a new password"</h1>
                {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}
                {move || done_message.get().map(|message| view! { <SuccessMessage message=message /> })}
                <Show
                    when=move || has_token && done_message.get().is_none()
                    fallback=move || {
                        if done_message.get_untracked().is_some() {
                            view! {
                                <a href="/auth?mode=login" class="text-sm text-indigo-600 hover:text-indigo-800">
                                    "Back to sign in"
                                </a>
                            }
                            .into_view()
                        } else if !has_token {
                            view! {
                                <p class="text-sm text-slate-500">
                                    "This reset link is invalid or has expired. Request a new one from the sign-in page."
                                </p>
                            }
                            .into_view()
                        } else {
                            ().into_view()
                        }
                    }
                >
                    <form on:submit=handle_submit class="space-y-4">
                        <div>
                            <label class="block text-sm font-medium text-slate-700">"New password"</label>
                            <input
                                type="password"
                                class="mt-1 block w-full rounded-md border border-slate-300 px-3 py-2 text-sm"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-slate-700">"Confirm password"</label>
                            <input
                                type="password"
                                class="mt-1 block w-full rounded-md border border-slate-300 px-3 py-2 text-sm"
                                prop:value=confirm
                                on:input=move |ev| set_confirm.set(event_target_value(&ev))
                            />
                        </div>
                        <button
                            type="submit"
                            class="w-full py-2 px-4 rounded-md bg-indigo-600 text-white text-sm font-medium hover:bg-indigo-700 disabled:opacity-50"
                            disabled=move || pending.get()
                        >
                            {move || if pending.get() { "Saving..." } else { "Reset password" }}
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn reset_panel_explains_missing_token() {
        let html = render_to_string(|| view! { <ResetPasswordPanel /> });
        assert!(html.contains("Choose a new password"));
        assert!(html.contains("invalid or has expired"));
    }
}
