use leptos::{ev::SubmitEvent, *};

use super::utils::{self, AuthMode};
use super::view_model::use_auth_view_model;
use crate::components::{layout::ErrorMessage, notice::Notice};

#[component]
pub fn AuthPanel() -> impl IntoView {
    let vm = use_auth_view_model();
    let mode = vm.mode;
    let notice = vm.notice;
    let error = vm.error;
    let login_action = vm.login_action;
    let register_action = vm.register_action;
    let forgot_action = vm.forgot_action;

    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
    let (show_forgot, set_show_forgot) = create_signal(false);
    let (forgot_email, set_forgot_email) = create_signal(String::new());

    let pending = Signal::derive(move || {
        login_action.pending().get() || register_action.pending().get()
    });
    let is_register = move || mode.get() == AuthMode::Register;

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if is_register() {
            let username_value = username.get_untracked();
            if let Err(msg) = utils::validate_registration(
                &username_value,
                &email_value,
                &password_value,
                &confirm.get_untracked(),
            ) {
                error.set(Some(msg));
                return;
            }
            error.set(None);
            register_action.dispatch((username_value, email_value, password_value));
        } else {
            if let Err(msg) = utils::validate_login(&email_value, &password_value) {
                error.set(Some(msg));
                return;
            }
            error.set(None);
            login_action.dispatch((email_value, password_value));
        }
    };

    let handle_forgot = move |ev: SubmitEvent| {
        ev.prevent_default();
        let address = forgot_email.get_untracked();
        if address.trim().is_empty() || !address.contains('@') {
            error.set(Some("Enter a valid email address.".into()));
            return;
        }
        error.set(None);
        forgot_action.dispatch(address);
    };

    view! {
        <div class="min-h-screen bg-slate-50 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white rounded-lg shadow p-8">
                <h1 class="text-2xl font-semibold text-slate-900 mb-6">
                    {move || if is_register() { "Create an account" } else { "Sign in to MailOps" }}
                </h1>
                <Notice message=notice />
                {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}
                <form on:submit=handle_submit class="space-y-4">
                    <Show when=is_register>
                        <div>
                            <label class="block text-sm font-medium text-slate-700">"Username"</label>
                            <input
                                type="text"
                                class="mt-1 block w-full rounded-md border border-slate-300 px-3 py-2 text-sm"
                                prop:value=username
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                            />
                        </div>
                    </Show>
                    <div>
                        <label class="block text-sm font-medium text-slate-700">"Email"</label>
                        <input
                            type="email"
                            class="mt-1 block w-full rounded-md border border-slate-300 px-3 py-2 text-sm"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-slate-700">"Password"</label>
                        <input
                            type="password"
                            class="mt-1 block w-full rounded-md border border-slate-300 px-3 py-2 text-sm"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <Show when=is_register>
                        <div>
                            <label class="block text-sm font-medium text-slate-700">"Confirm password"</label>
                            <input
                                type="password"
                                class="mt-1 block w-full rounded-md border border-slate-300 px-3 py-2 text-sm"
                                prop:value=confirm
                                on:input=move |ev| set_confirm.set(event_target_value(&ev))
                            />
                        </div>
                    </Show>
                    <button
                        type="submit"
                        class="w-full py-2 px-4 rounded-md bg-indigo-600 text-white text-sm font-medium hover:bg-indigo-700 disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || {
                            if pending.get() {
                                "Please wait..."
                            } else if is_register() {
                                "Create account"
                            } else {
                                "Sign in"
                            }
                        }}
                    </button>
                </form>
                <div class="mt-4 flex justify-between text-sm">
                    <button
                        class="text-indigo-600 hover:text-indigo-800"
                        on:click=move |_| {
                            mode.update(|current| {
                                *current = match *current {
                                    AuthMode::Login => AuthMode::Register,
                                    AuthMode::Register => AuthMode::Login,
                                }
                            });
                            error.set(None);
                        }
                    >
                        {move || {
                            if is_register() {
                                "Already have an account? Sign in"
                            } else {
                                "Need an account? Register"
                            }
                        }}
                    </button>
                    <Show when=move || !is_register()>
                        <button
                            class="text-slate-500 hover:text-slate-900"
                            on:click=move |_| set_show_forgot.update(|open| *open = !*open)
                        >
                            "Forgot password?"
                        </button>
                    </Show>
                </div>
                <Show when=move || show_forgot.get() && !is_register()>
                    <form on:submit=handle_forgot class="mt-6 border-t border-slate-200 pt-4 space-y-3">
                        <label class="block text-sm font-medium text-slate-700">
                            "We will email you a reset link"
                        </label>
                        <input
                            type="email"
                            class="block w-full rounded-md border border-slate-300 px-3 py-2 text-sm"
                            prop:value=forgot_email
                            on:input=move |ev| set_forgot_email.set(event_target_value(&ev))
                        />
                        <button
                            type="submit"
                            class="py-2 px-4 rounded-md border border-slate-300 text-sm font-medium text-slate-700 hover:bg-slate-50 disabled:opacity-50"
                            disabled=move || forgot_action.pending().get()
                        >
                            {move || {
                                if forgot_action.pending().get() {
                                    "Sending..."
                                } else {
                                    "Send reset link"
                                }
                            }}
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}
