use super::repository;
use super::utils::{normalize_mode, AuthMode};
use crate::api::{ApiError, TokenResponse};
use crate::state::{auth, session};
use crate::utils::query;
use leptos::*;

#[derive(Clone)]
pub struct AuthViewModel {
    pub mode: RwSignal<AuthMode>,
    pub notice: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<(String, String), Result<TokenResponse, ApiError>>,
    pub register_action: Action<(String, String, String), Result<TokenResponse, ApiError>>,
    pub forgot_action: Action<String, Result<String, ApiError>>,
}

pub fn use_auth_view_model() -> AuthViewModel {
    let mode = create_rw_signal(normalize_mode(
        query::current_query_param("mode").as_deref(),
    ));
    let notice = create_rw_signal(query::current_query_param("notice"));
    let error = create_rw_signal(None::<String>);
    let auth = auth::use_auth();

    let login_action = create_action(|input: &(String, String)| {
        let (email, password) = input.clone();
        repository::login(email, password)
    });
    let register_action = create_action(|input: &(String, String, String)| {
        let (username, email, password) = input.clone();
        repository::register(username, email, password)
    });
    let forgot_action = create_action(|email: &String| {
        let email = email.clone();
        async move {
            repository::forgot_password(email)
                .await
                .map(|response| response.message)
        }
    });

    create_effect(move |_| {
        let outcome = login_action
            .value()
            .get()
            .or_else(|| register_action.value().get());
        if let Some(result) = outcome {
            match result {
                Ok(_) => {
                    error.set(None);
                    if let Some(user) = session::current_user() {
                        auth::sign_in(auth, user);
                    }
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/app/analyze");
                    }
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = forgot_action.value().get() {
            match result {
                Ok(message) => {
                    error.set(None);
                    notice.set(Some(message));
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        }
    });

    AuthViewModel {
        mode,
        notice,
        error,
        login_action,
        register_action,
        forgot_action,
    }
}
