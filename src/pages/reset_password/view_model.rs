use super::repository;
use crate::api::ApiError;
use crate::utils::query;
use leptos::*;

#[derive(Clone)]
pub struct ResetPasswordViewModel {
    /// One-time credential lifted from the reset link, absent when the page
    /// was reached without one.
    pub token: Option<String>,
    pub error: RwSignal<Option<String>>,
    pub done_message: RwSignal<Option<String>>,
    pub reset_action: Action<(String, String), Result<String, ApiError>>,
}

pub fn use_reset_password_view_model() -> ResetPasswordViewModel {
    let token = query::current_query_param("token").filter(|token| !token.is_empty());
    let error = create_rw_signal(None::<String>);
    let done_message = create_rw_signal(None::<String>);

    let reset_action = create_action(|input: &(String, String)| {
        let (token, new_password) = input.clone();
        async move {
            repository::reset_password(token, new_password)
                .await
                .map(|response| response.message)
        }
    });

    create_effect(move |_| {
        if let Some(result) = reset_action.value().get() {
            match result {
                Ok(message) => {
                    error.set(None);
                    done_message.set(Some(message));
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        }
    });

    ResetPasswordViewModel {
        token,
        error,
        done_message,
        reset_action,
    }
}
