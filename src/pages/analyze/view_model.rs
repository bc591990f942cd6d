use super::repository;
use crate::api::{AnalysisResponse, AnalyzeUpload, ApiError};
use leptos::*;

#[derive(Clone)]
pub struct AnalyzeViewModel {
    pub email_text: RwSignal<String>,
    pub upload: RwSignal<Option<AnalyzeUpload>>,
    pub result: RwSignal<Option<AnalysisResponse>>,
    pub error: RwSignal<Option<String>>,
    pub analyze_action: Action<(String, Option<AnalyzeUpload>), Result<AnalysisResponse, ApiError>>,
}

pub fn use_analyze_view_model() -> AnalyzeViewModel {
    let email_text = create_rw_signal(String::new());
    let upload = create_rw_signal(None::<AnalyzeUpload>);
    let result = create_rw_signal(None::<AnalysisResponse>);
    let error = create_rw_signal(None::<String>);

    let analyze_action = create_action(|input: &(String, Option<AnalyzeUpload>)| {
        let (email_text, upload) = input.clone();
        repository::analyze(email_text, upload)
    });

    create_effect(move |_| {
        if let Some(outcome) = analyze_action.value().get() {
            match outcome {
                Ok(analysis) => {
                    error.set(None);
                    result.set(Some(analysis));
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        }
    });

    AnalyzeViewModel {
        email_text,
        upload,
        result,
        error,
        analyze_action,
    }
}
