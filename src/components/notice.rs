use leptos::*;

/// Dismissible banner for one-shot messages carried in the query string,
/// such as the sign-out notices from the session monitor.
#[component]
pub fn Notice(message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="bg-amber-50 border border-amber-200 text-amber-800 px-4 py-3 rounded mb-4 flex justify-between items-start">
                <p class="text-sm">{move || message.get().unwrap_or_default()}</p>
                <button
                    class="ml-4 text-amber-500 hover:text-amber-800 text-sm font-medium"
                    on:click=move |_| message.set(None)
                >
                    "Dismiss"
                </button>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn notice_renders_message_when_present() {
        let html = render_to_string(move || {
            let message = create_rw_signal(Some("Session ended.".to_string()));
            view! { <Notice message=message /> }
        });
        assert!(html.contains("Session ended."));
        assert!(html.contains("Dismiss"));
    }

    #[test]
    fn notice_hidden_when_empty() {
        let html = render_to_string(move || {
            let message = create_rw_signal(None::<String>);
            view! { <Notice message=message /> }
        });
        assert!(!html.contains("Dismiss"));
    }
}
