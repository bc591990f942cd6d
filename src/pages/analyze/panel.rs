use leptos::{ev::SubmitEvent, *};

use super::utils::{category_variant, validate_submission};
use super::view_model::use_analyze_view_model;
use crate::components::{layout::ErrorMessage, tag::Tag};

#[component]
pub fn AnalyzePanel() -> impl IntoView {
    let vm = use_analyze_view_model();
    let email_text = vm.email_text;
    let upload = vm.upload;
    let result = vm.result;
    let error = vm.error;
    let analyze_action = vm.analyze_action;
    let pending = analyze_action.pending();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let text = email_text.get_untracked();
        let file = upload.get_untracked();
        if let Err(msg) = validate_submission(&text, file.is_some()) {
            error.set(Some(msg));
            return;
        }
        error.set(None);
        analyze_action.dispatch((text, file));
    };

    let on_file_change = move |ev: web_sys::Event| {
        #[cfg(target_arch = "wasm32")]
        capture_selected_file(&ev, upload);
        #[cfg(not(target_arch = "wasm32"))]
        let _ = &ev;
    };

    view! {
        <div class="space-y-6">
            <div class="bg-white rounded-lg shadow p-6">
                <h2 class="text-lg font-semibold text-slate-900 mb-4">"Analyze an email"</h2>
                {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}
                <form on:submit=handle_submit class="space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-slate-700">"Email text"</label>
                        <textarea
                            rows=8
                            class="mt-1 block w-full rounded-md border border-slate-300 px-3 py-2 text-sm"
                            placeholder="Paste the email body here"
                            prop:value=move || email_text.get()
                            on:input=move |ev| email_text.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-slate-700">"Or attach a file"</label>
                        <input
                            type="file"
                            accept=".txt,.pdf"
                            class="mt-1 block w-full text-sm text-slate-500"
                            on:change=on_file_change
                        />
                        {move || {
                            upload.get().map(|file| {
                                view! {
                                    <p class="mt-1 text-xs text-slate-400">{file.file_name}</p>
                                }
                            })
                        }}
                    </div>
                    <div class="flex space-x-3">
                        <button
                            type="submit"
                            class="py-2 px-4 rounded-md bg-indigo-600 text-white text-sm font-medium hover:bg-indigo-700 disabled:opacity-50"
                            disabled=move || pending.get()
                        >
                            {move || if pending.get() { "Analyzing..." } else { "Analyze" }}
                        </button>
                        <button
                            type="button"
                            class="py-2 px-4 rounded-md border border-slate-300 text-sm font-medium text-slate-700 hover:bg-slate-50"
                            on:click=move |_| {
                                email_text.set(String::new());
                                upload.set(None);
                                result.set(None);
                                error.set(None);
                            }
                        >
                            "Clear"
                        </button>
                    </div>
                </form>
            </div>
            {move || {
                result.get().map(|analysis| {
                    let variant = category_variant(&analysis.category);
                    view! {
                        <div class="bg-white rounded-lg shadow p-6 space-y-4">
                            <div class="flex items-center justify-between">
                                <h2 class="text-lg font-semibold text-slate-900">"Result"</h2>
                                <Tag variant=variant>{analysis.category.clone()}</Tag>
                            </div>
                            <div>
                                <h3 class="text-sm font-medium text-slate-700">"Suggested subject"</h3>
                                <p class="mt-1 text-sm text-slate-900">{analysis.suggested_subject.clone()}</p>
                            </div>
                            <div>
                                <h3 class="text-sm font-medium text-slate-700">"Suggested reply"</h3>
                                <p class="mt-1 text-sm text-slate-900 whitespace-pre-line">{analysis.suggested_reply.clone()}</p>
                            </div>
                        </div>
                    }
                })
            }}
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
fn capture_selected_file(ev: &web_sys::Event, upload: RwSignal<Option<crate::api::AnalyzeUpload>>) {
    use crate::api::AnalyzeUpload;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let input = match ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
    {
        Some(input) => input,
        None => return,
    };
    let file = match input.files().and_then(|files| files.get(0)) {
        Some(file) => file,
        None => {
            upload.set(None);
            return;
        }
    };
    let file_name = file.name();
    spawn_local(async move {
        match JsFuture::from(file.array_buffer()).await {
            Ok(buffer) => {
                let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
                upload.set(Some(AnalyzeUpload { file_name, bytes }));
            }
            Err(_) => {
                log::warn!("could not read the selected file");
                upload.set(None);
            }
        }
    });
}
