use leptos::*;

use crate::state::auth::{self, use_auth};

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let username = move || {
        auth.get()
            .user
            .map(|user| user.username)
            .unwrap_or_default()
    };
    let on_logout = move |_| {
        auth::sign_out(auth);
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/auth?mode=login");
        }
    };
    view! {
        <header class="bg-white shadow-sm border-b border-slate-200">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/app/analyze" class="text-xl font-semibold text-slate-900">
                        "MailOps"
                    </a>
                    <nav class="flex items-center space-x-4">
                        <a href="/app/analyze" class="text-slate-500 hover:text-slate-900 px-3 py-2 rounded-md text-sm font-medium">
                            "Analyze"
                        </a>
                        <a href="/app/profile" class="text-slate-500 hover:text-slate-900 px-3 py-2 rounded-md text-sm font-medium">
                            {username}
                        </a>
                        <button
                            on:click=on_logout
                            class="text-slate-500 hover:text-slate-900 px-3 py-2 rounded-md text-sm font-medium"
                        >
                            "Sign out"
                        </button>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-50 flex flex-col">
            <Header/>
            <main class="max-w-5xl w-full mx-auto py-6 px-4 sm:px-6 lg:px-8 flex-1">
                {children()}
            </main>
            <Footer/>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-slate-200 bg-white">
            <div class="max-w-5xl mx-auto px-4 py-4 text-sm text-slate-400">
                "MailOps — email triage, sorted."
            </div>
        </footer>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-indigo-600"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}
