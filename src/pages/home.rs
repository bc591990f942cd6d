use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-50 flex flex-col">
            <main class="flex-1 flex items-center justify-center px-4">
                <div class="max-w-2xl text-center">
                    <h1 class="text-4xl font-bold text-slate-900">
                        "MailOps"
                    </h1>
                    <p class="mt-4 text-lg text-slate-500">
                        "Paste an email or upload a file and get an instant read on whether it needs a reply, plus a suggested subject and response."
                    </p>
                    <div class="mt-8 flex justify-center space-x-4">
                        <a
                            href="/auth?mode=login"
                            class="px-6 py-3 rounded-md bg-indigo-600 text-white text-sm font-medium hover:bg-indigo-700"
                        >
                            "Sign in"
                        </a>
                        <a
                            href="/auth?mode=register"
                            class="px-6 py-3 rounded-md border border-slate-300 text-slate-700 text-sm font-medium hover:bg-white"
                        >
                            "Create an account"
                        </a>
                    </div>
                </div>
            </main>
        </div>
    }
}
