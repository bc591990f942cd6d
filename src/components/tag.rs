use leptos::*;

/// Small colored pill used for analysis categories.
#[component]
pub fn Tag(variant: &'static str, children: Children) -> impl IntoView {
    let class = format!(
        "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {}",
        variant_classes(variant)
    );
    view! { <span class=class>{children()}</span> }
}

fn variant_classes(variant: &str) -> &'static str {
    match variant {
        "productive" => "bg-green-100 text-green-800",
        "unproductive" => "bg-slate-100 text-slate-600",
        _ => "bg-indigo-100 text-indigo-800",
    }
}
