#[cfg(target_arch = "wasm32")]
fn main() {
    use leptos::*;
    use mailops_frontend::{config, App};

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("starting MailOps frontend");

    wasm_bindgen_futures::spawn_local(async {
        config::init().await;
        log::info!("runtime config initialized");
        mount_to_body(|| view! { <App/> });
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {}
