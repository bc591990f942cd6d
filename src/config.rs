//! Runtime configuration, read once at startup and cached.
//!
//! In the browser an optional global (`window.__MAILOPS_ENV` or
//! `window.__MAILOPS_CONFIG`) takes precedence, then `./config.json` is
//! fetched; on host builds environment variables are consulted. Missing
//! values fall back to documented defaults.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_IDLE_TIMEOUT_MINUTES: f64 = 15.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub api_key: Option<String>,
    pub idle_timeout_minutes: Option<f64>,
}

static CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

pub async fn init() {
    ensure_loaded().await;
}

pub async fn await_api_base_url() -> String {
    ensure_loaded().await;
    api_base_url()
}

pub fn api_base_url() -> String {
    CONFIG
        .get()
        .and_then(|cfg| cfg.api_base_url.clone())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

pub fn api_key() -> Option<String> {
    CONFIG
        .get()
        .and_then(|cfg| cfg.api_key.clone())
        .filter(|key| !key.is_empty())
}

pub fn idle_timeout_ms() -> i64 {
    idle_minutes_to_ms(CONFIG.get().and_then(|cfg| cfg.idle_timeout_minutes))
}

/// Invalid or non-positive configured values fall back to the default.
pub fn idle_minutes_to_ms(minutes: Option<f64>) -> i64 {
    let minutes = minutes
        .filter(|m| m.is_finite() && *m > 0.0)
        .unwrap_or(DEFAULT_IDLE_TIMEOUT_MINUTES);
    (minutes * 60_000.0) as i64
}

async fn ensure_loaded() {
    if CONFIG.get().is_some() {
        return;
    }
    let config = load().await;
    let _ = CONFIG.set(config);
}

#[cfg(not(target_arch = "wasm32"))]
async fn load() -> RuntimeConfig {
    RuntimeConfig {
        api_base_url: std::env::var("MAILOPS_API_BASE_URL").ok(),
        api_key: std::env::var("MAILOPS_API_KEY").ok(),
        idle_timeout_minutes: std::env::var("MAILOPS_IDLE_TIMEOUT_MINUTES")
            .ok()
            .and_then(|raw| raw.parse().ok()),
    }
}

#[cfg(target_arch = "wasm32")]
async fn load() -> RuntimeConfig {
    if let Some(config) = snapshot_from_globals() {
        return config;
    }
    fetch_runtime_config().await.unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    read_global("__MAILOPS_ENV").or_else(|| read_global("__MAILOPS_CONFIG"))
}

#[cfg(target_arch = "wasm32")]
fn read_global(name: &str) -> Option<RuntimeConfig> {
    let window = web_sys::window()?;
    let raw = js_sys::Reflect::get(&window, &name.into()).ok()?;
    if raw.is_undefined() || raw.is_null() {
        return None;
    }
    let object = js_sys::Object::from(raw);
    Some(RuntimeConfig {
        api_base_url: string_key(&object, &["API_BASE_URL", "api_base_url"]),
        api_key: string_key(&object, &["API_KEY", "api_key"]),
        idle_timeout_minutes: string_key(&object, &["IDLE_TIMEOUT_MINUTES", "idle_timeout_minutes"])
            .and_then(|raw| raw.parse().ok()),
    })
}

#[cfg(target_arch = "wasm32")]
fn string_key(object: &js_sys::Object, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(object, &(*key).into())
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
            .and_then(|value| value.as_string())
    })
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let response = reqwest::get("./config.json").await.ok()?;
    if !response.status().is_success() {
        return None;
    }
    response.json::<RuntimeConfig>().await.ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_minutes_default_applies_when_unset_or_invalid() {
        let default_ms = (DEFAULT_IDLE_TIMEOUT_MINUTES * 60_000.0) as i64;
        assert_eq!(idle_minutes_to_ms(None), default_ms);
        assert_eq!(idle_minutes_to_ms(Some(0.0)), default_ms);
        assert_eq!(idle_minutes_to_ms(Some(-3.0)), default_ms);
        assert_eq!(idle_minutes_to_ms(Some(f64::NAN)), default_ms);
        assert_eq!(idle_minutes_to_ms(Some(f64::INFINITY)), default_ms);
    }

    #[test]
    fn idle_minutes_convert_to_millis() {
        assert_eq!(idle_minutes_to_ms(Some(1.0)), 60_000);
        assert_eq!(idle_minutes_to_ms(Some(0.5)), 30_000);
        assert_eq!(idle_minutes_to_ms(Some(30.0)), 1_800_000);
    }
}
