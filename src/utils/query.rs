//! Minimal query-string access for pages driven by URL parameters.

use percent_encoding::percent_decode_str;

/// Parses a query string (with or without the leading '?') into key/value
/// pairs, percent-decoding both sides. '+' is treated as a space.
pub fn parse_query(search: &str) -> Vec<(String, String)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

/// Value of the first occurrence of `name` in `search`, if any.
pub fn query_value(search: &str, name: &str) -> Option<String> {
    parse_query(search)
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}

/// Reads a query parameter from the current browser location. Always `None`
/// outside the browser.
pub fn current_query_param(name: &str) -> Option<String> {
    current_search().and_then(|search| query_value(&search, name))
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

#[cfg(target_arch = "wasm32")]
fn current_search() -> Option<String> {
    web_sys::window()?.location().search().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn current_search() -> Option<String> {
    None
}
