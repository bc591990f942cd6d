//! Key-value persistence backing the session slots.
//!
//! On wasm this is the browser's localStorage, so a session survives page
//! reloads. Host builds (SSR rendering and tests) use a thread-local map so
//! parallel tests cannot observe each other's sessions.

#[cfg(target_arch = "wasm32")]
mod medium {
    use web_sys::Storage;

    fn local_storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub fn read(key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    pub fn write(key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    pub fn remove(key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod medium {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn read(key: &str) -> Option<String> {
        STORE.with(|store| store.borrow().get(key).cloned())
    }

    pub fn write(key: &str, value: &str) {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_string(), value.to_string());
        });
    }

    pub fn remove(key: &str) {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
    }
}

pub fn read(key: &str) -> Option<String> {
    medium::read(key)
}

pub fn write(key: &str, value: &str) {
    medium::write(key, value);
}

pub fn remove(key: &str) {
    medium::remove(key);
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_storage_round_trip() {
        write("storage-test.key", "value");
        assert_eq!(read("storage-test.key").as_deref(), Some("value"));
        remove("storage-test.key");
        assert_eq!(read("storage-test.key"), None);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_round_trips() {
        write("storage-test.key", "value");
        assert_eq!(read("storage-test.key").as_deref(), Some("value"));
        remove("storage-test.key");
        assert_eq!(read("storage-test.key"), None);
    }

    #[test]
    fn removing_a_missing_key_is_a_no_op() {
        remove("storage-test.missing");
        assert_eq!(read("storage-test.missing"), None);
    }
}
