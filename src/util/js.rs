//! Browser call helpers.

/// Convert a fallible web-sys call into an `Option`, logging the failure.
pub fn logged<T>(result: Result<T, wasm_bindgen::JsValue>, context: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            leptos::logging::warn!("{context} failed: {e:?}");
            None
        }
    }
}
