//! Console helpers shared by components.

pub fn clog(msg: &str) {
    gloo::console::debug!(msg);
}

pub fn cwarn(msg: &str) {
    gloo::console::warn!(msg);
}

/// Milliseconds since the epoch, for request timing in logs.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}
