//! Console logging
//!
//! On wasm32 messages go to the browser console. Native builds (tests, host
//! harnesses) have no console import, so `log` is dropped and `warn` goes to
//! stderr.

#[cfg(target_arch = "wasm32")]
pub fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(_msg: &str) {}

#[cfg(target_arch = "wasm32")]
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(msg: &str) {
    eprintln!("[physlab] {}", msg);
}
