//! Wall-clock sleeping for timer tasks.
//!
//! WASM uses `gloo-timers` (backed by `setTimeout`); native builds use the
//! tokio timer driven by the desktop runtime.

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let ms = u32::try_from(ms).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
