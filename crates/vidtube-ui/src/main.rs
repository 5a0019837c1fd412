#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! VidTube browser client.
//!
//! On wasm32 this mounts the app. Native builds only report where a browser
//! build would send its requests.

#[cfg(target_arch = "wasm32")]
fn main() {
    vidtube_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    let config = vidtube_ui::core::config::ClientConfig::default();
    native_notice(&mut std::io::stderr().lock(), &config)
}

#[cfg(not(target_arch = "wasm32"))]
fn native_notice(
    out: &mut impl std::io::Write,
    config: &vidtube_ui::core::config::ClientConfig,
) -> std::io::Result<()> {
    writeln!(
        out,
        "vidtube-ui renders in the browser; build it for wasm32-unknown-unknown (e.g. `trunk serve`)."
    )?;
    writeln!(out, "default API base: {}", config.base_url)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use vidtube_ui::core::config::ClientConfig;

    #[test]
    fn native_notice_names_target_and_api_base() -> std::io::Result<()> {
        let mut out = Vec::new();
        native_notice(&mut out, &ClientConfig::default())?;
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("wasm32-unknown-unknown"));
        assert!(text.contains("default API base: http://localhost:8000/api/v1"));
        Ok(())
    }
}
