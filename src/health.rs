use std::env;
use std::time::Duration;

const DEFAULT_HEALTH_URL: &str = "http://127.0.0.1:8000/api/health";

fn health_url() -> String {
    env::var("ROSTER_HEALTH_URL").unwrap_or_else(|_| DEFAULT_HEALTH_URL.to_string())
}

/// One best-effort ping at startup. The outcome is discarded: no retry,
/// nothing surfaced, nothing downstream depends on it.
pub fn ping() {
    let _ = ureq::get(&health_url())
        .timeout(Duration::from_secs(3))
        .call();
}
