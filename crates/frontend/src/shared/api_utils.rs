//! Primes service location
//!
//! The base URL is taken from the `PRIMES_SERVICE_URL` environment variable at
//! build time. Without it the service is expected on port 9091 of the host
//! serving the page.

/// Port the primes service listens on by default
pub const DEFAULT_SERVICE_PORT: u16 = 9091;

/// Get the base URL for primes service requests
///
/// # Returns
/// - `PRIMES_SERVICE_URL` from the build environment, without trailing `/`
/// - otherwise the page's protocol and hostname with [`DEFAULT_SERVICE_PORT`],
///   like "http://localhost:9091"
/// - "http://localhost:9091" if window is not available
pub fn api_base() -> String {
    if let Some(configured) = option_env!("PRIMES_SERVICE_URL") {
        return normalize_base(configured);
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return format!("http://localhost:{}", DEFAULT_SERVICE_PORT),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_SERVICE_PORT)
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
