use contracts::domain::primes::{GenerationLimit, PrimesQuery, PrimesResponse, PRIMES_PATH};
use gloo_net::http::Request;

use crate::domain::primes::state::PrimesReply;

/// Build the primes service URL for a limit
///
/// # Example
/// ```text
/// primes_url("http://localhost:9091", GenerationLimit::new(10))
///     == "http://localhost:9091/primes?generationLimit=10"
/// ```
pub fn primes_url(base: &str, limit: GenerationLimit) -> Result<String, String> {
    let query = serde_qs::to_string(&PrimesQuery {
        generation_limit: limit,
    })
    .map_err(|e| format!("Failed to encode query: {}", e))?;

    Ok(format!("{}{}?{}", base, PRIMES_PATH, query))
}

/// Send one GET to the primes service.
///
/// Any status counts as a reply as long as the body parses; the error string
/// is the raw transport or decoding failure.
pub async fn fetch_primes(url: &str) -> Result<PrimesReply, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = response.status();
    let body = response
        .json::<PrimesResponse>()
        .await
        .map_err(|e| e.to_string())?;

    Ok(PrimesReply { status, body })
}
