use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Routes
// ============================================================================

/// Path of the primes generation endpoint on the primes service
pub const PRIMES_PATH: &str = "/primes";

/// Name of the query parameter carrying the upper bound
pub const GENERATION_LIMIT_PARAM: &str = "generationLimit";

/// HTTP status the service answers with when primes were generated
pub const STATUS_OK: u16 = 200;

// ============================================================================
// Value types
// ============================================================================

/// Upper bound for prime generation, already known to be an integer.
///
/// Range checks (zero, negatives) are the service's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerationLimit(pub i64);

impl GenerationLimit {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for GenerationLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Query string of `GET /primes`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimesQuery {
    #[serde(rename = "generationLimit")]
    pub generation_limit: GenerationLimit,
}

/// Body returned by `GET /primes`, on success and on application errors alike
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimesResponse {
    pub message: String,
    #[serde(rename = "generatedPrimes")]
    pub generated_primes: Vec<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_decodes_service_body() {
        let body = r#"{"message":"primes generated!","generatedPrimes":[2,3,5,7]}"#;
        let response: PrimesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.message, "primes generated!");
        assert_eq!(response.generated_primes, vec![2, 3, 5, 7]);
    }

    #[test]
    fn test_response_decodes_error_body() {
        let body = r#"{"message":"generationLimit cannot be zero or less than zero","generatedPrimes":[]}"#;
        let response: PrimesResponse = serde_json::from_str(body).unwrap();
        assert!(response.generated_primes.is_empty());
    }

    #[test]
    fn test_response_rejects_missing_primes() {
        let body = r#"{"message":"oops"}"#;
        assert!(serde_json::from_str::<PrimesResponse>(body).is_err());
    }

    #[test]
    fn test_query_uses_service_param_name() {
        let query = PrimesQuery {
            generation_limit: GenerationLimit::new(10),
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json[GENERATION_LIMIT_PARAM], 10);
    }

    #[test]
    fn test_limit_displays_as_decimal() {
        assert_eq!(GenerationLimit::new(-3).to_string(), "-3");
        assert_eq!(GenerationLimit::new(100).to_string(), "100");
    }
}
