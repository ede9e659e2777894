//! View state of the primes form and the reducer that drives it
//!
//! All transitions go through [`update`], which never touches the network:
//! a valid submission returns a [`FetchPrimes`] effect for the caller to run,
//! and the caller feeds the outcome back as [`PrimesEvent::ReplyReceived`].

use contracts::domain::primes::{GenerationLimit, PrimesResponse, STATUS_OK};

use super::validation::{parse_generation_limit, INVALID_LIMIT_MESSAGE};

/// Legend text before anything has been submitted
pub const INITIAL_MESSAGE: &str = "no primes generated yet!";

/// Prefix of the legend when the service could not be reached or understood
pub const SERVICE_UNAVAILABLE_PREFIX: &str = "Primes service not available: ";

/// Visual treatment of the status legend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageStyle {
    #[default]
    Ok,
    Error,
}

/// Identifies one submission; later submissions get larger ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SubmissionId(pub u64);

impl SubmissionId {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// A well-formed reply from the primes service, whatever its status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimesReply {
    pub status: u16,
    pub body: PrimesResponse,
}

/// Everything the form renders from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimesState {
    /// Raw input field text, unvalidated
    pub generation_limit: String,
    pub message: String,
    pub message_style: MessageStyle,
    pub generated_primes: Vec<u64>,
    /// Latest submission; replies to older ones are dropped
    pub latest_submission: SubmissionId,
}

impl Default for PrimesState {
    fn default() -> Self {
        Self {
            generation_limit: String::new(),
            message: INITIAL_MESSAGE.to_string(),
            message_style: MessageStyle::Ok,
            generated_primes: Vec::new(),
            latest_submission: SubmissionId::default(),
        }
    }
}

impl PrimesState {
    pub fn is_error(&self) -> bool {
        self.message_style == MessageStyle::Error
    }

    fn fail(self, message: String) -> Self {
        Self {
            message,
            message_style: MessageStyle::Error,
            generated_primes: Vec::new(),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimesEvent {
    /// The input field changed
    LimitChanged(String),
    /// The form was submitted
    Submitted,
    /// The request issued for `submission` finished.
    /// `Err` carries the transport failure detail.
    ReplyReceived {
        submission: SubmissionId,
        outcome: Result<PrimesReply, String>,
    },
}

/// Request the caller must issue after a valid submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPrimes {
    pub submission: SubmissionId,
    pub limit: GenerationLimit,
}

/// Apply one event to the state.
///
/// Returns the next state and, for a valid submission only, the single request
/// to send.
pub fn update(state: PrimesState, event: PrimesEvent) -> (PrimesState, Option<FetchPrimes>) {
    match event {
        PrimesEvent::LimitChanged(generation_limit) => (
            PrimesState {
                generation_limit,
                ..state
            },
            None,
        ),
        PrimesEvent::Submitted => {
            let submission = state.latest_submission.next();
            let state = PrimesState {
                latest_submission: submission,
                ..state
            };

            match parse_generation_limit(&state.generation_limit) {
                Some(limit) => (state, Some(FetchPrimes { submission, limit })),
                None => (state.fail(INVALID_LIMIT_MESSAGE.to_string()), None),
            }
        }
        PrimesEvent::ReplyReceived {
            submission,
            outcome,
        } => {
            if submission != state.latest_submission {
                return (state, None);
            }

            let state = match outcome {
                Ok(reply) => PrimesState {
                    message: reply.body.message,
                    message_style: if reply.status == STATUS_OK {
                        MessageStyle::Ok
                    } else {
                        MessageStyle::Error
                    },
                    generated_primes: reply.body.generated_primes,
                    ..state
                },
                Err(detail) => state.fail(format!("{}{}", SERVICE_UNAVAILABLE_PREFIX, detail)),
            };
            (state, None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(limit: &str) -> PrimesState {
        update(
            PrimesState::default(),
            PrimesEvent::LimitChanged(limit.to_string()),
        )
        .0
    }

    fn reply(status: u16, body: &str) -> Result<PrimesReply, String> {
        Ok(PrimesReply {
            status,
            body: serde_json::from_str(body).unwrap(),
        })
    }

    #[test]
    fn test_initial_state() {
        let state = PrimesState::default();
        assert_eq!(state.generation_limit, "");
        assert_eq!(state.message, INITIAL_MESSAGE);
        assert_eq!(state.message_style, MessageStyle::Ok);
        assert!(state.generated_primes.is_empty());
    }

    #[test]
    fn test_typing_only_touches_limit() {
        let before = PrimesState {
            message: "primes generated!".to_string(),
            generated_primes: vec![2, 3],
            ..PrimesState::default()
        };
        let (after, effect) = update(before.clone(), PrimesEvent::LimitChanged("12".into()));
        assert!(effect.is_none());
        assert_eq!(after.generation_limit, "12");
        assert_eq!(after.message, before.message);
        assert_eq!(after.generated_primes, before.generated_primes);
    }

    #[test]
    fn test_invalid_submission_sends_nothing() {
        let (state, effect) = update(typed("abc"), PrimesEvent::Submitted);
        assert!(effect.is_none());
        assert_eq!(state.message, INVALID_LIMIT_MESSAGE);
        assert_eq!(state.message_style, MessageStyle::Error);
        assert!(state.generated_primes.is_empty());
        assert_eq!(state.generation_limit, "abc");
    }

    #[test]
    fn test_invalid_submission_clears_previous_primes() {
        let before = PrimesState {
            generation_limit: "".to_string(),
            generated_primes: vec![2, 3, 5],
            ..PrimesState::default()
        };
        let (state, effect) = update(before, PrimesEvent::Submitted);
        assert!(effect.is_none());
        assert!(state.generated_primes.is_empty());
    }

    #[test]
    fn test_successful_round_trip() {
        let (state, effect) = update(typed("10"), PrimesEvent::Submitted);
        let fetch = effect.expect("valid limit must issue a request");
        assert_eq!(fetch.limit, GenerationLimit::new(10));

        let (state, effect) = update(
            state,
            PrimesEvent::ReplyReceived {
                submission: fetch.submission,
                outcome: reply(
                    200,
                    r#"{"message":"primes generated!","generatedPrimes":[2,3,5,7]}"#,
                ),
            },
        );
        assert!(effect.is_none());
        assert_eq!(state.message, "primes generated!");
        assert_eq!(state.message_style, MessageStyle::Ok);
        assert_eq!(state.generated_primes, vec![2, 3, 5, 7]);
    }

    #[test]
    fn test_application_error_uses_service_message() {
        let (state, effect) = update(typed("0"), PrimesEvent::Submitted);
        let fetch = effect.expect("zero is left to the service");

        let (state, _) = update(
            state,
            PrimesEvent::ReplyReceived {
                submission: fetch.submission,
                outcome: reply(
                    422,
                    r#"{"message":"generationLimit cannot be zero or less than zero","generatedPrimes":[]}"#,
                ),
            },
        );
        assert_eq!(state.message, "generationLimit cannot be zero or less than zero");
        assert_eq!(state.message_style, MessageStyle::Error);
        assert!(state.generated_primes.is_empty());
    }

    #[test]
    fn test_transport_failure() {
        let before = PrimesState {
            generated_primes: vec![2, 3],
            ..typed("10")
        };
        let (state, effect) = update(before, PrimesEvent::Submitted);
        let fetch = effect.unwrap();

        let (state, _) = update(
            state,
            PrimesEvent::ReplyReceived {
                submission: fetch.submission,
                outcome: Err("TypeError: Failed to fetch".to_string()),
            },
        );
        assert_eq!(
            state.message,
            "Primes service not available: TypeError: Failed to fetch"
        );
        assert!(state.is_error());
        assert!(state.generated_primes.is_empty());
    }

    #[test]
    fn test_stale_reply_is_dropped() {
        let (state, first) = update(typed("10"), PrimesEvent::Submitted);
        let (state, _) = update(state, PrimesEvent::LimitChanged("20".into()));
        let (state, second) = update(state, PrimesEvent::Submitted);
        let (first, second) = (first.unwrap(), second.unwrap());
        assert!(second.submission > first.submission);

        let (state, _) = update(
            state,
            PrimesEvent::ReplyReceived {
                submission: second.submission,
                outcome: reply(
                    200,
                    r#"{"message":"primes generated!","generatedPrimes":[2,3,5,7,11,13,17,19]}"#,
                ),
            },
        );
        let (state, _) = update(
            state,
            PrimesEvent::ReplyReceived {
                submission: first.submission,
                outcome: Err("late".to_string()),
            },
        );
        assert_eq!(state.message_style, MessageStyle::Ok);
        assert_eq!(state.generated_primes.len(), 8);
    }

    #[test]
    fn test_invalid_submission_supersedes_pending_request() {
        let (state, pending) = update(typed("10"), PrimesEvent::Submitted);
        let (state, _) = update(state, PrimesEvent::LimitChanged("abc".into()));
        let (state, _) = update(state, PrimesEvent::Submitted);

        let (state, _) = update(
            state,
            PrimesEvent::ReplyReceived {
                submission: pending.unwrap().submission,
                outcome: reply(
                    200,
                    r#"{"message":"primes generated!","generatedPrimes":[2,3,5,7]}"#,
                ),
            },
        );
        assert_eq!(state.message, INVALID_LIMIT_MESSAGE);
        assert!(state.generated_primes.is_empty());
    }

    #[test]
    fn test_error_style_follows_last_operation() {
        let (state, _) = update(typed("abc"), PrimesEvent::Submitted);
        assert!(state.is_error());

        let (state, _) = update(state, PrimesEvent::LimitChanged("10".into()));
        let (state, effect) = update(state, PrimesEvent::Submitted);
        let (state, _) = update(
            state,
            PrimesEvent::ReplyReceived {
                submission: effect.unwrap().submission,
                outcome: reply(200, r#"{"message":"ok","generatedPrimes":[2,3,5,7]}"#),
            },
        );
        assert!(!state.is_error());
    }
}
