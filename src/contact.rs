use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Shown when the relay rejects a submission without saying why.
pub const FALLBACK_ERROR: &str = "Что-то пошло не так";
/// Shown for every transport-level failure.
pub const NETWORK_ERROR: &str = "Ошибка сети. Попробуйте снова.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Pair the fields with the relay access key for a single request.
    pub fn submission<'a>(&'a self, access_key: &'a str) -> Submission<'a> {
        Submission {
            name: &self.name,
            email: &self.email,
            message: &self.message,
            access_key,
        }
    }
}

/// Form-urlencoded body posted to the relay.
#[derive(Debug, Serialize)]
pub struct Submission<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
    pub access_key: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Outcome {
    #[default]
    Idle,
    Success,
    Error(String),
}

impl Outcome {
    /// Map a finished request onto what the form should show.
    ///
    /// `Err` covers everything that kept a well-formed reply from arriving,
    /// so it always collapses to [`NETWORK_ERROR`].
    pub fn from_reply<E: Display>(reply: Result<RelayResponse, E>) -> Self {
        match reply {
            Ok(RelayResponse { success: true, .. }) => Self::Success,
            Ok(RelayResponse { message, .. }) => Self::Error(
                message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| FALLBACK_ERROR.to_string()),
            ),
            Err(err) => {
                log::warn!("contact submission failed: {err}");
                Self::Error(NETWORK_ERROR.to_string())
            }
        }
    }
}

/// Observable state of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    in_flight: usize,
    outcome: Outcome,
}

impl SubmissionState {
    pub fn begin(&mut self) {
        self.in_flight += 1;
        if matches!(self.outcome, Outcome::Error(_)) {
            self.outcome = Outcome::Idle;
        }
    }

    pub fn finish(&mut self, outcome: Outcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.outcome = outcome;
    }

    pub fn reset(&mut self) {
        self.outcome = Outcome::Idle;
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight > 0
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }

    pub fn is_error(&self) -> bool {
        matches!(self.outcome, Outcome::Error(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepted() -> Result<RelayResponse, String> {
        Ok(RelayResponse {
            success: true,
            message: Some("Email sent successfully!".to_string()),
        })
    }

    fn rejected(message: Option<&str>) -> Result<RelayResponse, String> {
        Ok(RelayResponse {
            success: false,
            message: message.map(str::to_string),
        })
    }

    #[test]
    fn test_accepted_submission_goes_through_submitting_to_success() {
        let mut state = SubmissionState::default();
        assert_eq!(state.outcome(), &Outcome::Idle);
        assert!(!state.is_submitting());

        state.begin();
        assert!(state.is_submitting());
        assert_eq!(state.outcome(), &Outcome::Idle);

        state.finish(Outcome::from_reply(accepted()));
        assert!(!state.is_submitting());
        assert!(state.is_success());
        assert!(!state.is_error());
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn test_rejection_surfaces_relay_message() {
        let mut state = SubmissionState::default();
        state.begin();
        state.finish(Outcome::from_reply(rejected(Some("X"))));

        assert!(state.is_error());
        assert_eq!(state.error_message(), Some("X"));
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_rejection_without_message_uses_fallback() {
        assert_eq!(
            Outcome::from_reply(rejected(None)),
            Outcome::Error(FALLBACK_ERROR.to_string())
        );
        assert_eq!(
            Outcome::from_reply(rejected(Some(""))),
            Outcome::Error(FALLBACK_ERROR.to_string())
        );
    }

    #[test]
    fn test_transport_failure_uses_network_message() {
        let mut state = SubmissionState::default();
        state.begin();
        let reply: Result<RelayResponse, String> = Err("connection refused".to_string());
        state.finish(Outcome::from_reply(reply));

        assert_eq!(state.error_message(), Some(NETWORK_ERROR));
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_resubmit_clears_previous_error() {
        let mut state = SubmissionState::default();
        state.begin();
        state.finish(Outcome::from_reply(rejected(Some("bad email"))));
        assert!(state.is_error());

        state.begin();
        assert!(!state.is_error());
        assert_eq!(state.error_message(), None);
        assert!(state.is_submitting());
    }

    #[test]
    fn test_reset_from_success_returns_to_idle() {
        let mut state = SubmissionState::default();
        state.begin();
        state.finish(Outcome::Success);
        state.reset();

        assert_eq!(state, SubmissionState::default());
        assert!(!state.is_error());
    }

    #[test]
    fn test_reset_clears_error_message() {
        let mut state = SubmissionState::default();
        state.begin();
        state.finish(Outcome::Error("X".to_string()));
        state.reset();

        assert_eq!(state.outcome(), &Outcome::Idle);
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn test_overlapping_submits_keep_flag_until_last_finishes() {
        let mut state = SubmissionState::default();
        state.begin();
        state.begin();
        assert!(state.is_submitting());

        state.finish(Outcome::from_reply(accepted()));
        assert!(state.is_submitting());

        state.finish(Outcome::from_reply(rejected(Some("duplicate"))));
        assert!(!state.is_submitting());
        assert_eq!(state.error_message(), Some("duplicate"));

        // a stray completion never underflows
        state.finish(Outcome::Success);
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_submission_carries_access_key() {
        let form = ContactForm {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            message: "Hello".to_string(),
        };
        let submission = form.submission("key-123");
        assert_eq!(submission.name, "Ann");
        assert_eq!(submission.email, "ann@example.com");
        assert_eq!(submission.message, "Hello");
        assert_eq!(submission.access_key, "key-123");
    }

    #[test]
    fn test_relay_response_without_message_decodes() {
        let reply: RelayResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(reply.success);
        assert_eq!(reply.message, None);
    }
}
