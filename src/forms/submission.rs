// SPDX-License-Identifier: MPL-2.0
//! Form submission lifecycle.
//!
//! [`FormState`] wraps the data of one form together with its validation
//! errors and [`SubmissionState`]. Submission is simulated: [`simulate`]
//! resolves after a fixed delay, the caller then calls
//! [`FormState::finish`]. Following the sub-component pattern used by the
//! UI, [`FormState::handle`] turns a [`Message`] into an [`Effect`] for the
//! parent to act on.

use super::validation::{FieldErrors, Validate};
use std::time::Duration;

/// Artificial latency of a simulated submission.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// Messages for a form.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A text field was edited.
    FieldChanged(&'static str, String),
    Submit,
    /// The simulated submission completed.
    Finished,
    Close,
    Reset,
}

/// Effects produced by form handling.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Data is valid; the parent must start the submission.
    StartSubmission,
    /// Validation failed; errors are stored on the form.
    Invalid,
    /// The submission completed.
    Submitted,
    /// The form may be dismissed.
    Close,
}

/// Data, errors and lifecycle of one form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<D> {
    pub data: D,
    errors: FieldErrors,
    state: SubmissionState,
}

impl<D: Validate> FormState<D> {
    #[must_use]
    pub fn new(data: D) -> Self {
        Self {
            data,
            errors: FieldErrors::new(),
            state: SubmissionState::Idle,
        }
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Marks a field as edited, clearing its error.
    pub fn touch(&mut self, field: &str) {
        self.errors.clear(field);
    }

    /// Validates and moves to `Submitting` when the data is valid.
    ///
    /// Returns `false` (state unchanged) when the form is not idle or the data
    /// is invalid; the errors are stored in the latter case.
    pub fn begin(&mut self) -> bool {
        if self.state != SubmissionState::Idle {
            return false;
        }
        self.errors = self.data.validate();
        if !self.errors.is_empty() {
            return false;
        }
        self.state = SubmissionState::Submitting;
        true
    }

    /// Completes an in-flight submission.
    pub fn finish(&mut self) -> bool {
        if self.state != SubmissionState::Submitting {
            return false;
        }
        self.state = SubmissionState::Submitted;
        true
    }

    /// Returns `true` if the form may be dismissed now.
    #[must_use]
    pub fn can_close(&self) -> bool {
        !self.is_submitting()
    }

    /// Clears errors and returns to `Idle`, keeping the data.
    pub fn reset(&mut self) {
        self.errors = FieldErrors::new();
        self.state = SubmissionState::Idle;
    }
}

/// Hooks a form's data into the generic [`FormState::handle`].
pub trait FieldAccess {
    fn set_field(&mut self, field: &str, value: String);
}

impl<D: Validate + FieldAccess> FormState<D> {
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::FieldChanged(field, value) => {
                if self.is_submitting() {
                    return Effect::None;
                }
                self.data.set_field(field, value);
                self.touch(field);
                Effect::None
            }
            Message::Submit => {
                if self.state != SubmissionState::Idle {
                    Effect::None
                } else if self.begin() {
                    Effect::StartSubmission
                } else {
                    Effect::Invalid
                }
            }
            Message::Finished => {
                if self.finish() {
                    Effect::Submitted
                } else {
                    Effect::None
                }
            }
            Message::Close => {
                if self.can_close() {
                    Effect::Close
                } else {
                    Effect::None
                }
            }
            Message::Reset => {
                self.reset();
                Effect::None
            }
        }
    }
}

/// Simulates sending `data`, resolving after `delay`.
pub async fn simulate<D>(data: D, delay: Duration) -> D {
    tokio::time::sleep(delay).await;
    data
}
