//! Results of a retry run.

use thiserror::Error;

/// What a retry run produced when it was not interrupted.
///
/// `Exhausted` is the "no result" sentinel. It keeps the cause of the final
/// failure so callers can report it, but [`into_value`](Self::into_value)
/// collapses it to a plain `None` for callers that only care about the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryOutcome<T, E> {
    /// The operation succeeded.
    Succeeded {
        /// Value returned by the successful attempt
        value: T,
        /// Number of invocations it took, including the successful one
        attempts: u32,
    },

    /// Every permitted attempt failed.
    Exhausted {
        /// Number of invocations made
        attempts: u32,
        /// Failure returned by the final attempt
        last_error: E,
    },
}

impl<T, E> RetryOutcome<T, E> {
    /// Whether the run ended with a value.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    /// Number of times the operation was invoked.
    pub fn attempts(&self) -> u32 {
        match self {
            Self::Succeeded { attempts, .. } | Self::Exhausted { attempts, .. } => *attempts,
        }
    }

    /// The successful value, or `None` when attempts ran out.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Succeeded { value, .. } => Some(value),
            Self::Exhausted { .. } => None,
        }
    }

    /// The final failure, if attempts ran out.
    pub fn last_error(&self) -> Option<&E> {
        match self {
            Self::Succeeded { .. } => None,
            Self::Exhausted { last_error, .. } => Some(last_error),
        }
    }
}

/// The backoff wait was cancelled from outside.
///
/// This is fatal for the retry run: it is never folded into
/// [`RetryOutcome::Exhausted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation interrupted after {attempts} attempt(s)")]
pub struct Interrupted {
    /// Attempts made before the interruption
    pub attempts: u32,
}
