//! Error signalling collaborator
//!
//! A [`Guard`](crate::Guard) hands the message of every failed check to an
//! [`ErrorSignal`]. What happens next belongs to the signal: print it to the
//! user, log it, record it in a test, or ignore it. The validators themselves
//! never abort.
//!
//! # Example
//!
//! ```
//! use lotto_validate::Guard;
//! use std::sync::Mutex;
//!
//! let seen = Mutex::new(Vec::new());
//! let guard = Guard::new(|message: &str| seen.lock().unwrap().push(message.to_string()));
//!
//! assert!(!guard.is_number("abc"));
//! assert_eq!(*seen.lock().unwrap(), vec!["only numbers may be entered."]);
//! ```

/// Receives the fixed message of a failed validation.
pub trait ErrorSignal: Send + Sync {
    /// Raise `message` to whoever is listening.
    fn raise(&self, message: &str);
}

// Blanket impl for closures
impl<F> ErrorSignal for F
where
    F: Fn(&str) + Send + Sync,
{
    #[inline]
    fn raise(&self, message: &str) {
        self(message)
    }
}

/// Signal that discards every message.
#[derive(Clone, Copy, Default, Debug)]
pub struct Silent;

impl ErrorSignal for Silent {
    #[inline]
    fn raise(&self, _message: &str) {}
}

/// Signal that emits each message as a `tracing` warning.
///
/// Available with the `tracing` feature.
#[cfg(feature = "tracing")]
#[derive(Clone, Copy, Default, Debug)]
pub struct TracingSignal;

#[cfg(feature = "tracing")]
impl ErrorSignal for TracingSignal {
    fn raise(&self, message: &str) {
        tracing::warn!(target: "lotto_validate", reason = %message, "input rejected");
    }
}
