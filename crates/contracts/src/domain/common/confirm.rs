//! Confirmation gate for destructive actions

/// Capability that asks the operator to confirm a destructive action.
///
/// A `false` answer means the caller must not mutate anything.
pub trait ConfirmPort {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> ConfirmPort for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Port that answers every prompt with the same value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAnswer(pub bool);

impl ConfirmPort for FixedAnswer {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

/// Result of an action that was gated by a [`ConfirmPort`]
#[derive(Debug, Clone, PartialEq)]
pub enum Confirmed<T> {
    Done(T),
    Declined,
}

impl<T> Confirmed<T> {
    pub fn is_done(&self) -> bool {
        matches!(self, Confirmed::Done(_))
    }

    pub fn done(self) -> Option<T> {
        match self {
            Confirmed::Done(value) => Some(value),
            Confirmed::Declined => None,
        }
    }
}
