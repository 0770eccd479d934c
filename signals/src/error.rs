use thiserror::Error;

/// Reasons a delegate could not reach its bound target.
///
/// Function delegates never fail. Object-method delegates hold their target weakly, so the
/// target may be gone, or it may already be mutably borrowed by a method further up the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DelegateError {
    #[error("target object has been dropped")]
    TargetDropped,

    #[error("target object is already borrowed (re-entrant call)")]
    TargetBusy,
}
