use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use crate::error::DelegateError;

/// A callable target bound once at construction time.
///
/// Delegates are owned by exactly one [`Connection`](crate::Connection) and are never rebound.
/// Whatever the wrapped callable returns is discarded.
pub trait Delegate<A> {
    /// Invoke the bound target, reporting when it cannot be reached
    fn try_invoke(&self, args: A) -> Result<(), DelegateError>;

    /// Invoke the bound target. Failures are logged and otherwise ignored.
    fn invoke(&self, args: A) {
        if let Err(e) = self.try_invoke(args) {
            tracing::warn!("delegate skipped: {}", e);
        }
    }
}

/// Delegate wrapping a plain function (or a non-capturing closure coerced to one).
pub struct FnDelegate<A, R> {
    function: fn(A) -> R,
}

impl<A, R> FnDelegate<A, R> {
    pub fn new(function: fn(A) -> R) -> Self { Self { function } }
}

impl<A, R> Delegate<A> for FnDelegate<A, R> {
    fn try_invoke(&self, args: A) -> Result<(), DelegateError> {
        let _ = (self.function)(args);
        Ok(())
    }

    fn invoke(&self, args: A) {
        let _ = (self.function)(args);
    }
}

/// Delegate applying a method to an object it does not own.
///
/// The object is referenced weakly: the delegate never keeps it alive. If the object has been
/// dropped, or is mutably borrowed at the time of the call, the invocation is skipped.
pub struct MethodDelegate<T, A, R> {
    target: Weak<RefCell<T>>,
    method: fn(&mut T, A) -> R,
}

impl<T, A, R> MethodDelegate<T, A, R> {
    pub fn new(target: &Rc<RefCell<T>>, method: fn(&mut T, A) -> R) -> Self { Self { target: Rc::downgrade(target), method } }
}

impl<T, A, R> Delegate<A> for MethodDelegate<T, A, R> {
    fn try_invoke(&self, args: A) -> Result<(), DelegateError> {
        let object = self.target.upgrade().ok_or(DelegateError::TargetDropped)?;
        let mut guard = object.try_borrow_mut().map_err(|_| DelegateError::TargetBusy)?;
        let _ = (self.method)(&mut *guard, args);
        Ok(())
    }
}
