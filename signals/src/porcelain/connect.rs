use std::{cell::RefCell, rc::Rc};

use crate::{Connection, Signal};

/// Connect a plain function to `signal`, returning the owning handle.
///
/// The connection stays registered until the handle is dropped or the signal goes away.
pub fn connect<A: 'static, R: 'static>(signal: &Signal<A>, function: fn(A) -> R) -> Connection<A> { Connection::new(signal, function) }

/// Connect a method of `object` to `signal`, returning the owning handle.
pub fn connect_method<T, A, R>(signal: &Signal<A>, object: &Rc<RefCell<T>>, method: fn(&mut T, A) -> R) -> Connection<A>
where
    T: 'static,
    A: 'static,
    R: 'static,
{
    Connection::with_method(signal, object, method)
}
