use std::{cell::RefCell, rc::Rc};

use crate::{
    delegate::{Delegate, FnDelegate, MethodDelegate},
    link::{ConnectionRef, Link},
    signal::{Signal, SignalId},
};

/// A registered observer of a [`Signal`].
///
/// A connection owns its delegate and is registered with at most one signal at a time. Dropping
/// it removes it from that signal's list. It is not `Clone`: a copy would be an ambiguous second
/// registration.
pub struct Connection<A> {
    link: Rc<Link<A>>,
}

impl<A: 'static> Connection<A> {
    /// Connect a plain function to `signal`
    pub fn new<R: 'static>(signal: &Signal<A>, function: fn(A) -> R) -> Self { Self::with_delegate(signal, Box::new(FnDelegate::new(function))) }

    /// Connect `method`, applied to `object`, to `signal`.
    ///
    /// The object is held weakly; calls made after it is dropped are skipped.
    pub fn with_method<T: 'static, R: 'static>(signal: &Signal<A>, object: &Rc<RefCell<T>>, method: fn(&mut T, A) -> R) -> Self {
        Self::with_delegate(signal, Box::new(MethodDelegate::new(object, method)))
    }

    /// Connect an arbitrary delegate to `signal`
    pub fn with_delegate(signal: &Signal<A>, delegate: Box<dyn Delegate<A>>) -> Self {
        let connection = Self { link: Link::new(delegate) };
        signal.connect(&connection);
        connection
    }
}

impl<A> Connection<A> {
    /// Invoke the delegate directly, unless this connection is blocked
    pub fn call(&self, args: A) { self.link.call(args); }

    pub fn block(&self) { self.link.set_blocked(true); }

    pub fn unblock(&self) { self.link.set_blocked(false); }

    pub fn blocked(&self) -> bool { self.link.blocked() }

    /// Whether this connection is currently in a live signal's list
    pub fn connected(&self) -> bool { self.link.connected() }

    pub fn is_connected_to(&self, signal: &Signal<A>) -> bool { self.link.is_attached_to(signal.core()) }

    /// Identifier of the signal this connection is registered with
    pub fn signal_id(&self) -> Option<SignalId> { self.link.signal_id() }

    /// The entry after this one in its signal's list
    pub fn next(&self) -> Option<ConnectionRef<A>> { self.link.linked_next().map(|next| ConnectionRef::new(&next)) }

    pub fn delegate(&self) -> &dyn Delegate<A> { self.link.delegate() }

    /// Remove this connection from its signal's list without dropping it
    pub fn disconnect(&self) {
        if let Some(core) = self.link.signal() {
            core.disconnect(&self.link);
        }
    }

    pub(crate) fn link(&self) -> &Rc<Link<A>> { &self.link }
}

impl<A> Drop for Connection<A> {
    fn drop(&mut self) { self.disconnect(); }
}

impl<A> std::fmt::Debug for Connection<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection").field("connected", &self.connected()).field("blocked", &self.blocked()).finish()
    }
}
