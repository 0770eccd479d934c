use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use crate::{
    connection::Connection,
    delegate::Delegate,
    signal::{SignalCore, SignalId},
};

/// One entry in a signal's connection list.
///
/// Owned by its [`Connection`]; the signal's list and any in-flight dispatch pass hold extra
/// strong references, so an entry outlives its connection until they let go.
pub(crate) struct Link<A> {
    delegate: Box<dyn Delegate<A>>,
    /// Empty while the entry is not registered with any signal
    signal: RefCell<Weak<SignalCore<A>>>,
    /// Only meaningful while registered, or while a dispatch pass may still be walking through
    /// this entry after its removal
    next: RefCell<Option<Rc<Link<A>>>>,
    blocked: Cell<bool>,
    /// Set while this entry waits on a signal's pending list for its `next` to be cleared
    pending: Cell<bool>,
    pending_next: RefCell<Option<Rc<Link<A>>>>,
}

impl<A> Link<A> {
    pub(crate) fn new(delegate: Box<dyn Delegate<A>>) -> Rc<Self> {
        Rc::new(Self {
            delegate,
            signal: RefCell::new(Weak::new()),
            next: RefCell::new(None),
            blocked: Cell::new(false),
            pending: Cell::new(false),
            pending_next: RefCell::new(None),
        })
    }

    pub(crate) fn delegate(&self) -> &dyn Delegate<A> { &*self.delegate }

    /// Invoke the delegate unless this entry is blocked
    pub(crate) fn call(&self, args: A) {
        if self.blocked.get() {
            tracing::trace!("connection blocked, skipping delegate");
            return;
        }
        self.delegate.invoke(args);
    }

    /// Raw forward link, which may be stale on a removed entry. Used by list walks.
    pub(crate) fn next(&self) -> Option<Rc<Link<A>>> { self.next.borrow().clone() }

    /// Forward link as seen from outside: nothing once the entry is unregistered
    pub(crate) fn linked_next(&self) -> Option<Rc<Link<A>>> { if self.connected() { self.next() } else { None } }

    pub(crate) fn set_next(&self, next: Option<Rc<Link<A>>>) { *self.next.borrow_mut() = next; }

    /// The signal this entry is registered with, if it is still alive
    pub(crate) fn signal(&self) -> Option<Rc<SignalCore<A>>> { self.signal.borrow().upgrade() }

    pub(crate) fn signal_id(&self) -> Option<SignalId> { self.signal().map(|core| core.id()) }

    pub(crate) fn attach(&self, core: &Rc<SignalCore<A>>) { *self.signal.borrow_mut() = Rc::downgrade(core); }

    /// Clear the back-reference only. The forward link is handled by the signal.
    pub(crate) fn release(&self) { *self.signal.borrow_mut() = Weak::new(); }

    /// Put this entry on a pending list headed by `head`. Returns false if it already waits on one.
    pub(crate) fn defer(self: &Rc<Self>, head: &RefCell<Option<Rc<Link<A>>>>) -> bool {
        if self.pending.replace(true) {
            return false;
        }
        *self.pending_next.borrow_mut() = head.borrow_mut().take();
        *head.borrow_mut() = Some(Rc::clone(self));
        true
    }

    /// Leave the pending list, returning the entry after this one on it
    pub(crate) fn undefer(&self) -> Option<Rc<Link<A>>> {
        self.pending.set(false);
        self.pending_next.borrow_mut().take()
    }

    pub(crate) fn connected(&self) -> bool { self.signal.borrow().strong_count() > 0 }

    pub(crate) fn is_attached_to(&self, core: &SignalCore<A>) -> bool { std::ptr::eq(self.signal.borrow().as_ptr(), core) }

    pub(crate) fn blocked(&self) -> bool { self.blocked.get() }

    pub(crate) fn set_blocked(&self, blocked: bool) { self.blocked.set(blocked); }
}

/// A non-owning view of one entry in a signal's connection list.
///
/// Holding a `ConnectionRef` keeps neither the registration nor the delegate alive: once the
/// owning [`Connection`] is dropped the entry reports `connected() == false` and its delegate
/// has already been released.
pub struct ConnectionRef<A>(pub(crate) Weak<Link<A>>);

impl<A> Clone for ConnectionRef<A> {
    fn clone(&self) -> Self { Self(Weak::clone(&self.0)) }
}

impl<A> ConnectionRef<A> {
    pub(crate) fn new(link: &Rc<Link<A>>) -> Self { Self(Rc::downgrade(link)) }

    /// False once the owning connection is gone
    pub fn blocked(&self) -> bool { self.0.upgrade().is_some_and(|link| link.blocked()) }

    pub fn connected(&self) -> bool { self.0.upgrade().is_some_and(|link| link.connected()) }

    /// The entry after this one in its signal's list
    pub fn next(&self) -> Option<ConnectionRef<A>> { self.0.upgrade()?.linked_next().map(|next| ConnectionRef::new(&next)) }

    /// Whether this entry belongs to the given connection
    pub fn is(&self, connection: &Connection<A>) -> bool { std::ptr::eq(self.0.as_ptr(), Rc::as_ptr(connection.link())) }
}

impl<A> std::fmt::Debug for ConnectionRef<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionRef").field("connected", &self.connected()).field("blocked", &self.blocked()).finish()
    }
}
