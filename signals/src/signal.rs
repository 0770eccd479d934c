use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::{
    connection::Connection,
    link::{ConnectionRef, Link},
};

/// An opaque identifier for a signal, usable for comparison and logging.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SignalId(usize);

impl std::fmt::Display for SignalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{:#x}", self.0) }
}

/// Shared state of a signal. Connections refer back to it weakly.
pub(crate) struct SignalCore<A> {
    head: RefCell<Option<Rc<Link<A>>>>,
    blocked: Cell<bool>,
    /// Number of dispatch passes currently walking the list
    depth: Cell<usize>,
    /// Entries removed during a pass, whose forward link is cleared once the last pass ends
    pending: RefCell<Option<Rc<Link<A>>>>,
}

impl<A> SignalCore<A> {
    fn new(blocked: bool) -> Self {
        Self { head: RefCell::new(None), blocked: Cell::new(blocked), depth: Cell::new(0), pending: RefCell::new(None) }
    }

    pub(crate) fn id(&self) -> SignalId {
        // The allocation address is stable for as long as the core is alive
        SignalId(self as *const Self as usize)
    }

    pub(crate) fn head(&self) -> Option<Rc<Link<A>>> { self.head.borrow().clone() }

    /// Insert at the head of the list. An entry registered elsewhere is removed from there first.
    pub(crate) fn connect(self: &Rc<Self>, link: &Rc<Link<A>>) {
        if let Some(previous) = link.signal() {
            previous.disconnect(link);
        }
        let head = self.head.borrow_mut().take();
        link.set_next(head);
        *self.head.borrow_mut() = Some(Rc::clone(link));
        link.attach(self);
        tracing::trace!("signal {} connect", self.id());
    }

    /// Unlink an entry by identity. Returns false if it is not in this list.
    pub(crate) fn disconnect(&self, link: &Rc<Link<A>>) -> bool {
        let Some(first) = self.head() else { return false };

        if Rc::ptr_eq(&first, link) {
            *self.head.borrow_mut() = link.next();
            self.unlink(link);
            return true;
        }

        let mut current = first;
        while let Some(next) = current.next() {
            if Rc::ptr_eq(&next, link) {
                current.set_next(link.next());
                self.unlink(link);
                return true;
            }
            current = next;
        }
        false
    }

    /// Finish removing an entry that is no longer reachable from the head. While a pass is
    /// running it may be standing on this entry, so the forward link stays until the pass ends.
    fn unlink(&self, link: &Rc<Link<A>>) {
        link.release();
        if self.depth.get() == 0 {
            link.set_next(None);
        } else {
            link.defer(&self.pending);
        }
        tracing::trace!("signal {} disconnect", self.id());
    }

    fn enter(&self) -> Pass<'_, A> {
        self.depth.set(self.depth.get() + 1);
        Pass(self)
    }

    /// Clear the forward links of entries removed during the passes that just ended
    fn settle(&self) {
        let mut cursor = self.pending.borrow_mut().take();
        while let Some(link) = cursor {
            cursor = link.undefer();
            // re-registered entries own a fresh link
            if !link.connected() {
                link.set_next(None);
            }
        }
    }
}

/// Marks one dispatch pass over a signal's list
struct Pass<'a, A>(&'a SignalCore<A>);

impl<A> Drop for Pass<'_, A> {
    fn drop(&mut self) {
        let depth = self.0.depth.get() - 1;
        self.0.depth.set(depth);
        if depth == 0 {
            self.0.settle();
        }
    }
}

/// A typed, single-threaded multicast event source.
///
/// The signal does not own its connections: each [`Connection`] is owned by whoever created it,
/// and removes itself from the list when dropped. Dropping the signal severs every remaining
/// connection without dropping them.
///
/// The most recently connected observer is notified first.
pub struct Signal<A> {
    core: Rc<SignalCore<A>>,
}

impl<A> Default for Signal<A> {
    fn default() -> Self { Self::new() }
}

impl<A> Signal<A> {
    /// Creates an unblocked signal with no connections
    pub fn new() -> Self { Self::with_blocked(false) }

    fn with_blocked(blocked: bool) -> Self { Self { core: Rc::new(SignalCore::new(blocked)) } }

    pub fn id(&self) -> SignalId { self.core.id() }

    /// Register a connection at the head of this signal's list
    pub fn connect(&self, connection: &Connection<A>) { self.core.connect(connection.link()); }

    /// Remove a connection from this signal's list. Does nothing if it is not registered here.
    pub fn disconnect(&self, connection: &Connection<A>) { self.core.disconnect(connection.link()); }

    pub fn block(&self) { self.core.blocked.set(true); }

    pub fn unblock(&self) { self.core.blocked.set(false); }

    pub fn blocked(&self) -> bool { self.core.blocked.get() }

    /// The head of the connection list, for introspection
    pub fn connections(&self) -> Option<ConnectionRef<A>> { self.core.head().map(|head| ConnectionRef::new(&head)) }

    /// Walk the connection list in notification order
    pub fn iter(&self) -> impl Iterator<Item = ConnectionRef<A>> { std::iter::successors(self.connections(), |entry| entry.next()) }

    pub fn len(&self) -> usize { self.iter().count() }

    pub fn is_empty(&self) -> bool { self.core.head.borrow().is_none() }

    pub(crate) fn core(&self) -> &Rc<SignalCore<A>> { &self.core }
}

impl<A> Signal<A>
where A: Clone
{
    /// Notify every unblocked connection, most recently connected first.
    ///
    /// Observers may disconnect or drop connections (including their own) and may emit again
    /// from inside their delegate. Connections removed during a pass are skipped by it; the walk
    /// still reaches every entry that remains. Connections added during a pass are not visited by it.
    pub fn emit(&self, args: A) {
        if self.blocked() {
            tracing::trace!("signal {} blocked, dropping emission", self.id());
            return;
        }

        let _pass = self.core.enter();
        let mut current = self.core.head();
        while let Some(link) = current {
            let next = link.next();
            let live = link.is_attached_to(&self.core);

            // only the last entry gets the payload by value
            if next.is_none() {
                if live {
                    link.call(args);
                }
                return;
            }
            if live {
                link.call(args.clone());
            }

            current = next;
        }
    }
}

impl<A> Clone for Signal<A> {
    /// Produces a new signal with no connections. The blocked state is carried over.
    fn clone(&self) -> Self { Self::with_blocked(self.blocked()) }
}

impl<A> Drop for Signal<A> {
    fn drop(&mut self) {
        let mut severed = 0usize;
        while let Some(head) = self.core.head() {
            self.core.disconnect(&head);
            severed += 1;
        }
        if severed > 0 {
            tracing::debug!("signal {} dropped, severed {} connection(s)", self.id(), severed);
        }
    }
}

impl<A> std::fmt::Debug for Signal<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal").field("id", &self.id()).field("connections", &self.len()).field("blocked", &self.blocked()).finish()
    }
}
