/*!
Single-threaded signal/slot dispatch for resource-constrained targets

A [`Signal`] notifies any number of [`Connection`]s, each wrapping one [`Delegate`]: a plain
function or a method bound to an object. There is no locking and no queueing: `emit` calls every
delegate synchronously before returning.

# Design requirements:
- The signal never owns its connections. Whoever registers an observer owns the returned
  `Connection` and decides when it goes away.
- Either side may be dropped first. Dropping a connection unlinks it from its signal; dropping a
  signal severs all of its connections, which then report `connected() == false`.
- Most recently connected observers are notified first.
- Blocking is available per signal and per connection, and never changes registration.
- Observers may disconnect themselves (or others) and may emit again while being notified.

# Basic usage

```rust
use embedded_signals::*;
use std::{cell::RefCell, rc::Rc};

struct Screen {
    shown: Vec<i32>,
}

impl Screen {
    fn show(&mut self, value: i32) { self.shown.push(value); }
}

fn log(value: i32) { println!("value: {value}"); }

let changed = Signal::<i32>::new();
let display = Rc::new(RefCell::new(Screen { shown: Vec::new() }));

let _logger = connect(&changed, log);
let screen = connect_method(&changed, &display, Screen::show);

// Screen::show runs first, then log
changed.emit(42);
assert_eq!(display.borrow().shown, [42]);

screen.block();
changed.emit(43);
assert_eq!(display.borrow().shown, [42]);

drop(changed);
assert!(!screen.connected());
```

Multiple arguments travel as a tuple: `Signal<(u8, &'static str)>`.
*/

mod connection;
mod delegate;
mod error;
mod link;
pub mod porcelain;
mod signal;

pub use connection::*;
pub use delegate::*;
pub use error::*;
pub use link::ConnectionRef;
pub use porcelain::*;
pub use signal::{Signal, SignalId};
