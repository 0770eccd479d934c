use std::{cell::RefCell, rc::Rc};

#[allow(unused)]
pub use embedded_signals::*;

/// Install a test-friendly tracing subscriber. Safe to call from every test.
#[allow(unused)]
pub fn init_tracing() {
    let level = std::env::var("LOG_LEVEL").ok().and_then(|level| level.parse().ok()).unwrap_or(tracing::Level::INFO);
    let _ = tracing_subscriber::fmt().with_max_level(level).with_test_writer().try_init();
}

/// Shared, ordered record of which observer saw which value
#[allow(unused)]
pub type Journal = Rc<RefCell<Vec<String>>>;

#[allow(unused)]
pub fn journal() -> Journal { Rc::new(RefCell::new(Vec::new())) }

#[allow(unused)]
pub fn drain(journal: &Journal) -> Vec<String> { journal.borrow_mut().drain(..).collect() }

/// An observer object whose method appends `name:value` to a journal
#[allow(unused)]
pub struct Recorder {
    name: &'static str,
    journal: Journal,
}

#[allow(unused)]
impl Recorder {
    pub fn new(name: &'static str, journal: &Journal) -> Rc<RefCell<Self>> { Rc::new(RefCell::new(Self { name, journal: journal.clone() })) }

    pub fn record(&mut self, value: i32) { self.journal.borrow_mut().push(format!("{}:{}", self.name, value)); }
}

thread_local! {
    static CALLS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

#[allow(unused)]
pub fn free_fn(value: i32) { CALLS.with(|calls| calls.borrow_mut().push(format!("free:{value}"))); }

#[allow(unused)]
pub fn other_free_fn(value: i32) -> bool {
    CALLS.with(|calls| calls.borrow_mut().push(format!("other:{value}")));
    true
}

/// Like [`Recorder`], but writes to the same per-thread log as the free functions,
/// so relative order between both delegate kinds can be checked
#[allow(unused)]
pub struct Tracer {
    pub name: &'static str,
}

#[allow(unused)]
impl Tracer {
    pub fn new(name: &'static str) -> Rc<RefCell<Self>> { Rc::new(RefCell::new(Self { name })) }

    pub fn record(&mut self, value: i32) { CALLS.with(|calls| calls.borrow_mut().push(format!("{}:{}", self.name, value))); }
}

/// Calls logged on this thread, oldest first
#[allow(unused)]
pub fn take_calls() -> Vec<String> { CALLS.with(|calls| calls.borrow_mut().drain(..).collect()) }
