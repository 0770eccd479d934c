mod common;
use common::*;

#[test]
fn test_blocked_signal_suppresses_every_connection() {
    init_tracing();
    let signal = Signal::<i32>::new();
    let journal = journal();
    let (a, b) = (Recorder::new("a", &journal), Recorder::new("b", &journal));

    let ca = connect_method(&signal, &a, Recorder::record);
    let _cb = connect_method(&signal, &b, Recorder::record);
    ca.block();

    signal.block();
    assert!(signal.blocked());
    signal.emit(1);
    assert!(drain(&journal).is_empty());

    // unblocking the signal restores each connection's own state
    signal.unblock();
    signal.emit(2);
    assert_eq!(drain(&journal), ["b:2"]);

    ca.unblock();
    signal.emit(3);
    assert_eq!(drain(&journal), ["b:3", "a:3"]);
}

#[test]
fn test_blocking_one_connection_leaves_others() {
    let signal = Signal::<i32>::new();
    let journal = journal();
    let (a, b, c) = (Recorder::new("a", &journal), Recorder::new("b", &journal), Recorder::new("c", &journal));

    let _ca = connect_method(&signal, &a, Recorder::record);
    let cb = connect_method(&signal, &b, Recorder::record);
    let _cc = connect_method(&signal, &c, Recorder::record);

    cb.block();
    assert!(cb.blocked());
    assert!(cb.connected());
    assert!(signal.iter().any(|entry| entry.is(&cb) && entry.blocked()));

    signal.emit(1);
    assert_eq!(drain(&journal), ["c:1", "a:1"]);
}

#[test]
fn test_block_then_unblock_scenario() {
    let signal = Signal::<i32>::new();
    let obj = Tracer::new("obj");

    let c1 = connect(&signal, free_fn);
    let _c2 = connect_method(&signal, &obj, Tracer::record);

    c1.block();
    signal.emit(42);
    assert_eq!(take_calls(), ["obj:42"]);

    c1.unblock();
    signal.emit(42);
    assert_eq!(take_calls(), ["obj:42", "free:42"]);
}

#[test]
fn test_blocked_signal_still_allows_direct_connection_calls() {
    let signal = Signal::<i32>::new();
    let connection = connect(&signal, free_fn);

    signal.block();
    signal.emit(1);
    connection.call(2);
    assert_eq!(take_calls(), ["free:2"]);
}

#[test]
fn test_cloning_blocked_signal_yields_empty_blocked_signal() {
    let signal = Signal::<i32>::new();
    let _connection = connect(&signal, free_fn);
    signal.block();

    let copy = signal.clone();
    assert!(copy.blocked());
    assert!(copy.is_empty());
    assert!(copy.connections().is_none());
    assert_ne!(copy.id(), signal.id());

    // the source keeps its connection
    assert_eq!(signal.len(), 1);
}

#[test]
fn test_cloning_unblocked_signal_does_not_share_connections() {
    let signal = Signal::<i32>::new();
    let connection = connect(&signal, free_fn);

    let copy = signal.clone();
    assert!(!copy.blocked());
    copy.emit(1);
    assert!(take_calls().is_empty());
    assert!(connection.is_connected_to(&signal));

    // blocking one does not affect the other
    copy.block();
    assert!(!signal.blocked());
}
