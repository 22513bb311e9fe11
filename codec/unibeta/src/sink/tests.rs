use super::*;

#[test]
fn new_writes_terminator() {
    let mut buf = [0xFF_u8; 4];
    let sink = BoundedBuf::new(&mut buf);
    assert!(sink.is_empty());
    assert_eq!(sink.remaining(), 3);
    assert_eq!(buf[0], 0);
}

#[test]
fn zero_capacity_accepts_nothing() {
    let mut buf: [u8; 0] = [];
    let mut sink = BoundedBuf::new(&mut buf);
    assert!(!sink.try_push(b""));
    assert!(!sink.try_push(b"a"));
    assert_eq!(sink.headroom(), Some(0));
    assert_eq!(sink.remaining(), 0);
}

#[test]
fn capacity_one_holds_only_terminator() {
    let mut buf = [0xFF_u8; 1];
    let mut sink = BoundedBuf::new(&mut buf);
    assert!(!sink.try_push(b"a"));
    assert_eq!(sink.len(), 0);
    assert_eq!(buf, [0]);
}

#[test]
fn push_reserves_terminator_slot() {
    let mut buf = [0xFF_u8; 4];
    let mut sink = BoundedBuf::new(&mut buf);
    assert!(sink.try_push(b"ab"));
    assert!(!sink.try_push(b"cd"));
    assert!(sink.try_push(b"c"));
    assert!(!sink.try_push(b"d"));
    assert_eq!(sink.written(), b"abc");
    assert_eq!(sink.headroom(), Some(1));
    assert_eq!(buf, *b"abc\0");
}

#[test]
fn failed_push_leaves_buffer_unchanged() {
    let mut buf = [0xFF_u8; 5];
    let mut sink = BoundedBuf::new(&mut buf);
    assert!(sink.try_push(b"ab"));
    assert!(!sink.try_push(b"xyz"));
    assert_eq!(sink.len(), 2);
    assert_eq!(buf, [b'a', b'b', 0, 0xFF, 0xFF]);
}

#[test]
fn truncate_moves_terminator() {
    let mut buf = [0xFF_u8; 8];
    let mut sink = BoundedBuf::new(&mut buf);
    assert!(sink.try_push(b"s2a"));
    sink.truncate(1);
    assert_eq!(sink.written(), b"s");
    sink.truncate(5);
    assert_eq!(sink.len(), 1);
    assert_eq!(&buf[..2], b"s\0");
}

#[test]
fn vec_sink_is_unbounded() {
    let mut out: Vec<u8> = Vec::new();
    assert!(Sink::is_empty(&out));
    assert!(out.try_push(b"abc"));
    assert!(out.try_push(&[b'x'; 1000]));
    assert_eq!(Sink::len(&out), 1003);
    assert_eq!(out.headroom(), None);
    Sink::truncate(&mut out, 2);
    assert_eq!(out, b"ab");
}
