//! Property-based tests for rust_pattern_logger using proptest

use proptest::prelude::*;
use rust_pattern_logger::prelude::*;
use rust_pattern_logger::{Buffer, FormatItem};

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Unknown),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warning),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
        Just(LogLevel::Off),
    ]
}

fn any_loggable_level() -> impl Strategy<Value = LogLevel> {
    prop::sample::select(LogLevel::LOGGABLE.to_vec())
}

fn any_record() -> impl Strategy<Value = LogRecord> {
    (
        any_level(),
        0i64..4_000_000_000,
        "[a-z/]{1,20}\\.rs",
        any::<u32>(),
        "[a-z-]{1,12}",
        ".{0,80}",
    )
        .prop_map(|(level, timestamp, file, line, name, payload)| {
            LogRecord::new(level, timestamp, file, line, name, payload).with_thread_id("ThreadId(1)")
        })
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
        prop_assert_eq!(level.to_string(), level.to_str());
    }

    /// Test that LogLevel ordering follows the numeric values
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
        prop_assert_eq!(level1.cmp(&level2), val1.cmp(&val2));
    }

    /// The level gate admits exactly the calls at or above the minimum
    #[test]
    fn test_level_gate(min in any_level(), call in any_level()) {
        let logger = Logger::builder().name("gate").min_level(min).build().unwrap();
        prop_assert_eq!(logger.is_enabled(call), (min as u8) <= (call as u8));
    }

    /// Every loggable level clears a Debug gate and none clears Off
    #[test]
    fn test_loggable_levels_bounded_by_gate(call in any_loggable_level()) {
        prop_assert!(LogLevel::Debug <= call && call < LogLevel::Off);
        let open = Logger::builder().name("open").min_level(LogLevel::Debug).build().unwrap();
        let closed = Logger::builder().name("closed").min_level(LogLevel::Off).build().unwrap();
        prop_assert!(open.is_enabled(call));
        prop_assert!(!closed.is_enabled(call));
    }
}

// ============================================================================
// Buffer Tests
// ============================================================================

proptest! {
    /// readable_size equals the sum of pushed lengths
    #[test]
    fn test_buffer_accounting(
        initial in 0usize..256,
        chunks in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..200), 0..50)
    ) {
        let mut buffer = Buffer::with_capacity(initial);
        let mut expected = Vec::new();
        for chunk in &chunks {
            buffer.push(chunk);
            expected.extend_from_slice(chunk);
        }

        prop_assert_eq!(buffer.readable_size(), expected.len());
        prop_assert_eq!(buffer.readable(), expected.as_slice());
        prop_assert_eq!(buffer.is_empty(), expected.is_empty());
        prop_assert_eq!(buffer.writable_size(), buffer.capacity() - expected.len());
    }

    /// reset empties the buffer but keeps its storage
    #[test]
    fn test_buffer_reset_keeps_capacity(
        chunks in prop::collection::vec(prop::collection::vec(any::<u8>(), 1..200), 1..20)
    ) {
        let mut buffer = Buffer::with_capacity(16);
        for chunk in &chunks {
            buffer.push(chunk);
        }
        let capacity = buffer.capacity();

        buffer.reset();
        prop_assert_eq!(buffer.readable_size(), 0);
        prop_assert!(buffer.is_empty());

        let refill: Vec<u8> = vec![b'z'; capacity];
        buffer.push(&refill);
        prop_assert_eq!(buffer.capacity(), capacity);
    }

    /// swap exchanges contents and cursors
    #[test]
    fn test_buffer_swap(
        a in prop::collection::vec(any::<u8>(), 0..100),
        b in prop::collection::vec(any::<u8>(), 0..100)
    ) {
        let mut left = Buffer::with_capacity(8);
        let mut right = Buffer::with_capacity(8);
        left.push(&a);
        right.push(&b);

        left.swap(&mut right);
        prop_assert_eq!(left.readable(), b.as_slice());
        prop_assert_eq!(right.readable(), a.as_slice());
    }
}

// ============================================================================
// Pattern Tests
// ============================================================================

proptest! {
    /// Rendering is a pure function of pattern and record
    #[test]
    fn test_render_is_deterministic(record in any_record()) {
        let pattern = Pattern::default();
        let first = pattern.render(&record);
        let second = pattern.render(&record);
        prop_assert_eq!(first, second);
    }

    /// Text without '%' compiles to one literal rendered unchanged
    #[test]
    fn test_literal_passthrough(text in "[^%]{1,64}", record in any_record()) {
        let pattern = Pattern::compile(&text).unwrap();
        prop_assert_eq!(pattern.items(), &[FormatItem::Literal(text.clone())]);
        prop_assert_eq!(pattern.render(&record), text.into_bytes());
    }

    /// "%%" always renders as a single '%'
    #[test]
    fn test_percent_escape(prefix in "[^%]{0,16}", suffix in "[^%]{0,16}", record in any_record()) {
        let source = format!("{}%%{}", prefix, suffix);
        let pattern = Pattern::compile(&source).unwrap();
        prop_assert_eq!(
            pattern.render(&record),
            format!("{}%{}", prefix, suffix).into_bytes()
        );
    }

    /// The message specifier renders the payload verbatim
    #[test]
    fn test_message_verbatim(record in any_record()) {
        let pattern = Pattern::compile("%m").unwrap();
        prop_assert_eq!(pattern.render(&record), record.payload.clone().into_bytes());
    }
}
