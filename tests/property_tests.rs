//! Property-based tests using proptest

use fanout_logger::prelude::*;
use proptest::prelude::*;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warning),
        Just(LogLevel::Success),
        Just(LogLevel::Error),
        Just(LogLevel::Critical),
    ]
}

fn any_metadata() -> impl Strategy<Value = Metadata> {
    proptest::collection::hash_map("[a-c]{1,3}", 0i64..100, 0..5)
        .prop_map(|m| m.into_iter().collect())
}

proptest! {
    /// Level string conversions roundtrip
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Level ordering matches rank ordering
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        prop_assert_eq!(level1 <= level2, level1.rank() <= level2.rank());
        prop_assert_eq!(level1 < level2, level1.rank() < level2.rank());
    }

    /// An entry is dispatched iff the call level reaches the minimum level
    #[test]
    fn test_filtering_law(min_level in any_level(), call_level in any_level()) {
        let sink = Arc::new(MemoryTransport::new());
        let logger = Logger::builder()
            .min_level(min_level)
            .transport(sink.clone())
            .build()
            .unwrap();

        logger.log(call_level, "probe");
        let expected = usize::from(call_level.rank() >= min_level.rank());
        prop_assert_eq!(sink.len(), expected);
    }

    /// Metadata merge is associative and right-biased
    #[test]
    fn test_metadata_merge_associative(
        a in any_metadata(),
        b in any_metadata(),
        c in any_metadata(),
    ) {
        let left = a.merged_with(&b).merged_with(&c);
        let right = a.merged_with(&b.merged_with(&c));
        prop_assert_eq!(left, right);
    }

    /// Merging never loses keys: the result holds exactly the key union
    #[test]
    fn test_metadata_merge_union(a in any_metadata(), b in any_metadata()) {
        let merged = a.merged_with(&b);
        for key in a.fields().keys().chain(b.fields().keys()) {
            prop_assert!(merged.contains_key(key));
        }
        for key in merged.fields().keys() {
            prop_assert!(a.contains_key(key) || b.contains_key(key));
        }
        // Right side wins on collisions
        for (key, value) in b.fields() {
            prop_assert_eq!(merged.get(key), Some(value));
        }
    }

    /// Child derivation never mutates the parent configuration
    #[test]
    fn test_derive_preserves_parent(
        parent_md in any_metadata(),
        child_md in any_metadata(),
        parent_level in any_level(),
        child_level in any_level(),
    ) {
        let parent = LoggerConfig::new()
            .with_min_level(parent_level)
            .with_metadata(parent_md.clone());

        let child = parent.derive(
            LoggerConfigPatch::new()
                .min_level(child_level)
                .metadata(child_md),
        );

        prop_assert_eq!(parent.min_level, parent_level);
        prop_assert_eq!(&parent.metadata, &parent_md);
        prop_assert_eq!(child.min_level, child_level);
    }

    /// Every sanitized message stays on a single line
    #[test]
    fn test_entry_single_line(message in ".*") {
        let entry = LogEntry::new(LogLevel::Info, message);
        prop_assert!(!entry.message.contains('\n'));
        prop_assert!(!entry.message.contains('\r'));
    }
}
