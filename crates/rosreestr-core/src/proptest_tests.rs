//! Property-based tests for rosreestr-core types.

use proptest::prelude::*;

use crate::{normalize_cadastral_id, AddressInput};

/// Strategy for optional field values: empty half of the time.
fn optional_value() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[0-9]{1,12}", "[а-яА-Я ]{1,20}"]
}

/// Strategy for a single cadastral segment (possibly zero-padded, possibly empty).
fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "0{0,6}[0-9]{1,7}"]
}

proptest! {
    #[test]
    fn address_builds_iff_both_levels_present(
        macro_region_id in optional_value(),
        macro_region_name in optional_value(),
        region_id in optional_value(),
        region_name in optional_value(),
    ) {
        let has_macro = !macro_region_id.is_empty() || !macro_region_name.is_empty();
        let has_region = !region_id.is_empty() || !region_name.is_empty();

        let result = AddressInput::builder("Ленина", "5")
            .macro_region_id(macro_region_id)
            .macro_region_name(macro_region_name)
            .region_id(region_id)
            .region_name(region_name)
            .build();

        prop_assert_eq!(result.is_ok(), has_macro && has_region);
    }

    #[test]
    fn normalization_keeps_segment_count(segments in prop::collection::vec(segment_strategy(), 1..6)) {
        let id = segments.join(":");
        let normalized = normalize_cadastral_id(&id);
        prop_assert_eq!(normalized.split(':').count(), segments.len());
    }

    #[test]
    fn normalization_is_idempotent(segments in prop::collection::vec(segment_strategy(), 1..6)) {
        let once = normalize_cadastral_id(&segments.join(":"));
        let twice = normalize_cadastral_id(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalized_segments_have_no_padding(segments in prop::collection::vec(segment_strategy(), 1..6)) {
        let normalized = normalize_cadastral_id(&segments.join(":"));
        for (original, segment) in segments.iter().zip(normalized.split(':')) {
            prop_assert_eq!(original.is_empty(), segment.is_empty());
            if segment.len() > 1 {
                prop_assert!(!segment.starts_with('0'));
            }
        }
    }
}
