//! Property-based tests for format merging
//!
//! Uses proptest to verify properties that should hold for all selector lists.

use std::collections::HashMap;

use mathpix_client::core::models::{OutputFormat, formats_object};
use proptest::prelude::*;

fn any_format() -> impl Strategy<Value = OutputFormat> {
    prop::sample::select(OutputFormat::ALL.to_vec())
}

proptest! {
    /// One key per distinct selector key, nothing more
    #[test]
    fn one_key_per_distinct_selector_key(formats in prop::collection::vec(any_format(), 0..12)) {
        let object = formats_object(&formats);
        let mut keys: Vec<&str> = formats.iter().map(|f| f.json_entry().0).collect();
        keys.sort_unstable();
        keys.dedup();
        prop_assert_eq!(object.len(), keys.len());
        for key in keys {
            prop_assert!(object.contains_key(key));
        }
    }

    /// The last selector for a key decides its value
    #[test]
    fn last_selector_wins(formats in prop::collection::vec(any_format(), 1..12)) {
        let object = formats_object(&formats);
        let mut expected = HashMap::new();
        for format in &formats {
            let (key, value) = format.json_entry();
            expected.insert(key, value);
        }
        for (key, value) in expected {
            prop_assert_eq!(&object[key], &value);
        }
    }
}
