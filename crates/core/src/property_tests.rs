//! Property-based tests for sanitization and record building

use crate::builder::from_names;
use crate::keywords::ReservedWords;
use crate::sanitize::Sanitizer;
use proptest::prelude::*;
use std::collections::HashSet;

fn raw_name() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z_]{1,8}",
        "[ 0-9a-zA-Z_.!-]{0,12}",
        Just("class".to_string()),
        Just("field_0".to_string()),
        "\\PC{0,6}",
    ]
}

proptest! {
    #[test]
    fn fields_follow_values(values in prop::collection::vec(any::<i64>(), 0..16)) {
        let names: Vec<String> = (0..values.len()).map(|i| format!("n{}", i % 3)).collect();
        let record = from_names(values.clone(), &names).unwrap();

        prop_assert_eq!(record.len(), values.len());
        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(record.field(i), Some(value));
        }
    }

    #[test]
    fn field_names_are_unique(names in prop::collection::vec(raw_name(), 0..12)) {
        let values: Vec<usize> = (0..names.len()).collect();
        let record = from_names(values, &names).unwrap();

        let unique: HashSet<&String> = record.names().iter().collect();
        prop_assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn sanitization_is_idempotent(
        names in prop::collection::vec(raw_name(), 0..12),
        rust in any::<bool>(),
    ) {
        let table = if rust { ReservedWords::Rust } else { ReservedWords::Python };
        let sanitizer = Sanitizer::new(table);

        let once = sanitizer.sanitize_all(&names);
        let twice = sanitizer.sanitize_all(&once);
        prop_assert_eq!(&once, &twice);

        for name in &once {
            prop_assert!(sanitizer.is_identifier(name), "not an identifier: {:?}", name);
        }
    }

    #[test]
    fn mismatched_lengths_always_fail(values in 0usize..8, names in 0usize..8) {
        prop_assume!(values != names);
        let result = from_names(vec![0u8; values], &vec!["x"; names]);
        prop_assert!(result.is_err());
    }
}
