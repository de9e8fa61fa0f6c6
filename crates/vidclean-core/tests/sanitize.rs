//! Property tests for the text sanitizer.

use proptest::prelude::*;

use vidclean_core::sanitize_value;

proptest! {
    #[test]
    fn sanitize_is_idempotent(input in ".*") {
        let once = sanitize_value(&input);
        let twice = sanitize_value(&once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn sanitize_strips_every_artifact_char(input in ".*") {
        let once = sanitize_value(&input);
        prop_assert!(once.chars().all(|ch| !matches!(ch, '[' | ']' | '\'')));
    }

    #[test]
    fn sanitize_preserves_other_characters(input in "[a-z0-9 ]*") {
        // Inputs with no artifact characters pass through untouched.
        prop_assert_eq!(sanitize_value(&input), input);
    }
}
