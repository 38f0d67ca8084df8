//! Property tests for the structural normalizer.

use gongwen::normalize;
use proptest::prelude::*;

proptest! {
    /// Normalization is idempotent: the second pass is a no-op.
    #[test]
    fn normalize_is_idempotent(text in "[\\PC\n]{0,200}") {
        let once = normalize(&text);
        let twice = normalize(&once);
        prop_assert_eq!(once, twice);
    }

    /// Line count and order are never altered.
    #[test]
    fn normalize_preserves_line_count(text in "[\\PC\n]{0,200}") {
        let line_count = text.split('\n').count();
        prop_assert_eq!(normalize(&text).split('\n').count(), line_count);
    }

    /// Already-normalized documents (explicit headings throughout) pass
    /// through unchanged.
    #[test]
    fn explicit_headings_unchanged(body in "(# [a-z一二三]{1,10}\n){1,5}") {
        let trimmed = body.trim_end().to_string();
        prop_assert_eq!(normalize(&trimmed), trimmed.clone());
    }
}
