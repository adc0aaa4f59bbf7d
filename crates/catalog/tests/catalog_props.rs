//! Property tests for the material catalog.
//! Every lookup is total, idempotent and yields usable display text.

use catalog::{lookup, MaterialCategory};

proptest::proptest! {
    /// Any index into the catalog yields a complete entry, and repeated
    /// lookups return the very same static.
    #[test]
    fn lookup_is_total_and_idempotent(idx in 0usize..7) {
        let category = MaterialCategory::ALL[idx];
        let first = lookup(category);
        let second = lookup(category);
        assert!(core::ptr::eq(first, second));
        assert!(!first.name.is_empty());
        assert!(!first.bin.is_empty());
        assert!(!first.instructions.is_empty());
        assert!(!first.icon.is_empty());
    }

    /// Keys parse back regardless of ASCII case.
    #[test]
    fn key_parses_in_any_case(idx in 0usize..7, upper in proptest::bool::ANY) {
        let category = MaterialCategory::ALL[idx];
        let key = if upper {
            category.key().to_ascii_uppercase()
        } else {
            category.key().to_owned()
        };
        assert_eq!(key.parse::<MaterialCategory>(), Ok(category));
    }
}

#[test]
fn detectable_categories_have_distinct_bins() {
    let bins: Vec<&str> = MaterialCategory::DETECTABLE
        .iter()
        .map(|c| lookup(*c).bin)
        .collect();
    for (i, a) in bins.iter().enumerate() {
        for b in bins.iter().skip(i + 1) {
            assert_ne!(a, b, "two detectable categories share a bin");
        }
    }
}

#[test]
fn distinct_keys() {
    for (i, a) in MaterialCategory::ALL.iter().enumerate() {
        for b in MaterialCategory::ALL.iter().skip(i + 1) {
            assert_ne!(a.key(), b.key());
        }
    }
}
