//! Locale-style string ordering for theme names.
//!
//! Names are ordered by the root-locale Unicode Collation Algorithm (CLDR
//! root, tertiary strength, punctuation not ignored), which is what
//! locale-aware string comparison does by default: accents and case only
//! break ties, lower case sorts first, and whitespace < punctuation <
//! symbols < digits < letters. Names the collator considers equal fall back
//! to code-point order so the result is total and `registry.json` is stable.

use std::cmp::Ordering;
use std::sync::OnceLock;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};

static ROOT_COLLATOR: OnceLock<Option<CollatorBorrowed<'static>>> = OnceLock::new();

fn root_collator() -> Option<&'static CollatorBorrowed<'static>> {
    ROOT_COLLATOR
        .get_or_init(|| {
            match Collator::try_new(Default::default(), CollatorOptions::default()) {
                Ok(collator) => Some(collator),
                Err(e) => {
                    tracing::warn!("Root collator unavailable, ordering by code point: {}", e);
                    None
                }
            }
        })
        .as_ref()
}

/// Compare two theme names.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    root_collator()
        .map_or(Ordering::Equal, |collator| collator.compare(a, b))
        .then_with(|| a.cmp(b))
}
