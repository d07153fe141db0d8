// Copyright 2026 the Localique Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A read-only table of known locales.

use crate::fallback::try_lookup;
use hashbrown::HashMap;
use locale_primitives::LanguageTag;

/// An ordered, read-only collection of known locale records.
///
/// The records come from elsewhere, typically a build step that scrapes a host platform's
/// locale database; this type only consumes them. Registration order is preserved so that
/// scans find the first matching record, which is what the generated data expects.
#[derive(Clone, Debug, Default)]
pub struct LocaleRegistry {
    records: Vec<LanguageTag>,
    by_tag: HashMap<String, usize>,
}

impl LocaleRegistry {
    /// Creates a registry from locale records, keeping their order.
    ///
    /// When two records share a canonical tag, the first wins.
    pub fn new(records: impl IntoIterator<Item = LanguageTag>) -> Self {
        let records: Vec<_> = records.into_iter().collect();
        let mut by_tag = HashMap::with_capacity(records.len());
        for (ix, record) in records.iter().enumerate() {
            by_tag
                .entry(record.to_language_tag().to_owned())
                .or_insert(ix);
        }
        Self { records, by_tag }
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the records in registration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &LanguageTag> + '_ {
        self.records.iter()
    }

    /// Returns the record whose canonical tag is exactly `tag`.
    pub fn get(&self, tag: &str) -> Option<&LanguageTag> {
        self.by_tag.get(tag).map(|&ix| &self.records[ix])
    }

    /// Returns the first record with the same components as `tag`.
    pub fn find(&self, tag: &LanguageTag) -> Option<&LanguageTag> {
        self.records.iter().find(|record| *record == tag)
    }

    /// Resolves `tag` against the registry with progressive fallback.
    ///
    /// Probes the canonical tag forms in the order documented on
    /// [`try_lookup`](crate::try_lookup).
    pub fn resolve(&self, tag: &LanguageTag) -> Option<&LanguageTag> {
        try_lookup(tag, |candidate| self.get(candidate))
    }
}

/// Returns true for locale tags that are deliberately not represented.
///
/// These JRE locales carry extension subtags that the simplified component model cannot
/// round-trip, so table generation skips them and consumers should too.
pub fn is_unsupported(tag: &str) -> bool {
    matches!(
        tag,
        "ja-JP-u-ca-japanese-x-lvariant-JP" | "th-TH-u-nu-thai-x-lvariant-TH"
    )
}
