// Copyright 2026 the Localique Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Progressive fallback over language tags.

use locale_primitives::LanguageTag;

/// Probes a lookup function with progressively less specific forms of `tag`.
///
/// Exactly three probes are attempted, in a fixed order, and the first that returns a value
/// wins:
///
/// 1. the full canonical tag;
/// 2. the tag with script and variant stripped (language + country) — skipped when the tag
///    has neither;
/// 3. the bare language.
///
/// The country is never dropped while keeping the variant, and no other orderings are tried.
/// The final probe passes the stored language as-is, without the modern-code substitution the
/// canonical forms carry, so a table keyed on a legacy code such as `iw` is probed with `iw`.
///
/// Returns `None` when every probe fails; lookup absence is never an error.
///
/// ```
/// use localique::{try_lookup, LanguageTag};
///
/// let table = [("en", 1), ("fr", 2)];
/// let probe = |tag: &str| table.iter().find(|(key, _)| *key == tag).map(|(_, v)| *v);
///
/// assert_eq!(try_lookup(&LanguageTag::parse("en-AU"), probe), Some(1));
/// assert_eq!(try_lookup(&LanguageTag::parse("de-DE"), probe), None);
/// ```
pub fn try_lookup<T>(tag: &LanguageTag, mut probe: impl FnMut(&str) -> Option<T>) -> Option<T> {
    if let Some(value) = probe(tag.to_language_tag()) {
        return Some(value);
    }
    if !tag.script().is_empty() || !tag.variant().is_empty() {
        let coarse = LanguageTag::new(tag.language(), "", tag.country(), "");
        if let Some(value) = probe(coarse.to_language_tag()) {
            return Some(value);
        }
    }
    probe(tag.language())
}
