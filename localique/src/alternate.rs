// Copyright 2026 the Localique Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alternate spellings of the same locale.
//!
//! Some locales answer to two different tags: the renamed ISO 639 codes (`iw`/`he`, `ji`/`yi`,
//! `in`/`id`) and Norwegian Nynorsk, which host platforms expose both as `nn-NO` and as `no-NO`
//! with variant `NY`. Values registered per locale consult these equivalences so a lookup under
//! either spelling finds the same entry.

use locale_primitives::{to_legacy, to_modern, LanguageTag};
use smallvec::SmallVec;

type TagList = SmallVec<[LanguageTag; 1]>;

/// Whether the Norwegian Nynorsk synonym participates in alternate derivation.
///
/// Some integrations want strict ISO 639 equivalence only, so the rule is chosen per call
/// site rather than baked in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NorwegianRule {
    /// `nn-NO` and `no-NO` with variant `NY` are alternates of each other.
    Include,
    /// The Norwegian synonym is not consulted.
    Ignore,
}

/// Returns the alternate spelling of `tag`, if one exists.
///
/// Legacy and modern language codes swap in either direction with the other components left
/// unchanged. Under [`NorwegianRule::Include`], `nn-NO` and `no-NO-NY` are each other's
/// alternates; this is the only derivation in which a variant participates. A tag matching
/// neither rule has no alternate.
pub fn alternate_form(tag: &LanguageTag, norwegian: NorwegianRule) -> Option<LanguageTag> {
    if norwegian == NorwegianRule::Include {
        if let Some(alternate) = norwegian_alternate(tag) {
            return Some(alternate);
        }
    }
    swap_language(tag.language())
        .map(|language| LanguageTag::new(&language, tag.script(), tag.country(), tag.variant()))
}

/// Swaps a language code between its legacy and modern spellings.
///
/// The undefined language has no alternate; `und` and the empty string are left alone even
/// though the alias table maps between them.
fn swap_language(language: &str) -> Option<String> {
    if language.is_empty() || language == "und" {
        return None;
    }
    let legacy = to_legacy(language);
    if legacy != language {
        return Some(legacy);
    }
    let modern = to_modern(language);
    if modern != language {
        return Some(modern);
    }
    None
}

fn norwegian_alternate(tag: &LanguageTag) -> Option<LanguageTag> {
    if tag.country() != "NO" || !tag.script().is_empty() {
        return None;
    }
    if tag.language() == "nn" && tag.variant().is_empty() {
        return Some(LanguageTag::new("no", "", "NO", "NY"));
    }
    if tag.language() == "no" && tag.variant() == "NY" {
        return Some(LanguageTag::new("nn", "", "NO", ""));
    }
    None
}

/// How a [`LocaleValue`] decides whether a locale belongs to it.
#[derive(Clone, Debug)]
pub enum LocaleMatch {
    /// Matches locales equal to one of the listed tags.
    Exact(SmallVec<[LanguageTag; 1]>),
    /// Like [`LocaleMatch::Exact`], but a locale whose alternate spelling is listed also
    /// matches.
    WithAlternates(SmallVec<[LanguageTag; 1]>, NorwegianRule),
}

impl LocaleMatch {
    /// Creates a matcher requiring component-wise equality with one of `tags`.
    pub fn exact(tags: impl IntoIterator<Item = LanguageTag>) -> Self {
        Self::Exact(tags.into_iter().collect())
    }

    /// Creates a matcher that also accepts a locale through its alternate spelling.
    pub fn with_alternates(
        tags: impl IntoIterator<Item = LanguageTag>,
        norwegian: NorwegianRule,
    ) -> Self {
        Self::WithAlternates(tags.into_iter().collect(), norwegian)
    }

    /// Returns true if `locale` is listed, or (for alternate-aware matchers) if its alternate
    /// spelling is.
    ///
    /// A locale without an alternate simply skips the second check; there is no failure path.
    pub fn matches(&self, locale: &LanguageTag) -> bool {
        match self {
            Self::Exact(tags) => tags.contains(locale),
            Self::WithAlternates(tags, norwegian) => {
                tags.contains(locale)
                    || alternate_form(locale, *norwegian)
                        .is_some_and(|alternate| tags.contains(&alternate))
            }
        }
    }

    fn tags(&self) -> &TagList {
        match self {
            Self::Exact(tags) => tags,
            Self::WithAlternates(tags, _) => tags,
        }
    }
}

/// A value registered for a set of locales.
#[derive(Clone, Debug)]
pub struct LocaleValue<T> {
    matcher: LocaleMatch,
    value: T,
}

impl<T> LocaleValue<T> {
    /// Pairs a value with the locales it is registered for.
    pub fn new(value: T, matcher: LocaleMatch) -> Self {
        Self { matcher, value }
    }

    /// Returns true if this value is registered for `locale`.
    pub fn matches(&self, locale: &LanguageTag) -> bool {
        self.matcher.matches(locale)
    }

    /// Returns the registered value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the tags this value is registered under.
    pub fn tags(&self) -> &[LanguageTag] {
        self.matcher.tags()
    }
}

/// Returns the first value registered for `locale`, or `None`.
pub fn find_value<'a, T>(values: &'a [LocaleValue<T>], locale: &LanguageTag) -> Option<&'a T> {
    values
        .iter()
        .find(|value| value.matches(locale))
        .map(LocaleValue::value)
}
