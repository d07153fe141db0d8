// Copyright 2026 the Localique Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::alias;
use core::fmt;
use core::hash::{Hash, Hasher};
use std::sync::OnceLock;

/// A locale identifier split into language, script, country, and variant.
///
/// Components are normalized once at construction: the language is lower-cased and the country
/// upper-cased, so two tags built from differently-cased input compare equal. The empty language
/// denotes the undefined locale (`und`).
///
/// Parsing is deliberately simpler than full BCP 47. A tag with four or more subtags keeps only
/// the first and last; extension and private-use sequences collapse into the variant slot. The
/// locale tables this type is used with were generated under the same simplification, so the
/// shortcut must be preserved for lookups against them to work.
///
/// The canonical tag form is computed lazily on first request and cached; the cache is the only
/// field ever written after construction, and the write is idempotent.
#[derive(Clone)]
pub struct LanguageTag {
    language: String,
    script: String,
    country: String,
    variant: String,
    tag: OnceLock<String>,
}

impl LanguageTag {
    /// Creates a tag from components, normalizing language and country casing.
    ///
    /// The canonical form is left unset and reconstructed on demand.
    pub fn new(language: &str, script: &str, country: &str, variant: &str) -> Self {
        Self {
            language: language.to_lowercase(),
            script: script.to_owned(),
            country: country.to_uppercase(),
            variant: variant.to_owned(),
            tag: OnceLock::new(),
        }
    }

    /// Creates a tag from components with a caller-supplied canonical form.
    ///
    /// The given `tag` is used verbatim by [`to_language_tag`](Self::to_language_tag),
    /// bypassing reconstruction. This exists for records whose tag string was produced
    /// elsewhere, such as a generated locale table.
    pub fn with_tag(tag: &str, language: &str, script: &str, country: &str, variant: &str) -> Self {
        let out = Self::new(language, script, country, variant);
        let _ = out.tag.set(tag.to_owned());
        out
    }

    /// Parses a hyphen-delimited tag into components.
    ///
    /// Parsing is total: any input, including the empty string, produces some tag. The second
    /// subtag is disambiguated by shape: all digits is a UN M49 region code (`ar-001`), the
    /// `Xxxx` title-case shape is a script, anything else is a country.
    pub fn parse(source: &str) -> Self {
        let components: Vec<&str> = source.split('-').collect();

        let language = components.first().copied().unwrap_or("");
        let mut script = "";
        let mut country = "";
        let mut variant = "";

        if components.len() >= 2 {
            let b = components[1];
            // Subtags between the second and the last are discarded.
            let c = if components.len() == 2 {
                ""
            } else {
                components[components.len() - 1]
            };

            if !b.is_empty() {
                if !is_digits(b) && b == title_case(b) {
                    script = b;
                    country = c;
                } else {
                    country = b;
                    variant = c;
                }
            }
        }

        Self::new(language, script, country, variant)
    }

    /// Returns the language component (lower-case, empty for undefined).
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the script component, or the empty string.
    pub fn script(&self) -> &str {
        &self.script
    }

    /// Returns the country component (upper-case or digits), or the empty string.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Returns the variant component, or the empty string.
    pub fn variant(&self) -> &str {
        &self.variant
    }

    /// Returns the canonical hyphen-separated tag.
    ///
    /// The language is emitted in its modern spelling (so tags built from `iw` and `he` produce
    /// the same canonical form), followed by script and country when present. The variant is
    /// appended only when a country is also present; a variant without a country cannot be
    /// expressed by this reconstruction and is dropped, matching the locale tables this crate
    /// is used with.
    pub fn to_language_tag(&self) -> &str {
        self.tag.get_or_init(|| {
            let mut tag = alias::to_modern(&self.language);
            if !self.script.is_empty() {
                tag.push('-');
                tag.push_str(&self.script);
            }
            if !self.country.is_empty() {
                tag.push('-');
                tag.push_str(&self.country);
                if !self.variant.is_empty() {
                    tag.push('-');
                    tag.push_str(&self.variant);
                }
            }
            tag
        })
    }
}

/// Equality and hashing cover the four components, never the raw input string.
impl PartialEq for LanguageTag {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language
            && self.script == other.script
            && self.country == other.country
            && self.variant == other.variant
    }
}

impl Eq for LanguageTag {}

impl Hash for LanguageTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.language.hash(state);
        self.script.hash(state);
        self.country.hash(state);
        self.variant.hash(state);
    }
}

impl fmt::Debug for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LanguageTag")
            .field(&self.to_language_tag())
            .finish()
    }
}

/// The canonical tag in locale identifier display form (`_` separators).
impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_language_tag().replace('-', "_"))
    }
}

fn is_digits(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit())
}

fn title_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LanguageTag;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn parse_and_check(source: &str, language: &str, script: &str, country: &str, variant: &str) {
        let tag = LanguageTag::parse(source);
        assert_eq!(tag.language(), language, "language of {source:?}");
        assert_eq!(tag.script(), script, "script of {source:?}");
        assert_eq!(tag.country(), country, "country of {source:?}");
        assert_eq!(tag.variant(), variant, "variant of {source:?}");
    }

    #[test]
    fn parse_empty() {
        parse_and_check("", "", "", "", "");
    }

    #[test]
    fn parse_language_casing() {
        parse_and_check("EN", "en", "", "", "");
        parse_and_check("En", "en", "", "", "");
        parse_and_check("en", "en", "", "", "");
    }

    #[test]
    fn parse_language_country() {
        parse_and_check("en-GB", "en", "", "GB", "");
        parse_and_check("en-gb", "en", "", "GB", "");
    }

    #[test]
    fn parse_language_script() {
        parse_and_check("bs-Latn", "bs", "Latn", "", "");
    }

    #[test]
    fn parse_language_script_country() {
        parse_and_check("bs-Latn-BA", "bs", "Latn", "BA", "");
        parse_and_check("az-Cyrl-AZ", "az", "Cyrl", "AZ", "");
    }

    #[test]
    fn parse_numeric_region_is_country_not_script() {
        parse_and_check("ar-001", "ar", "", "001", "");
        parse_and_check("en-150", "en", "", "150", "");
    }

    #[test]
    fn parse_language_country_variant() {
        parse_and_check("ca-ES-VALENCIA", "ca", "", "ES", "VALENCIA");
        parse_and_check("en-US-POSIX", "en", "", "US", "POSIX");
    }

    #[test]
    fn parse_deep_extension_keeps_first_and_last() {
        // Middle subtags of long tags are dropped; only the anchors survive.
        parse_and_check("ja-JP-u-ca-japanese-x-lvariant-JP", "ja", "", "JP", "JP");
    }

    #[test]
    fn parse_legacy_codes_are_not_rewritten() {
        parse_and_check("he", "he", "", "", "");
        parse_and_check("iw", "iw", "", "", "");
        parse_and_check("und", "und", "", "", "");
        parse_and_check("nn-NO", "nn", "", "NO", "");
    }

    #[test]
    fn canonical_tag_round_trips() {
        for tag in ["en", "en-GB", "bs-Latn", "bs-Latn-BA", "ar-001", "ca-ES-VALENCIA"] {
            assert_eq!(LanguageTag::parse(tag).to_language_tag(), tag);
        }
    }

    #[test]
    fn canonical_tag_modernizes_language() {
        assert_eq!(LanguageTag::parse("he").to_language_tag(), "he");
        assert_eq!(LanguageTag::parse("iw").to_language_tag(), "he");
        assert_eq!(LanguageTag::parse("in-ID").to_language_tag(), "id-ID");
        assert_eq!(LanguageTag::parse("").to_language_tag(), "und");
        assert_eq!(LanguageTag::parse("und").to_language_tag(), "und");
    }

    #[test]
    fn canonical_tag_drops_variant_without_country() {
        let tag = LanguageTag::new("de", "", "", "POSIX");
        assert_eq!(tag.to_language_tag(), "de");
    }

    #[test]
    fn with_tag_bypasses_reconstruction() {
        let tag = LanguageTag::with_tag("no-NO-NY", "no", "", "NO", "NY");
        assert_eq!(tag.to_language_tag(), "no-NO-NY");
        // Same components without a supplied tag reconstruct the identical form.
        assert_eq!(LanguageTag::new("no", "", "NO", "NY").to_language_tag(), "no-NO-NY");
    }

    #[test]
    fn display_uses_underscores() {
        assert_eq!(LanguageTag::parse("en-AU").to_string(), "en_AU");
        assert_eq!(LanguageTag::parse("ca-ES-VALENCIA").to_string(), "ca_ES_VALENCIA");
        assert_eq!(
            LanguageTag::with_tag("no-NO-NY", "no", "", "NO", "NY").to_string(),
            "no_NO_NY"
        );
    }

    #[test]
    fn equality_is_component_wise() {
        let a = LanguageTag::parse("en-GB");
        let b = LanguageTag::parse("EN-gb");
        assert_eq!(a, b);

        let c = LanguageTag::new("en", "", "gb", "");
        assert_eq!(a, c);

        assert_ne!(LanguageTag::parse("en"), LanguageTag::parse("en-GB"));
        assert_ne!(LanguageTag::parse("he"), LanguageTag::parse("iw"));
        assert_ne!(
            LanguageTag::parse("bs-Latn-BA"),
            LanguageTag::parse("bs-BA")
        );
    }

    #[test]
    fn hash_is_component_wise() {
        fn hash_of(tag: &LanguageTag) -> u64 {
            let mut hasher = DefaultHasher::new();
            tag.hash(&mut hasher);
            hasher.finish()
        }

        let a = LanguageTag::parse("en-GB");
        let b = LanguageTag::parse("EN-gb");
        assert_eq!(hash_of(&a), hash_of(&b));

        // A cached canonical form does not affect the hash.
        let c = LanguageTag::parse("en-GB");
        let _ = c.to_language_tag();
        assert_eq!(hash_of(&a), hash_of(&c));
    }
}
