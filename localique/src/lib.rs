// Copyright 2026 the Localique Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Locale resolution, fallback, and alternate-form matching.
//!
//! Given a requested [`LanguageTag`], this crate locates the best matching entry in a table of
//! known locales by probing progressively less specific forms ([`try_lookup`]), and recognizes
//! tags that denote the same locale under two different spellings ([`alternate_form`]), such as
//! the legacy `iw` and modern `he` codes or the Norwegian Nynorsk forms.
//!
//! The table itself ([`LocaleRegistry`]) is consumed, not produced: an external build step
//! scrapes a host platform's locale database and emits the records, optionally through the
//! length-prefixed encoding in [`read_tags`]/[`write_tags`].
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod alternate;
mod fallback;
mod registry;
mod stream;

pub use locale_primitives::LanguageTag;

pub use alternate::{alternate_form, find_value, LocaleMatch, LocaleValue, NorwegianRule};
pub use fallback::try_lookup;
pub use registry::{is_unsupported, LocaleRegistry};
pub use stream::{read_tag, read_tags, write_tag, write_tags};
