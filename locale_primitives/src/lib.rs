// Copyright 2026 the Localique Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fundamental locale identifier types.
//!
//! This crate is intended as a lightweight vocabulary layer shared across locale resolution,
//! resource lookup, and table generation tooling. It focuses on a small, typed representation of
//! a language tag split into its components, together with the legacy/modern two-letter language
//! code substitutions needed to reproduce canonical tag strings.
//!
//! ## Example
//!
//! ```
//! use locale_primitives::LanguageTag;
//!
//! let tag = LanguageTag::parse("bs-Latn-BA");
//! assert_eq!(tag.language(), "bs");
//! assert_eq!(tag.script(), "Latn");
//! assert_eq!(tag.country(), "BA");
//! assert_eq!(tag.to_language_tag(), "bs-Latn-BA");
//! ```
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

mod alias;
mod language_tag;

pub use alias::{to_legacy, to_modern};
pub use language_tag::LanguageTag;
