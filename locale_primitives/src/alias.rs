// Copyright 2026 the Localique Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legacy/modern two-letter language code substitution.
//!
//! A handful of ISO 639 codes were renamed (`iw` became `he`, `ji` became `yi`, `in` became
//! `id`) and some runtimes still store the legacy spelling internally while emitting the modern
//! one in canonical tags. Both directions are total functions over a fixed table; codes outside
//! the table pass through unchanged, lower-cased.

/// Replaces a modern language code with its legacy spelling.
///
/// The input is lower-cased first. The `und` (undefined) sentinel maps to the empty string.
/// Anything not in the table is returned unchanged, so this never fails.
pub fn to_legacy(language: &str) -> String {
    let lower = language.to_lowercase();
    match lower.as_str() {
        "he" => "iw".to_owned(),
        "yi" => "ji".to_owned(),
        "id" => "in".to_owned(),
        "und" => String::new(),
        _ => lower,
    }
}

/// Replaces a legacy language code with its modern spelling.
///
/// The exact inverse of [`to_legacy`], including mapping the empty string back to `und`.
pub fn to_modern(language: &str) -> String {
    let lower = language.to_lowercase();
    match lower.as_str() {
        "iw" => "he".to_owned(),
        "ji" => "yi".to_owned(),
        "in" => "id".to_owned(),
        "" => "und".to_owned(),
        _ => lower,
    }
}
