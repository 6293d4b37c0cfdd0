// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Normalized edit-distance similarity between short contact fields.

use strsim::levenshtein;

/// Returns a similarity between 0.0 and 1.0.
///
/// Both inputs are trimmed and lower-cased. Equal strings score 1.0, an
/// empty side scores 0.0, and anything else scores
/// `1 - levenshtein(a, b) / max(len(a), len(b))`. Lengths and edits are
/// counted in `char`s, so multi-byte input is measured per code point.
///
/// Cost is O(|a|·|b|), which makes all-pairs duplicate detection
/// O(n²·L²) for `n` contacts with fields of length `L`.
pub fn string_similarity(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    if a == b {
        return 1.0;
    }

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let longest = a.chars().count().max(b.chars().count());
    1.0 - levenshtein(&a, &b) as f64 / longest as f64
}
