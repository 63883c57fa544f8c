//! Accent- and case-insensitive text folding used for name search.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold `s` into a comparison key: strip diacritics, map `đ`/`Đ` to `d`,
/// lowercase. Display strings are never replaced by this key.
pub fn normalize(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            // đ has no canonical decomposition
            'đ' | 'Đ' => 'd',
            other => other,
        })
        .collect::<String>()
        .to_lowercase()
}
