//! Cache key normalization.
//!
//! Search terms are free text typed by users or assembled from
//! "Artist Title" pairs. Keys must not depend on case or punctuation, so
//! `"Don't Stop"`, `"dont stop"` and `"DONT   STOP!"` share one entry.

/// Namespace for YouTube video id lookups.
pub const YOUTUBE_NAMESPACE: &str = "ytid";

/// Namespace for iTunes preview URL lookups.
pub const ITUNES_NAMESPACE: &str = "itunes";

/// Namespace for combined preview link lookups.
pub const PREVIEW_NAMESPACE: &str = "prev";

const SEPARATOR: char = '_';

/// Apostrophes are elided rather than treated as word breaks.
fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '\u{2018}' | '`')
}

/// Normalize a search term into its cache-key form.
///
/// Lower-cases the term, drops apostrophes, collapses every run of
/// non-alphanumeric characters into a single `_` and trims separators
/// from both ends. Non-ASCII letters are kept so that terms in other
/// scripts do not collapse onto one key.
///
/// ```rust
/// # use nexttrack::cache::normalize_term;
/// assert_eq!(normalize_term("Don't Stop Me Now!"), "dont_stop_me_now");
/// ```
pub fn normalize_term(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    let mut pending_separator = false;

    for c in term.chars().flat_map(char::to_lowercase) {
        if is_apostrophe(c) {
            continue;
        }
        if c.is_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push(SEPARATOR);
            }
            pending_separator = false;
            out.push(c);
        } else {
            pending_separator = true;
        }
    }
    out
}

/// Build a namespaced cache key: `"{namespace}:{normalized term}"`.
pub fn cache_key(namespace: &str, term: &str) -> String {
    format!("{namespace}:{}", normalize_term(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apostrophes_are_elided() {
        assert_eq!(
            cache_key(YOUTUBE_NAMESPACE, "Don't Stop"),
            cache_key(YOUTUBE_NAMESPACE, "dont stop")
        );
        assert_eq!(normalize_term("Don\u{2019}t Stop"), "dont_stop");
    }

    #[test]
    fn punctuation_runs_collapse() {
        assert_eq!(normalize_term("AC/DC -- Back in Black"), "ac_dc_back_in_black");
        assert_eq!(normalize_term("  DONT   STOP!  "), "dont_stop");
    }

    #[test]
    fn empty_and_symbol_only_terms() {
        assert_eq!(normalize_term(""), "");
        assert_eq!(normalize_term("?!..."), "");
        assert_eq!(cache_key(YOUTUBE_NAMESPACE, ""), "ytid:");
    }

    #[test]
    fn non_ascii_letters_survive() {
        assert_eq!(normalize_term("Beyoncé Halo"), "beyoncé_halo");
        assert_ne!(normalize_term("夜に駆ける"), normalize_term("紅蓮華"));
    }

    #[test]
    fn namespaces_keep_keys_apart() {
        assert_ne!(
            cache_key(YOUTUBE_NAMESPACE, "creep"),
            cache_key(PREVIEW_NAMESPACE, "creep")
        );
        assert_eq!(cache_key(ITUNES_NAMESPACE, "Creep"), "itunes:creep");
    }
}
