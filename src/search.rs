//! Accent-insensitive substring search over the catalog
//!
//! Filtering is pure: the same record set and term always produce the same
//! index list, in catalog order. The term and the description are compared
//! case-folded and stripped of diacritics; the code is alphanumeric and only
//! case-folded.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::catalog::Cid;

/// Trim, decompose (NFD), drop combining marks, and case-fold
pub fn normalize(input: &str) -> String {
    input
        .trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Trim and case-fold only, for the category code
pub fn fold_code(code: &str) -> String {
    code.trim().to_lowercase()
}

/// Indices of the records matching the term, in catalog order
///
/// A blank term matches everything.
pub fn filter_records(records: &[Cid], term: &str) -> Vec<usize> {
    let needle = normalize(term);
    if needle.is_empty() {
        return (0..records.len()).collect();
    }

    records
        .iter()
        .enumerate()
        .filter(|(_, cid)| {
            fold_code(&cid.code).contains(&needle) || normalize(&cid.description).contains(&needle)
        })
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cid(code: &str, description: &str) -> Cid {
        Cid {
            code: code.to_string(),
            description: description.to_string(),
        }
    }

    fn sample() -> Vec<Cid> {
        vec![
            cid("A00", "Cólera"),
            cid("B20", "Doença pelo HIV"),
            cid("J11", "Influenza [grípe] devida a vírus não identificado"),
            cid("A00", "Cólera devida a Vibrio cholerae"),
        ]
    }

    #[test]
    fn test_normalize_strips_accents_and_case() {
        assert_eq!(normalize("  Cólera  "), "colera");
        assert_eq!(normalize("GRÍPE"), "gripe");
        assert_eq!(normalize("ação"), "acao");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_fold_code_keeps_characters() {
        assert_eq!(fold_code("A00"), "a00");
        assert_eq!(fold_code(" B20 "), "b20");
    }

    #[test]
    fn test_blank_term_is_identity() {
        let records = sample();
        assert_eq!(filter_records(&records, ""), vec![0, 1, 2, 3]);
        assert_eq!(filter_records(&records, "   "), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_filter_is_order_preserving_subset() {
        let records = sample();
        for term in ["a", "o", "cólera", "0", "devida"] {
            let indices = filter_records(&records, term);
            assert!(indices.iter().all(|&i| i < records.len()));
            assert!(indices.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_diacritic_insensitive_both_ways() {
        let records = sample();
        // plain term matches accented description
        assert_eq!(filter_records(&records, "gripe"), vec![2]);
        // accented term matches the same record
        assert_eq!(filter_records(&records, "grípe"), vec![2]);
        assert_eq!(filter_records(&records, "colera"), vec![0, 3]);
        assert_eq!(filter_records(&records, "cólera"), vec![0, 3]);
    }

    #[test]
    fn test_code_match_is_case_insensitive() {
        let records = sample();
        assert_eq!(filter_records(&records, "a00"), vec![0, 3]);
        assert_eq!(filter_records(&records, "A00"), vec![0, 3]);
        assert_eq!(filter_records(&records, "b2"), vec![1]);
    }

    #[test]
    fn test_accented_term_still_matches_code() {
        // the term is stripped before comparison, the code only folded
        let records = sample();
        assert_eq!(filter_records(&records, "á00"), vec![0, 3]);
    }

    #[test]
    fn test_duplicate_codes_all_kept() {
        let records = sample();
        let indices = filter_records(&records, "A00");
        assert_eq!(indices.len(), 2);
        assert_eq!(records[indices[0]].code, records[indices[1]].code);
    }

    #[test]
    fn test_no_match_is_empty() {
        let records = sample();
        assert!(filter_records(&records, "zzz").is_empty());
    }

    #[test]
    fn test_term_with_surrounding_whitespace() {
        let records = sample();
        assert_eq!(filter_records(&records, "  hiv  "), vec![1]);
    }
}
