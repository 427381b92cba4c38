//! Token-set similarity scoring and threshold filtering.
//!
//! Scores are integers in `0..=100`. Two strings score 100 when one's token
//! set equals or contains the other's, regardless of word order or
//! punctuation.

use std::collections::BTreeSet;

/// Normalise for comparison: drop Latin-1 supplement characters
/// (U+0080..=U+00FF), map every non-word character to a space, lower-case,
/// trim. Word characters are Unicode letters, digits and `_`.
pub fn normalize(s: &str) -> String {
    let mapped: String = s
        .chars()
        .filter(|c| !('\u{80}'..='\u{ff}').contains(c))
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
        .collect();
    mapped.to_lowercase().trim().to_string()
}

/// Plain similarity ratio: `2 * LCS / (len a + len b)`, scaled to 0..=100.
///
/// Either side empty scores 0. Exact halves round to even (12.5 -> 12).
pub fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let total = a.len() + b.len();
    let scaled = 200 * lcs_len(&a, &b);
    let (quotient, remainder) = (scaled / total, scaled % total);
    let rounded = match (2 * remainder).cmp(&total) {
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal if quotient % 2 == 1 => quotient + 1,
        _ => quotient,
    };
    rounded as u8
}

fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

fn join_sorted<'a>(tokens: impl Iterator<Item = &'a &'a str>) -> String {
    tokens.copied().collect::<Vec<_>>().join(" ")
}

/// Order-insensitive token overlap score.
pub fn token_set_ratio(a: &str, b: &str) -> u8 {
    let a = normalize(a);
    let b = normalize(b);
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    let intersection = join_sorted(tokens_a.intersection(&tokens_b));
    let only_a = join_sorted(tokens_a.difference(&tokens_b));
    let only_b = join_sorted(tokens_b.difference(&tokens_a));

    let combined_a = format!("{} {}", intersection, only_a).trim().to_string();
    let combined_b = format!("{} {}", intersection, only_b).trim().to_string();

    [
        ratio(&intersection, &combined_a),
        ratio(&intersection, &combined_b),
        ratio(&combined_a, &combined_b),
    ]
    .into_iter()
    .max()
    .unwrap_or(0)
}

/// Scores every candidate against `query` and keeps those at or above
/// `threshold`, preserving input order.
pub fn filter_scored<'a, S: AsRef<str>>(
    candidates: &'a [S],
    query: &str,
    threshold: u8,
) -> Vec<(&'a S, u8)> {
    candidates
        .iter()
        .map(|c| (c, token_set_ratio(query, c.as_ref())))
        .filter(|(_, score)| *score >= threshold)
        .collect()
}

/// Candidates whose token-set score against `query` meets `threshold`.
pub fn filter<'a, S: AsRef<str>>(candidates: &'a [S], query: &str, threshold: u8) -> Vec<&'a S> {
    filter_scored(candidates, query, threshold)
        .into_iter()
        .map(|(c, _)| c)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_punctuation_and_case() {
        assert_eq!(normalize("  Fix: Login-Bug! "), "fix  login bug");
        assert_eq!(normalize("snake_case"), "snake_case");
        assert_eq!(normalize("Café"), "caf");
    }

    #[test]
    fn ratio_identical_and_disjoint() {
        assert_eq!(ratio("abc", "abc"), 100);
        assert_eq!(ratio("abc", "xyz"), 0);
        assert_eq!(ratio("", "abc"), 0);
    }

    #[test]
    fn ratio_partial_overlap() {
        // LCS("kitten", "sitting") = "ittn" -> 2*4/13 = 0.615
        assert_eq!(ratio("kitten", "sitting"), 62);
    }

    #[test]
    fn exact_halves_round_to_even() {
        // 200 * 1 / 16 = 12.5
        assert_eq!(ratio("a", "bcdefghijklmnoa"), 12);
        // 200 * 3 / 16 = 37.5
        assert_eq!(ratio("abc", "abcdefghijklm"), 38);
    }

    #[test]
    fn normalize_keeps_non_latin_words() {
        assert_eq!(normalize("Редизайн, Сайта!"), "редизайн  сайта");
        assert_eq!(normalize("计划-Plan"), "计划 plan");
    }

    #[test]
    fn identical_cyrillic_names_score_full() {
        assert_eq!(token_set_ratio("Редизайн сайта", "Редизайн сайта"), 100);
        assert_eq!(token_set_ratio("сайта редизайн", "РЕДИЗАЙН САЙТА"), 100);
    }

    #[test]
    fn cjk_subset_scores_full() {
        assert_eq!(token_set_ratio("计划", "计划 Plan"), 100);
    }

    #[test]
    fn filter_matches_non_latin_names() {
        let candidates = vec!["Редизайн сайта", "Marketing Plan"];
        let result = filter(&candidates, "Редизайн сайта", 80);
        assert_eq!(result, vec![&"Редизайн сайта"]);
    }

    #[test]
    fn token_order_does_not_matter() {
        assert_eq!(token_set_ratio("redesign website", "Website Redesign"), 100);
    }

    #[test]
    fn subset_scores_full() {
        assert_eq!(token_set_ratio("redesign website", "Redesign Website Q3"), 100);
    }

    #[test]
    fn unrelated_scores_low() {
        assert!(token_set_ratio("redesign website", "Marketing Plan") < 50);
    }

    #[test]
    fn empty_query_scores_zero() {
        assert_eq!(token_set_ratio("", "Marketing Plan"), 0);
        assert_eq!(token_set_ratio("?!", "Marketing Plan"), 0);
    }

    #[test]
    fn score_is_symmetric() {
        let pairs = [
            ("sprint planning", "Planning for sprint 4"),
            ("bug", "Fix login bug"),
            ("Q3 roadmap", "roadmap"),
        ];
        for (a, b) in pairs {
            assert_eq!(token_set_ratio(a, b), token_set_ratio(b, a));
        }
    }

    #[test]
    fn filter_keeps_order() {
        let candidates = vec!["Redesign Website Q3", "Marketing Plan", "Website Redesign"];
        let result = filter(&candidates, "redesign website", 80);
        assert_eq!(result, vec![&"Redesign Website Q3", &"Website Redesign"]);
    }

    #[test]
    fn filter_scored_reports_scores() {
        let candidates = vec!["Website Redesign".to_string()];
        let result = filter_scored(&candidates, "redesign website", 0);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].1, 100);
    }
}
