//! Merging of provider result lists into one ordered sequence

use super::types::SearchResult;
use std::cmp::Ordering;

/// Concatenate provider outputs in the given order and sort them.
///
/// Providers that returned nothing simply contribute no items; the merged
/// length is always the sum of the inputs.
pub fn merge<I>(outputs: I) -> Vec<SearchResult>
where
    I: IntoIterator<Item = Vec<SearchResult>>,
{
    let mut merged: Vec<SearchResult> = outputs.into_iter().flatten().collect();
    // stable: equal keys keep concatenation order
    merged.sort_by(compare);
    merged
}

/// Total order over results.
///
/// Dated results come first, newest first. Undated results follow, ordered
/// by source name ascending.
pub fn compare(a: &SearchResult, b: &SearchResult) -> Ordering {
    match (a.date, b.date) {
        (Some(da), Some(db)) => db.cmp(&da),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.source.name().cmp(b.source.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::Source;
    use chrono::{TimeZone, Utc};

    fn item(source: Source, title: &str, day: Option<u32>) -> SearchResult {
        SearchResult::new(source, title, format!("https://example.com/{title}"))
            .with_date(day.map(|d| Utc.with_ymd_and_hms(2024, 3, d, 0, 0, 0).unwrap()))
    }

    fn titles(results: &[SearchResult]) -> Vec<&str> {
        results.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_merge_is_permutation_of_inputs() {
        let google = vec![
            item(Source::Google, "g1", Some(3)),
            item(Source::Google, "g2", None),
            item(Source::Google, "g3", Some(9)),
        ];
        let bing = vec![item(Source::Bing, "b1", None), item(Source::Bing, "b2", Some(5))];

        let merged = merge([google.clone(), bing.clone()]);
        assert_eq!(merged.len(), google.len() + bing.len());
        for r in google.iter().chain(bing.iter()) {
            assert!(merged.contains(r));
        }
    }

    #[test]
    fn test_dated_results_newest_first() {
        let merged = merge([
            vec![item(Source::Google, "old", Some(1)), item(Source::Google, "new", Some(20))],
            vec![item(Source::Bing, "mid", Some(10))],
        ]);
        assert_eq!(titles(&merged), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_undated_bing_before_google() {
        let merged = merge([
            vec![item(Source::Google, "g1", None), item(Source::Google, "g2", None)],
            vec![item(Source::Bing, "b1", None), item(Source::Bing, "b2", None)],
        ]);
        assert_eq!(titles(&merged), vec!["b1", "b2", "g1", "g2"]);
    }

    #[test]
    fn test_dated_precede_undated() {
        let merged = merge([
            vec![item(Source::Google, "g-undated", None), item(Source::Google, "g-dated", Some(2))],
            vec![item(Source::Bing, "b-undated", None), item(Source::Bing, "b-dated", Some(1))],
        ]);
        assert_eq!(
            titles(&merged),
            vec!["g-dated", "b-dated", "b-undated", "g-undated"]
        );
    }

    #[test]
    fn test_equal_dates_keep_input_order() {
        let merged = merge([
            vec![item(Source::Google, "g", Some(4))],
            vec![item(Source::Bing, "b", Some(4))],
        ]);
        assert_eq!(titles(&merged), vec!["g", "b"]);
    }

    #[test]
    fn test_single_or_no_provider_output() {
        assert!(merge(Vec::<Vec<SearchResult>>::new()).is_empty());
        assert!(merge([vec![], vec![]]).is_empty());

        let merged = merge([vec![], vec![item(Source::Bing, "only", None)]]);
        assert_eq!(titles(&merged), vec!["only"]);
    }
}
