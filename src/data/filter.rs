use std::collections::BTreeMap;

use super::model::{LaunchDataset, LaunchRecord, Outcome, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Aggregations feeding the pie chart
// ---------------------------------------------------------------------------

/// Count successful launches per site.
///
/// Sites without a single success do not appear in the result.
pub fn success_count_by_site(dataset: &LaunchDataset) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for rec in dataset.records().iter().filter(|r| r.outcome.is_success()) {
        *counts.entry(rec.site.clone()).or_insert(0) += 1;
    }
    counts
}

/// Count launches per outcome for a single site.
///
/// Only outcomes that actually occur are present; an unknown site gives an
/// empty map.
pub fn outcome_breakdown(dataset: &LaunchDataset, site: &str) -> BTreeMap<Outcome, usize> {
    let mut counts = BTreeMap::new();
    for rec in dataset.records().iter().filter(|r| r.site == site) {
        *counts.entry(rec.outcome).or_insert(0) += 1;
    }
    counts
}

// ---------------------------------------------------------------------------
// Row filter feeding the scatter chart
// ---------------------------------------------------------------------------

/// Return the launches strictly inside `(low, high)` that match `site`.
///
/// Order follows the dataset. The dataset itself is never touched; callers
/// get a fresh borrowed view per query.
pub fn filter_by_payload<'a>(
    dataset: &'a LaunchDataset,
    site: &SiteSelection,
    low: f64,
    high: f64,
) -> Vec<&'a LaunchRecord> {
    let range = PayloadRange::new(low, high);
    dataset
        .records()
        .iter()
        .filter(|r| site.matches(&r.site) && range.contains(r.payload_kg))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord::new("siteA", 500.0, Outcome::Success, "v1"),
            LaunchRecord::new("siteA", 2000.0, Outcome::Failure, "v1"),
            LaunchRecord::new("siteB", 1500.0, Outcome::Success, "v2"),
        ])
    }

    #[test]
    fn test_success_count_by_site() {
        let counts = success_count_by_site(&sample());
        assert_eq!(counts.get("siteA"), Some(&1));
        assert_eq!(counts.get("siteB"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_site_without_success_is_absent() {
        let ds = LaunchDataset::from_records(vec![
            LaunchRecord::new("siteA", 500.0, Outcome::Success, "v1"),
            LaunchRecord::new("siteC", 700.0, Outcome::Failure, "v1"),
        ]);
        let counts = success_count_by_site(&ds);
        assert!(!counts.contains_key("siteC"));
    }

    #[test]
    fn test_outcome_breakdown_single_site() {
        let counts = outcome_breakdown(&sample(), "siteA");
        assert_eq!(counts.get(&Outcome::Success), Some(&1));
        assert_eq!(counts.get(&Outcome::Failure), Some(&1));

        let counts = outcome_breakdown(&sample(), "siteB");
        assert_eq!(counts.get(&Outcome::Failure), None);
    }

    #[test]
    fn test_unknown_site_is_empty_not_error() {
        let ds = sample();
        assert!(outcome_breakdown(&ds, "nowhere").is_empty());
        let rows = filter_by_payload(&ds, &SiteSelection::Site("nowhere".into()), 0.0, 1e9);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_filter_bounds_are_exclusive() {
        let ds = sample();
        let rows = filter_by_payload(&ds, &SiteSelection::All, 500.0, 2000.0);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].site, "siteB");
    }

    #[test]
    fn test_filter_by_site_and_payload() {
        let ds = sample();
        let rows = filter_by_payload(&ds, &SiteSelection::Site("siteA".into()), 0.0, 10_000.0);
        let payloads: Vec<f64> = rows.iter().map(|r| r.payload_kg).collect();
        assert_eq!(payloads, vec![500.0, 2000.0]);
    }

    #[test]
    fn test_inverted_or_nan_range_is_empty() {
        let ds = sample();
        assert!(filter_by_payload(&ds, &SiteSelection::All, 10_000.0, 0.0).is_empty());
        assert!(filter_by_payload(&ds, &SiteSelection::All, f64::NAN, 10_000.0).is_empty());
    }
}
