use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Outcome – the launch classification
// ---------------------------------------------------------------------------

/// Success / failure of a single launch.
///
/// Ordered so that `Failure < Success`, which keeps the per-site breakdown
/// in the same `0, 1` order as the source `class` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Numeric class as stored in the dataset (`1` success, `0` failure).
    pub fn class(self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl From<bool> for Outcome {
    fn from(success: bool) -> Self {
        if success {
            Outcome::Success
        } else {
            Outcome::Failure
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub site: String,
    /// Payload mass in kilograms, never negative.
    pub payload_kg: f64,
    pub outcome: Outcome,
    pub booster_version: String,
}

impl LaunchRecord {
    pub fn new(
        site: impl Into<String>,
        payload_kg: f64,
        outcome: Outcome,
        booster_version: impl Into<String>,
    ) -> Self {
        Self {
            site: site.into(),
            payload_kg,
            outcome,
            booster_version: booster_version.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Payload bounds / filter selection
// ---------------------------------------------------------------------------

/// Minimum and maximum payload mass over the whole dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

/// Payload window chosen on the range slider.
///
/// Matching is strict on both ends: `low < payload < high`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Whether `payload_kg` lies strictly inside the window. NaN bounds or an
    /// inverted window never match.
    pub fn contains(&self, payload_kg: f64) -> bool {
        self.low < payload_kg && payload_kg < self.high
    }
}

impl From<PayloadBounds> for PayloadRange {
    fn from(bounds: PayloadBounds) -> Self {
        Self::new(bounds.min, bounds.max)
    }
}

/// Label of the dropdown entry that selects every site.
pub const ALL_SITES: &str = "All Sites";

/// Launch-site dropdown value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Interpret a dropdown label; [`ALL_SITES`] maps to [`SiteSelection::All`].
    pub fn from_label(label: &str) -> Self {
        if label == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }

    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }
}

/// Both dashboard inputs together.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl FilterSelection {
    /// All sites, payload window spanning the dataset bounds.
    pub fn initial(dataset: &LaunchDataset) -> Self {
        let payload = dataset
            .payload_bounds()
            .map(PayloadRange::from)
            .unwrap_or(PayloadRange::new(0.0, 0.0));
        Self {
            site: SiteSelection::All,
            payload,
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed site list and payload bounds.
///
/// Read-only after construction; queries borrow from it.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    /// Distinct sites in order of first appearance.
    sites: Vec<String>,
    /// Distinct booster versions, sorted.
    booster_versions: BTreeSet<String>,
    payload_bounds: Option<PayloadBounds>,
}

impl LaunchDataset {
    /// Build indices from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        let mut booster_versions = BTreeSet::new();
        let mut payload_bounds: Option<PayloadBounds> = None;

        for rec in &records {
            if !sites.iter().any(|s| s == &rec.site) {
                sites.push(rec.site.clone());
            }
            booster_versions.insert(rec.booster_version.clone());

            let b = payload_bounds.get_or_insert(PayloadBounds {
                min: rec.payload_kg,
                max: rec.payload_kg,
            });
            b.min = b.min.min(rec.payload_kg);
            b.max = b.max.max(rec.payload_kg);
        }

        LaunchDataset {
            records,
            sites,
            booster_versions,
            payload_bounds,
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn booster_versions(&self) -> &BTreeSet<String> {
        &self.booster_versions
    }

    /// `None` when the dataset has no rows.
    pub fn payload_bounds(&self) -> Option<PayloadBounds> {
        self.payload_bounds
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_and_sites_follow_rows() {
        let ds = LaunchDataset::from_records(vec![
            LaunchRecord::new("KSC LC-39A", 3000.0, Outcome::Success, "F9 FT"),
            LaunchRecord::new("CCAFS LC-40", 0.0, Outcome::Failure, "F9 v1.0"),
            LaunchRecord::new("KSC LC-39A", 9600.0, Outcome::Success, "F9 B5"),
        ]);

        assert_eq!(ds.sites(), &["KSC LC-39A", "CCAFS LC-40"]);
        assert_eq!(
            ds.payload_bounds(),
            Some(PayloadBounds { min: 0.0, max: 9600.0 })
        );
        assert_eq!(ds.booster_versions().len(), 3);
    }

    #[test]
    fn test_empty_dataset_has_no_bounds() {
        let ds = LaunchDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.payload_bounds(), None);
        assert_eq!(FilterSelection::initial(&ds).payload, PayloadRange::new(0.0, 0.0));
    }

    #[test]
    fn test_range_is_strict() {
        let range = PayloadRange::new(500.0, 2000.0);
        assert!(!range.contains(500.0));
        assert!(range.contains(500.1));
        assert!(!range.contains(2000.0));
        assert!(!PayloadRange::new(f64::NAN, 2000.0).contains(1000.0));
        assert!(!PayloadRange::new(2000.0, 500.0).contains(1000.0));
    }

    #[test]
    fn test_site_selection_labels() {
        assert_eq!(SiteSelection::from_label(ALL_SITES), SiteSelection::All);
        let sel = SiteSelection::from_label("VAFB SLC-4E");
        assert_eq!(sel.label(), "VAFB SLC-4E");
        assert!(sel.matches("VAFB SLC-4E"));
        assert!(!sel.matches("KSC LC-39A"));
        assert!(SiteSelection::All.matches("anything"));
    }
}
