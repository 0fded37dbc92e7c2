//! Shared test fixtures

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use launch_dashboard::data::model::{LaunchDataset, LaunchRecord, Outcome};
use tempfile::TempDir;

/// The three-launch example: two at siteA (one failed), one at siteB.
pub fn three_launches() -> LaunchDataset {
    LaunchDataset::from_records(vec![
        LaunchRecord::new("siteA", 500.0, Outcome::Success, "v1"),
        LaunchRecord::new("siteA", 2000.0, Outcome::Failure, "v1"),
        LaunchRecord::new("siteB", 1500.0, Outcome::Success, "v2"),
    ])
}

/// A larger dataset shaped like the public launch export: four sites,
/// payloads spread over 0..9600 kg, mixed outcomes.
pub fn launch_history() -> LaunchDataset {
    let sites = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];
    let boosters = ["v1.0", "v1.1", "FT", "B4", "B5"];
    let records = (0..40)
        .map(|i| {
            LaunchRecord::new(
                sites[i % sites.len()],
                (i as f64 * 247.0) % 9600.0,
                Outcome::from(i % 3 != 0),
                boosters[i % boosters.len()],
            )
        })
        .collect();
    LaunchDataset::from_records(records)
}

/// Write `contents` to `name` inside a fresh temp dir. Keep the `TempDir`
/// alive for as long as the file is needed.
pub fn write_fixture(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    (dir, path)
}

/// Excerpt in the layout of the pandas CSV export (leading unnamed index).
pub const EXPORT_CSV: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,0.0,F9 v1.0  B0004,v1.0
2,3,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
3,4,CCAFS LC-40,0,500.0,F9 v1.0  B0006,v1.0
4,5,CCAFS LC-40,0,677.0,F9 v1.0  B0007,v1.0
5,7,CCAFS LC-40,1,3170.0,F9 v1.1,v1.1
6,6,VAFB SLC-4E,0,500.0,F9 v1.1  B1003,v1.1
7,44,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
8,53,KSC LC-39A,1,9600.0,F9 B5 B1046.1,B5
";
