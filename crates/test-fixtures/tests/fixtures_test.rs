//! Golden dataset integrity: every file parses, ids are unique, and expected
//! ranges are well formed and inside their text.

use std::collections::HashSet;

use test_fixtures::{list_fixtures, load_fixture, GoldenSet};

#[test]
fn every_golden_file_is_well_formed() {
    let files = list_fixtures("golden/privacy");
    assert!(!files.is_empty(), "no golden files found");

    for path in files {
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        let set: GoldenSet = load_fixture(&format!("golden/privacy/{name}"));
        assert!(!set.description.is_empty(), "{name}: missing description");

        let mut ids = HashSet::new();
        for case in &set.cases {
            assert!(ids.insert(case.id.clone()), "{name}: duplicate id {}", case.id);

            let len = case.text.chars().count();
            let mut last_end = 0;
            for d in &case.expected_detections {
                assert!(d.start < d.end, "{name}/{}: empty range", case.id);
                assert!(d.end <= len, "{name}/{}: range past text", case.id);
                assert!(d.start >= last_end, "{name}/{}: ranges overlap", case.id);
                last_end = d.end;
            }
        }
    }
}
