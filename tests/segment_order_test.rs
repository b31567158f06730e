use std::cmp::Ordering;
use std::io::Write;
use std::sync::Arc;
use std::thread;

use tempfile::Builder;

use segsort::{
    LeafReaderSet, LeafSorter, SegSortError, SegmentInfo, SegmentSort, SegmentSortConfig,
    SegmentTimeLeafSorter, TIMESTAMP_DIAGNOSTIC, sort_leaves,
};

fn scenario_segments() -> Vec<SegmentInfo> {
    vec![
        SegmentInfo::new("seg_0").with_diagnostic(TIMESTAMP_DIAGNOSTIC, "100"),
        SegmentInfo::new("seg_1").with_diagnostic(TIMESTAMP_DIAGNOSTIC, "50"),
        SegmentInfo::new("seg_2"),
    ]
}

fn timestamps(leaves: &[SegmentInfo]) -> Vec<Option<&str>> {
    leaves.iter().map(|s| s.timestamp_diagnostic()).collect()
}

#[test]
fn test_scenario_ascending_and_descending() {
    let mut asc = scenario_segments();
    sort_leaves(&SegmentTimeLeafSorter::new(SegmentSort::TimeAsc), &mut asc);
    assert_eq!(timestamps(&asc), vec![Some("50"), Some("100"), None]);

    let mut desc = scenario_segments();
    sort_leaves(&SegmentTimeLeafSorter::new(SegmentSort::TimeDesc), &mut desc);
    assert_eq!(timestamps(&desc), vec![Some("100"), Some("50"), None]);
}

#[test]
fn test_failed_segments_always_last() {
    let leaves = || {
        vec![
            SegmentInfo::new("bad_0").with_diagnostic(TIMESTAMP_DIAGNOSTIC, "not-a-number"),
            SegmentInfo::new("ok_min").with_timestamp(i64::MIN + 1),
            SegmentInfo::new("bad_1"),
            SegmentInfo::new("ok_zero").with_timestamp(0),
            SegmentInfo::new("ok_max").with_timestamp(i64::MAX - 1),
        ]
    };

    for policy in [SegmentSort::TimeAsc, SegmentSort::TimeDesc] {
        let set = LeafReaderSet::open(leaves(), Arc::new(SegmentTimeLeafSorter::new(policy)))
            .unwrap();
        let ids = set.segment_ids();
        // Stable sort keeps the two failures in open order.
        assert_eq!(&ids[3..], &["bad_0", "bad_1"], "policy {policy}");
    }
}

#[test]
fn test_total_order_properties() {
    let sorter = SegmentTimeLeafSorter::new(SegmentSort::TimeAsc);
    let cmp = sorter.leaf_sorter().unwrap();
    let leaves = vec![
        SegmentInfo::new("a").with_timestamp(-10),
        SegmentInfo::new("b").with_timestamp(0),
        SegmentInfo::new("c").with_timestamp(0),
        SegmentInfo::new("d").with_timestamp(7),
        SegmentInfo::new("e"),
        SegmentInfo::new("f").with_diagnostic(TIMESTAMP_DIAGNOSTIC, "1e3"),
    ];

    for x in &leaves {
        assert_eq!(cmp(x, x), Ordering::Equal);
        for y in &leaves {
            assert_eq!(cmp(x, y), cmp(y, x).reverse());
            for z in &leaves {
                if cmp(x, y) != Ordering::Greater && cmp(y, z) != Ordering::Greater {
                    assert_ne!(cmp(x, z), Ordering::Greater);
                }
            }
        }
    }
}

#[test]
fn test_no_sort_keeps_open_order() {
    let sorter = SegmentTimeLeafSorter::new(SegmentSort::None);
    assert!(sorter.leaf_sorter().is_none());

    let set = LeafReaderSet::open(scenario_segments(), Arc::new(sorter)).unwrap();
    assert_eq!(set.segment_ids(), vec!["seg_0", "seg_1", "seg_2"]);
}

#[test]
fn test_concurrent_first_use_shares_comparator() {
    let sorter = Arc::new(SegmentTimeLeafSorter::new(SegmentSort::TimeDesc));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let sorter = sorter.clone();
            thread::spawn(move || sorter.leaf_sorter().unwrap())
        })
        .collect();
    let comparators: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    for comparator in &comparators[1..] {
        assert!(Arc::ptr_eq(&comparators[0], comparator));
    }
}

#[test]
fn test_config_file_drives_reader() {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"segment_sort": "TIME_DESC"}}"#).unwrap();

    let config = SegmentSortConfig::from_file(file.path()).unwrap();
    assert_eq!(config.segment_sort, SegmentSort::TimeDesc);

    let set = LeafReaderSet::open(scenario_segments(), config.build_leaf_sorter()).unwrap();
    assert_eq!(set.segment_ids(), vec!["seg_0", "seg_1", "seg_2"]);
    assert_eq!(set.sort_description(), "SegmentTimeLeafSorter{time_desc}");

    let refreshed = set
        .refresh(vec![
            SegmentInfo::new("seg_3").with_timestamp(500),
            SegmentInfo::new("seg_0").with_timestamp(100),
        ])
        .unwrap();
    assert_eq!(refreshed.segment_ids(), vec!["seg_3", "seg_0"]);
}

#[test]
fn test_missing_config_file() {
    let dir = Builder::new().prefix("segsort_config").tempdir().unwrap();
    let err = SegmentSortConfig::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SegSortError::Io(_)));
}
