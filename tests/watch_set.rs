use std::collections::HashSet;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use bemwatch::{BemUnit, BemWatchError, build_watch_set};
use bemwatch_test_utils::builders::{sample_decl, synthetic_decl};
use bemwatch_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn sample_decl_fans_out_across_levels() -> TestResult {
    init_tracing();

    let units = sample_decl();
    let levels = ["levels.base", "levels.common"];

    let paths = build_watch_set(&units, &levels)?;
    let set: HashSet<&Path> = paths.iter().map(PathBuf::as_path).collect();

    let expected = [
        "levels.base",
        "levels.common",
        "levels.base/page",
        "levels.base/page/__script",
        "levels.common/page",
        "levels.common/page/__script",
        "levels.base/img",
        "levels.base/img/_lightbox",
        "levels.common/img",
        "levels.common/img/_lightbox",
    ];

    assert_eq!(paths.len(), expected.len());
    for entry in expected {
        assert!(set.contains(Path::new(entry)), "missing {entry}");
    }

    // Namespace directories never appear detached from a level.
    assert!(!set.contains(Path::new("img")));
    assert!(!set.contains(Path::new("lightbox")));
    assert!(!set.contains(Path::new("_lightbox")));
    assert!(!set.contains(Path::new("page")));

    Ok(())
}

#[test]
fn output_is_sorted_and_deterministic() -> TestResult {
    let units = sample_decl();
    let levels = ["levels.common", "levels.base"];

    let first = build_watch_set(&units, &levels)?;
    let second = build_watch_set(&units, &levels)?;

    assert_eq!(first, second);
    assert!(first.windows(2).all(|w| w[0] < w[1]), "not strictly sorted");

    Ok(())
}

#[test]
fn duplicate_units_and_levels_deduplicate() -> TestResult {
    let mut units = sample_decl();
    units.extend(sample_decl());
    let levels = ["levels.base", "levels.base", "levels.common"];

    let paths = build_watch_set(&units, &levels)?;
    let unique: HashSet<&PathBuf> = paths.iter().collect();
    assert_eq!(paths.len(), unique.len());
    assert_eq!(paths.len(), 10);

    Ok(())
}

#[test]
fn levels_without_matching_units_still_appear() -> TestResult {
    let paths = build_watch_set(&[], &["levels.base", "levels.common"])?;
    assert_eq!(
        paths,
        vec![PathBuf::from("levels.base"), PathBuf::from("levels.common")]
    );
    Ok(())
}

#[test]
fn empty_levels_yield_empty_set() -> TestResult {
    let levels: [&str; 0] = [];
    let paths = build_watch_set(&sample_decl(), &levels)?;
    assert!(paths.is_empty());
    Ok(())
}

#[test]
fn ancestry_is_complete_per_namespace_depth() -> TestResult {
    // Depth 3 namespace: img / __photo / _lightbox.
    let unit = BemUnit::new("img").with_elem("photo").with_mod("lightbox", true);
    let paths = build_watch_set(std::slice::from_ref(&unit), &["lvl"])?;

    assert_eq!(
        paths,
        vec![
            PathBuf::from("lvl"),
            PathBuf::from("lvl/img"),
            PathBuf::from("lvl/img/__photo"),
            PathBuf::from("lvl/img/__photo/_lightbox"),
        ]
    );

    Ok(())
}

#[test]
fn nested_level_paths_join_without_normalisation() -> TestResult {
    let units = vec![BemUnit::new("page")];
    let paths = build_watch_set(&units, &["test/levels/blocks.base"])?;

    assert_eq!(
        paths,
        vec![
            PathBuf::from("test/levels/blocks.base"),
            PathBuf::from("test/levels/blocks.base/page"),
        ]
    );

    Ok(())
}

#[test]
fn invalid_unit_fails_the_whole_computation() {
    let units = vec![
        BemUnit::new("page"),
        BemUnit {
            block: String::new(),
            elem: Some("script".to_string()),
            modifier: None,
        },
    ];

    let err = build_watch_set(&units, &["levels.base"]).unwrap_err();
    assert!(matches!(err, BemWatchError::InvalidUnit { .. }));
}

#[test]
fn thousand_units_twelve_levels_is_fast() -> TestResult {
    init_tracing();

    // 250 blocks x 4 unit shapes = 1000 units.
    let units = synthetic_decl(250);
    assert_eq!(units.len(), 1000);

    let levels: Vec<String> = (1..=12).map(|i| format!("levels/blocks.{i:02}")).collect();

    let start = Instant::now();
    let paths = build_watch_set(&units, &levels)?;
    let elapsed = start.elapsed();

    assert!(!paths.is_empty());
    // Guard against accidental quadratic blowup in the ancestry walk. The
    // budget is generous to absorb slow CI and debug builds; release runs
    // finish in well under a millisecond per thousand units.
    assert!(
        elapsed < Duration::from_millis(800),
        "watch set took {elapsed:?}"
    );

    Ok(())
}
