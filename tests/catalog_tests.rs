use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use muster::catalog::{build_minis, load_collection, load_unit_catalog, units_by_chassis};

fn unique_temp_path(name: &str, extension: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("muster-{name}-{stamp}.{extension}"))
}

const UNITS_JSON: &str = r#"[
    {"chassis": "Atlas", "model": "AS7-D", "PV": 52, "TP": "BM", "year": 2755},
    {"chassis": "Atlas", "model": "AS7-K", "PV": 49, "TP": "BM", "year": 3049},
    {"chassis": "Mad Cat", "clanChassis": "Timber Wolf", "model": "Prime",
     "PV": 54, "TP": "BM", "clan": true, "year": 3049}
]"#;

#[test]
fn loads_catalog_and_builds_minis_from_collection() {
    let units_path = unique_temp_path("units", "json");
    let minis_path = unique_temp_path("minis", "csv");
    fs::write(&units_path, UNITS_JSON).expect("write units");
    fs::write(&minis_path, "chassis\nAtlas\nTimber Wolf\nAtlas\n").expect("write minis");

    let units = load_unit_catalog(&units_path).expect("catalog should parse");
    assert_eq!(units.len(), 3);

    let collection = load_collection(&minis_path).expect("collection should parse");
    assert_eq!(collection, vec!["Atlas", "Timber Wolf", "Atlas"]);

    let minis = build_minis(&collection, &units_by_chassis(units));
    assert_eq!(minis.len(), 3);
    assert_eq!(minis[0].variants.len(), 2);
    assert_eq!(minis[1].variants.len(), 1);
    assert_eq!(minis[1].variants[0].clan_chassis, "Timber Wolf");
    // The duplicate Atlas row is a distinct mini with the same variant list.
    assert_ne!(minis[0].id, minis[2].id);
    assert_eq!(minis[0].variants, minis[2].variants);

    fs::remove_file(&units_path).ok();
    fs::remove_file(&minis_path).ok();
}

#[test]
fn missing_catalog_file_is_an_io_error() {
    let missing = unique_temp_path("missing", "json");
    let err = load_unit_catalog(&missing).expect_err("load should fail");
    assert!(err.to_string().contains("failed to read"));
}

#[test]
fn malformed_catalog_is_a_parse_error() {
    let units_path = unique_temp_path("bad-units", "json");
    fs::write(&units_path, "{not json").expect("write units");
    let err = load_unit_catalog(&units_path).expect_err("load should fail");
    assert!(err.to_string().contains("failed to parse"));
    fs::remove_file(&units_path).ok();
}
