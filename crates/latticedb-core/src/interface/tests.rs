use super::*;
use crate::{
    error::ErrorClass,
    store::{StoreWriter, build_store},
};
use tempfile::TempDir;

fn built_service(max: u32) -> (TempDir, GridService) {
    let dir = TempDir::new().unwrap();
    let bounds = GridBounds::new(max).unwrap();
    let paths = StorePaths::in_dir(dir.path());
    build_store(&PathCounter::new(bounds), paths.clone()).unwrap();

    let service = GridService::open(paths, bounds).unwrap();

    (dir, service)
}

#[test]
fn edges_omit_the_placeholder_slot() {
    let (_dir, service) = built_service(4);

    assert!(service.lookup_edges(0, 0).unwrap().is_empty());
    assert_eq!(service.lookup_edges(1, 1).unwrap(), vec![0.5; 4]);
    assert_eq!(service.lookup_edges(2, 1).unwrap().len(), 7);
}

#[test]
fn paths_are_decimal_strings() {
    let (_dir, service) = built_service(4);

    assert_eq!(service.lookup_paths(0, 0).unwrap(), "1");
    assert_eq!(service.lookup_paths(2, 2).unwrap(), "6");
    assert_eq!(service.lookup_paths(4, 4).unwrap(), "70");
}

#[test]
fn complete_info_matches_separate_lookups() {
    let (_dir, service) = built_service(4);

    let complete = service.lookup_complete(3, 2).unwrap();

    assert_eq!(complete.paths, service.lookup_paths(3, 2).unwrap());
    assert_eq!(complete.edges, service.lookup_edges(3, 2).unwrap());
}

#[test]
fn chance_reports_ratio_and_exact_counts() {
    let (_dir, service) = built_service(4);

    let response = service.compute_chance(1, 1, 2, 2).unwrap();

    assert_eq!(response.paths_through, "4");
    assert_eq!(response.paths_total, "6");
    let chance = response.chance.unwrap();
    assert!((chance - 4.0 / 6.0).abs() < 1e-8, "chance {chance}");
}

#[test]
fn chance_without_precision_keeps_exact_counts() {
    let dir = TempDir::new().unwrap();
    let bounds = GridBounds::new(500).unwrap();
    let paths = StorePaths::in_dir(dir.path());
    let counter = PathCounter::new(bounds);
    let writer = StoreWriter::new(paths.clone(), &counter);
    let infos = writer.build_data(&[Coordinate::ORIGIN]).unwrap();
    writer.publish_index(&infos).unwrap();
    let service = GridService::open(paths, bounds).unwrap();

    let response = service.compute_chance(480, 0, 480, 480).unwrap();

    assert_eq!(response.chance, None);
    assert_eq!(response.paths_through, "1");
    assert!(response.paths_total.len() > 280);
}

#[test]
fn out_of_range_coordinates_are_invariant_violations() {
    let (_dir, service) = built_service(4);

    let edges = service.lookup_edges(5, 0).unwrap_err();
    let chance = service.compute_chance(3, 3, 2, 2).unwrap_err();

    assert_eq!(edges.class, ErrorClass::InvariantViolation);
    assert_eq!(edges.origin, ErrorOrigin::Store);
    assert_eq!(chance.class, ErrorClass::InvariantViolation);
    assert_eq!(chance.origin, ErrorOrigin::Grid);
}

#[test]
fn unbuilt_coordinates_are_not_found() {
    let dir = TempDir::new().unwrap();
    let bounds = GridBounds::new(9).unwrap();
    let paths = StorePaths::in_dir(dir.path());
    let counter = PathCounter::new(bounds);
    let writer = StoreWriter::new(paths.clone(), &counter);
    let infos = writer
        .build_data(&[Coordinate::ORIGIN, Coordinate::new(0, 3)])
        .unwrap();
    writer.publish_index(&infos).unwrap();
    let service = GridService::open(paths, bounds).unwrap();

    let err = service.lookup_paths(0, 1).unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.origin, ErrorOrigin::Interface);
    assert_eq!(service.lookup_paths(0, 3).unwrap(), "1");
}

#[test]
fn mismatched_bounds_are_rejected() {
    let (dir, _service) = built_service(4);
    let reader = StoreReader::open(StorePaths::in_dir(dir.path()), GridBounds::new(4).unwrap())
        .unwrap();

    let err = GridService::new(reader, PathCounter::new(GridBounds::new(9).unwrap())).unwrap_err();

    assert_eq!(err.class, ErrorClass::InvariantViolation);
    assert_eq!(err.origin, ErrorOrigin::Interface);
}

#[test]
fn responses_serialize_as_plain_json() {
    let info = CompleteInfo {
        edges: vec![0.5, 0.25],
        paths: "6".to_string(),
    };

    let json = serde_json::to_value(&info).unwrap();

    assert_eq!(json, serde_json::json!({ "edges": [0.5, 0.25], "paths": "6" }));
}
