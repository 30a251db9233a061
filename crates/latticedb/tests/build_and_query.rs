use latticedb::{ErrorKind, build, config::LatticeConfig, open_service};
use tempfile::TempDir;

fn config_in(dir: &TempDir, max: u32) -> LatticeConfig {
    let mut config = LatticeConfig::default();
    config.grid.max_coordinate = max;
    config.store.dir = dir.path().to_path_buf();

    config
}

#[test]
fn build_then_query_through_the_facade() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir, 5);

    let summary = build(&config).unwrap();
    let service = open_service(&config).unwrap();

    assert_eq!(summary.records, 36);
    assert_eq!(service.lookup_paths(5, 5).unwrap(), "252");
    assert_eq!(service.lookup_edges(1, 0).unwrap(), vec![1.0]);

    let chance = service.compute_chance(0, 0, 5, 5).unwrap();
    assert_eq!(chance.paths_through, chance.paths_total);
    assert!((chance.chance.unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn opening_an_unbuilt_store_is_not_found() {
    let dir = TempDir::new().unwrap();

    let err = open_service(&config_in(&dir, 5)).unwrap_err();

    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[test]
fn invalid_bounds_surface_as_config_errors() {
    let dir = TempDir::new().unwrap();

    let err = build(&config_in(&dir, 0)).unwrap_err();

    assert_eq!(err.kind, ErrorKind::Config);
}
