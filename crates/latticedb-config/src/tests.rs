use super::*;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn empty_file_yields_defaults() {
    let config = LatticeConfig::from_toml_str("").unwrap();

    assert_eq!(config, LatticeConfig::default());
    assert_eq!(config.grid_bounds().unwrap(), GridBounds::default());
    assert_eq!(config.store_paths(), StorePaths::in_dir("."));
}

#[test]
fn partial_sections_keep_defaults() {
    let config = LatticeConfig::from_toml_str(
        r#"
        [grid]
        max_coordinate = 20

        [store]
        data_file = "paths.bin"
        "#,
    )
    .unwrap();

    assert_eq!(config.grid.max_coordinate, 20);
    assert_eq!(config.grid_bounds().unwrap().digits(), 2);
    assert_eq!(config.store.index_file, DEFAULT_INDEX_FILE);
    assert_eq!(config.store_paths().data, Path::new("./paths.bin"));
}

#[test]
fn unknown_keys_are_rejected() {
    let err = LatticeConfig::from_toml_str("[grid]\nmax = 5\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    let err = LatticeConfig::from_toml_str("[cache]\nsize = 5\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn bound_outside_supported_range_is_invalid() {
    for max in [0, MAX_SUPPORTED_COORDINATE + 1] {
        let err = LatticeConfig::from_toml_str(&format!("[grid]\nmax_coordinate = {max}\n"))
            .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "grid.max_coordinate",
                ..
            }
        ));
    }
}

#[test]
fn file_names_must_be_present_and_distinct() {
    let empty = LatticeConfig::from_toml_str("[store]\nindex_file = \" \"\n").unwrap_err();
    let same = LatticeConfig::from_toml_str("[store]\ndata_file = \"map.bin\"\n").unwrap_err();

    assert!(matches!(
        empty,
        ConfigError::Invalid {
            field: "store.index_file",
            ..
        }
    ));
    assert!(matches!(
        same,
        ConfigError::Invalid {
            field: "store.data_file",
            ..
        }
    ));
}

#[test]
fn load_resolves_relative_dir_against_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(DEFAULT_CONFIG_FILE);
    fs::write(&path, "[store]\ndir = \"data\"\n").unwrap();

    let config = LatticeConfig::load(&path).unwrap();

    assert_eq!(config.store.dir, dir.path().join("data"));
    assert_eq!(config.store_paths().index, dir.path().join("data/map.bin"));
}

#[test]
fn load_keeps_absolute_dir() {
    let dir = TempDir::new().unwrap();
    let store_dir = dir.path().join("elsewhere");
    let path = dir.path().join(DEFAULT_CONFIG_FILE);
    fs::write(
        &path,
        format!("[store]\ndir = {:?}\n", store_dir.display().to_string()),
    )
    .unwrap();

    let config = LatticeConfig::load(&path).unwrap();

    assert_eq!(config.store.dir, store_dir);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();

    let err = LatticeConfig::load(dir.path().join("absent.toml")).unwrap_err();

    assert!(matches!(err, ConfigError::Read { .. }));
}
