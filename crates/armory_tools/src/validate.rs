//! Data validation utilities.

use std::path::Path;

use armory_core::data::ProductionConfig;
use armory_core::error::{ProductionError, Result};

/// Read, parse and validate a production config file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, does not parse, or fails
/// validation.
pub fn load_config(path: &Path) -> Result<ProductionConfig> {
    let name = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|e| ProductionError::Io {
        path: name.clone(),
        message: e.to_string(),
    })?;

    let config = ProductionConfig::from_ron(&text, &name)?;
    let problems = config.validate();
    if !problems.is_empty() {
        return Err(ProductionError::InvalidConfig(
            problems
                .into_iter()
                .map(|problem| format!("{name}: {problem}"))
                .collect(),
        ));
    }

    Ok(config)
}

/// Validate all RON data files in a directory.
///
/// Every file is checked even after a failure so one run reports all
/// problems. Returns the number of files validated.
///
/// # Errors
///
/// Returns an error if the directory cannot be read or any data file fails
/// validation.
pub fn validate_data_directory(path: &Path) -> Result<usize> {
    let io_error = |e: std::io::Error| ProductionError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(path).map_err(io_error)? {
        let file = entry.map_err(io_error)?.path();
        if file.extension().is_some_and(|ext| ext == "ron") {
            files.push(file);
        }
    }
    files.sort();

    let mut problems = Vec::new();
    for file in &files {
        match load_config(file) {
            Ok(_) => tracing::debug!(file = %file.display(), "Config is valid"),
            Err(ProductionError::InvalidConfig(found)) => problems.extend(found),
            Err(e) => problems.push(e.to_string()),
        }
    }

    if problems.is_empty() {
        Ok(files.len())
    } else {
        Err(ProductionError::InvalidConfig(problems))
    }
}

/// Validate a single config file or every config in a directory.
///
/// # Errors
///
/// Returns an error if anything fails validation.
pub fn validate_path(path: &Path) -> Result<usize> {
    if path.is_dir() {
        validate_data_directory(path)
    } else {
        load_config(path).map(|_| 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armory_core::material::MaterialType;

    const VALID: &str = "(ratios: [(material: Sword, ratio: 1.0)], queued: [(material: Axe, count: 3)])";
    const OVER_LIMIT: &str = "(queued: [(material: Axe, count: 30)])";

    #[test]
    fn test_load_valid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.ron");
        std::fs::write(&path, VALID).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.ratio_for(MaterialType::Sword), Some(1.0));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("missing.ron")).unwrap_err();
        assert!(matches!(err, ProductionError::Io { .. }));
    }

    #[test]
    fn test_problems_are_prefixed_with_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("greedy.ron");
        std::fs::write(&path, OVER_LIMIT).unwrap();

        let err = load_config(&path).unwrap_err();
        let ProductionError::InvalidConfig(problems) = err else {
            panic!("expected InvalidConfig, got {err:?}");
        };
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("greedy.ron"));
    }

    #[test]
    fn test_directory_collects_every_failure() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a_good.ron"), VALID).unwrap();
        std::fs::write(dir.path().join("b_greedy.ron"), OVER_LIMIT).unwrap();
        std::fs::write(dir.path().join("c_broken.ron"), "(ratios: [").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a config").unwrap();

        let err = validate_data_directory(dir.path()).unwrap_err();
        let ProductionError::InvalidConfig(problems) = err else {
            panic!("expected InvalidConfig, got {err:?}");
        };
        assert_eq!(problems.len(), 2, "Problems: {problems:?}");
        assert!(problems[0].contains("b_greedy.ron"));
        assert!(problems[1].contains("c_broken.ron"));
    }

    #[test]
    fn test_directory_of_valid_configs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("one.ron"), VALID).unwrap();
        std::fs::write(dir.path().join("two.ron"), VALID).unwrap();

        assert_eq!(validate_path(dir.path()).unwrap(), 2);
    }

    #[test]
    fn test_shipped_data_is_valid() {
        let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        assert_eq!(validate_path(&data).unwrap(), 2);
    }
}
