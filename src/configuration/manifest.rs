use config::{Config, ConfigError, File};
use serde_derive::Deserialize;
use std::path::PathBuf;

/// Release-gate expectation table, loaded from an external file so the
/// thresholds can change release-to-release without touching the binary.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub name: String,
    #[serde(default)]
    pub expect: Vec<ExpectEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectEntry {
    pub suite: String,
    #[serde(default)]
    pub min_pass: Option<u64>,
    #[serde(default)]
    pub max_fail: Option<u64>,
    #[serde(default)]
    pub absent: bool,
}

impl Manifest {
    pub fn from(file: PathBuf) -> Result<Self, ConfigError> {
        let mut config = Config::new();
        config.merge(File::from(file))?;

        config.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_loading_manifest_from_yaml_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            "name: gate\nexpect:\n  - suite: mc\n    min_pass: 14\n  - suite: s3cmd\n    max_fail: 0\n  - suite: minio-dotnet\n    absent: true"
        )
        .unwrap();

        let manifest = Manifest::from(file.path().to_path_buf()).unwrap();

        assert_eq!(manifest.name, "gate");
        assert_eq!(manifest.expect.len(), 3);
        assert_eq!(manifest.expect[0].suite, "mc");
        assert_eq!(manifest.expect[0].min_pass, Some(14));
        assert_eq!(manifest.expect[0].max_fail, None);
        assert!(!manifest.expect[0].absent);
        assert_eq!(manifest.expect[1].max_fail, Some(0));
        assert!(manifest.expect[2].absent);
    }

    #[test]
    fn test_loading_manifest_without_expectations() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        writeln!(file, "name: empty gate").unwrap();

        let manifest = Manifest::from(file.path().to_path_buf()).unwrap();

        assert_eq!(manifest.name, "empty gate");
        assert!(manifest.expect.is_empty());
    }

    #[test]
    fn test_loading_manifest_from_missing_file_fails() {
        let result = Manifest::from(PathBuf::from("no-such-manifest.yaml"));

        assert!(result.is_err());
    }
}
