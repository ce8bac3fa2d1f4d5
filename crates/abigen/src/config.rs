//! Generator configuration parameters.

use std::path::{Path, PathBuf};

/// Configuration for the binding generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory that artifact candidate paths are resolved against.
    /// This is the contracts project root (where `out/` and `lib/` live).
    pub project_root: PathBuf,

    /// Directory for generated binding files, relative to the project root
    /// unless absolute.
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            output_dir: PathBuf::from("abis"),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration rooted at the process working directory.
    pub fn from_current_dir() -> std::io::Result<Self> {
        Ok(Self::default().with_project_root(std::env::current_dir()?))
    }

    /// Create a new configuration with a custom project root.
    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = root.into();
        self
    }

    /// Create a new configuration with a custom output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Resolve a candidate path against the project root.
    /// Absolute paths are returned unchanged.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.project_root.join(path)
    }

    /// Directory the binding files are written to.
    pub fn output_root(&self) -> PathBuf {
        self.resolve(&self.output_dir)
    }

    /// Full path of a binding file with the given name.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_root().join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = GeneratorConfig::default();

        assert_eq!(
            config.output_path("TokenFactoryAbi.ts"),
            PathBuf::from("./abis/TokenFactoryAbi.ts")
        );
        assert_eq!(
            config.resolve("out/TokenFactory.sol/TokenFactory.json"),
            PathBuf::from("./out/TokenFactory.sol/TokenFactory.json")
        );
    }

    #[test]
    fn test_custom_root_and_output() {
        let config = GeneratorConfig::default()
            .with_project_root("/work/contracts")
            .with_output_dir("frontend/src/abis");

        assert_eq!(
            config.output_path("PoolManagerAbi.ts"),
            PathBuf::from("/work/contracts/frontend/src/abis/PoolManagerAbi.ts")
        );
    }

    #[test]
    fn test_absolute_paths_bypass_root() {
        let config = GeneratorConfig::default().with_project_root("/work/contracts");

        assert_eq!(config.resolve("/tmp/Artifact.json"), PathBuf::from("/tmp/Artifact.json"));

        let config = config.with_output_dir("/srv/abis");
        assert_eq!(config.output_root(), PathBuf::from("/srv/abis"));
    }
}
