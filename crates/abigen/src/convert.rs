//! Conversion of one artifact into one binding file.

use crate::artifact::Artifact;
use crate::config::GeneratorConfig;
use crate::error::ConvertError;
use crate::render::{export_name, render_binding};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// A binding file that was written successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Where the binding was written.
    pub output_path: PathBuf,
    /// Name of the exported constant.
    pub export_name: String,
    /// Number of top-level ABI entries in the binding.
    pub entries: usize,
}

/// Converts compiled artifacts into TypeScript ABI bindings.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: GeneratorConfig,
}

impl Converter {
    /// Create a new converter.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The configuration this converter writes with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Convert `input` into `<output_dir>/<output_name>`, logging the outcome.
    ///
    /// Returns `true` if the binding was written. Failures are logged with
    /// their path context and never propagate.
    pub fn convert(&self, input: &Path, output_name: &str) -> bool {
        self.convert_logged(input, output_name).is_some()
    }

    pub(crate) fn convert_logged(&self, input: &Path, output_name: &str) -> Option<Generated> {
        info!(target: "abigen", input = %input.display(), "Processing artifact");

        match self.try_convert(input, output_name) {
            Ok(generated) => {
                info!(
                    target: "abigen",
                    output = %generated.output_path.display(),
                    export = %generated.export_name,
                    entries = generated.entries,
                    "Successfully written binding"
                );
                Some(generated)
            }
            Err(err) => {
                error!(
                    target: "abigen",
                    input = %input.display(),
                    %err,
                    "Failed to generate binding"
                );
                None
            }
        }
    }

    /// Convert `input` into `<output_dir>/<output_name>`.
    ///
    /// Nothing is written unless the artifact loads and carries an ABI array.
    pub fn try_convert(&self, input: &Path, output_name: &str) -> Result<Generated, ConvertError> {
        let export_name = export_name(output_name)?;
        let artifact = Artifact::load(input)?;

        match artifact.summary() {
            Some(summary) => debug!(
                target: "abigen",
                path = %artifact.path.display(),
                functions = summary.functions,
                events = summary.events,
                errors = summary.errors,
                constructor = summary.has_constructor,
                fallback = summary.has_fallback,
                receive = summary.has_receive,
                "Loaded ABI"
            ),
            None => debug!(
                target: "abigen",
                path = %artifact.path.display(),
                entries = artifact.entry_count(),
                "Loaded ABI that does not parse as a Solidity ABI, copying verbatim"
            ),
        }

        let contents = render_binding(export_name, artifact.abi());

        let output_root = self.config.output_root();
        fs::create_dir_all(&output_root).map_err(|source| ConvertError::CreateDir {
            path: output_root.clone(),
            source,
        })?;

        let output_path = output_root.join(output_name);
        fs::write(&output_path, contents).map_err(|source| ConvertError::Write {
            path: output_path.clone(),
            source,
        })?;

        Ok(Generated {
            output_path,
            export_name: export_name.to_string(),
            entries: artifact.entry_count(),
        })
    }
}
