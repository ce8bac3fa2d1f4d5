//! Contract targets and fallback resolution of their artifacts.

use crate::convert::{Converter, Generated};
use crate::render::export_name;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// A contract whose binding should be generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// File name of the binding, e.g. `TokenFactoryAbi.ts`.
    pub output_name: String,
    /// Artifact locations to try, primary first.
    pub candidates: Vec<PathBuf>,
    /// Command that produces the artifact, shown when no candidate works.
    pub build_hint: Option<String>,
}

impl Target {
    /// Create a target with a primary artifact location.
    pub fn new(output_name: impl Into<String>, primary: impl Into<PathBuf>) -> Self {
        Self {
            output_name: output_name.into(),
            candidates: vec![primary.into()],
            build_hint: None,
        }
    }

    /// Add a fallback location, tried after every earlier one.
    pub fn with_fallback(mut self, path: impl Into<PathBuf>) -> Self {
        self.candidates.push(path.into());
        self
    }

    /// Set the command suggested when every candidate fails.
    pub fn with_build_hint(mut self, hint: impl Into<String>) -> Self {
        self.build_hint = Some(hint.into());
        self
    }
}

/// The built-in worklist for the launchpad contracts.
pub fn default_targets() -> Vec<Target> {
    vec![
        Target::new("TokenFactoryAbi.ts", "out/TokenFactory.sol/TokenFactory.json")
            .with_build_hint("forge build"),
        Target::new("BondingCurveAbi.ts", "out/BondingCurve.sol/BondingCurve.json")
            .with_build_hint("forge build"),
        // Uniswap v4 PoolManager, from whichever dependency has it compiled.
        Target::new("PoolManagerAbi.ts", "lib/hookmate/src/artifacts/V4PoolManager.sol")
            .with_fallback("lib/uniswap-hooks/lib/v4-core/out/PoolManager.sol/PoolManager.json")
            .with_fallback("out/PoolManager.sol/PoolManager.json")
            .with_fallback("lib/hookmate/src/artifacts/V4PoolManagerDeployer.sol")
            .with_build_hint("cd lib/uniswap-hooks/lib/v4-core && forge build"),
    ]
}

/// Result of resolving one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetOutcome {
    /// A candidate converted successfully.
    Generated {
        /// The artifact that was used.
        source: PathBuf,
        generated: Generated,
    },
    /// No candidate could be converted.
    Exhausted,
}

impl TargetOutcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, TargetOutcome::Generated { .. })
    }
}

/// Outcomes of a full run, in worklist order.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub outcomes: Vec<(Target, TargetOutcome)>,
}

impl GenerationReport {
    /// Number of targets that produced a binding.
    pub fn generated_count(&self) -> usize {
        self.outcomes.iter().filter(|(_, outcome)| outcome.is_generated()).count()
    }

    /// Targets for which every candidate failed.
    pub fn exhausted(&self) -> impl Iterator<Item = &Target> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| !outcome.is_generated())
            .map(|(target, _)| target)
    }

    /// Log where the bindings live and how to import them.
    pub fn log_summary(&self, converter: &Converter) {
        info!(
            target: "abigen",
            generated = self.generated_count(),
            total = self.outcomes.len(),
            "ABI generation complete"
        );

        for (target, _) in &self.outcomes {
            let path = converter.config().output_path(&target.output_name);
            info!(target: "abigen", path = %path.display(), "Binding location");
        }

        for (target, outcome) in &self.outcomes {
            if let TargetOutcome::Generated { generated, .. } = outcome {
                let module = target
                    .output_name
                    .strip_suffix(".ts")
                    .unwrap_or(target.output_name.as_str());
                info!(
                    target: "abigen",
                    "import {{ {} }} from '{}';",
                    generated.export_name,
                    import_path(&converter.config().output_dir, module)
                );
            }
        }
    }
}

/// Module specifier for a binding, relative specifiers prefixed with `./`.
fn import_path(output_dir: &Path, module: &str) -> String {
    let path = output_dir.join(module);
    if output_dir.is_absolute() {
        path.display().to_string()
    } else {
        format!("./{}", path.display())
    }
}

impl Converter {
    /// Generate the binding for one target.
    ///
    /// Candidates are tried in declared order. Absent paths are skipped,
    /// failed conversions fall through to the next candidate, and the first
    /// success ends the search.
    pub fn generate(&self, target: &Target) -> TargetOutcome {
        if let Err(err) = export_name(&target.output_name) {
            error!(target: "abigen", %err, "Skipping target");
            return TargetOutcome::Exhausted;
        }

        for (index, candidate) in target.candidates.iter().enumerate() {
            let path = self.config().resolve(candidate);

            if !path.exists() {
                warn!(
                    target: "abigen",
                    contract = %target.output_name,
                    path = %path.display(),
                    "Artifact not found, looking for alternative paths"
                );
                continue;
            }

            if index > 0 {
                info!(
                    target: "abigen",
                    contract = %target.output_name,
                    path = %path.display(),
                    "Found fallback artifact"
                );
            }

            if let Some(generated) = self.convert_logged(&path, &target.output_name) {
                return TargetOutcome::Generated {
                    source: path,
                    generated,
                };
            }
        }

        error!(
            target: "abigen",
            contract = %target.output_name,
            tried = target.candidates.len(),
            "Could not find a usable artifact. You may need to compile the contracts first"
        );
        if let Some(hint) = &target.build_hint {
            info!(target: "abigen", "Try running: {hint}");
        }

        TargetOutcome::Exhausted
    }

    /// Generate every target in order.
    pub fn generate_all(&self, targets: &[Target]) -> GenerationReport {
        GenerationReport {
            outcomes: targets
                .iter()
                .map(|target| (target.clone(), self.generate(target)))
                .collect(),
        }
    }
}
