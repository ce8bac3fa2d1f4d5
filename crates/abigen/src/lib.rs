//! Generator for TypeScript ABI bindings from compiled contract artifacts.
//!
//! This library turns forge build output into `as const` ABI constants:
//! - Artifact loading with `abi` field validation
//! - Literal rendering with bare identifier keys
//! - Ordered fallback resolution for each contract target
//! - Configurable project root and output directory

pub mod artifact;
pub mod config;
pub mod convert;
pub mod error;
pub mod render;
pub mod target;

pub use artifact::{AbiSummary, Artifact};
pub use config::GeneratorConfig;
pub use convert::{Converter, Generated};
pub use error::ConvertError;
pub use render::{export_name, render_binding, render_literal};
pub use target::{default_targets, GenerationReport, Target, TargetOutcome};
