//! Compiled contract artifacts and their `abi` field.

use crate::error::ConvertError;
use alloy::json_abi::JsonAbi;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// A compiled contract artifact, reduced to the ABI array it carries.
///
/// The ABI is kept as raw JSON so that field names, key order and any
/// compiler-specific extras survive into the generated binding untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    /// Where the artifact was read from.
    pub path: PathBuf,
    /// The `abi` array, verbatim.
    abi: Value,
}

/// Entry counts of an ABI, as seen through the typed Solidity ABI model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbiSummary {
    pub functions: usize,
    pub events: usize,
    pub errors: usize,
    pub has_constructor: bool,
    pub has_fallback: bool,
    pub has_receive: bool,
}

impl Artifact {
    /// Read and parse an artifact from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConvertError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConvertError::NotFound(path.to_path_buf()));
        }

        let text = fs::read_to_string(path).map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(path, &text)
    }

    /// Parse an artifact from an in-memory document. `path` is only used for
    /// diagnostics.
    pub fn from_json_str(path: impl AsRef<Path>, text: &str) -> Result<Self, ConvertError> {
        let path = path.as_ref().to_path_buf();
        let text = text.trim_start_matches('\u{feff}');

        let document: Value = match serde_json::from_str(text) {
            Ok(document) => document,
            // Hookmate ships Solidity sources under artifact-like names.
            Err(_) if !text.trim_start().starts_with('{') => {
                return Err(ConvertError::NotJson(path))
            }
            Err(source) => return Err(ConvertError::Parse { path, source }),
        };

        let abi = match document {
            Value::Object(mut fields) => fields.remove("abi"),
            _ => None,
        };

        match abi {
            None | Some(Value::Null) => Err(ConvertError::MissingAbi(path)),
            Some(abi @ Value::Array(_)) => Ok(Self { path, abi }),
            Some(_) => Err(ConvertError::AbiNotArray(path)),
        }
    }

    /// The raw ABI array.
    pub fn abi(&self) -> &Value {
        &self.abi
    }

    /// Number of top-level ABI entries.
    pub fn entry_count(&self) -> usize {
        self.abi.as_array().map_or(0, Vec::len)
    }

    /// Summarize the ABI through alloy's typed model.
    ///
    /// Returns `None` when the array is not a well-formed Solidity ABI. The
    /// conversion itself never depends on this.
    pub fn summary(&self) -> Option<AbiSummary> {
        let abi: JsonAbi = serde_json::from_value(self.abi.clone()).ok()?;

        Some(AbiSummary {
            functions: abi.functions().count(),
            events: abi.events().count(),
            errors: abi.errors().count(),
            has_constructor: abi.constructor.is_some(),
            has_fallback: abi.fallback.is_some(),
            has_receive: abi.receive.is_some(),
        })
    }
}
