//! Rendering of ABI arrays as TypeScript `as const` literals.
//!
//! The layout matches `JSON.stringify(abi, null, 2)` with identifier-like
//! keys unquoted, so bindings produced here diff cleanly against ones
//! produced by the JS tooling.

use crate::error::ConvertError;
use serde_json::Value;

const INDENT: &str = "  ";

/// Derive the exported constant name from a binding file name.
///
/// `TokenFactoryAbi.ts` exports `TokenFactoryAbi`.
pub fn export_name(output_file_name: &str) -> Result<&str, ConvertError> {
    let name = output_file_name.strip_suffix(".ts").unwrap_or(output_file_name);

    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_' || first == '$')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        None => false,
    };

    if valid {
        Ok(name)
    } else {
        Err(ConvertError::InvalidExportName(output_file_name.to_string()))
    }
}

/// Render the full binding file contents.
pub fn render_binding(export_name: &str, abi: &Value) -> String {
    format!("export const {export_name} = {} as const;\n", render_literal(abi))
}

/// Render a JSON value as a pretty-printed object literal.
pub fn render_literal(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0);
    out
}

fn write_value(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                newline(out, depth + 1);
                write_value(out, item, depth + 1);
            }
            newline(out, depth);
            out.push(']');
        }
        Value::Object(fields) if fields.is_empty() => out.push_str("{}"),
        Value::Object(fields) => {
            out.push('{');
            for (i, (key, item)) in fields.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                newline(out, depth + 1);
                write_key(out, key);
                out.push_str(": ");
                write_value(out, item, depth + 1);
            }
            newline(out, depth);
            out.push('}');
        }
        // Scalars use serde_json's compact form, which escapes strings the
        // same way JSON.stringify does.
        scalar => out.push_str(&scalar.to_string()),
    }
}

fn write_key(out: &mut String, key: &str) {
    if is_bare_key(key) {
        out.push_str(key);
    } else {
        out.push_str(&Value::from(key).to_string());
    }
}

fn newline(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

/// Keys matching `[A-Za-z_][A-Za-z0-9_]*` are emitted without quotes.
fn is_bare_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_export_name() {
        assert_eq!(export_name("TokenFactoryAbi.ts").unwrap(), "TokenFactoryAbi");
        assert_eq!(export_name("PoolManagerAbi").unwrap(), "PoolManagerAbi");
        assert_eq!(export_name("$abi.ts").unwrap(), "$abi");

        assert!(export_name(".ts").is_err());
        assert!(export_name("1Abi.ts").is_err());
        assert!(export_name("Token-Factory.ts").is_err());
        assert!(export_name("abis/TokenFactoryAbi.ts").is_err());
    }

    #[test]
    fn test_bare_keys() {
        assert!(is_bare_key("name"));
        assert!(is_bare_key("_poolManager"));
        assert!(is_bare_key("stateMutability"));
        assert!(is_bare_key("internalType"));

        assert!(!is_bare_key(""));
        assert!(!is_bare_key("0x"));
        assert!(!is_bare_key("with space"));
        assert!(!is_bare_key("$ref"));
        assert!(!is_bare_key("déjà"));
    }

    #[test]
    fn test_single_function_literal() {
        let abi = json!([{
            "type": "function",
            "name": "foo",
            "inputs": [],
            "outputs": [],
            "stateMutability": "view"
        }]);

        let expected = r#"[
  {
    type: "function",
    name: "foo",
    inputs: [],
    outputs: [],
    stateMutability: "view"
  }
]"#;
        assert_eq!(render_literal(&abi), expected);
    }

    #[test]
    fn test_nested_components() {
        let abi = json!([{
            "type": "function",
            "name": "getPoolKey",
            "inputs": [],
            "outputs": [{
                "name": "",
                "type": "tuple",
                "internalType": "struct PoolKey",
                "components": [
                    {"name": "currency0", "type": "address", "internalType": "Currency"},
                    {"name": "fee", "type": "uint24", "internalType": "uint24"}
                ]
            }],
            "stateMutability": "view"
        }]);

        let expected = r#"[
  {
    type: "function",
    name: "getPoolKey",
    inputs: [],
    outputs: [
      {
        name: "",
        type: "tuple",
        internalType: "struct PoolKey",
        components: [
          {
            name: "currency0",
            type: "address",
            internalType: "Currency"
          },
          {
            name: "fee",
            type: "uint24",
            internalType: "uint24"
          }
        ]
      }
    ],
    stateMutability: "view"
  }
]"#;
        assert_eq!(render_literal(&abi), expected);
    }

    #[test]
    fn test_non_identifier_keys_stay_quoted() {
        let value = json!({"0x": 1, "a b": true, "ok": null, "": {}});

        let expected = r#"{
  "0x": 1,
  "a b": true,
  ok: null,
  "": {}
}"#;
        assert_eq!(render_literal(&value), expected);
    }

    #[test]
    fn test_strings_are_escaped() {
        let value = json!(["say \"hi\"", "tab\there", "line\nbreak", "back\\slash"]);

        let expected = "[\n  \"say \\\"hi\\\"\",\n  \"tab\\there\",\n  \"line\\nbreak\",\n  \"back\\\\slash\"\n]";
        assert_eq!(render_literal(&value), expected);
    }

    #[test]
    fn test_scalars() {
        assert_eq!(render_literal(&json!(false)), "false");
        assert_eq!(render_literal(&json!(42)), "42");
        assert_eq!(render_literal(&json!(null)), "null");
        assert_eq!(render_literal(&json!({})), "{}");
    }

    #[test]
    fn test_render_binding() {
        let abi = json!([{"type": "error", "name": "Unauthorized", "inputs": []}]);

        let expected = r#"export const TokenFactoryAbi = [
  {
    type: "error",
    name: "Unauthorized",
    inputs: []
  }
] as const;
"#;
        assert_eq!(render_binding("TokenFactoryAbi", &abi), expected);
    }

    #[test]
    fn test_empty_abi_binding() {
        assert_eq!(
            render_binding("EmptyAbi", &json!([])),
            "export const EmptyAbi = [] as const;\n"
        );
    }
}
