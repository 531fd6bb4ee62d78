use jsonschema::error::ValidationErrorKind;
use serde::Serialize;
use serde_json::Value;
use crate::error::{AppError, Result, ValidationError, Violation};

const BUILTIN_RULESET: &str = include_str!("../../../config/transformed-event.schema.json");

/// Static JSON Schema document describing the sink's expected shape.
#[derive(Debug, Clone)]
pub struct SchemaRuleset {
    document: Value,
}

impl SchemaRuleset {
    pub fn from_json(document: &str) -> Result<Self> {
        let document = serde_json::from_str(document)
            .map_err(|e| AppError::Schema(format!("Invalid schema JSON: {}", e)))?;
        Ok(Self { document })
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Schema(format!("Failed to read schema ruleset {}: {}", path, e)))?;
        Self::from_json(&content)
    }

    /// Ruleset shipped with the service.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_RULESET)
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Top-level `required` property names.
    pub fn required(&self) -> Vec<&str> {
        self.document
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

/// Compiled [`SchemaRuleset`], built once at startup.
pub struct Validator {
    ruleset: SchemaRuleset,
    compiled: jsonschema::Validator,
}

impl Validator {
    pub fn new(ruleset: SchemaRuleset) -> Result<Self> {
        let compiled = jsonschema::options()
            .should_validate_formats(true)
            .build(ruleset.document())
            .map_err(|e| AppError::Schema(format!("Invalid JSON Schema: {}", e)))?;

        Ok(Self { ruleset, compiled })
    }

    /// Load the ruleset from `path`, or the built-in one when no path is given.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let ruleset = match path {
            Some(path) => SchemaRuleset::from_file(path)?,
            None => SchemaRuleset::builtin()?,
        };
        Self::new(ruleset)
    }

    pub fn ruleset(&self) -> &SchemaRuleset {
        &self.ruleset
    }

    /// Serialize `output` and check it against the ruleset.
    pub fn validate<T: Serialize>(&self, output: &T) -> std::result::Result<(), ValidationError> {
        let document = serde_json::to_value(output).map_err(|e| ValidationError {
            violations: vec![Violation::new("", format!("cannot be represented as JSON: {}", e))],
        })?;
        self.validate_value(&document)
    }

    pub fn validate_value(&self, document: &Value) -> std::result::Result<(), ValidationError> {
        let violations: Vec<Violation> = self
            .compiled
            .iter_errors(document)
            .map(|e| {
                let mut property = e
                    .instance_path
                    .to_string()
                    .trim_start_matches('/')
                    .replace('/', ".");

                // Missing properties are reported against their parent object
                if let ValidationErrorKind::Required { property: missing } = &e.kind {
                    if let Some(name) = missing.as_str() {
                        if !property.is_empty() {
                            property.push('.');
                        }
                        property.push_str(name);
                    }
                }

                Violation::new(property, e.to_string())
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations })
        }
    }
}
