//! Calculation result returned by the remote service.
//!
//! The schema belongs to the service. The body only has to be JSON other
//! than `null`; named fields are read for display, nothing is validated or
//! defaulted.

use crate::error::{Result, RiegoError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys read by the report.
pub mod keys {
    pub const RECOMMENDATION: &str = "recomendacion";
    pub const FREQUENCY: &str = "frecuencia_riego";
    pub const VOLUME: &str = "volumen_riego_recomendado";
    pub const ET0: &str = "ET0_mm_per_day";
    pub const ETC: &str = "ETc_mm_per_day";
    pub const NET_REQUIREMENT: &str = "RequerimientoNeto_mm";
}

/// Placeholder rendered for a missing field.
pub const MISSING: &str = "undefined";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculationResult(Map<String, Value>);

impl CalculationResult {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Parse a response body. A non-object value carries no named fields,
    /// so it reads as empty and every field renders as [`MISSING`].
    pub fn from_json(body: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(body)? {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Err(RiegoError::Decode("response body is null".to_string())),
            _ => Ok(Self::default()),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Display text for `key`: strings raw, other values as JSON text,
    /// missing keys as [`MISSING`].
    pub fn display(&self, key: &str) -> String {
        match self.get(key) {
            None => MISSING.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_rules() {
        let result = CalculationResult::from_json(
            r#"{"recomendacion":"Riego moderado","ET0_mm_per_day":4.1234,"ETc_mm_per_day":3.0,"RequerimientoNeto_mm":0,"needs_irrigation":true,"frecuencia_riego":null}"#,
        )
        .unwrap();
        assert_eq!(result.display(keys::RECOMMENDATION), "Riego moderado");
        assert_eq!(result.display(keys::ET0), "4.1234");
        assert_eq!(result.display(keys::ETC), "3.0");
        assert_eq!(result.display(keys::NET_REQUIREMENT), "0");
        assert_eq!(result.display("needs_irrigation"), "true");
        assert_eq!(result.display(keys::FREQUENCY), "null");
        assert_eq!(result.display(keys::VOLUME), "undefined");
    }

    #[test]
    fn test_non_object_body_reads_as_empty() {
        for body in ["[]", "[1,2,3]", "42", "\"ok\"", "true"] {
            let result = CalculationResult::from_json(body).unwrap();
            assert!(result.fields().is_empty(), "{}", body);
            assert_eq!(result.display(keys::RECOMMENDATION), MISSING);
        }
    }

    #[test]
    fn test_null_and_non_json_are_rejected() {
        assert!(matches!(
            CalculationResult::from_json("null"),
            Err(RiegoError::Decode(_))
        ));
        assert!(matches!(
            CalculationResult::from_json("<html>"),
            Err(RiegoError::Decode(_))
        ));
    }

    #[test]
    fn test_extra_fields_are_kept() {
        let result = CalculationResult::from_json(r#"{"Kc":1.15,"Eficiencia":0.75}"#).unwrap();
        assert_eq!(result.fields().len(), 2);
        assert_eq!(result.display("Kc"), "1.15");
    }
}
