use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Error returned when a price cannot be read from client input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ParsePriceError {
    NotNumeric(String),
    Negative(f64),
}

impl Display for ParsePriceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::NotNumeric(raw) => write!(f, "Price must be numeric, got {raw:?}"),
            Self::Negative(value) => write!(f, "Price must not be negative, got {value}"),
        }
    }
}

impl std::error::Error for ParsePriceError {}

/// A number that may arrive as JSON number or as text (e.g. from form fields)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(f64),
    Text(String),
}

impl LooseNumber {
    /// Reads the value as a non-negative, finite price
    pub fn to_price(&self) -> Result<f64, ParsePriceError> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Text(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|_| ParsePriceError::NotNumeric(raw.clone()))?,
        };

        if !value.is_finite() {
            return Err(ParsePriceError::NotNumeric(value.to_string()));
        }
        if value < 0.0 {
            return Err(ParsePriceError::Negative(value));
        }

        Ok(value)
    }
}

/// A flag that may arrive as JSON bool, number, or text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseBool {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl LooseBool {
    /// `"true"`, `"1"`, `"yes"` and `"on"` (any case) count as true; other text is false
    pub fn truthy(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Number(value) => *value != 0.0 && !value.is_nan(),
            Self::Text(raw) => matches!(
                raw.trim().to_ascii_lowercase().as_str(),
                "true" | "1" | "yes" | "on"
            ),
        }
    }
}

impl Default for LooseBool {
    fn default() -> Self {
        Self::Bool(false)
    }
}

/// Deserializes a field that distinguishes "absent" from an explicit `null`.
///
/// Use with `#[serde(default, deserialize_with = "nullable")]` on an `Option<Option<T>>`:
/// an omitted field stays `None`, `null` becomes `Some(None)` and a value becomes `Some(Some(v))`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_from_number_and_text() {
        assert_eq!(LooseNumber::Number(19.5).to_price(), Ok(19.5));
        assert_eq!(LooseNumber::Text(" 42 ".into()).to_price(), Ok(42.0));
        assert_eq!(LooseNumber::Text("0".into()).to_price(), Ok(0.0));
    }

    #[test]
    fn test_price_rejects_garbage() {
        assert!(matches!(
            LooseNumber::Text("ten dollars".into()).to_price(),
            Err(ParsePriceError::NotNumeric(_))
        ));
        assert!(matches!(
            LooseNumber::Text("".into()).to_price(),
            Err(ParsePriceError::NotNumeric(_))
        ));
        assert!(matches!(
            LooseNumber::Text("NaN".into()).to_price(),
            Err(ParsePriceError::NotNumeric(_))
        ));
        assert_eq!(
            LooseNumber::Number(-1.0).to_price(),
            Err(ParsePriceError::Negative(-1.0))
        );
    }

    #[test]
    fn test_flag_coercion() {
        assert!(LooseBool::Bool(true).truthy());
        assert!(LooseBool::Text("TRUE".into()).truthy());
        assert!(LooseBool::Text("on".into()).truthy());
        assert!(LooseBool::Number(1.0).truthy());
        assert!(!LooseBool::Text("false".into()).truthy());
        assert!(!LooseBool::Text("".into()).truthy());
        assert!(!LooseBool::Number(0.0).truthy());
        assert!(!LooseBool::default().truthy());
    }

    #[test]
    fn test_deserializes_from_json_shapes() {
        let n: LooseNumber = serde_json::from_str("12.5").unwrap();
        assert_eq!(n, LooseNumber::Number(12.5));
        let n: LooseNumber = serde_json::from_str("\"12.5\"").unwrap();
        assert_eq!(n, LooseNumber::Text("12.5".into()));

        let b: LooseBool = serde_json::from_str("true").unwrap();
        assert!(b.truthy());
        let b: LooseBool = serde_json::from_str("\"false\"").unwrap();
        assert!(!b.truthy());
    }

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "nullable")]
        category: Option<Option<String>>,
    }

    #[test]
    fn test_nullable_tells_null_from_absent() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.category, None);

        let cleared: Patch = serde_json::from_str(r#"{"category":null}"#).unwrap();
        assert_eq!(cleared.category, Some(None));

        let set: Patch = serde_json::from_str(r#"{"category":"web"}"#).unwrap();
        assert_eq!(set.category, Some(Some("web".to_string())));
    }
}
