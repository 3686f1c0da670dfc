use serde::{Deserialize, Serialize};

/// How to format a numeric value on the frontend.
///
/// The locale decides the currency symbol and separators; percentages are
/// always rendered with one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money,
    Percent,
    Integer,
}
