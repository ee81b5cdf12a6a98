//! Filters over relationship types and node types.

use serde::Serialize;

/// Matches either every value or one specific value.
///
/// Used both for relationship-type filters and destination node-type filters.
/// An untyped node (`None`) is only ever matched by `Any`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub enum TypeFilter {
    /// Unconstrained.
    #[default]
    Any,
    /// Only this exact value.
    Exactly(String),
}

impl TypeFilter {
    /// Build a filter that only accepts `value`.
    pub fn exactly(value: impl Into<String>) -> Self {
        Self::Exactly(value.into())
    }

    /// Whether this filter accepts `value`.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Self::Any => true,
            Self::Exactly(expected) => value == Some(expected.as_str()),
        }
    }

    /// Whether this filter is unconstrained.
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl std::fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => write!(f, "any"),
            Self::Exactly(value) => write!(f, "{value:?}"),
        }
    }
}
