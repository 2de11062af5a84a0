//! Stable element identifiers for associating labels, descriptions and error
//! messages with the field they belong to.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identifier of a rendered element.
///
/// Either supplied by the caller ([`ElementId::new`]) or generated from a
/// process-wide counter ([`ElementId::next`]), so two runs that create the
/// same widgets in the same order get the same identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementId(String);

impl ElementId {
    /// Use a caller-supplied identifier verbatim.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate `"{prefix}-{n}"` where `n` increases monotonically for the
    /// lifetime of the process.
    pub fn next(prefix: &str) -> Self {
        let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        Self(format!("{prefix}-{n}"))
    }

    /// Derive the identifier of a sub-element, e.g. `"input-3-description"`.
    pub fn child(&self, suffix: &str) -> Self {
        Self(format!("{}-{suffix}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter(id: &ElementId, prefix: &str) -> u64 {
        id.as_str()
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix('-'))
            .and_then(|n| n.parse().ok())
            .unwrap()
    }

    #[test]
    fn generated_ids_carry_prefix() {
        let id = ElementId::next("input");
        assert!(id.as_str().starts_with("input-"));
    }

    #[test]
    fn generated_ids_increase() {
        let a = ElementId::next("field");
        let b = ElementId::next("field");
        assert!(counter(&b, "field") > counter(&a, "field"));
    }

    #[test]
    fn caller_supplied_id_is_kept() {
        let id = ElementId::new("amount");
        assert_eq!(id.as_str(), "amount");
        assert_eq!(id.child("error").as_str(), "amount-error");
    }
}
