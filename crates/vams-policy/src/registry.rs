//! # Identifier Registry
//!
//! Lookup of identifiers (NPWP numbers) that are already registered to some
//! vendor. Validation only asks whether an identifier exists.

use std::collections::BTreeSet;

/// Source of already-registered identifiers.
pub trait IdentifierRegistry {
    /// Whether `identifier` is already registered. Callers pass the value
    /// trimmed.
    fn exists(&self, identifier: &str) -> bool;
}

/// A fixed set of registered identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticRegistry {
    identifiers: BTreeSet<String>,
}

impl StaticRegistry {
    pub fn new<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            identifiers: identifiers
                .into_iter()
                .map(|s| s.into().trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

impl IdentifierRegistry for StaticRegistry {
    fn exists(&self, identifier: &str) -> bool {
        self.identifiers.contains(identifier.trim())
    }
}

impl<R: IdentifierRegistry + ?Sized> IdentifierRegistry for &R {
    fn exists(&self, identifier: &str) -> bool {
        (**self).exists(identifier)
    }
}
