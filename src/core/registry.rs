//! Registry of importable base types.
//!
//! Generated handlers extend a configured base type. The name is checked
//! against the types the embedding application declares as importable.

use crate::error::{Error, Result};
use crate::namespace;

#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    known: Vec<String>,
}

impl TypeRegistry {
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::default();
        for name in types {
            registry.register(name.as_ref());
        }
        registry
    }

    pub fn register(&mut self, name: &str) {
        let canonical = canonical(name);
        if !canonical.is_empty() && !self.known.iter().any(|k| k == &canonical) {
            self.known.push(canonical);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        let canonical = canonical(name);
        self.known.iter().any(|k| k == &canonical)
    }

    /// Canonical form of `name`, or a not-found error listing known types.
    pub fn resolve(&self, name: &str) -> Result<String> {
        if self.contains(name) {
            Ok(canonical(name))
        } else {
            Err(Error::base_type_not_found(name, self.known.clone()))
        }
    }

    pub fn known(&self) -> &[String] {
        &self.known
    }
}

fn canonical(name: &str) -> String {
    namespace::normalize_separators(name.trim())
        .trim_start_matches(namespace::SEPARATOR)
        .to_string()
}
