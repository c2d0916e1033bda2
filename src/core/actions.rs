//! Ordered set of unique action tokens.
//!
//! Insertion order of first occurrence is kept. Removing a token leaves the
//! relative order of the remaining tokens untouched, and re-adding a removed
//! token places it at the current end.

use std::collections::HashSet;

/// Actions added by the resource shorthand, in emission order.
pub const RESOURCE_ACTIONS: [&str; 7] = [
    "index", "show", "create", "store", "edit", "update", "destroy",
];

/// Actions dropped in API mode.
pub const API_EXCLUDED_ACTIONS: [&str; 2] = ["edit", "create"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionSet {
    order: Vec<String>,
    members: HashSet<String>,
}

impl ActionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `token` unless it is already present.
    pub fn add_if_absent(&mut self, token: &str) -> &mut Self {
        if self.members.insert(token.to_string()) {
            self.order.push(token.to_string());
        }
        self
    }

    /// Remove `token` if present. Absent tokens are ignored.
    pub fn remove_if_present(&mut self, token: &str) -> &mut Self {
        if self.members.remove(token) {
            self.order.retain(|existing| existing != token);
        }
        self
    }

    pub fn contains(&self, token: &str) -> bool {
        self.members.contains(token)
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn to_sequence(&self) -> Vec<String> {
        self.order.clone()
    }
}

impl<'a> Extend<&'a str> for ActionSet {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for token in iter {
            self.add_if_absent(token);
        }
    }
}
