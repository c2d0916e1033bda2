//! Namespace validation, composition and qualification.
//!
//! Namespaces use a backslash separator. User input may mix `/` and `\`;
//! every run of either collapses to one separator before validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

pub const SEPARATOR: char = '\\';

/// Segments appended to the application root namespace for handlers.
pub const HANDLERS_SEGMENTS: [&str; 2] = ["Http", "Handlers"];

static SLASH_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[/\\]+").unwrap());

// A bare separator, or word segments each optionally led by a separator.
static NAMESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\\|(?:\\?[A-Za-z0-9_]+)+)$").unwrap());

pub fn normalize_separators(raw: &str) -> String {
    SLASH_RUNS.replace_all(raw, r"\").into_owned()
}

/// Validate a user-supplied namespace override.
///
/// Returns `None` for an empty override and the normalized form otherwise.
pub fn validate_override(raw: &str) -> Result<Option<String>> {
    if raw.is_empty() {
        return Ok(None);
    }

    let normalized = normalize_separators(raw);
    if !NAMESPACE_PATTERN.is_match(&normalized) {
        return Err(Error::invalid_namespace(raw));
    }

    Ok(Some(normalized))
}

pub fn is_absolute(namespace: &str) -> bool {
    namespace.starts_with(SEPARATOR)
}

/// Root namespace without trailing separators (`App\` and `App` both give `App`).
pub fn trim_root(root: &str) -> &str {
    root.trim_end_matches(['\\', '/'])
}

/// `<root>\Http\Handlers`
pub fn default_namespace(root: &str) -> String {
    let mut namespace = trim_root(root).to_string();
    for segment in HANDLERS_SEGMENTS {
        if !namespace.is_empty() {
            namespace.push(SEPARATOR);
        }
        namespace.push_str(segment);
    }
    namespace
}

/// Combine the default namespace with a validated override.
pub fn compose(default: &str, normalized_override: Option<&str>) -> String {
    match normalized_override {
        None => default.to_string(),
        Some(ns) if is_absolute(ns) => ns.to_string(),
        Some(ns) => format!("{}{}{}", default, SEPARATOR, ns),
    }
}

pub fn join(namespace: &str, name: &str) -> String {
    if namespace.is_empty() || namespace == "\\" {
        return format!("{}{}", SEPARATOR, name);
    }
    format!("{}{}{}", namespace, SEPARATOR, name)
}

/// Fully qualify a class name against the application root.
///
/// Leading separators are dropped; names outside the root namespace are
/// placed under it, so `\Custom\ShowProfile` becomes `App\Custom\ShowProfile`.
pub fn qualify(name: &str, root: &str) -> String {
    let name = name.trim_start_matches(['\\', '/']).replace('/', r"\");
    let root = trim_root(root);

    if root.is_empty() || starts_with_segment(&name, root) {
        return name;
    }

    format!("{}{}{}", root, SEPARATOR, name)
}

/// Last segment of a qualified name.
pub fn short_name(qualified: &str) -> &str {
    qualified.rsplit(SEPARATOR).next().unwrap_or(qualified)
}

/// Namespace part of a qualified name (everything before the last segment).
pub fn parent(qualified: &str) -> &str {
    qualified
        .rsplit_once(SEPARATOR)
        .map(|(parent, _)| parent)
        .unwrap_or("")
}

/// Path segments of a qualified name below the root namespace.
pub fn relative_segments<'a>(qualified: &'a str, root: &str) -> Vec<&'a str> {
    let root = trim_root(root);
    let rest = if !root.is_empty() && starts_with_segment(qualified, root) {
        &qualified[root.len()..]
    } else {
        qualified
    };

    rest.split(SEPARATOR).filter(|s| !s.is_empty()).collect()
}

fn starts_with_segment(name: &str, prefix: &str) -> bool {
    name == prefix
        || name
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with(SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_mixed_slash_runs() {
        assert_eq!(normalize_separators("Admin//Profile"), r"Admin\Profile");
        assert_eq!(normalize_separators(r"/\Custom/\/Deep"), r"\Custom\Deep");
    }

    #[test]
    fn validate_override_accepts_relative_absolute_and_bare() {
        assert_eq!(validate_override("").unwrap(), None);
        assert_eq!(validate_override("Profile").unwrap().as_deref(), Some("Profile"));
        assert_eq!(validate_override(r"\Custom").unwrap().as_deref(), Some(r"\Custom"));
        assert_eq!(validate_override("Admin/Users").unwrap().as_deref(), Some(r"Admin\Users"));
        assert_eq!(validate_override("/").unwrap().as_deref(), Some(r"\"));
    }

    #[test]
    fn validate_override_rejects_bad_namespaces() {
        let err = validate_override("InvalidNamespace%").unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_namespace");
        assert_eq!(err.details["token"], "InvalidNamespace%");

        assert!(validate_override(r"Profile\").is_err());
        assert!(validate_override("Admin Users").is_err());
    }

    #[test]
    fn default_namespace_accepts_root_with_or_without_separator() {
        assert_eq!(default_namespace("App"), r"App\Http\Handlers");
        assert_eq!(default_namespace(r"App\"), r"App\Http\Handlers");
        assert_eq!(default_namespace(""), r"Http\Handlers");
    }

    #[test]
    fn compose_handles_relative_absolute_and_missing() {
        let default = default_namespace("App");
        assert_eq!(compose(&default, None), r"App\Http\Handlers");
        assert_eq!(compose(&default, Some("Profile")), r"App\Http\Handlers\Profile");
        assert_eq!(compose(&default, Some(r"\Custom")), r"\Custom");
    }

    #[test]
    fn qualify_places_foreign_names_under_root() {
        assert_eq!(qualify(r"\Custom\ShowProfile", "App"), r"App\Custom\ShowProfile");
        assert_eq!(
            qualify(r"App\Http\Handlers\ShowProfile", r"App\"),
            r"App\Http\Handlers\ShowProfile"
        );
        assert_eq!(qualify(r"Application\Thing", "App"), r"App\Application\Thing");
    }

    #[test]
    fn relative_segments_strip_root() {
        assert_eq!(
            relative_segments(r"App\Http\Handlers\ShowProfile", "App"),
            vec!["Http", "Handlers", "ShowProfile"]
        );
    }

    #[test]
    fn short_name_and_parent_split_last_segment() {
        assert_eq!(short_name(r"App\Http\Handler"), "Handler");
        assert_eq!(parent(r"App\Http\Handler"), r"App\Http");
        assert_eq!(short_name("Handler"), "Handler");
        assert_eq!(parent("Handler"), "");
    }
}
