//! Handler name resolution.
//!
//! Turns a base name plus option directives into the ordered list of class
//! names to generate and the namespace they belong to. Pure: every input is
//! validated before the action set is touched, so a failure has no effects.

use serde::Serialize;

use crate::actions::{ActionSet, API_EXCLUDED_ACTIONS, RESOURCE_ACTIONS};
use crate::error::{Error, Result};
use crate::namespace;
use crate::utils::case::{snake_case, studly_case};
use crate::utils::validation::{is_word, split_comma_list};

/// Raw resolution inputs, as taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct ResolveRequest {
    pub name: String,
    pub resource: bool,
    pub actions: String,
    pub except: String,
    pub api: bool,
    pub namespace: String,
    pub root_namespace: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub class_names: Vec<String>,
    pub namespace: String,
    pub actions: Vec<String>,
}

impl Resolution {
    /// `namespace\ClassName` for each resolved class, in order.
    pub fn qualified_names(&self) -> Vec<String> {
        self.class_names
            .iter()
            .map(|class| namespace::join(&self.namespace, class))
            .collect()
    }
}

pub fn resolve(request: &ResolveRequest) -> Result<Resolution> {
    let name = validate_name(&request.name)?;
    let add = normalize_actions("actions", &request.actions)?;
    let remove = normalize_actions("except", &request.except)?;
    let namespace_override = namespace::validate_override(&request.namespace)?;

    let mut set = ActionSet::new();
    if request.resource {
        set.extend(RESOURCE_ACTIONS);
    }
    for action in &add {
        set.add_if_absent(action);
    }
    for action in &remove {
        set.remove_if_present(action);
    }
    if request.api {
        for action in API_EXCLUDED_ACTIONS {
            set.remove_if_present(action);
        }
    }

    let default_namespace = namespace::default_namespace(&request.root_namespace);

    Ok(Resolution {
        class_names: class_names(&set, name),
        namespace: namespace::compose(&default_namespace, namespace_override.as_deref()),
        actions: set.to_sequence(),
    })
}

fn validate_name(raw: &str) -> Result<&str> {
    if is_word(raw) {
        Ok(raw)
    } else {
        Err(Error::invalid_name(raw))
    }
}

fn normalize_actions(field: &str, raw: &str) -> Result<Vec<String>> {
    split_comma_list(raw)
        .into_iter()
        .map(|token| {
            if is_word(token) {
                Ok(snake_case(token))
            } else {
                Err(Error::invalid_action_name(field, token))
            }
        })
        .collect()
}

fn class_names(set: &ActionSet, name: &str) -> Vec<String> {
    let name = studly_case(name);

    if set.is_empty() {
        return vec![name];
    }

    set.iter()
        .map(|action| format!("{}{}", studly_case(action), name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str) -> ResolveRequest {
        ResolveRequest {
            name: name.to_string(),
            root_namespace: "App".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn action_tokens_normalize_to_snake_case() {
        let actions = normalize_actions("actions", "ShowProfile,show_profile,index").unwrap();
        assert_eq!(actions, vec!["show_profile", "show_profile", "index"]);
    }

    #[test]
    fn variant_spellings_collapse_to_one_class() {
        let mut req = request("Profile");
        req.actions = "ShowAvatar,show_avatar,showAvatar".to_string();

        let resolution = resolve(&req).unwrap();
        assert_eq!(resolution.class_names, vec!["ShowAvatarProfile"]);
        assert_eq!(resolution.actions, vec!["show_avatar"]);
    }

    #[test]
    fn snake_case_base_name_becomes_pascal() {
        let resolution = resolve(&request("user_profile")).unwrap();
        assert_eq!(resolution.class_names, vec!["UserProfile"]);
    }

    #[test]
    fn empty_action_segment_is_rejected() {
        let mut req = request("Profile");
        req.actions = "show,".to_string();

        let err = resolve(&req).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_action_name");
        assert_eq!(err.details["token"], "");
    }

    #[test]
    fn underscore_only_action_adds_no_prefix() {
        let mut req = request("Profile");
        req.actions = "_".to_string();

        let resolution = resolve(&req).unwrap();
        assert_eq!(resolution.class_names, vec!["Profile"]);
        assert_eq!(resolution.actions, vec!["_"]);
    }

    #[test]
    fn underscore_only_name_is_accepted() {
        let resolution = resolve(&request("__")).unwrap();
        assert_eq!(resolution.class_names, vec![""]);
    }

    #[test]
    fn acronyms_keep_their_capitals() {
        let mut req = request("Profile");
        req.actions = "showAPI".to_string();

        let resolution = resolve(&req).unwrap();
        assert_eq!(resolution.class_names, vec!["ShowAPIProfile"]);
        assert_eq!(resolution.actions, vec!["show_a_p_i"]);
    }

    #[test]
    fn name_is_checked_before_actions() {
        let mut req = request("Bad%");
        req.actions = "also%".to_string();

        let err = resolve(&req).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_name");
    }

    #[test]
    fn except_is_checked_before_namespace() {
        let mut req = request("Profile");
        req.except = "nope!".to_string();
        req.namespace = "Bad%".to_string();

        let err = resolve(&req).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_action_name");
        assert_eq!(err.details["field"], "except");
    }

    #[test]
    fn qualified_names_join_namespace() {
        let mut req = request("Profile");
        req.actions = "show".to_string();
        req.namespace = "Admin".to_string();

        let resolution = resolve(&req).unwrap();
        assert_eq!(
            resolution.qualified_names(),
            vec![r"App\Http\Handlers\Admin\ShowProfile"]
        );
    }
}
