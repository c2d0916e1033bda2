use handlergen::{resolve, ErrorCode, ResolveRequest};

fn profile() -> ResolveRequest {
    ResolveRequest {
        name: "Profile".to_string(),
        root_namespace: "App".to_string(),
        ..Default::default()
    }
}

#[test]
fn resource_shorthand_yields_seven_handlers_in_order() {
    let resolution = resolve(&ResolveRequest {
        resource: true,
        ..profile()
    })
    .unwrap();

    assert_eq!(
        resolution.class_names,
        vec![
            "IndexProfile",
            "ShowProfile",
            "CreateProfile",
            "StoreProfile",
            "EditProfile",
            "UpdateProfile",
            "DestroyProfile",
        ]
    );
}

#[test]
fn resource_with_api_drops_create_and_edit() {
    let resolution = resolve(&ResolveRequest {
        resource: true,
        api: true,
        ..profile()
    })
    .unwrap();

    assert_eq!(
        resolution.class_names,
        vec![
            "IndexProfile",
            "ShowProfile",
            "StoreProfile",
            "UpdateProfile",
            "DestroyProfile",
        ]
    );
}

#[test]
fn explicit_actions_keep_given_order() {
    let resolution = resolve(&ResolveRequest {
        actions: "drop,move,store".to_string(),
        ..profile()
    })
    .unwrap();

    assert_eq!(
        resolution.class_names,
        vec!["DropProfile", "MoveProfile", "StoreProfile"]
    );
}

#[test]
fn except_keeps_remaining_resource_order() {
    let resolution = resolve(&ResolveRequest {
        resource: true,
        except: "index,show,destroy".to_string(),
        ..profile()
    })
    .unwrap();

    assert_eq!(
        resolution.class_names,
        vec!["CreateProfile", "StoreProfile", "EditProfile", "UpdateProfile"]
    );
}

#[test]
fn except_of_absent_action_is_ignored() {
    let resolution = resolve(&ResolveRequest {
        actions: "show".to_string(),
        except: "archive".to_string(),
        ..profile()
    })
    .unwrap();

    assert_eq!(resolution.class_names, vec!["ShowProfile"]);
}

#[test]
fn explicit_actions_extend_resource_without_duplicates() {
    let resolution = resolve(&ResolveRequest {
        resource: true,
        api: true,
        actions: "show,archive".to_string(),
        ..profile()
    })
    .unwrap();

    assert_eq!(
        resolution.actions,
        vec!["index", "show", "store", "update", "destroy", "archive"]
    );
}

#[test]
fn api_applies_after_explicit_actions() {
    let resolution = resolve(&ResolveRequest {
        api: true,
        actions: "edit,create,preview".to_string(),
        ..profile()
    })
    .unwrap();

    assert_eq!(resolution.class_names, vec!["PreviewProfile"]);
}

#[test]
fn excluding_everything_falls_back_to_bare_name() {
    let resolution = resolve(&ResolveRequest {
        actions: "show".to_string(),
        except: "show".to_string(),
        ..profile()
    })
    .unwrap();

    assert_eq!(resolution.class_names, vec!["Profile"]);
    assert!(resolution.actions.is_empty());
}

#[test]
fn no_directives_yield_single_name() {
    let resolution = resolve(&ResolveRequest {
        name: "ShowProfile".to_string(),
        ..profile()
    })
    .unwrap();

    assert_eq!(resolution.class_names, vec!["ShowProfile"]);
}

#[test]
fn resolution_is_repeatable() {
    let request = ResolveRequest {
        resource: true,
        actions: "archive".to_string(),
        except: "edit".to_string(),
        namespace: "Admin".to_string(),
        ..profile()
    };

    assert_eq!(resolve(&request).unwrap(), resolve(&request).unwrap());
}

#[test]
fn invalid_name_is_rejected() {
    let err = resolve(&ResolveRequest {
        name: "ShowProfile%".to_string(),
        ..profile()
    })
    .unwrap_err();

    assert_eq!(err.code, ErrorCode::ValidationInvalidName);
    assert_eq!(err.message, "Name can't contain any non-word characters.");
}

#[test]
fn invalid_action_reports_offending_token() {
    let err = resolve(&ResolveRequest {
        actions: "show,destroy%".to_string(),
        ..profile()
    })
    .unwrap_err();

    assert_eq!(err.code, ErrorCode::ValidationInvalidActionName);
    assert_eq!(err.details["token"], "destroy%");
    assert_eq!(err.message, "[destroy%] is not a valid action name.");
}

#[test]
fn invalid_except_token_uses_same_error_kind() {
    let err = resolve(&ResolveRequest {
        resource: true,
        except: "index,sh ow".to_string(),
        ..profile()
    })
    .unwrap_err();

    assert_eq!(err.code, ErrorCode::ValidationInvalidActionName);
    assert_eq!(err.details["token"], "sh ow");
}

#[test]
fn invalid_namespace_is_rejected() {
    let err = resolve(&ResolveRequest {
        name: "ShowProfile".to_string(),
        namespace: "InvalidNamespace%".to_string(),
        ..profile()
    })
    .unwrap_err();

    assert_eq!(err.code, ErrorCode::ValidationInvalidNamespace);
    assert_eq!(err.message, "[InvalidNamespace%] is not a valid namespace.");
}

#[test]
fn relative_namespace_is_appended_to_default() {
    let resolution = resolve(&ResolveRequest {
        namespace: "Profile".to_string(),
        ..profile()
    })
    .unwrap();

    assert_eq!(resolution.namespace, r"App\Http\Handlers\Profile");
}

#[test]
fn absolute_namespace_replaces_default() {
    let resolution = resolve(&ResolveRequest {
        namespace: r"\Custom".to_string(),
        ..profile()
    })
    .unwrap();

    assert_eq!(resolution.namespace, r"\Custom");
}

#[test]
fn missing_namespace_yields_default() {
    let resolution = resolve(&profile()).unwrap();
    assert_eq!(resolution.namespace, r"App\Http\Handlers");
}

#[test]
fn forward_slashes_are_accepted_in_namespace() {
    let resolution = resolve(&ResolveRequest {
        namespace: "Admin//Users".to_string(),
        ..profile()
    })
    .unwrap();

    assert_eq!(resolution.namespace, r"App\Http\Handlers\Admin\Users");
}

#[test]
fn resolution_is_safe_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                resolve(&ResolveRequest {
                    resource: true,
                    ..profile()
                })
                .unwrap()
                .class_names
                .len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 7);
    }
}

#[test]
fn acronym_name_keeps_capitals() {
    let resolution = resolve(&ResolveRequest {
        name: "APIToken".to_string(),
        ..profile()
    })
    .unwrap();

    assert_eq!(resolution.class_names, vec!["APIToken"]);
}

#[test]
fn acronym_action_keeps_capitals() {
    let resolution = resolve(&ResolveRequest {
        actions: "showAPI".to_string(),
        ..profile()
    })
    .unwrap();

    assert_eq!(resolution.class_names, vec!["ShowAPIProfile"]);
}

#[test]
fn underscore_only_action_is_accepted() {
    let resolution = resolve(&ResolveRequest {
        actions: "_".to_string(),
        ..profile()
    })
    .unwrap();

    assert_eq!(resolution.class_names, vec!["Profile"]);
}
