use error_trail::{name_of, ErrorKind};

#[test]
fn test_baseline_names_are_snake_case() {
    assert_eq!(name_of(ErrorKind::GenericError), "generic_error");
    assert_eq!(name_of(ErrorKind::AlreadyExists), "already_exists");
    assert_eq!(name_of(ErrorKind::NullPointer), "null_pointer");
    assert_eq!(name_of(ErrorKind::TooManySymbolicLinkLevels), "too_many_symbolic_link_levels");
    assert_eq!(name_of(ErrorKind::WrongProtocolType), "wrong_protocol_type");
}

#[test]
fn test_lookup_is_stable_across_calls() {
    let first = name_of(ErrorKind::TimedOut);
    let second = name_of(ErrorKind::TimedOut);
    assert_eq!(first, second);
    assert_eq!(first, "timed_out");
}

#[test]
fn test_catalog_covers_the_baseline_in_order() {
    let names: Vec<&str> = ErrorKind::ALL.iter().take(5).map(|k| k.name()).collect();
    assert_eq!(
        names,
        [
            "generic_error",
            "null_pointer",
            "inaccessible_non_null_pointer",
            "index_out_of_bounds",
            "address_family_not_supported",
        ]
    );
    assert!(ErrorKind::ALL.len() >= 82);
    assert!(ErrorKind::ALL.contains(&ErrorKind::PermissionDenied));
}

#[test]
fn test_every_kind_round_trips_through_its_name() {
    for kind in ErrorKind::ALL {
        assert_eq!(ErrorKind::from_name(kind.name()), Some(*kind));
        assert_eq!(kind.to_string(), kind.name());
    }
    assert_eq!(ErrorKind::from_name("GenericError"), None);
    assert_eq!(ErrorKind::from_name(""), None);
}

#[test]
fn test_generic_is_the_default() {
    assert_eq!(ErrorKind::default(), ErrorKind::GenericError);
    assert_eq!(ErrorKind::GENERIC, ErrorKind::GenericError);
}

#[path = "../../build/catalog.rs"]
mod catalog_rules;

fn listed_kinds() -> Vec<catalog_rules::KindDef> {
    let mut kinds = Vec::new();
    catalog_rules::parse_kinds("predefined", include_str!("../../kinds/predefined.kinds"), &mut kinds)
        .unwrap();
    catalog_rules::parse_kinds("user_defined", include_str!("../../kinds/user_defined.kinds"), &mut kinds)
        .unwrap();
    if let Some(path) = option_env!("ERROR_TRAIL_KINDS_FILE").filter(|p| !p.is_empty()) {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(path);
        let contents = std::fs::read_to_string(&path).unwrap();
        catalog_rules::parse_kinds("extra", &contents, &mut kinds).unwrap();
    }
    kinds
}

#[test]
fn test_generated_catalog_follows_the_kind_lists() {
    let listed = listed_kinds();
    let listed_names: Vec<&str> = listed.iter().map(|k| k.name.as_str()).collect();
    let generated: Vec<&str> = ErrorKind::ALL.iter().map(|k| k.name()).collect();

    assert_eq!(generated, listed_names);
    for (kind, def) in ErrorKind::ALL.iter().zip(&listed) {
        assert_eq!(name_of(*kind), def.name);
        assert_eq!(ErrorKind::from_name(&def.name), Some(*kind));
        assert_eq!(format!("{kind:?}"), def.variant);
    }
}

#[test]
fn test_extension_kinds_follow_the_baseline() {
    let baseline = include_str!("../../kinds/predefined.kinds");
    let app_list = "# application kinds\nquota_exceeded\nreplica_lagging\n";

    let mut kinds = Vec::new();
    catalog_rules::parse_kinds("predefined", baseline, &mut kinds).unwrap();
    let baseline_len = kinds.len();
    catalog_rules::parse_kinds("app.kinds", app_list, &mut kinds).unwrap();
    catalog_rules::check_catalog(&kinds).unwrap();

    assert_eq!(baseline_len, 82);
    let tail: Vec<(&str, &str)> =
        kinds[baseline_len..].iter().map(|k| (k.name.as_str(), k.variant.as_str())).collect();
    assert_eq!(tail, [("quota_exceeded", "QuotaExceeded"), ("replica_lagging", "ReplicaLagging")]);

    let rendered = catalog_rules::render(&kinds);
    let wrong_protocol = rendered.find("WrongProtocolType => \"wrong_protocol_type\"").unwrap();
    let quota = rendered.find("QuotaExceeded => \"quota_exceeded\"").unwrap();
    assert!(wrong_protocol < quota);
}

#[test]
fn test_extension_list_cannot_shadow_a_baseline_kind() {
    let mut kinds = Vec::new();
    catalog_rules::parse_kinds("predefined", include_str!("../../kinds/predefined.kinds"), &mut kinds)
        .unwrap();
    catalog_rules::parse_kinds("app.kinds", "timed_out\n", &mut kinds).unwrap();

    let err = catalog_rules::check_catalog(&kinds).unwrap_err();
    assert!(err.contains("app.kinds:1"), "{err}");
}
