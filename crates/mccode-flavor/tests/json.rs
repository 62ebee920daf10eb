//! JSON forms of overrides and resolved profiles.

use mccode_flavor::{resolve, Flavor, FlavorProfile, Overrides};

#[test]
fn overrides_accept_symbols_and_field_names() {
    let o: Overrides = serde_json::from_str(
        r#"{"MCCODE_VERSION": "4.1", "library_tag": "zlib", "MCCODE_PROJECT": 0}"#,
    )
    .unwrap();
    assert_eq!(o.version.as_deref(), Some("4.1"));
    assert_eq!(o.library_tag.as_deref(), Some("zlib"));
    assert_eq!(o.is_project_build, Some(false));
    assert_eq!(o.len(), 3);
}

#[test]
fn overrides_reject_unknown_keys() {
    let err = serde_json::from_str::<Overrides>(r#"{"MCCODE_COLOUR": "red"}"#);
    assert!(err.is_err());
}

#[test]
fn project_flag_accepts_bool_or_zero_one() {
    let o: Overrides = serde_json::from_str(r#"{"is_project_build": true}"#).unwrap();
    assert_eq!(o.is_project_build, Some(true));
    let o: Overrides = serde_json::from_str(r#"{"MCCODE_PROJECT": 1}"#).unwrap();
    assert_eq!(o.is_project_build, Some(true));

    let err = serde_json::from_str::<Overrides>(r#"{"MCCODE_PROJECT": 2}"#).unwrap_err();
    assert!(err.to_string().contains("must be 0 or 1"), "{}", err);
}

#[test]
fn profile_serializes_with_field_names() {
    let json = serde_json::to_value(FlavorProfile::defaults(Flavor::Xray)).unwrap();
    assert_eq!(json["flavor"], "xray");
    assert_eq!(json["product_name"], "McXtrace");
    assert_eq!(json["particle_code"], 22);
    assert_eq!(json["is_project_build"], true);
}

#[test]
fn overrides_from_json_feed_resolution() {
    let o: Overrides = serde_json::from_str(r#"{"FLAVOR_LIB": "customlib"}"#).unwrap();
    let profile = resolve(Flavor::Neutron, &o);
    assert_eq!(profile.library_tag(), "customlib");
    assert_eq!(profile.product_name(), "McStas");
}
