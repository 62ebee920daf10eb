//! Resolution behaviour across both flavors.

use mccode_flavor::{resolve, Attribute, Flavor, FlavorProfile, Overrides, Value};

fn table(flavor: Flavor) -> Vec<(Attribute, Value)> {
    let (name, upper, kind, code, env, tag) = match flavor {
        Flavor::Neutron => ("McStas", "MCSTAS", "neutron", 2112, "MCSTAS", "nlib"),
        Flavor::Xray => ("McXtrace", "MCXTRACE", "x-ray", 22, "MCXTRACE", "xlib"),
    };
    vec![
        (Attribute::ProductName, name.into()),
        (Attribute::ReleaseDate, "2023-07-22".into()),
        (Attribute::Version, "4".into()),
        (Attribute::ProductNameUpper, upper.into()),
        (Attribute::ParticleKind, kind.into()),
        (Attribute::ParticleCode, Value::Int(code)),
        (Attribute::LibraryEnvVar, env.into()),
        (Attribute::FlavorUpper, upper.into()),
        (Attribute::IsProjectBuild, Value::Flag(true)),
        (Attribute::LibraryTag, tag.into()),
    ]
}

#[test]
fn no_overrides_gives_the_default_table() {
    for flavor in Flavor::ALL {
        let profile = resolve(flavor, &Overrides::new());
        assert_eq!(profile.flavor(), flavor);
        assert_eq!(profile.entries().collect::<Vec<_>>(), table(flavor));
    }
}

#[test]
fn every_attribute_takes_its_override() {
    let samples: Vec<(Attribute, Value)> = vec![
        (Attribute::ProductName, "Custom".into()),
        (Attribute::ReleaseDate, "not-a-date".into()),
        (Attribute::Version, "5".into()),
        (Attribute::ProductNameUpper, "CUSTOM".into()),
        (Attribute::ParticleKind, "muon".into()),
        (Attribute::ParticleCode, Value::Int(-13)),
        (Attribute::LibraryEnvVar, "CUSTOM_HOME".into()),
        (Attribute::FlavorUpper, "CUSTOM_UPPER".into()),
        (Attribute::IsProjectBuild, Value::Flag(false)),
        (Attribute::LibraryTag, "clib".into()),
    ];
    for flavor in Flavor::ALL {
        for (attribute, value) in &samples {
            let o = Overrides::new().with(*attribute, value.clone()).unwrap();
            let profile = resolve(flavor, &o);
            assert_eq!(&profile.get(*attribute), value, "{} / {}", flavor, attribute);
        }
    }
}

#[test]
fn flavor_tables_are_disjoint() {
    let n = FlavorProfile::defaults(Flavor::Neutron);
    let x = FlavorProfile::defaults(Flavor::Xray);
    for attribute in [
        Attribute::ProductName,
        Attribute::ProductNameUpper,
        Attribute::ParticleKind,
        Attribute::LibraryEnvVar,
        Attribute::LibraryTag,
    ] {
        assert_ne!(n.get(attribute), x.get(attribute), "{}", attribute);
    }
}

#[test]
fn resolution_is_idempotent() {
    let o = Overrides::new()
        .with(Attribute::Version, "4.1")
        .unwrap()
        .with(Attribute::ParticleCode, 11i64)
        .unwrap();
    for flavor in Flavor::ALL {
        assert_eq!(resolve(flavor, &o), resolve(flavor, &o));
    }
}

#[test]
fn partial_override_changes_only_that_attribute() {
    let o = Overrides::new().with(Attribute::Version, "5").unwrap();
    let profile = resolve(Flavor::Neutron, &o);
    for (attribute, expected) in table(Flavor::Neutron) {
        if attribute == Attribute::Version {
            assert_eq!(profile.version(), "5");
        } else {
            assert_eq!(profile.get(attribute), expected, "{}", attribute);
        }
    }
}

#[test]
fn xray_with_point_release() {
    let o = Overrides::new().with(Attribute::Version, "4.1").unwrap();
    let profile = resolve(Flavor::Xray, &o);
    assert_eq!(profile.version(), "4.1");
    assert_eq!(profile.product_name(), "McXtrace");
    assert_eq!(profile.particle_code(), 22);
    assert_eq!(profile.library_tag(), "xlib");
}

#[test]
fn renaming_product_does_not_touch_upper_name() {
    let o = Overrides::new()
        .with(Attribute::ProductName, "Custom")
        .unwrap();
    let profile = resolve(Flavor::Neutron, &o);
    assert_eq!(profile.product_name(), "Custom");
    assert_eq!(profile.product_name_upper(), "MCSTAS");
    assert_eq!(profile.flavor_upper(), "MCSTAS");
}

#[test]
fn defines_feed_resolution() {
    let mut o = Overrides::new();
    o.define("MCCODE_VERSION=\"4.1\"").unwrap();
    o.define("MCCODE_PROJECT=0").unwrap();
    let profile = resolve(Flavor::Xray, &o);
    assert_eq!(profile.version(), "4.1");
    assert!(!profile.is_project_build());
}

#[test]
fn profiles_are_shareable_across_threads() {
    let profile = std::sync::Arc::new(FlavorProfile::defaults(Flavor::Neutron));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let p = std::sync::Arc::clone(&profile);
            std::thread::spawn(move || p.particle_code())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 2112);
    }
}
