use ltrc_domain::config::{HistoryConfig, PlacementConfig, PortalConfig, RegistrationConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let placement = PlacementConfig::default();
    assert_eq!(placement.cutoff_date, "2025-09-01");

    let registration = RegistrationConfig::default();
    assert_eq!(registration.autosave_debounce_ms, 800);
    assert!((registration.base_fee - 190.0).abs() < f64::EPSILON);
    assert!((registration.sibling_discount - 25.0).abs() < f64::EPSILON);

    let history = HistoryConfig::default();
    assert_eq!(history.limit, 5);
}

#[test]
fn portal_config_deserializes() {
    let raw = json!({
        "placement": { "cutoff_date": "2026-09-01" },
        "registration": { "autosave_debounce_ms": 250 },
        "storage": { "data_dir": "/tmp/ltrc" }
    });

    let cfg: PortalConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.placement.cutoff_date, "2026-09-01");
    assert_eq!(cfg.registration.autosave_debounce_ms, 250);
    // Untouched sections keep their defaults.
    assert!((cfg.registration.base_fee - 190.0).abs() < f64::EPSILON);
    assert_eq!(cfg.history.limit, 5);
    assert_eq!(cfg.storage.data_dir, std::path::PathBuf::from("/tmp/ltrc"));
}
