use ltrc_domain::registration::{Discounts, Player, RegistrationState};
use serde_json::json;

#[test]
fn default_state_serializes_with_legacy_keys() {
    let state = RegistrationState::default();
    let value = serde_json::to_value(&state).expect("serialize");

    // The camelCase key names are a storage compatibility contract.
    assert!(value.get("family").is_some());
    assert_eq!(value["family"]["guardianName"], "");
    assert_eq!(value["waivers"]["medical"], false);
    assert_eq!(value["discounts"]["baseFee"], 190.0);
    assert_eq!(value["discounts"]["siblingCount"], 1.0);
    assert_eq!(value["lastSaved"], serde_json::Value::Null);
    assert_eq!(value["players"], json!([]));
}

#[test]
fn partial_blob_merges_with_defaults() {
    let raw = json!({
        "family": { "guardianName": "Jordan Avery" },
        "waivers": { "medical": true }
    });

    let state: RegistrationState = serde_json::from_value(raw).expect("deserialize");
    assert_eq!(state.family.guardian_name, "Jordan Avery");
    assert_eq!(state.family.guardian_email, "");
    assert!(state.waivers.medical);
    assert!(!state.waivers.conduct);
    assert_eq!(state.discounts, Discounts::default());
    assert!(state.players.is_empty());
    assert!(state.last_saved.is_none());
}

#[test]
fn fractional_sibling_count_blob_still_parses() {
    // Stored blobs hold whatever the number input reported, fractions
    // included; one odd value must not discard the family's entire state.
    let raw = json!({
        "family": { "guardianName": "Jordan Avery" },
        "discounts": { "baseFee": 190, "siblingCount": 2.5 }
    });

    let state: RegistrationState = serde_json::from_value(raw).expect("deserialize");
    assert_eq!(state.family.guardian_name, "Jordan Avery");
    assert!((state.discounts.sibling_count - 2.5).abs() < f64::EPSILON);
}

#[test]
fn player_waitlist_is_rederived_on_deserialize() {
    // A stored blob claiming waitlist=false for a waitlisted division is
    // corrected while loading; the flag is never trusted from storage.
    let raw = json!({
        "id": 1_700_000_000_000_i64,
        "playerName": "Sam",
        "division": "Girls League 5–6 (Waitlist)",
        "waitlist": false
    });

    let player: Player = serde_json::from_value(raw).expect("deserialize");
    assert!(player.waitlist);

    let raw = json!({ "id": 1, "division": "Girls League 7–8", "waitlist": true });
    let player: Player = serde_json::from_value(raw).expect("deserialize");
    assert!(!player.waitlist);
}

#[test]
fn set_division_recomputes_waitlist() {
    let mut player = Player::blank(42);
    assert!(!player.waitlist);

    player.set_division("Girls League 5–6 (Waitlist)");
    assert!(player.waitlist);

    player.set_division("Boys Clinic 8");
    assert!(!player.waitlist);

    // Case-insensitive substring match, empty never waitlisted.
    assert!(Player::is_waitlisted("Spring WAITLIST pool"));
    assert!(!Player::is_waitlisted(""));
}

#[test]
fn state_roundtrips_deep_equal() {
    let mut state = RegistrationState::default();
    state.family.guardian_name = "Casey Ruiz".to_owned();
    state.family.guardian_email = "casey@example.com".to_owned();
    let mut player = Player::blank(1_700_000_000_123);
    player.player_name = "Riley".to_owned();
    player.set_division("Boys 9–10 League");
    state.players.push(player);
    state.waivers.medical = true;
    state.discounts.sibling_count = 3.0;
    state.last_saved = Some("2025-08-30T12:00:00Z".to_owned());

    let encoded = serde_json::to_string(&state).expect("serialize");
    let decoded: RegistrationState = serde_json::from_str(&encoded).expect("deserialize");
    assert_eq!(state, decoded);
}
