//! The four-step wizard: step navigation, the typed field bindings for form
//! identifiers, and the pure update layer the session drives.
//!
//! All mutation goes through [`apply_edit`] and the player-list helpers, which
//! return a [`SavePolicy`] telling the caller how urgently to persist. The
//! functions here never touch the store themselves.

use ltrc_domain::constants::REGISTRATION_URL;
use ltrc_domain::registration::{Player, RegistrationState};

/// The wizard's four steps, numbered as shown on the step pills.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Step {
    #[default]
    Family = 1,
    Players = 2,
    Waivers = 3,
    Review = 4,
}

impl Step {
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Jumps to step `n`, clamping out-of-range targets into [1, 4].
    #[must_use]
    pub const fn goto(n: u8) -> Self {
        match n {
            0 | 1 => Self::Family,
            2 => Self::Players,
            3 => Self::Waivers,
            _ => Self::Review,
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self::goto(self.number().saturating_add(1))
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        Self::goto(self.number().saturating_sub(1))
    }

    /// Resolves a step pill's target attribute, e.g. `"3"`.
    #[must_use]
    pub fn from_pill(target: &str) -> Option<Self> {
        target.trim().parse::<u8>().ok().map(Self::goto)
    }
}

/// Per-player editable fields, matching the `data-player-field` attribute
/// values on the player card inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerField {
    PlayerName,
    Birthdate,
    Grade,
    Division,
}

impl PlayerField {
    fn from_attr(attr: &str) -> Option<Self> {
        match attr {
            "playerName" => Some(Self::PlayerName),
            "birthdate" => Some(Self::Birthdate),
            "grade" => Some(Self::Grade),
            "division" => Some(Self::Division),
            _ => None,
        }
    }
}

/// A typed handle on one editable form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    GuardianName,
    GuardianEmail,
    GuardianPhone,
    HomeAddress,
    WaiverMedical,
    WaiverConduct,
    BaseFee,
    SiblingCount,
    Player { id: i64, field: PlayerField },
}

impl Field {
    /// Resolves a top-level form element id. Unknown ids map to `None`, which
    /// [`apply_edit`] treats as a no-op.
    #[must_use]
    pub fn from_dom_id(id: &str) -> Option<Self> {
        match id {
            "guardianName" => Some(Self::GuardianName),
            "guardianEmail" => Some(Self::GuardianEmail),
            "guardianPhone" => Some(Self::GuardianPhone),
            "homeAddress" => Some(Self::HomeAddress),
            "waiverMedical" => Some(Self::WaiverMedical),
            "waiverConduct" => Some(Self::WaiverConduct),
            "baseFee" => Some(Self::BaseFee),
            "siblingCount" => Some(Self::SiblingCount),
            _ => None,
        }
    }

    /// Resolves a player card input from its `data-player-id` and
    /// `data-player-field` attributes.
    #[must_use]
    pub fn from_player_attrs(player_id: &str, player_field: &str) -> Option<Self> {
        let id = player_id.trim().parse::<i64>().ok()?;
        let field = PlayerField::from_attr(player_field)?;
        Some(Self::Player { id, field })
    }
}

/// The raw value an edit carries: text inputs and selects produce text,
/// checkboxes produce a flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditValue {
    Text(String),
    Checked(bool),
}

/// One user edit: which field, and the new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEdit {
    pub field: Field,
    pub value: EditValue,
}

impl FieldEdit {
    #[must_use]
    pub fn text(field: Field, value: impl Into<String>) -> Self {
        Self { field, value: EditValue::Text(value.into()) }
    }

    #[must_use]
    pub const fn toggle(field: Field, checked: bool) -> Self {
        Self { field, value: EditValue::Checked(checked) }
    }
}

/// How urgently the state must be persisted after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavePolicy {
    /// Schedule a trailing-edge autosave.
    Debounced,
    /// Persist right away and surface any failure.
    Immediate,
    /// Nothing changed; nothing to save.
    Ignored,
}

/// Applies one edit to the state and reports the save policy.
///
/// Family and waiver fields debounce; fee fields and player edits save
/// immediately. Editing a player's division recomputes its waitlist flag.
/// An edit whose value kind does not match the field (a checkbox value on a
/// text field) or that targets a player no longer in the list is ignored.
pub fn apply_edit(state: &mut RegistrationState, edit: &FieldEdit) -> SavePolicy {
    match (edit.field, &edit.value) {
        (Field::GuardianName, EditValue::Text(value)) => {
            state.family.guardian_name = value.clone();
            SavePolicy::Debounced
        },
        (Field::GuardianEmail, EditValue::Text(value)) => {
            state.family.guardian_email = value.clone();
            SavePolicy::Debounced
        },
        (Field::GuardianPhone, EditValue::Text(value)) => {
            state.family.guardian_phone = value.clone();
            SavePolicy::Debounced
        },
        (Field::HomeAddress, EditValue::Text(value)) => {
            state.family.home_address = value.clone();
            SavePolicy::Debounced
        },
        (Field::WaiverMedical, EditValue::Checked(checked)) => {
            state.waivers.medical = *checked;
            SavePolicy::Debounced
        },
        (Field::WaiverConduct, EditValue::Checked(checked)) => {
            state.waivers.conduct = *checked;
            SavePolicy::Debounced
        },
        (Field::BaseFee, EditValue::Text(value)) => {
            state.discounts.base_fee = parse_number(value);
            SavePolicy::Immediate
        },
        (Field::SiblingCount, EditValue::Text(value)) => {
            state.discounts.sibling_count = parse_number(value);
            SavePolicy::Immediate
        },
        (Field::Player { id, field }, EditValue::Text(value)) => {
            let Some(player) = state.players.iter_mut().find(|p| p.id == id) else {
                return SavePolicy::Ignored;
            };
            match field {
                PlayerField::PlayerName => player.player_name = value.clone(),
                PlayerField::Birthdate => player.birthdate = value.clone(),
                PlayerField::Grade => player.grade = value.clone(),
                PlayerField::Division => player.set_division(value.clone()),
            }
            SavePolicy::Immediate
        },
        _ => SavePolicy::Ignored,
    }
}

/// Number inputs report text; empty or malformed input counts as zero.
fn parse_number(value: &str) -> f64 {
    value.trim().parse().unwrap_or(0.0)
}

/// Appends a blank player under a fresh id. Immediate-save.
pub fn add_player(state: &mut RegistrationState, id: i64) -> SavePolicy {
    state.players.push(Player::blank(id));
    SavePolicy::Immediate
}

/// Removes the player with the given id, if present. Immediate-save.
pub fn remove_player(state: &mut RegistrationState, id: i64) -> SavePolicy {
    state.players.retain(|p| p.id != id);
    SavePolicy::Immediate
}

/// Checkout refused: the gate message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Please acknowledge the waivers before proceeding.")]
pub struct CheckoutBlocked;

/// Gates checkout on both waiver acknowledgements, yielding the checkout
/// target URL when they hold.
///
/// # Errors
/// Returns [`CheckoutBlocked`] when either waiver is unchecked.
pub fn proceed_to_checkout(state: &RegistrationState) -> Result<&'static str, CheckoutBlocked> {
    if state.waivers.acknowledged() { Ok(REGISTRATION_URL) } else { Err(CheckoutBlocked) }
}

/// Review-step summary lines, one per player, with placeholders for unnamed
/// players and unchosen divisions.
#[must_use]
pub fn review_summary(state: &RegistrationState) -> Vec<String> {
    if state.players.is_empty() {
        return vec!["No players added yet.".to_owned()];
    }
    state
        .players
        .iter()
        .map(|player| {
            let name = non_empty(&player.player_name, "Player");
            let division = non_empty(&player.division, "Select division");
            let flag = if player.waitlist { " (waitlist)" } else { "" };
            format!("{name} — {division}{flag}")
        })
        .collect()
}

/// Dashboard guardian lines, or the empty-state line when nothing is filled in.
#[must_use]
pub fn dashboard_family(state: &RegistrationState) -> Vec<String> {
    let family = &state.family;
    let mut lines = Vec::new();
    if !family.guardian_name.is_empty() {
        lines.push(format!("Guardian: {}", family.guardian_name));
    }
    if !family.guardian_email.is_empty() {
        lines.push(format!("Email: {}", family.guardian_email));
    }
    if !family.guardian_phone.is_empty() {
        lines.push(format!("Phone: {}", family.guardian_phone));
    }
    if lines.is_empty() {
        lines.push("No guardian details yet.".to_owned());
    }
    lines
}

/// The waitlist roll-up text for the dashboard.
#[must_use]
pub fn waitlist_summary(state: &RegistrationState) -> String {
    let flagged: Vec<String> = state
        .waitlisted_players()
        .map(|player| {
            format!(
                "{} flagged for waitlist ({}).",
                non_empty(&player.player_name, "Player"),
                player.division
            )
        })
        .collect();
    if flagged.is_empty() {
        "Divisions that are full will appear here with instructions.".to_owned()
    } else {
        flagged.join(" ")
    }
}

fn non_empty<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_navigation_clamps_at_both_ends() {
        assert_eq!(Step::Family.prev(), Step::Family);
        assert_eq!(Step::Family.next(), Step::Players);
        assert_eq!(Step::Review.next(), Step::Review);
        assert_eq!(Step::goto(0), Step::Family);
        assert_eq!(Step::goto(9), Step::Review);
        assert_eq!(Step::from_pill("3"), Some(Step::Waivers));
        assert_eq!(Step::from_pill("nope"), None);
    }

    #[test]
    fn dom_ids_bind_to_typed_fields() {
        assert_eq!(Field::from_dom_id("guardianEmail"), Some(Field::GuardianEmail));
        assert_eq!(Field::from_dom_id("waiverConduct"), Some(Field::WaiverConduct));
        assert_eq!(Field::from_dom_id("placementResult"), None);
        assert_eq!(
            Field::from_player_attrs("42", "division"),
            Some(Field::Player { id: 42, field: PlayerField::Division })
        );
        assert_eq!(Field::from_player_attrs("42", "jersey"), None);
        assert_eq!(Field::from_player_attrs("not-a-number", "grade"), None);
    }

    #[test]
    fn family_edits_debounce_and_fee_edits_save_immediately() {
        let mut state = RegistrationState::default();

        let policy =
            apply_edit(&mut state, &FieldEdit::text(Field::GuardianName, "Dana Alvarez"));
        assert_eq!(policy, SavePolicy::Debounced);
        assert_eq!(state.family.guardian_name, "Dana Alvarez");

        let policy = apply_edit(&mut state, &FieldEdit::text(Field::BaseFee, "210"));
        assert_eq!(policy, SavePolicy::Immediate);
        assert!((state.discounts.base_fee - 210.0).abs() < f64::EPSILON);

        let policy = apply_edit(&mut state, &FieldEdit::text(Field::SiblingCount, ""));
        assert_eq!(policy, SavePolicy::Immediate);
        assert!((state.discounts.sibling_count - 0.0).abs() < f64::EPSILON);

        // A fractional count is kept as typed, not collapsed.
        apply_edit(&mut state, &FieldEdit::text(Field::SiblingCount, "2.5"));
        assert!((state.discounts.sibling_count - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn division_edit_recomputes_waitlist_flag() {
        let mut state = RegistrationState::default();
        add_player(&mut state, 7);

        let edit = FieldEdit::text(
            Field::Player { id: 7, field: PlayerField::Division },
            "Girls League 5–6 (Waitlist)",
        );
        assert_eq!(apply_edit(&mut state, &edit), SavePolicy::Immediate);
        assert!(state.players[0].waitlist);

        let edit = FieldEdit::text(
            Field::Player { id: 7, field: PlayerField::Division },
            "Girls League 7–8",
        );
        apply_edit(&mut state, &edit);
        assert!(!state.players[0].waitlist);
    }

    #[test]
    fn edits_for_missing_players_and_mismatched_values_are_ignored() {
        let mut state = RegistrationState::default();

        let edit = FieldEdit::text(Field::Player { id: 99, field: PlayerField::Grade }, "4th");
        assert_eq!(apply_edit(&mut state, &edit), SavePolicy::Ignored);

        // A checkbox value on a text field changes nothing.
        let edit = FieldEdit::toggle(Field::GuardianName, true);
        assert_eq!(apply_edit(&mut state, &edit), SavePolicy::Ignored);
        assert!(state.family.guardian_name.is_empty());
    }

    #[test]
    fn player_list_mutations_are_immediate() {
        let mut state = RegistrationState::default();
        assert_eq!(add_player(&mut state, 1), SavePolicy::Immediate);
        assert_eq!(add_player(&mut state, 2), SavePolicy::Immediate);
        assert_eq!(state.players.len(), 2);

        assert_eq!(remove_player(&mut state, 1), SavePolicy::Immediate);
        assert_eq!(state.players.len(), 1);
        assert_eq!(state.players[0].id, 2);

        // Removing an absent id is a quiet no-op.
        remove_player(&mut state, 99);
        assert_eq!(state.players.len(), 1);
    }

    #[test]
    fn checkout_requires_both_waivers() {
        let mut state = RegistrationState::default();
        assert_eq!(proceed_to_checkout(&state), Err(CheckoutBlocked));

        state.waivers.medical = true;
        assert_eq!(proceed_to_checkout(&state), Err(CheckoutBlocked));

        state.waivers.conduct = true;
        assert_eq!(proceed_to_checkout(&state), Ok(REGISTRATION_URL));
        assert_eq!(
            CheckoutBlocked.to_string(),
            "Please acknowledge the waivers before proceeding."
        );
    }

    #[test]
    fn review_and_waitlist_projections_render_placeholders() {
        let mut state = RegistrationState::default();
        assert_eq!(review_summary(&state), vec!["No players added yet.".to_owned()]);
        assert_eq!(
            waitlist_summary(&state),
            "Divisions that are full will appear here with instructions."
        );

        add_player(&mut state, 1);
        add_player(&mut state, 2);
        state.players[0].player_name = "Riley".to_owned();
        state.players[0].set_division("Girls League 5–6 (Waitlist)".to_owned());

        let lines = review_summary(&state);
        assert_eq!(lines[0], "Riley — Girls League 5–6 (Waitlist) (waitlist)");
        assert_eq!(lines[1], "Player — Select division");

        assert_eq!(
            waitlist_summary(&state),
            "Riley flagged for waitlist (Girls League 5–6 (Waitlist))."
        );
    }

    #[test]
    fn dashboard_family_lists_only_filled_fields() {
        let mut state = RegistrationState::default();
        assert_eq!(dashboard_family(&state), vec!["No guardian details yet.".to_owned()]);

        state.family.guardian_name = "Dana Alvarez".to_owned();
        state.family.guardian_phone = "555-0147".to_owned();
        assert_eq!(
            dashboard_family(&state),
            vec!["Guardian: Dana Alvarez".to_owned(), "Phone: 555-0147".to_owned()]
        );
    }
}
