//! The sibling discount engine.
//!
//! Policy: the quote only appears once at least two players are on the roster
//! AND at least two siblings are declared; every sibling beyond the first
//! knocks a fixed amount off, the subtotal is `base_fee * sibling_count`, and
//! the total never goes below zero.
//!
//! The declared sibling count is user-entered and deliberately independent of
//! the roster length; [`counts_disagree`] lets the UI nudge the user when the
//! two drift apart.

use ltrc_domain::config::RegistrationConfig;
use ltrc_domain::registration::RegistrationState;

/// The outcome of a discount calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiscountSummary {
    /// Fewer than two players or declared siblings; no quote yet.
    NeedMorePlayers,
    /// A full quote.
    Quote { subtotal: f64, discount: f64, total: f64 },
}

impl DiscountSummary {
    /// The summary line shown under the fee fields.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::NeedMorePlayers => {
                "Sibling discount: add at least two players to calculate savings.".to_owned()
            },
            Self::Quote { discount, total, .. } => {
                format!("Estimated total: ${total:.2} (includes ${discount:.2} sibling discount).")
            },
        }
    }
}

/// Computes the sibling discount quote with the given per-sibling amount.
///
/// The declared count is a raw number-input value and may be fractional; the
/// formula applies it as-is.
#[must_use]
pub fn sibling_discount(
    base_fee: f64,
    sibling_count: f64,
    player_count: usize,
    per_sibling: f64,
) -> DiscountSummary {
    if player_count < 2 || sibling_count < 2.0 {
        return DiscountSummary::NeedMorePlayers;
    }
    let additional = (sibling_count - 1.0).max(0.0);
    let discount = additional * per_sibling;
    let subtotal = base_fee * sibling_count;
    let total = (subtotal - discount).max(0.0);
    DiscountSummary::Quote { subtotal, discount, total }
}

/// The quote for the current state under the configured per-sibling amount.
#[must_use]
pub fn quote_for(state: &RegistrationState, config: &RegistrationConfig) -> DiscountSummary {
    sibling_discount(
        state.discounts.base_fee,
        state.discounts.sibling_count,
        state.players.len(),
        config.sibling_discount,
    )
}

/// True when the declared sibling count does not match the roster length.
#[must_use]
pub fn counts_disagree(sibling_count: f64, player_count: usize) -> bool {
    #[allow(clippy::cast_precision_loss)]
    let players = player_count as f64;
    (sibling_count - players).abs() > f64::EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    const PER_SIBLING: f64 = 25.0;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn single_player_gets_advisory_not_quote() {
        assert_eq!(sibling_discount(190.0, 1.0, 1, PER_SIBLING), DiscountSummary::NeedMorePlayers);
        // Two players but only one declared sibling: still advisory.
        assert_eq!(sibling_discount(190.0, 1.0, 2, PER_SIBLING), DiscountSummary::NeedMorePlayers);
        // Two declared siblings but one player on the roster: still advisory.
        assert_eq!(sibling_discount(190.0, 2.0, 1, PER_SIBLING), DiscountSummary::NeedMorePlayers);
    }

    #[test]
    fn three_siblings_earn_two_discounts() {
        let DiscountSummary::Quote { subtotal, discount, total } =
            sibling_discount(190.0, 3.0, 3, PER_SIBLING)
        else {
            panic!("expected a quote");
        };
        assert_close(subtotal, 570.0);
        assert_close(discount, 50.0);
        assert_close(total, 520.0);
    }

    #[test]
    fn fractional_sibling_count_quotes_as_entered() {
        // The number input reports whatever was typed; 2.5 siblings still
        // produce a quote rather than collapsing to zero.
        let DiscountSummary::Quote { subtotal, discount, total } =
            sibling_discount(190.0, 2.5, 3, PER_SIBLING)
        else {
            panic!("expected a quote");
        };
        assert_close(subtotal, 475.0);
        assert_close(discount, 37.5);
        assert_close(total, 437.5);
    }

    #[test]
    fn total_never_goes_negative() {
        let DiscountSummary::Quote { total, .. } = sibling_discount(1.0, 100.0, 100, PER_SIBLING)
        else {
            panic!("expected a quote");
        };
        assert_close(total, 0.0);
    }

    #[test]
    fn render_matches_the_display_strings() {
        assert_eq!(
            sibling_discount(190.0, 1.0, 1, PER_SIBLING).render(),
            "Sibling discount: add at least two players to calculate savings."
        );
        assert_eq!(
            sibling_discount(190.0, 3.0, 3, PER_SIBLING).render(),
            "Estimated total: $520.00 (includes $50.00 sibling discount)."
        );
    }

    #[test]
    fn disagreeing_counts_are_flagged() {
        assert!(!counts_disagree(2.0, 2));
        assert!(counts_disagree(3.0, 2));
        assert!(counts_disagree(2.5, 2));
        assert!(counts_disagree(-1.0, 0));
    }

    #[test]
    fn quote_for_uses_state_and_config() {
        let mut state = RegistrationState::default();
        let config = RegistrationConfig::default();

        assert_eq!(quote_for(&state, &config), DiscountSummary::NeedMorePlayers);

        state.discounts.sibling_count = 2.0;
        state.players.push(ltrc_domain::registration::Player::blank(1));
        state.players.push(ltrc_domain::registration::Player::blank(2));

        let DiscountSummary::Quote { total, .. } = quote_for(&state, &config) else {
            panic!("expected a quote");
        };
        assert_close(total, 190.0 * 2.0 - 25.0);
    }
}
