//! Pure placement calculation: (category, birthdate-or-grade, cutoff) → result.
//!
//! Boys divisions are age-based against the program cut-off date; girls
//! divisions are grade-based. Both tables are ordered and exhaustive, with a
//! contact-the-program catch-all at the top end. Labels are reproduced
//! verbatim from the program's published division list, en-dashes included.

use chrono::{Datelike, NaiveDate};
use ltrc_domain::config::PlacementConfig;
use std::borrow::Cow;
use tracing::warn;

/// Which placement flow the helper runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Category {
    /// Birthdate-based placement.
    #[default]
    Boys,
    /// Grade-based placement.
    Girls,
}

/// What the helper asks for when its input is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Birthdate,
    Grade,
}

impl Prompt {
    /// The instructional string shown in place of a result.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Birthdate => "Enter a birthdate.",
            Self::Grade => "Select a grade.",
        }
    }
}

/// The outcome of a placement calculation.
///
/// `Empty` means no real computation happened (missing input); it exists as a
/// variant precisely so the history log can skip it without inspecting
/// display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    Empty(Prompt),
    Computed(Cow<'static, str>),
}

impl Placement {
    /// The division label, when one was computed.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Empty(_) => None,
            Self::Computed(label) => Some(label),
        }
    }

    #[must_use]
    pub const fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }

    /// The full text the helper displays and the history log records.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Empty(prompt) => prompt.text().to_owned(),
            Self::Computed(label) => format!(
                "Suggested placement: {label}\nThis guide is informational; final placement follows program rules."
            ),
        }
    }
}

pub(crate) const NOT_YET_ELIGIBLE: &str = "Not eligible yet (must be at least 6 as of Sept 1).";
pub(crate) const CONTACT_PROGRAM: &str = "Please contact the program for placement.";

/// Runs the placement helper for one input.
///
/// Missing input yields [`Placement::Empty`]; everything else computes a label
/// through the ordered tables below. An unparseable birthdate or grade falls
/// through to the contact-the-program row, the tables' catch-all.
#[must_use]
pub fn evaluate(category: Category, input: &str, cutoff: NaiveDate) -> Placement {
    match category {
        Category::Boys => {
            let input = input.trim();
            if input.is_empty() {
                return Placement::Empty(Prompt::Birthdate);
            }
            let label = NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .map_or(CONTACT_PROGRAM, |birthdate| {
                    boys_division(age_as_of(cutoff, birthdate))
                });
            Placement::Computed(Cow::Borrowed(label))
        },
        Category::Girls => {
            let input = input.trim();
            if input.is_empty() {
                return Placement::Empty(Prompt::Grade);
            }
            let label = parse_grade(input).map_or(CONTACT_PROGRAM, girls_division);
            Placement::Computed(Cow::Borrowed(label))
        },
    }
}

/// Calendar age as of the cut-off: year difference, minus one when the
/// birthday has not yet occurred by the cut-off's month/day.
#[must_use]
pub fn age_as_of(cutoff: NaiveDate, birthdate: NaiveDate) -> i32 {
    let mut age = cutoff.year() - birthdate.year();
    let before_birthday = (cutoff.month(), cutoff.day()) < (birthdate.month(), birthdate.day());
    if before_birthday {
        age -= 1;
    }
    age
}

/// Ordered age table for the birthdate-based category.
const fn boys_division(age: i32) -> &'static str {
    match age {
        i32::MIN..=5 => NOT_YET_ELIGIBLE,
        6 | 7 => "Boys Clinic 6–7",
        8 => "Boys Clinic 8",
        9 | 10 => "Boys 9–10 League",
        11 | 12 => "Boys 11–12 League",
        13 | 14 => "Boys 13–14 League",
        _ => CONTACT_PROGRAM,
    }
}

/// Ordered grade table for the grade-based category.
const fn girls_division(grade: i32) -> &'static str {
    match grade {
        i32::MIN..=1 => "Girls Clinic K–1",
        2 => "Girls Clinic 2",
        3 | 4 => "Girls 3–4 League",
        5 | 6 => "Girls 5–6 League",
        7 | 8 => "Girls 7–8 League",
        _ => CONTACT_PROGRAM,
    }
}

/// Leading-integer grade parse: `"4th"` → 4, `"K"` → none.
fn parse_grade(input: &str) -> Option<i32> {
    let input = input.trim();
    let (sign, digits) = match input.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, input),
    };
    let leading: String = digits.chars().take_while(char::is_ascii_digit).collect();
    leading.parse::<i32>().ok().map(|g| g * sign)
}

/// Parses the configured cut-off date, falling back to the built-in default
/// when the configured value is malformed.
#[must_use]
pub fn cutoff_from_config(config: &PlacementConfig) -> NaiveDate {
    NaiveDate::parse_from_str(&config.cutoff_date, "%Y-%m-%d").unwrap_or_else(|err| {
        warn!(cutoff = %config.cutoff_date, error = %err, "Invalid cut-off date in config, using default");
        let fallback = PlacementConfig::default();
        NaiveDate::parse_from_str(&fallback.cutoff_date, "%Y-%m-%d")
            .expect("default cut-off date is well-formed")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cutoff() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    #[test]
    fn age_counts_birthday_on_the_cutoff_day() {
        // Birthday exactly on the cut-off counts as already reached.
        let bday = NaiveDate::from_ymd_opt(2019, 9, 1).unwrap();
        assert_eq!(age_as_of(cutoff(), bday), 6);

        let bday = NaiveDate::from_ymd_opt(2019, 9, 2).unwrap();
        assert_eq!(age_as_of(cutoff(), bday), 5);
    }

    #[test]
    fn boys_boundaries_map_to_divisions() {
        let cases = [
            ("2019-09-01", "Boys Clinic 6–7"),                  // age 6
            ("2019-09-02", NOT_YET_ELIGIBLE),                   // age 5
            ("2017-09-01", "Boys Clinic 8"),                    // age 8
            ("2015-06-15", "Boys 9–10 League"),                 // age 10
            ("2013-01-01", "Boys 11–12 League"),                // age 12
            ("2011-08-31", "Boys 13–14 League"),                // age 14
            ("2005-01-01", CONTACT_PROGRAM),                    // age 20
        ];
        for (birthdate, expected) in cases {
            let placement = evaluate(Category::Boys, birthdate, cutoff());
            assert_eq!(placement.label(), Some(expected), "birthdate {birthdate}");
        }
    }

    #[test]
    fn girls_grades_map_to_divisions() {
        let cases = [
            ("0", "Girls Clinic K–1"),
            ("1", "Girls Clinic K–1"),
            ("2", "Girls Clinic 2"),
            ("3", "Girls 3–4 League"),
            ("4th", "Girls 3–4 League"),
            ("5", "Girls 5–6 League"),
            ("7", "Girls 7–8 League"),
            ("9", CONTACT_PROGRAM),
            ("K", CONTACT_PROGRAM),
        ];
        for (grade, expected) in cases {
            let placement = evaluate(Category::Girls, grade, cutoff());
            assert_eq!(placement.label(), Some(expected), "grade {grade}");
        }
    }

    #[test]
    fn missing_input_yields_prompts_not_labels() {
        assert_eq!(evaluate(Category::Boys, "", cutoff()), Placement::Empty(Prompt::Birthdate));
        assert_eq!(evaluate(Category::Girls, "  ", cutoff()), Placement::Empty(Prompt::Grade));
        assert!(!evaluate(Category::Boys, "", cutoff()).is_computed());
    }

    #[test]
    fn unparseable_birthdate_falls_through_to_contact() {
        let placement = evaluate(Category::Boys, "not-a-date", cutoff());
        assert_eq!(placement.label(), Some(CONTACT_PROGRAM));
    }

    #[test]
    fn summary_text_wraps_the_label() {
        let placement = evaluate(Category::Boys, "2017-09-01", cutoff());
        let summary = placement.summary();
        assert!(summary.starts_with("Suggested placement: Boys Clinic 8"));
        assert!(summary.contains("final placement follows program rules"));

        assert_eq!(
            evaluate(Category::Girls, "", cutoff()).summary(),
            "Select a grade."
        );
    }

    #[test]
    fn config_cutoff_parses_with_fallback() {
        let config = PlacementConfig::default();
        assert_eq!(cutoff_from_config(&config), cutoff());

        let broken = PlacementConfig { cutoff_date: "soon".to_owned() };
        assert_eq!(cutoff_from_config(&broken), cutoff());
    }
}
