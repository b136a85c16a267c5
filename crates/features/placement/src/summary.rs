//! Share affordances for the latest placement: a prefilled `mailto:` draft
//! and the copy-to-clipboard text. Both degrade gracefully to a "nothing
//! recorded yet" message when the history log is empty.

use ltrc_domain::history::PlacementHistoryEntry;
use std::fmt::Write as _;

const EMAIL_SUBJECT: &str = "LTRC placement summary";

/// A prefilled email draft for sharing the latest placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailSummary {
    pub subject: &'static str,
    pub body: String,
}

impl EmailSummary {
    /// The `mailto:` URL the shell opens, with subject and body encoded.
    #[must_use]
    pub fn mailto(&self) -> String {
        self.mailto_to("")
    }

    /// Like [`Self::mailto`], addressed to the email the user entered.
    #[must_use]
    pub fn mailto_to(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            encode_component(recipient),
            encode_component(self.subject),
            encode_component(&self.body)
        )
    }
}

/// The outcome of the email form: either a launchable draft or the advisory
/// asking for an address first. A blank address is ordinary input, not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailDraft {
    NeedAddress,
    Ready { recipient: String, mailto: String },
}

impl EmailDraft {
    /// The advisory shown in the form status when no address was entered.
    #[must_use]
    pub const fn advisory(&self) -> Option<&'static str> {
        match self {
            Self::NeedAddress => Some("Add an email address to receive your summary."),
            Self::Ready { .. } => None,
        }
    }
}

/// Builds the email form outcome for the entered address and latest entry.
/// Whitespace-only addresses count as empty.
#[must_use]
pub fn email_draft(email: &str, latest: Option<&PlacementHistoryEntry>) -> EmailDraft {
    let email = email.trim();
    if email.is_empty() {
        return EmailDraft::NeedAddress;
    }
    EmailDraft::Ready {
        recipient: email.to_owned(),
        mailto: email_summary(latest).mailto_to(email),
    }
}

/// Builds the email draft from the latest history entry.
#[must_use]
pub fn email_summary(latest: Option<&PlacementHistoryEntry>) -> EmailSummary {
    let body = match latest {
        Some(entry) => {
            format!("Placement summary:\r\n{} (saved {})", entry.result, entry.date)
        },
        None => {
            "Placement summary:\r\nNo placement recorded yet. Visit the homepage helper to add one!"
                .to_owned()
        },
    };
    EmailSummary { subject: EMAIL_SUBJECT, body }
}

/// The clipboard text for the latest entry, or `None` when the log is empty
/// so the shell can show its "nothing to copy" notice instead.
#[must_use]
pub fn copy_summary(latest: Option<&PlacementHistoryEntry>) -> Option<String> {
    latest.map(|entry| format!("{} — saved {}", entry.result, entry.date))
}

/// Percent-encodes a `mailto:` query component. Unreserved marks pass through
/// unchanged; everything else is encoded per UTF-8 byte.
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                let _ = write!(out, "%{byte:02X}");
            },
        }
    }
    out
}
