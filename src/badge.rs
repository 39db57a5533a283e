//! Status badges.
//!
//! Records across the platform carry short status codes (`open`,
//! `in_review`, `withdrawn`...). [`status_badge`] turns any code into a
//! label and a color variant. Known codes are the [`Status`] enum; unknown
//! ones still render, title-cased and neutral.

use lipgloss_extras::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString, IntoStaticStr, VariantArray};

/// Color family of a badge.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BadgeVariant {
    /// Gray.
    #[default]
    Neutral,
    /// Blue.
    Info,
    /// Green.
    Success,
    /// Amber.
    Warning,
    /// Red.
    Danger,
    /// Purple.
    Accent,
}

impl BadgeVariant {
    /// Style used to draw a badge of this variant.
    pub fn style(self) -> Style {
        let (fg, bg) = match self {
            BadgeVariant::Neutral => ("#374151", "#E5E7EB"),
            BadgeVariant::Info => ("#1E40AF", "#DBEAFE"),
            BadgeVariant::Success => ("#065F46", "#D1FAE5"),
            BadgeVariant::Warning => ("#92400E", "#FEF3C7"),
            BadgeVariant::Danger => ("#991B1B", "#FEE2E2"),
            BadgeVariant::Accent => ("#5B21B6", "#EDE9FE"),
        };
        Style::new()
            .foreground(Color::from(fg))
            .background(Color::from(bg))
            .padding(0, 1, 0, 1)
    }
}

/// Status codes with a known presentation.
///
/// Parsing ignores ASCII case and accepts `-` or spaces in place of `_`
/// (see [`Status::parse`]).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, IntoStaticStr, VariantArray,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Status {
    // Job postings
    /// Posting is accepting applications.
    Open,
    /// Posting no longer accepts applications.
    Closed,
    /// Posting is not yet published.
    Draft,
    /// Posting has been filled.
    Filled,
    // Applications
    /// Application awaits a first look.
    Pending,
    /// Application is being reviewed.
    Reviewing,
    /// Applicant made the shortlist.
    Shortlisted,
    /// Applicant is interviewing.
    Interview,
    /// Applicant received an offer.
    Offered,
    /// Offer or request was accepted.
    Accepted,
    /// Application or request was rejected.
    Rejected,
    /// Applicant withdrew.
    Withdrawn,
    // Mentorship sessions and CV reviews
    /// Session is booked.
    Scheduled,
    /// Session is confirmed by both sides.
    Confirmed,
    /// Session or review is done.
    Completed,
    /// Session was cancelled. Also parses as `canceled`.
    #[strum(serialize = "cancelled", serialize = "canceled")]
    Cancelled,
    /// Review request was submitted.
    Submitted,
    /// Review is in progress.
    InReview,
    /// Review is finished.
    Reviewed,
    // Accounts
    /// Account is active.
    Active,
    /// Account is disabled.
    Inactive,
}

impl Status {
    /// Parses a status code, tolerating case and `-`/space separators.
    pub fn parse(code: &str) -> Option<Self> {
        let normalized: String = code
            .trim()
            .chars()
            .map(|c| if c == '-' || c == ' ' { '_' } else { c })
            .collect();
        Status::from_str(&normalized).ok()
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::Closed => "Closed",
            Status::Draft => "Draft",
            Status::Filled => "Filled",
            Status::Pending => "Pending",
            Status::Reviewing => "Reviewing",
            Status::Shortlisted => "Shortlisted",
            Status::Interview => "Interview",
            Status::Offered => "Offered",
            Status::Accepted => "Accepted",
            Status::Rejected => "Rejected",
            Status::Withdrawn => "Withdrawn",
            Status::Scheduled => "Scheduled",
            Status::Confirmed => "Confirmed",
            Status::Completed => "Completed",
            Status::Cancelled => "Cancelled",
            Status::Submitted => "Submitted",
            Status::InReview => "In Review",
            Status::Reviewed => "Reviewed",
            Status::Active => "Active",
            Status::Inactive => "Inactive",
        }
    }

    /// Color variant.
    pub fn variant(self) -> BadgeVariant {
        match self {
            Status::Open
            | Status::Offered
            | Status::Accepted
            | Status::Confirmed
            | Status::Completed
            | Status::Reviewed
            | Status::Active => BadgeVariant::Success,
            Status::Draft | Status::Pending | Status::InReview => BadgeVariant::Warning,
            Status::Filled | Status::Reviewing | Status::Scheduled | Status::Submitted => {
                BadgeVariant::Info
            }
            Status::Shortlisted | Status::Interview => BadgeVariant::Accent,
            Status::Rejected | Status::Cancelled => BadgeVariant::Danger,
            Status::Closed | Status::Withdrawn | Status::Inactive => BadgeVariant::Neutral,
        }
    }
}

/// A label with a color variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    /// Text shown in the badge.
    pub label: String,
    /// Color family.
    pub variant: BadgeVariant,
}

impl Badge {
    /// Creates a badge.
    pub fn new(label: impl Into<String>, variant: BadgeVariant) -> Self {
        Self {
            label: label.into(),
            variant,
        }
    }

    /// Renders the badge.
    pub fn render(&self) -> String {
        self.variant.style().render(&self.label)
    }
}

impl From<Status> for Badge {
    fn from(status: Status) -> Self {
        Badge::new(status.label(), status.variant())
    }
}

/// Badge for a status code.
///
/// ```rust
/// use bubbletea_datatable::badge::{status_badge, BadgeVariant};
///
/// let badge = status_badge("IN_REVIEW");
/// assert_eq!(badge.label, "In Review");
/// assert_eq!(badge.variant, BadgeVariant::Warning);
///
/// let unknown = status_badge("on_hold");
/// assert_eq!(unknown.label, "On Hold");
/// assert_eq!(unknown.variant, BadgeVariant::Neutral);
/// ```
pub fn status_badge(code: &str) -> Badge {
    match Status::parse(code) {
        Some(status) => status.into(),
        None => Badge::new(title_case(code), BadgeVariant::Neutral),
    }
}

fn title_case(code: &str) -> String {
    code.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses() {
        assert_eq!(status_badge("open"), Badge::new("Open", BadgeVariant::Success));
        assert_eq!(status_badge("REJECTED"), Badge::new("Rejected", BadgeVariant::Danger));
        assert_eq!(status_badge("shortlisted").variant, BadgeVariant::Accent);
        assert_eq!(status_badge("in-review").label, "In Review");
        assert_eq!(status_badge(" pending ").variant, BadgeVariant::Warning);
        assert_eq!(status_badge("canceled").label, "Cancelled");
    }

    #[test]
    fn test_every_status_roundtrips_through_its_code() {
        for status in Status::VARIANTS {
            let code: &'static str = (*status).into();
            assert_eq!(Status::parse(code), Some(*status), "{code}");
        }
    }

    #[test]
    fn test_unknown_status_falls_back() {
        let badge = status_badge("awaiting_PAYMENT");
        assert_eq!(badge.label, "Awaiting Payment");
        assert_eq!(badge.variant, BadgeVariant::Neutral);
        assert_eq!(status_badge("").label, "");
    }

    #[test]
    fn test_render_contains_label() {
        let rendered = status_badge("filled").render();
        let plain = lipgloss_extras::lipgloss::strip_ansi(&rendered);
        assert_eq!(plain.trim(), "Filled");
    }
}
