//! Organizer tooling for Coder Fest registrations.
//!
//! Filtering and CSV export mirror the admin dashboard: case-insensitive
//! substring search over leader name, contact number, and team name, and a
//! fully quoted CSV with one row per registration.

use chrono::{DateTime, Utc};
use coderfest_core::constants::REGISTRATION_FEE_INR;
use coderfest_core::{Registration, RegistrationStatus};

/// CSV header, in dashboard column order.
pub const CSV_HEADERS: [&str; 8] = [
    "Registration ID",
    "Team Leader Name",
    "Contact Number",
    "Team Name",
    "College",
    "Email",
    "Registration Date",
    "Status",
];

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Case-insensitive substring match over leader name, contact number, and
/// team name.
pub fn matches_search(registration: &Registration, term: &str) -> bool {
    let term_lower = term.to_lowercase();
    registration
        .leader_name
        .to_lowercase()
        .contains(&term_lower)
        || registration.leader_contact.contains(term)
        || registration.team_name.to_lowercase().contains(&term_lower)
}

/// Filter registrations by an optional search term.
pub fn filter_registrations<'a>(
    registrations: &'a [Registration],
    search: Option<&str>,
) -> Vec<&'a Registration> {
    match search {
        Some(term) if !term.trim().is_empty() => registrations
            .iter()
            .filter(|r| matches_search(r, term))
            .collect(),
        _ => registrations.iter().collect(),
    }
}

/// Locale-style timestamp as the dashboard rendered it.
pub fn format_registered_at(registered_at: &DateTime<Utc>) -> String {
    registered_at.format("%d/%m/%Y, %H:%M:%S").to_string()
}

pub fn status_label(status: RegistrationStatus) -> &'static str {
    match status {
        RegistrationStatus::Confirmed => "confirmed",
    }
}

/// Quote a CSV cell, doubling embedded quotes.
fn csv_cell(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Serialize the given registrations to CSV: header plus one row each,
/// every cell quoted.
pub fn to_csv(registrations: &[&Registration]) -> String {
    let mut lines = Vec::with_capacity(registrations.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    for registration in registrations {
        let registered_at = format_registered_at(&registration.registered_at);
        let row = [
            registration.registration_id.as_str(),
            registration.leader_name.as_str(),
            registration.leader_contact.as_str(),
            registration.team_name.as_str(),
            registration.college_name.as_str(),
            registration.leader_email.as_str(),
            registered_at.as_str(),
            status_label(registration.status),
        ]
        .map(csv_cell)
        .join(",");
        lines.push(row);
    }
    lines.join("\n")
}

/// Totals for the organizer stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Stats {
    pub total_registrations: usize,
    pub total_participants: usize,
    pub total_revenue_inr: u64,
}

pub fn compute_stats(registrations: &[Registration]) -> Stats {
    Stats {
        total_registrations: registrations.len(),
        total_participants: registrations.iter().map(|r| r.students.len()).sum(),
        total_revenue_inr: registrations.len() as u64 * REGISTRATION_FEE_INR as u64,
    }
}
