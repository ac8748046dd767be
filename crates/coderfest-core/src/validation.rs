//! Server-side registration input validation.
//!
//! The form controller performs its own pre-submission checks; this module is
//! the authoritative pass run by the submission handler before anything is
//! uploaded or persisted.

use validator::ValidateEmail;

use crate::constants::{MAX_TEAM_SIZE, MIN_TEAM_SIZE};
use crate::error::AppError;
use crate::models::StudentDetail;

/// Leader/team fields of an incoming submission, before a Registration exists.
#[derive(Debug, Clone)]
pub struct RegistrationInput<'a> {
    pub team_name: &'a str,
    pub leader_name: &'a str,
    pub leader_email: &'a str,
    pub leader_contact: &'a str,
    pub college_name: &'a str,
    pub students: &'a [StudentDetail],
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validate a parsed submission against the data model: non-empty leader and
/// team fields, a plausible leader email, and 3-5 fully populated students.
pub fn validate_registration(input: &RegistrationInput<'_>) -> Result<(), AppError> {
    let mut missing = Vec::new();
    if is_blank(input.team_name) {
        missing.push("teamName");
    }
    if is_blank(input.leader_name) {
        missing.push("leaderName");
    }
    if is_blank(input.leader_email) {
        missing.push("leaderEmail");
    }
    if is_blank(input.leader_contact) {
        missing.push("leaderContact");
    }
    if is_blank(input.college_name) {
        missing.push("collegeName");
    }
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    if !input.leader_email.validate_email() {
        return Err(AppError::Validation(format!(
            "Invalid leader email address: {}",
            input.leader_email
        )));
    }

    if input.students.len() < MIN_TEAM_SIZE || input.students.len() > MAX_TEAM_SIZE {
        return Err(AppError::Validation(format!(
            "Team must have between {} and {} members, got {}",
            MIN_TEAM_SIZE,
            MAX_TEAM_SIZE,
            input.students.len()
        )));
    }

    for (i, student) in input.students.iter().enumerate() {
        if !student.is_complete() {
            return Err(AppError::Validation(format!(
                "Missing details for student {}",
                i + 1
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn students(n: usize) -> Vec<StudentDetail> {
        (0..n)
            .map(|i| StudentDetail {
                name: format!("Student {}", i + 1),
                email: format!("student{}@example.com", i + 1),
                contact: format!("98765432{:02}", i),
            })
            .collect()
    }

    fn input<'a>(students: &'a [StudentDetail]) -> RegistrationInput<'a> {
        RegistrationInput {
            team_name: "Null Pointers",
            leader_name: "Asha Verma",
            leader_email: "asha@example.com",
            leader_contact: "9876543210",
            college_name: "SGSIT",
            students,
        }
    }

    #[test]
    fn accepts_valid_teams_of_all_sizes() {
        for n in 3..=5 {
            let s = students(n);
            assert!(validate_registration(&input(&s)).is_ok(), "size {}", n);
        }
    }

    #[test]
    fn reports_missing_leader_fields_by_name() {
        let s = students(3);
        let mut i = input(&s);
        i.team_name = "  ";
        i.leader_contact = "";
        let err = validate_registration(&i).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Missing required fields: teamName, leaderContact"
        );
    }

    #[test]
    fn rejects_implausible_leader_email() {
        let s = students(3);
        let mut i = input(&s);
        i.leader_email = "not-an-email";
        assert!(validate_registration(&i).is_err());
    }

    #[test]
    fn rejects_out_of_range_team_sizes() {
        for n in [0, 2, 6] {
            let s = students(n);
            assert!(validate_registration(&input(&s)).is_err(), "size {}", n);
        }
    }

    #[test]
    fn rejects_partially_filled_student() {
        let mut s = students(4);
        s[2].email.clear();
        let err = validate_registration(&input(&s)).unwrap_err();
        assert!(err.to_string().contains("student 3"));
    }
}
