//! Status enumerations for entities with a lifecycle.
//!
//! The sanctioned transition edges live in the `transition` module; these
//! types only name the closed sets and their wire spellings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Volunteer application status. Defaults to `Pending` at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolunteerStatus {
    Pending,
    Approved,
    Rejected,
}

impl VolunteerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolunteerStatus::Pending => "pending",
            VolunteerStatus::Approved => "approved",
            VolunteerStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for VolunteerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Donation settlement status. Defaults to `Pending` at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    Pending,
    Completed,
    Failed,
}

impl DonationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationStatus::Pending => "pending",
            DonationStatus::Completed => "completed",
            DonationStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Event-registration progress. Defaults to `Registered` at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Registered,
    Attended,
    Completed,
}

impl RegistrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::Registered => "registered",
            RegistrationStatus::Attended => "attended",
            RegistrationStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Event lifecycle. Defaults to `Upcoming` at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Completed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Account role. Absent on signup means `Donor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Donor,
    Volunteer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Donor => "donor",
            Role::Volunteer => "volunteer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_spellings_are_lowercase() {
        assert_eq!(
            serde_json::to_value(VolunteerStatus::Pending).unwrap(),
            serde_json::json!("pending")
        );
        assert_eq!(
            serde_json::to_value(RegistrationStatus::Attended).unwrap(),
            serde_json::json!("attended")
        );
        assert_eq!(
            serde_json::to_value(EventStatus::Upcoming).unwrap(),
            serde_json::json!("upcoming")
        );
        assert_eq!(serde_json::to_value(Role::Donor).unwrap(), serde_json::json!("donor"));
    }

    #[test]
    fn test_default_role_is_donor() {
        assert_eq!(Role::default(), Role::Donor);
    }
}
