//! Engagement entities: volunteers, donations, event registrations and
//! certificates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::status::{DonationStatus, RegistrationStatus, VolunteerStatus};

/// A volunteer application. Starts `pending`; `approvedDate` is stamped by
/// the store when the application is approved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: i64,
    pub city: String,
    /// Ordered, non-empty list of interest areas.
    pub interests: Vec<String>,
    pub availability: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    pub status: VolunteerStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Client-suppliable fields for creating a [`Volunteer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVolunteer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: i64,
    pub city: String,
    pub interests: Vec<String>,
    pub availability: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
}

impl Volunteer {
    pub fn create(new: NewVolunteer, id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            age: new.age,
            city: new.city,
            interests: new.interests,
            availability: new.availability,
            experience: new.experience,
            status: VolunteerStatus::Pending,
            approved_date: None,
            user_id: new.user_id,
            created_at: now,
        }
    }
}

/// A donation. Starts `pending`; completing it credits the referenced cause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Smallest currency unit, strictly positive.
    pub amount: i64,
    pub payment_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
    pub status: DonationStatus,
    pub created_at: DateTime<Utc>,
}

/// Client-suppliable fields for creating a [`Donation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDonation {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub amount: i64,
    pub payment_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
}

impl Donation {
    pub fn create(new: NewDonation, id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            amount: new.amount,
            payment_id: new.payment_id,
            cause_id: new.cause_id,
            user_id: new.user_id,
            message: new.message,
            receipt: new.receipt,
            status: DonationStatus::Pending,
            created_at: now,
        }
    }
}

/// A volunteer's registration for an event. Identity is the
/// (volunteerId, eventId) pair; `certificateId` is linked by the store when a
/// certificate is issued for the pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerEvent {
    pub volunteer_id: Uuid,
    pub event_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_id: Option<Uuid>,
    pub status: RegistrationStatus,
    pub created_at: DateTime<Utc>,
}

/// Client-suppliable fields for creating a [`VolunteerEvent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVolunteerEvent {
    pub volunteer_id: Uuid,
    pub event_id: Uuid,
}

impl VolunteerEvent {
    pub fn create(new: NewVolunteerEvent, now: DateTime<Utc>) -> Self {
        Self {
            volunteer_id: new.volunteer_id,
            event_id: new.event_id,
            certificate_id: None,
            status: RegistrationStatus::Registered,
            created_at: now,
        }
    }

    /// Composite identity of this registration.
    pub fn key(&self) -> (Uuid, Uuid) {
        (self.volunteer_id, self.event_id)
    }
}

/// A participation certificate. Exactly one per (volunteer, event) issuance;
/// `issueDate` is assigned at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: Uuid,
    pub volunteer_id: Uuid,
    pub event_id: Uuid,
    pub volunteer_name: String,
    pub event_name: String,
    pub certificate_url: String,
    pub issue_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Client-suppliable fields for creating a [`Certificate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCertificate {
    pub volunteer_id: Uuid,
    pub event_id: Uuid,
    pub volunteer_name: String,
    pub event_name: String,
    pub certificate_url: String,
}

impl Certificate {
    pub fn create(new: NewCertificate, id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id,
            volunteer_id: new.volunteer_id,
            event_id: new.event_id,
            volunteer_name: new.volunteer_name,
            event_name: new.event_name,
            certificate_url: new.certificate_url,
            issue_date: now,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_volunteer() -> NewVolunteer {
        NewVolunteer {
            name: "Rahul".into(),
            email: "rahul@example.org".into(),
            phone: "9876543210".into(),
            age: 24,
            city: "Pune".into(),
            interests: vec!["teaching".into(), "logistics".into()],
            availability: "weekends".into(),
            experience: None,
            user_id: None,
        }
    }

    #[test]
    fn test_volunteer_starts_pending_without_approved_date() {
        let volunteer = Volunteer::create(sample_volunteer(), Uuid::new_v4(), Utc::now());
        assert_eq!(volunteer.status, VolunteerStatus::Pending);
        assert!(volunteer.approved_date.is_none());
    }

    #[test]
    fn test_donation_starts_pending() {
        let donation = Donation::create(
            NewDonation {
                name: "Asha".into(),
                email: "asha@example.org".into(),
                phone: "9876543210".into(),
                amount: 500,
                payment_id: "pay_1".into(),
                cause_id: None,
                user_id: None,
                message: None,
                receipt: None,
            },
            Uuid::new_v4(),
            Utc::now(),
        );
        assert_eq!(donation.status, DonationStatus::Pending);
    }

    #[test]
    fn test_registration_key_is_composite() {
        let volunteer_id = Uuid::new_v4();
        let event_id = Uuid::new_v4();
        let registration = VolunteerEvent::create(
            NewVolunteerEvent {
                volunteer_id,
                event_id,
            },
            Utc::now(),
        );
        assert_eq!(registration.key(), (volunteer_id, event_id));
        assert_eq!(registration.status, RegistrationStatus::Registered);
        assert!(registration.certificate_id.is_none());
    }

    #[test]
    fn test_certificate_issue_date_assigned() {
        let now = Utc::now();
        let certificate = Certificate::create(
            NewCertificate {
                volunteer_id: Uuid::new_v4(),
                event_id: Uuid::new_v4(),
                volunteer_name: "Rahul".into(),
                event_name: "Tree drive".into(),
                certificate_url: "/certs/1.pdf".into(),
            },
            Uuid::new_v4(),
            now,
        );
        assert_eq!(certificate.issue_date, now);
    }
}
