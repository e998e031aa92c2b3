//! Status transition rules.
//!
//! The sanctioned edges, enforced at every mutation point:
//!
//! - Volunteer:     pending -> approved | rejected (both terminal)
//! - Donation:      pending -> completed | failed (both terminal)
//! - Registration:  registered -> attended -> completed (adjacent steps only)
//! - Event:         upcoming -> completed
//!
//! Anything else, including backward moves, skipped steps and self-loops, is
//! an invalid transition. Note: skipping registered -> completed is rejected
//! here on the monotonic-forward reading of the registration flow; pending
//! product-owner confirmation (see DESIGN.md).

mod errors;

pub use errors::{TransitionError, TransitionResult};

use crate::entities::{DonationStatus, EventStatus, RegistrationStatus, VolunteerStatus};

/// A status set with sanctioned transition edges.
pub trait Lifecycle: Copy + PartialEq {
    /// Entity kind name used in transition errors.
    const ENTITY: &'static str;

    /// Returns whether moving from `self` to `to` is sanctioned.
    fn can_advance(self, to: Self) -> bool;

    /// Wire spelling of this status.
    fn status_str(self) -> &'static str;
}

/// Applies a transition, returning the new status or a precondition failure.
pub fn advance<S: Lifecycle>(from: S, to: S) -> TransitionResult<S> {
    if from.can_advance(to) {
        Ok(to)
    } else {
        Err(TransitionError::new(
            S::ENTITY,
            from.status_str(),
            to.status_str(),
        ))
    }
}

impl Lifecycle for VolunteerStatus {
    const ENTITY: &'static str = "volunteer";

    fn can_advance(self, to: Self) -> bool {
        matches!(
            (self, to),
            (VolunteerStatus::Pending, VolunteerStatus::Approved)
                | (VolunteerStatus::Pending, VolunteerStatus::Rejected)
        )
    }

    fn status_str(self) -> &'static str {
        self.as_str()
    }
}

impl Lifecycle for DonationStatus {
    const ENTITY: &'static str = "donation";

    fn can_advance(self, to: Self) -> bool {
        matches!(
            (self, to),
            (DonationStatus::Pending, DonationStatus::Completed)
                | (DonationStatus::Pending, DonationStatus::Failed)
        )
    }

    fn status_str(self) -> &'static str {
        self.as_str()
    }
}

impl Lifecycle for RegistrationStatus {
    const ENTITY: &'static str = "volunteer_event";

    fn can_advance(self, to: Self) -> bool {
        matches!(
            (self, to),
            (RegistrationStatus::Registered, RegistrationStatus::Attended)
                | (RegistrationStatus::Attended, RegistrationStatus::Completed)
        )
    }

    fn status_str(self) -> &'static str {
        self.as_str()
    }
}

impl Lifecycle for EventStatus {
    const ENTITY: &'static str = "event";

    fn can_advance(self, to: Self) -> bool {
        matches!((self, to), (EventStatus::Upcoming, EventStatus::Completed))
    }

    fn status_str(self) -> &'static str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volunteer_edges() {
        assert_eq!(
            advance(VolunteerStatus::Pending, VolunteerStatus::Approved),
            Ok(VolunteerStatus::Approved)
        );
        assert_eq!(
            advance(VolunteerStatus::Pending, VolunteerStatus::Rejected),
            Ok(VolunteerStatus::Rejected)
        );
        assert!(advance(VolunteerStatus::Approved, VolunteerStatus::Pending).is_err());
        assert!(advance(VolunteerStatus::Rejected, VolunteerStatus::Approved).is_err());
    }

    #[test]
    fn test_donation_terminal_states() {
        assert!(advance(DonationStatus::Pending, DonationStatus::Completed).is_ok());
        assert!(advance(DonationStatus::Pending, DonationStatus::Failed).is_ok());
        assert!(advance(DonationStatus::Completed, DonationStatus::Failed).is_err());
        assert!(advance(DonationStatus::Failed, DonationStatus::Pending).is_err());
    }

    #[test]
    fn test_registration_requires_adjacent_steps() {
        assert!(advance(RegistrationStatus::Registered, RegistrationStatus::Attended).is_ok());
        assert!(advance(RegistrationStatus::Attended, RegistrationStatus::Completed).is_ok());
        // Skipping attendance is not sanctioned.
        assert!(advance(RegistrationStatus::Registered, RegistrationStatus::Completed).is_err());
        assert!(advance(RegistrationStatus::Completed, RegistrationStatus::Registered).is_err());
    }

    #[test]
    fn test_event_one_directional() {
        assert!(advance(EventStatus::Upcoming, EventStatus::Completed).is_ok());
        assert!(advance(EventStatus::Completed, EventStatus::Upcoming).is_err());
    }

    #[test]
    fn test_self_loop_rejected() {
        let err = advance(VolunteerStatus::Pending, VolunteerStatus::Pending).unwrap_err();
        assert_eq!(err.entity, "volunteer");
        assert_eq!(err.from, "pending");
        assert_eq!(err.to, "pending");
    }
}
