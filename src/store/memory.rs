//! In-memory persistence adapter.
//!
//! The reference implementation of the storage contract the validation layer
//! assumes: it validates before persisting (V1), allocates identity and
//! creation timestamps, applies creation-time defaults (V5), and enforces the
//! invariants that only the store can see — uniqueness, referential
//! integrity, sanctioned status transitions and monotonic `raised` growth.
//!
//! Every operation is one atomic step against `&mut self`; the `raised`
//! updates are read-modify-write inside a single call, so no increment can
//! be lost within a store instance.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::entities::{
    BlogPost, Cause, Certificate, Contact, Donation, DonationStatus, Event, EventStatus,
    GalleryItem, NewBlogPost, NewCause, NewCertificate, NewContact, NewDonation, NewEvent,
    NewGalleryItem, NewPartner, NewProject, NewSubscriber, NewTestimonial, NewUser, NewVolunteer,
    NewVolunteerEvent, Partner, Project, RegistrationStatus, Subscriber, Testimonial, User,
    Volunteer, VolunteerEvent, VolunteerStatus,
};
use crate::observability::{self, Event as LogEvent};
use crate::schema::{validate_insert, EntityKind};
use crate::transition::advance;

use super::errors::{StoreError, StoreResult};

/// In-memory store over typed per-kind collections.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: BTreeMap<Uuid, User>,
    projects: BTreeMap<Uuid, Project>,
    causes: BTreeMap<Uuid, Cause>,
    events: BTreeMap<Uuid, Event>,
    gallery_items: BTreeMap<Uuid, GalleryItem>,
    blog_posts: BTreeMap<Uuid, BlogPost>,
    testimonials: BTreeMap<Uuid, Testimonial>,
    partners: BTreeMap<Uuid, Partner>,
    volunteers: BTreeMap<Uuid, Volunteer>,
    donations: BTreeMap<Uuid, Donation>,
    registrations: BTreeMap<(Uuid, Uuid), VolunteerEvent>,
    certificates: BTreeMap<Uuid, Certificate>,
    contacts: BTreeMap<Uuid, Contact>,
    subscribers: BTreeMap<Uuid, Subscriber>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity-and-timestamp allocator for one insert.
    fn allocate(&self) -> (Uuid, DateTime<Utc>) {
        (Uuid::new_v4(), Utc::now())
    }

    fn log_insert(kind: EntityKind, id: &str) {
        observability::log_event_with_fields(
            LogEvent::EntityInserted,
            &[("entity", kind.as_str()), ("id", id)],
        );
    }

    fn log_advance(kind: EntityKind, id: &str, to: &str) {
        observability::log_event_with_fields(
            LogEvent::StatusAdvanced,
            &[("entity", kind.as_str()), ("id", id), ("to", to)],
        );
    }

    /// Validates a raw candidate against `kind`'s insert contract and, on
    /// success, persists it with allocated identity, creation timestamp and
    /// defaults. Returns the full stored entity as a JSON value.
    ///
    /// This is the single entry point the API layer calls; it short-circuits
    /// on the first error class (validation, then uniqueness/referential).
    pub fn insert(&mut self, kind: EntityKind, raw: &Value) -> StoreResult<Value> {
        let normalized = match validate_insert(kind, raw) {
            Ok(value) => value,
            Err(errors) => {
                observability::log_rejection(
                    LogEvent::ValidationRejected,
                    &[
                        ("entity", kind.as_str()),
                        ("failures", &errors.failures().len().to_string()),
                    ],
                );
                return Err(errors.into());
            }
        };

        let stored = match kind {
            EntityKind::User => {
                serde_json::to_value(self.create_user(serde_json::from_value(normalized)?)?)?
            }
            EntityKind::Project => {
                serde_json::to_value(self.create_project(serde_json::from_value(normalized)?))?
            }
            EntityKind::Cause => {
                serde_json::to_value(self.create_cause(serde_json::from_value(normalized)?))?
            }
            EntityKind::Event => {
                serde_json::to_value(self.create_event(serde_json::from_value(normalized)?))?
            }
            EntityKind::GalleryItem => {
                serde_json::to_value(self.create_gallery_item(serde_json::from_value(normalized)?))?
            }
            EntityKind::BlogPost => {
                serde_json::to_value(self.create_blog_post(serde_json::from_value(normalized)?))?
            }
            EntityKind::Testimonial => {
                serde_json::to_value(self.create_testimonial(serde_json::from_value(normalized)?))?
            }
            EntityKind::Partner => {
                serde_json::to_value(self.create_partner(serde_json::from_value(normalized)?))?
            }
            EntityKind::Volunteer => {
                serde_json::to_value(self.create_volunteer(serde_json::from_value(normalized)?)?)?
            }
            EntityKind::Donation => {
                serde_json::to_value(self.create_donation(serde_json::from_value(normalized)?)?)?
            }
            EntityKind::VolunteerEvent => serde_json::to_value(
                self.register_volunteer(serde_json::from_value(normalized)?)?,
            )?,
            EntityKind::Certificate => {
                serde_json::to_value(self.issue_certificate(serde_json::from_value(normalized)?)?)?
            }
            EntityKind::Contact => {
                serde_json::to_value(self.create_contact(serde_json::from_value(normalized)?))?
            }
            EntityKind::Subscriber => {
                serde_json::to_value(self.create_subscriber(serde_json::from_value(normalized)?)?)?
            }
        };
        Ok(stored)
    }

    // ------------------------------------------------------------------
    // Creation
    // ------------------------------------------------------------------

    /// Persist a user. `username` and `email` must be unused.
    pub fn create_user(&mut self, new: NewUser) -> StoreResult<User> {
        if self.users.values().any(|u| u.username == new.username) {
            return Err(StoreError::Uniqueness {
                entity: "user",
                field: "username",
                value: new.username,
            });
        }
        if self.users.values().any(|u| u.email == new.email) {
            return Err(StoreError::Uniqueness {
                entity: "user",
                field: "email",
                value: new.email,
            });
        }
        let (id, now) = self.allocate();
        let user = User::create(new, id, now);
        Self::log_insert(EntityKind::User, &id.to_string());
        self.users.insert(id, user.clone());
        Ok(user)
    }

    pub fn create_project(&mut self, new: NewProject) -> Project {
        let (id, now) = self.allocate();
        let project = Project::create(new, id, now);
        Self::log_insert(EntityKind::Project, &id.to_string());
        self.projects.insert(id, project.clone());
        project
    }

    pub fn create_cause(&mut self, new: NewCause) -> Cause {
        let (id, now) = self.allocate();
        let cause = Cause::create(new, id, now);
        Self::log_insert(EntityKind::Cause, &id.to_string());
        self.causes.insert(id, cause.clone());
        cause
    }

    pub fn create_event(&mut self, new: NewEvent) -> Event {
        let (id, now) = self.allocate();
        let event = Event::create(new, id, now);
        Self::log_insert(EntityKind::Event, &id.to_string());
        self.events.insert(id, event.clone());
        event
    }

    pub fn create_gallery_item(&mut self, new: NewGalleryItem) -> GalleryItem {
        let (id, now) = self.allocate();
        let item = GalleryItem::create(new, id, now);
        Self::log_insert(EntityKind::GalleryItem, &id.to_string());
        self.gallery_items.insert(id, item.clone());
        item
    }

    pub fn create_blog_post(&mut self, new: NewBlogPost) -> BlogPost {
        let (id, now) = self.allocate();
        let post = BlogPost::create(new, id, now);
        Self::log_insert(EntityKind::BlogPost, &id.to_string());
        self.blog_posts.insert(id, post.clone());
        post
    }

    pub fn create_testimonial(&mut self, new: NewTestimonial) -> Testimonial {
        let (id, now) = self.allocate();
        let testimonial = Testimonial::create(new, id, now);
        Self::log_insert(EntityKind::Testimonial, &id.to_string());
        self.testimonials.insert(id, testimonial.clone());
        testimonial
    }

    pub fn create_partner(&mut self, new: NewPartner) -> Partner {
        let (id, now) = self.allocate();
        let partner = Partner::create(new, id, now);
        Self::log_insert(EntityKind::Partner, &id.to_string());
        self.partners.insert(id, partner.clone());
        partner
    }

    /// Persist a volunteer application. A supplied `userId` must resolve.
    pub fn create_volunteer(&mut self, new: NewVolunteer) -> StoreResult<Volunteer> {
        if let Some(user_id) = new.user_id {
            self.require_user("userId", user_id)?;
        }
        let (id, now) = self.allocate();
        let volunteer = Volunteer::create(new, id, now);
        Self::log_insert(EntityKind::Volunteer, &id.to_string());
        self.volunteers.insert(id, volunteer.clone());
        Ok(volunteer)
    }

    /// Persist a donation. Supplied `causeId`/`userId` must resolve.
    pub fn create_donation(&mut self, new: NewDonation) -> StoreResult<Donation> {
        if let Some(cause_id) = new.cause_id {
            if !self.causes.contains_key(&cause_id) {
                return Err(StoreError::Referential {
                    field: "causeId",
                    target: "cause",
                    id: cause_id,
                });
            }
        }
        if let Some(user_id) = new.user_id {
            self.require_user("userId", user_id)?;
        }
        let (id, now) = self.allocate();
        let donation = Donation::create(new, id, now);
        Self::log_insert(EntityKind::Donation, &id.to_string());
        self.donations.insert(id, donation.clone());
        Ok(donation)
    }

    /// Register a volunteer for an event. The pair is the identity, so a
    /// second registration for the same pair is a uniqueness violation.
    pub fn register_volunteer(&mut self, new: NewVolunteerEvent) -> StoreResult<VolunteerEvent> {
        self.require_volunteer("volunteerId", new.volunteer_id)?;
        self.require_event("eventId", new.event_id)?;
        let key = (new.volunteer_id, new.event_id);
        if self.registrations.contains_key(&key) {
            return Err(StoreError::Uniqueness {
                entity: "volunteer_event",
                field: "volunteerId+eventId",
                value: format!("{}+{}", key.0, key.1),
            });
        }
        let (_, now) = self.allocate();
        let registration = VolunteerEvent::create(new, now);
        Self::log_insert(
            EntityKind::VolunteerEvent,
            &format!("{}+{}", key.0, key.1),
        );
        self.registrations.insert(key, registration.clone());
        Ok(registration)
    }

    /// Issue a certificate for a (volunteer, event) pair. At most one
    /// certificate may exist per pair; the matching registration, if any,
    /// gets its `certificateId` linked.
    pub fn issue_certificate(&mut self, new: NewCertificate) -> StoreResult<Certificate> {
        self.require_volunteer("volunteerId", new.volunteer_id)?;
        self.require_event("eventId", new.event_id)?;
        if self
            .certificates
            .values()
            .any(|c| c.volunteer_id == new.volunteer_id && c.event_id == new.event_id)
        {
            return Err(StoreError::DuplicateCertificate {
                volunteer_id: new.volunteer_id,
                event_id: new.event_id,
            });
        }
        let (id, now) = self.allocate();
        let certificate = Certificate::create(new, id, now);
        if let Some(registration) = self
            .registrations
            .get_mut(&(certificate.volunteer_id, certificate.event_id))
        {
            registration.certificate_id = Some(id);
        }
        observability::log_event_with_fields(
            LogEvent::CertificateIssued,
            &[
                ("id", &id.to_string()),
                ("volunteerId", &certificate.volunteer_id.to_string()),
                ("eventId", &certificate.event_id.to_string()),
            ],
        );
        self.certificates.insert(id, certificate.clone());
        Ok(certificate)
    }

    pub fn create_contact(&mut self, new: NewContact) -> Contact {
        let (id, now) = self.allocate();
        let contact = Contact::create(new, id, now);
        Self::log_insert(EntityKind::Contact, &id.to_string());
        self.contacts.insert(id, contact.clone());
        contact
    }

    /// Persist a subscriber. `email` must be unused.
    pub fn create_subscriber(&mut self, new: NewSubscriber) -> StoreResult<Subscriber> {
        if self.subscribers.values().any(|s| s.email == new.email) {
            return Err(StoreError::Uniqueness {
                entity: "subscriber",
                field: "email",
                value: new.email,
            });
        }
        let (id, now) = self.allocate();
        let subscriber = Subscriber::create(new, id, now);
        Self::log_insert(EntityKind::Subscriber, &id.to_string());
        self.subscribers.insert(id, subscriber.clone());
        Ok(subscriber)
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Move a volunteer application along a sanctioned edge. Approval stamps
    /// `approvedDate`.
    pub fn set_volunteer_status(
        &mut self,
        id: Uuid,
        to: VolunteerStatus,
    ) -> StoreResult<Volunteer> {
        let volunteer = self.volunteers.get_mut(&id).ok_or(StoreError::NotFound {
            entity: "volunteer",
            id: id.to_string(),
        })?;
        volunteer.status = advance(volunteer.status, to)?;
        if to == VolunteerStatus::Approved {
            volunteer.approved_date = Some(Utc::now());
        }
        let updated = volunteer.clone();
        Self::log_advance(EntityKind::Volunteer, &id.to_string(), to.as_str());
        Ok(updated)
    }

    /// Settle a donation. Completing a donation that references a cause
    /// credits the cause's `raised` total in the same operation, so the
    /// increment cannot be lost between the two writes.
    pub fn set_donation_status(&mut self, id: Uuid, to: DonationStatus) -> StoreResult<Donation> {
        let donation = self.donations.get_mut(&id).ok_or(StoreError::NotFound {
            entity: "donation",
            id: id.to_string(),
        })?;
        donation.status = advance(donation.status, to)?;
        let updated = donation.clone();

        if to == DonationStatus::Completed {
            if let Some(cause_id) = updated.cause_id {
                let cause = self
                    .causes
                    .get_mut(&cause_id)
                    .ok_or(StoreError::Referential {
                        field: "causeId",
                        target: "cause",
                        id: cause_id,
                    })?;
                cause.raised += updated.amount;
                observability::log_event_with_fields(
                    LogEvent::RaisedIncremented,
                    &[
                        ("entity", "cause"),
                        ("id", &cause_id.to_string()),
                        ("amount", &updated.amount.to_string()),
                        ("raised", &cause.raised.to_string()),
                    ],
                );
            }
        }
        Self::log_advance(EntityKind::Donation, &id.to_string(), to.as_str());
        Ok(updated)
    }

    /// Move a registration one step forward (registered -> attended ->
    /// completed). Skipping or reversing steps fails.
    pub fn advance_registration(
        &mut self,
        volunteer_id: Uuid,
        event_id: Uuid,
        to: RegistrationStatus,
    ) -> StoreResult<VolunteerEvent> {
        let key = (volunteer_id, event_id);
        let registration = self.registrations.get_mut(&key).ok_or(StoreError::NotFound {
            entity: "volunteer_event",
            id: format!("{}+{}", volunteer_id, event_id),
        })?;
        registration.status = advance(registration.status, to)?;
        let updated = registration.clone();
        Self::log_advance(
            EntityKind::VolunteerEvent,
            &format!("{}+{}", volunteer_id, event_id),
            to.as_str(),
        );
        Ok(updated)
    }

    /// Mark an event completed. One-directional.
    pub fn complete_event(&mut self, id: Uuid) -> StoreResult<Event> {
        let event = self.events.get_mut(&id).ok_or(StoreError::NotFound {
            entity: "event",
            id: id.to_string(),
        })?;
        event.status = advance(event.status, EventStatus::Completed)?;
        let updated = event.clone();
        Self::log_advance(EntityKind::Event, &id.to_string(), updated.status.as_str());
        Ok(updated)
    }

    /// Credit a project's `raised` total. The increment must be strictly
    /// positive; `raised` only grows.
    pub fn increment_project_raised(&mut self, id: Uuid, amount: i64) -> StoreResult<Project> {
        if amount <= 0 {
            return Err(StoreError::NonPositiveIncrement(amount));
        }
        let project = self.projects.get_mut(&id).ok_or(StoreError::NotFound {
            entity: "project",
            id: id.to_string(),
        })?;
        project.raised += amount;
        let updated = project.clone();
        observability::log_event_with_fields(
            LogEvent::RaisedIncremented,
            &[
                ("entity", "project"),
                ("id", &id.to_string()),
                ("amount", &amount.to_string()),
                ("raised", &updated.raised.to_string()),
            ],
        );
        Ok(updated)
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    pub fn user(&self, id: Uuid) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn project(&self, id: Uuid) -> Option<&Project> {
        self.projects.get(&id)
    }

    pub fn cause(&self, id: Uuid) -> Option<&Cause> {
        self.causes.get(&id)
    }

    pub fn event(&self, id: Uuid) -> Option<&Event> {
        self.events.get(&id)
    }

    pub fn gallery_item(&self, id: Uuid) -> Option<&GalleryItem> {
        self.gallery_items.get(&id)
    }

    pub fn blog_post(&self, id: Uuid) -> Option<&BlogPost> {
        self.blog_posts.get(&id)
    }

    pub fn testimonial(&self, id: Uuid) -> Option<&Testimonial> {
        self.testimonials.get(&id)
    }

    pub fn partner(&self, id: Uuid) -> Option<&Partner> {
        self.partners.get(&id)
    }

    pub fn volunteer(&self, id: Uuid) -> Option<&Volunteer> {
        self.volunteers.get(&id)
    }

    pub fn donation(&self, id: Uuid) -> Option<&Donation> {
        self.donations.get(&id)
    }

    pub fn registration(&self, volunteer_id: Uuid, event_id: Uuid) -> Option<&VolunteerEvent> {
        self.registrations.get(&(volunteer_id, event_id))
    }

    pub fn certificate(&self, id: Uuid) -> Option<&Certificate> {
        self.certificates.get(&id)
    }

    pub fn contact(&self, id: Uuid) -> Option<&Contact> {
        self.contacts.get(&id)
    }

    pub fn subscriber(&self, id: Uuid) -> Option<&Subscriber> {
        self.subscribers.get(&id)
    }

    pub fn causes(&self) -> impl Iterator<Item = &Cause> {
        self.causes.values()
    }

    pub fn donations(&self) -> impl Iterator<Item = &Donation> {
        self.donations.values()
    }

    pub fn volunteers(&self) -> impl Iterator<Item = &Volunteer> {
        self.volunteers.values()
    }

    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.events.values()
    }

    // ------------------------------------------------------------------
    // Referential helpers
    // ------------------------------------------------------------------

    fn require_user(&self, field: &'static str, id: Uuid) -> StoreResult<()> {
        if self.users.contains_key(&id) {
            Ok(())
        } else {
            Err(StoreError::Referential {
                field,
                target: "user",
                id,
            })
        }
    }

    fn require_volunteer(&self, field: &'static str, id: Uuid) -> StoreResult<()> {
        if self.volunteers.contains_key(&id) {
            Ok(())
        } else {
            Err(StoreError::Referential {
                field,
                target: "volunteer",
                id,
            })
        }
    }

    fn require_event(&self, field: &'static str, id: Uuid) -> StoreResult<()> {
        if self.events.contains_key(&id) {
            Ok(())
        } else {
            Err(StoreError::Referential {
                field,
                target: "event",
                id,
            })
        }
    }
}
