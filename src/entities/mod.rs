//! Typed entity records and their insert contracts.
//!
//! Every persisted entity has a full struct (server-assigned identity and
//! timestamps included) and an explicit `New*` struct listing only the fields
//! a client may supply at creation. `create` constructors apply the
//! creation-time defaults; validation never does.

mod accounts;
mod content;
mod engagement;
mod status;

pub use accounts::{Contact, NewContact, NewSubscriber, NewUser, Subscriber, User};
pub use content::{
    BlogAuthor, BlogPost, Cause, Event, GalleryItem, NewBlogPost, NewCause, NewEvent,
    NewGalleryItem, NewPartner, NewProject, NewTestimonial, Partner, Project, Testimonial,
};
pub use engagement::{
    Certificate, Donation, NewCertificate, NewDonation, NewVolunteer, NewVolunteerEvent,
    Volunteer, VolunteerEvent,
};
pub use status::{DonationStatus, EventStatus, RegistrationStatus, Role, VolunteerStatus};
