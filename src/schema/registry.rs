//! Insert-contract registry for the fourteen entity kinds.
//!
//! One source of truth: every contract lists exactly the fields a client may
//! supply at creation time. Server-assigned fields (id, createdAt), defaulted
//! fields (status, raised, issueDate, approvedDate) and server-computed
//! linkage (certificateId) are deliberately absent; the persistence layer
//! assigns them at creation.

use std::sync::OnceLock;

use super::types::{EntityKind, FieldDef, Fields, InsertSchema};

/// Allowed values for User.role. Absent on insert means "donor".
pub const USER_ROLES: &[&str] = &["admin", "donor", "volunteer"];

static REGISTRY: OnceLock<Vec<InsertSchema>> = OnceLock::new();

/// Returns the insert contract for the given entity kind.
pub fn insert_schema(kind: EntityKind) -> &'static InsertSchema {
    let registry = REGISTRY.get_or_init(build_registry);
    // Built from EntityKind::ALL in declaration order, so the discriminant
    // doubles as the index.
    let schema = &registry[kind as usize];
    debug_assert_eq!(schema.kind, kind);
    schema
}

fn build_registry() -> Vec<InsertSchema> {
    EntityKind::ALL
        .iter()
        .map(|&kind| InsertSchema::new(kind, fields_for(kind)))
        .collect()
}

fn fields(pairs: Vec<(&str, FieldDef)>) -> Fields {
    pairs
        .into_iter()
        .map(|(name, def)| (name.to_string(), def))
        .collect()
}

fn fields_for(kind: EntityKind) -> Fields {
    match kind {
        EntityKind::User => fields(vec![
            ("username", FieldDef::required_text(3)),
            ("password", FieldDef::required_text(8)),
            ("name", FieldDef::required_text(1)),
            ("email", FieldDef::required_email()),
            ("role", FieldDef::optional_enumerated(USER_ROLES)),
        ]),
        EntityKind::Project => fields(vec![
            ("title", FieldDef::required_text(1)),
            ("description", FieldDef::required_text(1)),
            ("category", FieldDef::required_text(1)),
            ("image", FieldDef::required_text(1)),
            ("goal", FieldDef::required_positive()),
        ]),
        EntityKind::Cause => fields(vec![
            ("title", FieldDef::required_text(1)),
            ("description", FieldDef::required_text(1)),
            ("image", FieldDef::required_text(1)),
            ("goal", FieldDef::required_positive()),
        ]),
        EntityKind::Event => fields(vec![
            ("title", FieldDef::required_text(1)),
            ("description", FieldDef::required_text(1)),
            ("location", FieldDef::required_text(1)),
            ("date", FieldDef::required_timestamp()),
            ("image", FieldDef::required_text(1)),
        ]),
        EntityKind::GalleryItem => fields(vec![
            ("image", FieldDef::required_text(1)),
            ("caption", FieldDef::required_text(1)),
            ("category", FieldDef::required_text(1)),
        ]),
        EntityKind::BlogPost => fields(vec![
            ("title", FieldDef::required_text(1)),
            ("excerpt", FieldDef::required_text(1)),
            ("content", FieldDef::required_text(1)),
            ("image", FieldDef::required_text(1)),
            ("category", FieldDef::required_text(1)),
            ("author", FieldDef::required_object(author_fields())),
            ("date", FieldDef::required_timestamp()),
            ("audio", FieldDef::optional_text(1)),
        ]),
        EntityKind::Testimonial => fields(vec![
            ("name", FieldDef::required_text(1)),
            ("title", FieldDef::required_text(1)),
            ("location", FieldDef::required_text(1)),
            ("quote", FieldDef::required_text(1)),
            ("avatar", FieldDef::required_text(1)),
        ]),
        EntityKind::Partner => fields(vec![
            ("name", FieldDef::required_text(1)),
            ("logo", FieldDef::required_text(1)),
            ("url", FieldDef::required_text(1)),
        ]),
        EntityKind::Volunteer => fields(vec![
            ("name", FieldDef::required_text(1)),
            ("email", FieldDef::required_email()),
            ("phone", FieldDef::required_text(7)),
            ("age", FieldDef::required_positive()),
            ("city", FieldDef::required_text(1)),
            ("interests", FieldDef::required_list(1)),
            ("availability", FieldDef::required_text(1)),
            ("experience", FieldDef::optional_text(1)),
            ("userId", FieldDef::optional_reference(EntityKind::User)),
        ]),
        EntityKind::Donation => fields(vec![
            ("name", FieldDef::required_text(1)),
            ("email", FieldDef::required_email()),
            ("phone", FieldDef::required_text(7)),
            ("amount", FieldDef::required_positive()),
            ("paymentId", FieldDef::required_text(1)),
            ("causeId", FieldDef::optional_reference(EntityKind::Cause)),
            ("userId", FieldDef::optional_reference(EntityKind::User)),
            ("message", FieldDef::optional_text(1)),
            ("receipt", FieldDef::optional_text(1)),
        ]),
        EntityKind::VolunteerEvent => fields(vec![
            (
                "volunteerId",
                FieldDef::required_reference(EntityKind::Volunteer),
            ),
            ("eventId", FieldDef::required_reference(EntityKind::Event)),
        ]),
        EntityKind::Certificate => fields(vec![
            (
                "volunteerId",
                FieldDef::required_reference(EntityKind::Volunteer),
            ),
            ("eventId", FieldDef::required_reference(EntityKind::Event)),
            ("volunteerName", FieldDef::required_text(1)),
            ("eventName", FieldDef::required_text(1)),
            ("certificateUrl", FieldDef::required_text(1)),
        ]),
        EntityKind::Contact => fields(vec![
            ("name", FieldDef::required_text(1)),
            ("email", FieldDef::required_email()),
            ("phone", FieldDef::optional_text(7)),
            ("subject", FieldDef::required_text(3)),
            ("message", FieldDef::required_text(10)),
        ]),
        EntityKind::Subscriber => fields(vec![("email", FieldDef::required_email())]),
    }
}

fn author_fields() -> Fields {
    fields(vec![
        ("name", FieldDef::required_text(1)),
        ("title", FieldDef::required_text(1)),
        ("avatar", FieldDef::required_text(1)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_contract() {
        for kind in EntityKind::ALL {
            let schema = insert_schema(kind);
            assert_eq!(schema.kind, kind);
            assert!(!schema.fields.is_empty());
        }
    }

    #[test]
    fn test_no_server_assigned_fields_in_contracts() {
        for kind in EntityKind::ALL {
            let schema = insert_schema(kind);
            for name in ["id", "createdAt", "status", "raised", "issueDate", "approvedDate", "certificateId"] {
                assert!(
                    !schema.fields.contains_key(name),
                    "{} contract must not list '{}'",
                    kind,
                    name
                );
            }
        }
    }

    #[test]
    fn test_contact_lengths() {
        let schema = insert_schema(EntityKind::Contact);
        assert_eq!(
            schema.fields["subject"],
            FieldDef::required_text(3)
        );
        assert_eq!(
            schema.fields["message"],
            FieldDef::required_text(10)
        );
    }

    #[test]
    fn test_donation_optional_references() {
        let schema = insert_schema(EntityKind::Donation);
        assert!(!schema.fields["causeId"].required);
        assert!(!schema.fields["userId"].required);
        assert!(schema.fields["amount"].required);
    }

    #[test]
    fn test_subscriber_contract_is_email_only() {
        let schema = insert_schema(EntityKind::Subscriber);
        assert_eq!(schema.fields.len(), 1);
        assert!(schema.fields.contains_key("email"));
    }
}
