//! Insert Contract Tests
//!
//! For every entity kind:
//! - a well-formed candidate validates and the normalized value contains
//!   exactly the supplied contract fields, never a server-assigned one
//! - omitting any required field yields a failure naming that field

use serde_json::{json, Value};
use uuid::Uuid;

use uplift::schema::{insert_schema, validate_insert, EntityKind};

// =============================================================================
// Helper Functions
// =============================================================================

/// A well-formed candidate supplying every contract field (required and
/// optional) for the given kind.
fn full_candidate(kind: EntityKind) -> Value {
    let reference = Uuid::new_v4().to_string();
    match kind {
        EntityKind::User => json!({
            "username": "asha",
            "password": "correct horse",
            "name": "Asha",
            "email": "asha@example.org",
            "role": "volunteer"
        }),
        EntityKind::Project => json!({
            "title": "School build",
            "description": "Three classrooms",
            "category": "education",
            "image": "/img/school.jpg",
            "goal": 250000
        }),
        EntityKind::Cause => json!({
            "title": "Clean Water",
            "description": "Wells for villages",
            "image": "/img/cause.jpg",
            "goal": 100000
        }),
        EntityKind::Event => json!({
            "title": "Tree drive",
            "description": "Plant 500 trees",
            "location": "Riverside park",
            "date": "2026-09-12T09:00:00Z",
            "image": "/img/event.jpg"
        }),
        EntityKind::GalleryItem => json!({
            "image": "/img/g1.jpg",
            "caption": "Well inauguration",
            "category": "water"
        }),
        EntityKind::BlogPost => json!({
            "title": "Clean water for all",
            "excerpt": "Why wells matter",
            "content": "Long form text about wells.",
            "image": "/img/post.jpg",
            "category": "water",
            "author": { "name": "Asha", "title": "Field lead", "avatar": "/img/asha.jpg" },
            "date": "2026-08-01T10:00:00Z",
            "audio": "/audio/post.mp3"
        }),
        EntityKind::Testimonial => json!({
            "name": "Meera",
            "title": "Headmistress",
            "location": "Pune",
            "quote": "The new well changed our mornings.",
            "avatar": "/img/meera.jpg"
        }),
        EntityKind::Partner => json!({
            "name": "Acme Foundation",
            "logo": "/img/acme.svg",
            "url": "https://acme.example.org"
        }),
        EntityKind::Volunteer => json!({
            "name": "Rahul",
            "email": "rahul@example.org",
            "phone": "9876543210",
            "age": 24,
            "city": "Pune",
            "interests": ["teaching", "logistics"],
            "availability": "weekends",
            "experience": "Two years of tutoring",
            "userId": reference
        }),
        EntityKind::Donation => json!({
            "name": "Asha",
            "email": "asha@example.org",
            "phone": "9876543210",
            "amount": 500,
            "paymentId": "pay_1",
            "causeId": reference,
            "userId": Uuid::new_v4().to_string(),
            "message": "Keep it up",
            "receipt": "rcpt_1"
        }),
        EntityKind::VolunteerEvent => json!({
            "volunteerId": reference,
            "eventId": Uuid::new_v4().to_string()
        }),
        EntityKind::Certificate => json!({
            "volunteerId": reference,
            "eventId": Uuid::new_v4().to_string(),
            "volunteerName": "Rahul",
            "eventName": "Tree drive",
            "certificateUrl": "/certs/1.pdf"
        }),
        EntityKind::Contact => json!({
            "name": "Ravi",
            "email": "ravi@example.org",
            "phone": "9876543210",
            "subject": "Partnership",
            "message": "We would like to help."
        }),
        EntityKind::Subscriber => json!({ "email": "news@example.org" }),
    }
}

// =============================================================================
// Happy Path
// =============================================================================

/// Every kind's full candidate validates.
#[test]
fn test_full_candidate_passes_for_every_kind() {
    for kind in EntityKind::ALL {
        let result = validate_insert(kind, &full_candidate(kind));
        assert!(result.is_ok(), "{} candidate rejected: {:?}", kind, result);
    }
}

/// The normalized value contains exactly the contract fields supplied and no
/// server-assigned field.
#[test]
fn test_normalized_value_contains_only_contract_fields() {
    for kind in EntityKind::ALL {
        let candidate = full_candidate(kind);
        let normalized = validate_insert(kind, &candidate).unwrap();
        let obj = normalized.as_object().unwrap();
        let schema = insert_schema(kind);

        for key in obj.keys() {
            assert!(
                schema.fields.contains_key(key),
                "{} normalized value leaked field '{}'",
                kind,
                key
            );
        }
        for server_field in ["id", "createdAt", "status", "raised", "issueDate", "approvedDate"] {
            assert!(
                obj.get(server_field).is_none(),
                "{} normalized value carries server field '{}'",
                kind,
                server_field
            );
        }
        // Everything supplied survived normalization.
        assert_eq!(obj.len(), candidate.as_object().unwrap().len());
    }
}

/// Required-only candidates validate too.
#[test]
fn test_required_only_candidate_passes() {
    for kind in EntityKind::ALL {
        let schema = insert_schema(kind);
        let full = full_candidate(kind);
        let mut trimmed = serde_json::Map::new();
        for name in schema.required_fields() {
            trimmed.insert(name.to_string(), full[name].clone());
        }
        let result = validate_insert(kind, &Value::Object(trimmed));
        assert!(result.is_ok(), "{} required-only candidate rejected", kind);
    }
}

// =============================================================================
// Missing Required Fields
// =============================================================================

/// Omitting any single required field yields a failure naming that field.
#[test]
fn test_missing_required_field_is_named() {
    for kind in EntityKind::ALL {
        let schema = insert_schema(kind);
        for required in schema.required_fields() {
            let mut candidate = full_candidate(kind);
            candidate.as_object_mut().unwrap().remove(required);

            let errors = validate_insert(kind, &candidate)
                .expect_err(&format!("{} without '{}' must fail", kind, required));
            assert!(
                errors.names_field(required),
                "{} without '{}' did not name it: {}",
                kind,
                required,
                errors
            );
        }
    }
}

/// An empty candidate reports every required field at once.
#[test]
fn test_empty_candidate_reports_all_required_fields() {
    for kind in EntityKind::ALL {
        let errors = validate_insert(kind, &json!({})).unwrap_err();
        for required in insert_schema(kind).required_fields() {
            assert!(
                errors.names_field(required),
                "{} empty candidate missing report for '{}'",
                kind,
                required
            );
        }
    }
}
