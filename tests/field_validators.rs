//! Field Validator Tests
//!
//! Boundary cases for the reusable field validators:
//! - email shape
//! - minimum text lengths (Contact.subject >= 3, Contact.message >= 10)
//! - positive amounts (Donation.amount > 0)
//! - normalization idempotence

use serde_json::{json, Value};

use uplift::schema::{validate_insert, EntityKind};

fn contact_with(subject: &str, message: &str) -> Value {
    json!({
        "name": "Ravi",
        "email": "ravi@example.org",
        "subject": subject,
        "message": message
    })
}

fn donation_with_amount(amount: i64) -> Value {
    json!({
        "name": "Asha",
        "email": "asha@example.org",
        "phone": "9876543210",
        "amount": amount,
        "paymentId": "pay_1"
    })
}

// =============================================================================
// Email
// =============================================================================

#[test]
fn test_email_rejects_malformed() {
    let errors = validate_insert(EntityKind::Subscriber, &json!({ "email": "not-an-email" }))
        .unwrap_err();
    assert!(errors.names_field("email"));
    let failure = &errors.failures()[0];
    assert!(failure.expected.contains("email"));
}

#[test]
fn test_email_accepts_minimal_shape() {
    assert!(validate_insert(EntityKind::Subscriber, &json!({ "email": "a@b.co" })).is_ok());
}

// =============================================================================
// Text Lengths
// =============================================================================

#[test]
fn test_subject_below_minimum_fails() {
    let errors = validate_insert(
        EntityKind::Contact,
        &contact_with("hi", "A long enough message"),
    )
    .unwrap_err();
    assert!(errors.names_field("subject"));
}

#[test]
fn test_subject_at_minimum_passes() {
    assert!(validate_insert(
        EntityKind::Contact,
        &contact_with("hey", "A long enough message"),
    )
    .is_ok());
}

#[test]
fn test_message_below_minimum_fails() {
    // Nine characters.
    let errors =
        validate_insert(EntityKind::Contact, &contact_with("Help", "123456789")).unwrap_err();
    assert!(errors.names_field("message"));
}

#[test]
fn test_message_at_minimum_passes() {
    // Ten characters.
    assert!(validate_insert(EntityKind::Contact, &contact_with("Help", "1234567890")).is_ok());
}

#[test]
fn test_length_counted_after_trimming() {
    // Padded to twelve characters but only nine after trimming.
    let errors =
        validate_insert(EntityKind::Contact, &contact_with("Help", "  123456789 ")).unwrap_err();
    assert!(errors.names_field("message"));
}

// =============================================================================
// Amounts
// =============================================================================

#[test]
fn test_amount_zero_fails() {
    let errors = validate_insert(EntityKind::Donation, &donation_with_amount(0)).unwrap_err();
    assert!(errors.names_field("amount"));
}

#[test]
fn test_amount_negative_fails() {
    let errors = validate_insert(EntityKind::Donation, &donation_with_amount(-500)).unwrap_err();
    assert!(errors.names_field("amount"));
}

#[test]
fn test_amount_one_passes() {
    assert!(validate_insert(EntityKind::Donation, &donation_with_amount(1)).is_ok());
}

// =============================================================================
// Idempotence
// =============================================================================

/// Re-validating a normalized value yields the same value with no new errors.
#[test]
fn test_validation_idempotent_over_normalized_output() {
    let candidate = json!({
        "name": "  Ravi  ",
        "email": "Ravi@Example.ORG",
        "phone": " 9876543210 ",
        "subject": " Partnership ",
        "message": "  We would like to help.  "
    });
    let once = validate_insert(EntityKind::Contact, &candidate).unwrap();
    let twice = validate_insert(EntityKind::Contact, &once).unwrap();
    assert_eq!(once, twice);

    // Normalization actually happened.
    assert_eq!(once["email"], json!("ravi@example.org"));
    assert_eq!(once["subject"], json!("Partnership"));
}
