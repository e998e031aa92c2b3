//! Entity kinds and declarative field definitions.
//!
//! Field semantics supported by the insert contracts:
//! - text: trimmed UTF-8 string with a minimum length
//! - email: RFC-shape address, normalized to lowercase
//! - positive: 64-bit integer strictly greater than zero
//! - timestamp: RFC 3339 instant
//! - enumerated: string drawn from a closed set
//! - string list: ordered list of non-empty strings
//! - reference: UUID naming a row of another entity kind
//! - object: nested value with its own field schema

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The fourteen persisted entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    User,
    Project,
    Cause,
    Event,
    GalleryItem,
    BlogPost,
    Testimonial,
    Partner,
    Volunteer,
    Donation,
    VolunteerEvent,
    Certificate,
    Contact,
    Subscriber,
}

impl EntityKind {
    /// Every kind, in declaration order. Drives CLI listings and dispatch.
    pub const ALL: [EntityKind; 14] = [
        EntityKind::User,
        EntityKind::Project,
        EntityKind::Cause,
        EntityKind::Event,
        EntityKind::GalleryItem,
        EntityKind::BlogPost,
        EntityKind::Testimonial,
        EntityKind::Partner,
        EntityKind::Volunteer,
        EntityKind::Donation,
        EntityKind::VolunteerEvent,
        EntityKind::Certificate,
        EntityKind::Contact,
        EntityKind::Subscriber,
    ];

    /// Returns the stable string name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Project => "project",
            EntityKind::Cause => "cause",
            EntityKind::Event => "event",
            EntityKind::GalleryItem => "gallery_item",
            EntityKind::BlogPost => "blog_post",
            EntityKind::Testimonial => "testimonial",
            EntityKind::Partner => "partner",
            EntityKind::Volunteer => "volunteer",
            EntityKind::Donation => "donation",
            EntityKind::VolunteerEvent => "volunteer_event",
            EntityKind::Certificate => "certificate",
            EntityKind::Contact => "contact",
            EntityKind::Subscriber => "subscriber",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string names no entity kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEntityKind(pub String);

impl fmt::Display for UnknownEntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown entity kind '{}'", self.0)
    }
}

impl std::error::Error for UnknownEntityKind {}

impl FromStr for EntityKind {
    type Err = UnknownEntityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownEntityKind(s.to_string()))
    }
}

/// Named field definitions, ordered by field name for deterministic walks.
pub type Fields = BTreeMap<String, FieldDef>;

/// Semantic type of a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// Trimmed string with a minimum character count after trimming.
    Text { min_len: usize },
    /// RFC-shape email address, normalized to lowercase.
    Email,
    /// 64-bit integer strictly greater than zero.
    Positive,
    /// RFC 3339 timestamp string.
    Timestamp,
    /// String drawn from a closed set of allowed values.
    Enumerated { allowed: &'static [&'static str] },
    /// Ordered list of non-empty strings with a minimum item count.
    StringList { min_items: usize },
    /// UUID string that must resolve to a row of the target kind.
    Reference { entity: EntityKind },
    /// Nested object with its own field schema.
    Object { fields: Fields },
}

impl FieldType {
    /// Returns the type name for error messages and CLI listings.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Text { .. } => "text",
            FieldType::Email => "email",
            FieldType::Positive => "positive integer",
            FieldType::Timestamp => "timestamp",
            FieldType::Enumerated { .. } => "enumeration",
            FieldType::StringList { .. } => "string list",
            FieldType::Reference { .. } => "reference",
            FieldType::Object { .. } => "object",
        }
    }
}

/// Field definition: semantic type plus presence requirement.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// Field semantic type
    pub field_type: FieldType,
    /// Whether the field must be present on insert
    pub required: bool,
}

impl FieldDef {
    /// Create a required text field with the given minimum length
    pub fn required_text(min_len: usize) -> Self {
        Self {
            field_type: FieldType::Text { min_len },
            required: true,
        }
    }

    /// Create an optional text field with the given minimum length
    pub fn optional_text(min_len: usize) -> Self {
        Self {
            field_type: FieldType::Text { min_len },
            required: false,
        }
    }

    /// Create a required email field
    pub fn required_email() -> Self {
        Self {
            field_type: FieldType::Email,
            required: true,
        }
    }

    /// Create a required positive-integer field
    pub fn required_positive() -> Self {
        Self {
            field_type: FieldType::Positive,
            required: true,
        }
    }

    /// Create a required timestamp field
    pub fn required_timestamp() -> Self {
        Self {
            field_type: FieldType::Timestamp,
            required: true,
        }
    }

    /// Create an optional enumerated field over a closed set
    pub fn optional_enumerated(allowed: &'static [&'static str]) -> Self {
        Self {
            field_type: FieldType::Enumerated { allowed },
            required: false,
        }
    }

    /// Create a required string-list field with a minimum item count
    pub fn required_list(min_items: usize) -> Self {
        Self {
            field_type: FieldType::StringList { min_items },
            required: true,
        }
    }

    /// Create a required reference field to the given kind
    pub fn required_reference(entity: EntityKind) -> Self {
        Self {
            field_type: FieldType::Reference { entity },
            required: true,
        }
    }

    /// Create an optional reference field to the given kind
    pub fn optional_reference(entity: EntityKind) -> Self {
        Self {
            field_type: FieldType::Reference { entity },
            required: false,
        }
    }

    /// Create a required object field with a nested schema
    pub fn required_object(fields: Fields) -> Self {
        Self {
            field_type: FieldType::Object { fields },
            required: true,
        }
    }
}

/// The insert contract for one entity kind: the exact set of fields a client
/// may supply at creation time. Identity, timestamps and server-defaulted
/// fields never appear here.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertSchema {
    /// The entity kind this contract belongs to
    pub kind: EntityKind,
    /// Client-suppliable fields, keyed by wire name
    pub fields: Fields,
}

impl InsertSchema {
    /// Create a new insert schema
    pub fn new(kind: EntityKind, fields: Fields) -> Self {
        Self { kind, fields }
    }

    /// Returns the names of all required fields, in deterministic order.
    pub fn required_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(_, def)| def.required)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_round_trip() {
        for kind in EntityKind::ALL {
            let parsed: EntityKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result: Result<EntityKind, _> = "payment".parse();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("payment"));
    }

    #[test]
    fn test_all_lists_fourteen_kinds() {
        assert_eq!(EntityKind::ALL.len(), 14);
    }

    #[test]
    fn test_field_type_names() {
        assert_eq!(FieldType::Email.type_name(), "email");
        assert_eq!(FieldType::Text { min_len: 3 }.type_name(), "text");
        assert_eq!(
            FieldType::Reference {
                entity: EntityKind::Cause
            }
            .type_name(),
            "reference"
        );
    }

    #[test]
    fn test_required_fields_ordered() {
        let mut fields = Fields::new();
        fields.insert("zeta".into(), FieldDef::required_text(1));
        fields.insert("alpha".into(), FieldDef::required_text(1));
        fields.insert("mid".into(), FieldDef::optional_text(1));

        let schema = InsertSchema::new(EntityKind::Contact, fields);
        assert_eq!(schema.required_fields(), vec!["alpha", "zeta"]);
    }
}
