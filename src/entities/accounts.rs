//! Account-side entities: users, contact messages, newsletter subscribers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::status::Role;

/// A site account. `username` and `email` are unique across users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// Stored as supplied; hashing belongs to the out-of-scope auth surface.
    pub password: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Client-suppliable fields for creating a [`User`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl User {
    /// Materialize a user from its insert value, applying creation defaults.
    pub fn create(new: NewUser, id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id,
            username: new.username,
            password: new.password,
            name: new.name,
            email: new.email,
            role: new.role.unwrap_or_default(),
            created_at: now,
        }
    }
}

/// A message sent through the contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Client-suppliable fields for creating a [`Contact`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl Contact {
    pub fn create(new: NewContact, id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            subject: new.subject,
            message: new.message,
            created_at: now,
        }
    }
}

/// A newsletter subscriber. `email` is unique across subscribers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Client-suppliable fields for creating a [`Subscriber`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscriber {
    pub email: String,
}

impl Subscriber {
    pub fn create(new: NewSubscriber, id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id,
            email: new.email,
            created_at: now,
        }
    }
}
