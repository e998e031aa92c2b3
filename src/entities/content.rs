//! Public-site content entities: projects, causes, events, gallery, blog,
//! testimonials and partners.
//!
//! Monetary amounts (`goal`, `raised`) are 64-bit integers in the smallest
//! currency unit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::status::EventStatus;

/// A fundraising project. `raised` starts at zero and only grows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub image: String,
    pub goal: i64,
    pub raised: i64,
    pub created_at: DateTime<Utc>,
}

/// Client-suppliable fields for creating a [`Project`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub category: String,
    pub image: String,
    pub goal: i64,
}

impl Project {
    pub fn create(new: NewProject, id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            category: new.category,
            image: new.image,
            goal: new.goal,
            raised: 0,
            created_at: now,
        }
    }
}

/// A donation cause. Donations may reference a cause; completed donations
/// increment `raised`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cause {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: String,
    pub goal: i64,
    pub raised: i64,
    pub created_at: DateTime<Utc>,
}

/// Client-suppliable fields for creating a [`Cause`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCause {
    pub title: String,
    pub description: String,
    pub image: String,
    pub goal: i64,
}

impl Cause {
    pub fn create(new: NewCause, id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            image: new.image,
            goal: new.goal,
            raised: 0,
            created_at: now,
        }
    }
}

/// A volunteer event. Starts `upcoming`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: DateTime<Utc>,
    pub image: String,
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
}

/// Client-suppliable fields for creating an [`Event`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: DateTime<Utc>,
    pub image: String,
}

impl Event {
    pub fn create(new: NewEvent, id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            location: new.location,
            date: new.date,
            image: new.image,
            status: EventStatus::Upcoming,
            created_at: now,
        }
    }
}

/// A gallery photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: Uuid,
    pub image: String,
    pub caption: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// Client-suppliable fields for creating a [`GalleryItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGalleryItem {
    pub image: String,
    pub caption: String,
    pub category: String,
}

impl GalleryItem {
    pub fn create(new: NewGalleryItem, id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id,
            image: new.image,
            caption: new.caption,
            category: new.category,
            created_at: now,
        }
    }
}

/// Byline of a blog post: a structured value, not a user reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogAuthor {
    pub name: String,
    pub title: String,
    pub avatar: String,
}

/// A blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub category: String,
    pub author: BlogAuthor,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Client-suppliable fields for creating a [`BlogPost`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogPost {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub category: String,
    pub author: BlogAuthor,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

impl BlogPost {
    pub fn create(new: NewBlogPost, id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new.title,
            excerpt: new.excerpt,
            content: new.content,
            image: new.image,
            category: new.category,
            author: new.author,
            date: new.date,
            audio: new.audio,
            created_at: now,
        }
    }
}

/// A testimonial quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub location: String,
    pub quote: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

/// Client-suppliable fields for creating a [`Testimonial`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestimonial {
    pub name: String,
    pub title: String,
    pub location: String,
    pub quote: String,
    pub avatar: String,
}

impl Testimonial {
    pub fn create(new: NewTestimonial, id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            title: new.title,
            location: new.location,
            quote: new.quote,
            avatar: new.avatar,
            created_at: now,
        }
    }
}

/// A partner organisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: Uuid,
    pub name: String,
    pub logo: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// Client-suppliable fields for creating a [`Partner`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPartner {
    pub name: String,
    pub logo: String,
    pub url: String,
}

impl Partner {
    pub fn create(new: NewPartner, id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            logo: new.logo,
            url: new.url,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_raised_starts_at_zero() {
        let project = Project::create(
            NewProject {
                title: "School build".into(),
                description: "Three classrooms".into(),
                category: "education".into(),
                image: "/img/school.jpg".into(),
                goal: 250_000,
            },
            Uuid::new_v4(),
            Utc::now(),
        );
        assert_eq!(project.raised, 0);
        assert_eq!(project.goal, 250_000);
    }

    #[test]
    fn test_event_starts_upcoming() {
        let event = Event::create(
            NewEvent {
                title: "Tree drive".into(),
                description: "Plant 500 trees".into(),
                location: "Riverside park".into(),
                date: Utc::now(),
                image: "/img/event.jpg".into(),
            },
            Uuid::new_v4(),
            Utc::now(),
        );
        assert_eq!(event.status, EventStatus::Upcoming);
    }

    #[test]
    fn test_blog_post_author_is_structured() {
        let post = BlogPost::create(
            NewBlogPost {
                title: "Clean water for all".into(),
                excerpt: "Why wells matter".into(),
                content: "Long form".into(),
                image: "/img/post.jpg".into(),
                category: "water".into(),
                author: BlogAuthor {
                    name: "Asha".into(),
                    title: "Field lead".into(),
                    avatar: "/img/asha.jpg".into(),
                },
                date: Utc::now(),
                audio: None,
            },
            Uuid::new_v4(),
            Utc::now(),
        );
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["author"]["name"], serde_json::json!("Asha"));
        assert!(value.get("audio").is_none());
    }
}
