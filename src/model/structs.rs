use serde::{Deserialize, Serialize};

use super::{dtos, Record};

// Records arriving from the gateway reject unknown shapes outright; the
// server contract is exhaustive. Timestamps stay opaque strings as served.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Instructor,
    Admin,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub avatar: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    Draft,
    Published,
    Archived,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub category: String,
    pub duration: String,
    pub students: u32,
    pub rating: f32,
    pub price: f64,
    pub image: String,
    pub status: CourseStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl Record for Course {
    type Draft = dtos::CourseDraft;
    type Patch = dtos::CoursePatch;
    type Filter = dtos::CourseFilter;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Video,
    Pdf,
    Quiz,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Content {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub content: String,
    pub course_id: String,
    pub module_id: String,
    pub order: u32,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub file_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Record for Content {
    type Draft = dtos::ContentDraft;
    type Patch = dtos::ContentPatch;
    type Filter = dtos::ContentFilter;

    fn id(&self) -> &str {
        &self.id
    }
}

/// A file accepted by the media upload endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MediaAsset {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub uploaded_at: String,
}

/// Login/register response. The refresh token is part of the wire contract
/// but is never persisted; the single durable key is the session token.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// `{ message | error }` envelope the server wraps failures in. Lenient on
/// purpose: error bodies from proxies may carry anything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiMessage {
    pub fn into_text(self) -> Option<String> {
        self.message.or(self.error)
    }
}
