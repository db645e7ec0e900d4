use serde::Serialize;

use super::structs::{ContentKind, Course, CourseStatus};
use super::{Content, RecordFilter};

/// Login form payload.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration form. The confirmation field is checked locally and never
/// leaves the client.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub duration: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CourseStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDraft {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub content: String,
    pub course_id: String,
    pub module_id: String,
    pub order: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ContentKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Catalog filter. Conditions are conjunctive; unset fields match anything.
#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    pub category: Option<String>,
    pub instructor: Option<String>,
    pub status: Option<CourseStatus>,
    pub min_rating: Option<f32>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl RecordFilter<Course> for CourseFilter {
    fn matches(&self, course: &Course) -> bool {
        if let Some(ref category) = self.category {
            if course.category != *category {
                return false;
            }
        }
        if let Some(ref instructor) = self.instructor {
            if course.instructor != *instructor {
                return false;
            }
        }
        if let Some(status) = self.status {
            if course.status != status {
                return false;
            }
        }
        if let Some(min_rating) = self.min_rating {
            if course.rating < min_rating {
                return false;
            }
        }
        if let Some(min_price) = self.min_price {
            if course.price < min_price {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if course.price > max_price {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContentFilter {
    pub kind: Option<ContentKind>,
    pub course_id: Option<String>,
    pub module_id: Option<String>,
}

impl RecordFilter<Content> for ContentFilter {
    fn matches(&self, content: &Content) -> bool {
        if let Some(kind) = self.kind {
            if content.kind != kind {
                return false;
            }
        }
        if let Some(ref course_id) = self.course_id {
            if content.course_id != *course_id {
                return false;
            }
        }
        if let Some(ref module_id) = self.module_id {
            if content.module_id != *module_id {
                return false;
            }
        }
        true
    }
}
