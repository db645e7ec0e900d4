//! Shared test doubles: an in-memory gateway honoring every gateway trait,
//! plus sample record builders.

use std::sync::{Arc, Mutex};

use crate::error::{status_error, Result};
use crate::interface::{AuthApi, EnrollmentApi, MediaApi, ResourceApi};
use crate::model::{
    AuthSession, Content, ContentDraft, ContentKind, ContentPatch, Course, CourseDraft,
    CoursePatch, CourseStatus, Credentials, MediaAsset, ProfilePatch, RegisterForm, Role, User,
};

const STAMP: &str = "2024-06-01T00:00:00Z";

pub(crate) fn sample_user(id: &str, role: Role) -> User {
    User {
        id: id.to_string(),
        name: "Ada Lovelace".to_string(),
        email: "a@b.com".to_string(),
        role,
        avatar: None,
        created_at: STAMP.to_string(),
        updated_at: STAMP.to_string(),
    }
}

pub(crate) fn sample_course(id: &str, category: &str) -> Course {
    Course {
        id: id.to_string(),
        title: format!("Course {id}"),
        description: "A sample course".to_string(),
        instructor: "Ada Lovelace".to_string(),
        category: category.to_string(),
        duration: "6 weeks".to_string(),
        students: 12,
        rating: 4.5,
        price: 49.0,
        image: String::new(),
        status: CourseStatus::Published,
        created_at: STAMP.to_string(),
        updated_at: STAMP.to_string(),
    }
}

pub(crate) fn sample_content(id: &str, course_id: &str, kind: ContentKind) -> Content {
    Content {
        id: id.to_string(),
        title: format!("Lesson {id}"),
        kind,
        content: "body".to_string(),
        course_id: course_id.to_string(),
        module_id: "mod-1".to_string(),
        order: 1,
        duration: Some(10),
        file_url: None,
        created_at: STAMP.to_string(),
        updated_at: STAMP.to_string(),
    }
}

#[derive(Default)]
pub(crate) struct StubState {
    pub token: Option<String>,
    pub account: Option<User>,
    pub account_password: String,
    pub issued_token: String,
    pub valid_tokens: Vec<String>,
    pub courses: Vec<Course>,
    pub contents: Vec<Content>,
    pub next_id: u32,
    pub fail_next: Option<(u16, String)>,
    pub calls: Vec<&'static str>,
}

/// In-memory stand-in for the remote API. One queued failure can be injected
/// ahead of any call; every call is recorded by name.
#[derive(Clone, Default)]
pub(crate) struct StubGateway {
    pub state: Arc<Mutex<StubState>>,
}

impl StubGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(user: User, password: &str, token: &str) -> Self {
        let stub = Self::new();
        {
            let mut state = stub.state.lock().unwrap();
            state.account = Some(user);
            state.account_password = password.to_string();
            state.issued_token = token.to_string();
            state.valid_tokens.push(token.to_string());
        }
        stub
    }

    pub fn push_course(&self, course: Course) {
        self.state.lock().unwrap().courses.push(course);
    }

    pub fn push_content(&self, content: Content) {
        self.state.lock().unwrap().contents.push(content);
    }

    pub fn fail_next(&self, status: u16, message: &str) {
        self.state.lock().unwrap().fail_next = Some((status, message.to_string()));
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.state.lock().unwrap().calls.clone()
    }

    fn note(&self, call: &'static str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        match state.fail_next.take() {
            Some((status, message)) => Err(status_error(status, Some(message))),
            None => Ok(()),
        }
    }
}

impl AuthApi for StubGateway {
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession> {
        self.note("login")?;
        let state = self.state.lock().unwrap();
        match &state.account {
            Some(user)
                if user.email == credentials.email
                    && state.account_password == credentials.password =>
            {
                Ok(AuthSession {
                    user: user.clone(),
                    token: state.issued_token.clone(),
                    refresh_token: None,
                })
            }
            _ => Err(status_error(401, Some("invalid credentials".to_string()))),
        }
    }

    async fn register(&self, form: &RegisterForm) -> Result<AuthSession> {
        self.note("register")?;
        let mut state = self.state.lock().unwrap();
        let user = User {
            id: "u-new".to_string(),
            name: form.name.clone(),
            email: form.email.clone(),
            role: Role::Student,
            avatar: None,
            created_at: STAMP.to_string(),
            updated_at: STAMP.to_string(),
        };
        state.account = Some(user.clone());
        state.account_password = form.password.clone();
        if state.issued_token.is_empty() {
            state.issued_token = "fresh-token".to_string();
        }
        let token = state.issued_token.clone();
        state.valid_tokens.push(token.clone());
        Ok(AuthSession {
            user,
            token,
            refresh_token: None,
        })
    }

    async fn logout(&self) -> Result<()> {
        self.note("logout")
    }

    async fn current_user(&self) -> Result<User> {
        self.note("current_user")?;
        let state = self.state.lock().unwrap();
        let authorized = state
            .token
            .as_ref()
            .is_some_and(|t| state.valid_tokens.contains(t));
        match (&state.account, authorized) {
            (Some(user), true) => Ok(user.clone()),
            _ => Err(status_error(401, Some("token expired".to_string()))),
        }
    }

    async fn update_profile(&self, patch: &ProfilePatch) -> Result<User> {
        self.note("update_profile")?;
        let mut state = self.state.lock().unwrap();
        let Some(user) = state.account.as_mut() else {
            return Err(status_error(401, None));
        };
        if let Some(name) = &patch.name {
            user.name = name.clone();
        }
        if let Some(email) = &patch.email {
            user.email = email.clone();
        }
        if let Some(avatar) = &patch.avatar {
            user.avatar = Some(avatar.clone());
        }
        Ok(user.clone())
    }

    async fn change_password(&self, current: &str, new: &str) -> Result<()> {
        self.note("change_password")?;
        let mut state = self.state.lock().unwrap();
        if state.account_password != current {
            return Err(status_error(403, Some("wrong password".to_string())));
        }
        state.account_password = new.to_string();
        Ok(())
    }

    fn set_token(&self, token: Option<String>) {
        self.state.lock().unwrap().token = token;
    }
}

impl ResourceApi<Course> for StubGateway {
    async fn fetch_all(&self, _parent: Option<&str>) -> Result<Vec<Course>> {
        self.note("fetch_courses")?;
        Ok(self.state.lock().unwrap().courses.clone())
    }

    async fn fetch_one(&self, id: &str) -> Result<Course> {
        self.note("fetch_course")?;
        self.state
            .lock()
            .unwrap()
            .courses
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| status_error(404, Some("course not found".to_string())))
    }

    async fn create(&self, draft: &CourseDraft) -> Result<Course> {
        self.note("create_course")?;
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let course = Course {
            id: format!("c{}", state.next_id),
            title: draft.title.clone(),
            description: draft.description.clone(),
            instructor: state
                .account
                .as_ref()
                .map(|u| u.name.clone())
                .unwrap_or_default(),
            category: draft.category.clone(),
            duration: draft.duration.clone(),
            students: 0,
            rating: 0.0,
            price: draft.price,
            image: draft.image.clone().unwrap_or_default(),
            status: CourseStatus::Draft,
            created_at: STAMP.to_string(),
            updated_at: STAMP.to_string(),
        };
        state.courses.push(course.clone());
        Ok(course)
    }

    async fn update(&self, id: &str, patch: &CoursePatch) -> Result<Course> {
        self.note("update_course")?;
        let mut state = self.state.lock().unwrap();
        let course = state
            .courses
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| status_error(404, Some("course not found".to_string())))?;
        if let Some(title) = &patch.title {
            course.title = title.clone();
        }
        if let Some(description) = &patch.description {
            course.description = description.clone();
        }
        if let Some(category) = &patch.category {
            course.category = category.clone();
        }
        if let Some(duration) = &patch.duration {
            course.duration = duration.clone();
        }
        if let Some(price) = patch.price {
            course.price = price;
        }
        if let Some(status) = patch.status {
            course.status = status;
        }
        if let Some(image) = &patch.image {
            course.image = image.clone();
        }
        Ok(course.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.note("delete_course")?;
        let mut state = self.state.lock().unwrap();
        let before = state.courses.len();
        state.courses.retain(|c| c.id != id);
        if state.courses.len() == before {
            return Err(status_error(404, Some("course not found".to_string())));
        }
        Ok(())
    }
}

impl ResourceApi<Content> for StubGateway {
    async fn fetch_all(&self, parent: Option<&str>) -> Result<Vec<Content>> {
        self.note("fetch_content")?;
        let state = self.state.lock().unwrap();
        Ok(state
            .contents
            .iter()
            .filter(|c| parent.is_none_or(|course_id| c.course_id == course_id))
            .cloned()
            .collect())
    }

    async fn fetch_one(&self, id: &str) -> Result<Content> {
        self.note("fetch_content_item")?;
        self.state
            .lock()
            .unwrap()
            .contents
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| status_error(404, Some("content not found".to_string())))
    }

    async fn create(&self, draft: &ContentDraft) -> Result<Content> {
        self.note("create_content")?;
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let content = Content {
            id: format!("m{}", state.next_id),
            title: draft.title.clone(),
            kind: draft.kind,
            content: draft.content.clone(),
            course_id: draft.course_id.clone(),
            module_id: draft.module_id.clone(),
            order: draft.order,
            duration: draft.duration,
            file_url: draft.file_url.clone(),
            created_at: STAMP.to_string(),
            updated_at: STAMP.to_string(),
        };
        state.contents.push(content.clone());
        Ok(content)
    }

    async fn update(&self, id: &str, patch: &ContentPatch) -> Result<Content> {
        self.note("update_content")?;
        let mut state = self.state.lock().unwrap();
        let content = state
            .contents
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| status_error(404, Some("content not found".to_string())))?;
        if let Some(title) = &patch.title {
            content.title = title.clone();
        }
        if let Some(kind) = patch.kind {
            content.kind = kind;
        }
        if let Some(body) = &patch.content {
            content.content = body.clone();
        }
        if let Some(order) = patch.order {
            content.order = order;
        }
        if let Some(duration) = patch.duration {
            content.duration = Some(duration);
        }
        if let Some(file_url) = &patch.file_url {
            content.file_url = Some(file_url.clone());
        }
        Ok(content.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.note("delete_content")?;
        let mut state = self.state.lock().unwrap();
        let before = state.contents.len();
        state.contents.retain(|c| c.id != id);
        if state.contents.len() == before {
            return Err(status_error(404, Some("content not found".to_string())));
        }
        Ok(())
    }
}

impl EnrollmentApi for StubGateway {
    async fn enroll(&self, course_id: &str) -> Result<String> {
        self.note("enroll")?;
        let state = self.state.lock().unwrap();
        if !state.courses.iter().any(|c| c.id == course_id) {
            return Err(status_error(404, Some("course not found".to_string())));
        }
        Ok("enrolled".to_string())
    }
}

impl MediaApi for StubGateway {
    async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        _bytes: Vec<u8>,
    ) -> Result<MediaAsset> {
        self.note("upload")?;
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        Ok(MediaAsset {
            id: format!("a{}", state.next_id),
            name: file_name.to_string(),
            kind: content_type
                .split('/')
                .next()
                .unwrap_or("file")
                .to_string(),
            url: format!("/media/{file_name}"),
            uploaded_at: STAMP.to_string(),
        })
    }
}
