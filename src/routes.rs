//! Route guard - stateless per-navigation authorization
//!
//! Each route declares its access requirement; `evaluate` is a pure function
//! of the current session and that declaration, re-run by the embedder on
//! every navigation and session change. Authorization failures redirect
//! instead of rendering a message.

use crate::model::Role;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    /// Authenticated with the admin role.
    Admin,
}

/// The canonical page set of the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    AdminDashboard,
    CourseDashboard,
    CourseCatalog,
    CourseDetail { id: String },
    CoursePlayer { id: String },
    ContentManager,
    MediaLibrary,
    Profile,
    Settings,
    NotFound,
}

impl Route {
    /// Declared access requirement; the guard is its sole consumer.
    pub fn access(&self) -> Access {
        match self {
            Route::Login | Route::Register | Route::NotFound => Access::Public,
            Route::AdminDashboard | Route::ContentManager | Route::MediaLibrary => Access::Admin,
            Route::Dashboard
            | Route::CourseDashboard
            | Route::CourseCatalog
            | Route::CourseDetail { .. }
            | Route::CoursePlayer { .. }
            | Route::Profile
            | Route::Settings => Access::Authenticated,
        }
    }

    /// Navigation path for the embedding router.
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::AdminDashboard => "/dashboard/admin".to_string(),
            Route::CourseDashboard => "/dashboard/courses".to_string(),
            Route::CourseCatalog => "/courses".to_string(),
            Route::CourseDetail { id } => format!("/courses/{id}"),
            Route::CoursePlayer { id } => format!("/courses/{id}/player"),
            Route::ContentManager => "/cms/content".to_string(),
            Route::MediaLibrary => "/cms/media".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Auth screens bounce already-signed-in users back to the dashboard.
    fn is_auth_screen(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session still resolving; render a neutral loading view, navigate
    /// nowhere.
    Unknown,
    Allowed,
    /// Redirect without rendering the requested view.
    Denied { redirect: Route },
}

pub fn evaluate(session: &Session, route: &Route) -> RouteDecision {
    match session {
        Session::Authenticating => RouteDecision::Unknown,
        Session::Authenticated { user, .. } => {
            if route.is_auth_screen() {
                return RouteDecision::Denied {
                    redirect: Route::Dashboard,
                };
            }
            if route.access() == Access::Admin && user.role != Role::Admin {
                // role mismatch falls back to the non-admin home
                return RouteDecision::Denied {
                    redirect: Route::Dashboard,
                };
            }
            RouteDecision::Allowed
        }
        Session::Anonymous | Session::Failed { .. } => match route.access() {
            Access::Public => RouteDecision::Allowed,
            Access::Authenticated | Access::Admin => RouteDecision::Denied {
                redirect: Route::Login,
            },
        },
    }
}
