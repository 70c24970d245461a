use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    auth::require_login_or_redirect, error_notice, http, view, Client, Error, MsgResp, Navigator,
    Page, Response, Result, Storage, Transport, COURSES_PATH,
};

/// Shown when the course list response can't be understood
pub const PROCESSING_ERROR: &str = "An unexpected error occurred while processing the response.";

/// Shown when the course list couldn't be requested at all
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

/// A course offering, as listed by the backend and as sent when creating one
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Assigned by the backend. Never sent on creation.
    #[serde(default, skip_serializing)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub instructor: String,
    /// Length of the course, in hours
    pub duration: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment_limit: Option<i64>,
}

/// What came back from asking for the course list
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    /// No token was stored, so nothing was sent
    NoSession,
    Courses(Vec<Course>),
    /// The backend no longer accepts our token
    Unauthorized,
    /// The backend refused, saying why
    Backend { status: u16, message: String },
    /// The body wasn't what we expected. Holds the raw text.
    Malformed(String),
    /// No response at all
    Unreachable(String),
}

impl Listing {
    /// Decode a course list response in one step.
    ///
    /// A 401 means re-authenticate whatever the body says.
    pub fn decode(resp: &Response) -> Listing {
        if resp.status == 401 {
            return Listing::Unauthorized;
        }

        if resp.is_success() {
            return match serde_json::from_str::<Vec<Course>>(&resp.body) {
                Ok(courses) => Listing::Courses(courses),
                Err(_) => Listing::Malformed(resp.body.clone()),
            };
        }

        match serde_json::from_str::<Value>(&resp.body) {
            Ok(body) => Listing::Backend {
                status: resp.status,
                message: http::backend_message(&body),
            },
            Err(_) => Listing::Malformed(resp.body.clone()),
        }
    }
}

impl<T: Transport, S: Storage> Client<T, S> {
    /// Add a course. The token is attached if we have one; the backend decides whether that's enough.
    pub fn create_course(&self, ui: &mut impl Navigator, course: &Course) -> Result<()> {
        match self
            .post(COURSES_PATH, course, true)
            .and_then(|resp| Self::decode::<MsgResp>(&resp))
        {
            Ok(resp) => {
                info!("created course {:?}", course.title);
                ui.alert(&resp.into_notice());
                Ok(())
            }
            Err(e) => {
                warn!("creating course {:?} failed: {}", course.title, e);
                let e = Error::from(e);
                ui.alert(&error_notice(&e));
                Err(e)
            }
        }
    }

    /// Fetch the course list and render it into the page.
    ///
    /// Every outcome is dealt with here, by rendering, redirecting to login, or
    /// showing a notice. The returned [`Listing`] is informational.
    pub fn fetch_courses<U: Navigator + Page>(&self, ui: &mut U) -> Listing {
        if self.token().is_none() {
            require_login_or_redirect(ui);
            return Listing::NoSession;
        }

        let listing = match self.get(COURSES_PATH, true) {
            Ok(resp) => Listing::decode(&resp),
            Err(e) => Listing::Unreachable(e.to_string()),
        };

        match &listing {
            Listing::NoSession => (),
            Listing::Courses(courses) => view::render_courses(ui, courses),
            Listing::Unauthorized => {
                warn!("course list request was unauthorized");
                require_login_or_redirect(ui);
            }
            Listing::Backend { status, message } => {
                warn!("couldn't fetch courses ({}): {}", status, message);
                ui.alert(&format!("Error fetching courses: {}", message));
            }
            Listing::Malformed(raw) => {
                error!("course list response was not a list of courses: {}", raw);
                ui.alert(PROCESSING_ERROR);
            }
            Listing::Unreachable(e) => {
                error!("error fetching courses: {}", e);
                ui.alert(UNEXPECTED_ERROR);
            }
        }

        listing
    }
}
