//! Renders the course list into the page
use html_escape::encode_text;

use crate::{Course, Page, COURSE_LIST_ID};

pub const NO_COURSES: &str = "No courses available.";
pub const NO_DESCRIPTION: &str = "Not available";
pub const NO_LIMIT: &str = "No limit";

/// Replace the contents of the course list container with `courses`.
pub fn render_courses(page: &mut impl Page, courses: &[Course]) {
    page.replace_contents(COURSE_LIST_ID, courses_html(courses));
}

/// HTML for the course list container
pub fn courses_html(courses: &[Course]) -> String {
    if courses.is_empty() {
        return format!("<p>{}</p>", NO_COURSES);
    }

    courses.iter().map(course_html).collect::<Vec<_>>().join("\n")
}

fn course_html(course: &Course) -> String {
    let description = course
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(NO_DESCRIPTION);
    let limit = match course.enrollment_limit {
        None | Some(0) => NO_LIMIT.to_string(),
        Some(l) => l.to_string(),
    };

    format!(
        concat!(
            "<div class=\"course-item\">\n",
            "<h3>{}</h3>\n",
            "<p><strong>Description:</strong> {}</p>\n",
            "<p><strong>Instructor:</strong> {}</p>\n",
            "<p><strong>Duration:</strong> {} hours</p>\n",
            "<p><strong>Enrollment limit:</strong> {}</p>\n",
            "</div>"
        ),
        encode_text(&course.title),
        encode_text(description),
        encode_text(&course.instructor),
        course.duration,
        encode_text(&limit),
    )
}
