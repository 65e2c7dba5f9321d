use db::models::course::{Model as CourseModel, NewCourse};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Course creation body.
///
/// `role` is consumed by the admin guard. A `userId` field is accepted and ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(required(message = "course is required"))]
    pub course: Option<String>,
    pub description: Option<String>,
    #[validate(required(message = "price is required"))]
    pub price: Option<f64>,
}

impl CreateCourseRequest {
    /// Call after `validate()` has passed.
    pub fn into_new_course(self) -> NewCourse {
        NewCourse {
            course: self.course.unwrap_or_default(),
            description: self.description,
            price: self.price.unwrap_or_default(),
        }
    }
}

/// A course as returned by the listing, student ids included.
#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: String,
    pub course: String,
    pub description: Option<String>,
    pub price: f64,
    pub students: Vec<String>,
    pub instructor: Option<String>,
    pub created_at: String,
}

impl From<CourseModel> for CourseResponse {
    fn from(course: CourseModel) -> Self {
        Self {
            id: course.id,
            course: course.course,
            description: course.description,
            price: course.price,
            students: course.students.0,
            instructor: course.instructor,
            created_at: course.created_at.to_rfc3339(),
        }
    }
}
