use chrono::{DateTime, Utc};
use database::{
    entities::{categories, courses, lessons, users},
    services::types::{
        AuthorCourse, CatalogQuery, CoursePage, CoursePatch, CourseWithStats, NewCourse,
    },
};
use models::{
    coerce::{LooseBool, LooseNumber, nullable},
    media::MediaRef,
};
use sea_orm::prelude::Uuid;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

/// A course record as stored
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecordResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub is_free: bool,
    pub author_id: Uuid,
    pub category_id: Option<Uuid>,
    pub thumbnail: Option<String>,
    pub thumbnail_public_id: Option<String>,
    pub overview_video: Option<String>,
    pub overview_video_public_id: Option<String>,
    #[schema(value_type = Object)]
    pub features: Value,
    #[schema(value_type = Object)]
    pub stack: Value,
    #[schema(value_type = Object)]
    pub overviews: Value,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl From<courses::Model> for CourseRecordResponse {
    fn from(course: courses::Model) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            price: course.price,
            is_free: course.is_free,
            author_id: course.author_id,
            category_id: course.category_id,
            thumbnail: course.thumbnail,
            thumbnail_public_id: course.thumbnail_public_id,
            overview_video: course.overview_video,
            overview_video_public_id: course.overview_video_public_id,
            features: course.features,
            stack: course.stack,
            overviews: course.overviews,
            is_deleted: course.is_deleted,
            created_at: course.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<users::Model> for AuthorResponse {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<categories::Model> for CategoryResponse {
    fn from(category: categories::Model) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LessonResponse {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl From<lessons::Model> for LessonResponse {
    fn from(lesson: lessons::Model) -> Self {
        Self {
            id: lesson.id,
            title: lesson.title,
            created_at: lesson.created_at,
        }
    }
}

/// A course with its derived counts
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    #[serde(flatten)]
    pub course: CourseRecordResponse,
    pub author: Option<AuthorResponse>,
    pub category: Option<CategoryResponse>,
    pub lessons_count: u64,
    pub enrollments_count: u64,
    /// Only present on single-course reads made by an authenticated user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enrolled: Option<bool>,
}

impl From<CourseWithStats> for CourseResponse {
    fn from(course: CourseWithStats) -> Self {
        Self {
            course: course.course.into(),
            author: course.author.map(Into::into),
            category: course.category.map(Into::into),
            lessons_count: course.lessons_count,
            enrollments_count: course.enrollments_count,
            is_enrolled: course.is_enrolled,
        }
    }
}

/// A course on its author's own listing, deleted ones included
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorCourseResponse {
    #[serde(flatten)]
    pub course: CourseRecordResponse,
    pub author: Option<AuthorResponse>,
    pub category: Option<CategoryResponse>,
    pub lessons: Vec<LessonResponse>,
}

impl From<AuthorCourse> for AuthorCourseResponse {
    fn from(course: AuthorCourse) -> Self {
        Self {
            course: course.course.into(),
            author: course.author.map(Into::into),
            category: course.category.map(Into::into),
            lessons: course.lessons.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedCoursesResponse {
    pub courses: Vec<CourseResponse>,
    pub total_pages: u64,
    pub current_page: u64,
    pub total_courses: u64,
}

impl From<CoursePage> for PaginatedCoursesResponse {
    fn from(page: CoursePage) -> Self {
        Self {
            courses: page.courses.into_iter().map(Into::into).collect(),
            total_pages: page.total_pages,
            current_page: page.current_page,
            total_courses: page.total_courses,
        }
    }
}

/// Query string of the course list. Every value is optional and parsed leniently.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CourseQueryParams {
    /// Case-insensitive substring of the category name
    pub category: Option<String>,
    /// Case-insensitive substring of the title or description
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    /// `price-asc`, `price-desc`, anything else is newest first
    pub sort: Option<String>,
    /// Page number, defaults to 1
    pub page: Option<String>,
    /// Page size, defaults to 6
    pub limit: Option<String>,
}

impl From<CourseQueryParams> for CatalogQuery {
    fn from(params: CourseQueryParams) -> Self {
        CatalogQuery::from_params(
            params.category.as_deref(),
            params.search_term.as_deref(),
            params.sort.as_deref(),
            params.page.as_deref(),
            params.limit.as_deref(),
        )
    }
}

/// A file already uploaded to the media store
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaRefBody {
    pub url: String,
    pub public_id: String,
}

impl From<MediaRefBody> for MediaRef {
    fn from(body: MediaRefBody) -> Self {
        MediaRef::new(body.url, body.public_id)
    }
}

fn empty_list() -> Value {
    Value::Array(vec![])
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// A number, or a numeric string
    #[schema(value_type = f64)]
    pub price: LooseNumber,
    #[serde(default)]
    #[schema(value_type = bool)]
    pub is_free: LooseBool,
    pub author_id: Uuid,
    pub category_id: Option<Uuid>,
    #[serde(default = "empty_list")]
    #[schema(value_type = Object)]
    pub features: Value,
    #[serde(default = "empty_list")]
    #[schema(value_type = Object)]
    pub stack: Value,
    #[serde(default = "empty_list")]
    #[schema(value_type = Object)]
    pub overviews: Value,
    pub thumbnail: Option<MediaRefBody>,
    pub overview_video: Option<MediaRefBody>,
}

impl From<CreateCourseRequest> for NewCourse {
    fn from(body: CreateCourseRequest) -> Self {
        Self {
            title: body.title,
            description: body.description,
            price: body.price,
            is_free: body.is_free,
            author_id: body.author_id,
            category_id: body.category_id,
            features: body.features,
            stack: body.stack,
            overviews: body.overviews,
            thumbnail: body.thumbnail.map(Into::into),
            overview_video: body.overview_video.map(Into::into),
        }
    }
}

/// Partial update; omitted fields are left untouched and `null` clears a nullable field
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub is_free: Option<bool>,
    pub author_id: Option<Uuid>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<Uuid>)]
    pub category_id: Option<Option<Uuid>>,
    #[schema(value_type = Option<Object>)]
    pub features: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub stack: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub overviews: Option<Value>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<MediaRefBody>)]
    pub thumbnail: Option<Option<MediaRefBody>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<MediaRefBody>)]
    pub overview_video: Option<Option<MediaRefBody>>,
}

impl From<UpdateCourseRequest> for CoursePatch {
    fn from(body: UpdateCourseRequest) -> Self {
        Self {
            title: body.title,
            description: body.description,
            price: body.price,
            is_free: body.is_free,
            author_id: body.author_id,
            category_id: body.category_id,
            features: body.features,
            stack: body.stack,
            overviews: body.overviews,
            thumbnail: body.thumbnail.map(|media| media.map(Into::into)),
            overview_video: body.overview_video.map(|media| media.map(Into::into)),
        }
    }
}
