use crate::{
    auth::requester_id,
    dtos::course::{
        AuthorCourseResponse, CourseQueryParams, CourseRecordResponse, CourseResponse,
        CreateCourseRequest, PaginatedCoursesResponse, UpdateCourseRequest,
    },
    error::ApiError,
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use database::services::course::CourseService;
use sea_orm::prelude::Uuid;
use tower_oauth2_resource_server::claims::DefaultClaims;

/// Get paginated list of courses
#[utoipa::path(
    get,
    path = "/courses",
    params(CourseQueryParams),
    responses(
        (status = 200, description = "List of courses retrieved successfully", body = PaginatedCoursesResponse),
        (status = 400, description = "Malformed query string"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_courses(
    State(state): State<AppState>,
    params: Result<Query<CourseQueryParams>, QueryRejection>,
) -> Result<Json<PaginatedCoursesResponse>, ApiError> {
    let Query(params) = params?;
    let page = CourseService::list_courses(&state.db, params.into()).await?;

    Ok(Json(page.into()))
}

/// Create a new course
#[utoipa::path(
    post,
    path = "/courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = CourseRecordResponse),
        (status = 400, description = "Duplicate title for this author, invalid price or malformed body"),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Courses"
)]
pub async fn create_course(
    State(state): State<AppState>,
    body: Result<Json<CreateCourseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CourseRecordResponse>), ApiError> {
    let Json(body) = body?;
    let course = CourseService::create_course(&state.db, body.into()).await?;

    Ok((StatusCode::CREATED, Json(course.into())))
}

/// Get a specific course by ID, with counts and the caller's enrollment status
#[utoipa::path(
    get,
    path = "/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 400, description = "Malformed course ID"),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Courses"
)]
pub async fn get_course_by_id(
    State(state): State<AppState>,
    Extension(claims): Extension<DefaultClaims>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<CourseResponse>, ApiError> {
    let Path(id) = id?;
    let course = CourseService::get_course_by_id(&state.db, id, requester_id(&claims)).await?;

    Ok(Json(course.into()))
}

/// Update course fields
#[utoipa::path(
    patch,
    path = "/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Course updated", body = CourseRecordResponse),
        (status = 400, description = "Duplicate title, malformed course ID or malformed body"),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Courses"
)]
pub async fn update_course(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<UpdateCourseRequest>, JsonRejection>,
) -> Result<Json<CourseRecordResponse>, ApiError> {
    let Path(id) = id?;
    let Json(body) = body?;
    let course = CourseService::update_course(&state.db, id, body.into()).await?;

    Ok(Json(course.into()))
}

/// Soft delete a course
#[utoipa::path(
    patch,
    path = "/courses/{id}/delete",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course marked as deleted", body = CourseRecordResponse),
        (status = 400, description = "Malformed course ID"),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 404, description = "Course not found or already deleted"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Courses"
)]
pub async fn soft_delete_course(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<CourseRecordResponse>, ApiError> {
    let Path(id) = id?;
    let course = CourseService::soft_delete_course(&state.db, id).await?;

    Ok(Json(course.into()))
}

/// Restore a soft-deleted course
#[utoipa::path(
    patch,
    path = "/courses/{id}/restore",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course restored", body = CourseRecordResponse),
        (status = 400, description = "An active course with the same title exists for this author, or malformed course ID"),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Courses"
)]
pub async fn restore_course(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<CourseRecordResponse>, ApiError> {
    let Path(id) = id?;
    let course = CourseService::restore_course(&state.db, id).await?;

    Ok(Json(course.into()))
}

/// Get every course of an author, including deleted ones
#[utoipa::path(
    get,
    path = "/authors/{id}/courses",
    params(
        ("id" = Uuid, Path, description = "Author user ID")
    ),
    responses(
        (status = 200, description = "Courses of the author", body = Vec<AuthorCourseResponse>),
        (status = 400, description = "Malformed author ID"),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Courses"
)]
pub async fn get_courses_by_author(
    State(state): State<AppState>,
    author_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Vec<AuthorCourseResponse>>, ApiError> {
    let Path(author_id) = author_id?;
    let courses = CourseService::get_courses_by_author(&state.db, author_id).await?;

    Ok(Json(courses.into_iter().map(Into::into).collect()))
}
