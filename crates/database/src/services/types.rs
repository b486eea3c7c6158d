use crate::entities::{categories, courses, lessons, users};
use models::{
    coerce::{LooseBool, LooseNumber},
    media::MediaRef,
    pagination::PageRequest,
    sort::CourseSort,
};
use sea_orm::{ActiveValue::Set, JsonValue};
use serde::Serialize;
use uuid::Uuid;

/// Everything needed to create a course
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub price: LooseNumber,
    pub is_free: LooseBool,
    pub author_id: Uuid,
    pub category_id: Option<Uuid>,
    pub features: JsonValue,
    pub stack: JsonValue,
    pub overviews: JsonValue,
    pub thumbnail: Option<MediaRef>,
    pub overview_video: Option<MediaRef>,
}

/// A partial update; only fields that are `Some` are written.
///
/// Nullable columns take a nested option: `Some(None)` clears the column.
#[derive(Debug, Clone, Default)]
pub struct CoursePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub is_free: Option<bool>,
    pub author_id: Option<Uuid>,
    pub category_id: Option<Option<Uuid>>,
    pub features: Option<JsonValue>,
    pub stack: Option<JsonValue>,
    pub overviews: Option<JsonValue>,
    pub thumbnail: Option<Option<MediaRef>>,
    pub overview_video: Option<Option<MediaRef>>,
}

impl CoursePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.is_free.is_none()
            && self.author_id.is_none()
            && self.category_id.is_none()
            && self.features.is_none()
            && self.stack.is_none()
            && self.overviews.is_none()
            && self.thumbnail.is_none()
            && self.overview_video.is_none()
    }

    /// Marks each supplied field as set on the active model
    pub fn apply_to(self, course: &mut courses::ActiveModel) {
        if let Some(title) = self.title {
            course.title = Set(title);
        }
        if let Some(description) = self.description {
            course.description = Set(description);
        }
        if let Some(price) = self.price {
            course.price = Set(price);
        }
        if let Some(is_free) = self.is_free {
            course.is_free = Set(is_free);
        }
        if let Some(author_id) = self.author_id {
            course.author_id = Set(author_id);
        }
        if let Some(category_id) = self.category_id {
            course.category_id = Set(category_id);
        }
        if let Some(features) = self.features {
            course.features = Set(features);
        }
        if let Some(stack) = self.stack {
            course.stack = Set(stack);
        }
        if let Some(overviews) = self.overviews {
            course.overviews = Set(overviews);
        }
        if let Some(thumbnail) = self.thumbnail {
            let (url, public_id) = MediaRef::into_columns(thumbnail);
            course.thumbnail = Set(url);
            course.thumbnail_public_id = Set(public_id);
        }
        if let Some(video) = self.overview_video {
            let (url, public_id) = MediaRef::into_columns(video);
            course.overview_video = Set(url);
            course.overview_video_public_id = Set(public_id);
        }
    }
}

/// Filters, ordering and page window for the public course list
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    /// Case-insensitive substring of the category name
    pub category: Option<String>,
    /// Case-insensitive substring of the title or description
    pub search_term: Option<String>,
    pub sort: CourseSort,
    pub page: PageRequest,
}

impl CatalogQuery {
    /// Builds a query from raw string parameters. Empty strings count as absent.
    pub fn from_params(
        category: Option<&str>,
        search_term: Option<&str>,
        sort: Option<&str>,
        page: Option<&str>,
        limit: Option<&str>,
    ) -> Self {
        let non_empty = |s: Option<&str>| s.filter(|s| !s.is_empty()).map(str::to_string);

        Self {
            category: non_empty(category),
            search_term: non_empty(search_term),
            sort: CourseSort::from_param(sort),
            page: PageRequest::from_params(page, limit),
        }
    }
}

/// A course with its derived counts attached
#[derive(Debug, Clone, Serialize)]
pub struct CourseWithStats {
    pub course: courses::Model,
    pub author: Option<users::Model>,
    pub category: Option<categories::Model>,
    pub lessons_count: u64,
    pub enrollments_count: u64,
    /// Only present when the read was made on behalf of a specific user
    pub is_enrolled: Option<bool>,
}

/// One page of the public course list
#[derive(Debug, Clone, Serialize)]
pub struct CoursePage {
    pub courses: Vec<CourseWithStats>,
    pub total_courses: u64,
    pub total_pages: u64,
    pub current_page: u64,
}

/// A course as listed on its author's own view
#[derive(Debug, Clone, Serialize)]
pub struct AuthorCourse {
    pub course: courses::Model,
    pub author: Option<users::Model>,
    pub category: Option<categories::Model>,
    pub lessons: Vec<lessons::Model>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_query_treats_empty_strings_as_absent() {
        let query = CatalogQuery::from_params(Some(""), Some(""), Some(""), Some(""), Some(""));
        assert_eq!(query.category, None);
        assert_eq!(query.search_term, None);
        assert_eq!(query.sort, CourseSort::Newest);
        assert_eq!(query.page, PageRequest::default());
    }

    #[test]
    fn test_catalog_query_keeps_values() {
        let query = CatalogQuery::from_params(
            Some("Web"),
            Some("intro"),
            Some("price-desc"),
            Some("2"),
            Some("10"),
        );
        assert_eq!(query.category.as_deref(), Some("Web"));
        assert_eq!(query.search_term.as_deref(), Some("intro"));
        assert_eq!(query.sort, CourseSort::PriceDesc);
        assert_eq!(query.page, PageRequest { page: 2, limit: 10 });
    }

    #[test]
    fn test_empty_patch() {
        assert!(CoursePatch::default().is_empty());
        let patch = CoursePatch {
            price: Some(5.0),
            ..Default::default()
        };
        assert!(!patch.is_empty());

        let clearing = CoursePatch {
            category_id: Some(None),
            ..Default::default()
        };
        assert!(!clearing.is_empty());
    }
}
