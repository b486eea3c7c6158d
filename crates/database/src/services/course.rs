use crate::{
    entities::{categories, courses, enrollments, lessons, users},
    error::CatalogError,
    services::types::{
        AuthorCourse, CatalogQuery, CoursePage, CoursePatch, CourseWithStats, NewCourse,
    },
};
use chrono::Utc;
use log::{debug, info};
use models::{media::MediaRef, sort::CourseSort};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, JoinType, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Select, SqlErr,
    sea_query::{Expr, Func, IntoColumnRef, LikeExpr, SimpleExpr},
};
use std::collections::HashMap;
use uuid::Uuid;

const DUPLICATE_TITLE_MESSAGE: &str = "Course with this title already exists for this author";

pub struct CourseService;

impl CourseService {
    /// Creates a course, refusing a title the author already uses on a non-deleted course
    pub async fn create_course(
        db: &DatabaseConnection,
        input: NewCourse,
    ) -> Result<courses::Model, CatalogError> {
        let duplicates = courses::Entity::find()
            .filter(courses::Column::Title.eq(input.title.as_str()))
            .filter(courses::Column::AuthorId.eq(input.author_id))
            .filter(courses::Column::IsDeleted.eq(false))
            .count(db)
            .await?;

        if duplicates > 0 {
            debug!(
                "Rejected duplicate course {:?} for author {}",
                input.title, input.author_id
            );
            return Err(CatalogError::Conflict(DUPLICATE_TITLE_MESSAGE.to_string()));
        }

        let price = input
            .price
            .to_price()
            .map_err(|err| CatalogError::Validation(err.to_string()))?;
        let (thumbnail, thumbnail_public_id) = MediaRef::into_columns(input.thumbnail);
        let (overview_video, overview_video_public_id) =
            MediaRef::into_columns(input.overview_video);

        let course = courses::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(input.title),
            description: Set(input.description),
            price: Set(price),
            is_free: Set(input.is_free.truthy()),
            author_id: Set(input.author_id),
            category_id: Set(input.category_id),
            thumbnail: Set(thumbnail),
            thumbnail_public_id: Set(thumbnail_public_id),
            overview_video: Set(overview_video),
            overview_video_public_id: Set(overview_video_public_id),
            features: Set(input.features),
            stack: Set(input.stack),
            overviews: Set(input.overviews),
            is_deleted: Set(false),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await
        .map_err(Self::map_write_error)?;

        info!("Created course {} ({:?})", course.id, course.title);
        Ok(course)
    }

    /// Gets a non-deleted course with its lesson and enrollment counts, and whether `user_id` is enrolled
    pub async fn get_course_by_id(
        db: &DatabaseConnection,
        course_id: Uuid,
        user_id: Option<Uuid>,
    ) -> Result<CourseWithStats, CatalogError> {
        let course = Self::find_active(db, course_id).await?;

        // One lookup per relation and count, with the three counts issued together
        let author = course.find_related(users::Entity).one(db).await?;
        let category = course.find_related(categories::Entity).one(db).await?;

        let lessons_count = lessons::Entity::find()
            .filter(lessons::Column::CourseId.eq(course_id))
            .count(db);

        let own_enrollments = async {
            match user_id {
                Some(user_id) => {
                    enrollments::Entity::find()
                        .filter(enrollments::Column::CourseId.eq(course_id))
                        .filter(enrollments::Column::UserId.eq(user_id))
                        .count(db)
                        .await
                }
                None => Ok(0),
            }
        };
        let enrollments_count = enrollments::Entity::find()
            .filter(enrollments::Column::CourseId.eq(course_id))
            .count(db);

        let (lessons_count, own_enrollments, enrollments_count) =
            futures::try_join!(lessons_count, own_enrollments, enrollments_count)?;

        Ok(CourseWithStats {
            course,
            author,
            category,
            lessons_count,
            enrollments_count,
            is_enrolled: Some(own_enrollments > 0),
        })
    }

    /// Lists non-deleted courses with filtering, search, ordering and pagination
    pub async fn list_courses(
        db: &DatabaseConnection,
        query: CatalogQuery,
    ) -> Result<CoursePage, CatalogError> {
        let mut select = courses::Entity::find().filter(courses::Column::IsDeleted.eq(false));

        if let Some(category) = query.category.as_deref() {
            select = select
                .join(JoinType::InnerJoin, courses::Relation::Category.def())
                .filter(contains_insensitive(
                    (categories::Entity, categories::Column::Name),
                    category,
                ));
        }

        if let Some(search_term) = query.search_term.as_deref() {
            select = select.filter(
                Condition::any()
                    .add(contains_insensitive(
                        (courses::Entity, courses::Column::Title),
                        search_term,
                    ))
                    .add(contains_insensitive(
                        (courses::Entity, courses::Column::Description),
                        search_term,
                    )),
            );
        }

        let total_courses = select.clone().count(db).await?;
        let offset = query.page.offset();
        debug!(
            "Listing courses sorted by {} at offset {offset} of {total_courses}",
            query.sort
        );

        let rows = if offset >= total_courses {
            vec![]
        } else {
            Self::apply_sort(select, query.sort)
                .offset(offset)
                .limit(query.page.limit.min(i64::MAX as u64))
                .all(db)
                .await?
        };

        let courses = Self::attach_stats(db, rows).await?;

        Ok(CoursePage {
            courses,
            total_courses,
            total_pages: query.page.total_pages(total_courses),
            current_page: query.page.page,
        })
    }

    /// Lists every course of an author, including soft-deleted ones
    pub async fn get_courses_by_author(
        db: &DatabaseConnection,
        author_id: Uuid,
    ) -> Result<Vec<AuthorCourse>, CatalogError> {
        let courses = courses::Entity::find()
            .filter(courses::Column::AuthorId.eq(author_id))
            .order_by_desc(courses::Column::CreatedAt)
            .order_by_asc(courses::Column::Id)
            .all(db)
            .await?;

        if courses.is_empty() {
            return Ok(vec![]);
        }

        let course_ids: Vec<Uuid> = courses.iter().map(|c| c.id).collect();
        let author = users::Entity::find_by_id(author_id).one(db).await?;
        let categories_by_id = Self::categories_for(db, &courses).await?;

        let mut lessons_by_course: HashMap<Uuid, Vec<lessons::Model>> = HashMap::new();
        for lesson in lessons::Entity::find()
            .filter(lessons::Column::CourseId.is_in(course_ids))
            .order_by_asc(lessons::Column::CreatedAt)
            .all(db)
            .await?
        {
            lessons_by_course
                .entry(lesson.course_id)
                .or_default()
                .push(lesson);
        }

        Ok(courses
            .into_iter()
            .map(|course| {
                let category = course
                    .category_id
                    .and_then(|id| categories_by_id.get(&id).cloned());
                let lessons = lessons_by_course.remove(&course.id).unwrap_or_default();
                AuthorCourse {
                    course,
                    author: author.clone(),
                    category,
                    lessons,
                }
            })
            .collect())
    }

    /// Applies a partial update to a non-deleted course
    pub async fn update_course(
        db: &DatabaseConnection,
        course_id: Uuid,
        patch: CoursePatch,
    ) -> Result<courses::Model, CatalogError> {
        let course = Self::find_active(db, course_id).await?;

        if patch.is_empty() {
            return Ok(course);
        }

        let mut active: courses::ActiveModel = course.into();
        patch.apply_to(&mut active);

        let course = active.update(db).await.map_err(Self::map_write_error)?;
        info!("Updated course {}", course.id);
        Ok(course)
    }

    /// Marks a course as deleted. Deleting a course that is already deleted is an error.
    pub async fn soft_delete_course(
        db: &DatabaseConnection,
        course_id: Uuid,
    ) -> Result<courses::Model, CatalogError> {
        let course = Self::find_active(db, course_id).await?;

        let mut active: courses::ActiveModel = course.into();
        active.is_deleted = Set(true);

        let course = active.update(db).await?;
        info!("Soft-deleted course {}", course.id);
        Ok(course)
    }

    /// Clears the deleted flag. Restoring a course that is not deleted succeeds and changes nothing.
    pub async fn restore_course(
        db: &DatabaseConnection,
        course_id: Uuid,
    ) -> Result<courses::Model, CatalogError> {
        let course = courses::Entity::find_by_id(course_id)
            .one(db)
            .await?
            .ok_or(CatalogError::NotFound)?;

        let mut active: courses::ActiveModel = course.into();
        active.is_deleted = Set(false);

        let course = active.update(db).await.map_err(Self::map_write_error)?;
        info!("Restored course {}", course.id);
        Ok(course)
    }

    /// Loads a course, treating a soft-deleted one as missing
    async fn find_active(
        db: &DatabaseConnection,
        course_id: Uuid,
    ) -> Result<courses::Model, CatalogError> {
        match courses::Entity::find_by_id(course_id).one(db).await? {
            Some(course) if !course.is_deleted => Ok(course),
            Some(_) => {
                debug!("Course {course_id} is soft-deleted");
                Err(CatalogError::NotFound)
            }
            None => Err(CatalogError::NotFound),
        }
    }

    fn apply_sort(select: Select<courses::Entity>, sort: CourseSort) -> Select<courses::Entity> {
        let select = match sort {
            CourseSort::PriceAsc => select.order_by_asc(courses::Column::Price),
            CourseSort::PriceDesc => select.order_by_desc(courses::Column::Price),
            CourseSort::Newest => select.order_by_desc(courses::Column::CreatedAt),
        };

        // Keeps page boundaries stable when sort keys tie
        select.order_by_asc(courses::Column::Id)
    }

    /// Attaches author, category and live counts to a page of courses, batching each lookup
    async fn attach_stats(
        db: &DatabaseConnection,
        rows: Vec<courses::Model>,
    ) -> Result<Vec<CourseWithStats>, DbErr> {
        if rows.is_empty() {
            return Ok(vec![]);
        }

        let course_ids: Vec<Uuid> = rows.iter().map(|c| c.id).collect();
        let author_ids: Vec<Uuid> = rows.iter().map(|c| c.author_id).collect();

        let lesson_counts: HashMap<Uuid, i64> = lessons::Entity::find()
            .select_only()
            .column(lessons::Column::CourseId)
            .column_as(
                Expr::col((lessons::Entity, lessons::Column::Id)).count(),
                "count",
            )
            .filter(lessons::Column::CourseId.is_in(course_ids.clone()))
            .group_by(lessons::Column::CourseId)
            .into_tuple::<(Uuid, i64)>()
            .all(db)
            .await?
            .into_iter()
            .collect();

        let enrollment_counts: HashMap<Uuid, i64> = enrollments::Entity::find()
            .select_only()
            .column(enrollments::Column::CourseId)
            .column_as(
                Expr::col((enrollments::Entity, enrollments::Column::Id)).count(),
                "count",
            )
            .filter(enrollments::Column::CourseId.is_in(course_ids))
            .group_by(enrollments::Column::CourseId)
            .into_tuple::<(Uuid, i64)>()
            .all(db)
            .await?
            .into_iter()
            .collect();

        let authors_by_id: HashMap<Uuid, users::Model> = users::Entity::find()
            .filter(users::Column::Id.is_in(author_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        let categories_by_id = Self::categories_for(db, &rows).await?;

        Ok(rows
            .into_iter()
            .map(|course| {
                let count_of = |counts: &HashMap<Uuid, i64>| {
                    counts.get(&course.id).copied().unwrap_or(0).max(0) as u64
                };

                CourseWithStats {
                    lessons_count: count_of(&lesson_counts),
                    enrollments_count: count_of(&enrollment_counts),
                    author: authors_by_id.get(&course.author_id).cloned(),
                    category: course
                        .category_id
                        .and_then(|id| categories_by_id.get(&id).cloned()),
                    is_enrolled: None,
                    course,
                }
            })
            .collect())
    }

    async fn categories_for(
        db: &DatabaseConnection,
        courses: &[courses::Model],
    ) -> Result<HashMap<Uuid, categories::Model>, DbErr> {
        let category_ids: Vec<Uuid> = courses.iter().filter_map(|c| c.category_id).collect();

        if category_ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(categories::Entity::find()
            .filter(categories::Column::Id.is_in(category_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|category| (category.id, category))
            .collect())
    }

    /// The store's unique index on (title, author) for non-deleted rows surfaces as a conflict
    fn map_write_error(err: DbErr) -> CatalogError {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                CatalogError::Conflict(DUPLICATE_TITLE_MESSAGE.to_string())
            }
            _ => CatalogError::Database(err),
        }
    }
}

/// `LOWER(column) LIKE '%needle%'`, with LIKE wildcards in the needle matched literally
fn contains_insensitive(column: impl IntoColumnRef, needle: &str) -> SimpleExpr {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(pattern).escape('\\'))
}
