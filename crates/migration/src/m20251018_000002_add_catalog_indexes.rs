use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Author dashboard and uniqueness lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_courses_author_id")
                    .table(Courses::Table)
                    .col(Courses::AuthorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_courses_category_id")
                    .table(Courses::Table)
                    .col(Courses::CategoryId)
                    .to_owned(),
            )
            .await?;

        // Sort keys of the public list
        manager
            .create_index(
                Index::create()
                    .name("idx_courses_created_at")
                    .table(Courses::Table)
                    .col(Courses::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_courses_price")
                    .table(Courses::Table)
                    .col(Courses::Price)
                    .to_owned(),
            )
            .await?;

        // Index on lessons.course_id for the per-course counts
        manager
            .create_index(
                Index::create()
                    .name("idx_lessons_course_id")
                    .table(Lessons::Table)
                    .col(Lessons::CourseId)
                    .to_owned(),
            )
            .await?;

        // Serves both the per-course total and the per-user enrollment check
        manager
            .create_index(
                Index::create()
                    .name("idx_enrollments_course_id_user_id")
                    .table(Enrollments::Table)
                    .col(Enrollments::CourseId)
                    .col(Enrollments::UserId)
                    .to_owned(),
            )
            .await?;

        // A title may only be used once per author among courses that are not soft-deleted
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS ux_courses_title_author_active \
                 ON courses (title, author_id) WHERE is_deleted = false;",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS ux_courses_title_author_active;")
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_enrollments_course_id_user_id")
                    .table(Enrollments::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_lessons_course_id")
                    .table(Lessons::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_courses_price")
                    .table(Courses::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_courses_created_at")
                    .table(Courses::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_courses_category_id")
                    .table(Courses::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_courses_author_id")
                    .table(Courses::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Courses {
    Table,
    AuthorId,
    CategoryId,
    CreatedAt,
    Price,
}

#[derive(Iden)]
enum Lessons {
    Table,
    CourseId,
}

#[derive(Iden)]
enum Enrollments {
    Table,
    CourseId,
    UserId,
}
