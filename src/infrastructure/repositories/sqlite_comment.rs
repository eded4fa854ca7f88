use super::error::{corrupt_row, map_sqlx};
use crate::domain::comment::{
    Comment, CommentBody, CommentId, CommentReadRepository, CommentWriteRepository, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::PostId;
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteCommentRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCommentRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    comment: String,
    post_id: i64,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let build = || -> DomainResult<Comment> {
            Ok(Comment {
                id: CommentId::new(row.id)?,
                body: CommentBody::new(row.comment)?,
                post_id: PostId::new(row.post_id)?,
            })
        };
        build().map_err(|err| corrupt_row("comment", id, err))
    }
}

#[async_trait]
impl CommentWriteRepository for SqliteCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment { body, post_id } = comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (comment, post_id) VALUES (?, ?) RETURNING id, comment, post_id",
        )
        .bind(body.as_str())
        .bind(i64::from(post_id))
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl CommentReadRepository for SqliteCommentRepository {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            "SELECT id, comment, post_id FROM comments WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn list_by_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, comment, post_id FROM comments WHERE post_id = ? ORDER BY id",
        )
        .bind(i64::from(post_id))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn exists(&self, id: CommentId) -> DomainResult<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM comments WHERE id = ?")
            .bind(i64::from(id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(found.is_some())
    }
}
