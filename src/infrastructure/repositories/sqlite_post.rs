use super::error::{corrupt_row, map_sqlx};
use crate::domain::comment::{Comment, CommentBody, CommentId};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostAuthor, PostContent, PostId, PostReadRepository, PostTitle, PostUpdate,
    PostWithComments, PostWriteRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const POST_COLUMNS: &str = "id, title, content, author, published_at";

#[derive(Clone)]
pub struct SqlitePostRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePostRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    author: String,
    published_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        let id = row.id;
        build_post(row).map_err(|err| corrupt_row("post", id, err))
    }
}

fn build_post(row: PostRow) -> DomainResult<Post> {
    Ok(Post {
        id: PostId::new(row.id)?,
        title: PostTitle::new(row.title)?,
        content: PostContent::new(row.content)?,
        author: PostAuthor::new(row.author)?,
        published_at: row.published_at,
    })
}

/// One row of the post/comment left join; the comment columns are null when
/// the post has no comments.
#[derive(Debug, FromRow)]
struct PostCommentRow {
    id: i64,
    title: String,
    content: String,
    author: String,
    published_at: DateTime<Utc>,
    comment_id: Option<i64>,
    comment_body: Option<String>,
}

impl PostCommentRow {
    fn post_row(&self) -> PostRow {
        PostRow {
            id: self.id,
            title: self.title.clone(),
            content: self.content.clone(),
            author: self.author.clone(),
            published_at: self.published_at,
        }
    }
}

fn fold_joined(rows: Vec<PostCommentRow>) -> DomainResult<Option<PostWithComments>> {
    let Some(first) = rows.first() else {
        return Ok(None);
    };
    let post = Post::try_from(first.post_row())?;

    let mut comments = Vec::with_capacity(rows.len());
    for row in rows {
        if let (Some(comment_id), Some(body)) = (row.comment_id, row.comment_body) {
            let comment = CommentId::new(comment_id)
                .and_then(|id| {
                    Ok(Comment {
                        id,
                        body: CommentBody::new(body)?,
                        post_id: post.id,
                    })
                })
                .map_err(|err| corrupt_row("comment", comment_id, err))?;
            comments.push(comment);
        }
    }

    Ok(Some(PostWithComments { post, comments }))
}

#[async_trait]
impl PostWriteRepository for SqlitePostRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            content,
            author,
            published_at,
        } = post;

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts (title, content, author, published_at) VALUES (?, ?, ?, ?) RETURNING {POST_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(author.as_str())
        .bind(published_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Option<Post>> {
        let PostUpdate {
            id,
            title,
            content,
            author,
        } = update;

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "UPDATE posts SET title = ?, content = ?, author = ? WHERE id = ? RETURNING {POST_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(author.as_str())
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn delete(&self, id: PostId) -> DomainResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query("DELETE FROM comments WHERE post_id = ?")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl PostReadRepository for SqlitePostRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts ORDER BY id"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Post::try_from).collect()
    }

    async fn find_with_comments(&self, id: PostId) -> DomainResult<Option<PostWithComments>> {
        let rows = sqlx::query_as::<_, PostCommentRow>(
            "SELECT p.id, p.title, p.content, p.author, p.published_at, \
                    c.id AS comment_id, c.comment AS comment_body \
             FROM posts p LEFT JOIN comments c ON c.post_id = p.id \
             WHERE p.id = ? ORDER BY c.id",
        )
        .bind(i64::from(id))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        fold_joined(rows)
    }
}
