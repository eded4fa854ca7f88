// tests/support/builders.rs
use quill_core::application::dto::{CommentInput, PostInput};

pub struct PostInputBuilder {
    title: String,
    content: String,
    author: String,
}

impl PostInputBuilder {
    pub fn new() -> Self {
        Self {
            title: "Hello World".into(),
            content: "First post content".into(),
            author: "Ann Lee".into(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn build(self) -> PostInput {
        PostInput {
            title: self.title,
            content: self.content,
            author: self.author,
        }
    }
}

pub fn comment_input(body: impl Into<String>) -> CommentInput {
    CommentInput {
        comment: body.into(),
    }
}
