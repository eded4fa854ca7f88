use crate::domain::errors::DomainResult;
use crate::domain::text::{TextRule, positive_id};
use std::fmt;

const TITLE_RULE: TextRule = TextRule {
    field: "title",
    min: 3,
    max: 100,
    message: "Title Length Must be between 3 to 100 Characters",
};

const CONTENT_RULE: TextRule = TextRule {
    field: "content",
    min: 3,
    max: 200,
    message: "Content Length Must be between 3 to 200 Characters",
};

const AUTHOR_RULE: TextRule = TextRule {
    field: "author",
    min: 3,
    max: 200,
    message: "Name Length Must be between 3 to 200 Characters",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostId(i64);

impl PostId {
    pub fn new(id: i64) -> DomainResult<Self> {
        positive_id("postId", "Post Id should be Positive Integer", id).map(Self)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<PostId> for i64 {
    fn from(value: PostId) -> Self {
        value.0
    }
}

macro_rules! post_text {
    ($name:ident, $rule:expr) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> DomainResult<Self> {
                $rule.check(value.into()).map(Self)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

post_text!(PostTitle, TITLE_RULE);
post_text!(PostContent, CONTENT_RULE);
post_text!(PostAuthor, AUTHOR_RULE);
