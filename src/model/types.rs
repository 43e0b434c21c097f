use crate::error::{BlogError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Post category. The serialized form is the fixed lowercase,
/// hyphenated tag used in fixture data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Meteor,
    Product,
    #[serde(rename = "user-story")]
    UserStory,
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Meteor,
        Category::Product,
        Category::UserStory,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Meteor => "meteor",
            Category::Product => "product",
            Category::UserStory => "user-story",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = BlogError;

    fn from_str(s: &str) -> Result<Self> {
        // Tags are case-sensitive.
        match s {
            "meteor" => Ok(Category::Meteor),
            "product" => Ok(Category::Product),
            "user-story" => Ok(Category::UserStory),
            "other" => Ok(Category::Other),
            _ => Err(BlogError::Parse(format!("Invalid category: {}", s))),
        }
    }
}
