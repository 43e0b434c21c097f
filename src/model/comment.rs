use serde::{Deserialize, Serialize};

/// A comment or reply as stored in the fixture dataset. `author` is an
/// author id, resolved on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub id: String,
    pub content: String,
    pub author: String,
}
