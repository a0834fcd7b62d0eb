//! Data models for the todo service

use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// A stored todo item. Also the body of an update request, where `id` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub finished: bool,
}

impl Todo {
    pub fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            title: row.get::<_, Option<String>>("title")?.unwrap_or_default(),
            content: row.get::<_, Option<String>>("content")?.unwrap_or_default(),
            finished: row.get::<_, Option<bool>>("finished")?.unwrap_or(false),
        })
    }
}

/// Fields of a todo that has not been stored yet
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewTodo {
    pub title: String,
    pub content: String,
    pub finished: bool,
}

impl NewTodo {
    pub fn with_id(self, id: i64) -> Todo {
        Todo {
            id,
            title: self.title,
            content: self.content,
            finished: self.finished,
        }
    }
}

/// Body of a create request. `id` must be an integer when present,
/// but its value is ignored; the store assigns one on insert.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateTodoRequest {
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    pub finished: bool,
}

impl From<CreateTodoRequest> for NewTodo {
    fn from(req: CreateTodoRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            finished: req.finished,
        }
    }
}
