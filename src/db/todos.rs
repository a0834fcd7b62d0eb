//! Todo management

use rusqlite::params;

use crate::db::Database;
use crate::models::{NewTodo, Todo};

impl Database {
    /// Insert a new todo and return it with its assigned id
    pub fn create_todo(&self, new_todo: &NewTodo) -> anyhow::Result<Todo> {
        let conn = self.conn();

        conn.execute(
            "INSERT INTO todos (title, content, finished) VALUES (?1, ?2, ?3)",
            params![new_todo.title, new_todo.content, new_todo.finished],
        )?;

        let id = conn.last_insert_rowid();
        Ok(new_todo.clone().with_id(id))
    }

    /// Get all todos
    pub fn get_todos(&self) -> anyhow::Result<Vec<Todo>> {
        let conn = self.conn();

        let mut stmt = conn.prepare("SELECT id, title, content, finished FROM todos")?;
        let todos = stmt
            .query_map([], |row| Todo::from_row(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(todos)
    }

    /// Get todo by ID
    pub fn get_todo_by_id(&self, id: i64) -> anyhow::Result<Option<Todo>> {
        let conn = self.conn();

        let result = conn.query_row(
            "SELECT id, title, content, finished FROM todos WHERE id = ?1",
            params![id],
            |row| Todo::from_row(row),
        );

        match result {
            Ok(todo) => Ok(Some(todo)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Get todos marked as finished
    pub fn get_completed_todos(&self) -> anyhow::Result<Vec<Todo>> {
        let conn = self.conn();

        let mut stmt =
            conn.prepare("SELECT id, title, content, finished FROM todos WHERE finished = true")?;
        let todos = stmt
            .query_map([], |row| Todo::from_row(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(todos)
    }

    /// Overwrite a todo's fields. Returns false when no row has that id.
    pub fn update_todo(&self, todo: &Todo) -> anyhow::Result<bool> {
        let conn = self.conn();

        let rows = conn.execute(
            "UPDATE todos SET title = ?1, content = ?2, finished = ?3 WHERE id = ?4",
            params![todo.title, todo.content, todo.finished, todo.id],
        )?;

        Ok(rows > 0)
    }

    /// Delete a todo. Returns false when no row has that id.
    pub fn delete_todo(&self, id: i64) -> anyhow::Result<bool> {
        let conn = self.conn();

        let rows = conn.execute("DELETE FROM todos WHERE id = ?1", params![id])?;

        Ok(rows > 0)
    }
}
