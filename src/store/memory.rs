//! In-memory store for todo lifecycle tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::todo::{
    domain::{ProjectedTodoData, Status, StatusId, Todo, TodoId, TodoRecord},
    ports::{StatusRepository, TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use crate::user::{
    domain::{User, UserId, UserName},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Status vocabulary seeded by [`InMemoryStore::new`], matching the rows
/// inserted by the schema migration.
pub const DEFAULT_STATUSES: [(i32, &str); 4] =
    [(1, "New"), (2, "In Progress"), (3, "Done"), (4, "Deleted")];

/// Thread-safe in-memory store holding users, statuses, and todos.
///
/// Foreign keys are checked the way the relational schema checks them:
/// todo writes must reference an existing user and status, and users still
/// in charge of a todo cannot be deleted. Identifiers are assigned from
/// per-relation sequences starting at 1.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    state: Arc<RwLock<InMemoryTables>>,
}

#[derive(Debug, Default)]
struct InMemoryTables {
    users: BTreeMap<UserId, UserName>,
    statuses: BTreeMap<StatusId, String>,
    todos: BTreeMap<TodoId, TodoRecord>,
    last_user_id: i32,
    last_todo_id: i64,
}

impl InMemoryStore {
    /// Creates a store seeded with [`DEFAULT_STATUSES`] and no users or
    /// todos.
    #[must_use]
    pub fn new() -> Self {
        Self::with_statuses(
            DEFAULT_STATUSES
                .iter()
                .map(|&(id, text)| Status::new(StatusId::new(id), text)),
        )
    }

    /// Creates a store with a custom status vocabulary.
    #[must_use]
    pub fn with_statuses(statuses: impl IntoIterator<Item = Status>) -> Self {
        let tables = InMemoryTables {
            statuses: statuses
                .into_iter()
                .map(|status| (status.id(), status.text().to_owned()))
                .collect(),
            ..InMemoryTables::default()
        };
        Self {
            state: Arc::new(RwLock::new(tables)),
        }
    }

    /// Returns the stored record of a todo, bypassing the joined read model.
    ///
    /// Returns `None` when the todo does not exist or the lock is poisoned.
    #[must_use]
    pub fn record(&self, id: TodoId) -> Option<TodoRecord> {
        self.read().ok()?.todos.get(&id).cloned()
    }

    /// Returns the number of stored todo rows.
    #[must_use]
    pub fn todo_count(&self) -> usize {
        self.read().map_or(0, |tables| tables.todos.len())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, InMemoryTables>, std::io::Error> {
        self.state
            .read()
            .map_err(|err| std::io::Error::other(err.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, InMemoryTables>, std::io::Error> {
        self.state
            .write()
            .map_err(|err| std::io::Error::other(err.to_string()))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTables {
    fn check_foreign_keys(&self, record: &TodoRecord) -> TodoRepositoryResult<()> {
        if !self.users.contains_key(&record.person_in_charge) {
            return Err(foreign_key_violation(format!(
                "person_in_charge {} does not reference a user",
                record.person_in_charge
            )));
        }
        if !self.statuses.contains_key(&record.status) {
            return Err(foreign_key_violation(format!(
                "status {} does not reference a status",
                record.status
            )));
        }
        Ok(())
    }

    /// Inner-joins a todo row with its user and status.
    fn project(&self, id: TodoId, record: &TodoRecord) -> Option<Todo> {
        let user_name = self.users.get(&record.person_in_charge)?;
        let status_text = self.statuses.get(&record.status)?;
        Some(Todo::from_projection(ProjectedTodoData {
            id,
            title: record.title.clone(),
            description: record.description.clone(),
            due_date: record.due_date,
            person_in_charge: user_name.as_str().to_owned(),
            status: status_text.clone(),
        }))
    }
}

fn foreign_key_violation(detail: String) -> TodoRepositoryError {
    TodoRepositoryError::persistence(std::io::Error::other(format!(
        "foreign key violation: {detail}"
    )))
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, name: &UserName) -> UserRepositoryResult<User> {
        let mut tables = self.write().map_err(UserRepositoryError::persistence)?;
        tables.last_user_id += 1;
        let id = UserId::new(tables.last_user_id);
        tables.users.insert(id, name.clone());
        Ok(User::new(id, name.clone()))
    }

    async fn rename(&self, id: UserId, name: &UserName) -> UserRepositoryResult<()> {
        let mut tables = self.write().map_err(UserRepositoryError::persistence)?;
        let stored = tables
            .users
            .get_mut(&id)
            .ok_or(UserRepositoryError::NotFound(id))?;
        *stored = name.clone();
        Ok(())
    }

    async fn remove(&self, id: UserId) -> UserRepositoryResult<()> {
        let mut tables = self.write().map_err(UserRepositoryError::persistence)?;
        if !tables.users.contains_key(&id) {
            return Err(UserRepositoryError::NotFound(id));
        }
        if tables
            .todos
            .values()
            .any(|record| record.person_in_charge == id)
        {
            return Err(UserRepositoryError::InUse(id));
        }
        tables.users.remove(&id);
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let tables = self.read().map_err(UserRepositoryError::persistence)?;
        Ok(tables
            .users
            .get(&id)
            .map(|name| User::new(id, name.clone())))
    }

    async fn find_by_name(&self, name: &str) -> UserRepositoryResult<Option<User>> {
        let tables = self.read().map_err(UserRepositoryError::persistence)?;
        Ok(tables
            .users
            .iter()
            .find(|(_, stored)| stored.as_str() == name)
            .map(|(id, stored)| User::new(*id, stored.clone())))
    }

    async fn list_all(&self) -> UserRepositoryResult<Vec<User>> {
        let tables = self.read().map_err(UserRepositoryError::persistence)?;
        Ok(tables
            .users
            .iter()
            .map(|(id, name)| User::new(*id, name.clone()))
            .collect())
    }
}

#[async_trait]
impl StatusRepository for InMemoryStore {
    async fn find_by_text(&self, text: &str) -> TodoRepositoryResult<Option<Status>> {
        let tables = self.read().map_err(TodoRepositoryError::persistence)?;
        Ok(tables
            .statuses
            .iter()
            .find(|(_, stored)| stored.as_str() == text)
            .map(|(id, stored)| Status::new(*id, stored.clone())))
    }

    async fn list_vocabulary(&self) -> TodoRepositoryResult<Vec<Status>> {
        let tables = self.read().map_err(TodoRepositoryError::persistence)?;
        Ok(tables
            .statuses
            .iter()
            .map(|(id, text)| Status::new(*id, text.clone()))
            .collect())
    }
}

#[async_trait]
impl TodoRepository for InMemoryStore {
    async fn insert(&self, record: &TodoRecord) -> TodoRepositoryResult<TodoId> {
        let mut tables = self.write().map_err(TodoRepositoryError::persistence)?;
        tables.check_foreign_keys(record)?;
        tables.last_todo_id += 1;
        let id = TodoId::new(tables.last_todo_id);
        tables.todos.insert(id, record.clone());
        Ok(id)
    }

    async fn update(&self, id: TodoId, record: &TodoRecord) -> TodoRepositoryResult<()> {
        let mut tables = self.write().map_err(TodoRepositoryError::persistence)?;
        if !tables.todos.contains_key(&id) {
            return Err(TodoRepositoryError::NotFound(id));
        }
        tables.check_foreign_keys(record)?;
        tables.todos.insert(id, record.clone());
        Ok(())
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()> {
        let mut tables = self.write().map_err(TodoRepositoryError::persistence)?;
        tables
            .todos
            .remove(&id)
            .map(|_| ())
            .ok_or(TodoRepositoryError::NotFound(id))
    }

    async fn find_view(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        let tables = self.read().map_err(TodoRepositoryError::persistence)?;
        Ok(tables
            .todos
            .get(&id)
            .and_then(|record| tables.project(id, record)))
    }

    async fn list_views(&self) -> TodoRepositoryResult<Vec<Todo>> {
        let tables = self.read().map_err(TodoRepositoryError::persistence)?;
        Ok(tables
            .todos
            .iter()
            .filter_map(|(id, record)| tables.project(*id, record))
            .collect())
    }

    async fn find_current_status(&self, id: TodoId) -> TodoRepositoryResult<Option<Status>> {
        let tables = self.read().map_err(TodoRepositoryError::persistence)?;
        Ok(tables.todos.get(&id).and_then(|record| {
            tables
                .statuses
                .get(&record.status)
                .map(|text| Status::new(record.status, text.clone()))
        }))
    }
}
