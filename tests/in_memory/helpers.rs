//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use rstest::fixture;
use todos::store::memory::InMemoryStore;
use todos::todo::services::{TodoLifecycleService, TodoRequest};
use todos::user::services::UserDirectoryService;

/// Todo service over the in-memory store.
pub type TodoService = TodoLifecycleService<InMemoryStore, InMemoryStore, InMemoryStore>;

/// Services sharing one in-memory store.
pub struct App {
    /// Store shared by both services.
    pub store: Arc<InMemoryStore>,
    /// Todo lifecycle service.
    pub todos: TodoService,
    /// User directory service.
    pub users: UserDirectoryService<InMemoryStore>,
}

/// Provides both services over a fresh store seeded with the default
/// status vocabulary and no users.
#[fixture]
pub fn app() -> App {
    let store = Arc::new(InMemoryStore::new());
    App {
        todos: TodoLifecycleService::from_store(Arc::clone(&store)),
        users: UserDirectoryService::new(Arc::clone(&store)),
        store,
    }
}

/// Builds a todo request for user `person` with status `status`.
#[must_use]
pub fn todo_request(person: &str, status: &str) -> TodoRequest {
    TodoRequest::new("A", "d", "2021-10-02", person, status)
}
