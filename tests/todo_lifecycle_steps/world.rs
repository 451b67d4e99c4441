//! Shared world state for todo lifecycle BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use todos::boundary::{CollapsePolicy, Outcome};
use todos::store::memory::InMemoryStore;
use todos::todo::{
    domain::{Todo, TodoId, TodoRecord},
    services::{TodoLifecycleError, TodoLifecycleService},
};
use todos::user::services::UserDirectoryService;

/// Service type used by the BDD world.
pub type TestTodoService = TodoLifecycleService<InMemoryStore, InMemoryStore, InMemoryStore>;

/// Scenario world for todo lifecycle behaviour tests.
pub struct TodoWorld {
    pub store: Arc<InMemoryStore>,
    pub todos: TestTodoService,
    pub users: UserDirectoryService<InMemoryStore>,
    pub policy: CollapsePolicy,
    pub current_todo: Option<TodoId>,
    pub snapshot: Option<TodoRecord>,
    pub last_todo: Option<Todo>,
    pub last_outcome: Option<Outcome>,
}

impl TodoWorld {
    /// Creates a world over an empty store with the default vocabulary.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self {
            todos: TodoLifecycleService::from_store(Arc::clone(&store)),
            users: UserDirectoryService::new(Arc::clone(&store)),
            store,
            policy: CollapsePolicy::Reference,
            current_todo: None,
            snapshot: None,
            last_todo: None,
            last_outcome: None,
        }
    }

    /// Records the outcome of a todo operation returning a todo.
    pub fn record_todo_result(&mut self, result: Result<Todo, TodoLifecycleError>) {
        match result {
            Ok(todo) => {
                self.current_todo = Some(todo.id());
                self.last_todo = Some(todo);
                self.last_outcome = Some(Outcome::success());
            }
            Err(err) => {
                self.last_todo = None;
                self.last_outcome = Some(Outcome::from_todo_error(&err, self.policy));
            }
        }
    }

    /// Returns the todo the scenario is working on.
    pub fn current_todo(&self) -> Result<TodoId, eyre::Report> {
        self.current_todo
            .ok_or_else(|| eyre::eyre!("missing current todo in scenario world"))
    }
}

impl Default for TodoWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoWorld {
    TodoWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
