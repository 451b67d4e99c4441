//! `PostgreSQL` store implementation for users, statuses, and todos.

use super::{
    models::{NewUserRow, StatusRow, TodoViewRow, TodoWriteRow, UserRow},
    schema::{statuses, todos, users},
};
use crate::todo::{
    domain::{DueDate, ProjectedTodoData, Status, StatusId, Todo, TodoId, TodoRecord},
    ports::{StatusRepository, TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use crate::user::{
    domain::{User, UserId, UserName},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by the store.
pub type StorePgPool = Pool<ConnectionManager<PgConnection>>;

/// Columns of the todo ⋈ user ⋈ status projection, in [`TodoViewRow`] order.
const VIEW_COLUMNS: (
    todos::id,
    todos::title,
    todos::description,
    todos::due_date,
    users::name,
    statuses::status_txt,
) = (
    todos::id,
    todos::title,
    todos::description,
    todos::due_date,
    users::name,
    statuses::status_txt,
);

/// `PostgreSQL`-backed store serving the user, status, and todo ports.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: StorePgPool,
}

/// Errors that can absorb pool checkout and blocking-task failures.
trait PoolFailure: Send + 'static {
    fn pool_failure(err: impl std::error::Error + Send + Sync + 'static) -> Self;
}

impl PoolFailure for UserRepositoryError {
    fn pool_failure(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::persistence(err)
    }
}

impl PoolFailure for TodoRepositoryError {
    fn pool_failure(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::persistence(err)
    }
}

impl PostgresStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: StorePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T, E>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut PgConnection) -> Result<T, E> + Send + 'static,
        T: Send + 'static,
        E: PoolFailure,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(E::pool_failure)?;
            f(&mut connection)
        })
        .await
        .map_err(E::pool_failure)?
    }
}

#[async_trait]
impl UserRepository for PostgresStore {
    async fn create(&self, name: &UserName) -> UserRepositoryResult<User> {
        let new_row = NewUserRow {
            name: name.as_str().to_owned(),
        };
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(users::table)
                .values(&new_row)
                .returning(UserRow::as_returning())
                .get_result::<UserRow>(connection)
                .map_err(UserRepositoryError::persistence)?;
            Ok(row_to_user(row))
        })
        .await
    }

    async fn rename(&self, id: UserId, name: &UserName) -> UserRepositoryResult<()> {
        let new_name = name.as_str().to_owned();
        self.run_blocking(move |connection| {
            let updated = diesel::update(users::table.find(id.value()))
                .set(users::name.eq(new_name))
                .execute(connection)
                .map_err(UserRepositoryError::persistence)?;
            if updated == 0 {
                return Err(UserRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn remove(&self, id: UserId) -> UserRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(users::table.find(id.value()))
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                        UserRepositoryError::InUse(id)
                    }
                    _ => UserRepositoryError::persistence(err),
                })?;
            if deleted == 0 {
                return Err(UserRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        self.run_blocking(move |connection| {
            let row = users::table
                .find(id.value())
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            Ok(row.map(row_to_user))
        })
        .await
    }

    async fn find_by_name(&self, name: &str) -> UserRepositoryResult<Option<User>> {
        let lookup_name = name.to_owned();
        self.run_blocking(move |connection| {
            // Names are not unique; the lowest key wins.
            let row = users::table
                .filter(users::name.eq(lookup_name))
                .order(users::user_id.asc())
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            Ok(row.map(row_to_user))
        })
        .await
    }

    async fn list_all(&self) -> UserRepositoryResult<Vec<User>> {
        self.run_blocking(move |connection| {
            let rows = users::table
                .order(users::user_id.asc())
                .select(UserRow::as_select())
                .load::<UserRow>(connection)
                .map_err(UserRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_user).collect())
        })
        .await
    }
}

#[async_trait]
impl StatusRepository for PostgresStore {
    async fn find_by_text(&self, text: &str) -> TodoRepositoryResult<Option<Status>> {
        let lookup_text = text.to_owned();
        self.run_blocking(move |connection| {
            let row = statuses::table
                .filter(statuses::status_txt.eq(lookup_text))
                .order(statuses::status_id.asc())
                .select(StatusRow::as_select())
                .first::<StatusRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            Ok(row.map(row_to_status))
        })
        .await
    }

    async fn list_vocabulary(&self) -> TodoRepositoryResult<Vec<Status>> {
        self.run_blocking(move |connection| {
            let rows = statuses::table
                .order(statuses::status_id.asc())
                .select(StatusRow::as_select())
                .load::<StatusRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_status).collect())
        })
        .await
    }
}

#[async_trait]
impl TodoRepository for PostgresStore {
    async fn insert(&self, record: &TodoRecord) -> TodoRepositoryResult<TodoId> {
        let write_row = to_write_row(record);
        self.run_blocking(move |connection| {
            let id = diesel::insert_into(todos::table)
                .values(&write_row)
                .returning(todos::id)
                .get_result::<i64>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            Ok(TodoId::new(id))
        })
        .await
    }

    async fn update(&self, id: TodoId, record: &TodoRecord) -> TodoRepositoryResult<()> {
        let write_row = to_write_row(record);
        self.run_blocking(move |connection| {
            let updated = diesel::update(todos::table.find(id.value()))
                .set(&write_row)
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            if updated == 0 {
                return Err(TodoRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(todos::table.find(id.value()))
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(TodoRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_view(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        self.run_blocking(move |connection| {
            let row = todos::table
                .inner_join(users::table)
                .inner_join(statuses::table)
                .filter(todos::id.eq(id.value()))
                .select(VIEW_COLUMNS)
                .first::<TodoViewRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            Ok(row.map(row_to_todo))
        })
        .await
    }

    async fn list_views(&self) -> TodoRepositoryResult<Vec<Todo>> {
        self.run_blocking(move |connection| {
            let rows = todos::table
                .inner_join(users::table)
                .inner_join(statuses::table)
                .order(todos::id.asc())
                .select(VIEW_COLUMNS)
                .load::<TodoViewRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_todo).collect())
        })
        .await
    }

    async fn find_current_status(&self, id: TodoId) -> TodoRepositoryResult<Option<Status>> {
        self.run_blocking(move |connection| {
            let row = todos::table
                .inner_join(statuses::table)
                .filter(todos::id.eq(id.value()))
                .select(StatusRow::as_select())
                .first::<StatusRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            Ok(row.map(row_to_status))
        })
        .await
    }
}

fn row_to_user(row: UserRow) -> User {
    User::new(UserId::new(row.user_id), UserName::from_persisted(row.name))
}

fn row_to_status(row: StatusRow) -> Status {
    Status::new(StatusId::new(row.status_id), row.status_txt)
}

fn row_to_todo(row: TodoViewRow) -> Todo {
    Todo::from_projection(ProjectedTodoData {
        id: TodoId::new(row.id),
        title: row.title,
        description: row.description,
        due_date: DueDate::from_date(row.due_date),
        person_in_charge: row.person_in_charge,
        status: row.status,
    })
}

fn to_write_row(record: &TodoRecord) -> TodoWriteRow {
    TodoWriteRow {
        title: record.title.clone(),
        description: record.description.clone(),
        due_date: record.due_date.into_inner(),
        person_in_charge: record.person_in_charge.value(),
        status: record.status.value(),
    }
}
