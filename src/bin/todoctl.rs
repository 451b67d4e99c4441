//! Command-line front end for the todo tracker.
//!
//! Usage:
//!
//! ```text
//! todoctl [--database-url <url>] [--distinct-conflicts] todos list
//! todoctl todos create --title T --description D --due-date 2021-10-02 \
//!     --person-in-charge dwi --status New
//! todoctl todos update 7 --title T --description D --due-date 2021-10-02 \
//!     --person-in-charge dwi --status Done
//! todoctl users rename 3 dwi
//! todoctl statuses
//! ```
//!
//! Every command writes one JSON document to stdout: the returned data on
//! success, otherwise the outcome message. The exit code reports the
//! outcome class: 0 success, 1 server error, 2 not found, 3 conflict.

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;
use todos::boundary::{CollapsePolicy, Outcome, OutcomeClass};
use todos::config::{ConfigError, DATABASE_URL_VAR, StoreConfig};
use todos::store::postgres::PostgresStore;
use todos::telemetry::{self, TelemetryError};
use todos::todo::domain::TodoId;
use todos::todo::services::{TodoLifecycleError, TodoLifecycleService, TodoRequest};
use todos::user::domain::UserId;
use todos::user::services::UserDirectoryService;

/// Errors that stop the command before an outcome is produced.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] io::Error),
    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write response: {0}")]
    Write(#[source] io::Error),
}

#[derive(Debug, Parser)]
#[command(name = "todoctl", version, about = "Manage todos and the users in charge of them")]
struct Cli {
    /// `PostgreSQL` connection URL.
    #[arg(long, env = DATABASE_URL_VAR, hide_env_values = true)]
    database_url: Option<String>,

    /// Report updates on done or deleted todos as conflicts instead of
    /// not-found.
    #[arg(long)]
    distinct_conflicts: bool,

    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, default_value = "warn")]
    log: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Manage todos
    Todos {
        #[command(subcommand)]
        action: TodoCommand,
    },
    /// Manage users
    Users {
        #[command(subcommand)]
        action: UserCommand,
    },
    /// List the status vocabulary
    Statuses,
}

#[derive(Debug, Subcommand)]
enum TodoCommand {
    /// List every todo
    List,
    /// Show one todo
    Get { id: i64 },
    /// Create a todo
    Create(TodoFields),
    /// Overwrite a todo
    Update {
        id: i64,
        #[command(flatten)]
        fields: TodoFields,
    },
    /// Delete a todo
    Delete { id: i64 },
}

#[derive(Debug, Args)]
struct TodoFields {
    #[arg(long)]
    title: String,
    #[arg(long, default_value = "")]
    description: String,
    /// Due date as YYYY-MM-DD.
    #[arg(long)]
    due_date: String,
    /// Name of the user in charge.
    #[arg(long)]
    person_in_charge: String,
    /// Status text.
    #[arg(long, default_value = "New")]
    status: String,
}

impl From<TodoFields> for TodoRequest {
    fn from(fields: TodoFields) -> Self {
        Self::new(
            fields.title,
            fields.description,
            fields.due_date,
            fields.person_in_charge,
            fields.status,
        )
    }
}

#[derive(Debug, Subcommand)]
enum UserCommand {
    /// List every user
    List,
    /// Show one user
    Get { id: i32 },
    /// Create a user
    Create { name: String },
    /// Rename a user
    Rename { id: i32, name: String },
    /// Delete a user
    Delete { id: i32 },
}

/// Outcome and the JSON document written for it.
struct Reply {
    outcome: Outcome,
    body: Value,
}

impl Reply {
    fn message(outcome: Outcome) -> Self {
        let body = Value::String(outcome.message().unwrap_or_default().to_owned());
        Self { outcome, body }
    }

    fn render<T: Serialize, E>(
        result: Result<T, E>,
        classify: impl FnOnce(&E) -> Outcome,
    ) -> Result<Self, CliError> {
        match result {
            Ok(data) => Ok(Self {
                outcome: Outcome::success(),
                body: serde_json::to_value(data)?,
            }),
            Err(err) => Ok(Self::message(classify(&err))),
        }
    }

    fn render_deleted<E>(result: Result<(), E>, classify: impl FnOnce(&E) -> Outcome) -> Self {
        match result {
            Ok(()) => Self::message(Outcome::deleted()),
            Err(err) => Self::message(classify(&err)),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(class) => ExitCode::from(class.exit_code()),
        Err(err) => {
            writeln!(io::stderr().lock(), "todoctl: {err}").ok();
            ExitCode::from(OutcomeClass::ServerError.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<OutcomeClass, CliError> {
    telemetry::init(&cli.log)?;

    let config = match cli.database_url {
        Some(url) => StoreConfig::from_lookup(|name| {
            if name == DATABASE_URL_VAR {
                Some(url.clone())
            } else {
                std::env::var(name).ok()
            }
        })?,
        None => StoreConfig::from_env()?,
    };
    let policy = if cli.distinct_conflicts {
        CollapsePolicy::Distinct
    } else {
        CollapsePolicy::Reference
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::RuntimeInit)?;
    let store = Arc::new(PostgresStore::new(config.build_pool()?));
    let reply = runtime.block_on(dispatch(cli.command, store, policy))?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &reply.body)?;
    writeln!(stdout).map_err(CliError::Write)?;
    Ok(reply.outcome.class())
}

async fn dispatch(
    command: Command,
    store: Arc<PostgresStore>,
    policy: CollapsePolicy,
) -> Result<Reply, CliError> {
    let todos = TodoLifecycleService::from_store(Arc::clone(&store));
    let users = UserDirectoryService::new(store);
    let classify_todo = move |err: &TodoLifecycleError| Outcome::from_todo_error(err, policy);

    match command {
        Command::Todos { action } => match action {
            TodoCommand::List => Reply::render(todos.list_todos().await, classify_todo),
            TodoCommand::Get { id } => {
                Reply::render(todos.get_todo(TodoId::new(id)).await, classify_todo)
            }
            TodoCommand::Create(fields) => {
                Reply::render(todos.create_todo(fields.into()).await, classify_todo)
            }
            TodoCommand::Update { id, fields } => Reply::render(
                todos.update_todo(TodoId::new(id), fields.into()).await,
                classify_todo,
            ),
            TodoCommand::Delete { id } => Ok(Reply::render_deleted(
                todos.delete_todo(TodoId::new(id)).await,
                classify_todo,
            )),
        },
        Command::Users { action } => match action {
            UserCommand::List => Reply::render(users.list_users().await, Outcome::from_user_error),
            UserCommand::Get { id } => {
                Reply::render(users.get_user(UserId::new(id)).await, Outcome::from_user_error)
            }
            UserCommand::Create { name } => {
                Reply::render(users.create_user(name).await, Outcome::from_user_error)
            }
            UserCommand::Rename { id, name } => Reply::render(
                users.rename_user(UserId::new(id), name).await,
                Outcome::from_user_error,
            ),
            UserCommand::Delete { id } => Ok(Reply::render_deleted(
                users.delete_user(UserId::new(id)).await,
                Outcome::from_user_error,
            )),
        },
        Command::Statuses => Reply::render(todos.list_statuses().await, classify_todo),
    }
}
