//! Application services for todo lifecycle orchestration.

mod lifecycle;
mod lookup;

pub use lifecycle::{TodoLifecycleError, TodoLifecycleResult, TodoLifecycleService, TodoRequest};
pub use lookup::{LookupError, LookupResolver, LookupResult, StatusResolution};
