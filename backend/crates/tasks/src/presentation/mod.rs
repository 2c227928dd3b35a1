//! Presentation Layer
//!
//! HTML handlers, forms, and router. All routes sit behind the session
//! gate from the auth crate.

pub mod forms;
pub mod handlers;
pub mod router;

pub use handlers::TasksAppState;
pub use router::{tasks_router, tasks_router_generic};
