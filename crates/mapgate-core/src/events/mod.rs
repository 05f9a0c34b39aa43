//! Run event system: a handler trait with no-op defaults and a synchronous
//! dispatcher the execution coordinator emits into.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::RunEventHandler;
pub use types::*;
