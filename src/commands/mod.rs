//! Task Endpoint Bindings
//!
//! Frontend bindings to the server's task routes.

mod task;

pub use task::*;
