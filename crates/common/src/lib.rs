//! Pieces shared by every crate of the workspace: wire types that are not
//! tied to an entity, and the tracing subscriber setup.

pub mod types;
pub mod utils;
