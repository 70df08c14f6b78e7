//! Stackfall (workspace facade crate).
//!
//! The rule engine, input mapping, terminal renderer and high-score store
//! live in dedicated crates under `crates/`; this package re-exports them as
//! `stackfall::{core,input,term,store,types}` and owns the runtime config.

pub mod config;

pub use stackfall_core as core;
pub use stackfall_input as input;
pub use stackfall_store as store;
pub use stackfall_term as term;
pub use stackfall_types as types;
