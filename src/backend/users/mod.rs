//! Users Module
//!
//! Profile listing, search, read, create, update and delete.

pub mod db;
pub mod handlers;
pub mod types;

pub use handlers::*;
