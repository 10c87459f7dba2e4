//! Argument validation: single-field validators and per-command schemas

pub mod fields;
mod schema;

pub use schema::Schema;
