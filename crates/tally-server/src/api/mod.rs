//! Counter REST API.

pub mod counters;

pub use counters::{create_counter, delete_counter, read_counter, update_counter};
