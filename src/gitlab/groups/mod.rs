//! Group module

mod api;
mod models;

pub use models::Group;
