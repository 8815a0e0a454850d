//! Project module

mod api;
mod models;

pub use models::{Project, ProjectNamespace};
