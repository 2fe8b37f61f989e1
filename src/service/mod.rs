//! Service layer between the console and the data access layer.

mod project;


pub use project::ProjectService;
