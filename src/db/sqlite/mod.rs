//! SQLite implementation of the database traits.

mod connection;
mod project;


pub use connection::SqliteDatabase;
pub use project::SqliteProjectRepository;
