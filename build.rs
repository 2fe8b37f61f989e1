//! Build script for the embedded schema.
//!
//! `sqlx::migrate!` embeds the SQL files at compile time, so cargo has to be
//! told to rebuild when one of them changes.

fn main() {
    println!("cargo:rerun-if-changed=data/sql/sqlite");
}
