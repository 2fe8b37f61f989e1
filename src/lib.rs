pub mod cli;
pub mod db;
pub mod service;
