pub mod cache;
pub mod database;
pub mod remote;
pub mod repositories;
pub mod time;
