#![recursion_limit = "256"]

pub mod access;
pub mod cli;
pub mod config;
pub mod database;
pub mod entities;
pub mod payload;
pub mod schema_store;
pub mod seed;
