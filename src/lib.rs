//! Schema Inspector Library
//!
//! Connects to a PostgreSQL database and lists the columns of one table, in
//! ordinal position order, from `information_schema.columns`.
//!
//! # Modules
//!
//! - `config`: Configuration management (environment and `.env`).
//! - `db`: Single-connection lifecycle.
//! - `errors`: Error handling types.
//! - `inspector`: Catalog queries.
//! - `models`: Column and table descriptors.
//! - `report`: Plain-text output.

pub mod config;
pub mod db;
pub mod errors;
pub mod inspector;
pub mod models;
pub mod report;
