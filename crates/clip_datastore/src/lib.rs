//! # DataStore Module
//!
//! This module provides functionality for persisting tracked YouTube
//! videos together with their generated summaries.
//!
//! The module uses sqlx for database operations and provides an
//! abstraction layer for CRUD operations on videos.

mod datastore;
mod domain;

pub use datastore::postgres::PgDataStore;
pub use datastore::DataStore;
pub use domain::Video;
