//! dbprobe - Postgres connectivity probe with an HTTP confirmation endpoint
//!
//! This library exposes the core modules for testing and reuse.

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
