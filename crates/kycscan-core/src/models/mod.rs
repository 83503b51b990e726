//! Data models for extracted records, submissions and configuration.

pub mod config;
pub mod record;
pub mod submission;
