//! Schedule coverage engine for on-call schedules
//!
//! This crate turns raw shift, override and temporary-schedule records into
//! merged per-user shifts, calendar events, coverage gaps and day headings
//! split at local midnight in an explicit time zone, and summarizes weekly
//! schedule rules in a display zone.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
