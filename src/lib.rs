//! Activity Engine for daily employee work records
//!
//! This crate classifies per-employee daily activity records (voice time, CRM
//! time, daily reports, leave and pay rate) into a single status per day,
//! and summarizes employees over day, week, month or all-time ranges.

#![warn(missing_docs)]

pub mod api;
pub mod classification;
pub mod config;
pub mod error;
pub mod models;
