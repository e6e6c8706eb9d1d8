//! Payroll wage engine for small-business schedules
//!
//! This crate turns weekly clock-in/clock-out schedules and per-employee pay
//! settings into worked hours, a regular/overtime split and daily pay, and
//! aggregates the results into week, employee and monthly statistics.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
