//! Attendance engine for an employee time-clock.
//!
//! This crate turns raw Enter/Leave punches into attendance reports: worked
//! hours per day and per Enter/Leave pair, each rounded to quarter hours with
//! the rounding error carried forward for payroll. It also provides CSV
//! exports and a small HTTP API around those reports.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
