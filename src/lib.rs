//! Staffing Savings Engine
//!
//! This crate estimates the three-year savings a health system or hospital
//! realizes by replacing agency nurse labor with program-trained staff. It
//! loads the health-system and hospital reference tables, evaluates the
//! standard or alternate savings formula for a selected organization, and
//! serves the results over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod models;
pub mod session;
