//! Enrollment Pricing Engine
//!
//! This crate prices course enrollments for a language-school storefront:
//! it derives a total from a course offering and a user's selection through an
//! ordered chain of surcharges, discounts and flat fees, and builds the order
//! payload that the storefront submits.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
