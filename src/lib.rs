//! Work-time criteria definition
//!
//! This crate models the wizard an operator walks through to define how
//! worked minutes are counted: base work plus the optional early, overtime,
//! night and holiday categories. A finished draft is compiled into a
//! classified, tagged criteria record and stored in a registry.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod wizard;
