//! HTTP handlers for all web routes.

pub mod content;
pub mod dashboard;
pub mod diag;
pub mod proxy;
pub mod search;
