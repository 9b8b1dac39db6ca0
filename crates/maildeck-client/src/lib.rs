//! maildeck-client — Typed client for the content backend API.
//!
//! Wraps the three backend calls (list all, get by id, filtered search)
//! behind `reqwest` with a fixed request timeout. Each call is a single
//! best-effort request: no retry, no backoff, no caching.

pub mod api;

pub use api::ContentApi;
