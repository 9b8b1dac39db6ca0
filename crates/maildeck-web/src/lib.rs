//! maildeck-web — Web front end for the content backend.
//! Provides:
//!   - Content dashboard (card grid of ingested messages)
//!   - Search form (keywords, date range, category, source)
//!   - Content detail pages
//!   - `/api/proxy/{*path}` reverse relay onto the configured backend
//!   - Deploy diagnostics endpoints

pub mod handlers;
pub mod router;
pub mod state;
