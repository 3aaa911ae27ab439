//! HTTP responses for the statistics server.
//!
//! - [`json`]: the statistics as a JSON document.
//! - [`html`]: the statistics as an HTML page.
pub mod html;
pub mod json;
