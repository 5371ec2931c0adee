//! Career Pathway browser front end.
//!
//! Serves a single-page form and one JSON endpoint that runs the pathway
//! generator with the API key submitted alongside each request.

pub mod api;

pub use api::{configure, run_server, AppState};
