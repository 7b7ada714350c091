//! Types shared by the relay (`backend`) and the browser client (`frontend`).
//!
//! Everything that crosses the wire lives here so both sides serialize the
//! same shapes: the analysis result returned by `POST /analyze-crop`, the scan
//! records kept by the history store, and the data-URI encoding used to ship
//! photos inside JSON bodies.

pub mod encoding;
pub mod model;
pub mod requests;
