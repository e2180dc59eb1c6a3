//! HTTP fetch layer for the skopos prober

pub mod client;
pub use client::{HttpClient, Method};
