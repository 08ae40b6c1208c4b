//! # Blog Shared
//!
//! Request/response types shared between the API server and any client.

pub mod dto;
pub mod response;

pub use response::Envelope;
