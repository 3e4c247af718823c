//! Read models for CQRS-lite pattern
//!
//! View-optimized structs handed to the formatters.

pub mod notice_read_model;

pub use notice_read_model::{NoticeBody, NoticeReadModel, NoticeReadModelBuilder};
