/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod notice_request;
mod notice_response;
mod search_request;
mod search_response;

pub use notice_request::{NoticeRequest, NoticeSource};
pub use notice_response::NoticeResponse;
pub use search_request::{FileSelector, SearchRequest, SearchRequestBuilder};
pub use search_response::{ExportOutcome, SearchResponse};
