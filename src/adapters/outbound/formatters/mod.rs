/// Formatter adapters for report output
mod plain_text_notice_formatter;

pub use plain_text_notice_formatter::{PlainTextNoticeFormatter, NO_COMPONENTS_LINE};
