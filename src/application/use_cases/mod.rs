/// Use cases module containing application business logic orchestration
mod generate_notice;
mod search_components;

pub use generate_notice::GenerateNoticeUseCase;
pub use search_components::SearchComponentsUseCase;
