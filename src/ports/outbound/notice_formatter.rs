use crate::application::read_models::NoticeReadModel;
use crate::shared::Result;

/// NoticeFormatter port for rendering a license notice
///
/// This port abstracts the layout of the notice so the use case only deals
/// with the read model.
pub trait NoticeFormatter {
    /// Renders the complete notice text
    ///
    /// # Arguments
    /// * `model` - Application name, data source, timestamp and the sorted
    ///   library components
    fn format(&self, model: &NoticeReadModel) -> Result<String>;
}
