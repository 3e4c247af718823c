use crate::application::read_models::{NoticeBody, NoticeReadModel};
use crate::ports::outbound::NoticeFormatter;
use crate::sbom_processing::domain::Component;
use crate::shared::Result;

/// Column widths: component name, version, license, license reference
const NAME_WIDTH: usize = 50;
const VERSION_WIDTH: usize = 25;
const LICENSE_WIDTH: usize = 30;
const REFERENCE_WIDTH: usize = 80;

const BANNER: [&str; 9] = [
    "==============================================================================",
    "==                       OPEN SOURCE LICENSE NOTICE                         ==",
    "==                                                                          ==",
    "==   This application uses open source software (OSS). The OSS components   ==",
    "==   are used in accordance with the terms and conditions of the license    ==",
    "==   under which the component is distributed. A list of components and     ==",
    "==   their corresponding license(s) is provided below.                      ==",
    "==                                                                          ==",
    "==============================================================================",
];

const COLUMN_TITLES: [&str; 4] = ["OSS COMPONENT NAME", "VERSION", "LICENSE", "LICENSE REFERENCE"];

/// Body line used when the SBOM lists no components at all
pub const NO_COMPONENTS_LINE: &str = "No open source components.";

/// PlainTextNoticeFormatter adapter for the fixed-width license notice
///
/// Every column is left-justified and padded to its width. Name, version
/// and license values are cut to one less than their width so a column
/// never runs into the next one.
pub struct PlainTextNoticeFormatter;

impl PlainTextNoticeFormatter {
    pub fn new() -> Self {
        Self
    }

    fn truncate(value: &str, width: usize) -> String {
        value.chars().take(width.saturating_sub(1)).collect()
    }

    fn render_header(&self, output: &mut String, model: &NoticeReadModel) {
        for line in BANNER {
            output.push_str(line);
            output.push('\n');
        }
        output.push('\n');
        output.push_str(&format!("APPLICATION NAME: {}\n", model.app_name));
        output.push_str(&format!("DATA SOURCE:      {}\n", model.data_source));
        output.push_str(&format!("GENERATED:        {}\n", model.generated_at));
        output.push('\n');
    }

    fn render_column_titles(&self, output: &mut String) {
        let [name, version, license, reference] = COLUMN_TITLES;
        output.push_str(&Self::columns(name, version, license, reference));
        output.push_str(&Self::columns(
            &"=".repeat(name.len()),
            &"=".repeat(version.len()),
            &"=".repeat(license.len()),
            &"=".repeat(reference.len()),
        ));
    }

    fn render_component(&self, output: &mut String, component: &Component) {
        let name = Self::truncate(component.name(), NAME_WIDTH);
        let version = Self::truncate(component.version(), VERSION_WIDTH);
        output.push_str(&format!(
            "{:<name_w$}{:<version_w$}",
            name,
            version,
            name_w = NAME_WIDTH,
            version_w = VERSION_WIDTH
        ));

        if component.licenses().is_empty() {
            output.push('\n');
            return;
        }

        for (index, license) in component.licenses().iter().enumerate() {
            if index > 0 {
                // Continuation rows keep the name and version columns blank
                output.push_str(&format!(
                    "{:<name_w$}{:<version_w$}",
                    " ",
                    " ",
                    name_w = NAME_WIDTH,
                    version_w = VERSION_WIDTH
                ));
            }
            output.push_str(&format!(
                "{:<license_w$}{:<reference_w$}\n",
                Self::truncate(license.name(), LICENSE_WIDTH),
                license.url(),
                license_w = LICENSE_WIDTH,
                reference_w = REFERENCE_WIDTH
            ));
        }
    }

    fn columns(name: &str, version: &str, license: &str, reference: &str) -> String {
        format!(
            "{:<name_w$}{:<version_w$}{:<license_w$}{:<reference_w$}\n",
            name,
            version,
            license,
            reference,
            name_w = NAME_WIDTH,
            version_w = VERSION_WIDTH,
            license_w = LICENSE_WIDTH,
            reference_w = REFERENCE_WIDTH
        )
    }
}

impl Default for PlainTextNoticeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeFormatter for PlainTextNoticeFormatter {
    fn format(&self, model: &NoticeReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model);
        self.render_column_titles(&mut output);

        match &model.body {
            NoticeBody::NoComponents => {
                output.push_str(NO_COMPONENTS_LINE);
                output.push('\n');
            }
            NoticeBody::Components(components) => {
                for component in components {
                    self.render_component(&mut output, component);
                }
            }
        }

        Ok(output)
    }
}
