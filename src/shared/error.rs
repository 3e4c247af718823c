use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish argument mistakes from
/// failures while loading, validating or writing SBOM data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - notice written or search completed
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (load, validation, remote service or file I/O error)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for SBOM loading, validation and reporting.
///
/// Loader and validator failures are the only places where raw faults
/// (I/O, UTF-8, serde) become typed errors; everything above propagates
/// them unchanged.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("SBOM file not found: {path}\n\n💡 Hint: That file doesn't seem to exist. Please check the path and try again")]
    SbomNotFound { path: PathBuf },

    #[error("SBOM contains invalid UTF-8: {source_name}\nDetails: {details}\n\n💡 Hint: Please make sure it's a CycloneDX-compliant SBOM in JSON format")]
    SbomDecodeError {
        source_name: String,
        details: String,
    },

    #[error("SBOM is not valid JSON: {source_name}\nDetails: {details}\n\n💡 Hint: Please make sure it's a CycloneDX-compliant SBOM in JSON format")]
    MalformedJson {
        source_name: String,
        details: String,
    },

    #[error("'bomFormat' element not found in {source_name}\n\n💡 Hint: A CycloneDX SBOM in JSON format is required")]
    MissingFormatField { source_name: String },

    #[error("'bomFormat' in {source_name} is '{found}', not 'CycloneDX' as expected\n\n💡 Hint: Only CycloneDX SBOMs in JSON format are supported")]
    UnsupportedFormat { source_name: String, found: String },

    #[error("Application '{name}' was not found in the SCA service\n\n💡 Hint: Check the spelling; application names must match exactly")]
    ApplicationNotFound { name: String },

    #[error("Failed to generate the SBOM for application {app_id}\nDetails: {details}\n\n💡 Hint: Do SCA results exist for this application? An SCA scan needs to have been done in the last 13 months")]
    SbomGenerationFailed { app_id: String, details: String },

    #[error("SCA service unavailable: {details}\n\n💡 Hint: Check the service URL, your credentials and your network connection")]
    ServiceUnavailable { details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    /// Validation error for requests and builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
