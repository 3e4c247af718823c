use owo_colors::OwoColorize;
use sbom_notice::adapters::outbound::console::StderrProgressReporter;
use sbom_notice::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
use sbom_notice::adapters::outbound::formatters::PlainTextNoticeFormatter;
use sbom_notice::adapters::outbound::network::ScaClient;
use sbom_notice::application::dto::{
    ExportOutcome, NoticeRequest, SearchRequest, SearchResponse,
};
use sbom_notice::application::use_cases::{GenerateNoticeUseCase, SearchComponentsUseCase};
use sbom_notice::cli::{Args, Command, NoticeArgs, SearchArgs};
use sbom_notice::config::{discover_config, load_config_from_path, ConfigFile};
use sbom_notice::logging;
use sbom_notice::shared::error::{ExitCode, SbomError};
use sbom_notice::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

/// Directory notices are written to and `ALL` expands against by default
const CURRENT_DIR: &str = ".";

fn main() {
    let args = Args::parse_args();
    logging::init(args.verbose);

    let exit_code = match run(args) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            exit_code_for(&e)
        }
    };

    process::exit(exit_code.as_i32());
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Notice(notice_args) => run_notice(notice_args, &config),
        Command::Search(search_args) => run_search(search_args, &config),
    }
}

/// Explicit `--config` must exist; otherwise the working directory is probed
fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => load_config_from_path(path),
        None => Ok(discover_config(Path::new(CURRENT_DIR))?.unwrap_or_default()),
    }
}

fn run_notice(args: NoticeArgs, config: &ConfigFile) -> Result<()> {
    let output_dir = args
        .output_dir
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from(CURRENT_DIR));

    let request = match (&args.app_name, &args.sbom_file) {
        (Some(app_name), _) => NoticeRequest::from_application(app_name, output_dir),
        (None, Some(sbom_file)) => NoticeRequest::from_sbom_file(sbom_file, output_dir),
        (None, None) => {
            return Err(SbomError::Validation {
                message: "Either --app-name or --sbom-file is required.".to_string(),
            }
            .into())
        }
    };

    // The service client is only needed for application lookups
    let service_url = args.service_url.or_else(|| config.service_url.clone());
    let repository = match (&args.app_name, service_url) {
        (Some(_), Some(url)) => {
            let timeout = args
                .timeout
                .or(config.timeout_secs)
                .unwrap_or(ScaClient::DEFAULT_TIMEOUT_SECONDS);
            Some(ScaClient::new(&url, args.api_token, timeout)?)
        }
        _ => None,
    };

    let use_case = GenerateNoticeUseCase::new(
        FileSystemReader::new(),
        repository,
        PlainTextNoticeFormatter::new(),
        FileSystemWriter::new(),
        StderrProgressReporter::new(),
    );

    let response = use_case.execute(request)?;
    eprintln!(
        "📊 {} library component(s) listed",
        response.component_count
    );
    println!(
        "{} Created file \"{}\"",
        "Success!".green().bold(),
        response.output_path.display()
    );

    Ok(())
}

fn run_search(args: SearchArgs, config: &ConfigFile) -> Result<()> {
    let request = SearchRequest::builder()
        .selectors(args.selectors())
        .term(args.component.as_str())
        .csv_output(args.csv.or_else(|| config.csv_output.clone()))
        .working_dir(PathBuf::from(CURRENT_DIR))
        .build()?;

    let use_case = SearchComponentsUseCase::new(
        FileSystemReader::new(),
        FileSystemWriter::new(),
        StderrProgressReporter::new(),
    );

    let response = use_case.execute(request)?;
    print_search_summary(&response);

    Ok(())
}

fn print_search_summary(response: &SearchResponse) {
    let summary = &response.summary;
    if !summary.skipped().is_empty() {
        eprintln!(
            "{}",
            format!("⚠️  {} file(s) skipped", summary.skipped().len()).yellow()
        );
    }

    match &response.export {
        ExportOutcome::NotRequested => {}
        ExportOutcome::NoMatches => eprintln!("ℹ️  No matches found, CSV file not written"),
        ExportOutcome::Written(path) => {
            eprintln!("📄 Matches exported to: {}", path.display())
        }
        ExportOutcome::Failed { path, reason } => eprintln!(
            "{}",
            format!(
                "⚠️  Warning: Could not export matches to {}:\n{}",
                path.display(),
                reason
            )
            .yellow()
        ),
    }

    println!(
        "Done. Found {} instance(s) in {} file(s).",
        summary.overall_count(),
        summary.files_processed()
    );
}

/// Argument-level validation failures share clap's exit code
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<SbomError>() {
        Some(SbomError::Validation { .. }) => ExitCode::InvalidArguments,
        _ => ExitCode::ApplicationError,
    }
}
