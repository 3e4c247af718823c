/// Integration tests for the application layer
mod test_utilities;

use sbom_notice::prelude::*;
use sbom_notice::shared::error::SbomError;
use serde_json::json;
use std::path::PathBuf;
use test_utilities::mocks::*;

const TWO_LIBRARIES: &str = r#"{
    "bomFormat": "CycloneDX",
    "metadata": {"component": {"name": "Shop:API"}},
    "components": [
        {"type": "library", "name": "libfoo", "version": "1.2",
         "licenses": [{"license": {"id": "MIT"}}]},
        {"type": "library", "name": "Libbar", "version": "2.0"},
        {"type": "framework", "name": "libframe", "version": "3.1"}
    ]
}"#;

fn notice_use_case(
    reader: MockSbomReader,
    repository: Option<MockSbomRepository>,
    sink: MockReportSink,
    reporter: MockProgressReporter,
) -> GenerateNoticeUseCase<
    MockSbomReader,
    MockSbomRepository,
    PlainTextNoticeFormatter,
    MockReportSink,
    MockProgressReporter,
> {
    GenerateNoticeUseCase::new(
        reader,
        repository,
        PlainTextNoticeFormatter::new(),
        sink,
        reporter,
    )
}

fn search_request(files: &[&str], term: &str, csv: Option<&str>) -> SearchRequest {
    SearchRequest::builder()
        .selectors(files.iter().map(|f| FileSelector::parse(f)))
        .term(term)
        .csv_output(csv.map(PathBuf::from))
        .working_dir(PathBuf::from("/sboms"))
        .build()
        .unwrap()
}

// ============================================================================
// Notice generation
// ============================================================================

#[test]
fn test_notice_from_local_file() {
    let reader = MockSbomReader::new().with_file("bom.json", TWO_LIBRARIES);
    let sink = MockReportSink::new();
    let reporter = MockProgressReporter::new();
    let use_case = notice_use_case(reader, None, sink.clone(), reporter.clone());

    let response = use_case
        .execute(NoticeRequest::from_sbom_file("bom.json", PathBuf::from("out")))
        .unwrap();

    assert_eq!(response.filename, "ShopAPI_notice.txt");
    assert_eq!(response.output_path, PathBuf::from("out/ShopAPI_notice.txt"));
    assert_eq!(response.component_count, 2);

    let notices = sink.written_notices();
    assert_eq!(notices.len(), 1);
    let (path, content) = &notices[0];
    assert_eq!(path, &PathBuf::from("out/ShopAPI_notice.txt"));
    assert!(content.contains("APPLICATION NAME: ShopAPI"));
    assert!(content.contains("DATA SOURCE:      local SBOM file"));

    let libbar = content.find("Libbar").unwrap();
    let libfoo = content.find("libfoo").unwrap();
    assert!(libbar < libfoo);
    assert!(!content.contains("libframe"));

    assert!(reporter.has_message_containing("Loading the SBOM from: bom.json"));
}

#[test]
fn test_notice_without_components() {
    let reader = MockSbomReader::new().with_file("bom.json", r#"{"bomFormat":"cyclonedx"}"#);
    let sink = MockReportSink::new();
    let use_case = notice_use_case(reader, None, sink.clone(), MockProgressReporter::new());

    let response = use_case
        .execute(NoticeRequest::from_sbom_file("bom.json", PathBuf::from(".")))
        .unwrap();

    assert_eq!(response.filename, "APPLICATION_notice.txt");
    assert_eq!(response.component_count, 0);
    let content = &sink.written_notices()[0].1;
    assert!(content.ends_with("No open source components.\n"));
}

#[test]
fn test_notice_rejects_unsupported_format() {
    let reader = MockSbomReader::new().with_file("bom.json", r#"{"bomFormat":"SPDX"}"#);
    let sink = MockReportSink::new();
    let use_case = notice_use_case(reader, None, sink.clone(), MockProgressReporter::new());

    let err = use_case
        .execute(NoticeRequest::from_sbom_file("bom.json", PathBuf::from(".")))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SbomError>(),
        Some(SbomError::UnsupportedFormat { .. })
    ));
    assert!(sink.written_notices().is_empty());
}

#[test]
fn test_notice_missing_file() {
    let sink = MockReportSink::new();
    let use_case = notice_use_case(
        MockSbomReader::new(),
        None,
        sink.clone(),
        MockProgressReporter::new(),
    );

    let err = use_case
        .execute(NoticeRequest::from_sbom_file("missing.json", PathBuf::from(".")))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SbomError>(),
        Some(SbomError::SbomNotFound { .. })
    ));
    assert!(sink.written_notices().is_empty());
}

#[test]
fn test_notice_write_failure_is_fatal() {
    let reader = MockSbomReader::new().with_file("bom.json", TWO_LIBRARIES);
    let use_case = notice_use_case(
        reader,
        None,
        MockReportSink::failing(),
        MockProgressReporter::new(),
    );

    let err = use_case
        .execute(NoticeRequest::from_sbom_file("bom.json", PathBuf::from(".")))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SbomError>(),
        Some(SbomError::FileWriteError { .. })
    ));
}

#[test]
fn test_notice_from_service() {
    let document = json!({
        "bomFormat": "CycloneDX",
        "metadata": {"component": {"name": "Shop"}},
        "components": [
            {"type": "library", "name": "openssl", "version": "3.0.1",
             "licenses": [{"license": {"name": "Apache License 2.0",
                                       "url": "https://www.apache.org/licenses/LICENSE-2.0"}}]}
        ]
    });
    let repository = MockSbomRepository::new()
        .with_application("guid-2", "Shop API", None)
        .with_application("guid-1", "Shop", Some(document));
    let sink = MockReportSink::new();
    let reporter = MockProgressReporter::new();
    let use_case = notice_use_case(
        MockSbomReader::new(),
        Some(repository.clone()),
        sink.clone(),
        reporter.clone(),
    );

    let response = use_case
        .execute(NoticeRequest::from_application(" Shop ", PathBuf::from(".")))
        .unwrap();

    assert_eq!(response.filename, "Shop_notice.txt");
    assert_eq!(repository.lookup_names(), vec!["Shop".to_string()]);
    assert!(reporter.has_message_containing("Application ID is: guid-1"));

    let content = &sink.written_notices()[0].1;
    assert!(content.contains("DATA SOURCE:      remote SCA/SBOM service"));
    assert!(content.contains("Apache License 2.0"));
    assert!(content.contains("https://www.apache.org/licenses/LICENSE-2.0"));
}

#[test]
fn test_notice_application_not_found_requires_exact_name() {
    let repository = MockSbomRepository::new().with_application("guid-2", "Shop API", None);
    let sink = MockReportSink::new();
    let use_case = notice_use_case(
        MockSbomReader::new(),
        Some(repository),
        sink.clone(),
        MockProgressReporter::new(),
    );

    let err = use_case
        .execute(NoticeRequest::from_application("Shop", PathBuf::from(".")))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SbomError>(),
        Some(SbomError::ApplicationNotFound { .. })
    ));
    assert!(sink.written_notices().is_empty());
}

#[test]
fn test_notice_sbom_generation_failed() {
    let repository = MockSbomRepository::new().with_application("guid-1", "Shop", None);
    let use_case = notice_use_case(
        MockSbomReader::new(),
        Some(repository),
        MockReportSink::new(),
        MockProgressReporter::new(),
    );

    let err = use_case
        .execute(NoticeRequest::from_application("Shop", PathBuf::from(".")))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SbomError>(),
        Some(SbomError::SbomGenerationFailed { .. })
    ));
}

#[test]
fn test_notice_remote_payload_not_json() {
    let repository = MockSbomRepository::new().with_raw_sbom("guid-1", "Shop", b"{ not json");
    let sink = MockReportSink::new();
    let use_case = notice_use_case(
        MockSbomReader::new(),
        Some(repository),
        sink.clone(),
        MockProgressReporter::new(),
    );

    let err = use_case
        .execute(NoticeRequest::from_application("Shop", PathBuf::from(".")))
        .unwrap_err();

    match err.downcast_ref::<SbomError>() {
        Some(SbomError::MalformedJson { source_name, .. }) => {
            assert_eq!(source_name, "SBOM of application 'Shop'")
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(sink.written_notices().is_empty());
}

#[test]
fn test_notice_remote_payload_not_utf8() {
    let repository = MockSbomRepository::new().with_raw_sbom("guid-1", "Shop", &[0xff, 0xfe, b'{']);
    let use_case = notice_use_case(
        MockSbomReader::new(),
        Some(repository),
        MockReportSink::new(),
        MockProgressReporter::new(),
    );

    let err = use_case
        .execute(NoticeRequest::from_application("Shop", PathBuf::from(".")))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SbomError>(),
        Some(SbomError::SbomDecodeError { .. })
    ));
}

#[test]
fn test_notice_remote_payload_with_byte_order_mark() {
    let mut body = "\u{feff}".as_bytes().to_vec();
    body.extend_from_slice(br#"{"bomFormat":"CycloneDX","metadata":{"component":{"name":"Shop"}}}"#);
    let repository = MockSbomRepository::new().with_raw_sbom("guid-1", "Shop", &body);
    let use_case = notice_use_case(
        MockSbomReader::new(),
        Some(repository),
        MockReportSink::new(),
        MockProgressReporter::new(),
    );

    let response = use_case
        .execute(NoticeRequest::from_application("Shop", PathBuf::from(".")))
        .unwrap();

    assert_eq!(response.filename, "Shop_notice.txt");
}

#[test]
fn test_notice_service_unavailable() {
    let use_case = notice_use_case(
        MockSbomReader::new(),
        Some(MockSbomRepository::new().unavailable()),
        MockReportSink::new(),
        MockProgressReporter::new(),
    );

    let err = use_case
        .execute(NoticeRequest::from_application("Shop", PathBuf::from(".")))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SbomError>(),
        Some(SbomError::ServiceUnavailable { .. })
    ));
}

#[test]
fn test_notice_from_service_without_url_configured() {
    let use_case = notice_use_case(
        MockSbomReader::new(),
        None,
        MockReportSink::new(),
        MockProgressReporter::new(),
    );

    let err = use_case
        .execute(NoticeRequest::from_application("Shop", PathBuf::from(".")))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SbomError>(),
        Some(SbomError::Validation { .. })
    ));
}

// ============================================================================
// Component search
// ============================================================================

#[test]
fn test_search_skips_failing_file() {
    let reader = MockSbomReader::new()
        .with_file("/sboms/a.json", TWO_LIBRARIES)
        .with_file("/sboms/b.json", "{ not json");
    let sink = MockReportSink::new();
    let reporter = MockProgressReporter::new();
    let use_case = SearchComponentsUseCase::new(reader, sink.clone(), reporter.clone());

    let response = use_case
        .execute(search_request(&["/sboms/a.json", "/sboms/b.json"], "lib", None))
        .unwrap();

    // libfoo and Libbar and libframe all contain "lib"
    assert_eq!(response.summary.overall_count(), 3);
    assert_eq!(response.summary.files_processed(), 1);
    assert_eq!(response.summary.skipped().len(), 1);
    assert_eq!(
        response.summary.skipped()[0].path,
        PathBuf::from("/sboms/b.json")
    );
    assert_eq!(response.export, ExportOutcome::NotRequested);
    assert!(sink.written_tables().is_empty());

    assert!(reporter.has_message_containing("Skipping b.json"));
    assert!(reporter
        .has_message_containing("Match: Found match: libfoo, Version: 1.2, Component type: library"));
}

#[test]
fn test_search_two_matches_one_broken_file_exports_csv() {
    let reader = MockSbomReader::new()
        .with_file(
            "/sboms/a.json",
            r#"{"bomFormat":"CycloneDX","components":[
                {"type":"library","name":"libfoo","version":"1.2"},
                {"type":"library","name":"zlib","version":"1.3"},
                {"type":"library","name":"serde","version":"1.0"}
            ]}"#,
        )
        .with_bytes("/sboms/b.json", &[0xff, 0xfe, 0x00]);
    let sink = MockReportSink::new();
    let use_case = SearchComponentsUseCase::new(reader, sink.clone(), MockProgressReporter::new());

    let response = use_case
        .execute(search_request(
            &["/sboms/a.json", "/sboms/b.json"],
            "lib",
            Some("/out/matches.csv"),
        ))
        .unwrap();

    assert_eq!(response.summary.overall_count(), 2);
    assert_eq!(response.summary.files_processed(), 1);
    assert_eq!(
        response.export,
        ExportOutcome::Written(PathBuf::from("/out/matches.csv"))
    );

    let tables = sink.written_tables();
    assert_eq!(tables.len(), 1);
    let rows = &tables[0].1;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].source_file, "a.json");
    assert_eq!(rows[0].component_name, "libfoo");
    assert_eq!(rows[1].component_name, "zlib");
}

#[test]
fn test_search_no_matches_skips_export() {
    let reader = MockSbomReader::new().with_file("/sboms/a.json", TWO_LIBRARIES);
    let sink = MockReportSink::new();
    let use_case = SearchComponentsUseCase::new(reader, sink.clone(), MockProgressReporter::new());

    let response = use_case
        .execute(search_request(&["/sboms/a.json"], "openssl", Some("out.csv")))
        .unwrap();

    assert_eq!(response.summary.overall_count(), 0);
    assert_eq!(response.summary.files_processed(), 1);
    assert_eq!(response.export, ExportOutcome::NoMatches);
    assert!(sink.written_tables().is_empty());
}

#[test]
fn test_search_export_failure_is_not_fatal() {
    let reader = MockSbomReader::new().with_file("/sboms/a.json", TWO_LIBRARIES);
    let use_case = SearchComponentsUseCase::new(
        reader,
        MockReportSink::failing(),
        MockProgressReporter::new(),
    );

    let response = use_case
        .execute(search_request(&["/sboms/a.json"], "LIBFOO", Some("out.csv")))
        .unwrap();

    assert_eq!(response.summary.overall_count(), 1);
    assert!(matches!(response.export, ExportOutcome::Failed { .. }));
}

#[test]
fn test_search_all_expands_json_files() {
    let reader = MockSbomReader::new()
        .with_file("/sboms/a.json", TWO_LIBRARIES)
        .with_file("/sboms/b.JSON", TWO_LIBRARIES)
        .with_file("/sboms/notes.txt", "not an sbom")
        .with_file("/elsewhere/c.json", TWO_LIBRARIES);
    let use_case = SearchComponentsUseCase::new(
        reader.clone(),
        MockReportSink::new(),
        MockProgressReporter::new(),
    );

    let response = use_case
        .execute(search_request(&["ALL", "/sboms/a.json"], "libbar", None))
        .unwrap();

    assert_eq!(response.summary.files_processed(), 2);
    assert_eq!(response.summary.overall_count(), 2);
    assert_eq!(
        reader.read_paths(),
        vec![PathBuf::from("/sboms/a.json"), PathBuf::from("/sboms/b.JSON")]
    );
}

#[test]
fn test_search_explicit_file_and_all_search_it_once() {
    let reader = MockSbomReader::new()
        .with_file("a.json", TWO_LIBRARIES)
        .with_file("./a.json", TWO_LIBRARIES);
    let use_case = SearchComponentsUseCase::new(
        reader.clone(),
        MockReportSink::new(),
        MockProgressReporter::new(),
    );
    let request = SearchRequest::builder()
        .selectors(["a.json", "ALL", "./a.json"].iter().map(|f| FileSelector::parse(f)))
        .term("libfoo")
        .working_dir(PathBuf::from("."))
        .build()
        .unwrap();

    let response = use_case.execute(request).unwrap();

    assert_eq!(response.summary.files_processed(), 1);
    assert_eq!(response.summary.overall_count(), 1);
    assert_eq!(reader.read_paths(), vec![PathBuf::from("a.json")]);
}

#[test]
fn test_search_document_without_components() {
    let reader = MockSbomReader::new().with_file("/sboms/empty.json", r#"{"bomFormat":"CycloneDX"}"#);
    let reporter = MockProgressReporter::new();
    let use_case =
        SearchComponentsUseCase::new(reader, MockReportSink::new(), reporter.clone());

    let response = use_case
        .execute(search_request(&["/sboms/empty.json"], "lib", None))
        .unwrap();

    assert_eq!(response.summary.overall_count(), 0);
    assert_eq!(response.summary.files_processed(), 1);
    assert!(reporter.has_message_containing("empty.json contains no components"));
}

#[test]
fn test_search_rejects_invalid_format_per_file() {
    let reader = MockSbomReader::new()
        .with_file("/sboms/spdx.json", r#"{"spdxVersion":"SPDX-2.3"}"#)
        .with_file("/sboms/a.json", TWO_LIBRARIES);
    let use_case = SearchComponentsUseCase::new(
        reader,
        MockReportSink::new(),
        MockProgressReporter::new(),
    );

    let response = use_case
        .execute(search_request(&["/sboms/spdx.json", "/sboms/a.json"], "foo", None))
        .unwrap();

    assert_eq!(response.summary.files_processed(), 1);
    assert_eq!(response.summary.overall_count(), 1);
    assert!(response.summary.skipped()[0].reason.contains("bomFormat"));
}

#[test]
fn test_search_request_rejects_blank_term() {
    let result = SearchRequest::builder()
        .selector(FileSelector::parse("a.json"))
        .term("   ")
        .build();
    assert!(result.is_err());
}
