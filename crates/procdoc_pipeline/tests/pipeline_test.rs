//! End-to-end pipeline tests with stub backends.

mod test_utils;

use procdoc_error::{
    ExtractionErrorKind, PipelineErrorKind, ProcdocError, ProcdocErrorKind,
};
use procdoc_pipeline::{
    DiagramSynthesizer, Pipeline, PipelineConfig, RunContext, SectionRefiner, SectionSchema,
    SectionStructurer,
};
use procdoc_core::{Narrative, Section};
use procdoc_render::{ArtifactBody, ExportFormat};
use std::sync::Arc;
use std::time::Duration;
use test_utils::{RecordingToolkit, SchemaDriver, extractor};

fn pipeline(driver: Arc<SchemaDriver>) -> (Pipeline<Arc<SchemaDriver>>, Arc<RecordingToolkit>) {
    let toolkit = Arc::new(RecordingToolkit::default());
    let pipeline = Pipeline::new(
        Arc::clone(&driver),
        extractor(driver, Arc::clone(&toolkit)),
        PipelineConfig::default(),
    );
    (pipeline, toolkit)
}

fn schema_names() -> Vec<String> {
    SectionSchema::bundled()
        .expect("bundled schema")
        .sections()
        .iter()
        .map(|entry| entry.name().clone())
        .collect()
}

fn stage_of(err: &ProcdocError) -> Option<(&'static str, String)> {
    match err.kind() {
        ProcdocErrorKind::Pipeline(e) => match &e.kind {
            PipelineErrorKind::Cancelled { stage } => Some(("cancelled", stage.clone())),
            PipelineErrorKind::DeadlineExceeded { stage } => Some(("deadline", stage.clone())),
        },
        _ => None,
    }
}

#[tokio::test]
async fn test_structure_returns_schema_sections_in_order() {
    let driver = Arc::new(SchemaDriver::new().staggered());
    let schema = SectionSchema::bundled().expect("bundled schema");
    let structurer = SectionStructurer::new(Arc::clone(&driver)).with_max_concurrent(4);

    let sections = structurer
        .structure(&Narrative::new("Clerks approve invoices daily."), &schema)
        .await
        .expect("structures");

    let names: Vec<String> = sections.iter().map(|s| s.name().clone()).collect();
    assert_eq!(names, schema_names());
    assert_ne!(driver.completed_sections(), schema_names());
    assert_eq!(sections[2].content(), "<p>Objectives content</p>");
    assert!(
        driver
            .prompts()
            .iter()
            .all(|prompt| prompt.contains("Clerks approve invoices daily."))
    );
}

#[tokio::test]
async fn test_text_run_renders_all_sections_and_diagram() {
    let (pipeline, _) = pipeline(Arc::new(SchemaDriver::new()));

    let document = pipeline
        .generate_from_text("Clerks approve invoices daily.", &RunContext::new())
        .await
        .expect("run succeeds");
    assert_eq!(document.process_name(), "Process Name content");
    assert_eq!(
        document.diagram().as_ref().map(|d| d.as_str()),
        Some("graph TD\n  A[Open queue] --> B{Under limit?}\n  B -->|Yes| C[Approve]")
    );

    let artifact = pipeline
        .render(&document, ExportFormat::Html)
        .expect("renders");
    let ArtifactBody::Markup(html) = artifact.body() else {
        panic!("expected markup");
    };

    let mut cursor = 0;
    for name in schema_names() {
        let found = html[cursor..]
            .find(&format!("<h2>{}</h2>", name))
            .unwrap_or_else(|| panic!("section {name} missing or out of order"));
        cursor += found;
    }
    assert!(html.contains("<pre class=\"mermaid\">\ngraph TD"));
}

#[tokio::test]
async fn test_diagram_uses_process_steps_section() {
    let driver = Arc::new(SchemaDriver::new());
    let (pipeline, _) = pipeline(Arc::clone(&driver));

    pipeline
        .generate_from_text("Clerks approve invoices daily.", &RunContext::new())
        .await
        .expect("run succeeds");

    let diagram_prompt = driver
        .prompts()
        .into_iter()
        .find(|p| p.contains(test_utils::DIAGRAM_MARKER))
        .expect("diagram requested");
    assert!(diagram_prompt.contains("<p>Detailed Process Steps content</p>"));
}

#[tokio::test]
async fn test_structuring_failure_fails_run() {
    let (pipeline, _) = pipeline(Arc::new(SchemaDriver::new().failing_section("Reporting")));

    let err = pipeline
        .generate_from_text("Clerks approve invoices daily.", &RunContext::new())
        .await
        .expect_err("run fails");

    match err.kind() {
        ProcdocErrorKind::Structuring(e) => {
            assert_eq!(e.section, "Reporting");
            assert!(e.message.contains("section backend unavailable"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_diagram_failure_does_not_fail_run() {
    let (pipeline, _) = pipeline(Arc::new(SchemaDriver::new().failing_diagram()));

    let document = pipeline
        .generate_from_text("Clerks approve invoices daily.", &RunContext::new())
        .await
        .expect("run succeeds");

    assert_eq!(document.sections().len(), schema_names().len());
    assert!(document.diagram().is_none());
}

#[tokio::test]
async fn test_diagram_synthesizer_absorbs_failure() {
    let synthesizer = DiagramSynthesizer::new(SchemaDriver::new().failing_diagram());
    assert!(synthesizer.synthesize("1. Open queue").await.is_none());
}

#[tokio::test]
async fn test_unsupported_upload_rejected_before_staging() {
    let (pipeline, toolkit) = pipeline(Arc::new(SchemaDriver::new()));

    let err = pipeline
        .generate_from_upload(b"cells", "budget.xlsx", &RunContext::new())
        .await
        .expect_err("unsupported");

    match err.kind() {
        ProcdocErrorKind::Extraction(e) => {
            assert!(matches!(
                &e.kind,
                ExtractionErrorKind::UnsupportedFormat { extension, .. } if extension == ".xlsx"
            ));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(toolkit.seen.lock().unwrap().is_none());
}

#[tokio::test]
async fn test_document_upload_builds_document() {
    let driver = Arc::new(SchemaDriver::new());
    let (pipeline, _) = pipeline(Arc::clone(&driver));

    let document = pipeline
        .generate_from_upload(b"%PDF-1.7", "Invoice Process.pdf", &RunContext::new())
        .await
        .expect("run succeeds");

    assert_eq!(document.sections().len(), schema_names().len());
    assert!(
        driver
            .prompts()
            .iter()
            .any(|p| p.contains("Open the invoice queue.\n\nApprove invoices."))
    );
}

#[tokio::test]
async fn test_video_upload_staging_removed_after_run() {
    let (pipeline, toolkit) = pipeline(Arc::new(SchemaDriver::new()));

    let document = pipeline
        .generate_from_upload(b"\x00\x00\x00\x18ftypmp42", "walkthrough.mp4", &RunContext::new())
        .await
        .expect("run succeeds");
    assert_eq!(document.sections().len(), schema_names().len());

    let staged = toolkit.seen.lock().unwrap().clone().expect("video staged");
    assert!(
        staged
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with("_walkthrough.mp4"))
    );
    assert!(!staged.exists(), "staged upload removed");
}

#[tokio::test]
async fn test_staging_removed_after_failed_run() {
    let (pipeline, toolkit) =
        pipeline(Arc::new(SchemaDriver::new().failing_section("Process Name")));

    pipeline
        .generate_from_upload(b"video", "walkthrough.mov", &RunContext::new())
        .await
        .expect_err("run fails");

    let staged = toolkit.seen.lock().unwrap().clone().expect("video staged");
    assert!(!staged.exists(), "staged upload removed");
}

#[tokio::test]
async fn test_cancellation_names_active_stage() {
    let (pipeline, _) =
        pipeline(Arc::new(SchemaDriver::new().with_delay(Duration::from_secs(5))));
    let ctx = RunContext::new();
    let token = ctx.cancel_token().clone();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        token.cancel();
    });

    let err = pipeline
        .generate_from_text("Clerks approve invoices daily.", &ctx)
        .await
        .expect_err("cancelled");

    assert_eq!(
        stage_of(&err),
        Some(("cancelled", "structure".to_string()))
    );
}

#[tokio::test]
async fn test_deadline_names_active_stage() {
    let (pipeline, _) =
        pipeline(Arc::new(SchemaDriver::new().with_delay(Duration::from_secs(5))));
    let ctx = RunContext::new().with_timeout(Duration::from_millis(50));

    let err = pipeline
        .generate_from_upload(b"%PDF", "process.pdf", &ctx)
        .await
        .expect_err("deadline exceeded");

    assert_eq!(
        stage_of(&err),
        Some(("deadline", "structure".to_string()))
    );
}

#[tokio::test]
async fn test_diagram_deadline_keeps_sections() {
    let (pipeline, _) = pipeline(Arc::new(
        SchemaDriver::new().with_diagram_delay(Duration::from_secs(5)),
    ));
    let ctx = RunContext::new().with_timeout(Duration::from_millis(300));

    let document = pipeline
        .generate_from_text("Clerks approve invoices daily.", &ctx)
        .await
        .expect("sections survive a late diagram");

    let names: Vec<String> = document.sections().iter().map(|s| s.name().clone()).collect();
    assert_eq!(names, schema_names());
    assert!(document.diagram().is_none());
}

#[tokio::test]
async fn test_cancellation_during_diagram_aborts() {
    let (pipeline, _) = pipeline(Arc::new(
        SchemaDriver::new().with_diagram_delay(Duration::from_secs(5)),
    ));
    let ctx = RunContext::new();
    let token = ctx.cancel_token().clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        token.cancel();
    });

    let err = pipeline
        .generate_from_text("Clerks approve invoices daily.", &ctx)
        .await
        .expect_err("cancelled");

    assert_eq!(stage_of(&err), Some(("cancelled", "diagram".to_string())));
}

#[tokio::test]
async fn test_refine_keeps_name_and_trims() {
    let refiner = SectionRefiner::new(SchemaDriver::new());
    let section = Section::new("Objectives", "<p>Old</p>");

    let revised = refiner
        .refine(&section, "Mention the approval limit")
        .await
        .expect("refines");

    assert_eq!(revised.name(), "Objectives");
    assert_eq!(
        revised.content(),
        "1. Open the invoice queue\n2. Approve invoices under five hundred"
    );
}

#[tokio::test]
async fn test_chat_includes_context() {
    let driver = Arc::new(SchemaDriver::new());
    let refiner = SectionRefiner::new(Arc::clone(&driver));

    refiner
        .chat("What belongs in Reporting?", Some("Invoices are approved daily."))
        .await
        .expect("answers");

    let prompt = driver.prompts().pop().expect("prompt recorded");
    assert!(prompt.contains("Context about the process: Invoices are approved daily."));
    assert!(prompt.contains("User's question: What belongs in Reporting?"));
}
