use procdoc_core::{
    ArtifactKind, DEFAULT_PROCESS_NAME, Diagram, DocumentKind, ProcessDocument, Section,
    VideoKind, process_name, strip_tags,
};
use procdoc_error::ExtractionErrorKind;

#[test]
fn test_process_name_falls_back_when_first_section_is_markup_only() {
    let sections = vec![
        Section::new("Process Name", "<p></p><br>"),
        Section::new("Objectives", "<p>Pay suppliers on time</p>"),
    ];
    assert_eq!(process_name(&sections), DEFAULT_PROCESS_NAME);
}

#[test]
fn test_strip_tags_keeps_text_between_tags() {
    assert_eq!(
        strip_tags("<ul><li>Open SAP</li><li>Post invoice</li></ul>"),
        "Open SAPPost invoice"
    );
    assert_eq!(strip_tags("a < b and c > d"), "a  d");
}

#[test]
fn test_with_section_replaces_in_place() {
    let doc = ProcessDocument::new(
        vec![
            Section::new("Process Name", "<p>Payroll Run</p>"),
            Section::new("Objectives", "<p>old</p>"),
            Section::new("Reporting", "<p>weekly</p>"),
        ],
        Some(Diagram::new("graph TD\n A --> B")),
    );

    let revised = doc
        .with_section(Section::new("Objectives", "<p>new</p>"))
        .expect("Objectives exists");

    let names: Vec<_> = revised.sections().iter().map(|s| s.name().as_str()).collect();
    assert_eq!(names, vec!["Process Name", "Objectives", "Reporting"]);
    assert_eq!(revised.section("Objectives").unwrap().content(), "<p>new</p>");
    assert_eq!(revised.diagram(), doc.diagram());
    assert!(doc.with_section(Section::new("Missing", "x")).is_none());
}

#[test]
fn test_document_json_omits_absent_diagram() {
    let doc = ProcessDocument::new(vec![Section::new("Process Name", "Leave Request")], None);
    let json = serde_json::to_value(&doc).expect("serializes");

    assert_eq!(json["process_name"], "Leave Request");
    assert!(json.get("diagram").is_none());

    let back: ProcessDocument = serde_json::from_value(json).expect("deserializes");
    assert_eq!(back, doc);
}

#[test]
fn test_artifact_classification() {
    assert_eq!(
        ArtifactKind::from_filename("spec.DOCX").unwrap(),
        ArtifactKind::Document(DocumentKind::Docx)
    );
    assert_eq!(
        ArtifactKind::from_filename("demo.avi").unwrap(),
        ArtifactKind::Video(VideoKind::Avi)
    );

    let err = ArtifactKind::from_filename("sheet.xlsx").unwrap_err();
    match err.kind {
        ExtractionErrorKind::UnsupportedFormat {
            extension,
            supported,
        } => {
            assert_eq!(extension, ".xlsx");
            assert_eq!(supported, ".pdf, .docx, .mp4, .mov, .avi");
        }
        other => panic!("unexpected kind: {other:?}"),
    }

    assert!(ArtifactKind::from_filename("README").is_err());
}
