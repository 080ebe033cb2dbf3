use std::path::{Path, PathBuf};

use pdf_viewer::core::data::colour::Colour;
use pdf_viewer::core::data::rotation::Rotation;
use pdf_viewer::core::document::errors::DocumentError;
use pdf_viewer::test_utils::{FakeDocumentFactory, FakePage};
use pdf_viewer::{ExportController, ExportRequest, PpmFilePresenter, ViewerError};

const PAGE: Colour = Colour { r: 10, g: 20, b: 30 };
const HEADER: &[u8] = b"P6\n100 100\n255\n";

fn factory() -> FakeDocumentFactory {
    FakeDocumentFactory::new().with_document(
        "report.pdf",
        vec![
            FakePage::new(200.0, 100.0, PAGE).with_line("total", 0.0, 0.0),
            FakePage::new(200.0, 100.0, PAGE),
        ],
    )
}

fn request() -> ExportRequest {
    ExportRequest {
        document: PathBuf::from("report.pdf"),
        page: 0,
        rotation: Rotation::Upright,
        inverted: false,
        search: None,
        width: 100,
        height: 100,
    }
}

fn export(request: &ExportRequest, output: &Path) -> Vec<u8> {
    let mut controller = ExportController::new(factory(), PpmFilePresenter::new());
    controller.generate(request).unwrap();
    controller.write(output).unwrap();

    std::fs::read(output).unwrap()
}

fn pixel(ppm: &[u8], x: usize, y: usize) -> Colour {
    let at = HEADER.len() + (y * 100 + x) * 3;
    Colour {
        r: ppm[at],
        g: ppm[at + 1],
        b: ppm[at + 2],
    }
}

#[test]
fn exported_page_is_centred_on_the_background() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("page.ppm");

    let ppm = export(&request(), &output);

    assert!(ppm.starts_with(HEADER));
    assert_eq!(ppm.len(), HEADER.len() + 100 * 100 * 3);
    // 200x100 page at half scale: 100x50, 25 rows of margin above and below
    assert_eq!(pixel(&ppm, 50, 10), Colour::BACKGROUND);
    assert_eq!(pixel(&ppm, 50, 50), PAGE);
    assert_eq!(pixel(&ppm, 50, 90), Colour::BACKGROUND);
}

#[test]
fn rotated_export_swaps_the_margins() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("rotated.ppm");
    let request = ExportRequest {
        rotation: Rotation::Clockwise90,
        ..request()
    };

    let ppm = export(&request, &output);

    assert_eq!(pixel(&ppm, 10, 50), Colour::BACKGROUND);
    assert_eq!(pixel(&ppm, 50, 50), PAGE);
    assert_eq!(pixel(&ppm, 50, 10), PAGE);
}

#[test]
fn inverted_export_leaves_the_background_alone() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("inverted.ppm");
    let request = ExportRequest {
        inverted: true,
        ..request()
    };

    let ppm = export(&request, &output);

    assert_eq!(pixel(&ppm, 50, 50), PAGE.inverted());
    assert_eq!(pixel(&ppm, 50, 10), Colour::BACKGROUND);
}

#[test]
fn search_hits_are_outlined_in_the_export() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("search.ppm");
    let request = ExportRequest {
        search: Some("TOTAL".to_string()),
        ..request()
    };

    let mut controller = ExportController::new(factory(), PpmFilePresenter::new());
    let hits = controller.generate(&request).unwrap();
    controller.write(&output).unwrap();
    let ppm = std::fs::read(&output).unwrap();

    assert_eq!(hits, 1);
    // The hit's top-left corner lands where the page starts
    assert_eq!(pixel(&ppm, 0, 25), Colour::HIGHLIGHT);
    assert_eq!(pixel(&ppm, 50, 50), PAGE);
}

#[test]
fn missing_document_is_reported() {
    let mut controller = ExportController::new(factory(), PpmFilePresenter::new());
    let request = ExportRequest {
        document: PathBuf::from("missing.pdf"),
        ..request()
    };

    let result = controller.generate(&request);

    assert!(matches!(
        result,
        Err(ViewerError::Document(DocumentError::Open { .. }))
    ));
    assert!(controller.buffer().is_none());
}
