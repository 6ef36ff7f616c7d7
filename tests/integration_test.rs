//! Integration tests for the PDF page extractor
//!
//! Rendering and assembly need the PDFium dynamic library at runtime; tests
//! that touch it skip themselves when the library cannot be bound, so the
//! pure logic still gets exercised everywhere.

use pdf_page_extractor::{
    extract_pages, Error, PageSet, PdfReader, Session, PDF_MIME_TYPE, RENDER_SCALE,
};
use pretty_assertions::assert_eq;

/// Build a minimal valid PDF with `page_count` empty pages.
///
/// Page n (1-indexed) gets a MediaBox of (400 + n) x 600 points, so tests can
/// tell which source page ended up where by looking at output page sizes.
fn synth_pdf(page_count: u32) -> Vec<u8> {
    let mut body: Vec<u8> = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::new();

    let kids: Vec<String> = (0..page_count).map(|i| format!("{} 0 R", i + 3)).collect();

    let push_obj = |body: &mut Vec<u8>, offsets: &mut Vec<usize>, obj: String| {
        offsets.push(body.len());
        body.extend_from_slice(obj.as_bytes());
    };

    push_obj(
        &mut body,
        &mut offsets,
        "1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n".to_string(),
    );
    push_obj(
        &mut body,
        &mut offsets,
        format!(
            "2 0 obj\n<< /Type /Pages /Kids [{}] /Count {} >>\nendobj\n",
            kids.join(" "),
            page_count
        ),
    );
    for n in 1..=page_count {
        push_obj(
            &mut body,
            &mut offsets,
            format!(
                "{} 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} 600] >>\nendobj\n",
                n + 2,
                400 + n
            ),
        );
    }

    let xref_offset = body.len();
    let object_count = offsets.len() + 1;
    body.extend_from_slice(format!("xref\n0 {}\n", object_count).as_bytes());
    body.extend_from_slice(b"0000000000 65535 f \n");
    for offset in &offsets {
        body.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    body.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            object_count, xref_offset
        )
        .as_bytes(),
    );

    body
}

/// True when the PDFium dynamic library can be bound in this environment
fn pdfium_available() -> bool {
    !matches!(
        PdfReader::open_bytes(synth_pdf(1)),
        Err(Error::Pdfium { .. })
    )
}

macro_rules! require_pdfium {
    () => {
        if !pdfium_available() {
            eprintln!("skipping: PDFium library not found");
            return;
        }
    };
}

#[test]
fn synthesized_fixture_reports_its_page_count() {
    require_pdfium!();

    let reader = PdfReader::open_bytes(synth_pdf(10)).expect("failed to open fixture");
    assert_eq!(reader.page_count(), 10);
    assert_eq!(reader.page_size(1).unwrap(), (401.0, 600.0));
    assert_eq!(reader.page_size(10).unwrap(), (410.0, 600.0));
}

#[tokio::test]
async fn extracts_first_and_last_page_in_source_order() {
    require_pdfium!();

    let reader = PdfReader::open_bytes(synth_pdf(10)).expect("failed to open fixture");
    let pages = PageSet::parse("1,10", reader.page_count());

    let output = extract_pages(&reader, &pages).await.expect("extraction failed");
    let output_reader = PdfReader::open_bytes(output).expect("output is not a valid PDF");

    assert_eq!(output_reader.page_count(), 2);

    // Output pages are sized to the rasters: source viewport at the fixed
    // scale, in request order (source page 1, then source page 10).
    let (w1, h1) = output_reader.page_size(1).unwrap();
    let (w2, h2) = output_reader.page_size(2).unwrap();
    assert_eq!((w1, h1), (401.0 * RENDER_SCALE, 600.0 * RENDER_SCALE));
    assert_eq!((w2, h2), (410.0 * RENDER_SCALE, 600.0 * RENDER_SCALE));
}

#[tokio::test]
async fn out_of_bounds_selection_is_rejected_before_rendering() {
    require_pdfium!();

    let reader = PdfReader::open_bytes(synth_pdf(3)).expect("failed to open fixture");

    let result = extract_pages(&reader, &PageSet::single(4)).await;
    assert!(matches!(
        result,
        Err(Error::PageOutOfBounds { page: 4, total: 3 })
    ));
}

#[tokio::test]
async fn empty_selection_names_the_valid_range() {
    require_pdfium!();

    let mut session = Session::new();
    session
        .load_file("fixture.pdf", PDF_MIME_TYPE, synth_pdf(3))
        .expect("failed to load fixture");

    let result = session.extract_spec("0,99,abc").await;
    assert!(matches!(result, Err(Error::EmptyPageSelection { total: 3 })));
}

#[tokio::test]
async fn quick_actions_extract_exactly_one_page() {
    require_pdfium!();

    let mut session = Session::new();
    let total = session
        .load_file("fixture.pdf", PDF_MIME_TYPE, synth_pdf(5))
        .expect("failed to load fixture");
    assert_eq!(total, 5);

    let first = session.extract_first().await.expect("first page extraction");
    let first_reader = PdfReader::open_bytes(first.data).expect("invalid output");
    assert_eq!(first_reader.page_count(), 1);
    assert_eq!(
        first_reader.page_size(1).unwrap(),
        (401.0 * RENDER_SCALE, 600.0 * RENDER_SCALE)
    );

    let last = session.extract_last().await.expect("last page extraction");
    let last_reader = PdfReader::open_bytes(last.data).expect("invalid output");
    assert_eq!(last_reader.page_count(), 1);
    assert_eq!(
        last_reader.page_size(1).unwrap(),
        (405.0 * RENDER_SCALE, 600.0 * RENDER_SCALE)
    );
}

#[tokio::test]
async fn output_is_named_after_the_input_stem_until_renamed() {
    require_pdfium!();

    let mut session = Session::new();
    session
        .load_file("report.pdf", PDF_MIME_TYPE, synth_pdf(2))
        .expect("failed to load fixture");
    assert_eq!(session.output_name(), Some("report_extracted.pdf"));

    session.set_output_name("picked-pages.pdf");
    let extracted = session.extract_spec("2").await.expect("extraction failed");
    assert_eq!(extracted.file_name, "picked-pages.pdf");
    assert_eq!(extracted.pages.pages(), &[2]);

    // Cancelled rename reverts to the default
    session.reset_output_name();
    assert_eq!(session.output_name(), Some("report_extracted.pdf"));
}

#[tokio::test]
async fn loading_a_new_document_replaces_the_old_one() {
    require_pdfium!();

    let mut session = Session::new();
    session
        .load_file("a.pdf", PDF_MIME_TYPE, synth_pdf(5))
        .expect("failed to load first fixture");
    assert_eq!(session.total_pages(), Some(5));

    session
        .load_file("b.pdf", PDF_MIME_TYPE, synth_pdf(2))
        .expect("failed to load second fixture");
    assert_eq!(session.total_pages(), Some(2));
    assert_eq!(session.output_name(), Some("b_extracted.pdf"));

    // A failed upload leaves the current document alone
    let result = session.load_file("c.gif", "image/gif", vec![1, 2, 3]);
    assert!(matches!(result, Err(Error::InvalidFileType { .. })));
    assert_eq!(session.total_pages(), Some(2));
    assert_eq!(session.file_name(), Some("b.pdf"));
}

#[test]
fn parser_needs_no_document_or_library() {
    assert_eq!(PageSet::parse("1,3,5-7", 10).pages(), &[1, 3, 5, 6, 7]);
    assert_eq!(PageSet::parse("5-3", 10).pages(), &[] as &[u32]);
}
