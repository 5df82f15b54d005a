//! End-to-end tests through the public facade

use pretty_assertions::assert_eq;
use sheetxml::prelude::*;

#[test]
fn test_prelude_writes_sheet() {
    let mut worksheet = WorksheetContext::new();
    let settings = WorkbookSettings::default().with_iso_dates(true);
    let mut writer = SheetDataWriter::new(Vec::new(), WriterOptions::default());

    let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let cells = [
        Cell::new("A1", date).with_style(5),
        Cell::new("B1", true),
        Cell::new("A2", "=A1+1"),
    ];
    assert_eq!(
        writer.write_cells(&cells, &mut worksheet, &settings).unwrap(),
        3
    );

    let xml = String::from_utf8(writer.finish().unwrap()).unwrap();
    assert_eq!(
        xml,
        concat!(
            r#"<sheetData>"#,
            r#"<row r="1"><c r="A1" s="5" t="d"><v>2024-01-01</v></c><c r="B1" t="b"><v>1</v></c></row>"#,
            r#"<row r="2"><c r="A2"><f>A1+1</f></c></row>"#,
            r#"</sheetData>"#,
        )
    );
}

#[test]
fn test_unstyled_options() {
    let mut worksheet = WorksheetContext::new();
    let options = WriterOptions::default()
        .with_strategy(WriteStrategy::Subtree)
        .with_styled(false);
    let mut writer = SheetDataWriter::new(Vec::new(), options);
    writer
        .write_cell(
            &Cell::new("C4", 1.5).with_style(9),
            &mut worksheet,
            &WorkbookSettings::default(),
        )
        .unwrap();
    let xml = String::from_utf8(writer.finish().unwrap()).unwrap();
    assert_eq!(
        xml,
        r#"<sheetData><row r="4"><c r="C4" t="n"><v>1.5</v></c></row></sheetData>"#
    );
}

#[test]
fn test_errors_surface_through_facade() {
    let err = Cell::new("", 1).address().unwrap_err();
    assert!(matches!(err, sheetxml::Error::InvalidAddress(_)));

    let mut worksheet = WorksheetContext::new();
    let mut writer = SheetDataWriter::new(Vec::new(), WriterOptions::default());
    let settings = WorkbookSettings::default();
    writer
        .write_cell(&Cell::new("A2", 1), &mut worksheet, &settings)
        .unwrap();
    let err = writer
        .write_cell(&Cell::new("A1", 1), &mut worksheet, &settings)
        .unwrap_err();
    assert!(matches!(err, XlsxError::OutOfOrder { .. }));
    assert!(err.to_string().contains("row-major"));
}

#[test]
fn test_worksheet_state_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<Cell>();
    assert_send::<WorksheetContext>();
    assert_send::<WorkbookSettings>();
    assert_send::<SheetDataWriter<Vec<u8>>>();
    assert_send::<XlsxError>();
}
