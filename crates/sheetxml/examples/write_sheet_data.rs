//! Example: Write a small `<sheetData>` block with formulas and dates

use chrono::NaiveDate;
use sheetxml::prelude::*;

fn main() -> XlsxResult<()> {
    let mut worksheet = WorksheetContext::new();
    worksheet.set_formula_attributes("C2", FormulaAttributes::shared_master(0, "C2:C3")?)?;
    worksheet.set_formula_attributes("C3", FormulaAttributes::shared(0))?;

    let settings = WorkbookSettings::default();
    let options = WriterOptions::default().with_strategy(WriteStrategy::Subtree);
    let mut writer = SheetDataWriter::new(Vec::new(), options);

    let shipped = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let cells = [
        // Header row
        Cell::new("A1", "Item").with_style(1),
        Cell::new("B1", "Price").with_style(1),
        Cell::new("C1", "With tax").with_style(1),
        Cell::new("D1", "Shipped").with_style(1),
        // Data rows
        Cell::new("A2", "Widget"),
        Cell::new("B2", 100.0),
        Cell::new("C2", "=B2*1.2"),
        Cell::new("D2", shipped).with_style(2),
        Cell::new("A3", "Gadget")
            .with_hyperlink(Hyperlink::external("", "https://example.com/gadget")),
        Cell::new("B3", 250.0),
        Cell::new("C3", "=B3*1.2"),
        Cell::new("D3", CellValue::Null).with_type(DataType::Date),
    ];
    writer.write_cells(&cells, &mut worksheet, &settings)?;

    let xml = writer.finish()?;
    println!("{}", String::from_utf8_lossy(&xml));
    for link in worksheet.take_hyperlinks() {
        println!("hyperlink {} -> {:?}", link.reference, link.target);
    }
    Ok(())
}
