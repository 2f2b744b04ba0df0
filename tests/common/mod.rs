//! Shared fixtures for integration tests
//!
//! xlsx workbooks are assembled directly with `zip`: a workbook part, its
//! relationships, and one inline-string worksheet per sheet.

#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing_subscriber::EnvFilter;
use zip::write::FileOptions;
use zip::CompressionMethod;

/// Install a test subscriber honoring `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Worksheet cell value
#[derive(Debug, Clone)]
pub enum XCell {
    Text(&'static str),
    Number(f64),
    Bool(bool),
    /// Formula error such as `#DIV/0!`
    Error(&'static str),
    /// No `<c>` element; a leading blank shifts the sheet's first used column
    Blank,
}

/// A worksheet whose first row lands on `first_row` (1-based)
pub struct Sheet {
    pub name: &'static str,
    pub first_row: u32,
    pub rows: Vec<Vec<XCell>>,
}

impl Sheet {
    pub fn new(name: &'static str, rows: Vec<Vec<XCell>>) -> Self {
        Self {
            name,
            first_row: 1,
            rows,
        }
    }

    pub fn starting_at(mut self, first_row: u32) -> Self {
        self.first_row = first_row;
        self
    }
}

/// Text cells for a whole row
pub fn text_row(values: &[&'static str]) -> Vec<XCell> {
    values.iter().map(|v| XCell::Text(*v)).collect()
}

/// Artifact sheet: 3 preamble rows, header, then `data_rows` rows
pub fn artifact_rows(data_rows: usize) -> Vec<Vec<XCell>> {
    let mut rows = vec![
        text_row(&["Lost Temple of Azmar: artifact inventory"]),
        vec![],
        text_row(&["Catalogued by Dr. Evelyn Reed"]),
        text_row(&["artifact_id", "name", "weight_kg", "intact"]),
    ];
    let names = ["Jade Idol", "Obsidian Blade", "Sun Disk", "Serpent Mask"];
    for i in 0..data_rows {
        #[allow(clippy::cast_precision_loss)]
        let id = (i + 1) as f64;
        rows.push(vec![
            XCell::Number(id),
            XCell::Text(names[i % names.len()]),
            XCell::Number(0.5 + id),
            XCell::Bool(i % 2 == 0),
        ]);
    }
    rows
}

/// Write an xlsx workbook containing `sheets`
pub fn write_xlsx(path: &Path, sheets: &[Sheet]) {
    let file = File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut overrides = String::from(
        r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
    );
    let mut sheet_entries = String::new();
    let mut rels = String::new();
    for (idx, sheet) in sheets.iter().enumerate() {
        let n = idx + 1;
        overrides.push_str(&format!(
            r#"<Override PartName="/xl/worksheets/sheet{n}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#
        ));
        sheet_entries.push_str(&format!(
            r#"<sheet name="{}" sheetId="{n}" r:id="rId{n}"/>"#,
            sheet.name
        ));
        rels.push_str(&format!(
            r#"<Relationship Id="rId{n}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{n}.xml"/>"#
        ));
    }

    let parts = [
        (
            "[Content_Types].xml".to_string(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/>{overrides}</Types>"#
            ),
        ),
        (
            "_rels/.rels".to_string(),
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#
                .to_string(),
        ),
        (
            "xl/workbook.xml".to_string(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets>{sheet_entries}</sheets></workbook>"#
            ),
        ),
        (
            "xl/_rels/workbook.xml.rels".to_string(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{rels}</Relationships>"#
            ),
        ),
    ];
    for (name, body) in &parts {
        zip.start_file(name.as_str(), options).unwrap();
        zip.write_all(body.as_bytes()).unwrap();
    }

    for (idx, sheet) in sheets.iter().enumerate() {
        zip.start_file(format!("xl/worksheets/sheet{}.xml", idx + 1), options)
            .unwrap();
        zip.write_all(worksheet_xml(sheet).as_bytes()).unwrap();
    }

    zip.finish().unwrap();
}

fn worksheet_xml(sheet: &Sheet) -> String {
    let mut data = String::new();
    for (offset, row) in sheet.rows.iter().enumerate() {
        let r = sheet.first_row + u32::try_from(offset).unwrap();
        data.push_str(&format!(r#"<row r="{r}">"#));
        for (col, cell) in row.iter().enumerate() {
            let cell_ref = format!("{}{r}", column_letter(col));
            match cell {
                XCell::Text(s) => data.push_str(&format!(
                    r#"<c r="{cell_ref}" t="inlineStr"><is><t>{s}</t></is></c>"#
                )),
                XCell::Number(v) => {
                    data.push_str(&format!(r#"<c r="{cell_ref}"><v>{v}</v></c>"#));
                }
                XCell::Bool(b) => data.push_str(&format!(
                    r#"<c r="{cell_ref}" t="b"><v>{}</v></c>"#,
                    u8::from(*b)
                )),
                XCell::Error(e) => {
                    data.push_str(&format!(r#"<c r="{cell_ref}" t="e"><v>{e}</v></c>"#));
                }
                XCell::Blank => {}
            }
        }
        data.push_str("</row>");
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{data}</sheetData></worksheet>"#
    )
}

fn column_letter(col: usize) -> char {
    char::from(b'A' + u8::try_from(col).unwrap())
}
