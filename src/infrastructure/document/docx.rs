use tracing::debug;

use crate::domain::error::{AppError, Result};
use crate::domain::summary::TextDocument;

/// Body paragraphs first (one per line), then every table:
/// each cell followed by a space, each row followed by a newline.
pub fn extract_docx_text(bytes: &[u8]) -> Result<TextDocument> {
    let docx = docx_rs::read_docx(bytes)
        .map_err(|e| AppError::ParseError(format!("Failed to parse DOCX file: {}", e)))?;

    let mut paragraphs = String::new();
    let mut tables = String::new();
    let mut table_count = 0usize;

    for child in &docx.document.children {
        match child {
            docx_rs::DocumentChild::Paragraph(paragraph) => {
                paragraphs.push_str(&paragraph_text(paragraph));
                paragraphs.push('\n');
            }
            docx_rs::DocumentChild::Table(table) => {
                table_count += 1;
                push_table_text(table, &mut tables);
            }
            _ => {}
        }
    }

    debug!(tables = table_count, "DOCX text extracted");
    paragraphs.push_str(&tables);
    Ok(TextDocument::new(paragraphs))
}

fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut buffer = String::new();
    for child in &paragraph.children {
        push_paragraph_child(child, &mut buffer);
    }
    buffer
}

fn push_paragraph_child(child: &docx_rs::ParagraphChild, buffer: &mut String) {
    match child {
        docx_rs::ParagraphChild::Run(run) => push_run(run, buffer),
        docx_rs::ParagraphChild::Hyperlink(link) => {
            for link_child in &link.children {
                push_paragraph_child(link_child, buffer);
            }
        }
        docx_rs::ParagraphChild::Insert(insert) => {
            for insert_child in &insert.children {
                if let docx_rs::InsertChild::Run(run) = insert_child {
                    push_run(run, buffer);
                }
            }
        }
        _ => {}
    }
}

fn push_run(run: &docx_rs::Run, buffer: &mut String) {
    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text) => buffer.push_str(&text.text),
            docx_rs::RunChild::Tab(_) | docx_rs::RunChild::PTab(_) => buffer.push('\t'),
            docx_rs::RunChild::Break(_) => buffer.push('\n'),
            docx_rs::RunChild::Sym(sym) => buffer.push_str(&sym.char),
            _ => {}
        }
    }
}

fn push_table_text(table: &docx_rs::Table, out: &mut String) {
    for row in &table.rows {
        let docx_rs::TableChild::TableRow(row) = row;
        for cell in &row.cells {
            let docx_rs::TableRowChild::TableCell(cell) = cell;
            out.push_str(&cell_text(cell));
            out.push(' ');
        }
        out.push('\n');
    }
}

/// Cell paragraphs joined by newlines; nested tables are not part of the cell text
fn cell_text(cell: &docx_rs::TableCell) -> String {
    cell.children
        .iter()
        .filter_map(|content| match content {
            docx_rs::TableCellContent::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
pub(crate) mod fixtures {
    use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};
    use std::io::Cursor;

    fn para(text: &str) -> Paragraph {
        Paragraph::new().add_run(Run::new().add_text(text))
    }

    /// Packs a document with the given body paragraphs followed by one table
    pub fn docx_bytes(paragraphs: &[&str], table: &[&[&str]]) -> Vec<u8> {
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(para(text));
        }
        if !table.is_empty() {
            let rows = table
                .iter()
                .map(|cells| {
                    TableRow::new(
                        cells
                            .iter()
                            .map(|text| TableCell::new().add_paragraph(para(text)))
                            .collect(),
                    )
                })
                .collect();
            docx = docx.add_table(Table::new(rows));
        }

        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::docx_bytes;
    use super::*;

    #[test]
    fn test_paragraphs_then_table_cells() {
        let bytes = docx_bytes(&["Shipment report", "Second line"], &[&["Port", "Qty"], &["Izmir", "40"]]);
        let document = extract_docx_text(&bytes).unwrap();

        assert_eq!(
            document.raw_text,
            "Shipment report\nSecond line\nPort Qty \nIzmir 40 \n"
        );
    }

    #[test]
    fn test_single_paragraph_gets_trailing_newline() {
        let bytes = docx_bytes(&["cat dog cat bird cat dog"], &[]);
        let document = extract_docx_text(&bytes).unwrap();
        assert_eq!(document.raw_text, "cat dog cat bird cat dog\n");
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let result = extract_docx_text(b"PK not really a zip");
        assert!(matches!(result, Err(AppError::ParseError(_))));
    }
}
