use lopdf::Document;
use tracing::{debug, warn};

use crate::domain::error::{AppError, Result};
use crate::domain::summary::TextDocument;

/// Per-page text joined in page order, with no separator between pages
pub fn extract_pdf_text(bytes: &[u8]) -> Result<TextDocument> {
    let document = Document::load_mem(bytes)
        .map_err(|e| AppError::ParseError(format!("Failed to load PDF: {}", e)))?;

    let mut text = String::new();
    let pages = document.get_pages();

    for page_number in pages.keys() {
        match document.extract_text(&[*page_number]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => {
                warn!(page = page_number, error = %e, "Skipping PDF page without readable text");
            }
        }
    }

    debug!(pages = pages.len(), chars = text.len(), "PDF text extracted");
    Ok(TextDocument::new(text))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Minimal PDF with one page per entry; `None` gives a page with no text
    pub fn pdf_with_pages(pages: &[Option<&str>]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for page_text in pages {
            let operations = match page_text {
                Some(text) => vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![72.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
                None => vec![],
            };
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::pdf_with_pages;
    use super::*;

    #[test]
    fn test_pages_in_order() {
        let bytes = pdf_with_pages(&[Some("First page"), Some("Second page")]);
        let document = extract_pdf_text(&bytes).unwrap();

        let first = document.raw_text.find("First").unwrap();
        let second = document.raw_text.find("Second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_page_without_text_is_blank_not_error() {
        let bytes = pdf_with_pages(&[None]);
        let document = extract_pdf_text(&bytes).unwrap();
        assert!(document.is_blank());
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let result = extract_pdf_text(b"not a pdf at all");
        assert!(matches!(result, Err(AppError::ParseError(_))));
    }
}
