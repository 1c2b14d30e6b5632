//! Resume text extraction.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>`; the default is `PdfTextExtractor`.

use std::any::Any;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{0}")]
    Pdf(String),

    #[error("PDF extraction worker failed: {0}")]
    Worker(String),
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Returns the plain text of every page, concatenated in page order.
    async fn extract_text(&self, bytes: Bytes) -> Result<String, ExtractError>;
}

/// `pdf-extract` backed extractor. Parsing runs on the blocking pool and the
/// document is dropped before the task returns.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract_text(&self, bytes: Bytes) -> Result<String, ExtractError> {
        let joined = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await;

        match joined {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(ExtractError::Pdf(e.to_string())),
            Err(e) if e.is_panic() => Err(ExtractError::Worker(panic_message(e.into_panic()))),
            Err(e) => Err(ExtractError::Worker(e.to_string())),
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "PDF parser panicked".to_string()
    }
}

/// Case-sensitive `.pdf` suffix check on the uploaded filename.
pub fn has_pdf_extension(file_name: &str) -> bool {
    file_name.ends_with(".pdf")
}

#[cfg(test)]
pub(crate) mod fixtures {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Builds a PDF with one page per entry in `pages`, each a single line of Helvetica text.
    pub fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Count" => kids.len() as i64,
            "Kids" => kids,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extension_check() {
        assert!(has_pdf_extension("resume.pdf"));
        assert!(has_pdf_extension("my.resume.pdf"));
        assert!(!has_pdf_extension("resume.docx"));
        assert!(!has_pdf_extension("resume.PDF"));
        assert!(!has_pdf_extension("resume_pdf"));
        assert!(!has_pdf_extension(""));
    }

    #[tokio::test]
    async fn test_extracts_pages_in_order() {
        let pdf = fixtures::pdf_with_pages(&["First page Python", "Second page SQL"]);
        let text = PdfTextExtractor
            .extract_text(Bytes::from(pdf))
            .await
            .unwrap();
        let first = text.find("Python").expect("first page text");
        let second = text.find("SQL").expect("second page text");
        assert!(first < second);
    }

    #[tokio::test]
    async fn test_garbage_bytes_are_an_error() {
        let result = PdfTextExtractor
            .extract_text(Bytes::from_static(b"this is not a pdf"))
            .await;
        assert!(result.is_err());
    }

    #[test]
    fn test_panic_message_from_str_and_string() {
        assert_eq!(panic_message(Box::new("boom")), "boom");
        assert_eq!(panic_message(Box::new("bang".to_string())), "bang");
        assert_eq!(panic_message(Box::new(42_u8)), "PDF parser panicked");
    }
}
