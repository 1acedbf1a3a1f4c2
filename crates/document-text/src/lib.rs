//! Contract text intake
//!
//! Turns an uploaded document into plain contract text and applies the
//! minimum-length gate callers run before analysis. Supported inputs:
//!
//! - PDF, via `pdf-extract` (handles CID fonts and ToUnicode CMaps)
//! - UTF-8 plain text

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Below this many characters an extraction is treated as unreadable
pub const MIN_CONTRACT_TEXT_LEN: usize = 100;

const PDF_MAGIC: &[u8] = b"%PDF-";
const UTF8_BOM: &str = "\u{feff}";

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Unsupported file format: {0}. Please upload a PDF or TXT file.")]
    UnsupportedFormat(String),

    #[error("Failed to parse PDF: {0}")]
    ParseError(String),

    #[error("Text file is not valid UTF-8")]
    InvalidEncoding,

    #[error(
        "Could not extract enough text from the document ({found} characters, need at least {required})"
    )]
    InsufficientText { found: usize, required: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Detect the document kind from its file name, falling back to the
    /// PDF magic bytes for names without a known extension.
    pub fn detect(filename: &str, data: &[u8]) -> Result<Self, ExtractionError> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("pdf") => Ok(DocumentKind::Pdf),
            Some("txt") => Ok(DocumentKind::PlainText),
            _ if data.starts_with(PDF_MAGIC) => Ok(DocumentKind::Pdf),
            _ => Err(ExtractionError::UnsupportedFormat(filename.to_string())),
        }
    }
}

/// Text pulled out of an uploaded document
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedDocument {
    pub kind: DocumentKind,
    pub text: String,
    pub page_count: Option<u32>,
}

/// Extract the full text of an uploaded document
pub fn extract_document(filename: &str, data: &[u8]) -> Result<ExtractedDocument, ExtractionError> {
    let kind = DocumentKind::detect(filename, data)?;

    let document = match kind {
        DocumentKind::Pdf => ExtractedDocument {
            kind,
            text: extract_pdf_text(data)?,
            page_count: pdf_page_count(data),
        },
        DocumentKind::PlainText => ExtractedDocument {
            kind,
            text: decode_plain_text(data)?,
            page_count: None,
        },
    };

    debug!(
        filename,
        kind = ?document.kind,
        chars = document.text.chars().count(),
        "document text extracted"
    );

    Ok(document)
}

pub fn extract_pdf_text(data: &[u8]) -> Result<String, ExtractionError> {
    if !data.starts_with(PDF_MAGIC) {
        return Err(ExtractionError::ParseError(
            "missing %PDF- header".to_string(),
        ));
    }

    // pdf-extract panics on some malformed font dictionaries instead of erroring
    match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(data)) {
        Ok(result) => result.map_err(|e| ExtractionError::ParseError(e.to_string())),
        Err(payload) => {
            let reason = panic_message(payload.as_ref());
            warn!(reason, "pdf-extract panicked on malformed document");
            Err(ExtractionError::ParseError(format!(
                "malformed PDF structure: {}",
                reason
            )))
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "unknown panic"
    }
}

fn pdf_page_count(data: &[u8]) -> Option<u32> {
    let doc = lopdf::Document::load_mem(data).ok()?;
    u32::try_from(doc.get_pages().len()).ok()
}

pub fn decode_plain_text(data: &[u8]) -> Result<String, ExtractionError> {
    let text = std::str::from_utf8(data).map_err(|_| ExtractionError::InvalidEncoding)?;
    Ok(text.strip_prefix(UTF8_BOM).unwrap_or(text).to_string())
}

/// Trim extracted text and reject it when fewer than `min_len` characters remain
pub fn validate_text(text: &str, min_len: usize) -> Result<&str, ExtractionError> {
    let trimmed = text.trim();
    let found = trimmed.chars().count();

    if found < min_len {
        return Err(ExtractionError::InsufficientText {
            found,
            required: min_len,
        });
    }

    Ok(trimmed)
}
