use serde::{Deserialize, Serialize};

/// Spreadsheet-like inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabularFormat {
    Csv,
    Xlsx,
}

/// Text document inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

/// Which handler an upload is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "path", content = "format", rename_all = "lowercase")]
pub enum FileKind {
    Tabular(TabularFormat),
    Document(DocumentFormat),
}

impl FileKind {
    pub fn extension(&self) -> &'static str {
        match self {
            FileKind::Tabular(TabularFormat::Csv) => "csv",
            FileKind::Tabular(TabularFormat::Xlsx) => "xlsx",
            FileKind::Document(DocumentFormat::Pdf) => "pdf",
            FileKind::Document(DocumentFormat::Docx) => "docx",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            FileKind::Tabular(TabularFormat::Csv) => "text/csv",
            FileKind::Tabular(TabularFormat::Xlsx) => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            FileKind::Document(DocumentFormat::Pdf) => "application/pdf",
            FileKind::Document(DocumentFormat::Docx) => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

/// One uploaded file, owned by a single analysis request
#[derive(Debug, Clone)]
pub struct UploadedFile {
    name: String,
    mime_type: String,
    raw_bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, raw_bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            raw_bytes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn size_bytes(&self) -> u64 {
        self.raw_bytes.len() as u64
    }

    pub fn raw_bytes(&self) -> &[u8] {
        &self.raw_bytes
    }

    pub fn details(&self) -> FileDetails {
        FileDetails {
            name: self.name.clone(),
            mime_type: self.mime_type.clone(),
            size_bytes: self.size_bytes(),
            size_label: format!("{:.2} KB", self.size_bytes() as f64 / 1024.0),
        }
    }
}

/// Upload metadata shown next to the analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDetails {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub size_label: String,
}
