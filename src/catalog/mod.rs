// src/catalog/mod.rs
pub mod filter;
pub mod ingest;

pub use filter::ViewFilter;
pub use ingest::{FileHandle, Ingestor};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Pdf,
    Document,
    Image,
    Video,
    Archive,
    Spreadsheet,
    File,
}

impl FileType {
    /// Category inferred from the text after the last `.` of a file name.
    pub fn from_name(name: &str) -> Self {
        match name.rsplit_once('.') {
            Some((_, ext)) => Self::from_extension(ext),
            None => FileType::File,
        }
    }

    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "doc" | "docx" | "txt" => FileType::Document,
            "jpg" | "jpeg" | "png" | "gif" => FileType::Image,
            "mp4" | "avi" | "mov" => FileType::Video,
            "zip" | "rar" => FileType::Archive,
            "xlsx" | "xls" => FileType::Spreadsheet,
            _ => FileType::File,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Document => "document",
            FileType::Image => "image",
            FileType::Video => "video",
            FileType::Archive => "archive",
            FileType::Spreadsheet => "spreadsheet",
            FileType::File => "file",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FileType::Pdf | FileType::Document => "▤",
            FileType::Image => "▨",
            FileType::Video => "▶",
            FileType::Archive => "▣",
            FileType::Spreadsheet => "▦",
            FileType::File => "□",
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    pub size: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
    pub upload_date: NaiveDate,
    pub tags: Vec<String>,
    pub folder: String,
}

/// Folder picked in the sidebar. `All` is the pseudo-folder that matches
/// every record, whatever its real folder is called.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FolderSelection {
    #[default]
    All,
    Named(String),
}

impl FolderSelection {
    pub fn matches(&self, folder: &str) -> bool {
        match self {
            FolderSelection::All => true,
            FolderSelection::Named(name) => name == folder,
        }
    }

    pub fn label<'a>(&'a self, all_label: &'a str) -> &'a str {
        match self {
            FolderSelection::All => all_label,
            FolderSelection::Named(name) => name,
        }
    }
}

/// Ordered, append-only set of records for the session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<FileRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog { records: Vec::new() }
    }

    /// The records the storage page opens with.
    pub fn with_samples() -> Self {
        let sample = |id: &str, name: &str, size: &str, file_type, date: (i32, u32, u32), tags: &[&str], folder: &str| {
            FileRecord {
                id: id.to_string(),
                name: name.to_string(),
                size: size.to_string(),
                file_type,
                upload_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                folder: folder.to_string(),
            }
        };

        Catalog {
            records: vec![
                sample("1", "Project documentation.pdf", "2.4 MB", FileType::Pdf, (2024, 7, 28), &["work", "documents"], "Documents"),
                sample("2", "Vacation photos.zip", "45.8 MB", FileType::Archive, (2024, 7, 25), &["personal", "photos"], "Media"),
                sample("3", "Monthly budget.xlsx", "156 KB", FileType::Spreadsheet, (2024, 7, 30), &["finance", "planning"], "Documents"),
            ],
        }
    }

    pub fn append(&mut self, records: impl IntoIterator<Item = FileRecord>) {
        let before = self.records.len();
        self.records.extend(records);
        tracing::debug!(added = self.records.len() - before, total = self.records.len(), "catalog append");
    }

    pub fn all(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `All` followed by each distinct folder in order of first appearance.
    pub fn folders(&self) -> Vec<FolderSelection> {
        let mut folders = vec![FolderSelection::All];
        for record in &self.records {
            let seen = folders.iter().any(|f| matches!(f, FolderSelection::Named(name) if *name == record.folder));
            if !seen {
                folders.push(FolderSelection::Named(record.folder.clone()));
            }
        }
        folders
    }
}
