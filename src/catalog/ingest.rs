// src/catalog/ingest.rs
use super::{FileRecord, FileType};
use crate::utils::format_size;
use chrono::{DateTime, Utc};

pub const DEFAULT_FOLDER: &str = "Shared";
pub const DEFAULT_TAG: &str = "new";

/// A dropped or picked file as the host hands it over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub name: String,
    pub size: u64,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        FileHandle { name: name.into(), size }
    }
}

/// Turns file handles into catalog records.
///
/// Ids are `<unix millis>-<sequence>`, where the sequence counts every
/// handle this ingestor has seen, so ids stay unique across batches landing
/// in the same millisecond.
#[derive(Debug, Clone)]
pub struct Ingestor {
    default_folder: String,
    default_tag: String,
    seq: u64,
}

impl Default for Ingestor {
    fn default() -> Self {
        Ingestor::new(DEFAULT_FOLDER, DEFAULT_TAG)
    }
}

impl Ingestor {
    pub fn new(default_folder: impl Into<String>, default_tag: impl Into<String>) -> Self {
        let mut default_folder = default_folder.into();
        if default_folder.is_empty() {
            default_folder = DEFAULT_FOLDER.to_string();
        }

        Ingestor { default_folder, default_tag: default_tag.into(), seq: 0 }
    }

    pub fn default_folder(&self) -> &str {
        &self.default_folder
    }

    pub fn ingest(&mut self, handles: impl IntoIterator<Item = FileHandle>) -> Vec<FileRecord> {
        self.ingest_at(handles, Utc::now())
    }

    pub fn ingest_at(&mut self, handles: impl IntoIterator<Item = FileHandle>, now: DateTime<Utc>) -> Vec<FileRecord> {
        let millis = now.timestamp_millis();
        let upload_date = now.date_naive();

        let records: Vec<FileRecord> = handles
            .into_iter()
            .map(|handle| {
                let id = format!("{}-{}", millis, self.seq);
                self.seq += 1;

                FileRecord {
                    id,
                    file_type: FileType::from_name(&handle.name),
                    size: format_size(handle.size),
                    name: handle.name,
                    upload_date,
                    tags: vec![self.default_tag.clone()],
                    folder: self.default_folder.clone(),
                }
            })
            .collect();

        tracing::info!(count = records.len(), folder = %self.default_folder, "ingested files");
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use chrono::TimeZone;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 8, 2, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_ingest_batch() {
        let mut ingestor = Ingestor::default();
        let records = ingestor.ingest_at(
            vec![FileHandle::new("a.txt", 500), FileHandle::new("b.unknownext", 2000)],
            noon(),
        );

        assert_eq!(records.len(), 2);
        assert_ne!(records[0].id, records[1].id);

        assert_eq!(records[0].name, "a.txt");
        assert_eq!(records[0].size, "500 Bytes");
        assert_eq!(records[0].file_type, FileType::Document);

        assert_eq!(records[1].size, "1.95 KB");
        assert_eq!(records[1].file_type, FileType::File);

        for record in &records {
            assert_eq!(record.tags, vec!["new".to_string()]);
            assert_eq!(record.folder, "Shared");
            assert_eq!(record.upload_date.to_string(), "2024-08-02");
        }
    }

    #[test]
    fn test_ids_unique_across_batches_in_same_instant() {
        let mut ingestor = Ingestor::default();
        let mut catalog = Catalog::new();
        for _ in 0..3 {
            catalog.append(ingestor.ingest_at(vec![FileHandle::new("x.png", 10); 4], noon()));
        }

        let mut ids: Vec<&str> = catalog.all().iter().map(|r| r.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn test_empty_folder_falls_back() {
        let mut ingestor = Ingestor::new("", "fresh");
        let records = ingestor.ingest_at(vec![FileHandle::new("clip.mp4", 0)], noon());
        assert_eq!(records[0].folder, DEFAULT_FOLDER);
        assert_eq!(records[0].tags, vec!["fresh".to_string()]);
        assert_eq!(records[0].size, "0 Bytes");
        assert_eq!(records[0].file_type, FileType::Video);
    }

    #[test]
    fn test_serialized_shape() {
        let mut ingestor = Ingestor::default();
        let record = ingestor.ingest_at(vec![FileHandle::new("scan.PDF", 1024)], noon()).remove(0);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "pdf");
        assert_eq!(value["upload_date"], "2024-08-02");
        assert_eq!(value["size"], "1 KB");
    }
}
