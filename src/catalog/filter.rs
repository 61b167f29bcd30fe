// src/catalog/filter.rs
use super::{FileRecord, FolderSelection};

/// Search text plus selected folder. Holds no results of its own: every
/// call to `apply` walks the records again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFilter {
    pub search: String,
    pub folder: FolderSelection,
}

impl ViewFilter {
    pub fn new(search: impl Into<String>, folder: FolderSelection) -> Self {
        ViewFilter { search: search.into(), folder }
    }

    pub fn apply<'a>(&self, records: &'a [FileRecord]) -> Vec<&'a FileRecord> {
        let needle = self.search.to_lowercase();
        records
            .iter()
            .filter(|record| matches_search(record, &needle) && self.folder.matches(&record.folder))
            .collect()
    }
}

fn matches_search(record: &FileRecord, needle: &str) -> bool {
    record.name.to_lowercase().contains(needle)
        || record.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, FileType};
    use chrono::NaiveDate;

    fn record(name: &str, tags: &[&str], folder: &str) -> FileRecord {
        FileRecord {
            id: name.to_string(),
            name: name.to_string(),
            size: "1 KB".to_string(),
            file_type: FileType::from_name(name),
            upload_date: NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            folder: folder.to_string(),
        }
    }

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.append(vec![
            record("Report.pdf", &["work"], "Docs"),
            record("Photo.png", &["personal"], "Media"),
        ]);
        catalog
    }

    fn names(records: Vec<&FileRecord>) -> Vec<&str> {
        records.into_iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_search_by_name() {
        let catalog = catalog();
        let filter = ViewFilter::new("repo", FolderSelection::All);
        assert_eq!(names(filter.apply(catalog.all())), ["Report.pdf"]);
    }

    #[test]
    fn test_folder_only() {
        let catalog = catalog();
        let filter = ViewFilter::new("", FolderSelection::Named("Media".to_string()));
        assert_eq!(names(filter.apply(catalog.all())), ["Photo.png"]);
    }

    #[test]
    fn test_both_predicates_must_hold() {
        let catalog = catalog();
        let filter = ViewFilter::new("personal", FolderSelection::Named("Docs".to_string()));
        assert!(filter.apply(catalog.all()).is_empty());
    }

    #[test]
    fn test_search_matches_tags_case_insensitive() {
        let catalog = catalog();
        let filter = ViewFilter::new("PERS", FolderSelection::All);
        assert_eq!(names(filter.apply(catalog.all())), ["Photo.png"]);
    }

    #[test]
    fn test_empty_search_keeps_order() {
        let catalog = catalog();
        let filter = ViewFilter::default();
        assert_eq!(names(filter.apply(catalog.all())), ["Report.pdf", "Photo.png"]);
    }

    #[test]
    fn test_folder_match_is_exact() {
        let catalog = catalog();
        let filter = ViewFilter::new("", FolderSelection::Named("media".to_string()));
        assert!(filter.apply(catalog.all()).is_empty());
    }

    #[test]
    fn test_search_is_not_trimmed() {
        let catalog = catalog();
        let filter = ViewFilter::new(" report", FolderSelection::All);
        assert!(filter.apply(catalog.all()).is_empty());
    }

    #[test]
    fn test_folder_named_like_pseudo_folder() {
        let mut catalog = catalog();
        catalog.append(vec![record("odd.txt", &[], "All files")]);
        let filter = ViewFilter::new("", FolderSelection::Named("All files".to_string()));
        assert_eq!(names(filter.apply(catalog.all())), ["odd.txt"]);
    }

    #[test]
    fn test_repeatable() {
        let catalog = catalog();
        let filter = ViewFilter::new("o", FolderSelection::All);
        assert_eq!(filter.apply(catalog.all()), filter.apply(catalog.all()));
    }

    #[test]
    fn test_empty_catalog() {
        let filter = ViewFilter::new("anything", FolderSelection::All);
        assert!(filter.apply(&[]).is_empty());
    }
}
