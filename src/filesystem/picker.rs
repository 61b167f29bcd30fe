// src/filesystem/picker.rs
use super::file::handles_from_paths;
use super::PickerEntry;
use crate::catalog::FileHandle;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Multi-select file browser standing in for the browser's file dialog.
pub struct FilePicker {
    pub current_path: PathBuf,
    pub entries: Vec<PickerEntry>,
    pub show_hidden: bool,
    pub cursor: usize,
    selected: Vec<PathBuf>,
}

impl FilePicker {
    pub fn new(path: PathBuf, show_hidden: bool) -> Self {
        let mut picker = FilePicker {
            current_path: path,
            entries: Vec::new(),
            show_hidden,
            cursor: 0,
            selected: Vec::new(),
        };
        picker.refresh();
        picker
    }

    pub fn refresh(&mut self) {
        self.entries.clear();
        let path = &self.current_path;

        for entry in WalkDir::new(path).max_depth(1).into_iter().flatten() {
            let entry_path = entry.path();
            if entry_path == path {
                continue;
            }

            if let Some(picker_entry) = PickerEntry::from_path(entry_path) {
                if !self.show_hidden && picker_entry.is_hidden {
                    continue;
                }
                self.entries.push(picker_entry);
            }
        }

        self.sort();
        self.cursor = self.cursor.min(self.entries.len().saturating_sub(1));
        tracing::debug!(path = %self.current_path.display(), entries = self.entries.len(), "picker refreshed");
    }

    fn sort(&mut self) {
        self.entries.sort_by(|a, b| match (a.is_dir, b.is_dir) {
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        });
    }

    pub fn navigate_to(&mut self, path: &Path) {
        if path.is_dir() {
            self.current_path = path.to_path_buf();
            self.cursor = 0;
            self.refresh();
        }
    }

    pub fn navigate_up(&mut self) {
        if let Some(parent) = self.current_path.parent() {
            self.current_path = parent.to_path_buf();
            self.cursor = 0;
            self.refresh();
        }
    }

    pub fn move_cursor(&mut self, delta: i32) {
        if self.entries.is_empty() {
            return;
        }
        let last = self.entries.len() as i32 - 1;
        self.cursor = (self.cursor as i32 + delta).clamp(0, last) as usize;
    }

    pub fn current_entry(&self) -> Option<&PickerEntry> {
        self.entries.get(self.cursor)
    }

    /// Enters a directory, or toggles selection of a file.
    pub fn activate(&mut self) {
        let Some(entry) = self.current_entry() else { return };
        if entry.is_dir {
            let path = entry.path.clone();
            self.navigate_to(&path);
        } else {
            self.toggle_selected();
        }
    }

    pub fn toggle_selected(&mut self) {
        let Some(entry) = self.current_entry() else { return };
        if entry.is_dir {
            return;
        }
        let path = entry.path.clone();
        match self.selected.iter().position(|p| *p == path) {
            Some(index) => {
                self.selected.remove(index);
            }
            None => self.selected.push(path),
        }
    }

    pub fn is_selected(&self, path: &Path) -> bool {
        self.selected.iter().any(|p| p == path)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Handles for the selected files in selection order; clears the
    /// selection.
    pub fn take_selection(&mut self) -> Vec<FileHandle> {
        let selected = std::mem::take(&mut self.selected);
        handles_from_paths(selected.iter().map(PathBuf::as_path))
    }
}
