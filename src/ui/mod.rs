// src/ui/mod.rs
pub mod listing;
pub mod render;
pub mod session;

pub use render::draw;

use crate::catalog::{Catalog, FileHandle, FileRecord, FolderSelection, Ingestor, ViewFilter};
use crate::config::{AppConfig, ViewMode};
use crate::filesystem::file::handles_from_paths;
use crate::filesystem::{parse_dropped, FilePicker};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Files,
    Folders,
    Search,
    Picker,
}

/// Everything the storage page keeps in memory. Each event handler runs to
/// completion; derived views are recomputed from the catalog on every read.
pub struct App {
    pub catalog: Catalog,
    pub filter: ViewFilter,
    pub view: ViewMode,
    pub focus: Focus,
    pub file_cursor: usize,
    pub picker: Option<FilePicker>,
    pub status: Option<String>,
    pub should_quit: bool,
    grid_columns: usize,
    ingestor: Ingestor,
    all_files_label: String,
    picker_dir: PathBuf,
    show_hidden: bool,
}

impl App {
    pub fn new(cfg: &AppConfig) -> Self {
        let catalog = if cfg.catalog.seed_samples { Catalog::with_samples() } else { Catalog::new() };
        let picker_dir = cfg
            .ui
            .picker_dir
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));

        App {
            catalog,
            filter: ViewFilter::default(),
            view: cfg.ui.view,
            focus: Focus::Files,
            file_cursor: 0,
            picker: None,
            status: None,
            should_quit: false,
            grid_columns: 1,
            ingestor: Ingestor::new(cfg.catalog.default_folder.clone(), cfg.catalog.default_tag.clone()),
            all_files_label: cfg.catalog.all_files_label.clone(),
            picker_dir,
            show_hidden: cfg.ui.show_hidden,
        }
    }

    pub fn all_files_label(&self) -> &str {
        &self.all_files_label
    }

    pub fn visible(&self) -> Vec<&FileRecord> {
        self.filter.apply(self.catalog.all())
    }

    pub fn folders(&self) -> Vec<FolderSelection> {
        self.catalog.folders()
    }

    pub fn selected_folder_index(&self) -> usize {
        self.folders().iter().position(|f| *f == self.filter.folder).unwrap_or(0)
    }

    /// Ingests one batch and appends it to the catalog. Returns how many
    /// records were added.
    pub fn upload(&mut self, handles: Vec<FileHandle>) -> usize {
        if handles.is_empty() {
            return 0;
        }
        let records = self.ingestor.ingest(handles);
        let count = records.len();
        self.catalog.append(records);
        self.status = Some(format!("Uploaded {} file(s) to {}", count, self.ingestor.default_folder()));
        self.clamp_cursor();
        count
    }

    /// A terminal drop arrives as a paste. Text that names no readable file
    /// goes into the search box when it has focus.
    pub fn handle_paste(&mut self, payload: &str) {
        let paths = parse_dropped(payload);
        let handles = handles_from_paths(paths.iter().map(PathBuf::as_path));
        if !handles.is_empty() {
            self.upload(handles);
        } else if self.focus == Focus::Search {
            let mut search = self.filter.search.clone();
            search.push_str(payload.trim_end_matches(['\r', '\n']));
            self.set_search(search);
        } else {
            self.status = Some("Nothing to upload in dropped text".to_string());
        }
    }

    pub fn set_search(&mut self, search: String) {
        tracing::debug!(search = %search, "search changed");
        self.filter.search = search;
        self.clamp_cursor();
    }

    pub fn select_folder(&mut self, folder: FolderSelection) {
        tracing::debug!(folder = folder.label(&self.all_files_label), "folder selected");
        self.filter.folder = folder;
        self.file_cursor = 0;
    }

    /// Keeps vertical grid movement in step with the number of card
    /// columns the screen fits.
    pub fn set_screen_width(&mut self, width: u16) {
        self.grid_columns = render::grid_columns(width);
    }

    pub fn toggle_view(&mut self) {
        self.view = self.view.toggled();
    }

    pub fn open_picker(&mut self) {
        let dir = self
            .picker
            .take()
            .map(|p| p.current_path)
            .unwrap_or_else(|| self.picker_dir.clone());
        self.picker = Some(FilePicker::new(dir, self.show_hidden));
        self.focus = Focus::Picker;
    }

    pub fn close_picker(&mut self) {
        if let Some(picker) = self.picker.take() {
            self.picker_dir = picker.current_path;
        }
        self.focus = Focus::Files;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.focus {
            Focus::Search => self.handle_search_key(key),
            Focus::Picker => self.handle_picker_key(key),
            Focus::Files | Focus::Folders => self.handle_browse_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Char('v') => self.toggle_view(),
            KeyCode::Char('o') => self.open_picker(),
            KeyCode::Tab => {
                self.focus = if self.focus == Focus::Files { Focus::Folders } else { Focus::Files };
            }
            KeyCode::Left | KeyCode::Char('h') => self.move_selection(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-self.row_step()),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(self.row_step()),
            _ => {}
        }
    }

    /// Cards per grid row; folders and the list move one entry at a time.
    fn row_step(&self) -> i32 {
        match (self.focus, self.view) {
            (Focus::Files, ViewMode::Grid) => self.grid_columns as i32,
            _ => 1,
        }
    }

    fn move_selection(&mut self, delta: i32) {
        match self.focus {
            Focus::Folders => {
                let folders = self.folders();
                let last = folders.len() as i32 - 1;
                let index = (self.selected_folder_index() as i32 + delta).clamp(0, last) as usize;
                self.select_folder(folders[index].clone());
            }
            _ => {
                let visible = self.visible().len();
                if visible > 0 {
                    self.file_cursor = (self.file_cursor as i32 + delta).clamp(0, visible as i32 - 1) as usize;
                }
            }
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => self.set_search(String::new()),
            KeyCode::Char(c) => {
                let mut search = self.filter.search.clone();
                search.push(c);
                self.set_search(search);
            }
            KeyCode::Backspace => {
                let mut search = self.filter.search.clone();
                search.pop();
                self.set_search(search);
            }
            KeyCode::Enter | KeyCode::Esc | KeyCode::Tab => self.focus = Focus::Files,
            _ => {}
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        let Some(picker) = self.picker.as_mut() else {
            self.focus = Focus::Files;
            return;
        };

        match key.code {
            KeyCode::Esc => self.close_picker(),
            KeyCode::Up | KeyCode::Char('k') => picker.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => picker.move_cursor(1),
            KeyCode::Char(' ') => picker.toggle_selected(),
            KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => picker.navigate_up(),
            KeyCode::Enter => {
                if picker.current_entry().map(|e| e.is_dir).unwrap_or(false) {
                    picker.activate();
                    return;
                }
                if picker.selected_count() == 0 {
                    picker.toggle_selected();
                }
                let handles = picker.take_selection();
                self.close_picker();
                self.upload(handles);
            }
            _ => {}
        }
    }

    fn clamp_cursor(&mut self) {
        let visible = self.visible().len();
        self.file_cursor = self.file_cursor.min(visible.saturating_sub(1));
    }
}
