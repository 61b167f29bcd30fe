// src/ui/render.rs
use super::{App, Focus};
use crate::catalog::FileRecord;
use crate::config::ViewMode;
use crate::utils::format_date;
use ratatui::{prelude::*, widgets::*};

const CARD_WIDTH: u16 = 32;
const CARD_HEIGHT: u16 = 6;
pub const SIDEBAR_WIDTH: u16 = 28;

/// Card columns the grid fits on a screen `screen_width` cells wide.
pub fn grid_columns(screen_width: u16) -> usize {
    (screen_width.saturating_sub(SIDEBAR_WIDTH) / CARD_WIDTH).max(1) as usize
}

pub fn draw(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(8), Constraint::Length(1)])
        .split(f.size());

    draw_header(f, app, rows[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(30)])
        .split(rows[1]);

    draw_sidebar(f, app, body[0]);
    draw_main(f, app, body[1]);
    draw_footer(f, app, rows[2]);

    if let Some(picker) = &app.picker {
        let area = f.size();
        draw_picker(f, picker, area);
    }
}

fn focused_border(active: bool) -> Style {
    if active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let title = Line::from(vec![
        Span::styled(" 🔒 Personal Vault ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Span::styled("private access  ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("[{} files]", app.catalog.len()), Style::default().fg(Color::Cyan)),
    ]);
    let header = Paragraph::new(title).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, area);
}

fn draw_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let folders = app.folders();
    let items: Vec<ListItem> = folders
        .iter()
        .map(|folder| {
            let count = app.catalog.all().iter().filter(|r| folder.matches(&r.folder)).count();
            ListItem::new(format!("▸ {} ({})", folder.label(app.all_files_label()), count))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Folders ")
                .borders(Borders::ALL)
                .border_style(focused_border(app.focus == Focus::Folders)),
        )
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan));

    let mut state = ListState::default().with_selected(Some(app.selected_folder_index()));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_main(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    draw_upload_zone(f, app, rows[0]);

    let bar = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(20)])
        .split(rows[1]);
    draw_search(f, app, bar[0]);
    draw_tabs(f, app, bar[1]);

    let visible = app.visible();
    if visible.is_empty() {
        let empty = Paragraph::new("No files match the current search and folder.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, rows[2]);
        return;
    }

    match app.view {
        ViewMode::Grid => draw_grid(f, app, &visible, rows[2]),
        ViewMode::List => draw_list(f, app, &visible, rows[2]),
    }
}

fn draw_upload_zone(f: &mut Frame, app: &App, area: Rect) {
    let text = match &app.status {
        Some(status) => Line::from(vec![
            Span::styled("✔ ", Style::default().fg(Color::Green)),
            Span::raw(status.clone()),
        ]),
        None => Line::from(Span::styled(
            "Drop files onto the terminal or press o to choose files",
            Style::default().fg(Color::DarkGray),
        )),
    };
    let zone = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(focused_border(app.focus == Focus::Picker)),
    );
    f.render_widget(zone, area);
}

fn draw_search(f: &mut Frame, app: &App, area: Rect) {
    let searching = app.focus == Focus::Search;
    let content = if app.filter.search.is_empty() && !searching {
        Span::styled("Search files and tags...", Style::default().fg(Color::DarkGray))
    } else if searching {
        Span::raw(format!("{}▏", app.filter.search))
    } else {
        Span::raw(app.filter.search.clone())
    };

    let search = Paragraph::new(Line::from(vec![Span::raw("⌕ "), content]))
        .block(Block::default().borders(Borders::ALL).border_style(focused_border(searching)));
    f.render_widget(search, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let selected = match app.view {
        ViewMode::Grid => 0,
        ViewMode::List => 1,
    };
    let tabs = Tabs::new(vec!["Grid", "List"])
        .select(selected)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, area);
}

fn tag_spans(record: &FileRecord) -> Vec<Span<'static>> {
    record
        .tags
        .iter()
        .flat_map(|tag| [Span::styled(format!("#{}", tag), Style::default().fg(Color::Magenta)), Span::raw(" ")])
        .collect()
}

fn draw_grid(f: &mut Frame, app: &App, visible: &[&FileRecord], area: Rect) {
    let columns = (area.width / CARD_WIDTH).max(1) as usize;
    let rows_fit = (area.height / CARD_HEIGHT).max(1) as usize;
    let cursor_row = app.file_cursor / columns;
    let first_row = cursor_row.saturating_sub(rows_fit - 1);

    for (index, record) in visible.iter().enumerate().skip(first_row * columns).take(rows_fit * columns) {
        let row = index / columns - first_row;
        let col = index % columns;
        let card = Rect {
            x: area.x + col as u16 * CARD_WIDTH,
            y: area.y + row as u16 * CARD_HEIGHT,
            width: CARD_WIDTH.min(area.width),
            height: CARD_HEIGHT,
        };
        if card.bottom() > area.bottom() {
            continue;
        }

        let selected = index == app.file_cursor && app.focus == Focus::Files;
        let block = Block::default()
            .title(format!(" {} {} ", record.file_type.icon(), record.name))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if selected { Style::default().fg(Color::Cyan) } else { Style::default() });

        let lines = vec![
            Line::from(format!("📅 {}", format_date(record.upload_date))),
            Line::from(format!("💾 {}", record.size)),
            Line::from(tag_spans(record)),
            Line::from(Span::styled(record.folder.clone(), Style::default().fg(Color::DarkGray))),
        ];
        f.render_widget(Paragraph::new(lines).block(block), card);
    }
}

fn draw_list(f: &mut Frame, app: &App, visible: &[&FileRecord], area: Rect) {
    let rows: Vec<Row> = visible
        .iter()
        .map(|record| {
            Row::new(vec![
                Cell::from(record.file_type.icon()),
                Cell::from(record.name.clone()),
                Cell::from(record.size.clone()),
                Cell::from(format_date(record.upload_date)),
                Cell::from(record.folder.clone()),
                Cell::from(Line::from(tag_spans(record))),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(2),
        Constraint::Min(20),
        Constraint::Length(10),
        Constraint::Length(11),
        Constraint::Length(14),
        Constraint::Min(12),
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["", "Name", "Size", "Uploaded", "Folder", "Tags"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).border_style(focused_border(app.focus == Focus::Files)))
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = TableState::default().with_selected(Some(app.file_cursor));
    f.render_stateful_widget(table, area, &mut state);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let help = match app.focus {
        Focus::Search => "type to filter · Ctrl-U clear · Enter/Esc done",
        Focus::Picker => "↑↓ move · Space select · Enter open/upload · ⌫ up · Esc cancel",
        Focus::Files | Focus::Folders => "/ search · Tab folders · v grid/list · o choose files · q quit",
    };
    f.render_widget(Paragraph::new(help).style(Style::default().fg(Color::DarkGray)), area);
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn draw_picker(f: &mut Frame, picker: &crate::filesystem::FilePicker, area: Rect) {
    let popup = centered(area, 70, 70);
    f.render_widget(Clear, popup);

    let items: Vec<ListItem> = picker
        .entries
        .iter()
        .map(|entry| {
            let line = if entry.is_dir {
                Line::from(Span::styled(format!("    {}/", entry.name), Style::default().fg(Color::Blue)))
            } else {
                let mark = if picker.is_selected(&entry.path) { "[x]" } else { "[ ]" };
                Line::from(format!("{} {}  {}", mark, entry.name, crate::utils::format_size(entry.size)))
            };
            ListItem::new(line)
        })
        .collect();

    let title = format!(" {} · {} selected ", picker.current_path.display(), picker.selected_count());
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)))
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default().with_selected(Some(picker.cursor));
    f.render_stateful_widget(list, popup, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_grid_shows_records() {
        let app = App::new(&AppConfig::default());
        let screen = rendered(&app);
        assert!(screen.contains("Monthly budget.xlsx"));
        assert!(screen.contains("All files"));
        assert!(screen.contains("[3 files]"));
    }

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(20), 1);
        assert_eq!(grid_columns(SIDEBAR_WIDTH + 63), 1);
        assert_eq!(grid_columns(SIDEBAR_WIDTH + 64), 2);
        assert_eq!(grid_columns(120), 2);
    }

    #[test]
    fn test_list_and_empty_state() {
        let mut app = App::new(&AppConfig::default());
        app.toggle_view();
        assert!(rendered(&app).contains("Uploaded"));

        app.set_search("no such file".to_string());
        assert!(rendered(&app).contains("No files match"));
    }
}
