use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::path::PathBuf;
use vaultui::catalog::FolderSelection;
use vaultui::filesystem::{self, file::handles_from_paths};
use vaultui::ui::{self, App};
use vaultui::{config, logging};

#[derive(Debug, Parser)]
#[command(name = "vaultui", version, about = "Personal file vault in the terminal")]
struct Cli {
    /// Config file (defaults to <config dir>/vaultui/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial search text
    #[arg(long, default_value = "")]
    search: String,

    /// Initial folder; omit for all files
    #[arg(long)]
    folder: Option<String>,

    /// Print the filtered catalog and exit
    #[arg(long)]
    list: bool,

    /// Like --list, as JSON
    #[arg(long)]
    json: bool,

    /// Files or glob patterns to upload at start-up
    paths: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("loading configuration")?;
    let log_path = logging::init(&cfg.logging).context("initialising logging")?;

    let mut app = App::new(&cfg);
    let paths = filesystem::expand_patterns(&cli.paths)?;
    app.upload(handles_from_paths(paths.iter().map(PathBuf::as_path)));
    app.set_search(cli.search.clone());
    if let Some(folder) = cli.folder.clone() {
        app.select_folder(FolderSelection::Named(folder));
    }

    if cli.json {
        println!("{}", ui::listing::to_json(&app)?);
        return Ok(());
    }
    if cli.list {
        for line in ui::listing::listing(&app) {
            println!("{}", line);
        }
        return Ok(());
    }

    tracing::info!(log = %log_path.display(), records = app.catalog.len(), "starting terminal ui");
    run_terminal(&mut app)
}

/// Raw mode is switched off again whether set-up, the loop, or neither fails.
fn run_terminal(app: &mut App) -> anyhow::Result<()> {
    enable_raw_mode()?;
    ui::session::guarded(|| open_and_run(app), restore_terminal)
}

fn open_and_run(app: &mut App) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    event_loop(&mut terminal, app)
}

fn restore_terminal() -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), DisableBracketedPaste, LeaveAlternateScreen, cursor::Show)?;
    Ok(())
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    while !app.should_quit {
        app.set_screen_width(terminal.size()?.width);
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Paste(payload) => app.handle_paste(&payload),
            _ => {}
        }
    }
    Ok(())
}
