use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use comm_tracker::app::App;
use comm_tracker::config::{self, expand_path};
use comm_tracker::core::Tab;
use comm_tracker::diagnostics::init_logging;
use comm_tracker::domain::CalendarDay;
use comm_tracker::ui;

#[derive(Debug, Parser)]
#[command(
    name = "comm-tracker",
    version,
    about = "Communication Tracker: a terminal dashboard for company outreach"
)]
struct Args {
    /// Config file (default: $COMM_TRACKER_CONFIG or ~/.config/comm-tracker/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Treat this day as today (YYYY-MM-DD)
    #[arg(long)]
    date: Option<CalendarDay>,

    /// Initial tab: user, admin or reports
    #[arg(long)]
    tab: Option<Tab>,

    /// Log file, overrides the config
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let (config, config_path) =
        config::load(args.config.as_deref()).context("failed to load config")?;

    let log_path = args
        .log_file
        .as_ref()
        .and_then(|path| expand_path(&path.to_string_lossy()))
        .unwrap_or_else(|| config.log_path());
    init_logging(&log_path, &config.log_level).context("failed to initialize logging")?;

    let today = args.date.unwrap_or_else(CalendarDay::today);
    tracing::info!(
        config = ?config_path,
        log = %log_path.display(),
        %today,
        "starting"
    );

    let mut app = App::with_defaults(today).with_week_start(config.week_start);
    if let Some(tab) = args.tab {
        app = app.with_tab(tab);
    }

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, config.tick_rate());

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "terminal loop failed");
        eprintln!("{err:?}");
    }
    tracing::info!("shutdown");

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => {
                    if let Some(size) = terminal_rect() {
                        app.handle_mouse(mouse, size);
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn terminal_rect() -> Option<Rect> {
    let (width, height) = crossterm::terminal::size().ok()?;
    Some(Rect {
        x: 0,
        y: 0,
        width,
        height,
    })
}
