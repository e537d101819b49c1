use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::Mutex;

use sc_mini_player::config::{Args, PlayerConfig, PAGE_LOAD_DELAY, PLAYLIST_INFO_DELAY};
use sc_mini_player::controller::{PageTabs, PlaybackController, TabNavigator};
use sc_mini_player::logging;
use sc_mini_player::model::{Document, Page, PageEvent, Tab};
use sc_mini_player::view::{AppView, ViewContext};
use sc_mini_player::widget::{demo_playlist, load_playlist, SimulatedWidgetFactory};

const PANEL_TEXT: [(Tab, &str); 6] = [
    (Tab::About, "Producer and developer. Press space to play the embedded playlist, n/p to skip, o to open the track."),
    (Tab::Experiences, "Sound design, live sets and a few years of shipping software."),
    (Tab::Projects, "Mini-player widgets, audio tooling and small web experiments."),
    (Tab::Skills, "Mixing, mastering, Rust, TypeScript."),
    (Tab::Photos, "Nothing to see in a terminal."),
    (Tab::Following, "Artists worth a listen."),
];

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _guard = match logging::init_logging(&args.log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {}", e);
            None
        }
    };

    tracing::info!("=== sc-mini-player starting ===");

    let tracks = match &args.playlist_file {
        Some(path) => load_playlist(path)?,
        None => demo_playlist()?,
    };

    let config = PlayerConfig::default();
    let (columns, _) = terminal::size()?;
    let mut document = Document::profile_page(u32::from(columns) * args.px_per_column);
    for (tab, text) in PANEL_TEXT {
        document.set_text(tab.content_id(), text);
    }
    let page = Arc::new(Mutex::new(document));

    let navigator: Arc<PageTabs<Document>> = Arc::new(PageTabs::new(page.clone(), config.tab_fade));
    let factory = Arc::new(SimulatedWidgetFactory::new(tracks));
    let controller = PlaybackController::new(page.clone(), factory, navigator.clone(), config);

    // Widget setup runs once the page has loaded
    let controller_for_init = controller.clone();
    let playlist_url = args.playlist_url.clone();
    tokio::spawn(async move {
        tokio::time::sleep(PAGE_LOAD_DELAY).await;
        controller_for_init.initialize(&playlist_url).await;
        tokio::time::sleep(PLAYLIST_INFO_DELAY).await;
        controller_for_init.playlist_info().await;
    });

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, page, controller, navigator, args.px_per_column).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("sc-mini-player shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    page: Arc<Mutex<Document>>,
    controller: PlaybackController<Document>,
    navigator: Arc<PageTabs<Document>>,
    px_per_column: u32,
) -> io::Result<()> {
    let started = Instant::now();

    loop {
        {
            let document = page.lock().await;
            let status = document
                .opened_links()
                .last()
                .map(|url| format!(" opened {}", url));
            let ctx = ViewContext {
                elapsed: started.elapsed(),
                status: status.as_deref(),
            };
            terminal.draw(|f| {
                AppView::render(f, &document, &ctx);
            })?;
        }

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char(' ') => {
                    controller.handle_page_event(PageEvent::key("Space")).await;
                }
                KeyCode::Char(c @ ('n' | 'p' | 'o')) => {
                    let surface = page.lock().await.visible_surface();
                    if let Some(surface) = surface {
                        let ids = surface.ids();
                        let id = match c {
                            'n' => ids.next,
                            'p' => ids.prev,
                            _ => ids.open,
                        };
                        controller.handle_page_event(PageEvent::click(id)).await;
                    }
                }
                KeyCode::Char(c @ '1'..='6') => {
                    let index = (c as usize) - ('1' as usize);
                    navigator.show_tab(Tab::ALL[index]);
                }
                _ => {}
            },
            Event::Resize(columns, _) => {
                page.lock()
                    .await
                    .set_viewport_width(u32::from(columns) * px_per_column);
                controller.handle_page_event(PageEvent::Resize).await;
            }
            _ => {}
        }
    }

    Ok(())
}
