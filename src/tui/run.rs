use std::io::stdout;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::crossterm::{execute, terminal};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::broadcast;
use tracing::info;

use crate::market::runtime::MarketRuntime;
use crate::market::types::PriceBoard;
use crate::tui::{app::App, ui::draw};

pub async fn run_tui(market: &MarketRuntime, initial: PriceBoard) -> anyhow::Result<()> {
    terminal::enable_raw_mode()?;
    execute!(stdout(), terminal::EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(initial);
    let mut market_rx = market.subscribe();

    let res = loop {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if app.should_quit {
            info!("quit requested");
            break Ok(());
        }

        // drain pending ticks, newest board wins; a lagged receiver just
        // skips to what is still buffered
        loop {
            match market_rx.try_recv() {
                Ok(board) => app.on_board(board),
                Err(broadcast::error::TryRecvError::Lagged(_)) => continue,
                Err(_) => break,
            }
        }

        terminal.draw(|f| draw(f, &app))?;
    };

    terminal::disable_raw_mode()?;
    execute!(stdout(), terminal::LeaveAlternateScreen)?;
    res
}
