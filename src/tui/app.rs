use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::market::types::{PriceBoard, Ticker};
use crate::portfolio::{summarize, PortfolioSummary};
use crate::session::{SessionState, View};
use crate::store::AccountStore;

pub const PRESET_LOGINS: [&str; 2] = ["user1@email.com", "user2@email.com"];

/// Everything the draw function reads: session + accounts + the latest
/// board, plus cursor state for the interactive lists.
pub struct App {
    pub session: SessionState,
    pub accounts: AccountStore,
    pub board: PriceBoard,

    /// Free-text field on the login view.
    pub email_input: String,
    /// Login view row: 0 = input field, 1..=2 = preset accounts.
    pub login_cursor: usize,
    /// Selected row on the dashboard / picker lists.
    pub row_cursor: usize,

    pub should_quit: bool,
}

impl App {
    pub fn new(board: PriceBoard) -> Self {
        Self {
            session: SessionState::new(),
            accounts: AccountStore::seeded(),
            board,
            email_input: String::new(),
            login_cursor: 0,
            row_cursor: 0,
            should_quit: false,
        }
    }

    /// Install the latest snapshot from the market runtime.
    pub fn on_board(&mut self, board: PriceBoard) {
        self.board = board;
    }

    /* ---------- Actions ---------- */

    /// Any non-empty identity is accepted; this is a demo, not auth.
    pub fn login(&mut self, email: &str) {
        let email = email.trim();
        if email.is_empty() {
            return;
        }

        self.accounts.ensure(email);
        self.session.login(email.to_string());
        self.email_input.clear();
        self.login_cursor = 0;
        self.row_cursor = 0;
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.row_cursor = 0;
    }

    pub fn navigate(&mut self, view: View) {
        let before = self.session.view();
        self.session.navigate(view);
        if self.session.view() != before {
            self.row_cursor = 0;
        }
    }

    pub fn subscribe(&mut self, ticker: Ticker) {
        if let Some(email) = self.session.active_email() {
            let email = email.to_string();
            self.accounts.subscribe(&email, ticker);
        }
    }

    pub fn unsubscribe(&mut self, ticker: Ticker) {
        if let Some(email) = self.session.active_email() {
            let email = email.to_string();
            self.accounts.unsubscribe(&email, ticker);
        }
    }

    /* ---------- Projections ---------- */

    pub fn subscriptions(&self) -> &[Ticker] {
        self.session
            .active_email()
            .and_then(|email| self.accounts.get(email))
            .map(|account| account.subscriptions())
            .unwrap_or(&[])
    }

    pub fn summary(&self) -> PortfolioSummary {
        summarize(&self.board, self.subscriptions())
    }

    /* ---------- Input ---------- */

    pub fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            // demo navigation strip
            KeyCode::F(1) => {
                self.navigate(View::Login);
                return;
            }
            KeyCode::F(2) => {
                self.navigate(View::Dashboard);
                return;
            }
            KeyCode::F(3) => {
                self.navigate(View::Subscribe);
                return;
            }
            _ => {}
        }

        match self.session.view() {
            View::Login => self.on_key_login(key),
            View::Dashboard => self.on_key_dashboard(key),
            View::Subscribe => self.on_key_subscribe(key),
        }
    }

    fn on_key_login(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Up => self.login_cursor = self.login_cursor.saturating_sub(1),
            KeyCode::Down => {
                self.login_cursor = (self.login_cursor + 1).min(PRESET_LOGINS.len())
            }
            KeyCode::Enter => match self.login_cursor {
                0 => {
                    let email = self.email_input.clone();
                    self.login(&email);
                }
                n => self.login(PRESET_LOGINS[n - 1]),
            },
            KeyCode::Backspace => {
                self.login_cursor = 0;
                self.email_input.pop();
            }
            KeyCode::Char(c) => {
                // typing always targets the input field
                self.login_cursor = 0;
                self.email_input.push(c);
            }
            _ => {}
        }
    }

    fn on_key_dashboard(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('l') => self.logout(),
            KeyCode::Tab | KeyCode::Char('s') => self.navigate(View::Subscribe),
            KeyCode::Up => self.row_cursor = self.row_cursor.saturating_sub(1),
            KeyCode::Down => {
                let len = self.subscriptions().len();
                if len > 0 {
                    self.row_cursor = (self.row_cursor + 1).min(len - 1);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(&ticker) = self.subscriptions().get(self.row_cursor) {
                    self.unsubscribe(ticker);
                    let len = self.subscriptions().len();
                    self.row_cursor = self.row_cursor.min(len.saturating_sub(1));
                }
            }
            _ => {}
        }
    }

    fn on_key_subscribe(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('l') => self.logout(),
            KeyCode::Tab | KeyCode::Char('b') => self.navigate(View::Dashboard),
            KeyCode::Up => self.row_cursor = self.row_cursor.saturating_sub(1),
            KeyCode::Down => {
                self.row_cursor = (self.row_cursor + 1).min(Ticker::ALL.len() - 1)
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let ticker = Ticker::ALL[self.row_cursor];
                let subscribed = self
                    .session
                    .active_email()
                    .and_then(|email| self.accounts.get(email))
                    .map(|account| account.is_subscribed(ticker))
                    .unwrap_or(false);

                if subscribed {
                    self.unsubscribe(ticker);
                } else {
                    self.subscribe(ticker);
                }
            }
            _ => {}
        }
    }
}
