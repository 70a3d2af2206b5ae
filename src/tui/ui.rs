use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs},
    Frame,
};

use crate::market::types::{PriceRecord, Ticker};
use crate::portfolio::{format_money, format_pct};
use crate::session::View;
use crate::tui::app::{App, PRESET_LOGINS};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // nav strip
            Constraint::Min(10),   // body
            Constraint::Length(3), // key hints
        ])
        .split(f.area());

    draw_nav(f, app, chunks[0]);

    match app.session.view() {
        View::Login => draw_login(f, app, chunks[1]),
        View::Dashboard => draw_dashboard(f, app, chunks[1]),
        View::Subscribe => draw_subscribe(f, app, chunks[1]),
    }

    draw_hints(f, app, chunks[2]);
}

/// Demo-only strip; F1/F2/F3 jump straight to a view.
fn draw_nav(f: &mut Frame, app: &App, area: Rect) {
    let selected = match app.session.view() {
        View::Login => 0,
        View::Dashboard => 1,
        View::Subscribe => 2,
    };

    let tabs = Tabs::new(vec!["Login [F1]", "Dashboard [F2]", "Subscribe [F3]"])
        .select(selected)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
        .block(Block::default().title("tickerdeck").borders(Borders::ALL));

    f.render_widget(tabs, area);
}

fn draw_login(f: &mut Frame, app: &App, area: Rect) {
    let selected = Style::default().add_modifier(Modifier::REVERSED);
    let row = |idx: usize, text: String| {
        if app.login_cursor == idx {
            Line::styled(text, selected)
        } else {
            Line::raw(text)
        }
    };

    let mut lines = vec![
        Line::raw("Sign in with any email. No password, this is a demo."),
        Line::raw(""),
        row(0, format!("  Email: {}_", app.email_input)),
        Line::raw(""),
        Line::raw("  Quick login:"),
    ];
    for (i, preset) in PRESET_LOGINS.iter().enumerate() {
        lines.push(row(i + 1, format!("    {preset}")));
    }

    let login = Paragraph::new(lines)
        .block(Block::default().title("Login").borders(Borders::ALL));
    f.render_widget(login, area);
}

fn draw_dashboard(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // summary
            Constraint::Min(5),    // holdings
        ])
        .split(area);

    let email = app.session.active_email().unwrap_or("-");
    let summary = app.summary();
    let header = Paragraph::new(format!(
        "Signed in: {}\nTotal value: {}   Avg change: {}",
        email,
        format_money(summary.total_value),
        format_pct(summary.avg_change),
    ))
    .block(Block::default().title("Portfolio").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let subs = app.subscriptions();
    if subs.is_empty() {
        let empty = Paragraph::new("No subscriptions yet. Press Tab to pick stocks.")
            .block(Block::default().title("Watched").borders(Borders::ALL));
        f.render_widget(empty, chunks[1]);
        return;
    }

    let rows = subs.iter().enumerate().map(|(i, &ticker)| {
        let rec = app.board.get(ticker);
        let row = Row::new(vec![
            Cell::from(ticker.symbol()),
            Cell::from(ticker.company()),
            Cell::from(format_money(rec.price)),
            Cell::from(format_pct(rec.change_pct)).style(change_style(rec)),
            Cell::from(format_money(rec.previous_price)),
        ]);
        if i == app.row_cursor {
            row.style(Style::default().add_modifier(Modifier::REVERSED))
        } else {
            row
        }
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),  // symbol
            Constraint::Length(22), // company
            Constraint::Length(12), // price
            Constraint::Length(10), // change
            Constraint::Length(12), // previous
        ],
    )
    .header(Row::new(["Sym", "Company", "Price", "Change", "Prev"]))
    .block(Block::default().title("Watched").borders(Borders::ALL));

    f.render_widget(table, chunks[1]);
}

fn draw_subscribe(f: &mut Frame, app: &App, area: Rect) {
    let account = app
        .session
        .active_email()
        .and_then(|email| app.accounts.get(email));

    let rows = Ticker::ALL.iter().enumerate().map(|(i, &ticker)| {
        let rec = app.board.get(ticker);
        let subscribed = account.map(|a| a.is_subscribed(ticker)).unwrap_or(false);

        let row = Row::new(vec![
            Cell::from(if subscribed { "[x]" } else { "[ ]" }),
            Cell::from(ticker.symbol()),
            Cell::from(ticker.company()),
            Cell::from(format_money(rec.price)),
            Cell::from(format_pct(rec.change_pct)).style(change_style(rec)),
        ]);
        if i == app.row_cursor {
            row.style(Style::default().add_modifier(Modifier::REVERSED))
        } else {
            row
        }
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Length(22),
            Constraint::Length(12),
            Constraint::Length(10),
        ],
    )
    .header(Row::new(["", "Sym", "Company", "Price", "Change"]))
    .block(Block::default().title("All stocks").borders(Borders::ALL));

    f.render_widget(table, area);
}

fn draw_hints(f: &mut Frame, app: &App, area: Rect) {
    let hints = match app.session.view() {
        View::Login => "type email + Enter | Up/Down pick | Esc quit",
        View::Dashboard => "Tab picker | Up/Down select | d unsubscribe | l logout | q quit",
        View::Subscribe => "Tab dashboard | Up/Down select | Enter toggle | l logout | q quit",
    };

    let footer = Paragraph::new(hints)
        .block(Block::default().title("Keys").borders(Borders::ALL));
    f.render_widget(footer, area);
}

fn change_style(rec: PriceRecord) -> Style {
    if rec.change_pct.is_sign_negative() && !rec.change_pct.is_zero() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    }
}
