use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use rust_decimal::Decimal;

use crate::fmt::money;
use crate::routes::Route;

pub const HEADER_STYLE: Style = Style::new()
    .fg(Color::Rgb(46, 100, 254))
    .add_modifier(Modifier::BOLD);

pub const FOOTER_STYLE: Style = Style::new().fg(Color::DarkGray);

pub const STATUS_STYLE: Style = Style::new().fg(Color::Yellow);

pub const AMOUNT_POS_STYLE: Style = Style::new().fg(Color::Rgb(80, 220, 100));
pub const AMOUNT_NEG_STYLE: Style = Style::new().fg(Color::Red);

pub const SELECTED_STYLE: Style = Style::new()
    .bg(Color::Rgb(40, 40, 60))
    .add_modifier(Modifier::BOLD);

pub const FOCUSED_STYLE: Style = Style::new().fg(Color::Cyan);

const COPYRIGHT: &str = "© 2024";

/// Format an amount as a colored Span (green for surplus, red for deficit).
/// Shows the absolute value; color conveys the sign.
pub fn money_span(amount: Decimal, symbol: &str) -> Span<'static> {
    let style = if amount < Decimal::ZERO {
        AMOUNT_NEG_STYLE
    } else {
        AMOUNT_POS_STYLE
    };
    Span::styled(money(amount.abs(), symbol), style)
}

/// Wrap text to a given width. Returns (wrapped_string, line_count).
pub fn wrap_text(text: &str, width: usize) -> (String, u16) {
    if width == 0 {
        return (text.to_string(), 1);
    }
    let wrapped = textwrap::fill(text, width);
    let lines = wrapped.lines().count().max(1) as u16;
    (wrapped, lines)
}

// ---------------------------------------------------------------------------
// Screen infrastructure
// ---------------------------------------------------------------------------

pub enum ScreenAction {
    Continue,
    Navigate(Route),
    /// The navbar "Home" link.
    Home,
    Back,
    Quit,
}

pub trait Screen {
    fn draw(&mut self, frame: &mut Frame);
    fn handle_key(&mut self, code: KeyCode) -> ScreenAction;
}

/// Areas left for a screen once the header bar and footer are drawn.
pub struct Chrome {
    pub content: Rect,
    pub hints: Rect,
}

/// Draw the header (app name, greeting, current route) and the footer.
pub fn draw_chrome(frame: &mut Frame, greeting: &str, route: Route) -> Chrome {
    let area = frame.area();
    let border_style = Style::default().fg(Color::DarkGray);

    let [header_area, sep, content, hints, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let header = if greeting.is_empty() {
        format!(" EducaRenda · {}", route.title())
    } else {
        format!(" EducaRenda: {greeting} · {}", route.title())
    };
    frame.render_widget(Paragraph::new(header).style(HEADER_STYLE), header_area);

    let sep_line = "━".repeat(area.width as usize);
    frame.render_widget(Paragraph::new(sep_line.as_str()).style(border_style), sep);

    frame.render_widget(
        Paragraph::new(COPYRIGHT)
            .style(FOOTER_STYLE)
            .alignment(ratatui::layout::Alignment::Center),
        footer_area,
    );

    Chrome { content, hints }
}

/// One-line status message that clears itself after a few keypresses.
#[derive(Debug, Default)]
pub struct StatusLine {
    message: Option<String>,
    ttl: u8,
}

impl StatusLine {
    pub fn set(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.ttl = 3;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Call once per keypress.
    pub fn tick(&mut self) {
        if self.ttl > 0 {
            self.ttl -= 1;
            if self.ttl == 0 {
                self.message = None;
            }
        }
    }
}
