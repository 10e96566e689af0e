use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::routes::Route;
use crate::tui::{draw_chrome, Screen, ScreenAction, FOOTER_STYLE, SELECTED_STYLE};

pub const TITLE: &str = "Welcome to EducaRenda";
pub const TAGLINE: &str =
    "Practical, accessible financial education to transform your financial life";

const MENU: &[(&str, Route)] = &[
    ("Get started", Route::CalculaRenda),
    ("About", Route::About),
];

pub struct HomeScreen {
    greeting: String,
    selection: usize,
}

impl HomeScreen {
    pub fn new(greeting: &str) -> Self {
        Self {
            greeting: greeting.to_string(),
            selection: 0,
        }
    }
}

impl Screen for HomeScreen {
    fn draw(&mut self, frame: &mut Frame) {
        let chrome = draw_chrome(frame, &self.greeting, Route::Index);

        let [_top, body, _bottom] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(3 + MENU.len() as u16 * 2),
            Constraint::Fill(1),
        ])
        .areas(chrome.content);

        let mut lines = vec![
            Line::from(Span::styled(
                TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(TAGLINE),
            Line::from(""),
        ];
        for (i, (label, _)) in MENU.iter().enumerate() {
            let style = if i == self.selection {
                SELECTED_STYLE.fg(Color::White)
            } else {
                Style::default().fg(Color::Rgb(46, 100, 254))
            };
            lines.push(Line::from(Span::styled(format!("  {label}  "), style)));
            lines.push(Line::from(""));
        }
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);

        frame.render_widget(
            Paragraph::new(" ↑↓=select  Enter=open  a=about  q=quit").style(FOOTER_STYLE),
            chrome.hints,
        );
    }

    fn handle_key(&mut self, code: KeyCode) -> ScreenAction {
        match code {
            KeyCode::Up => {
                self.selection = self.selection.saturating_sub(1);
            }
            KeyCode::Down => {
                self.selection = (self.selection + 1).min(MENU.len() - 1);
            }
            KeyCode::Enter => return ScreenAction::Navigate(MENU[self.selection].1),
            KeyCode::Char('a') => return ScreenAction::Navigate(Route::About),
            KeyCode::Char('q') | KeyCode::Esc => return ScreenAction::Quit,
            _ => {}
        }
        ScreenAction::Continue
    }
}
