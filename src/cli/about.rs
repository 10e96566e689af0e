use colored::Colorize;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::error::Result;
use crate::routes::Route;
use crate::tui::{draw_chrome, wrap_text, Screen, ScreenAction, FOOTER_STYLE};

pub const ABOUT_TITLE: &str = "About EducaRenda";

pub const ABOUT_TEXT: &str = "Two UNEX students, driven by the wish to change the way people \
handle their money, combined what they knew to build an innovative financial education app. \
EducaRenda was created to simplify complex financial concepts and help people manage their \
money better, with practical tools for planning, expense control and investing. The project, \
born in the classroom, reflects the students' commitment to financial education that is \
accessible and relevant to everyone, in a practical and engaging way.";

pub struct AboutScreen {
    greeting: String,
}

impl AboutScreen {
    pub fn new(greeting: &str) -> Self {
        Self {
            greeting: greeting.to_string(),
        }
    }
}

impl Screen for AboutScreen {
    fn draw(&mut self, frame: &mut Frame) {
        let chrome = draw_chrome(frame, &self.greeting, Route::About);

        let width = chrome.content.width.saturating_sub(4).min(80) as usize;
        let (wrapped, line_count) = wrap_text(ABOUT_TEXT, width);

        let [_top, body, _bottom] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(line_count + 2),
            Constraint::Fill(1),
        ])
        .areas(chrome.content);

        let mut lines = vec![
            Line::from(Span::styled(
                format!("  {ABOUT_TITLE}"),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        lines.extend(wrapped.lines().map(|l| Line::from(format!("  {l}"))));
        frame.render_widget(Paragraph::new(lines), body);

        frame.render_widget(
            Paragraph::new(" h=home  Esc=back  q=quit").style(FOOTER_STYLE),
            chrome.hints,
        );
    }

    fn handle_key(&mut self, code: KeyCode) -> ScreenAction {
        match code {
            KeyCode::Char('h') => ScreenAction::Home,
            KeyCode::Esc | KeyCode::Backspace => ScreenAction::Back,
            KeyCode::Char('q') => ScreenAction::Quit,
            _ => ScreenAction::Continue,
        }
    }
}

/// Print the about text for `educarenda about`.
pub fn run() -> Result<()> {
    println!("{}\n", ABOUT_TITLE.bold());
    println!("{}", textwrap::fill(ABOUT_TEXT, 78));
    Ok(())
}
