use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tracing::info;

use crate::catalog::{presets, Preset};
use crate::fmt::money;
use crate::ledger::{advisory_message, classify_balance, Balance, Ledger};
use crate::models::Category;
use crate::routes::Route;
use crate::tui::{
    draw_chrome, money_span, wrap_text, Screen, ScreenAction, StatusLine, AMOUNT_NEG_STYLE,
    AMOUNT_POS_STYLE, FOCUSED_STYLE, FOOTER_STYLE, SELECTED_STYLE, STATUS_STYLE,
};

// Field indices for EntryForm — keep in sync with draw_entry_form
const CATEGORY_IDX: usize = 0;
const LABEL_IDX: usize = 1;
const AMOUNT_IDX: usize = 2;
const FIELD_COUNT: usize = 3;

enum Mode {
    Table,
    NewEntry(EntryForm),
    PickPreset { selection: usize },
    SalaryInput,
}

/// The "New" modal. The category starts unselected.
struct EntryForm {
    category: Option<Category>,
    category_cursor: usize,
    label: String,
    amount: String,
    focused: usize,
}

impl EntryForm {
    fn new() -> Self {
        Self {
            category: None,
            category_cursor: 0,
            label: String::new(),
            amount: String::new(),
            focused: CATEGORY_IDX,
        }
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focused {
            LABEL_IDX => Some(&mut self.label),
            AMOUNT_IDX => Some(&mut self.amount),
            _ => None,
        }
    }

    fn select_category(&mut self, cursor: usize) {
        self.category_cursor = cursor % Category::ALL.len();
        self.category = Some(Category::ALL[self.category_cursor]);
    }
}

/// The `calculaRenda` screen. Owns the session's ledger; leaving the
/// screen drops it.
pub struct BudgetScreen {
    ledger: Ledger,
    mode: Mode,
    selection: usize,
    salary_input: String,
    currency: String,
    greeting: String,
    status: StatusLine,
}

impl BudgetScreen {
    pub fn new(greeting: &str, currency: &str) -> Self {
        Self {
            ledger: Ledger::new(),
            mode: Mode::Table,
            selection: 0,
            salary_input: String::new(),
            currency: currency.to_string(),
            greeting: greeting.to_string(),
            status: StatusLine::default(),
        }
    }

    fn add_preset(&mut self, preset: &Preset) {
        match self
            .ledger
            .add_entry(Some(preset.category), preset.label, preset.amount)
        {
            Ok(entry) => {
                self.selection = self.ledger.entries().len() - 1;
                self.status.set(format!("Added: {}", entry.label));
            }
            Err(e) => self.status.set(e.to_string()),
        }
    }

    // -----------------------------------------------------------------------
    // Drawing
    // -----------------------------------------------------------------------

    fn draw_table(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                " Expenses",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        if self.ledger.entries().is_empty() {
            lines.push(Line::from(
                "   No expenses yet. Press 'n' to add one or 'p' for a preset.",
            ));
        } else {
            lines.push(Line::from(vec![
                Span::raw("   "),
                Span::styled(
                    format!("{:<4} {:<10} {:<28} {:>14}", "#", "Type", "Expense", "Amount"),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            for (i, entry) in self.ledger.entries().iter().enumerate() {
                let selected = i == self.selection && matches!(self.mode, Mode::Table);
                let marker = if selected { " > " } else { "   " };
                let style = if selected {
                    SELECTED_STYLE
                } else {
                    Style::default()
                };
                lines.push(Line::from(Span::styled(
                    format!(
                        "{marker}{:<4} {:<10} {:<28} {:>14}",
                        entry.id,
                        entry.category.label(),
                        entry.label,
                        money(entry.amount, &self.currency)
                    ),
                    style,
                )));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                "   Total expenses:  ",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                money(self.ledger.total_expenses(), &self.currency),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        for category in Category::ALL {
            lines.push(Line::from(Span::styled(
                format!(
                    "     {:<15} {}",
                    category.label(),
                    money(self.ledger.subtotal(category), &self.currency)
                ),
                Style::default().fg(Color::DarkGray),
            )));
        }

        lines.push(Line::from(""));
        let editing = matches!(self.mode, Mode::SalaryInput);
        let cursor = if editing { "_" } else { "" };
        let salary_text = if self.salary_input.is_empty() && !editing {
            "(press 's' to enter your salary)".to_string()
        } else {
            format!("{}{cursor}", self.salary_input)
        };
        lines.push(Line::from(vec![
            Span::styled("   Salary:          ", Style::default()),
            Span::styled(
                salary_text,
                if editing {
                    FOCUSED_STYLE
                } else {
                    Style::default()
                },
            ),
        ]));

        if let Some(remaining) = self.ledger.remaining_balance() {
            lines.push(Line::from(vec![
                Span::styled("   Remaining:       ", Style::default()),
                money_span(remaining, &self.currency),
            ]));
            lines.push(Line::from(""));

            let style = match classify_balance(remaining) {
                Balance::Surplus => AMOUNT_POS_STYLE,
                Balance::Deficit => AMOUNT_NEG_STYLE,
            };
            let width = area.width.saturating_sub(6) as usize;
            for paragraph in advisory_message(remaining, &self.currency).lines() {
                let (wrapped, _) = wrap_text(paragraph, width);
                for line in wrapped.lines() {
                    lines.push(Line::from(Span::styled(format!("   {line}"), style)));
                }
                if paragraph.is_empty() {
                    lines.push(Line::from(""));
                }
            }
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn draw_entry_form(&self, frame: &mut Frame, area: Rect, form: &EntryForm) {
        let modal = centered(area, 54, 11);
        frame.render_widget(Clear, modal);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(46, 100, 254)))
            .title(" New expense ");
        let inner = block.inner(modal);
        frame.render_widget(block, modal);

        let label_style = |idx: usize| {
            if form.focused == idx {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            }
        };
        let value_style = |idx: usize| {
            if form.focused == idx {
                FOCUSED_STYLE
            } else {
                Style::default()
            }
        };

        let mut category_spans = vec![Span::styled(
            format!(" {:<10} ", "Type"),
            label_style(CATEGORY_IDX),
        )];
        for (i, category) in Category::ALL.iter().enumerate() {
            let chosen = form.category == Some(*category);
            let mark = if chosen { "(•)" } else { "( )" };
            let style = if form.focused == CATEGORY_IDX && i == form.category_cursor {
                SELECTED_STYLE
            } else {
                Style::default()
            };
            category_spans.push(Span::styled(format!("{mark} {}  ", category.label()), style));
        }

        let text_line = |label: &str, value: &str, idx: usize| {
            let cursor = if form.focused == idx { "_" } else { "" };
            Line::from(vec![
                Span::styled(format!(" {label:<10} "), label_style(idx)),
                Span::styled(format!("{value}{cursor}"), value_style(idx)),
            ])
        };

        let mut lines = vec![
            Line::from(""),
            Line::from(category_spans),
            Line::from(""),
            text_line("Expense", &form.label, LABEL_IDX),
            Line::from(Span::styled(
                format!(" {:<10} e.g. Electricity bill", ""),
                FOOTER_STYLE,
            )),
            text_line("Amount", &form.amount, AMOUNT_IDX),
            Line::from(Span::styled(format!(" {:<10} e.g. 100", ""), FOOTER_STYLE)),
        ];
        if let Some(msg) = self.status.message() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(format!(" {msg}"), STATUS_STYLE)));
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn draw_preset_picker(&self, frame: &mut Frame, area: Rect, selection: usize) {
        let modal = centered(area, 54, presets().len() as u16 + 4);
        frame.render_widget(Clear, modal);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(46, 100, 254)))
            .title(" Presets ");
        let inner = block.inner(modal);
        frame.render_widget(block, modal);

        let mut lines = vec![Line::from("")];
        for (i, preset) in presets().iter().enumerate() {
            let style = if i == selection {
                SELECTED_STYLE
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(
                format!(
                    " {:<10} {:<20} {:>14}",
                    preset.category.label(),
                    preset.label,
                    money(preset.amount, &self.currency)
                ),
                style,
            )));
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }

    // -----------------------------------------------------------------------
    // Key handling
    // -----------------------------------------------------------------------

    fn handle_table_key(&mut self, code: KeyCode) -> ScreenAction {
        match code {
            KeyCode::Up => {
                self.selection = self.selection.saturating_sub(1);
            }
            KeyCode::Down => {
                let len = self.ledger.entries().len();
                if len > 0 {
                    self.selection = (self.selection + 1).min(len - 1);
                }
            }
            KeyCode::Char('n') => self.mode = Mode::NewEntry(EntryForm::new()),
            KeyCode::Char('p') => self.mode = Mode::PickPreset { selection: 0 },
            KeyCode::Char('s') => self.mode = Mode::SalaryInput,
            KeyCode::Char('h') => return ScreenAction::Home,
            KeyCode::Esc => return ScreenAction::Back,
            KeyCode::Char('q') => return ScreenAction::Quit,
            _ => {}
        }
        ScreenAction::Continue
    }

    fn handle_form_key(&mut self, code: KeyCode) -> ScreenAction {
        let Mode::NewEntry(form) = &mut self.mode else {
            return ScreenAction::Continue;
        };

        match code {
            KeyCode::Esc => {
                self.mode = Mode::Table;
            }
            KeyCode::Tab | KeyCode::Down => {
                form.focused = (form.focused + 1) % FIELD_COUNT;
            }
            KeyCode::BackTab | KeyCode::Up => {
                form.focused = (form.focused + FIELD_COUNT - 1) % FIELD_COUNT;
            }
            KeyCode::Left if form.focused == CATEGORY_IDX => {
                let cursor = form.category_cursor + Category::ALL.len() - 1;
                form.select_category(cursor);
            }
            KeyCode::Right if form.focused == CATEGORY_IDX => {
                let cursor = form.category_cursor + 1;
                form.select_category(cursor);
            }
            KeyCode::Char(' ') if form.focused == CATEGORY_IDX => {
                let cursor = form.category_cursor;
                form.select_category(cursor);
            }
            KeyCode::Enter if form.focused == CATEGORY_IDX => {
                let cursor = form.category_cursor;
                form.select_category(cursor);
                form.focused = LABEL_IDX;
            }
            KeyCode::Char(c) => {
                if let Some(text) = form.focused_text() {
                    text.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(text) = form.focused_text() {
                    text.pop();
                }
            }
            KeyCode::Enter => {
                match self
                    .ledger
                    .add_entry_text(form.category, &form.label, &form.amount)
                {
                    Ok(entry) => {
                        info!(id = entry.id, "expense saved from form");
                        self.selection = self.ledger.entries().len() - 1;
                        self.status.set(format!("Added: {}", entry.label));
                        self.mode = Mode::Table;
                    }
                    Err(e) => self.status.set(e.to_string()),
                }
            }
            _ => {}
        }
        ScreenAction::Continue
    }

    fn handle_preset_key(&mut self, code: KeyCode) -> ScreenAction {
        let Mode::PickPreset { selection } = &mut self.mode else {
            return ScreenAction::Continue;
        };
        match code {
            KeyCode::Up => *selection = selection.saturating_sub(1),
            KeyCode::Down => *selection = (*selection + 1).min(presets().len() - 1),
            KeyCode::Enter => {
                let preset = presets()[*selection];
                self.mode = Mode::Table;
                self.add_preset(&preset);
            }
            KeyCode::Esc => self.mode = Mode::Table,
            _ => {}
        }
        ScreenAction::Continue
    }

    fn handle_salary_key(&mut self, code: KeyCode) -> ScreenAction {
        match code {
            KeyCode::Char(c) => self.salary_input.push(c),
            KeyCode::Backspace => {
                self.salary_input.pop();
            }
            KeyCode::Enter => match self.ledger.set_salary_text(&self.salary_input) {
                Ok(()) => {
                    self.mode = Mode::Table;
                }
                Err(e) => self.status.set(e.to_string()),
            },
            KeyCode::Esc => {
                // Restore what the ledger actually holds
                self.salary_input = self
                    .ledger
                    .salary()
                    .map(|s| s.to_string())
                    .unwrap_or_default();
                self.mode = Mode::Table;
            }
            _ => {}
        }
        ScreenAction::Continue
    }
}

impl Screen for BudgetScreen {
    fn draw(&mut self, frame: &mut Frame) {
        let chrome = draw_chrome(frame, &self.greeting, Route::CalculaRenda);

        self.draw_table(frame, chrome.content);
        match &self.mode {
            Mode::NewEntry(form) => self.draw_entry_form(frame, chrome.content, form),
            Mode::PickPreset { selection } => {
                self.draw_preset_picker(frame, chrome.content, *selection)
            }
            Mode::Table | Mode::SalaryInput => {}
        }

        let hints = match (&self.mode, self.status.message()) {
            (Mode::NewEntry(_), _) => {
                Paragraph::new(" Tab=next field  ←→=type  Enter=save  Esc=close")
                    .style(FOOTER_STYLE)
            }
            (_, Some(msg)) => Paragraph::new(format!(" {msg}")).style(STATUS_STYLE),
            (Mode::Table, None) => Paragraph::new(
                " n=new  p=presets  s=salary  h=home  Esc=back  q=quit",
            )
            .style(FOOTER_STYLE),
            (Mode::PickPreset { .. }, None) => {
                Paragraph::new(" ↑↓=select  Enter=add  Esc=cancel").style(FOOTER_STYLE)
            }
            (Mode::SalaryInput, None) => {
                Paragraph::new(" Enter=calculate difference  Esc=cancel").style(FOOTER_STYLE)
            }
        };
        frame.render_widget(hints, chrome.hints);
    }

    fn handle_key(&mut self, code: KeyCode) -> ScreenAction {
        self.status.tick();
        match self.mode {
            Mode::Table => self.handle_table_key(code),
            Mode::NewEntry(_) => self.handle_form_key(code),
            Mode::PickPreset { .. } => self.handle_preset_key(code),
            Mode::SalaryInput => self.handle_salary_key(code),
        }
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [_, vertical, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, rect, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(area.width)),
        Constraint::Fill(1),
    ])
    .areas(vertical);
    rect
}
