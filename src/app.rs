use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use tracing::info;

use crate::cli::about::AboutScreen;
use crate::cli::budget_screen::BudgetScreen;
use crate::cli::home::HomeScreen;
use crate::error::Result;
use crate::routes::{Navigator, Route};
use crate::settings::Settings;
use crate::tui::{Screen, ScreenAction};

/// Route stack plus one live screen per stack entry. Popping a route drops
/// its screen, and with it any ledger the screen held.
pub struct App {
    navigator: Navigator,
    screens: Vec<Box<dyn Screen>>,
    greeting: String,
    currency: String,
}

impl App {
    pub fn new(initial: Route, settings: &Settings) -> Self {
        let greeting = settings.user_name.clone();
        let currency = settings.currency_symbol.clone();
        let first = make_screen(initial, &greeting, &currency);
        Self {
            navigator: Navigator::new(initial),
            screens: vec![first],
            greeting,
            currency,
        }
    }

    pub fn current_route(&self) -> Route {
        self.navigator.current()
    }

    fn current_screen(&mut self) -> &mut dyn Screen {
        let top = self.screens.len() - 1;
        self.screens[top].as_mut()
    }

    /// Feed a key to the active screen. Returns true when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let action = self.current_screen().handle_key(code);
        self.apply(action)
    }

    fn apply(&mut self, action: ScreenAction) -> bool {
        match action {
            ScreenAction::Continue => return false,
            ScreenAction::Quit => return true,
            ScreenAction::Navigate(route) => {
                if self.navigator.navigate(route) {
                    self.screens
                        .push(make_screen(route, &self.greeting, &self.currency));
                } else {
                    self.screens.truncate(self.navigator.depth());
                }
            }
            ScreenAction::Home => {
                // Index is only missing from the stack when the app was
                // opened on another route
                if self.navigator.home() {
                    self.screens
                        .push(make_screen(Route::Index, &self.greeting, &self.currency));
                } else {
                    self.screens.truncate(self.navigator.depth());
                }
            }
            ScreenAction::Back => {
                if !self.navigator.back() {
                    return true;
                }
                self.screens.pop();
            }
        }
        info!(
            route = self.current_route().name(),
            depth = self.navigator.depth(),
            "screen shown"
        );
        false
    }
}

fn make_screen(route: Route, greeting: &str, currency: &str) -> Box<dyn Screen> {
    match route {
        Route::Index => Box::new(HomeScreen::new(greeting)),
        Route::About => Box::new(AboutScreen::new(greeting)),
        Route::CalculaRenda => Box::new(BudgetScreen::new(greeting, currency)),
    }
}

/// Run the interactive app. Sets up the terminal, event loop, and panic
/// hook, then restores the terminal on exit.
pub fn run(initial: Route, settings: &Settings) -> Result<()> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        hook(info);
    }));

    let mut app = App::new(initial, settings);
    let mut terminal = ratatui::init();
    info!(route = initial.name(), "app started");

    let result: Result<()> = loop {
        if let Err(e) = terminal.draw(|frame| app.current_screen().draw(frame)) {
            break Err(e.into());
        }

        match event::read() {
            Err(e) => break Err(e.into()),
            Ok(Event::Key(key)) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('c')
                {
                    break Ok(());
                }
                if app.handle_key(key.code) {
                    break Ok(());
                }
            }
            _ => {}
        }
    };

    drop(terminal);
    ratatui::restore();
    result
}
