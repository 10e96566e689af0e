use std::str::FromStr;

use tracing::debug;

use crate::error::RendaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Index,
    About,
    CalculaRenda,
}

impl Route {
    /// Every screen the app can show. The first one is the initial route.
    pub const ALL: [Route; 3] = [Route::Index, Route::About, Route::CalculaRenda];

    pub fn name(self) -> &'static str {
        match self {
            Route::Index => "index",
            Route::About => "about",
            Route::CalculaRenda => "calculaRenda",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Index => "Home",
            Route::About => "About",
            Route::CalculaRenda => "Budget",
        }
    }
}

impl FromStr for Route {
    type Err = RendaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if let Some(route) = Route::ALL.iter().find(|r| r.name().eq_ignore_ascii_case(wanted)) {
            return Ok(*route);
        }
        match wanted.to_lowercase().as_str() {
            "home" => Ok(Route::Index),
            "calcula-renda" => Ok(Route::CalculaRenda),
            _ => Err(RendaError::UnknownRoute(s.to_string())),
        }
    }
}

/// Stack of visited routes. Never empty.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Index)
    }
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self {
            stack: vec![initial],
        }
    }

    pub fn current(&self) -> Route {
        // stack always holds at least the root
        self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Pop back to `route` if it is already on the stack, otherwise push it.
    /// Returns true when a new screen was pushed.
    pub fn navigate(&mut self, route: Route) -> bool {
        if let Some(pos) = self.stack.iter().position(|r| *r == route) {
            self.stack.truncate(pos + 1);
            debug!(route = route.name(), depth = self.stack.len(), "navigated back");
            false
        } else {
            self.stack.push(route);
            debug!(route = route.name(), depth = self.stack.len(), "pushed");
            true
        }
    }

    /// Pop the top route. The root stays.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    pub fn home(&mut self) -> bool {
        self.navigate(Route::Index)
    }
}
