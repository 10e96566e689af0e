use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Field, RendaError, Result};
use crate::fmt::money;
use crate::models::{Category, ExpenseEntry};

/// Sign of the money left after expenses. Zero counts as a surplus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Balance {
    Surplus,
    Deficit,
}

pub fn classify_balance(remaining: Decimal) -> Balance {
    if remaining >= Decimal::ZERO {
        Balance::Surplus
    } else {
        Balance::Deficit
    }
}

/// Fixed advice text for a remaining balance.
pub fn advisory_message(remaining: Decimal, currency: &str) -> String {
    match classify_balance(remaining) {
        Balance::Surplus => format!(
            "You still have {} available. It would be a good idea to put this money \
             into an investment.\n\n\
             Some investment ideas:\n\n\
             - Fixed-income investments\n\
             - Real estate\n\
             - Real estate investment funds",
            money(remaining, currency)
        ),
        Balance::Deficit => format!(
            "You are {} in deficit. You need to reorganize your finances.\n\n\
             - Cut unnecessary spending\n\
             - Build an emergency reserve\n\
             - Plan purchases to avoid debt",
            money(remaining.abs(), currency)
        ),
    }
}

/// Parse a user-typed amount such as `1200`, `99,90` or `R$ 35.5`.
///
/// Accepts one decimal separator (`.` or `,`) and an optional leading sign.
/// Anything else, including `NaN`, `inf` and exponents, is rejected.
pub fn parse_amount(text: &str) -> Result<Decimal> {
    let trimmed = text.trim();
    let stripped = trimmed
        .strip_prefix("R$")
        .or_else(|| trimmed.strip_prefix('$'))
        .unwrap_or(trimmed)
        .trim();

    let invalid = || RendaError::InvalidAmount(text.trim().to_string());

    let (sign, digits) = match stripped.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", stripped.strip_prefix('+').unwrap_or(stripped)),
    };
    if digits.is_empty() || !digits.chars().any(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    if !digits.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
        return Err(invalid());
    }
    let separators = digits.chars().filter(|c| *c == '.' || *c == ',').count();
    if separators > 1 {
        return Err(invalid());
    }

    let digits = digits.replace(',', ".");
    let digits = digits.trim_end_matches('.');
    let normalized = if digits.starts_with('.') {
        format!("{sign}0{digits}")
    } else {
        format!("{sign}{digits}")
    };
    Decimal::from_str(&normalized).map_err(|_| invalid())
}

/// Snapshot of a ledger for display or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct LedgerSummary {
    pub entries: Vec<ExpenseEntry>,
    pub total_expenses: Decimal,
    pub fixed_total: Decimal,
    pub variable_total: Decimal,
    pub salary: Option<Decimal>,
    pub remaining: Option<Decimal>,
    pub balance: Option<Balance>,
}

/// Expenses and salary for one budgeting session. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: Vec<ExpenseEntry>,
    salary: Option<Decimal>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ExpenseEntry] {
        &self.entries
    }

    pub fn salary(&self) -> Option<Decimal> {
        self.salary
    }

    /// Append an expense. Rejected input leaves the ledger untouched.
    pub fn add_entry(
        &mut self,
        category: Option<Category>,
        label: &str,
        amount: Decimal,
    ) -> Result<ExpenseEntry> {
        let Some(category) = category else {
            warn!("rejected entry: no category selected");
            return Err(RendaError::MissingField(Field::Category));
        };
        let label = label.trim();
        if label.is_empty() {
            warn!("rejected entry: empty label");
            return Err(RendaError::MissingField(Field::Label));
        }
        if amount < Decimal::ZERO {
            warn!(%amount, "rejected entry: invalid amount");
            return Err(RendaError::InvalidAmount(amount.to_string()));
        }

        let entry = ExpenseEntry {
            id: self.entries.len() + 1,
            category,
            label: label.to_string(),
            amount,
        };
        debug!(id = entry.id, %category, label, %amount, "entry added");
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Like `add_entry`, with the amount still as typed by the user.
    pub fn add_entry_text(
        &mut self,
        category: Option<Category>,
        label: &str,
        amount_text: &str,
    ) -> Result<ExpenseEntry> {
        if category.is_none() {
            return Err(RendaError::MissingField(Field::Category));
        }
        if label.trim().is_empty() {
            return Err(RendaError::MissingField(Field::Label));
        }
        if amount_text.trim().is_empty() {
            return Err(RendaError::MissingField(Field::Amount));
        }
        let amount = parse_amount(amount_text)?;
        self.add_entry(category, label, amount)
    }

    /// Overwrite the salary. Negative values pass through.
    pub fn set_salary(&mut self, value: Decimal) {
        debug!(%value, "salary set");
        self.salary = Some(value);
    }

    /// Parse and store a typed salary. Text that isn't a number (`NaN`
    /// included) keeps the previous salary.
    pub fn set_salary_text(&mut self, text: &str) -> Result<()> {
        let value = parse_amount(text).inspect_err(|_| warn!(text, "rejected salary"))?;
        self.set_salary(value);
        Ok(())
    }

    /// Exact decimal sum, so the result doesn't depend on entry order.
    pub fn total_expenses(&self) -> Decimal {
        self.entries.iter().map(|e| e.amount).sum()
    }

    pub fn subtotal(&self, category: Category) -> Decimal {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .map(|e| e.amount)
            .sum()
    }

    /// `None` until a salary has been set.
    pub fn remaining_balance(&self) -> Option<Decimal> {
        self.salary.map(|salary| salary - self.total_expenses())
    }

    pub fn summary(&self) -> LedgerSummary {
        let remaining = self.remaining_balance();
        LedgerSummary {
            entries: self.entries.clone(),
            total_expenses: self.total_expenses(),
            fixed_total: self.subtotal(Category::Fixed),
            variable_total: self.subtotal(Category::Variable),
            salary: self.salary,
            remaining,
            balance: remaining.map(classify_balance),
        }
    }
}
