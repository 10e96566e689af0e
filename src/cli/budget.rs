use colored::Colorize;
use comfy_table::{Cell, CellAlignment, Table};
use tracing::info;

use crate::catalog::find_preset;
use crate::error::{Field, RendaError, Result};
use crate::fmt::money;
use crate::ledger::{advisory_message, Balance, Ledger, LedgerSummary};
use crate::models::Category;
use crate::settings::load_settings;

/// Split a `LABEL=AMOUNT` argument. The last `=` separates the amount so
/// labels may contain `=`.
pub(crate) fn split_expense_arg(arg: &str) -> Result<(&str, &str)> {
    match arg.rsplit_once('=') {
        Some((label, amount)) => Ok((label, amount)),
        None if arg.trim().is_empty() => Err(RendaError::MissingField(Field::Label)),
        None => Err(RendaError::MissingField(Field::Amount)),
    }
}

/// Build one session's ledger from command-line arguments: presets first,
/// then fixed, then variable entries.
pub fn build_ledger(
    fixed: &[String],
    variable: &[String],
    preset: &[String],
    salary: Option<&str>,
) -> Result<Ledger> {
    let mut ledger = Ledger::new();

    for name in preset {
        let p = find_preset(name)?;
        ledger.add_entry(Some(p.category), p.label, p.amount)?;
    }
    for (category, args) in [(Category::Fixed, fixed), (Category::Variable, variable)] {
        for arg in args {
            let (label, amount) = split_expense_arg(arg)?;
            ledger.add_entry_text(Some(category), label, amount)?;
        }
    }
    if let Some(salary) = salary {
        ledger.set_salary_text(salary)?;
    }

    Ok(ledger)
}

pub fn run(
    fixed: &[String],
    variable: &[String],
    preset: &[String],
    salary: Option<&str>,
    json: bool,
) -> Result<()> {
    let settings = load_settings();
    let ledger = build_ledger(fixed, variable, preset, salary)?;
    info!(entries = ledger.entries().len(), "ledger built");
    let summary = ledger.summary();

    if json {
        let out = serde_json::to_string_pretty(&summary)
            .map_err(|e| RendaError::Other(e.to_string()))?;
        println!("{out}");
        return Ok(());
    }

    print_summary(&summary, &settings.currency_symbol);
    Ok(())
}

fn print_summary(summary: &LedgerSummary, currency: &str) {
    let mut table = Table::new();
    table.set_header(vec!["#", "Type", "Expense", "Amount"]);
    for entry in &summary.entries {
        table.add_row(vec![
            Cell::new(entry.id),
            Cell::new(entry.category.label()),
            Cell::new(&entry.label),
            Cell::new(money(entry.amount, currency)).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![Cell::new(""), Cell::new(""), Cell::new(""), Cell::new("")]);
    table.add_row(vec![
        Cell::new(""),
        Cell::new(""),
        Cell::new("Fixed"),
        Cell::new(money(summary.fixed_total, currency)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new(""),
        Cell::new(""),
        Cell::new("Variable"),
        Cell::new(money(summary.variable_total, currency)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new(""),
        Cell::new(""),
        Cell::new("Total expenses".bold()),
        Cell::new(money(summary.total_expenses, currency).bold())
            .set_alignment(CellAlignment::Right),
    ]);

    println!("Expenses\n{table}");

    let (Some(salary), Some(remaining), Some(balance)) =
        (summary.salary, summary.remaining, summary.balance)
    else {
        println!("\nNo salary given. Pass --salary to see what is left.");
        return;
    };

    println!();
    println!("Salary:     {}", money(salary, currency));
    let remaining_text = money(remaining, currency);
    let label = match balance {
        Balance::Surplus => format!("{remaining_text} (surplus)").green().bold(),
        Balance::Deficit => format!("{remaining_text} (deficit)").red().bold(),
    };
    println!("Remaining:  {label}");
    println!();
    for line in advisory_message(remaining, currency).lines() {
        println!("{}", textwrap::fill(line, 78));
    }
}
