use comfy_table::{Cell, CellAlignment, Table};

use crate::catalog::presets_for;
use crate::error::Result;
use crate::fmt::money;
use crate::models::Category;
use crate::settings::load_settings;

pub fn list() -> Result<()> {
    let currency = load_settings().currency_symbol;

    let mut table = Table::new();
    table.set_header(vec!["Type", "Expense", "Amount"]);
    for preset in Category::ALL.into_iter().flat_map(presets_for) {
        table.add_row(vec![
            Cell::new(preset.category.label()),
            Cell::new(preset.label),
            Cell::new(money(preset.amount, &currency)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("Presets\n{table}");
    println!("\nAdd one with: educarenda calc --preset '<Expense>'");
    Ok(())
}
