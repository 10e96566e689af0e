use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{RendaError, Result};
use crate::models::Category;

/// A ready-made expense the user can add with one keypress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub category: Category,
    pub label: &'static str,
    pub amount: Decimal,
}

const PRESETS: &[Preset] = &[
    Preset { category: Category::Fixed, label: "Electricity bill", amount: dec!(100) },
    Preset { category: Category::Fixed, label: "Rent", amount: dec!(1200) },
    Preset { category: Category::Variable, label: "Monthly groceries", amount: dec!(500) },
    Preset { category: Category::Variable, label: "Transportation", amount: dec!(150) },
];

pub fn presets() -> &'static [Preset] {
    PRESETS
}

pub fn presets_for(category: Category) -> impl Iterator<Item = &'static Preset> {
    PRESETS.iter().filter(move |p| p.category == category)
}

/// Case-insensitive lookup by label.
pub fn find_preset(label: &str) -> Result<&'static Preset> {
    let wanted = label.trim();
    PRESETS
        .iter()
        .find(|p| p.label.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| RendaError::UnknownPreset(label.to_string()))
}
