use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::RendaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Fixed,
    Variable,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Fixed, Category::Variable];

    pub fn label(self) -> &'static str {
        match self {
            Category::Fixed => "Fixed",
            Category::Variable => "Variable",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the English names and the Portuguese "fixa"/"variada".
impl FromStr for Category {
    type Err = RendaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fixed" | "fixa" => Ok(Category::Fixed),
            "variable" | "variada" => Ok(Category::Variable),
            _ => Err(RendaError::UnknownCategory(s.to_string())),
        }
    }
}

/// One recorded expense. Built only by `Ledger::add_entry`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseEntry {
    pub id: usize,
    pub category: Category,
    pub label: String,
    pub amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("Fixed".parse::<Category>().unwrap(), Category::Fixed);
        assert_eq!("fixa".parse::<Category>().unwrap(), Category::Fixed);
        assert_eq!(" VARIABLE ".parse::<Category>().unwrap(), Category::Variable);
        assert_eq!("Variada".parse::<Category>().unwrap(), Category::Variable);
    }

    #[test]
    fn test_category_parse_unknown() {
        let err = "monthly".parse::<Category>().unwrap_err();
        assert!(matches!(err, RendaError::UnknownCategory(ref s) if s == "monthly"));
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Fixed.to_string(), "Fixed");
        assert_eq!(Category::Variable.to_string(), "Variable");
    }
}
