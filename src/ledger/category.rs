use std::{fmt, str::FromStr};

/// Direction of money for a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Income,
    Expense,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Income, Category::Expense];

    /// Expands the single-letter shorthand typed by the user (`I` or `E`).
    pub fn from_shorthand(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "I" => Some(Category::Income),
            "E" => Some(Category::Expense),
            _ => None,
        }
    }

    /// Full label as persisted in the ledger table.
    pub fn label(self) -> &'static str {
        match self {
            Category::Income => "Income",
            Category::Expense => "Expense",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.label() == s.trim())
            .ok_or_else(|| format!("unknown category `{s}`"))
    }
}
