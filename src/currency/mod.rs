
/// How monetary amounts are printed in reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl CurrencyFormat {
    pub fn with_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    /// Two-decimal amount with grouping, e.g. `$1,234.50` or `-$20.00`.
    pub fn format(&self, amount: f64) -> String {
        format_currency(self, amount)
    }
}

pub fn format_number(format: &CurrencyFormat, value: f64, precision: u8) -> String {
    let mut body = format!("{:.*}", precision as usize, value);
    if body.starts_with('-') && body[1..].chars().all(|ch| ch == '0' || ch == '.') {
        body.remove(0);
    }
    let (int_part, fraction) = match body.find('.') {
        Some(pos) => (body[..pos].to_string(), Some(body[pos + 1..].to_string())),
        None => (body.clone(), None),
    };
    let grouped = insert_grouping(&int_part, format.grouping_separator);
    match fraction {
        Some(fraction) => format!("{}{}{}", grouped, format.decimal_separator, fraction),
        None => grouped,
    }
}

fn insert_grouping(int_part: &str, separator: char) -> String {
    match int_part.strip_prefix('-') {
        Some(digits) => format!("-{}", group_digits(digits, separator)),
        None => group_digits(int_part, separator),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

pub fn format_currency(format: &CurrencyFormat, amount: f64) -> String {
    let body = format_number(format, amount.abs(), 2);
    if amount < 0.0 && body.chars().any(|ch| ch.is_ascii_digit() && ch != '0') {
        format!("-{}{}", format.symbol, body)
    } else {
        format!("{}{}", format.symbol, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        let format = CurrencyFormat::default();
        assert_eq!(format_number(&format, 0.0, 2), "0.00");
        assert_eq!(format_number(&format, 999.0, 2), "999.00");
        assert_eq!(format_number(&format, 1000.0, 2), "1,000.00");
        assert_eq!(format_number(&format, 1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(&format, -1234.5, 2), "-1,234.50");
        assert_eq!(format_number(&format, 1234.0, 0), "1,234");
    }

    #[test]
    fn currency_places_sign_before_symbol() {
        let format = CurrencyFormat::default();
        assert_eq!(format.format(5000.0), "$5,000.00");
        assert_eq!(format.format(-1234.5), "-$1,234.50");
        assert_eq!(format.format(-0.001), "$0.00");
        assert_eq!(format.format(0.0), "$0.00");
    }

    #[test]
    fn custom_separators_and_symbol() {
        let format = CurrencyFormat {
            symbol: "€".into(),
            decimal_separator: ',',
            grouping_separator: '.',
        };
        assert_eq!(format.format(1234567.5), "€1.234.567,50");
        assert_eq!(CurrencyFormat::with_symbol("£").format(12.0), "£12.00");
    }
}
