use crate::{currency::CurrencyFormat, query::DailyTotals};

const INCOME_MARK: char = '+';
const EXPENSE_MARK: char = '-';

/// Draws per-day income and expense bars scaled to the busiest day.
///
/// Days without any activity are skipped.
pub fn render_chart(days: &[DailyTotals], format: &CurrencyFormat, width: usize) -> String {
    let active: Vec<&DailyTotals> = days
        .iter()
        .filter(|day| day.income > 0.0 || day.expense > 0.0)
        .collect();
    if active.is_empty() {
        return "No activity to chart.".to_string();
    }

    let peak = active
        .iter()
        .map(|day| day.income.max(day.expense))
        .fold(0.0_f64, f64::max);

    let mut lines = vec![format!(
        "Daily income ({INCOME_MARK}) and expense ({EXPENSE_MARK})"
    )];
    for day in active {
        let label = day.date.format(crate::ledger::DATE_FORMAT).to_string();
        lines.push(bar_line(&label, "Income ", INCOME_MARK, day.income, peak, width, format));
        lines.push(bar_line(
            &" ".repeat(label.len()),
            "Expense",
            EXPENSE_MARK,
            day.expense,
            peak,
            width,
            format,
        ));
    }
    lines.join("\n")
}

fn bar_line(
    label: &str,
    series: &str,
    mark: char,
    value: f64,
    peak: f64,
    width: usize,
    format: &CurrencyFormat,
) -> String {
    let length = bar_length(value, peak, width);
    format!(
        "{label}  {series} |{} {}",
        mark.to_string().repeat(length),
        format.format(value)
    )
}

fn bar_length(value: f64, peak: f64, width: usize) -> usize {
    if value <= 0.0 || peak <= 0.0 {
        return 0;
    }
    let scaled = (value / peak * width as f64).round() as usize;
    scaled.clamp(1, width.max(1))
}
