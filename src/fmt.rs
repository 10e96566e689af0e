use rust_decimal::Decimal;

/// Format an amount as currency with thousands separators: R$ 1,234.56
pub fn money(val: Decimal, symbol: &str) -> String {
    let cents = format!("{:.2}", val.abs().round_dp(2));
    // -0.001 rounds to zero and must not print as "-R$ 0.00"
    let negative = val < Decimal::ZERO && cents != "0.00";
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    let sign = if negative { "-" } else { "" };
    if symbol.is_empty() {
        format!("{sign}{with_commas}.{dec_part}")
    } else {
        format!("{sign}{symbol} {with_commas}.{dec_part}")
    }
}
