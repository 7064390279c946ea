//! Human-readable number formatting

/// Group an integer string with thousands separators
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `1234` -> `1,234`
pub fn format_count(n: u64) -> String {
    group_thousands(&n.to_string())
}

/// `-1234.5` -> `-$1,234.50`
pub fn format_currency(amount: f64) -> String {
    let rendered = format!("{:.2}", amount.abs());
    let (whole, cents) = rendered.split_once('.').unwrap_or((rendered.as_str(), "00"));
    // Treat values that round to zero as positive
    let sign = if amount < 0.0 && rendered != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(whole), cents)
}
