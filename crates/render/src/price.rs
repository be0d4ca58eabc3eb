//! Price formatting: thousands-grouped integer display.

/// Format a price for display: the integer part of the value with `.`
/// inserted every three digits from the right.
///
/// No decimal handling and no currency symbol; callers prepend the symbol
/// themselves. `0` renders as `"0"`, values under 1000 are unchanged, and a
/// negative value keeps its sign in front of the grouped digits.
pub fn format_price(price: f64) -> String {
    let whole = price.trunc() as i64;
    let grouped = group_thousands(&whole.unsigned_abs().to_string());
    if whole < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
