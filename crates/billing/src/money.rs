//! Currency display.
//!
//! Amounts stay in integer cents everywhere; this is the only place they are
//! turned into dollars, and it never goes through floating point.

/// Format cents as en-US dollars with exactly two fraction digits.
///
/// `40000` → `"$400.00"`, `123456789` → `"$1,234,567.89"`.
pub fn usd(cents: u64) -> String {
    let dollars = cents / 100;
    let fraction = cents % 100;
    format!("${}.{:02}", group_thousands(dollars), fraction)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}
