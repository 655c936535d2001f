//! Display formatting shared by the app and the CLI.

/// Formats an amount with exactly two decimals and comma thousands
/// separators, e.g. `1234567.891` → `"1,234,567.89"`.
///
/// Follows the en-US number convention regardless of the host locale:
/// halves round away from zero, judged on the shortest decimal form of the
/// value (`1234.125` → `"1,234.13"`, `1.005` → `"1.01"`). Non-finite values
/// render as `NaN` / `∞` / `-∞`.
///
/// # Examples
///
/// ```
/// use realty_core::format::format_price;
///
/// assert_eq!(format_price(450000.0), "450,000.00");
/// assert_eq!(format_price(-1234.5), "-1,234.50");
/// ```
pub fn format_price(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = round_to_cents(amount.abs());
    let (whole, fraction) = fixed.split_at(fixed.len() - 3);
    let fraction = &fraction[1..];

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // -0.001 rounds to 0.00 and must not print a sign
    let negative = amount < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    format!("{}{}.{}", if negative { "-" } else { "" }, grouped, fraction)
}

/// `amount` (non-negative, finite) as `"<whole>.<cents>"`.
///
/// `{:.2}` rounds the binary value half-to-even, so the digits come from
/// `Display` (shortest round-trip form, never exponent notation) and the
/// carry is done on the decimal string.
fn round_to_cents(amount: f64) -> String {
    let repr = amount.to_string();
    let (whole, fraction) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    let fraction = format!("{:0<3}", fraction);

    let mut digits: Vec<u8> = whole.bytes().chain(fraction.bytes().take(2)).collect();
    if fraction.as_bytes()[2] >= b'5' {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let cents = digits.split_off(digits.len() - 2);
    format!(
        "{}.{}",
        String::from_utf8_lossy(&digits),
        String::from_utf8_lossy(&cents)
    )
}
