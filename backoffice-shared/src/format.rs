//! Display helpers for money and calendar dates.
//!
//! Both helpers are fixed to the dashboard's locale (pt-BR, BRL).

const CURRENCY_SYMBOL: &str = "R$";
const NO_BREAK_SPACE: char = '\u{a0}';
const FRACTION_DIGITS: usize = 2;

/// Format an amount as Brazilian reais, e.g. `1234.5` becomes `R$ 1.234,50`.
///
/// The symbol is followed by a no-break space. Exactly two fraction digits
/// are shown, rounding half away from zero on the shortest decimal form of
/// the value, so `1.005` renders as `R$ 1,01`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return format!("{CURRENCY_SYMBOL}{NO_BREAK_SPACE}NaN");
    }

    let body = if value.is_infinite() {
        "∞".to_string()
    } else {
        let (integer, fraction) = round_to_cents(value.abs());
        format!("{},{fraction}", group_thousands(&integer))
    };

    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{sign}{CURRENCY_SYMBOL}{NO_BREAK_SPACE}{body}")
}

/// Split a non-negative finite value into integer digits and two rounded
/// fraction digits.
fn round_to_cents(value: f64) -> (String, String) {
    // `Display` for f64 yields the shortest round-trip form and never an exponent.
    let repr = value.to_string();
    let (integer, fraction) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = integer
        .bytes()
        .chain(
            fraction
                .bytes()
                .chain(std::iter::repeat(b'0'))
                .take(FRACTION_DIGITS),
        )
        .map(|byte| byte - b'0')
        .collect();

    let round_up = fraction
        .as_bytes()
        .get(FRACTION_DIGITS)
        .is_some_and(|&digit| digit >= b'5');

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - FRACTION_DIGITS;
    let render = |slice: &[u8]| slice.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    (render(&digits[..split]), render(&digits[split..]))
}

fn group_thousands(integer: &str) -> String {
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, ch) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Reformat an ISO `YYYY-MM-DD` date as `DD/MM/YYYY`.
///
/// Empty or absent input yields an empty string. Components are read as
/// plain numbers and are not range-checked: `2024-13-45` becomes
/// `45/13/2024`, an unreadable component renders as `NaN`, and a missing one
/// as `undefined`.
#[must_use]
pub fn format_date(input: Option<&str>) -> String {
    let Some(input) = input.filter(|value| !value.is_empty()) else {
        return String::new();
    };

    // A missing component is `None`; an unreadable one is `Some(NaN)`.
    let mut components = input.split('-').map(parse_number);
    let year = components.next();
    let month = components.next();
    let day = components.next();

    format!(
        "{}/{}/{}",
        pad_two(&render_component(day)),
        pad_two(&render_component(month)),
        render_component(year)
    )
}

fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&trimmed[2..], radix).map_or(f64::NAN, |value| value as f64);
    }

    let is_decimal_literal = trimmed
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | 'e' | 'E' | '+' | '-'));
    if !is_decimal_literal {
        return f64::NAN;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

fn render_component(component: Option<f64>) -> String {
    let Some(value) = component else {
        return "undefined".to_string();
    };

    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let scientific = format!("{value:e}");
        match scientific.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => scientific,
        }
    } else {
        value.to_string()
    }
}

fn pad_two(value: &str) -> String {
    format!("{value:0>2}")
}
