//! Currency amount formatting for advice text.

/// Format an amount with thousands separators and up to three fraction
/// digits, dropping trailing zeros (`1234.5` → `"1,234.5"`). Non-finite
/// input renders as `"0"`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "0".into();
    }

    let fixed = fixed3(value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let is_zero = int_part.bytes().all(|b| b == b'0') && frac.is_empty();
    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value < 0.0 && !is_zero {
        out.push('-');
    }

    let len = int_part.len();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }

    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Three fraction digits with exact ties rounded up, not to even. Only
/// multiples of 1/16 can sit exactly on a tie.
fn fixed3(abs: f64) -> String {
    if (abs * 16.0).fract() == 0.0 {
        let thousandths = abs * 1000.0;
        if thousandths.fract() == 0.5 {
            return format!("{:.3}", thousandths.ceil() / 1000.0);
        }
    }
    format!("{abs:.3}")
}

/// Round to the nearest whole unit, then format.
pub fn format_whole(value: f64) -> String {
    format_amount(value.round())
}
