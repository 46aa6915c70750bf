//! Number formatting shared by the page renderers.

/// `12.346` -> `12.35%`
pub fn pct(value: f64) -> String {
    format!("{:.2}%", value)
}

/// `12.346` -> `+12.35%`, `-3.1` -> `-3.10%`
pub fn signed_pct(value: f64) -> String {
    format!("{:+.2}%", value)
}

/// Rupee amount with thousands separators: `1234.5` -> `₹1,234.50`
pub fn rupees(value: f64) -> String {
    format!("₹{}", grouped(value, 2))
}

/// Formats `value` with `decimals` places and comma thousands separators.
pub fn grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut out = String::with_capacity(formatted.len() + int_part.len() / 3 + 1);
    if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping() {
        assert_eq!(grouped(0.0, 2), "0.00");
        assert_eq!(grouped(999.0, 0), "999");
        assert_eq!(grouped(1234.5, 2), "1,234.50");
        assert_eq!(grouped(1234567.0, 0), "1,234,567");
        assert_eq!(grouped(-98765.432, 1), "-98,765.4");
        assert_eq!(grouped(-0.001, 2), "0.00");
    }

    #[test]
    fn percentages_and_prices() {
        assert_eq!(pct(12.346), "12.35%");
        assert_eq!(signed_pct(5.0), "+5.00%");
        assert_eq!(signed_pct(-3.1), "-3.10%");
        assert_eq!(rupees(2500.0), "₹2,500.00");
    }
}
