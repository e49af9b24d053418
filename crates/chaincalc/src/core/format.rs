//! Display formatting
//!
//! Locale-invariant: `,` groups thousands in the integer part and `.` is
//! the decimal separator. Typed fractional digits are shown verbatim, never
//! rounded, and a bare trailing `.` stays visible.

use crate::core::Operand;

/// Thousands separator
pub const GROUP_SEPARATOR: char = ',';

/// Renders an operand for the main display.
///
/// Non-finite operands render as their fallback token.
#[must_use]
pub fn display_text(operand: &Operand) -> String {
    let text = operand.as_str();
    if !operand.is_finite() {
        return text.to_string();
    }

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };

    let (integer, fraction) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(text.len() + integer.len() / 3 + 1);
    out.push_str(sign);
    out.push_str(&group_thousands(integer));
    if let Some(frac) = fraction {
        out.push('.');
        out.push_str(frac);
    }

    tracing::trace!(operand = text, display = %out, "formatted display");
    out
}

/// Inserts a group separator every three digits, counting from the right.
#[must_use]
pub fn group_thousands(digits: &str) -> String {
    if digits.is_empty() {
        return "0".to_string();
    }

    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Digit;
    use proptest::prelude::*;

    fn typed(text: &str) -> Operand {
        let mut op = Operand::new();
        let mut first = true;
        for c in text.chars() {
            if c == '.' {
                op.push_point();
            } else {
                let d = Digit::try_from(c).unwrap();
                if first {
                    op.set_digit(d);
                } else {
                    op.push_digit(d);
                }
            }
            first = false;
        }
        op
    }

    // ===== group_thousands =====

    #[test]
    fn test_group_short() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("12"), "12");
        assert_eq!(group_thousands("999"), "999");
    }

    #[test]
    fn test_group_long() {
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn test_group_empty_is_zero() {
        assert_eq!(group_thousands(""), "0");
    }

    // ===== display_text =====

    #[test]
    fn test_display_zero() {
        assert_eq!(display_text(&Operand::new()), "0");
    }

    #[test]
    fn test_display_grouped_integer() {
        assert_eq!(display_text(&typed("1234567")), "1,234,567");
    }

    #[test]
    fn test_display_trailing_point() {
        assert_eq!(display_text(&typed("1234.")), "1,234.");
    }

    #[test]
    fn test_display_fraction_verbatim() {
        assert_eq!(display_text(&typed("1234.500")), "1,234.500");
        assert_eq!(display_text(&typed("0.000123")), "0.000123");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(display_text(&Operand::from_value(-1234.5)), "-1,234.5");
        assert_eq!(display_text(&Operand::from_value(-12.0)), "-12");
    }

    #[test]
    fn test_display_computed_value() {
        assert_eq!(display_text(&Operand::from_value(1e6)), "1,000,000");
    }

    #[test]
    fn test_display_non_finite_tokens() {
        assert_eq!(display_text(&Operand::from_value(f64::INFINITY)), "Infinity");
        assert_eq!(
            display_text(&Operand::from_value(f64::NEG_INFINITY)),
            "-Infinity"
        );
        assert_eq!(display_text(&Operand::from_value(f64::NAN)), "NaN");
    }

    proptest! {
        #[test]
        fn prop_grouping_preserves_digits(n in 0u64..u64::MAX) {
            let digits = n.to_string();
            let grouped = group_thousands(&digits);
            prop_assert_eq!(grouped.replace(GROUP_SEPARATOR, ""), digits);
        }

        #[test]
        fn prop_groups_are_three_wide(n in 1000u64..u64::MAX) {
            let grouped = group_thousands(&n.to_string());
            let groups: Vec<&str> = grouped.split(GROUP_SEPARATOR).collect();
            prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
            for g in &groups[1..] {
                prop_assert_eq!(g.len(), 3);
            }
        }
    }
}
