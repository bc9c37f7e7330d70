// ============================================================================
// Number Formatting
// Display strings with grouped thousands and a capped fraction length
// ============================================================================

/// Literal shown in place of any value that cannot be displayed.
pub const ERROR_SENTINEL: &str = "Error";

/// Default cap on displayed fractional digits.
pub const DEFAULT_MAX_FRACTION_DIGITS: usize = 10;

/// Default thousands separator.
pub const DEFAULT_GROUP_SEPARATOR: char = ',';

/// Converts numbers into display strings.
///
/// Formatting is a pure projection of the value: no state survives a call.
///
/// # Example
/// ```
/// use calculator_core::numeric::NumberFormatter;
///
/// let formatter = NumberFormatter::default();
/// assert_eq!(formatter.format(1234567.0), "1,234,567");
/// assert_eq!(formatter.format(-1234.5), "-1,234.5");
/// assert_eq!(formatter.format(f64::NAN), "Error");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormatter {
    max_fraction_digits: usize,
    group_separator: char,
}

impl NumberFormatter {
    pub const fn new(max_fraction_digits: usize, group_separator: char) -> Self {
        Self {
            max_fraction_digits,
            group_separator,
        }
    }

    pub const fn max_fraction_digits(&self) -> usize {
        self.max_fraction_digits
    }

    pub const fn group_separator(&self) -> char {
        self.group_separator
    }

    /// Format a value for display.
    ///
    /// - NaN and ±infinity become `"Error"`
    /// - zero (either sign) becomes `"0"`
    /// - the integer part is grouped in threes from the right
    /// - the fractional part is truncated, never rounded, to the cap
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return ERROR_SENTINEL.to_string();
        }
        if value == 0.0 {
            return "0".to_string();
        }

        // Shortest round-trip representation, never exponent notation
        let text = value.to_string();

        let (int_str, frac_str) = match text.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (text.as_str(), None),
        };

        let mut out = self.group_integer(int_str);

        if let Some(frac) = frac_str {
            // Fraction is ASCII digits, so byte slicing is safe
            let end = frac.len().min(self.max_fraction_digits);
            if end > 0 {
                out.push('.');
                out.push_str(&frac[..end]);
            }
        }

        out
    }

    /// Insert the separator every three digits, counting from the right.
    fn group_integer(&self, int_str: &str) -> String {
        let (sign, digits) = match int_str.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", int_str),
        };

        let mut grouped = String::with_capacity(int_str.len() + digits.len() / 3);
        grouped.push_str(sign);

        let len = digits.len();
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(digit);
        }

        grouped
    }
}

impl Default for NumberFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FRACTION_DIGITS, DEFAULT_GROUP_SEPARATOR)
    }
}

/// Format with the default conventions (`,` grouping, 10 fraction digits).
#[inline]
pub fn format_number(value: f64) -> String {
    NumberFormatter::default().format(value)
}
