//! Numeric text codec: converts between a display string and an `f64`.
//!
//! The codec is what [`InputNumber`](crate::input_number::InputNumber) runs on
//! every keystroke and every step.  It has four parts:
//!
//! * [`format`] renders a number with grouping and decimal separators at an
//!   optional fixed precision.
//! * [`parse`] reads display text back, returning `None` for anything that is
//!   not a plain decimal number.
//! * [`admit`] decides whether a proposed edit may replace the current text.
//! * [`step`] moves the value by one step, clamps it, and re-formats it.
//!
//! None of these fail: unparsable text is `None`, out-of-range values are
//! clamped and inadmissible edits are simply refused.
//!
//! Rounding with a precision uses Rust's `{:.N}` formatting, which rounds the
//! exact binary value of the float to nearest, so `123.456` at precision 2 is
//! `"123.46"` while an exact tie such as `0.125` goes to even (`"0.12"`).
//!
//! ```
//! use tactile_widgets::numeric::{self, Direction, NumberFormat};
//!
//! assert_eq!(numeric::format(1234567.0, None, ',', '.'), "1,234,567");
//! assert_eq!(numeric::parse("1.234,5", '.', ','), Some(1234.5));
//!
//! let config = NumberFormat::new().with_step(5.0).with_max(10.0);
//! let outcome = numeric::step("15", Direction::Up, &config).unwrap();
//! assert_eq!(outcome.text, "10");
//! ```

use tracing::trace;

/// Grouping separator used when none is configured.
pub const DEFAULT_GROUPING_SEPARATOR: char = ',';
/// Decimal separator used when none is configured.
pub const DEFAULT_DECIMAL_SEPARATOR: char = '.';

const SIGNS: [char; 2] = ['-', '+'];

/// Configuration problems reported by [`NumberFormat::validate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// Grouping and decimal separators are the same character.
    #[error("grouping and decimal separators are both {0:?}")]
    SameSeparators(char),
    /// A separator would be confused with a digit or a sign.
    #[error("{0:?} cannot be used as a separator")]
    InvalidSeparator(char),
    /// The step is zero, negative, or not finite.
    #[error("step must be a positive finite number, got {0}")]
    InvalidStep(f64),
    /// The step has a fractional part but decimals are not allowed.
    #[error("step {0} is fractional but decimal input is disabled")]
    FractionalStep(f64),
    /// `min` is greater than `max`.
    #[error("min {min} is greater than max {max}")]
    EmptyRange { min: f64, max: f64 },
    /// `max` is below zero but negative input is disabled.
    #[error("max {0} is negative but negative input is disabled")]
    NegativeMax(f64),
}

/// Direction of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Add one step.
    Up,
    /// Subtract one step.
    Down,
}

impl Direction {
    /// `+1.0` for [`Up`](Direction::Up), `-1.0` for [`Down`](Direction::Down).
    pub fn sign(self) -> f64 {
        match self {
            Direction::Up => 1.0,
            Direction::Down => -1.0,
        }
    }
}

/// Result of [`step`]: the new display text and the value it represents.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub text: String,
    pub value: f64,
}

/// Formatting, admission and stepping options for a numeric field.
///
/// Immutable once built; the builder methods consume and return `self`.
///
/// ```
/// use tactile_widgets::numeric::NumberFormat;
///
/// let euros = NumberFormat::new()
///     .with_grouping_separator('.')
///     .with_decimal_separator(',')
///     .with_precision(2);
/// assert_eq!(euros.format(1234.5), "1.234,50");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormat {
    grouping_separator: char,
    decimal_separator: char,
    precision: Option<usize>,
    min: Option<f64>,
    max: Option<f64>,
    step: f64,
    allow_negative: bool,
    allow_decimal: bool,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            grouping_separator: DEFAULT_GROUPING_SEPARATOR,
            decimal_separator: DEFAULT_DECIMAL_SEPARATOR,
            precision: None,
            min: None,
            max: None,
            step: 1.0,
            allow_negative: true,
            allow_decimal: true,
        }
    }
}

impl NumberFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grouping_separator(mut self, separator: char) -> Self {
        self.grouping_separator = separator;
        self
    }

    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Always show exactly `digits` fractional digits.
    pub fn with_precision(mut self, digits: usize) -> Self {
        self.precision = Some(digits);
        self
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Whether a leading `-` may be typed.  When disabled, stepping also stops
    /// at zero.
    pub fn allow_negative(mut self, allow: bool) -> Self {
        self.allow_negative = allow;
        self
    }

    /// Whether the decimal separator may be typed.
    pub fn allow_decimal(mut self, allow: bool) -> Self {
        self.allow_decimal = allow;
        self
    }

    pub fn grouping_separator(&self) -> char {
        self.grouping_separator
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn precision(&self) -> Option<usize> {
        self.precision
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    pub fn step_size(&self) -> f64 {
        self.step
    }

    pub fn allows_negative(&self) -> bool {
        self.allow_negative
    }

    pub fn allows_decimal(&self) -> bool {
        self.allow_decimal
    }

    /// Check the configuration for combinations the codec cannot honour.
    ///
    /// Widgets accept any configuration; callers that build formats from
    /// user settings should validate first.
    pub fn validate(&self) -> Result<(), FormatError> {
        for separator in [self.grouping_separator, self.decimal_separator] {
            if separator.is_ascii_digit() || SIGNS.contains(&separator) {
                return Err(FormatError::InvalidSeparator(separator));
            }
        }
        if self.grouping_separator == self.decimal_separator {
            return Err(FormatError::SameSeparators(self.grouping_separator));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(FormatError::InvalidStep(self.step));
        }
        if !self.allow_decimal && self.step.fract() != 0.0 {
            return Err(FormatError::FractionalStep(self.step));
        }
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(FormatError::EmptyRange { min, max });
            }
        }
        match self.max {
            Some(max) if !self.allow_negative && max < 0.0 => Err(FormatError::NegativeMax(max)),
            _ => Ok(()),
        }
    }

    /// [`format`] with this configuration's precision and separators.
    pub fn format(&self, value: f64) -> String {
        format(
            value,
            self.precision,
            self.grouping_separator,
            self.decimal_separator,
        )
    }

    /// [`parse`] with this configuration's separators.
    pub fn parse(&self, text: &str) -> Option<f64> {
        parse(text, self.grouping_separator, self.decimal_separator)
    }

    /// [`admit`] with this configuration.
    pub fn admit(&self, current: &str, candidate: &str) -> bool {
        admit(current, candidate, self)
    }

    /// [`step`] with this configuration.
    pub fn step(&self, current: &str, direction: Direction) -> Option<StepOutcome> {
        step(current, direction, self)
    }

    /// Clamp `value` into the configured range.  `min` is applied first, then
    /// `max`, so `max` wins if the range is empty.
    pub fn clamp(&self, value: f64) -> f64 {
        let mut value = value;
        if let Some(min) = self.effective_min() {
            value = value.max(min);
        }
        if let Some(max) = self.max {
            value = value.min(max);
        }
        value
    }

    fn effective_min(&self) -> Option<f64> {
        if self.allow_negative {
            self.min
        } else {
            Some(self.min.map_or(0.0, |min| min.max(0.0)))
        }
    }

    /// Pull a value that rounding pushed outside the range back in, onto the
    /// nearest value representable at the configured precision.  `max` wins
    /// when no such value lies inside the range.
    fn keep_inside(&self, value: f64) -> f64 {
        let Some(scale) = self
            .precision
            .and_then(|digits| i32::try_from(digits).ok())
            .map(|digits| 10f64.powi(digits))
            .filter(|scale| scale.is_finite())
        else {
            return value;
        };
        let mut value = value;
        if let Some(min) = self.effective_min() {
            if value < min {
                value = (min * scale).ceil() / scale;
            }
        }
        if let Some(max) = self.max {
            if value > max {
                value = (max * scale).floor() / scale;
            }
        }
        value
    }
}

/// Render `value` as display text.
///
/// Non-finite values render as an empty string.  With `precision`, the value
/// is rounded to exactly that many fractional digits; without it the shortest
/// representation that round-trips is used (never exponent notation).  The
/// integer digits are grouped in threes from the right.  A result whose
/// digits are all zero carries no minus sign.
pub fn format(value: f64, precision: Option<usize>, grouping: char, decimal: char) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let fixed = match precision {
        Some(digits) => format!("{:.*}", digits, value),
        None => value.to_string(),
    };
    let (negative, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, fixed.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (unsigned, ""),
    };

    let mut out = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    let all_zero = integer.bytes().chain(fraction.bytes()).all(|b| b == b'0');
    if negative && !all_zero {
        out.push('-');
    }
    push_grouped(&mut out, integer, grouping);
    if !fraction.is_empty() {
        out.push(decimal);
        out.push_str(fraction);
    }
    out
}

fn push_grouped(out: &mut String, digits: &str, separator: char) {
    let len = digits.len();
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(digit);
    }
}

/// Read display text back into a number.
///
/// All grouping separators are dropped and the first decimal separator
/// becomes `.`.  What remains must be a plain decimal: an optional sign,
/// digits, and optionally a `.` followed by at least one digit (`".5"` is
/// accepted, `"12."` is not).  Anything else, including a bare sign,
/// exponents and `inf`/`NaN`, returns `None`.
pub fn parse(text: &str, grouping: char, decimal: char) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let mut normalized = String::with_capacity(text.len());
    let mut seen_decimal = false;
    for ch in text.chars() {
        if ch == grouping {
            continue;
        }
        if ch == decimal && !seen_decimal {
            seen_decimal = true;
            normalized.push('.');
        } else {
            normalized.push(ch);
        }
    }

    if !is_plain_decimal(&normalized) {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn is_plain_decimal(text: &str) -> bool {
    let unsigned = text.strip_prefix(SIGNS).unwrap_or(text);
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    match unsigned.split_once('.') {
        Some((integer, fraction)) => all_digits(integer) && !fraction.is_empty() && all_digits(fraction),
        None => !unsigned.is_empty() && all_digits(unsigned),
    }
}

/// Decide whether `candidate` may replace `current` as the field's text.
///
/// Refused when decimals are disallowed and the candidate contains the
/// decimal separator, when negatives are disallowed and the candidate starts
/// with `-`, or when a sign appears anywhere but the first position.  All
/// other text is admitted as typed; [`parse`] sorts out the rest.
pub fn admit(current: &str, candidate: &str, config: &NumberFormat) -> bool {
    if !config.allow_decimal && candidate.contains(config.decimal_separator) {
        trace!(current, candidate, "edit refused: decimal separator not allowed");
        return false;
    }

    let mut chars = candidate.chars();
    let leading = chars.next();
    if chars.any(|ch| SIGNS.contains(&ch)) {
        trace!(current, candidate, "edit refused: sign after first position");
        return false;
    }
    if !config.allow_negative && leading == Some('-') {
        trace!(current, candidate, "edit refused: negative numbers not allowed");
        return false;
    }
    true
}

/// Move the value shown in `current` one step in `direction`.
///
/// Text that does not parse counts as zero.  The result is clamped with
/// [`NumberFormat::clamp`] and re-formatted; the reported value is what the
/// new text parses back to.  When rounding to the configured precision would
/// carry the value back across a bound, it is rounded towards the inside of
/// the range instead.
///
/// Returns `None` when no finite in-range value can be produced (a
/// non-finite step, or a range that only admits refused text such as a
/// negative `max` without negatives); the field keeps its current text.
pub fn step(current: &str, direction: Direction, config: &NumberFormat) -> Option<StepOutcome> {
    let current_value = config.parse(current).unwrap_or(0.0);
    let raw = current_value + direction.sign() * config.step;
    if !raw.is_finite() {
        trace!(current, step = config.step, "step refused: result is not finite");
        return None;
    }
    let clamped = config.clamp(raw);
    if clamped != raw {
        trace!(raw, clamped, "step clamped");
    }

    let value = config.keep_inside(config.parse(&config.format(clamped))?);
    let text = config.format(value);
    let value = config.parse(&text)?;
    if !admit(current, &text, config) {
        return None;
    }
    Some(StepOutcome { text, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(value: f64) -> String {
        format(value, None, ',', '.')
    }

    fn fmt_p(value: f64, precision: usize) -> String {
        format(value, Some(precision), ',', '.')
    }

    fn p(text: &str) -> Option<f64> {
        parse(text, ',', '.')
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    // --- format ---

    #[test]
    fn groups_thousands() {
        assert_eq!(fmt(1234567.0), "1,234,567");
    }

    #[test]
    fn rounds_to_precision() {
        assert_eq!(fmt_p(123.456, 2), "123.46");
    }

    #[test]
    fn short_integers_are_not_grouped() {
        assert_eq!(fmt(0.0), "0");
        assert_eq!(fmt(12.0), "12");
        assert_eq!(fmt(999.0), "999");
        assert_eq!(fmt(1000.0), "1,000");
    }

    #[test]
    fn fraction_is_never_grouped() {
        assert_eq!(fmt_p(1234.56789, 5), "1,234.56789");
    }

    #[test]
    fn negative_numbers_group_after_the_sign() {
        assert_eq!(fmt(-1234.0), "-1,234");
        assert_eq!(fmt(-123456.0), "-123,456");
    }

    #[test]
    fn precision_pads_with_zeros() {
        assert_eq!(fmt_p(5.0, 2), "5.00");
        assert_eq!(fmt_p(1234.5, 1), "1,234.5");
    }

    #[test]
    fn precision_zero_drops_fraction() {
        assert_eq!(fmt_p(123.456, 0), "123");
        assert_eq!(fmt_p(1999.7, 0), "2,000");
    }

    #[test]
    fn natural_representation_keeps_typed_fraction() {
        assert_eq!(fmt(0.1), "0.1");
        assert_eq!(fmt(1234.25), "1,234.25");
    }

    #[test]
    fn large_values_never_use_exponents() {
        assert_eq!(fmt(1e21), "1,000,000,000,000,000,000,000");
    }

    #[test]
    fn negative_zero_has_no_sign() {
        assert_eq!(fmt(-0.0), "0");
        assert_eq!(fmt_p(-0.001, 2), "0.00");
    }

    #[test]
    fn non_finite_formats_empty() {
        assert_eq!(fmt(f64::NAN), "");
        assert_eq!(fmt(f64::INFINITY), "");
        assert_eq!(fmt_p(f64::NEG_INFINITY, 2), "");
    }

    #[test]
    fn custom_separators() {
        assert_eq!(format(1234567.891, Some(2), '.', ','), "1.234.567,89");
        assert_eq!(format(1234567.0, None, ' ', ','), "1 234 567");
        assert_eq!(format(1234.5, None, '\'', '.'), "1'234.5");
    }

    // --- parse ---

    #[test]
    fn parse_empty_is_absent() {
        assert_eq!(p(""), None);
        assert_eq!(p("   "), None);
    }

    #[test]
    fn parse_removes_grouping() {
        assert_eq!(p("1,234,567"), Some(1234567.0));
        assert_eq!(p("1,2,3,4"), Some(1234.0));
    }

    #[test]
    fn parse_custom_decimal_separator() {
        assert_eq!(parse("1.234.567,89", '.', ','), Some(1234567.89));
        assert_eq!(parse("0,5", ' ', ','), Some(0.5));
    }

    #[test]
    fn parse_signs() {
        assert_eq!(p("-12"), Some(-12.0));
        assert_eq!(p("+12"), Some(12.0));
        assert_eq!(p("-.5"), Some(-0.5));
    }

    #[test]
    fn parse_leading_decimal_point() {
        assert_eq!(p(".5"), Some(0.5));
    }

    #[test]
    fn parse_transient_edits_are_absent() {
        assert_eq!(p("-"), None);
        assert_eq!(p("+"), None);
        assert_eq!(p("."), None);
        assert_eq!(p("12."), None);
        assert_eq!(p("-."), None);
    }

    #[test]
    fn parse_rejects_words_and_exponents() {
        assert_eq!(p("abc"), None);
        assert_eq!(p("12abc"), None);
        assert_eq!(p("inf"), None);
        assert_eq!(p("NaN"), None);
        assert_eq!(p("1e5"), None);
    }

    #[test]
    fn parse_rejects_second_decimal_point() {
        assert_eq!(p("1.2.3"), None);
    }

    #[test]
    fn parse_rejects_overflow() {
        let huge = "9".repeat(400);
        assert_eq!(p(&huge), None);
    }

    #[test]
    fn parse_never_panics_on_separator_soup() {
        let samples = [
            ",", ",,,", ".,", ",.", "1,", ",1", "1,.", ".,1", "1,,2.3,4", "0.0,0", ",.,",
            "00012", "1.", "12,345.678,9",
        ];
        for sample in samples {
            if let Some(value) = p(sample) {
                assert!(value.is_finite(), "{sample} parsed to {value}");
            }
        }
    }

    #[test]
    fn format_then_parse_matches_rounding() {
        let values = [
            0.0, 1.0, -1.0, 0.1, 2.675, 123.456, -987.654321, 1234567.891, 1e15, 1e-7, 42.0,
        ];
        for value in values {
            for precision in 0..=6 {
                let text = fmt_p(value, precision);
                let rounded: f64 = format!("{:.*}", precision, value).parse().unwrap();
                let back = p(&text).unwrap();
                assert!(close(back, rounded), "{value} @ {precision}: {text} -> {back}");
            }
            let back = p(&fmt(value)).unwrap();
            assert!(close(back, value), "{value} without precision -> {back}");
        }
    }

    #[test]
    fn european_round_trip() {
        let euros = NumberFormat::new()
            .with_grouping_separator('.')
            .with_decimal_separator(',')
            .with_precision(2);
        let text = euros.format(-98765.432);
        assert_eq!(text, "-98.765,43");
        assert_eq!(euros.parse(&text), Some(-98765.43));
    }

    // --- admit ---

    #[test]
    fn admit_rejects_decimal_when_disallowed() {
        let config = NumberFormat::new().allow_decimal(false);
        assert!(!admit("12", "12.", &config));
        assert!(admit("12", "123", &config));
    }

    #[test]
    fn admit_rejects_custom_decimal_separator() {
        let config = NumberFormat::new()
            .with_grouping_separator('.')
            .with_decimal_separator(',')
            .allow_decimal(false);
        assert!(!admit("12", "12,", &config));
        assert!(admit("1.23", "1.234", &config));
    }

    #[test]
    fn admit_rejects_negative_when_disallowed() {
        let config = NumberFormat::new().allow_negative(false);
        assert!(!admit("12", "-12", &config));
        assert!(admit("12", "+12", &config));
    }

    #[test]
    fn admit_allows_leading_minus_by_default() {
        let config = NumberFormat::new();
        assert!(admit("", "-", &config));
        assert!(admit("-", "-1", &config));
    }

    #[test]
    fn admit_rejects_sign_after_first_position() {
        let config = NumberFormat::new();
        assert!(!admit("12", "1-2", &config));
        assert!(!admit("-12", "--12", &config));
        assert!(!admit("12", "12+", &config));
    }

    #[test]
    fn admit_lets_free_text_through() {
        let config = NumberFormat::new();
        assert!(admit("", "abc", &config));
        assert!(admit("1", "1,", &config));
        assert!(admit("12", "", &config));
    }

    // --- step ---

    fn stepped(current: &str, direction: Direction, config: &NumberFormat) -> StepOutcome {
        step(current, direction, config).expect("step produced no value")
    }

    #[test]
    fn step_adds_step_size() {
        let config = NumberFormat::new().with_step(5.0);
        assert_eq!(stepped("10", Direction::Up, &config).text, "15");
        assert_eq!(stepped("10", Direction::Down, &config).text, "5");
    }

    #[test]
    fn step_clamps_up_to_min() {
        let config = NumberFormat::new().with_step(5.0).with_min(10.0);
        let outcome = stepped("5", Direction::Up, &config);
        assert_eq!(outcome.text, "10");
        assert_eq!(outcome.value, 10.0);
    }

    #[test]
    fn step_clamps_down_to_max() {
        let config = NumberFormat::new().with_step(5.0).with_max(10.0);
        let outcome = stepped("15", Direction::Up, &config);
        assert_eq!(outcome.text, "10");
        assert_eq!(outcome.value, 10.0);
    }

    #[test]
    fn step_from_absent_starts_at_zero() {
        let config = NumberFormat::new();
        assert_eq!(stepped("", Direction::Up, &config).text, "1");
        assert_eq!(stepped("-", Direction::Down, &config).text, "-1");
    }

    #[test]
    fn step_from_below_range_lands_on_nearest_bound() {
        let config = NumberFormat::new().with_min(10.0).with_max(20.0);
        let outcome = stepped("3", Direction::Down, &config);
        assert_eq!(outcome.value, 10.0);
    }

    #[test]
    fn step_from_above_range_lands_on_nearest_bound() {
        let config = NumberFormat::new().with_min(10.0).with_max(20.0);
        let outcome = stepped("50", Direction::Up, &config);
        assert_eq!(outcome.value, 20.0);
    }

    #[test]
    fn repeated_steps_stay_in_range() {
        let config = NumberFormat::new().with_step(3.0).with_min(-4.0).with_max(7.0);
        let mut text = String::from("0");
        for direction in [Direction::Up; 10].into_iter().chain([Direction::Down; 10]) {
            let outcome = stepped(&text, direction, &config);
            assert!((-4.0..=7.0).contains(&outcome.value), "{}", outcome.value);
            text = outcome.text;
        }
        assert_eq!(text, "-4");
    }

    #[test]
    fn step_uses_precision_and_separators() {
        let config = NumberFormat::new()
            .with_grouping_separator('.')
            .with_decimal_separator(',')
            .with_precision(2)
            .with_step(0.1);
        let outcome = stepped("1.234,50", Direction::Up, &config);
        assert_eq!(outcome.text, "1.234,60");
        assert!(close(outcome.value, 1234.6));
    }

    #[test]
    fn step_value_matches_rounded_text() {
        let config = NumberFormat::new().with_precision(1).with_step(0.1);
        let outcome = stepped("0.2", Direction::Up, &config);
        assert_eq!(outcome.text, "0.3");
        assert_eq!(outcome.value, 0.3);
    }

    #[test]
    fn step_stops_at_zero_without_negatives() {
        let config = NumberFormat::new().allow_negative(false);
        assert_eq!(stepped("0", Direction::Down, &config).text, "0");
        let config = NumberFormat::new().allow_negative(false).with_min(-10.0);
        assert_eq!(stepped("0", Direction::Down, &config).text, "0");
    }

    #[test]
    fn rounding_never_carries_past_max() {
        let config = NumberFormat::new().with_precision(1).with_step(0.5).with_max(9.96);
        let outcome = stepped("9.5", Direction::Up, &config);
        assert_eq!(outcome.text, "9.9");
        assert_eq!(outcome.value, 9.9);
        assert_eq!(stepped(&outcome.text, Direction::Up, &config).text, "9.9");
    }

    #[test]
    fn rounding_never_carries_below_min() {
        let config = NumberFormat::new().with_precision(0).with_min(2.5).with_max(10.0);
        let mut text = String::from("5");
        let mut seen = Vec::new();
        for _ in 0..5 {
            let outcome = stepped(&text, Direction::Down, &config);
            assert!(outcome.value >= 2.5, "{} below min", outcome.value);
            seen.push(outcome.value);
            text = outcome.text;
        }
        assert_eq!(seen, [4.0, 3.0, 3.0, 3.0, 3.0]);
    }

    #[test]
    fn non_finite_step_leaves_nothing_to_show() {
        let config = NumberFormat::new().with_step(f64::NAN);
        assert_eq!(step("1", Direction::Up, &config), None);
        let config = NumberFormat::new().with_step(f64::INFINITY);
        assert_eq!(step("1", Direction::Down, &config), None);
        let config = NumberFormat::new().with_step(f64::MAX);
        let largest = format(f64::MAX, None, ',', '.');
        assert_eq!(step(&largest, Direction::Up, &config), None);
    }

    #[test]
    fn negative_max_without_negatives_is_refused() {
        let config = NumberFormat::new().allow_negative(false).with_max(-5.0);
        assert_eq!(step("0", Direction::Down, &config), None);
        assert_eq!(config.validate(), Err(FormatError::NegativeMax(-5.0)));
    }

    #[test]
    fn step_grouping_round_trips() {
        let config = NumberFormat::new();
        assert_eq!(stepped("999", Direction::Up, &config).text, "1,000");
        assert_eq!(stepped("1,000", Direction::Down, &config).text, "999");
    }

    // --- validate ---

    #[test]
    fn default_format_is_valid() {
        assert_eq!(NumberFormat::default().validate(), Ok(()));
    }

    #[test]
    fn validate_reports_bad_configurations() {
        assert_eq!(
            NumberFormat::new().with_grouping_separator('.').validate(),
            Err(FormatError::SameSeparators('.'))
        );
        assert_eq!(
            NumberFormat::new().with_decimal_separator('-').validate(),
            Err(FormatError::InvalidSeparator('-'))
        );
        assert_eq!(
            NumberFormat::new().with_grouping_separator('7').validate(),
            Err(FormatError::InvalidSeparator('7'))
        );
        assert_eq!(
            NumberFormat::new().with_step(0.0).validate(),
            Err(FormatError::InvalidStep(0.0))
        );
        assert_eq!(
            NumberFormat::new().with_step(0.5).allow_decimal(false).validate(),
            Err(FormatError::FractionalStep(0.5))
        );
        assert_eq!(
            NumberFormat::new().with_min(5.0).with_max(1.0).validate(),
            Err(FormatError::EmptyRange { min: 5.0, max: 1.0 })
        );
    }

    #[test]
    fn format_error_messages_are_readable() {
        let err = FormatError::EmptyRange { min: 5.0, max: 1.0 };
        assert_eq!(err.to_string(), "min 5 is greater than max 1");
    }
}
