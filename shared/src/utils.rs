// Number formatting for the two fixed locales the calculators use:
// en-US grouping for what the user types, vi-VN currency for results.

pub mod number_format {
    /// Grouping separator inserted into amount inputs ("1,000,000").
    pub const INPUT_GROUPING: char = ',';
    /// Grouping separator used for displayed currency ("1.000.000").
    pub const DISPLAY_GROUPING: char = '.';
    /// Non-breaking space followed by the dong sign.
    pub const CURRENCY_SUFFIX: &str = "\u{a0}₫";

    /// Inserts `separator` every three digits counting from the right.
    /// `digits` is expected to be ASCII digits only.
    pub fn group_digits(digits: &str, separator: char) -> String {
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(separator);
            }
            out.push(ch);
        }
        out
    }

    /// Renders a digit string the way an en-US integer formatter would:
    /// leading zeros dropped, `,` every three digits. Arbitrary length,
    /// so nothing here can overflow.
    pub fn format_input_amount(digits: &str) -> String {
        if digits.is_empty() {
            return String::new();
        }
        let significant = digits.trim_start_matches('0');
        if significant.is_empty() {
            return "0".to_string();
        }
        group_digits(significant, INPUT_GROUPING)
    }

    pub fn strip_input_grouping(s: &str) -> String {
        s.replace(INPUT_GROUPING, "")
    }

    /// vi-VN VND rendering, e.g. `82425` -> `"82.425 ₫"`.
    pub fn format_currency(value: i128) -> String {
        let grouped = group_digits(&value.unsigned_abs().to_string(), DISPLAY_GROUPING);
        let sign = if value < 0 { "-" } else { "" };
        format!("{}{}{}", sign, grouped, CURRENCY_SUFFIX)
    }

}
