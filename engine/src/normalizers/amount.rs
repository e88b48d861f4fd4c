// Currency amounts: digits only, re-grouped with thousands separators.
use super::{retain_chars, Normalizer};
use shared::utils::number_format;

pub struct AmountNormalizer;

impl Normalizer for AmountNormalizer {
    fn name(&self) -> &str {
        "amount"
    }

    /// Separators are stripped together with every other non-digit before
    /// grouping is re-applied, so already-grouped text comes back unchanged.
    fn normalize(&self, raw: &str) -> String {
        let digits = retain_chars(raw, |c| c.is_ascii_digit());
        number_format::format_input_amount(&digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_thousands() {
        assert_eq!(AmountNormalizer.normalize("1000000"), "1,000,000");
        assert_eq!(AmountNormalizer.normalize("999"), "999");
    }

    #[test]
    fn test_strips_stray_characters_before_grouping() {
        assert_eq!(AmountNormalizer.normalize("abc1,0a00"), "1,000");
        assert_eq!(AmountNormalizer.normalize(" 12.345 đ"), "12,345");
        assert_eq!(AmountNormalizer.normalize("-500"), "500");
    }

    #[test]
    fn test_no_digits_yields_empty() {
        assert_eq!(AmountNormalizer.normalize(""), "");
        assert_eq!(AmountNormalizer.normalize("abc"), "");
        assert_eq!(AmountNormalizer.normalize(",,,"), "");
    }

    #[test]
    fn test_leading_zeros_are_dropped() {
        assert_eq!(AmountNormalizer.normalize("007"), "7");
        assert_eq!(AmountNormalizer.normalize("0"), "0");
    }

    #[test]
    fn test_idempotent() {
        for raw in ["1000000", "abc1,0a00", "0012,34", "", "x", "98765432109876543210"] {
            let once = AmountNormalizer.normalize(raw);
            assert_eq!(AmountNormalizer.normalize(&once), once, "not idempotent for {:?}", raw);
        }
    }
}
