// Percentages: digits and decimal points. Repeated points are left in
// place; rejecting "1.2.3" is the validator's job.
use super::{retain_chars, Normalizer};

pub struct PercentageNormalizer;

impl Normalizer for PercentageNormalizer {
    fn name(&self) -> &str {
        "percentage"
    }

    fn normalize(&self, raw: &str) -> String {
        retain_chars(raw, |c| c.is_ascii_digit() || c == '.')
    }
}
