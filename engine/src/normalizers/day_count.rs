// Day counts: digits only, no grouping.
use super::{retain_chars, Normalizer};

pub struct DayCountNormalizer;

impl Normalizer for DayCountNormalizer {
    fn name(&self) -> &str {
        "day_count"
    }

    fn normalize(&self, raw: &str) -> String {
        retain_chars(raw, |c| c.is_ascii_digit())
    }
}
