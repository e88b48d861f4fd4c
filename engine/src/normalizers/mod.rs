// Keystroke normalizers: raw text in, canonical field text out.
//
// Normalizing never fails. Input with nothing usable becomes the empty
// string and the validator reports it.
pub mod amount;
pub mod day_count;
pub mod percentage;

pub use amount::AmountNormalizer;
pub use day_count::DayCountNormalizer;
pub use percentage::PercentageNormalizer;

// Common trait for all field normalizers
pub trait Normalizer: Send + Sync {
    fn name(&self) -> &str;
    fn normalize(&self, raw: &str) -> String;
}

pub fn normalize_amount(raw: &str) -> String {
    AmountNormalizer.normalize(raw)
}

pub fn normalize_day_count(raw: &str) -> String {
    DayCountNormalizer.normalize(raw)
}

pub fn normalize_percentage(raw: &str) -> String {
    PercentageNormalizer.normalize(raw)
}

fn retain_chars(raw: &str, keep: impl Fn(char) -> bool) -> String {
    raw.chars().filter(|&c| keep(c)).collect()
}
