// View-facing models and fixed-locale number formatting shared by the
// calculators and whatever renders them.
pub mod models;
pub mod utils;
