//! Core scalar types

/// Price per unit (ounce or gram, depending on context)
pub type Price = f64;

/// Money/cash amount
pub type Cash = f64;

/// Gold quantity in grams
pub type Grams = f64;

/// Percentage as a fraction (0.0 to 1.0)
pub type Percentage = f64;

/// 1-based quarter ordinal
pub type Quarter = u32;
