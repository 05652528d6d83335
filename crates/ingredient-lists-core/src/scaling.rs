//! Quantity Scaling
//!
//! Display quantities are derived on every read and never stored.

use crate::error::{StoreError, StoreResult};
use crate::model::Ingredient;

/// Scaled amount for `number_of_people`
pub fn compute_display_quantity(ingredient: &Ingredient, number_of_people: u32) -> f64 {
    ingredient.base_quantity * f64::from(number_of_people)
}

/// Parse a typed people count (positive whole number)
pub fn parse_people_count(text: &str) -> StoreResult<u32> {
    match text.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(StoreError::validation(format!(
            "Number of people must be a positive whole number, got {:?}",
            text.trim()
        ))),
    }
}

/// Human-readable quantity: whole numbers bare, otherwise at most two decimals
pub fn format_quantity(quantity: f64) -> String {
    if !quantity.is_finite() {
        return quantity.to_string();
    }
    let fixed = format!("{:.2}", quantity);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
