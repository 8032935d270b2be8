//! # Validation Module
//!
//! Input validation shared by the shell and the order repository.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell prompt (apps/cli)                                      │
//! │  ├── parse_menu_item_id / parse_quantity / Money::from_str             │
//! │  └── On error: print message, ask again                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Repository (bistro-db)                                       │
//! │  ├── validate_order_lines before the transaction starts                │
//! │  └── Menu item / customer existence checks inside the transaction      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: SQLite                                                       │
//! │  ├── NOT NULL constraints                                              │
//! │  └── Foreign key constraints                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::OrderLine;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest customer name accepted.
pub const MAX_NAME_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_NAME_LEN`] characters
///
/// ## Example
/// ```rust
/// use bistro_core::validation::validate_customer_name;
///
/// assert!(validate_customer_name("Ada Lovelace").is_ok());
/// assert!(validate_customer_name("   ").is_err());
/// ```
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity (1 to [`MAX_ITEM_QUANTITY`]).
///
/// ## Example
/// ```rust
/// use bistro_core::validation::validate_quantity;
///
/// assert!(validate_quantity(2).is_ok());
/// assert!(validate_quantity(0).is_err());
/// assert!(validate_quantity(-1).is_err());
/// ```
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if !(1..=MAX_ITEM_QUANTITY).contains(&quantity) {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Parses a menu item id typed at the prompt.
pub fn parse_menu_item_id(input: &str) -> ValidationResult<i64> {
    parse_integer("item ID", input)
}

/// Parses and range-checks a quantity typed at the prompt.
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    let quantity = parse_integer("quantity", input)?;
    validate_quantity(quantity)?;
    Ok(quantity)
}

fn parse_integer(field: &str, input: &str) -> ValidationResult<i64> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    input
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("'{input}' is not a whole number"),
        })
}

// =============================================================================
// Order Validators
// =============================================================================

/// Validates a full set of order lines before any lookup.
///
/// ## Rules
/// - At least one line
/// - Every quantity passes [`validate_quantity`]
pub fn validate_order_lines(lines: &[OrderLine]) -> ValidationResult<()> {
    if lines.is_empty() {
        return Err(ValidationError::Required {
            field: "order items".to_string(),
        });
    }

    lines
        .iter()
        .try_for_each(|line| validate_quantity(line.quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("Ada").is_ok());
        assert_eq!(
            validate_customer_name(""),
            Err(ValidationError::Required {
                field: "name".to_string()
            })
        );
        assert!(matches!(
            validate_customer_name(&"x".repeat(MAX_NAME_LEN + 1)),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_validate_quantity_bounds() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(MAX_ITEM_QUANTITY).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
        assert!(validate_quantity(MAX_ITEM_QUANTITY + 1).is_err());
    }

    #[test]
    fn test_parse_menu_item_id() {
        assert_eq!(parse_menu_item_id(" 2 "), Ok(2));
        assert!(matches!(
            parse_menu_item_id("two"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_menu_item_id(""),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), Ok(3));
        assert!(parse_quantity("0").is_err());
        assert!(parse_quantity("1.5").is_err());
    }

    #[test]
    fn test_validate_order_lines() {
        assert!(validate_order_lines(&[]).is_err());
        assert!(validate_order_lines(&[OrderLine::new(1, 2), OrderLine::new(2, 1)]).is_ok());
        assert!(validate_order_lines(&[OrderLine::new(1, 2), OrderLine::new(2, 0)]).is_err());
    }
}
