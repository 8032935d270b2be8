//! # Money Module
//!
//! Provides the `Money` type for handling menu prices, totals and payments.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:                                                           │
//! │    0.10 + 0.20 = 0.30000000000000004  ❌                                │
//! │                                                                         │
//! │  With integer cents:                                                    │
//! │    599 * 2 + 899 = 2097  → "$20.97"  ✅                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Storage Boundary
//! The `MenuItems.price` column is `REAL` (kept for compatibility with
//! existing database files). [`Money::from_stored_price`] and
//! [`Money::to_stored_price`] are the only places a float is involved;
//! everything in between is cents.
//!
//! ## Usage
//! ```rust
//! use bistro_core::money::Money;
//!
//! let price = Money::from_cents(599); // $5.99
//! let line_total = price.multiply_quantity(2);
//! assert_eq!(line_total.cents(), 1198);
//!
//! // Payment amounts typed at the prompt
//! let paid: Money = "20.00".parse().unwrap();
//! assert_eq!(paid.cents(), 2000);
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// Signed so that negative differences (e.g. a short payment) are
/// representable during comparison and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::money::Money;
    ///
    /// let price = Money::from_cents(899); // $8.99
    /// assert_eq!(price.cents(), 899);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a `REAL` price column value into cents, rounding to the
    /// nearest cent.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::money::Money;
    ///
    /// // 5.99 * 100 is 599.0000000000001 in binary floating point
    /// assert_eq!(Money::from_stored_price(5.99).cents(), 599);
    /// ```
    pub fn from_stored_price(value: f64) -> Self {
        Money((value * 100.0).round() as i64)
    }

    /// Converts back to the `REAL` representation used by the price column.
    pub fn to_stored_price(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a line quantity.
    ///
    /// ## User Workflow
    /// ```text
    /// Burger $5.99
    /// Quantity: 2
    ///      │
    ///      ▼
    /// multiply_quantity(2) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Total: $11.98
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses an amount typed by a user: `12`, `12.5`, `12.50`, `$12.50`.
///
/// ## Rules
/// - Optional leading `$`
/// - At most two decimal places
/// - No sign, no thousands separators
///
/// Parsing is exact: no float is ever produced from user input.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: reason.to_string(),
        };

        let raw = s.trim();
        let raw = raw.strip_prefix('$').unwrap_or(raw).trim();

        if raw.is_empty() {
            return Err(ValidationError::Required {
                field: "amount".to_string(),
            });
        }

        let (whole, fraction) = match raw.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (raw, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid("expected a number like 12.50"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid("expected a number like 12.50"));
        }
        if fraction.len() > 2 {
            return Err(invalid("at most two decimal places"));
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("amount is too large"))?
        };

        // "5" after the point means 50 cents
        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid("bad cents"))? * 10,
            _ => fraction.parse().map_err(|_| invalid("bad cents"))?,
        };

        dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Money)
            .ok_or_else(|| invalid("amount is too large"))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `$D.CC`, the format used on the menu and the invoice.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// SQLite Mapping
// =============================================================================

/// Money is stored as `REAL` dollars in the price column.
#[cfg(feature = "sqlx")]
mod sqlite {
    use sqlx::encode::IsNull;
    use sqlx::error::BoxDynError;
    use sqlx::sqlite::{Sqlite, SqliteTypeInfo, SqliteValueRef};
    use sqlx::{Decode, Encode, Type};

    use super::Money;

    impl Type<Sqlite> for Money {
        fn type_info() -> SqliteTypeInfo {
            <f64 as Type<Sqlite>>::type_info()
        }

        fn compatible(ty: &SqliteTypeInfo) -> bool {
            <f64 as Type<Sqlite>>::compatible(ty) || <i64 as Type<Sqlite>>::compatible(ty)
        }
    }

    impl<'q> Encode<'q, Sqlite> for Money {
        fn encode_by_ref(
            &self,
            buf: &mut <Sqlite as sqlx::Database>::ArgumentBuffer<'q>,
        ) -> Result<IsNull, BoxDynError> {
            <f64 as Encode<'q, Sqlite>>::encode_by_ref(&self.to_stored_price(), buf)
        }
    }

    impl<'r> Decode<'r, Sqlite> for Money {
        fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
            let price = <f64 as Decode<'r, Sqlite>>::decode(value)?;
            Ok(Money::from_stored_price(price))
        }
    }
}
