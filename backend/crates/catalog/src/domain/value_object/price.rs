//! Price Value Object
//!
//! Non-negative amount with two fraction digits, fitting `NUMERIC(10, 2)`.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    pub fn new(value: Decimal) -> CatalogResult<Self> {
        if value < Decimal::ZERO {
            return Err(CatalogError::Validation("price must not be negative".into()));
        }

        let mut rounded = value.round_dp(2);
        rounded.rescale(2);
        if rounded > Self::max() {
            return Err(CatalogError::Validation("price is too large".into()));
        }

        Ok(Self(rounded))
    }

    /// Largest value `NUMERIC(10, 2)` can hold
    fn max() -> Decimal {
        Decimal::new(99_999_999_99, 2)
    }

    pub fn from_db(value: Decimal) -> Self {
        Self(value)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}
