//! Per-call price-list index
//!
//! Each pricing function builds a fresh `Code -> entry` index from the style
//! records it was handed. The index is local to one call so a price-list
//! update is always reflected immediately and no stale-cache invalidation
//! logic exists.

use rust_decimal::Decimal;
use shared::models::StyleFields;
use shared::record::Record;
use std::collections::HashMap;
use tracing::debug;

use super::money::to_decimal;

/// Code-keyed view over one price list, valid for a single computation
pub struct PriceIndex<'a> {
    by_code: HashMap<&'a str, &'a StyleFields>,
}

impl<'a> PriceIndex<'a> {
    /// Build the index from raw style records
    pub fn build(styles: &'a [Record<StyleFields>]) -> Self {
        let mut by_code = HashMap::with_capacity(styles.len());
        for record in styles {
            // Code is unique per price list; last write wins on a bad sheet
            by_code.insert(record.fields.code.as_str(), &record.fields);
        }
        Self { by_code }
    }

    /// `RatePerItem` for a code; a miss contributes 0 to the total
    pub fn rate(&self, code: &str) -> Decimal {
        match self.by_code.get(code) {
            Some(style) => to_decimal(style.rate_per_item),
            None => {
                debug!(code, "price list has no entry for code, counting 0");
                Decimal::ZERO
            }
        }
    }

    /// `Stitch` value for a code; a miss contributes 0 to the total
    pub fn stitch(&self, code: &str) -> Decimal {
        match self.by_code.get(code) {
            Some(style) => to_decimal(style.stitch.value()),
            None => {
                debug!(code, "price list has no stitch entry for code, counting 0");
                Decimal::ZERO
            }
        }
    }
}
