//! Fabric price and fabric matrix lookup

use rust_decimal::Decimal;
use shared::models::{FabricMatrix, FabricSelection};
use tracing::warn;

use super::money::{to_decimal, to_f64};

/// Total fabric price: sum of each selection's precomputed amount
///
/// Selections without an amount contribute 0.
pub fn calculate_fabric_price(selections: &[FabricSelection]) -> f64 {
    let total: Decimal = selections
        .iter()
        .filter_map(|s| s.fabric_amount.map(to_decimal))
        .sum();
    to_f64(total)
}

/// Fabric amount for a (length, bottom) pair
///
/// Both axes are resolved positionally against the matrix; if either value is
/// absent from its axis the pair is unknown and `None` is returned. A hit
/// returns the exact grid cell.
pub fn fabric_value(matrix: &FabricMatrix, length: f64, bottom: f64) -> Option<f64> {
    let Some(row) = matrix.length_index(length) else {
        warn!(length, "fabric matrix has no entry for length");
        return None;
    };
    let Some(col) = matrix.bottom_index(bottom) else {
        warn!(bottom, "fabric matrix has no entry for bottom");
        return None;
    };
    matrix.cell(row, col)
}
