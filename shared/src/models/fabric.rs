//! Fabric selection and fabric consumption matrix

use crate::error::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One garment's fabric sourcing record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FabricSelection {
    /// Owning garment (linkage field)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub garment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fabric_id: Option<String>,
    /// Where the fabric comes from (showroom stock, customer, outside shop)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Computed fabric amount (currency); absent selections price at 0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fabric_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<NaiveDate>,
    #[serde(default)]
    pub express: bool,
    #[serde(default)]
    pub home_delivery: bool,
}

/// Fabric consumption matrix
///
/// Static reference table mapping (garment length, bottom width) to the fabric
/// amount. `data[i][j]` belongs to `lengths[i]` / `bottoms[j]`; the axis
/// arrays are position-aligned with the grid. Never mutated after
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FabricMatrix {
    lengths: Vec<f64>,
    bottoms: Vec<f64>,
    data: Vec<Vec<f64>>,
}

impl FabricMatrix {
    /// Build a matrix, rejecting a grid whose dimensions do not match the
    /// axis arrays
    pub fn new(
        lengths: Vec<f64>,
        bottoms: Vec<f64>,
        data: Vec<Vec<f64>>,
    ) -> Result<Self, AppError> {
        if data.len() != lengths.len() {
            return Err(AppError::validation(format!(
                "fabric matrix has {} rows for {} lengths",
                data.len(),
                lengths.len()
            )));
        }
        if let Some((i, row)) = data
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != bottoms.len())
        {
            return Err(AppError::validation(format!(
                "fabric matrix row {} has {} cells for {} bottoms",
                i,
                row.len(),
                bottoms.len()
            )));
        }
        Ok(Self {
            lengths,
            bottoms,
            data,
        })
    }

    /// Position of `length` on the length axis, if present
    pub fn length_index(&self, length: f64) -> Option<usize> {
        self.lengths.iter().position(|v| *v == length)
    }

    /// Position of `bottom` on the bottom axis, if present
    pub fn bottom_index(&self, bottom: f64) -> Option<usize> {
        self.bottoms.iter().position(|v| *v == bottom)
    }

    /// Grid cell at the resolved (row, column) position
    pub fn cell(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get(row).and_then(|r| r.get(col)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_row_count_mismatch() {
        let err = FabricMatrix::new(vec![54.0, 56.0], vec![24.0], vec![vec![3.5]]).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_new_rejects_ragged_row() {
        let err = FabricMatrix::new(
            vec![54.0],
            vec![24.0, 26.0],
            vec![vec![3.5]], // one cell, two bottoms
        )
        .unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_axis_and_cell_lookup() {
        let matrix = FabricMatrix::new(
            vec![54.0, 56.0],
            vec![24.0, 26.0],
            vec![vec![3.25, 3.5], vec![3.5, 3.75]],
        )
        .unwrap();

        assert_eq!(matrix.length_index(56.0), Some(1));
        assert_eq!(matrix.bottom_index(24.0), Some(0));
        assert_eq!(matrix.length_index(60.0), None);
        assert_eq!(matrix.cell(1, 0), Some(3.5));
    }
}
