//! Stage label tables
//!
//! The record store tracks production and billing progress as bare integer
//! codes. These tables map codes to the display strings the operations table
//! shows; an unmapped code renders as "Unknown" rather than failing the row.

/// Display label for a code absent from a table
pub const UNKNOWN_STAGE_LABEL: &str = "Unknown";

/// Production stage of a single garment
pub const PIECE_STAGE_LABELS: &[(i64, &str)] = &[
    (1, "Pending"),
    (2, "Cutting"),
    (3, "Stitching"),
    (4, "At Showroom"),
    (5, "Delivered"),
];

/// Billing stage of an order (fatoura)
pub const FATOURA_STAGE_LABELS: &[(i64, &str)] = &[
    (1, "Open"),
    (2, "Partially Paid"),
    (3, "Paid"),
    (4, "Cancelled"),
];

/// Resolve a stage code against a label table
pub fn stage_label(labels: &[(i64, &'static str)], code: Option<i64>) -> &'static str {
    match code {
        Some(c) => labels
            .iter()
            .find(|(k, _)| *k == c)
            .map(|(_, label)| *label)
            .unwrap_or(UNKNOWN_STAGE_LABEL),
        None => UNKNOWN_STAGE_LABEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_piece_stage() {
        assert_eq!(stage_label(PIECE_STAGE_LABELS, Some(4)), "At Showroom");
    }

    #[test]
    fn test_known_fatoura_stage() {
        assert_eq!(stage_label(FATOURA_STAGE_LABELS, Some(2)), "Partially Paid");
    }

    #[test]
    fn test_unknown_code_degrades() {
        assert_eq!(stage_label(PIECE_STAGE_LABELS, Some(99)), "Unknown");
    }

    #[test]
    fn test_missing_code_degrades() {
        assert_eq!(stage_label(FATOURA_STAGE_LABELS, None), "Unknown");
    }
}
