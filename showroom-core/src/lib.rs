//! Showroom computation core
//!
//! Pure, synchronous computations behind the showroom's order intake and
//! operations table:
//!
//! - [`pricing`] - style, stitching and fabric price aggregation over the
//!   reference price list, plus the fabric consumption matrix lookup
//! - [`dedup`] - structural style deduplication (identical garments in one
//!   order share a style ID and a production batch)
//! - [`projection`] - flattening of order/customer/garment record aggregates
//!   into the operations table's row shape
//!
//! Nothing here performs I/O or holds state between calls; inputs are never
//! mutated. Reference data lookups that miss degrade to documented defaults
//! (0, `None`, "Unknown") instead of failing the whole computation.

pub mod dedup;
pub mod pricing;
pub mod projection;

pub use dedup::{are_styles_identical, assign_shared_style_ids, style_fingerprint};
pub use pricing::{
    calculate_fabric_price, calculate_stitching_price, calculate_style_price, fabric_value,
};
pub use projection::{GarmentRow, OrderType, garment_rows, garment_rows_at};
