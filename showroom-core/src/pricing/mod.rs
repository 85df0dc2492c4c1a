//! Pricing Aggregator Module
//!
//! Computes the three independent monetary totals collected during order
//! intake: style price, stitching price and fabric price. Totals are
//! re-derived in full from the live reference price list on every call; a
//! price-list update is reflected on the next computation with no cache to
//! invalidate.

mod fabric_calculator;
mod money;
mod price_list;
mod stitching_calculator;
mod style_calculator;

pub use fabric_calculator::*;
pub use money::*;
pub use price_list::*;
pub use stitching_calculator::*;
pub use style_calculator::*;
