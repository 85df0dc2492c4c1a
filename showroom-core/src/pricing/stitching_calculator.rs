//! Stitching price calculation
//!
//! Same traversal as the style price but over each entry's `Stitch` value,
//! with two deliberate differences observed in the showroom's costing:
//!
//! - the line stitch is added once per garment whenever a lines structure is
//!   present at all, regardless of how many line flags are set (the style
//!   price counts each flagged line separately)
//! - the side pocket type is billed here and nowhere else
//!
//! The line-flag asymmetry mirrors the real cost structure: a second
//! decorative line doubles the style surcharge but not the stitching work.

use rust_decimal::Decimal;
use shared::models::{STY_LINE, StyleFields, StyleOption};
use shared::record::Record;

use super::money::to_f64;
use super::price_list::PriceIndex;
use super::style_calculator::base_style_code;

/// Total stitching price for a set of garments
pub fn calculate_stitching_price(
    style_options: &[StyleOption],
    styles: &[Record<StyleFields>],
) -> f64 {
    if style_options.is_empty() || styles.is_empty() {
        return 0.0;
    }

    let index = PriceIndex::build(styles);
    let mut total = Decimal::ZERO;

    for opt in style_options {
        total += index.stitch(base_style_code(opt.style));

        // Line stitch counts once per garment when any lines structure exists,
        // independent of how many flags are set
        if opt.lines.is_some() {
            total += index.stitch(STY_LINE);
        }

        if let Some(collar) = &opt.collar {
            if let Some(code) = &collar.collar_type {
                total += index.stitch(code);
            }
            if let Some(code) = &collar.button {
                total += index.stitch(code);
            }
        }

        if let Some(code) = opt.jabzoor.as_ref().and_then(|j| j.first.as_ref()) {
            total += index.stitch(code);
        }

        if let Some(pocket) = &opt.front_pocket {
            if let Some(code) = &pocket.pocket_type {
                total += index.stitch(code);
            }
            // Side pocket stitch has no style-price counterpart
            if let Some(code) = &pocket.side_type {
                total += index.stitch(code);
            }
        }

        if let Some(code) = opt.cuffs.as_ref().and_then(|c| c.cuff_type.as_ref()) {
            total += index.stitch(code);
        }
    }

    to_f64(total)
}
