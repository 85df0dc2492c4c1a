//! Style price calculation
//!
//! Sums `RatePerItem` over every selected code of every style option. Lookup
//! misses count as 0: a misconfigured price list undercounts the total
//! instead of failing the intake flow.

use rust_decimal::Decimal;
use shared::models::{BaseStyle, STY_DESIGN, STY_KUWAITI, STY_LINE, StyleFields, StyleOption};
use shared::record::Record;

use super::money::to_f64;
use super::price_list::PriceIndex;

/// Fixed reference code for a base style choice
pub(crate) fn base_style_code(style: BaseStyle) -> &'static str {
    match style {
        BaseStyle::Kuwaiti => STY_KUWAITI,
        BaseStyle::Design => STY_DESIGN,
    }
}

/// Total style price for a set of garments
///
/// Per option, the following selections contribute their `RatePerItem`:
/// base style, each set line flag (two lines count the line rate twice),
/// collar type, collar button, the first jabzoor only, front pocket type and
/// cuffs type. An empty price list or empty selection yields 0.
pub fn calculate_style_price(
    style_options: &[StyleOption],
    styles: &[Record<StyleFields>],
) -> f64 {
    if style_options.is_empty() || styles.is_empty() {
        return 0.0;
    }

    let index = PriceIndex::build(styles);
    let mut total = Decimal::ZERO;

    for opt in style_options {
        total += index.rate(base_style_code(opt.style));

        if let Some(lines) = &opt.lines {
            // Each flagged line adds the line rate independently
            if lines.line1 {
                total += index.rate(STY_LINE);
            }
            if lines.line2 {
                total += index.rate(STY_LINE);
            }
        }

        if let Some(collar) = &opt.collar {
            if let Some(code) = &collar.collar_type {
                total += index.rate(code);
            }
            if let Some(code) = &collar.button {
                total += index.rate(code);
            }
        }

        // Only the first jabzoor is billed; a second one never contributes
        if let Some(code) = opt.jabzoor.as_ref().and_then(|j| j.first.as_ref()) {
            total += index.rate(code);
        }

        if let Some(code) = opt.front_pocket.as_ref().and_then(|p| p.pocket_type.as_ref()) {
            total += index.rate(code);
        }

        if let Some(code) = opt.cuffs.as_ref().and_then(|c| c.cuff_type.as_ref()) {
            total += index.rate(code);
        }
    }

    to_f64(total)
}
