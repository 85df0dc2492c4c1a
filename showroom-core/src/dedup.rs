//! Style deduplication
//!
//! Identical garments in one order share a style ID so they can be produced
//! and priced as one batch. Identity is structural: two style options are the
//! same configuration iff all semantic fields match, ignoring
//! `style_option_id`, `garment_id` and any amount fields.
//!
//! Equality is decided through a content-addressed fingerprint: a SHA-256
//! over the semantic fields in a fixed, documented order with explicit
//! domain separators, so the fingerprint never depends on incidental
//! serializer key ordering.

use shared::models::StyleOption;
use std::collections::HashMap;

/// Canonical structural fingerprint of a style option's semantic content
///
/// Field order (fixed): style, lines, collar (type, button), jabzoor
/// (first, second), front pocket (type, side type), accessories, cuffs.
/// Returns hex of the first 16 hash bytes.
pub fn style_fingerprint(opt: &StyleOption) -> String {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();

    hasher.update(b"style:");
    hasher.update([opt.style as u8]);

    hasher.update(b"lines:");
    match &opt.lines {
        Some(lines) => hasher.update([1, lines.line1 as u8, lines.line2 as u8]),
        None => hasher.update([0]),
    }

    hasher.update(b"collar:");
    match &opt.collar {
        Some(collar) => {
            hasher.update([1]);
            update_opt_str(&mut hasher, &collar.collar_type);
            update_opt_str(&mut hasher, &collar.button);
        }
        None => hasher.update([0]),
    }

    hasher.update(b"jabzoor:");
    match &opt.jabzoor {
        Some(jabzoor) => {
            hasher.update([1]);
            update_opt_str(&mut hasher, &jabzoor.first);
            update_opt_str(&mut hasher, &jabzoor.second);
        }
        None => hasher.update([0]),
    }

    hasher.update(b"front_pocket:");
    match &opt.front_pocket {
        Some(pocket) => {
            hasher.update([1]);
            update_opt_str(&mut hasher, &pocket.pocket_type);
            update_opt_str(&mut hasher, &pocket.side_type);
        }
        None => hasher.update([0]),
    }

    hasher.update(b"accessories:");
    match &opt.accessories {
        Some(acc) => hasher.update([
            1,
            acc.mobile_pocket as u8,
            acc.pen_pocket as u8,
            acc.glasses_loop as u8,
        ]),
        None => hasher.update([0]),
    }

    hasher.update(b"cuffs:");
    match &opt.cuffs {
        Some(cuffs) => {
            hasher.update([1]);
            update_opt_str(&mut hasher, &cuffs.cuff_type);
        }
        None => hasher.update([0]),
    }

    let result = hasher.finalize();
    hex::encode(&result[..16]) // Use first 16 bytes for shorter ID
}

/// Hash an optional code with a presence marker and length prefix, so
/// adjacent fields can never collide by concatenation
fn update_opt_str(hasher: &mut sha2::Sha256, value: &Option<String>) {
    use sha2::Digest;
    match value {
        Some(s) => {
            hasher.update([1]);
            hasher.update((s.len() as u64).to_le_bytes());
            hasher.update(s.as_bytes());
        }
        None => hasher.update([0]),
    }
}

/// Whether two style options are structurally identical on their semantic
/// fields (linkage and amount fields excluded)
pub fn are_styles_identical(a: &StyleOption, b: &StyleOption) -> bool {
    style_fingerprint(a) == style_fingerprint(b)
}

/// Assign shared style IDs across a sequence of style options
///
/// The first occurrence of each distinct configuration mints a sequential ID
/// (`"S-1"`, `"S-2"`, ...); repeats reuse the existing ID. The output keeps
/// the input's length and order; only `style_option_id` changes.
pub fn assign_shared_style_ids(options: &[StyleOption]) -> Vec<StyleOption> {
    let mut ids_by_fingerprint: HashMap<String, String> = HashMap::new();
    let mut next_id = 1u32;

    options
        .iter()
        .map(|opt| {
            let fingerprint = style_fingerprint(opt);
            let id = ids_by_fingerprint
                .entry(fingerprint)
                .or_insert_with(|| {
                    let id = format!("S-{next_id}");
                    next_id += 1;
                    id
                })
                .clone();

            let mut assigned = opt.clone();
            assigned.style_option_id = Some(id);
            assigned
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{BaseStyle, CollarSelection, FrontPocketSelection, LineFlags};

    fn opt_with_collar(collar_type: &str) -> StyleOption {
        StyleOption {
            collar: Some(CollarSelection {
                collar_type: Some(collar_type.to_string()),
                button: None,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_identity_fields_do_not_affect_equality() {
        let a = StyleOption {
            style_option_id: Some("S-9".to_string()),
            garment_id: Some("g-1".to_string()),
            ..opt_with_collar("COL_ROUND")
        };
        let b = StyleOption {
            style_option_id: None,
            garment_id: Some("g-2".to_string()),
            ..opt_with_collar("COL_ROUND")
        };

        assert!(are_styles_identical(&a, &b));
    }

    #[test]
    fn test_semantic_difference_changes_fingerprint() {
        let a = opt_with_collar("COL_ROUND");
        let b = opt_with_collar("COL_STAND");
        assert!(!are_styles_identical(&a, &b));

        let kuwaiti = StyleOption::default();
        let design = StyleOption {
            style: BaseStyle::Design,
            ..Default::default()
        };
        assert!(!are_styles_identical(&kuwaiti, &design));
    }

    #[test]
    fn test_absent_substructure_differs_from_empty_substructure() {
        let absent = StyleOption::default();
        let empty = StyleOption {
            lines: Some(LineFlags::default()),
            ..Default::default()
        };

        // Stitching bills the line structure by presence, so presence is
        // semantic content
        assert!(!are_styles_identical(&absent, &empty));
    }

    #[test]
    fn test_adjacent_codes_do_not_concatenate() {
        let a = StyleOption {
            front_pocket: Some(FrontPocketSelection {
                pocket_type: Some("AB".to_string()),
                side_type: Some("C".to_string()),
            }),
            ..Default::default()
        };
        let b = StyleOption {
            front_pocket: Some(FrontPocketSelection {
                pocket_type: Some("A".to_string()),
                side_type: Some("BC".to_string()),
            }),
            ..Default::default()
        };

        assert!(!are_styles_identical(&a, &b));
    }

    #[test]
    fn test_assign_shared_ids() {
        let options = vec![
            opt_with_collar("COL_ROUND"),
            opt_with_collar("COL_STAND"),
            opt_with_collar("COL_ROUND"),
        ];

        let assigned = assign_shared_style_ids(&options);

        assert_eq!(assigned.len(), 3);
        assert_eq!(assigned[0].style_option_id.as_deref(), Some("S-1"));
        assert_eq!(assigned[1].style_option_id.as_deref(), Some("S-2"));
        assert_eq!(assigned[2].style_option_id.as_deref(), Some("S-1"));
        // Semantic fields untouched
        assert_eq!(assigned[1].collar, options[1].collar);
    }

    #[test]
    fn test_assign_is_idempotent() {
        let options = vec![
            opt_with_collar("COL_ROUND"),
            opt_with_collar("COL_ROUND"),
            opt_with_collar("COL_STAND"),
        ];

        let once = assign_shared_style_ids(&options);
        let twice = assign_shared_style_ids(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        assert!(assign_shared_style_ids(&[]).is_empty());
    }
}
