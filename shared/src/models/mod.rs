//! Domain models for the showroom suite

pub mod fabric;
pub mod order;
pub mod stage;
pub mod style;
pub mod style_option;

pub use fabric::{FabricMatrix, FabricSelection};
pub use order::{CustomerFields, GarmentFields, OrderDetail, OrderFields};
pub use stage::{FATOURA_STAGE_LABELS, PIECE_STAGE_LABELS, UNKNOWN_STAGE_LABEL, stage_label};
pub use style::{STY_DESIGN, STY_KUWAITI, STY_LINE, StitchRate, StyleFields};
pub use style_option::{
    AccessoriesSelection, BaseStyle, CollarSelection, CuffsSelection, FrontPocketSelection,
    JabzoorSelection, LineFlags, StyleOption,
};
