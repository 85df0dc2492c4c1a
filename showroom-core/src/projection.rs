//! Garment table row projection
//!
//! Flattens the order/customer/garment aggregates fetched from the record
//! store into the denormalized rows the operations table displays. Rows are
//! rebuilt from source records on every load; nothing here is persisted or
//! mutated in place.

use chrono::{Local, NaiveDate};
use serde::Serialize;
use shared::models::{
    CustomerFields, FATOURA_STAGE_LABELS, GarmentFields, OrderDetail, OrderFields,
    PIECE_STAGE_LABELS, stage_label,
};
use shared::record::Record;

/// Order type tag derived from the garment's Brova flag
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum OrderType {
    /// Interim fitting garment
    Brova,
    /// Final piece
    Final,
}

impl OrderType {
    /// Display label for the table
    pub fn label(&self) -> &'static str {
        match self {
            OrderType::Brova => "Brova",
            OrderType::Final => "Final",
        }
    }
}

/// One flattened row of the showroom garment table
///
/// Combines garment, order and customer fields with derived display values.
/// The untransformed records ride along for consumers that need them.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GarmentRow {
    pub garment_id: String,
    pub order_id: String,
    pub customer_name: String,
    pub customer_id: String,
    pub customer_phone: String,
    /// Production stage display label
    pub piece_stage: String,
    /// Billing stage display label
    pub fatoura_stage: String,
    pub delivery_date: Option<NaiveDate>,
    /// Whole days past the promised delivery date, 0 when not yet due
    pub delay_in_days: i64,
    pub order_type: OrderType,

    // Original records for downstream consumers
    pub garment: Record<GarmentFields>,
    pub order: Record<OrderFields>,
    pub customer: Option<Record<CustomerFields>>,
}

/// Whole days of delay between the promised date and today
///
/// Both dates are date-only (time-of-day zeroed), so the difference is an
/// exact day count. On-time and not-yet-due garments clamp to 0; a missing
/// promised date counts as no delay.
pub fn delay_in_days(promised: Option<NaiveDate>, today: NaiveDate) -> i64 {
    match promised {
        Some(date) => (today - date).num_days().max(0),
        None => 0,
    }
}

/// Build the garment table rows for today's date
pub fn garment_rows(details: &[OrderDetail]) -> Vec<GarmentRow> {
    garment_rows_at(details, Local::now().date_naive())
}

/// Build the garment table rows against an explicit "today"
///
/// One row per garment; orders with no garments contribute none. Missing
/// customer data degrades to "Unknown"/"N/A", unmapped stage codes to
/// "Unknown".
pub fn garment_rows_at(details: &[OrderDetail], today: NaiveDate) -> Vec<GarmentRow> {
    details
        .iter()
        .flat_map(|detail| {
            detail
                .garments
                .iter()
                .map(|garment| project_garment(detail, garment, today))
        })
        .collect()
}

fn project_garment(
    detail: &OrderDetail,
    garment: &Record<GarmentFields>,
    today: NaiveDate,
) -> GarmentRow {
    let customer = detail.customer.as_ref();

    let customer_name = customer
        .and_then(|c| c.fields.name.clone())
        .unwrap_or_else(|| "Unknown".to_string());
    let customer_id = customer
        .and_then(|c| c.fields.customer_id.clone())
        .unwrap_or_else(|| "N/A".to_string());
    let customer_phone = customer
        .and_then(|c| c.fields.phone.clone())
        .unwrap_or_else(|| "N/A".to_string());

    let order_type = if garment.fields.brova.unwrap_or(false) {
        OrderType::Brova
    } else {
        OrderType::Final
    };

    GarmentRow {
        garment_id: garment.fields.garment_id.clone().unwrap_or_default(),
        order_id: detail.order.fields.order_id.clone().unwrap_or_default(),
        customer_name,
        customer_id,
        customer_phone,
        piece_stage: stage_label(PIECE_STAGE_LABELS, garment.fields.piece_stage).to_string(),
        fatoura_stage: stage_label(FATOURA_STAGE_LABELS, detail.order.fields.fatoura_stage)
            .to_string(),
        delivery_date: garment.fields.delivery_date,
        delay_in_days: delay_in_days(garment.fields.delivery_date, today),
        order_type,
        garment: garment.clone(),
        order: detail.order.clone(),
        customer: detail.customer.clone(),
    }
}
