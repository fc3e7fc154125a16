use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::calculator::ShippingCalculationInput;
use super::rates::ShippingMethod;
use crate::rounding::round_currency;

/// Weight assumed for a line item whose product has no weight on record.
pub const DEFAULT_ITEM_WEIGHT_LBS: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    #[serde(default, rename(deserialize = "Name"), alias = "name")]
    pub name: String,
    #[serde(rename(deserialize = "Unit Price"), alias = "unit_price")]
    pub unit_price: f64,
    #[serde(rename(deserialize = "Quantity"), alias = "quantity")]
    pub quantity: u32,
    /// Pounds per unit.
    #[serde(default, rename(deserialize = "Weight"), alias = "weight")]
    pub weight: Option<f64>,
}

#[derive(Debug, thiserror::Error)]
pub enum CartImportError {
    #[error("failed to read cart export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid cart CSV data: {0}")]
    Csv(#[from] csv::Error),
}

pub fn total_weight(items: &[CartLineItem]) -> f64 {
    items
        .iter()
        .map(|item| item.weight.unwrap_or(DEFAULT_ITEM_WEIGHT_LBS) * f64::from(item.quantity))
        .sum()
}

pub fn cart_subtotal(items: &[CartLineItem]) -> f64 {
    round_currency(
        items
            .iter()
            .map(|item| item.unit_price * f64::from(item.quantity))
            .sum(),
    )
}

/// Saturates at `u32::MAX` rather than wrapping on oversized carts.
pub fn item_count(items: &[CartLineItem]) -> u32 {
    items
        .iter()
        .fold(0u32, |count, item| count.saturating_add(item.quantity))
}

impl ShippingCalculationInput {
    pub fn from_cart(
        items: &[CartLineItem],
        destination_country: Option<String>,
        method: Option<ShippingMethod>,
    ) -> Self {
        Self {
            subtotal: cart_subtotal(items),
            item_count: item_count(items),
            total_weight: Some(total_weight(items)),
            destination_country,
            method,
        }
    }
}

/// Reads `Name,Unit Price,Quantity,Weight` rows; an empty weight falls back to the default.
pub fn parse_cart_csv<R: Read>(reader: R) -> Result<Vec<CartLineItem>, CartImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut items = Vec::new();
    for row in csv_reader.deserialize::<CartLineItem>() {
        items.push(row?);
    }
    Ok(items)
}

pub fn load_cart_csv(path: impl AsRef<Path>) -> Result<Vec<CartLineItem>, CartImportError> {
    let file = File::open(path)?;
    parse_cart_csv(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn item(unit_price: f64, quantity: u32, weight: Option<f64>) -> CartLineItem {
        CartLineItem {
            name: "Beeswax wrap".to_string(),
            unit_price,
            quantity,
            weight,
        }
    }

    #[test]
    fn unweighted_items_count_one_pound_each() {
        let items = vec![item(4.0, 3, None), item(12.0, 2, Some(1.5))];
        assert_eq!(total_weight(&items), 6.0);
        assert_eq!(item_count(&items), 5);
        assert_eq!(cart_subtotal(&items), 36.0);
    }

    #[test]
    fn empty_cart_weighs_nothing() {
        assert_eq!(total_weight(&[]), 0.0);
        assert_eq!(item_count(&[]), 0);
    }

    #[test]
    fn item_count_saturates_on_oversized_quantities() {
        let items = vec![item(1.0, u32::MAX, None), item(1.0, 1, None)];

        let input = ShippingCalculationInput::from_cart(&items, None, None);

        assert_eq!(input.item_count, u32::MAX);
    }

    #[test]
    fn from_cart_prices_the_aggregated_weight() {
        let items = vec![item(10.0, 2, Some(4.0))];
        let input = ShippingCalculationInput::from_cart(&items, Some("US".to_string()), None);

        let result = crate::shipping::calculate_shipping(&input);

        assert_eq!(input.total_weight, Some(8.0));
        assert_eq!(result.shipping_cost, 7.49);
    }

    #[test]
    fn parses_csv_rows_with_blank_weights() {
        let csv = "Name,Unit Price,Quantity,Weight\nSoap bar,6.50,2,\nLinen tote,18.00,1,0.75\n";

        let items = parse_cart_csv(Cursor::new(csv)).expect("csv parses");

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Soap bar");
        assert_eq!(items[0].weight, None);
        assert_eq!(items[1].weight, Some(0.75));
        assert_eq!(total_weight(&items), 2.75);
    }

    #[test]
    fn rejects_malformed_quantities() {
        let csv = "Name,Unit Price,Quantity,Weight\nSoap bar,6.50,two,\n";
        assert!(matches!(
            parse_cart_csv(Cursor::new(csv)),
            Err(CartImportError::Csv(_))
        ));
    }
}
