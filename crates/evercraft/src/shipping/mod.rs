//! Cart shipping quotes.
//!
//! A quote resolves the destination [`ShippingZone`], applies the free-shipping threshold and
//! the weight surcharge from [`ShippingPolicy`], then prices every method the zone offers.

mod calculator;
mod cart;
mod delivery;
mod rates;

pub use calculator::{
    calculate_shipping, ShippingCalculationInput, ShippingCalculationResult, ShippingRate,
};
pub use cart::{
    cart_subtotal, item_count, load_cart_csv, parse_cart_csv, total_weight, CartImportError,
    CartLineItem, DEFAULT_ITEM_WEIGHT_LBS,
};
pub use delivery::DeliveryWindow;
pub use rates::{
    ShippingMethod, ShippingPolicy, ShippingZone, UnknownShippingMethod, FREE_SHIPPING_THRESHOLD,
};
