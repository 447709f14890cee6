//! Typed entities mirroring the PayPal Orders v2 wire format.
//!
//! All entities serialize to exactly the fields the PayPal API accepts:
//! absent optional values are omitted rather than sent as `null` (the
//! remote API treats absent and null differently for some fields).
//! Deserialization tolerates missing optional fields.
//!
//! Monetary values are stored as [`rust_decimal::Decimal`] and travel as
//! decimal strings on the wire, never as floats.

mod item;
mod money;
mod order;
mod payer;
mod payments;
mod purchase_unit;
mod sanitizer;
mod shipping;

pub use item::{Item, ItemCategory};
pub use money::{Amount, AmountBreakdown, Money};
pub use order::{ApplicationContext, Intent, Order, OrderStatus};
pub use payer::{Payer, PayerName};
pub use payments::{Authorization, Capture, Payments, Refund};
pub use purchase_unit::PurchaseUnit;
pub use sanitizer::{MismatchBehavior, PurchaseUnitSanitizer};
pub use shipping::{Address, Shipping, ShippingName, ShippingOption};
