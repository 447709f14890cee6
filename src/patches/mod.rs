//! JSON Patch generation for order reconciliation.
//!
//! Between creating an order and capturing it, local checkout state can
//! drift from the remote order (the buyer changes the shipping address,
//! cart totals are recalculated). [`PatchCollection::from_orders`] computes
//! the minimal ordered sequence of add/remove/replace operations that
//! brings the remote order in line with the desired local state, restricted
//! to the fields PayPal allows to be patched.

use serde::Serialize;
use thiserror::Error;

use crate::entities::{Order, PurchaseUnit};

/// Fields of a purchase unit the remote API accepts patches for. Anything
/// outside this list is immutable remotely and is never diffed, even when
/// it differs.
const PATCHABLE_FIELDS: [&str; 4] = ["amount", "items", "shipping", "custom_id"];

/// A single JSON Patch operation.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    /// Create a value at a path that does not yet exist.
    Add,
    /// Replace the value at an existing path.
    Replace,
    /// Remove the value at an existing path.
    Remove,
}

/// One operation of a JSON Patch document.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Patch {
    /// The operation kind.
    pub op: PatchOp,

    /// JSON pointer to the affected value.
    pub path: String,

    /// The new value for `add`/`replace`; absent for `remove`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

/// Error produced when replaying a patch against a document it does not
/// fit.
#[derive(Debug, Error)]
pub enum PatchError {
    /// The patch path does not resolve within the target document.
    #[error("patch path '{path}' does not resolve in the target document")]
    UnresolvedPath {
        /// The offending JSON pointer.
        path: String,
    },
}

/// An ordered sequence of [`Patch`] operations.
///
/// Order matters: later patches may reference paths created by earlier
/// ones, so `add` operations for a purchase unit are emitted before its
/// `replace` and `remove` operations.
///
/// Serializes transparently as a JSON array, which is the request body the
/// PATCH `/v2/checkout/orders/{id}` endpoint expects.
///
/// # Example
///
/// ```rust
/// use paypal_checkout::entities::{Amount, Order, OrderStatus, PurchaseUnit};
/// use paypal_checkout::patches::PatchCollection;
///
/// # fn order(custom_id: Option<&str>) -> Order {
/// #     let mut unit = PurchaseUnit::new(Amount::new("USD", "10.00".parse().unwrap()));
/// #     unit.custom_id = custom_id.map(String::from);
/// #     Order {
/// #         id: "EC-123".to_string(),
/// #         status: OrderStatus::Created,
/// #         intent: None,
/// #         purchase_units: vec![unit],
/// #         payer: None,
/// #         application_context: None,
/// #         create_time: None,
/// #         update_time: None,
/// #     }
/// # }
/// let current = order(None);
/// let desired = order(Some("wc-42"));
///
/// let patches = PatchCollection::from_orders(&current, &desired);
/// assert_eq!(patches.len(), 1);
/// assert_eq!(patches.patches()[0].path, "/purchase_units/0/custom_id");
///
/// // Diffing an order against itself is always empty.
/// assert!(PatchCollection::from_orders(&current, &current).is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct PatchCollection {
    patches: Vec<Patch>,
}

impl PatchCollection {
    /// Diffs two snapshots of the *same* conceptual order.
    ///
    /// `current` is what the caller believes remote truth to be; `desired`
    /// is what local logic wants remote truth to become. Diffing two
    /// unrelated orders is not meaningful.
    ///
    /// Only the allow-listed mutable sub-trees of each purchase unit are
    /// compared; the remote API rejects patches to immutable fields.
    #[must_use]
    pub fn from_orders(current: &Order, desired: &Order) -> Self {
        let current_units = wire_units(&current.purchase_units);
        let desired_units = wire_units(&desired.purchase_units);

        let mut patches = Vec::new();
        let unit_count = current_units.len().max(desired_units.len());
        for index in 0..unit_count {
            let current_unit = current_units.get(index);
            let desired_unit = desired_units.get(index);

            let mut adds = Vec::new();
            let mut replacements = Vec::new();
            let mut removals = Vec::new();

            for field in PATCHABLE_FIELDS {
                let path = format!("/purchase_units/{index}/{field}");
                let current_value = current_unit.and_then(|unit| unit.get(field));
                let desired_value = desired_unit.and_then(|unit| unit.get(field));

                match (current_value, desired_value) {
                    (None, Some(value)) => adds.push(Patch {
                        op: PatchOp::Add,
                        path,
                        value: Some(value.clone()),
                    }),
                    (Some(current), Some(desired)) if current != desired => {
                        replacements.push(Patch {
                            op: PatchOp::Replace,
                            path,
                            value: Some(desired.clone()),
                        });
                    }
                    (Some(_), None) => removals.push(Patch {
                        op: PatchOp::Remove,
                        path,
                        value: None,
                    }),
                    _ => {}
                }
            }

            patches.extend(adds);
            patches.extend(replacements);
            patches.extend(removals);
        }

        Self { patches }
    }

    /// The operations in application order.
    #[must_use]
    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    /// Returns true when there is nothing to patch. Callers must skip the
    /// network round-trip entirely in that case.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    /// Number of operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patches.len()
    }

    /// Replays the operations against a wire JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::UnresolvedPath`] when an operation's path does
    /// not fit the document.
    pub fn apply_to(&self, document: &mut serde_json::Value) -> Result<(), PatchError> {
        for patch in &self.patches {
            apply_one(patch, document)?;
        }
        Ok(())
    }
}

fn wire_units(units: &[PurchaseUnit]) -> Vec<serde_json::Value> {
    units
        .iter()
        .map(|unit| serde_json::to_value(unit).unwrap_or_default())
        .collect()
}

fn apply_one(patch: &Patch, document: &mut serde_json::Value) -> Result<(), PatchError> {
    let unresolved = || PatchError::UnresolvedPath {
        path: patch.path.clone(),
    };

    let (parent_pointer, token) = patch
        .path
        .rsplit_once('/')
        .ok_or_else(unresolved)?;
    let parent = document
        .pointer_mut(parent_pointer)
        .ok_or_else(unresolved)?;

    match parent {
        serde_json::Value::Object(map) => match patch.op {
            PatchOp::Add | PatchOp::Replace => {
                let value = patch.value.clone().ok_or_else(unresolved)?;
                map.insert(token.to_string(), value);
            }
            PatchOp::Remove => {
                map.remove(token).ok_or_else(unresolved)?;
            }
        },
        serde_json::Value::Array(entries) => {
            let index: usize = token.parse().map_err(|_| unresolved())?;
            match patch.op {
                PatchOp::Add => {
                    if index > entries.len() {
                        return Err(unresolved());
                    }
                    let value = patch.value.clone().ok_or_else(unresolved)?;
                    entries.insert(index, value);
                }
                PatchOp::Replace => {
                    let slot = entries.get_mut(index).ok_or_else(unresolved)?;
                    *slot = patch.value.clone().ok_or_else(unresolved)?;
                }
                PatchOp::Remove => {
                    if index >= entries.len() {
                        return Err(unresolved());
                    }
                    entries.remove(index);
                }
            }
        }
        _ => return Err(unresolved()),
    }

    Ok(())
}
