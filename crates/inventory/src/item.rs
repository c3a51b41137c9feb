use serde::Serialize;

use stockroom_core::{DomainError, DomainResult, Entity, ValueObject};

/// Rejection message for `add-item` input.
pub const ADD_ITEM_INVALID: &str = "Invalid data. Name and positive quantity required";
/// Rejection message for `remove-item` input.
pub const REMOVE_ITEM_INVALID: &str = "Please provide item name";
/// Rejection message for `update-quantity` input.
pub const UPDATE_QUANTITY_INVALID: &str = "Please provide valid item name and quantity";

/// Store-assigned surrogate key. Never reused after deletion.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Unique, immutable item name.
///
/// Names are compared byte-for-byte and never trimmed; whitespace-only
/// names are valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    pub fn parse(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValueObject for ItemName {}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-negative stock count.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Quantity(i64);

impl Quantity {
    /// Quantity for a newly created item (must be at least one).
    pub fn for_insert(value: i64) -> DomainResult<Self> {
        if value < 1 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }
        Ok(Self(value))
    }

    /// Quantity for an explicit update (zero is allowed).
    pub fn for_update(value: i64) -> DomainResult<Self> {
        if value < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl ValueObject for Quantity {}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A named stock line.
///
/// Serializes as `{"id", "name", "quantity"}`, the shape returned by `GET /inventory`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryItem {
    id: ItemId,
    name: ItemName,
    quantity: Quantity,
}

impl InventoryItem {
    pub fn new(id: ItemId, name: ItemName, quantity: Quantity) -> Self {
        Self { id, name, quantity }
    }

    /// Rebuild an item from a persisted row.
    ///
    /// Persisted state is trusted as-is; validation happens on the write path.
    pub fn restore(id: i64, name: String, quantity: i64) -> Self {
        Self {
            id: ItemId(id),
            name: ItemName(name),
            quantity: Quantity(quantity),
        }
    }

    pub fn name(&self) -> &ItemName {
        &self.name
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}

/// Command: AddItem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddItem {
    pub name: ItemName,
    pub quantity: Quantity,
}

impl AddItem {
    /// Quantity used when the caller omits it.
    pub const DEFAULT_QUANTITY: i64 = 1;

    pub fn validate(name: Option<String>, quantity: Option<i64>) -> DomainResult<Self> {
        let reject = |_| DomainError::validation(ADD_ITEM_INVALID);
        let name = ItemName::parse(name.unwrap_or_default()).map_err(reject)?;
        let quantity =
            Quantity::for_insert(quantity.unwrap_or(Self::DEFAULT_QUANTITY)).map_err(reject)?;
        Ok(Self { name, quantity })
    }
}

/// Command: RemoveItem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveItem {
    pub name: ItemName,
}

impl RemoveItem {
    pub fn validate(name: Option<String>) -> DomainResult<Self> {
        let name = ItemName::parse(name.unwrap_or_default())
            .map_err(|_| DomainError::validation(REMOVE_ITEM_INVALID))?;
        Ok(Self { name })
    }
}

/// Command: UpdateQuantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateQuantity {
    pub name: ItemName,
    pub quantity: Quantity,
}

impl UpdateQuantity {
    pub fn validate(name: Option<String>, quantity: Option<i64>) -> DomainResult<Self> {
        let reject = || DomainError::validation(UPDATE_QUANTITY_INVALID);
        let name = ItemName::parse(name.unwrap_or_default()).map_err(|_| reject())?;
        let quantity = quantity.ok_or_else(reject)?;
        let quantity = Quantity::for_update(quantity).map_err(|_| reject())?;
        Ok(Self { name, quantity })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryCommand {
    AddItem(AddItem),
    RemoveItem(RemoveItem),
    UpdateQuantity(UpdateQuantity),
}

impl InventoryCommand {
    pub fn command_type(&self) -> &'static str {
        match self {
            InventoryCommand::AddItem(_) => "inventory.item.add",
            InventoryCommand::RemoveItem(_) => "inventory.item.remove",
            InventoryCommand::UpdateQuantity(_) => "inventory.item.update_quantity",
        }
    }

    pub fn name(&self) -> &ItemName {
        match self {
            InventoryCommand::AddItem(c) => &c.name,
            InventoryCommand::RemoveItem(c) => &c.name,
            InventoryCommand::UpdateQuantity(c) => &c.name,
        }
    }
}

impl From<AddItem> for InventoryCommand {
    fn from(value: AddItem) -> Self {
        InventoryCommand::AddItem(value)
    }
}

impl From<RemoveItem> for InventoryCommand {
    fn from(value: RemoveItem) -> Self {
        InventoryCommand::RemoveItem(value)
    }
}

impl From<UpdateQuantity> for InventoryCommand {
    fn from(value: UpdateQuantity) -> Self {
        InventoryCommand::UpdateQuantity(value)
    }
}
