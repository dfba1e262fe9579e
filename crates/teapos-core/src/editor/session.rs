//! Customization editor state machine.

use crate::catalog::{CustomizationOptions, Product, ProductKind};
use crate::customization::{
    decode_drink, decode_snack, encode_drink, encode_snack, DrinkSelection, Temperature,
    DEFAULT_INTENSITY,
};
use crate::error::EditorError;
use serde::{Deserialize, Serialize};

/// Where the async options fetch stands for the open session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CatalogStatus {
    /// Fetch in flight (or not started yet).
    #[default]
    Loading,
    /// Options arrived.
    Ready(CustomizationOptions),
    /// Fetch failed. Drinks stay unconfirmable until a retry lands.
    Unavailable,
}

impl CatalogStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, CatalogStatus::Ready(_))
    }

    /// The options, when loaded.
    pub fn options(&self) -> Option<&CustomizationOptions> {
        match self {
            CatalogStatus::Ready(options) => Some(options),
            _ => None,
        }
    }
}

/// What confirm hands back to the register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedCustomization {
    /// Canonical customization string for the cart line.
    pub customizations: String,
    /// Chosen size, when the product has one.
    pub size: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
enum EditorState {
    #[default]
    Closed,
    Drink {
        product: Product,
        selection: DrinkSelection,
    },
    Snack {
        product: Product,
        intensity: u8,
    },
}

/// One modal customization editor: at most one product open at a time.
///
/// The session does no IO itself. When a drink opens, the host starts
/// the options fetch and feeds the result back through
/// [`apply_catalog`](EditorSession::apply_catalog) along with the token
/// `open` returned; a response belonging to an earlier open is thrown
/// away by the token check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EditorSession {
    state: EditorState,
    catalog: CatalogStatus,
    token: u64,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a product for editing, replacing any prior session.
    ///
    /// Controls reset to defaults first. When re-editing a cart line,
    /// `existing` is decoded over the defaults; `initial_size` (a size
    /// carried outside the string) wins over a size decoded from it.
    /// Returns the token the host must echo into `apply_catalog`.
    pub fn open(
        &mut self,
        product: &Product,
        existing: Option<&str>,
        initial_size: Option<&str>,
    ) -> u64 {
        self.token = self.token.wrapping_add(1);
        self.catalog = CatalogStatus::Loading;

        self.state = match product.kind() {
            ProductKind::Snack => EditorState::Snack {
                product: product.clone(),
                intensity: existing.map(decode_snack).unwrap_or(DEFAULT_INTENSITY),
            },
            ProductKind::Drink => {
                let mut selection = existing.map(decode_drink).unwrap_or_default();
                if let Some(size) = initial_size {
                    if !size.is_empty() {
                        selection.size = size.to_string();
                    }
                }
                EditorState::Drink {
                    product: product.clone(),
                    selection,
                }
            }
        };

        self.token
    }

    /// Feed back the result of the options fetch started at `open`.
    ///
    /// A stale token is discarded silently. A fresh `Ready` catalog
    /// only fills what the operator has not touched: the size default
    /// when no size is set yet.
    pub fn apply_catalog(&mut self, token: u64, status: CatalogStatus) {
        if token != self.token {
            return;
        }

        if let (CatalogStatus::Ready(options), EditorState::Drink { selection, .. }) =
            (&status, &mut self.state)
        {
            if selection.size.is_empty() {
                if let Some(size) = options.default_size() {
                    selection.size = size.to_string();
                }
            }
        }

        self.catalog = status;
    }

    /// Set the served temperature. Hot forces the ice level to
    /// "No Ice"; switching back to Iced does not restore it.
    pub fn set_temperature(&mut self, temperature: Temperature) -> Result<(), EditorError> {
        let selection = self.drink_selection_mut()?;
        selection.temperature = temperature;
        if temperature == Temperature::Hot {
            selection.ice_level = "No Ice".to_string();
        }
        Ok(())
    }

    pub fn set_ice(&mut self, level: impl Into<String>) -> Result<(), EditorError> {
        self.drink_selection_mut()?.ice_level = level.into();
        Ok(())
    }

    pub fn set_sweetness(&mut self, sweetness: impl Into<String>) -> Result<(), EditorError> {
        self.drink_selection_mut()?.sweetness = sweetness.into();
        Ok(())
    }

    pub fn set_base(&mut self, base: impl Into<String>) -> Result<(), EditorError> {
        self.drink_selection_mut()?.base = base.into();
        Ok(())
    }

    pub fn toggle_topping(&mut self, label: &str) -> Result<(), EditorError> {
        self.drink_selection_mut()?.toggle_topping(label);
        Ok(())
    }

    pub fn set_flavor_shot(&mut self, label: impl Into<String>) -> Result<(), EditorError> {
        self.drink_selection_mut()?.flavor_shot = label.into();
        Ok(())
    }

    pub fn set_size(&mut self, size: impl Into<String>) -> Result<(), EditorError> {
        self.drink_selection_mut()?.size = size.into();
        Ok(())
    }

    /// Set the snack flavor intensity, clamped to 0..=10.
    pub fn set_intensity(&mut self, intensity: u8) -> Result<(), EditorError> {
        match &mut self.state {
            EditorState::Snack { intensity: slot, .. } => {
                *slot = intensity.min(10);
                Ok(())
            }
            EditorState::Drink { .. } => Err(EditorError::WrongKind("drink")),
            EditorState::Closed => Err(EditorError::NotOpen),
        }
    }

    /// Encode the selection and close the session.
    ///
    /// Drinks cannot confirm until the options catalog is `Ready`;
    /// snacks never need it.
    pub fn confirm(&mut self) -> Result<ConfirmedCustomization, EditorError> {
        let confirmed = match &self.state {
            EditorState::Closed => return Err(EditorError::NotOpen),
            EditorState::Snack { intensity, .. } => ConfirmedCustomization {
                customizations: encode_snack(*intensity),
                size: None,
            },
            EditorState::Drink { selection, .. } => {
                if !self.catalog.is_ready() {
                    return Err(EditorError::CatalogNotReady);
                }
                ConfirmedCustomization {
                    customizations: encode_drink(selection),
                    size: if selection.size.is_empty() {
                        None
                    } else {
                        Some(selection.size.clone())
                    },
                }
            }
        };

        self.state = EditorState::Closed;
        Ok(confirmed)
    }

    /// Discard the open session, keeping nothing.
    pub fn cancel(&mut self) {
        self.state = EditorState::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, EditorState::Closed)
    }

    /// Kind of the open product, if any.
    pub fn kind(&self) -> Option<ProductKind> {
        match &self.state {
            EditorState::Closed => None,
            EditorState::Drink { .. } => Some(ProductKind::Drink),
            EditorState::Snack { .. } => Some(ProductKind::Snack),
        }
    }

    /// The open product, if any.
    pub fn product(&self) -> Option<&Product> {
        match &self.state {
            EditorState::Closed => None,
            EditorState::Drink { product, .. } | EditorState::Snack { product, .. } => {
                Some(product)
            }
        }
    }

    /// The working drink selection, when a drink is open.
    pub fn selection(&self) -> Option<&DrinkSelection> {
        match &self.state {
            EditorState::Drink { selection, .. } => Some(selection),
            _ => None,
        }
    }

    /// The working intensity, when a snack is open.
    pub fn intensity(&self) -> Option<u8> {
        match &self.state {
            EditorState::Snack { intensity, .. } => Some(*intensity),
            _ => None,
        }
    }

    pub fn catalog(&self) -> &CatalogStatus {
        &self.catalog
    }

    fn drink_selection_mut(&mut self) -> Result<&mut DrinkSelection, EditorError> {
        match &mut self.state {
            EditorState::Drink { selection, .. } => Ok(selection),
            EditorState::Snack { .. } => Err(EditorError::WrongKind("snack")),
            EditorState::Closed => Err(EditorError::NotOpen),
        }
    }
}
