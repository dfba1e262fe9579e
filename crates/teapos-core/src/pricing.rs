//! Size upcharges and tax math.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Sales tax applied to the cart subtotal (8.25%).
pub const TAX_RATE: f64 = 0.0825;

/// Upcharge for a drink size.
///
/// Exact, case-sensitive lookup: unknown or empty sizes cost nothing
/// extra.
pub fn size_delta(size: &str) -> Money {
    match size {
        "Small" => Money::zero(),
        "Medium" => Money::new(50),
        "Large" => Money::new(200),
        _ => Money::zero(),
    }
}

/// Parenthetical note appended after a size name, e.g. " (+$0.50)".
///
/// Zero deltas produce an empty string, so "Small" gets no note.
pub fn format_delta_suffix(delta: Money) -> String {
    if delta.is_positive() {
        format!(" (+${})", delta.display_amount())
    } else {
        String::new()
    }
}

/// Tax on a subtotal, rounded to the nearest cent.
pub fn tax_on(subtotal: Money) -> Money {
    subtotal.multiply_decimal(TAX_RATE)
}

/// Controls whether size upcharges are billed into line prices.
///
/// The register historically only *annotated* the size delta inside the
/// customization string while charging `base_price * quantity`; the
/// back office bills the delta for real.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// When true, a line's unit price includes its size upcharge.
    pub charge_size_delta: bool,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        // Legacy register behavior: the delta is informational only.
        Self {
            charge_size_delta: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_delta_table() {
        assert_eq!(size_delta("Small"), Money::zero());
        assert_eq!(size_delta("Medium"), Money::new(50));
        assert_eq!(size_delta("Large"), Money::new(200));
    }

    #[test]
    fn test_size_delta_unknown_is_free() {
        assert_eq!(size_delta(""), Money::zero());
        assert_eq!(size_delta("Venti"), Money::zero());
        // Lookup is case-sensitive
        assert_eq!(size_delta("medium"), Money::zero());
    }

    #[test]
    fn test_delta_suffix() {
        assert_eq!(format_delta_suffix(size_delta("Medium")), " (+$0.50)");
        assert_eq!(format_delta_suffix(size_delta("Large")), " (+$2.00)");
        assert_eq!(format_delta_suffix(size_delta("Small")), "");
    }

    #[test]
    fn test_tax_rounds_to_cent() {
        // 13.50 * 0.0825 = 1.11375 -> $1.11
        assert_eq!(tax_on(Money::new(1350)), Money::new(111));
        // 5.50 * 0.0825 = 0.45375 -> $0.45
        assert_eq!(tax_on(Money::new(550)), Money::new(45));
    }

    #[test]
    fn test_policy_default_does_not_charge() {
        assert!(!PricingPolicy::default().charge_size_delta);
    }
}
