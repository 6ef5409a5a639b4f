//! Conversion of disclosed USD amounts into crores of rupees.

// ── Conversion constants ──────────────────────────────────────────────────────

/// Rupees per US dollar applied to every disclosed amount.
pub const DEFAULT_USD_TO_INR: f64 = 82.5;

/// Rupees in one crore; converted amounts are expressed in this unit.
pub const RUPEES_PER_CRORE: f64 = 10_000_000.0;

/// Decimal places kept after rescaling.
pub const AMOUNT_DECIMALS: u32 = 2;

// ── CurrencyConverter ─────────────────────────────────────────────────────────

/// Converts source-currency amounts into the dashboard's display unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyConverter {
    /// Target-currency units per source-currency unit.
    pub rate: f64,
    /// Divisor applied after conversion (one crore by default).
    pub scale: f64,
    /// Decimal places the rescaled value is rounded to.
    pub decimals: u32,
}

impl Default for CurrencyConverter {
    fn default() -> Self {
        Self {
            rate: DEFAULT_USD_TO_INR,
            scale: RUPEES_PER_CRORE,
            decimals: AMOUNT_DECIMALS,
        }
    }
}

impl CurrencyConverter {
    /// Converter with a custom exchange rate and the default scale.
    pub fn with_rate(rate: f64) -> Self {
        Self {
            rate,
            ..Self::default()
        }
    }

    /// `round(amount * rate / scale, decimals)`.
    ///
    /// ```
    /// use funding_core::currency::CurrencyConverter;
    ///
    /// let converter = CurrencyConverter::default();
    /// assert_eq!(converter.convert(1_000_000.0), 8.25);
    /// assert_eq!(converter.convert(0.0), 0.0);
    /// ```
    pub fn convert(&self, amount: f64) -> f64 {
        let converted = amount * self.rate;
        crate::formatting::round_to(converted / self.scale, self.decimals)
    }
}
