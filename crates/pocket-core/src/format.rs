/// Placeholder shown instead of amounts while the balance is hidden.
pub const MASKED_AMOUNT: &str = "****";

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64) -> String;
}

/// Prefixes a fixed symbol and rounds to a fixed number of decimals,
/// e.g. `₦4800.00` or `₦-150.00`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolFormatter {
    symbol: String,
    precision: usize,
}

impl SymbolFormatter {
    pub const DEFAULT_SYMBOL: &'static str = "₦";
    pub const DEFAULT_PRECISION: usize = 2;

    pub fn new(symbol: impl Into<String>, precision: usize) -> Self {
        Self {
            symbol: symbol.into(),
            precision,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn precision(&self) -> usize {
        self.precision
    }
}

impl Default for SymbolFormatter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SYMBOL, Self::DEFAULT_PRECISION)
    }
}

impl CurrencyFormatter for SymbolFormatter {
    fn format_amount(&self, amount: f64) -> String {
        // Avoid printing "-0.00" for values that round to zero.
        let rounded = format!("{:.prec$}", amount, prec = self.precision);
        let amount = if rounded.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
            rounded.trim_start_matches('-').to_string()
        } else {
            rounded
        };
        format!("{}{}", self.symbol, amount)
    }
}
