use std::sync::Arc;

/// Host-supplied money formatter (currency, locale and grouping live there).
pub type ValueFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// Placeholder rendered for non-finite values.
pub const MISSING_VALUE_TEXT: &str = "—";

/// Two-decimal fallback used until the host installs its own formatter.
#[must_use]
pub fn format_value_plain(value: f64) -> String {
    if !value.is_finite() {
        return MISSING_VALUE_TEXT.to_owned();
    }
    format!("{value:.2}")
}

#[must_use]
pub fn default_value_formatter() -> ValueFormatterFn {
    Arc::new(format_value_plain)
}
