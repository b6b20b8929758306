use mellmap_boundary::CURRENCY_GLYPH;

/// Prefixes the raw amount with the currency glyph.
///
/// The amount is not validated.
#[must_use]
pub fn with_currency(amount: &str) -> String {
    format!("{CURRENCY_GLYPH}{amount}")
}

/// The editable part of a price, i.e. everything except the glyph.
#[must_use]
pub fn editable_amount(price: &str) -> String {
    price.replacen(CURRENCY_GLYPH, "", 1)
}
