//! Price display strings for sliders and listing cards.
//!
//! Slider values are whole lakhs; anything at or above one crore (100 lakhs)
//! is shown in crores.

#[cfg(test)]
#[path = "price_test.rs"]
mod price_test;

/// Lakhs per crore.
pub const CRORE_THRESHOLD: i64 = 100;

/// Label for a price-range slider value.
pub fn price_label(value: i64) -> String {
    if value >= CRORE_THRESHOLD {
        format!("{} Cr", crore_amount(value))
    } else {
        format!("{value} Lakhs")
    }
}

/// `lakhs / 100` with no decimals when exact, otherwise up to two.
fn crore_amount(lakhs: i64) -> String {
    let whole = lakhs / CRORE_THRESHOLD;
    let frac = lakhs % CRORE_THRESHOLD;
    if frac == 0 {
        whole.to_string()
    } else if frac % 10 == 0 {
        format!("{whole}.{}", frac / 10)
    } else {
        format!("{whole}.{frac:02}")
    }
}

/// Parse a slider value handed over as text (`input.value`).
pub fn parse_slider_value(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(whole) = trimmed.parse::<i64>() {
        return Some(whole);
    }
    match trimmed.parse::<f64>() {
        Ok(value) => slider_value_from_f64(value),
        Err(_) => None,
    }
}

/// Round a numeric slider value to whole lakhs; rejects NaN and infinities.
#[allow(clippy::cast_possible_truncation)]
pub fn slider_value_from_f64(value: f64) -> Option<i64> {
    value.is_finite().then(|| value.round() as i64)
}

/// Unit a listing price is quoted in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PriceUnit {
    #[default]
    Lakh,
    Crore,
    /// Monthly rent in rupees.
    Month,
}

impl PriceUnit {
    /// Unknown units are treated as lakhs, the listing default.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "crore" => Self::Crore,
            "month" => Self::Month,
            _ => Self::Lakh,
        }
    }
}

/// Display string for a listing's stored price.
pub fn listing_price_label(amount: f64, unit: PriceUnit) -> String {
    match unit {
        PriceUnit::Month => {
            let rupees = slider_value_from_f64(amount).unwrap_or_default();
            format!("\u{20b9}{}/month", group_thousands(rupees))
        }
        PriceUnit::Crore => format!("\u{20b9}{} Cr", trim_decimal(amount)),
        PriceUnit::Lakh => format!("\u{20b9}{} Lakhs", trim_decimal(amount)),
    }
}

fn trim_decimal(amount: f64) -> String {
    let fixed = format!("{amount:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_owned()
}

/// `1234567` -> `"1,234,567"`.
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
