//! Live label next to the price-range sliders.

#[cfg(test)]
#[path = "price_label_test.rs"]
mod price_label_test;

/// Write the label for `value` into the element with `target_id`.
///
/// Returns the text written, or `None` when the element is missing.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn update(value: i64, target_id: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let el = crate::util::dom::element_by_id(target_id)?;
        let text = crate::util::price::price_label(value);
        el.set_text_content(Some(&text));
        Some(text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
