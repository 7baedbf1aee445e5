//! Codec trait and dispatch helpers

use crate::error::{ConversionError, ConversionResult};

/// Two-way conversion between a document node and a domain value
///
/// Codecs carrying context (globe, reference position, aircraft,
/// environment) borrow it for their lifetime; all others are unit structs.
///
/// # Example
/// ```
/// use swim_codec::{Codec, LocationCodec};
/// use swim_document::Location;
///
/// let location = LocationCodec.decode(&Location::new(48.1, 11.6)).unwrap();
/// assert_eq!(LocationCodec.encode(&location).unwrap(), Location::new(48.1, 11.6));
/// ```
pub trait Codec {
    /// Document representation
    type External;
    /// Domain representation
    type Internal;

    /// Convert a document node into a domain value
    ///
    /// # Errors
    /// Returns [`ConversionError`] if the node cannot be represented
    fn decode(&self, external: &Self::External) -> ConversionResult<Self::Internal>;

    /// Convert a domain value into a document node
    ///
    /// # Errors
    /// Returns [`ConversionError`] if the value has no document form
    fn encode(&self, internal: &Self::Internal) -> ConversionResult<Self::External>;
}

/// Select the single populated alternative of a "one of" node
///
/// Zero populated alternatives is an unsupported variant, more than one a
/// malformed node.
pub(crate) fn exactly_one<T, const N: usize>(
    kind: &'static str,
    alternatives: [(&'static str, Option<T>); N],
) -> ConversionResult<T> {
    let mut populated = alternatives
        .into_iter()
        .filter_map(|(tag, value)| value.map(|value| (tag, value)));

    let Some((first, value)) = populated.next() else {
        return Err(ConversionError::unsupported(kind, "none"));
    };

    let others: Vec<&str> = populated.map(|(tag, _)| tag).collect();
    if others.is_empty() {
        Ok(value)
    } else {
        Err(ConversionError::malformed(
            kind,
            format!(
                "multiple alternatives populated: {first}, {}",
                others.join(", ")
            ),
        ))
    }
}

/// Require a node the schema marks mandatory
pub(crate) fn required<'a, T>(value: Option<&'a T>, field: &str) -> ConversionResult<&'a T> {
    value.ok_or_else(|| ConversionError::missing(field))
}

/// Check a scalar is finite
pub(crate) fn finite(field: &str, value: f64) -> ConversionResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConversionError::malformed(field, format!("{value} is not finite")))
    }
}
