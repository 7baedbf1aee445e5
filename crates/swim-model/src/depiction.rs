//! Map depictions
//!
//! A depiction renders an object as a MIL-STD-2525 tactical point or tactical
//! symbol at a reference position, optionally annotated with text and an
//! image. Symbols are created through a [`SymbolFactory`].

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::SymbolError;
use crate::geom::Position;

/// Rendering family of a depiction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbology {
    /// Tactical graphic drawn at a single point
    TacticalPoint,
    /// Framed tactical symbol
    TacticalSymbol,
}

impl Symbology {
    /// Coding schemes allowed in the first identifier position
    #[must_use]
    pub const fn coding_schemes(&self) -> &'static [char] {
        match self {
            Self::TacticalPoint => &['G', 'W'],
            Self::TacticalSymbol => &['S', 'I', 'O', 'E'],
        }
    }
}

static SIDC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9*\-]{15}$").expect("SIDC pattern is valid"));

/// Validated 15-character symbol identification code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolIdentifier(String);

impl SymbolIdentifier {
    pub const LENGTH: usize = 15;

    /// Parse an identifier for a symbology
    ///
    /// # Errors
    /// Returns [`SymbolError::InvalidIdentifier`] if the code has the wrong
    /// length, contains characters outside `[A-Za-z0-9*-]`, or names a coding
    /// scheme the symbology cannot render
    pub fn parse(sidc: &str, symbology: Symbology) -> Result<Self, SymbolError> {
        if sidc.chars().count() != Self::LENGTH {
            return Err(SymbolError::invalid_identifier(
                sidc,
                format!("expected {} characters", Self::LENGTH),
            ));
        }
        if !SIDC_PATTERN.is_match(sidc) {
            return Err(SymbolError::invalid_identifier(
                sidc,
                "only letters, digits, '-' and '*' are allowed",
            ));
        }
        let scheme = sidc
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or_default();
        if !symbology.coding_schemes().contains(&scheme) {
            return Err(SymbolError::invalid_identifier(
                sidc,
                format!("coding scheme '{scheme}' cannot be rendered as {symbology:?}"),
            ));
        }
        Ok(Self(sidc.to_string()))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SymbolIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tactical point or symbol placed at a position
#[derive(Debug, Clone, PartialEq)]
pub struct TacticalDepiction {
    pub symbology: Symbology,
    pub identifier: SymbolIdentifier,
    pub position: Position,
}

/// Text label with an optional image source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepictionAnnotation {
    pub text: String,
    pub image: Option<String>,
}

impl DepictionAnnotation {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Visual representation of a scenario object
#[derive(Debug, Clone, PartialEq)]
pub struct Depiction {
    pub tactical: TacticalDepiction,
    pub annotation: Option<DepictionAnnotation>,
    pub visible: bool,
}

impl Depiction {
    /// Visible, unannotated depiction
    #[must_use]
    pub fn new(tactical: TacticalDepiction) -> Self {
        Self {
            tactical,
            annotation: None,
            visible: true,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_annotation(mut self, annotation: DepictionAnnotation) -> Self {
        self.annotation = Some(annotation);
        self
    }

    #[inline]
    #[must_use]
    pub fn symbology(&self) -> Symbology {
        self.tactical.symbology
    }

    #[inline]
    #[must_use]
    pub fn symbol_identifier(&self) -> &str {
        self.tactical.identifier.as_str()
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> Position {
        self.tactical.position
    }
}

/// Creates tactical depictions from symbol identification codes
pub trait SymbolFactory {
    /// Create a depiction of `symbology` for `sidc` at `position`
    ///
    /// # Errors
    /// Returns [`SymbolError`] if the identifier cannot be rendered
    fn create(
        &mut self,
        symbology: Symbology,
        sidc: &str,
        position: Position,
    ) -> Result<TacticalDepiction, SymbolError>;
}

/// MIL-STD-2525 symbol factory
///
/// Caches parsed identifiers. Holds mutable state, so callers create one
/// factory per decode call instead of sharing it across threads.
#[derive(Debug, Default)]
pub struct MilStd2525SymbolFactory {
    identifiers: HashMap<(Symbology, String), SymbolIdentifier>,
}

impl MilStd2525SymbolFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SymbolFactory for MilStd2525SymbolFactory {
    fn create(
        &mut self,
        symbology: Symbology,
        sidc: &str,
        position: Position,
    ) -> Result<TacticalDepiction, SymbolError> {
        let key = (symbology, sidc.to_string());
        let identifier = match self.identifiers.get(&key) {
            Some(identifier) => identifier.clone(),
            None => {
                let identifier = SymbolIdentifier::parse(sidc, symbology)?;
                self.identifiers.insert(key, identifier.clone());
                identifier
            }
        };

        Ok(TacticalDepiction {
            symbology,
            identifier,
            position,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_creates_tactical_point() {
        let mut factory = MilStd2525SymbolFactory::new();
        let position = Position::from_degrees(10.0, 20.0, 30.0);
        let point = factory
            .create(Symbology::TacticalPoint, "GFGPGPP-------X", position)
            .unwrap();

        assert_eq!(point.identifier.as_str(), "GFGPGPP-------X");
        assert_eq!(point.position, position);
    }

    #[test]
    fn factory_caches_identifiers() {
        let mut factory = MilStd2525SymbolFactory::new();
        for _ in 0..3 {
            factory
                .create(Symbology::TacticalSymbol, "SFAPMF----*****", Position::default())
                .unwrap();
        }
        assert_eq!(factory.identifiers.len(), 1);
    }

    #[test]
    fn identifier_length_is_checked() {
        let err = SymbolIdentifier::parse("SFAP", Symbology::TacticalSymbol).unwrap_err();
        assert!(err.to_string().contains("15 characters"));
    }

    #[test]
    fn coding_scheme_must_match_symbology() {
        assert!(SymbolIdentifier::parse("SFAPMF----*****", Symbology::TacticalPoint).is_err());
        assert!(SymbolIdentifier::parse("GFGPGPP-------X", Symbology::TacticalSymbol).is_err());
        assert!(SymbolIdentifier::parse("SFAPMF----#####", Symbology::TacticalSymbol).is_err());
    }

    #[test]
    fn depiction_defaults_to_visible() {
        let mut factory = MilStd2525SymbolFactory::new();
        let tactical = factory
            .create(Symbology::TacticalSymbol, "SHAPMF----*****", Position::default())
            .unwrap();
        let depiction = Depiction::new(tactical)
            .with_annotation(DepictionAnnotation::new("bandit").with_image("icons/bandit.png"));

        assert!(depiction.visible);
        assert_eq!(depiction.symbol_identifier(), "SHAPMF----*****");
        assert_eq!(
            depiction.annotation.and_then(|a| a.image).as_deref(),
            Some("icons/bandit.png")
        );
    }
}
