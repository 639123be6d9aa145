use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Symbol, ValidationError};

/// Default catalog tracked when no configuration is supplied.
const DEFAULT_INSTRUMENTS: [(&str, &str); 9] = [
    ("AAPL", "Apple"),
    ("AMD", "Advanced Micro Devices"),
    ("AMZN", "Amazon"),
    ("GOOG", "Google"),
    ("META", "Facebook"),
    ("NVDA", "Nvidia"),
    ("SMCI", "Super Micro Computer"),
    ("SPOT", "Spotify"),
    ("TSLA", "Tesla"),
];

/// A tracked instrument: canonical symbol plus human-readable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    pub symbol: Symbol,
    pub name: String,
}

impl Instrument {
    pub fn new(symbol: Symbol, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(ValidationError::EmptyDisplayName {
                symbol: symbol.to_string(),
            });
        }
        Ok(Self { symbol, name })
    }

    pub fn parse(symbol: &str, name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(Symbol::parse(symbol)?, name)
    }
}

/// Ordered, immutable set of instruments with unique symbols.
///
/// Insertion order is preserved and is the order results are reported in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InstrumentCatalog {
    instruments: Vec<Instrument>,
}

impl InstrumentCatalog {
    pub fn new(instruments: Vec<Instrument>) -> Result<Self, ValidationError> {
        if instruments.is_empty() {
            return Err(ValidationError::EmptyCatalog);
        }

        let mut seen = HashSet::with_capacity(instruments.len());
        for instrument in &instruments {
            if !seen.insert(instrument.symbol.clone()) {
                return Err(ValidationError::DuplicateSymbol {
                    symbol: instrument.symbol.to_string(),
                });
            }
        }

        Ok(Self { instruments })
    }

    /// Build from `(symbol, name)` pairs, validating each symbol.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let instruments = pairs
            .into_iter()
            .map(|(symbol, name)| Instrument::parse(symbol, name))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(instruments)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instrument> {
        self.instruments.iter()
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    pub fn get(&self, symbol: &Symbol) -> Option<&Instrument> {
        self.instruments
            .iter()
            .find(|instrument| &instrument.symbol == symbol)
    }
}

impl Default for InstrumentCatalog {
    fn default() -> Self {
        let instruments = DEFAULT_INSTRUMENTS
            .iter()
            .map(|(symbol, name)| Instrument {
                symbol: Symbol::from_static(symbol),
                name: (*name).to_owned(),
            })
            .collect();
        Self { instruments }
    }
}

impl<'de> Deserialize<'de> for InstrumentCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let instruments = Vec::<Instrument>::deserialize(deserializer)?;
        Self::new(instruments).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a InstrumentCatalog {
    type Item = &'a Instrument;
    type IntoIter = std::slice::Iter<'a, Instrument>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_keeps_declared_order() {
        let catalog = InstrumentCatalog::default();
        let symbols = catalog
            .iter()
            .map(|instrument| instrument.symbol.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            symbols,
            ["AAPL", "AMD", "AMZN", "GOOG", "META", "NVDA", "SMCI", "SPOT", "TSLA"]
        );
    }

    #[test]
    fn default_catalog_passes_validation() {
        let catalog = InstrumentCatalog::default();
        let rebuilt = InstrumentCatalog::from_pairs(
            catalog
                .iter()
                .map(|instrument| (instrument.symbol.as_str(), instrument.name.as_str())),
        )
        .expect("defaults must validate");
        assert_eq!(rebuilt, catalog);
    }

    #[test]
    fn rejects_duplicate_symbols() {
        let err = InstrumentCatalog::from_pairs([("AAPL", "Apple"), ("aapl", "Apple Inc")])
            .expect_err("must fail");
        assert_eq!(
            err,
            ValidationError::DuplicateSymbol {
                symbol: String::from("AAPL")
            }
        );
    }

    #[test]
    fn rejects_empty_catalog() {
        let err = InstrumentCatalog::new(Vec::new()).expect_err("must fail");
        assert_eq!(err, ValidationError::EmptyCatalog);
    }

    #[test]
    fn rejects_blank_display_name() {
        let err = Instrument::parse("AAPL", "   ").expect_err("must fail");
        assert!(matches!(err, ValidationError::EmptyDisplayName { .. }));
    }

    #[test]
    fn deserializes_ordered_list() {
        let catalog: InstrumentCatalog = serde_json::from_str(
            r#"[{"symbol":"tsla","name":"Tesla"},{"symbol":"AMD","name":"Advanced Micro Devices"}]"#,
        )
        .expect("must deserialize");
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.iter().next().map(|i| i.symbol.as_str()),
            Some("TSLA")
        );
    }
}
