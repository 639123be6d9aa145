//! Keyword matching against the instrument catalog.
//!
//! A keyword is either a symbol (`TSLA`) or an uppercased display name
//! (`TESLA`). Candidate words are always uppercased before comparison, which
//! makes matching case-insensitive without storing lowercase variants.

use std::collections::{HashMap, HashSet};

use crate::{InstrumentCatalog, Symbol};

/// Flat, ordered set of match keywords derived from a catalog.
///
/// Iteration follows catalog order, symbols first and then display names,
/// with later duplicates dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    ordered: Vec<String>,
    members: HashSet<String>,
}

impl KeywordSet {
    pub fn contains(&self, word: &str) -> bool {
        self.members.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    fn insert(&mut self, keyword: String) {
        if self.members.insert(keyword.clone()) {
            self.ordered.push(keyword);
        }
    }
}

/// Union of all symbols and all uppercased display names.
pub fn build_keyword_set(catalog: &InstrumentCatalog) -> KeywordSet {
    let mut keywords = KeywordSet {
        ordered: Vec::with_capacity(catalog.len() * 2),
        members: HashSet::with_capacity(catalog.len() * 2),
    };

    for instrument in catalog {
        keywords.insert(instrument.symbol.as_str().to_owned());
    }
    for instrument in catalog {
        keywords.insert(instrument.name.to_uppercase());
    }

    keywords
}

/// Resolve an uppercased word to its symbol. A symbol match always wins over
/// a display-name match.
pub fn resolve_symbol<'a>(word: &str, catalog: &'a InstrumentCatalog) -> Option<&'a Symbol> {
    catalog
        .iter()
        .find(|instrument| instrument.symbol.as_str() == word)
        .or_else(|| {
            catalog
                .iter()
                .find(|instrument| instrument.name.to_uppercase() == word)
        })
        .map(|instrument| &instrument.symbol)
}

/// Catalog-derived lookup tables, built once per run.
///
/// Holds the keyword set used by extraction and the reverse name map used by
/// attribution, so neither is recomputed per text.
#[derive(Debug, Clone)]
pub struct KeywordIndex {
    keywords: KeywordSet,
    by_symbol: HashMap<String, Symbol>,
    by_name: HashMap<String, Symbol>,
}

impl KeywordIndex {
    pub fn new(catalog: &InstrumentCatalog) -> Self {
        let by_symbol = catalog
            .iter()
            .map(|instrument| {
                (
                    instrument.symbol.as_str().to_owned(),
                    instrument.symbol.clone(),
                )
            })
            .collect();

        let mut by_name = HashMap::with_capacity(catalog.len());
        for instrument in catalog {
            // First instrument wins when display names collide.
            by_name
                .entry(instrument.name.to_uppercase())
                .or_insert_with(|| instrument.symbol.clone());
        }

        Self {
            keywords: build_keyword_set(catalog),
            by_symbol,
            by_name,
        }
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// Same contract as [`resolve_symbol`], backed by hash lookups.
    pub fn resolve(&self, word: &str) -> Option<&Symbol> {
        self.by_symbol
            .get(word)
            .or_else(|| self.by_name.get(word))
    }
}
