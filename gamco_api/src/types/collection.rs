//! Funds indexed by ticker symbol.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::Serialize;

use super::Fund;

/// Mapping from ticker symbol to [`Fund`].
///
/// Built once from a decoded record sequence. When the source repeats a
/// symbol the later record replaces the earlier one. Iteration is in symbol
/// order; the source order is not kept.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct FundCollection {
    funds: BTreeMap<String, Fund>,
}

impl FundCollection {
    /// Indexes `funds` by symbol, last occurrence wins.
    pub fn from_funds<I>(funds: I) -> Self
    where
        I: IntoIterator<Item = Fund>,
    {
        let mut map = BTreeMap::new();
        for fund in funds {
            match map.entry(fund.symbol.clone()) {
                Entry::Occupied(mut entry) => {
                    tracing::warn!("Duplicate fund symbol {}, keeping the later record", entry.key());
                    entry.insert(fund);
                }
                Entry::Vacant(entry) => {
                    entry.insert(fund);
                }
            }
        }
        Self { funds: map }
    }

    /// Returns the fund published under `symbol`.
    pub fn get(&self, symbol: &str) -> Option<&Fund> {
        self.funds.get(symbol)
    }

    /// Consumes the collection and returns the fund published under `symbol`.
    pub fn into_fund(mut self, symbol: &str) -> Option<Fund> {
        self.funds.remove(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.funds.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.funds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funds.is_empty()
    }

    /// Iterates over `(symbol, fund)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Fund)> {
        self.funds.iter().map(|(symbol, fund)| (symbol.as_str(), fund))
    }

    pub fn funds(&self) -> impl Iterator<Item = &Fund> {
        self.funds.values()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.funds.keys().map(String::as_str)
    }

    /// Symbols whose record is new or differs from the one in `previous`.
    ///
    /// Symbols that only exist in `previous` are not reported.
    pub fn changed_since(&self, previous: &FundCollection) -> Vec<&str> {
        self.iter()
            .filter(|(symbol, fund)| previous.get(symbol) != Some(*fund))
            .map(|(symbol, _)| symbol)
            .collect()
    }

    pub fn into_funds(self) -> Vec<Fund> {
        self.funds.into_values().collect()
    }
}

impl FromIterator<Fund> for FundCollection {
    fn from_iter<I: IntoIterator<Item = Fund>>(iter: I) -> Self {
        Self::from_funds(iter)
    }
}

impl IntoIterator for FundCollection {
    type Item = (String, Fund);
    type IntoIter = std::collections::btree_map::IntoIter<String, Fund>;

    fn into_iter(self) -> Self::IntoIter {
        self.funds.into_iter()
    }
}
