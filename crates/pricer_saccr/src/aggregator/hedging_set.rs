//! Partitioning of instruments into currency hedging sets.

use std::collections::HashMap;

use crate::ids::CurrencyCode;
use crate::instrument::Instrument;

/// Instruments sharing one currency code.
///
/// Members are stored as indices into the aggregator's instrument collection,
/// in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HedgingSet {
    currency: CurrencyCode,
    members: Vec<usize>,
}

impl HedgingSet {
    /// Currency code shared by every member.
    #[inline]
    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// Indices of the member instruments, in input order.
    #[inline]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Number of member instruments.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Resolves the member instruments against the collection they index.
    ///
    /// Members with no counterpart in `all` are skipped.
    pub fn instruments<'a>(
        &'a self,
        all: &'a [Instrument],
    ) -> impl Iterator<Item = &'a Instrument> + 'a {
        self.members.iter().filter_map(move |&i| all.get(i))
    }
}

/// Hedging sets in first-appearance order of their currency.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HedgingSets {
    sets: Vec<HedgingSet>,
}

impl HedgingSets {
    /// Groups instruments by currency code.
    ///
    /// Sets are ordered by the first occurrence of their currency, members by
    /// their position in `instruments`.
    pub fn partition(instruments: &[Instrument]) -> Self {
        let mut sets: Vec<HedgingSet> = Vec::new();
        let mut index: HashMap<&CurrencyCode, usize> = HashMap::new();

        for (i, instrument) in instruments.iter().enumerate() {
            let currency = instrument.currency();
            match index.get(currency) {
                Some(&slot) => sets[slot].members.push(i),
                None => {
                    index.insert(currency, sets.len());
                    sets.push(HedgingSet {
                        currency: currency.clone(),
                        members: vec![i],
                    });
                }
            }
        }

        Self { sets }
    }

    /// Looks up the set for a currency.
    pub fn get(&self, currency: &CurrencyCode) -> Option<&HedgingSet> {
        self.sets.iter().find(|set| set.currency() == currency)
    }

    /// Iterates over the sets in order.
    pub fn iter(&self) -> std::slice::Iter<'_, HedgingSet> {
        self.sets.iter()
    }

    /// Number of hedging sets.
    #[inline]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Whether there are no hedging sets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl<'a> IntoIterator for &'a HedgingSets {
    type Item = &'a HedgingSet;
    type IntoIter = std::slice::Iter<'a, HedgingSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.iter()
    }
}
