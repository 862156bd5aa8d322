//! Prediction configuration sets.

use std::slice;

use crate::AltSet;

/// One in-progress prediction state: an ATN state reached while
/// predicting `alt`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AtnConfig {
    pub state: usize,
    pub alt: usize,
}

impl AtnConfig {
    #[inline]
    pub fn new(state: usize, alt: usize) -> Self {
        AtnConfig { state, alt }
    }
}

/// The configurations considered when a decision event was raised.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ConfigSet {
    configs: Vec<AtnConfig>,
    full_context: bool,
}

impl ConfigSet {
    /// Create an empty set. `full_context` marks sets computed during
    /// full-context (LL) prediction rather than SLL.
    pub fn new(full_context: bool) -> Self {
        ConfigSet {
            configs: Vec::new(),
            full_context,
        }
    }

    pub fn push(&mut self, config: AtnConfig) {
        self.configs.push(config);
    }

    pub fn is_full_context(&self) -> bool {
        self.full_context
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, AtnConfig> {
        self.configs.iter()
    }

    /// All alternatives predicted by some configuration in the set.
    pub fn alts(&self) -> AltSet {
        self.configs.iter().map(|c| c.alt).collect()
    }
}

impl FromIterator<AtnConfig> for ConfigSet {
    fn from_iter<I: IntoIterator<Item = AtnConfig>>(iter: I) -> Self {
        ConfigSet {
            configs: iter.into_iter().collect(),
            full_context: false,
        }
    }
}

impl<'a> IntoIterator for &'a ConfigSet {
    type Item = &'a AtnConfig;
    type IntoIter = slice::Iter<'a, AtnConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
