/// Handle to the cached decision table for one prediction point.
///
/// Listeners only read the decision number and the index of the grammar
/// rule containing the decision.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dfa {
    pub decision: usize,
    pub rule_index: usize,
}

impl Dfa {
    #[inline]
    pub fn new(decision: usize, rule_index: usize) -> Self {
        Dfa {
            decision,
            rule_index,
        }
    }
}
