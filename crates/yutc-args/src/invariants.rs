//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::lexer::Tokenizer;

impl Tokenizer<'_> {
    #[inline]
    pub(crate) fn ensure_progress(&self) {
        assert!(
            self.debug_fuel.get() != 0,
            "tokenizer is stuck: too many lookaheads"
        );
        self.debug_fuel.set(self.debug_fuel.get() - 1);
    }
}
