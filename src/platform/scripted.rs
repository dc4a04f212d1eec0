//! Pre-recorded input, keyed by poll round
//!
//! The driver drains the input source once per loop iteration. A script
//! entry `(round, event)` is delivered during the `round`-th drain.

use std::collections::VecDeque;

use super::{InputEvent, InputSource};
use crate::error::FrontendError;

#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    script: VecDeque<(u64, InputEvent)>,
    round: u64,
}

impl ScriptedInput {
    /// Entries must be sorted by round
    pub fn new(script: impl IntoIterator<Item = (u64, InputEvent)>) -> Self {
        let script: VecDeque<_> = script.into_iter().collect();
        debug_assert!(script.iter().zip(script.iter().skip(1)).all(|(a, b)| a.0 <= b.0));
        Self { script, round: 0 }
    }

    pub fn is_exhausted(&self) -> bool {
        self.script.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Result<Option<InputEvent>, FrontendError> {
        match self.script.front() {
            Some((round, _)) if *round <= self.round => {
                Ok(self.script.pop_front().map(|(_, event)| event))
            }
            _ => {
                // Drain finished for this round
                self.round += 1;
                Ok(None)
            }
        }
    }
}
