#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertTransition {
    Raised,
    Recovered,
}

/// High-traffic alert flag. Only changes of state are reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertState {
    alerted: bool,
}

impl AlertState {
    pub fn is_alerted(&self) -> bool {
        self.alerted
    }

    /// Record the latest threshold check, returning the transition it caused, if any.
    pub fn observe(&mut self, threshold_exceeded: bool) -> Option<AlertTransition> {
        if threshold_exceeded == self.alerted {
            return None;
        }

        self.alerted = threshold_exceeded;

        Some(if threshold_exceeded {
            AlertTransition::Raised
        } else {
            AlertTransition::Recovered
        })
    }
}
