//! Addressable tick range of a timeline session

use crate::error::TimelineError;

/// A discrete timeline position
pub type Tick = i64;

/// Default number of ticks added by a plain extend
pub const DEFAULT_EXTEND_STEP: Tick = 600;

/// Total addressable tick range `[0, max_ticks]`
///
/// The range only ever grows: there is no way to shrink it once a session
/// has started, so ticks handed out earlier stay valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSpace {
    max_ticks: Tick,
}

impl TickSpace {
    /// Create a tick space ending at `max_ticks` (negative values become 0)
    pub fn new(max_ticks: Tick) -> Self {
        Self {
            max_ticks: max_ticks.max(0),
        }
    }

    /// Last addressable tick
    pub fn max_ticks(&self) -> Tick {
        self.max_ticks
    }

    /// Grow the space by `amount` ticks, or by [`DEFAULT_EXTEND_STEP`] when `None`
    ///
    /// Returns the new `max_ticks`. A non-positive amount is rejected and
    /// leaves the space unchanged.
    pub fn extend(&mut self, amount: Option<Tick>) -> Result<Tick, TimelineError> {
        let amount = amount.unwrap_or(DEFAULT_EXTEND_STEP);
        if amount <= 0 {
            return Err(TimelineError::InvalidArgument(format!(
                "extend amount must be positive, got {}",
                amount
            )));
        }

        self.max_ticks = self.max_ticks.saturating_add(amount);
        log::debug!("TickSpace: extended by {} to {}", amount, self.max_ticks);
        Ok(self.max_ticks)
    }

    /// Clamp a tick into `[0, max_ticks]`
    pub fn clamp(&self, tick: Tick) -> Tick {
        tick.clamp(0, self.max_ticks)
    }
}

impl Default for TickSpace {
    fn default() -> Self {
        Self::new(DEFAULT_EXTEND_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_default_step() {
        let mut space = TickSpace::new(600);
        assert_eq!(space.extend(None), Ok(1200));
        assert_eq!(space.max_ticks(), 1200);
    }

    #[test]
    fn test_extend_custom_amount() {
        let mut space = TickSpace::new(0);
        assert_eq!(space.extend(Some(37)), Ok(37));
        assert_eq!(space.extend(Some(1)), Ok(38));
    }

    #[test]
    fn test_extend_rejects_non_positive() {
        let mut space = TickSpace::new(600);
        assert!(matches!(
            space.extend(Some(0)),
            Err(TimelineError::InvalidArgument(_))
        ));
        assert!(matches!(
            space.extend(Some(-10)),
            Err(TimelineError::InvalidArgument(_))
        ));
        assert_eq!(space.max_ticks(), 600, "Rejected extend must not mutate");
    }

    #[test]
    fn test_clamp() {
        let space = TickSpace::new(100);
        assert_eq!(space.clamp(-5), 0);
        assert_eq!(space.clamp(50), 50);
        assert_eq!(space.clamp(101), 100);
    }

    #[test]
    fn test_negative_construction_is_empty() {
        let space = TickSpace::new(-3);
        assert_eq!(space.max_ticks(), 0);
        assert_eq!(space.clamp(7), 0);
    }
}
