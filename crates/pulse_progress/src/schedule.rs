/// Fabricated progress: climbs by a fixed step on every tick, stalls below
/// completion and only reaches 100 when told the work is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSchedule {
    value: u8,
    step: u8,
    ceiling: u8,
}

impl Default for ProgressSchedule {
    fn default() -> Self {
        Self::new(10, 90)
    }
}

impl ProgressSchedule {
    pub const COMPLETE: u8 = 100;

    /// `ceiling` is capped below [`Self::COMPLETE`] so that ticking alone can
    /// never report a finished run.
    pub fn new(step: u8, ceiling: u8) -> Self {
        Self { value: 0, step, ceiling: ceiling.min(Self::COMPLETE - 1) }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_complete(&self) -> bool {
        self.value == Self::COMPLETE
    }

    /// Has the schedule stopped climbing on its own.
    pub fn is_stalled(&self) -> bool {
        self.value >= self.ceiling
    }

    pub fn tick(&mut self) -> u8 {
        if !self.is_complete() && !self.is_stalled() {
            self.value = self.value.saturating_add(self.step).min(self.ceiling);
        }
        self.value
    }

    pub fn complete(&mut self) -> u8 {
        self.value = Self::COMPLETE;
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_climbs_to_ninety() {
        let mut fixture = ProgressSchedule::default();

        let actual: Vec<u8> = (0..12).map(|_| fixture.tick()).collect();

        let expected = vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 90, 90, 90];
        assert_eq!(actual, expected);
        assert!(fixture.is_stalled());
        assert!(!fixture.is_complete());
    }

    #[test]
    fn test_complete_jumps_to_hundred() {
        let mut fixture = ProgressSchedule::default();
        fixture.tick();
        fixture.tick();

        assert_eq!(fixture.complete(), 100);
        assert!(fixture.is_complete());
        assert_eq!(fixture.tick(), 100);
    }

    #[test]
    fn test_step_not_dividing_ceiling() {
        let mut fixture = ProgressSchedule::new(40, 90);

        let actual: Vec<u8> = (0..4).map(|_| fixture.tick()).collect();

        assert_eq!(actual, vec![40, 80, 90, 90]);
    }

    #[test]
    fn test_ceiling_stays_below_complete() {
        let mut fixture = ProgressSchedule::new(60, 250);

        fixture.tick();
        fixture.tick();

        assert_eq!(fixture.value(), 99);
        assert!(!fixture.is_complete());
    }

    #[test]
    fn test_reset() {
        let mut fixture = ProgressSchedule::default();
        fixture.complete();
        fixture.reset();
        assert_eq!(fixture.value(), 0);
    }
}
