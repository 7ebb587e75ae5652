/// Caret blink oscillator, advanced once per host tick.
///
/// Visibility flips every `ticks_per_toggle` ticks, so a full blink cycle
/// is twice that. At a 60 Hz tick rate the customary 30 ticks give roughly
/// half a second per phase.
#[derive(Clone, Copy, Debug)]
pub struct Blink {
    ticks_per_toggle: u32,
    ticks: u32,
    visible: bool,
}

impl Blink {
    pub fn new(ticks_per_toggle: u32) -> Self {
        Self {
            ticks_per_toggle,
            ticks: 0,
            visible: true,
        }
    }

    /// Advance one tick, flipping visibility when the phase is over.
    pub fn tick(&mut self) {
        self.ticks += 1;
        if self.ticks >= self.ticks_per_toggle {
            self.ticks = 0;
            self.visible = !self.visible;
        }
    }

    #[inline]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Restart the cycle with the caret shown.
    pub fn reset(&mut self) {
        self.ticks = 0;
        self.visible = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_visible_and_toggles_on_schedule() {
        let mut blink = Blink::new(3);
        assert!(blink.visible());

        blink.tick();
        blink.tick();
        assert!(blink.visible());

        blink.tick();
        assert!(!blink.visible());

        for _ in 0..3 {
            blink.tick();
        }
        assert!(blink.visible());
    }

    #[test]
    fn reset_restarts_a_full_phase() {
        let mut blink = Blink::new(2);
        blink.tick();
        blink.tick();
        assert!(!blink.visible());

        blink.reset();
        assert!(blink.visible());

        // A full phase must elapse again before the next toggle.
        blink.tick();
        assert!(blink.visible());
        blink.tick();
        assert!(!blink.visible());
    }
}
