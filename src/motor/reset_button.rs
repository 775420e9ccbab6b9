/*
    Reset Button Latch
        Fires once per press. After firing, the input is ignored for
        cooldown_ticks control ticks so contact bounce cannot re-trigger.
*/

pub struct ResetButton {
    cooldown_ticks: u32,
    remaining_ticks: u32,
    was_asserted: bool,
}

impl ResetButton {
    pub const fn new(cooldown_ticks: u32) -> Self {
        Self {
            cooldown_ticks,
            remaining_ticks: 0,
            was_asserted: false,
        }
    }

    // Called once per tick with the current (active high) button level
    pub fn poll(&mut self, asserted: bool) -> bool {
        if self.remaining_ticks > 0 {
            self.remaining_ticks -= 1;
            self.was_asserted = asserted;
            return false;
        }

        let pressed = asserted && !self.was_asserted;
        self.was_asserted = asserted;

        if pressed {
            self.remaining_ticks = self.cooldown_ticks;
        }
        return pressed;
    }
}
