//! Logical input intents
//!
//! The UI layer folds device events into a [`TickInput`] snapshot; the
//! simulation only ever sees that snapshot.

/// A named logical input signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    RotateLeft,
    RotateRight,
    Thrust,
    Fire,
}

/// A pressed/released edge for one intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentEvent {
    pub intent: Intent,
    pub pressed: bool,
}

impl IntentEvent {
    pub fn pressed(intent: Intent) -> Self {
        Self {
            intent,
            pressed: true,
        }
    }

    pub fn released(intent: Intent) -> Self {
        Self {
            intent,
            pressed: false,
        }
    }
}

/// Intent levels for a single update
///
/// Rotation and thrust are level-triggered. Fire keeps both its level and a
/// latched press, so a tap that starts and ends between two updates still
/// shoots. Call [`TickInput::end_frame`] after each update to clear the latch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub fire: bool,
    /// Fire went from released to pressed since the last `end_frame`
    pub fire_pressed: bool,
}

impl TickInput {
    /// Fold one edge event into the snapshot
    pub fn apply(&mut self, event: IntentEvent) {
        if event.intent == Intent::Fire && event.pressed && !self.fire {
            self.fire_pressed = true;
        }
        let slot = match event.intent {
            Intent::RotateLeft => &mut self.rotate_left,
            Intent::RotateRight => &mut self.rotate_right,
            Intent::Thrust => &mut self.thrust,
            Intent::Fire => &mut self.fire,
        };
        *slot = event.pressed;
    }

    /// Drop the latched fire press once an update has seen it
    pub fn end_frame(&mut self) {
        self.fire_pressed = false;
    }

    pub fn is_held(&self, intent: Intent) -> bool {
        match intent {
            Intent::RotateLeft => self.rotate_left,
            Intent::RotateRight => self.rotate_right,
            Intent::Thrust => self.thrust,
            Intent::Fire => self.fire,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_sets_and_clears_levels() {
        let mut input = TickInput::default();
        input.apply(IntentEvent::pressed(Intent::Thrust));
        input.apply(IntentEvent::pressed(Intent::RotateLeft));
        assert!(input.is_held(Intent::Thrust));
        assert!(input.rotate_left);

        input.apply(IntentEvent::released(Intent::Thrust));
        assert!(!input.thrust);
        assert!(input.rotate_left);
    }

    #[test]
    fn test_repeated_press_is_idempotent() {
        let mut input = TickInput::default();
        input.apply(IntentEvent::pressed(Intent::Fire));
        let once = input;
        input.apply(IntentEvent::pressed(Intent::Fire));
        assert_eq!(input, once);
    }

    #[test]
    fn test_fire_tap_latches_until_end_frame() {
        let mut input = TickInput::default();
        input.apply(IntentEvent::pressed(Intent::Fire));
        input.apply(IntentEvent::released(Intent::Fire));
        assert!(!input.fire);
        assert!(input.fire_pressed);

        input.end_frame();
        assert!(!input.fire_pressed);
    }

    #[test]
    fn test_key_repeat_while_held_does_not_latch() {
        let mut input = TickInput::default();
        input.apply(IntentEvent::pressed(Intent::Fire));
        input.end_frame();
        input.apply(IntentEvent::pressed(Intent::Fire));
        assert!(!input.fire_pressed);
        assert!(input.fire);
    }
}
