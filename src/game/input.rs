/// One of the four directional keys
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Arrow {
    Up,
    Down,
    Left,
    Right,
}

/// Which directional key is currently latched.
///
/// Pressing a key latches it and unlatches the other three, so at most one
/// axis is ever active.  Releasing a key does nothing: the latch holds until
/// a different arrow is pressed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct KeyState {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl KeyState {
    /// The snake starts out heading right.
    pub(super) const fn new() -> KeyState {
        KeyState {
            up: false,
            down: false,
            left: false,
            right: true,
        }
    }

    /// No key latched at all
    #[cfg(test)]
    pub(super) const fn none() -> KeyState {
        KeyState {
            up: false,
            down: false,
            left: false,
            right: false,
        }
    }

    pub(super) fn press(&mut self, arrow: Arrow) {
        if self.latched() == Some(arrow) {
            return;
        }
        *self = KeyState {
            up: arrow == Arrow::Up,
            down: arrow == Arrow::Down,
            left: arrow == Arrow::Left,
            right: arrow == Arrow::Right,
        };
    }

    // Releases are accepted so that callers can forward every key event, but
    // they never change the latch.
    pub(super) fn release(&self, _arrow: Arrow) {}

    pub(super) fn latched(&self) -> Option<Arrow> {
        if self.up {
            Some(Arrow::Up)
        } else if self.down {
            Some(Arrow::Down)
        } else if self.left {
            Some(Arrow::Left)
        } else if self.right {
            Some(Arrow::Right)
        } else {
            None
        }
    }

    pub(super) fn intent(&self) -> Intent {
        Intent {
            horizontal: i8::from(self.right) - i8::from(self.left),
            vertical: i8::from(self.up) - i8::from(self.down),
        }
    }
}

/// Movement requested for the next step.  Each component is -1, 0, or 1.
/// `vertical` is positive for "up", which is towards lower row numbers.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(super) struct Intent {
    pub(super) horizontal: i8,
    pub(super) vertical: i8,
}

impl Intent {
    /// Whether a step should move the snake at all.  The two components are
    /// combined by subtraction, so simultaneous nonzero values can cancel
    /// out; [`KeyState`] never produces both at once.
    pub(super) fn is_moving(self) -> bool {
        self.horizontal - self.vertical != 0
    }

    /// Column & row deltas for the snake's head
    pub(super) fn delta(self) -> (i8, i8) {
        (self.horizontal, -self.vertical)
    }
}
