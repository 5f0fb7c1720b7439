//! Logical buttons and the input source the overlay polls.

use bitflags::bitflags;

use crate::error::Result;

/// Buttons the overlay reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Button {
    Back,
    Left,
    Right,
    Up,
    Down,
    /// Confirm-primary: return to the command window or throw a ball.
    JumpDown,
    /// Confirm-secondary: select the inspected combatant.
    JumpUp,
    /// Alias of [`Button::JumpUp`].
    Use,
}

bitflags! {
    /// Set of buttons sampled during one frame.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Buttons: u8 {
        const BACK = 1 << 0;
        const LEFT = 1 << 1;
        const RIGHT = 1 << 2;
        const UP = 1 << 3;
        const DOWN = 1 << 4;
        const JUMP_DOWN = 1 << 5;
        const JUMP_UP = 1 << 6;
        const USE = 1 << 7;
    }
}

impl Button {
    pub const fn flag(self) -> Buttons {
        match self {
            Button::Back => Buttons::BACK,
            Button::Left => Buttons::LEFT,
            Button::Right => Buttons::RIGHT,
            Button::Up => Buttons::UP,
            Button::Down => Buttons::DOWN,
            Button::JumpDown => Buttons::JUMP_DOWN,
            Button::JumpUp => Buttons::JUMP_UP,
            Button::Use => Buttons::USE,
        }
    }
}

/// Button state of one frame.
///
/// `triggered` holds buttons that went down this frame; `repeated` holds
/// buttons that are down, including auto-repeat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub triggered: Buttons,
    pub repeated: Buttons,
}

impl ButtonState {
    /// State for a frame where `pressed` were pressed and nothing was held.
    pub const fn pressed(pressed: Buttons) -> Self {
        Self {
            triggered: pressed,
            repeated: pressed,
        }
    }

    /// State derived from the held sets of the previous and current frame.
    pub fn from_held(previous: Buttons, current: Buttons) -> Self {
        Self {
            triggered: current.difference(previous),
            repeated: current,
        }
    }

    pub fn is_triggered(&self, button: Button) -> bool {
        self.triggered.contains(button.flag())
    }

    pub fn is_repeated(&self, button: Button) -> bool {
        self.repeated.contains(button.flag())
    }
}

/// Source of button input, sampled once per frame.
pub trait InputSource {
    /// Samples input for the current frame.
    fn poll(&mut self) -> Result<()>;

    /// Edge-triggered: the button went down this frame.
    fn is_triggered(&self, button: Button) -> bool;

    /// Level-triggered: the button is held, firing again on auto-repeat.
    fn is_repeated(&self, button: Button) -> bool;
}
