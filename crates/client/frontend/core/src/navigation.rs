//! Navigation state machine of the battler info overlay.
//!
//! [`NavigationController::tick`] consumes one frame of input and reports
//! whether the overlay needs redrawing or has finished with an
//! [`InfoAction`]. It never draws; see [`crate::overlay`] for the driver.
use std::fmt;

use battle_core::{BattlerIndex, Side};
use tracing::trace;

use crate::accessor::BattleAccessor;
use crate::error::{OverlayError, Result};
use crate::input::{Button, InputSource};
use crate::services::effects::{EffectList, EffectProducer};

/// How the overlay was closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfoAction {
    Cancelled,
    /// Return to the battle's command window.
    ConfirmWindow,
    /// Throw a capture device at the lone wild foe.
    ConfirmCapture,
    /// Select the inspected combatant; `position` counts within its side,
    /// the opposing side listed from the far end.
    SwitchTo { side: Side, position: usize },
}

impl fmt::Display for InfoAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfoAction::Cancelled => f.write_str("cancelled"),
            InfoAction::ConfirmWindow => f.write_str("return to command window"),
            InfoAction::ConfirmCapture => f.write_str("throw ball"),
            InfoAction::SwitchTo { side, position } => {
                write!(f, "select {side} position {position}")
            }
        }
    }
}

/// Redraw needed after a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Refresh {
    #[default]
    None,
    /// Selection moved within the effect list.
    Partial,
    /// Another combatant is inspected; effects were regenerated.
    Full,
}

/// Outcome of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue(Refresh),
    Finish(InfoAction),
}

/// Navigation cursor: which combatant is inspected and which effect row is
/// selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    pub combatants: Vec<BattlerIndex>,
    pub selected_combatant: usize,
    pub effects: EffectList,
    pub selected_effect: usize,
}

impl NavigationState {
    pub fn inspected(&self) -> BattlerIndex {
        self.combatants[self.selected_combatant]
    }
}

pub struct NavigationController<'a, A: ?Sized, P: ?Sized> {
    accessor: &'a A,
    producer: &'a P,
    state: NavigationState,
}

impl<'a, A, P> NavigationController<'a, A, P>
where
    A: BattleAccessor + ?Sized,
    P: EffectProducer + ?Sized,
{
    /// Starts navigation on `initial` within `combatants`.
    ///
    /// Every listed combatant must be in battle, and `initial` must be listed
    /// unless the list is empty.
    pub fn new(
        accessor: &'a A,
        producer: &'a P,
        initial: BattlerIndex,
        combatants: &[BattlerIndex],
    ) -> Result<Self> {
        let mut combatants = combatants.to_vec();
        if combatants.is_empty() {
            combatants.push(initial);
        }
        if let Some(missing) = combatants
            .iter()
            .copied()
            .find(|index| accessor.combatant(*index).is_none())
        {
            return Err(OverlayError::UnknownCombatant(missing));
        }

        let selected_combatant = combatants
            .iter()
            .position(|index| *index == initial)
            .ok_or(OverlayError::UnknownCombatant(initial))?;

        let mut controller = Self {
            accessor,
            producer,
            state: NavigationState {
                combatants,
                selected_combatant,
                effects: EffectList::default(),
                selected_effect: 0,
            },
        };
        controller.regenerate_effects();
        Ok(controller)
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn inspected(&self) -> BattlerIndex {
        self.state.inspected()
    }

    /// Applies one frame of input. At most one navigation action is taken.
    pub fn tick<I: InputSource + ?Sized>(&mut self, input: &I) -> Step {
        let effect_count = self.state.effects.len();

        if input.is_triggered(Button::Back) {
            trace!("back");
            return Step::Finish(InfoAction::Cancelled);
        }

        if input.is_triggered(Button::Left) {
            self.cycle_combatant(false);
            Step::Continue(Refresh::Full)
        } else if input.is_triggered(Button::Right) {
            self.cycle_combatant(true);
            Step::Continue(Refresh::Full)
        } else if input.is_repeated(Button::Up) && effect_count > 1 {
            self.state.selected_effect = self
                .state
                .selected_effect
                .checked_sub(1)
                .unwrap_or(effect_count - 1);
            Step::Continue(Refresh::Partial)
        } else if input.is_repeated(Button::Down) && effect_count > 1 {
            self.state.selected_effect = (self.state.selected_effect + 1) % effect_count;
            Step::Continue(Refresh::Partial)
        } else if input.is_triggered(Button::JumpDown) {
            if self.accessor.command_window_visible() {
                Step::Finish(InfoAction::ConfirmWindow)
            } else if self.accessor.capture_allowed() {
                Step::Finish(InfoAction::ConfirmCapture)
            } else {
                trace!("confirm ignored: no command window and capture not allowed");
                Step::Continue(Refresh::None)
            }
        } else if input.is_triggered(Button::JumpUp) || input.is_triggered(Button::Use) {
            Step::Finish(self.switch_target())
        } else {
            Step::Continue(Refresh::None)
        }
    }

    fn cycle_combatant(&mut self, forward: bool) {
        let count = self.state.combatants.len();
        let current = self.state.selected_combatant;
        self.state.selected_combatant = if forward {
            (current + 1) % count
        } else {
            current.checked_sub(1).unwrap_or(count - 1)
        };
        self.regenerate_effects();
        trace!(
            combatant = %self.inspected(),
            effects = self.state.effects.len(),
            "inspecting"
        );
    }

    fn regenerate_effects(&mut self) {
        let index = self.inspected();
        self.state.effects = self
            .accessor
            .combatant(index)
            .map(|combatant| {
                self.producer
                    .generate_effects(self.accessor.state(), combatant)
            })
            .unwrap_or_default();
        self.state.selected_effect = 0;
    }

    fn switch_target(&self) -> InfoAction {
        let current = self.inspected();
        let (side, position) = if self.accessor.opposes(current) {
            let foes = self.accessor.opposing_side();
            (Side::Enemy, foes.iter().rev().position(|index| *index == current))
        } else {
            let allies = self.accessor.same_side();
            (Side::Ally, allies.iter().position(|index| *index == current))
        };
        // Fainted combatants hold no position; they fall back to the first.
        InfoAction::SwitchTo {
            side,
            position: position.unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{ButtonState, Buttons};
    use crate::services::effects::EffectEntry;
    use battle_core::{BattleState, Combatant, ElementType, Identity};

    struct Frame(ButtonState);

    impl InputSource for Frame {
        fn poll(&mut self) -> Result<()> {
            Ok(())
        }

        fn is_triggered(&self, button: Button) -> bool {
            self.0.is_triggered(button)
        }

        fn is_repeated(&self, button: Button) -> bool {
            self.0.is_repeated(button)
        }
    }

    fn press(buttons: Buttons) -> Frame {
        Frame(ButtonState::pressed(buttons))
    }

    fn held(buttons: Buttons) -> Frame {
        Frame(ButtonState::from_held(buttons, buttons))
    }

    /// Gives combatant `#n` exactly `n + 1` effect rows.
    struct CountingProducer;

    impl EffectProducer for CountingProducer {
        fn generate_effects(&self, _battle: &BattleState, combatant: &Combatant) -> EffectList {
            EffectList::from_entries(
                (0..=combatant.index.0).map(|i| EffectEntry::new(format!("Row {i}"), "--", "")),
            )
        }
    }

    fn battle(count: u8) -> BattleState {
        BattleState {
            combatants: (0..count)
                .map(|i| {
                    Combatant::new(
                        BattlerIndex(i),
                        Identity::new(format!("Mon {i}"), vec![ElementType::Normal]),
                        10,
                        40,
                    )
                })
                .collect(),
            ..BattleState::default()
        }
    }

    #[test]
    fn left_and_right_wrap_around() {
        let battle = battle(4);
        let order = battle.display_order();
        let mut nav =
            NavigationController::new(&battle, &CountingProducer, BattlerIndex(0), &order).unwrap();

        assert_eq!(nav.tick(&press(Buttons::LEFT)), Step::Continue(Refresh::Full));
        assert_eq!(nav.inspected(), BattlerIndex(3));
        assert_eq!(nav.state().effects.len(), 4);

        assert_eq!(nav.tick(&press(Buttons::RIGHT)), Step::Continue(Refresh::Full));
        assert_eq!(nav.inspected(), BattlerIndex(0));
    }

    #[test]
    fn switching_combatant_resets_effect_selection() {
        let battle = battle(4);
        let order = battle.display_order();
        let mut nav =
            NavigationController::new(&battle, &CountingProducer, BattlerIndex(2), &order).unwrap();
        nav.tick(&held(Buttons::DOWN));
        assert_eq!(nav.state().selected_effect, 1);

        nav.tick(&press(Buttons::RIGHT));
        assert_eq!(nav.inspected(), BattlerIndex(1));
        assert_eq!(nav.state().selected_effect, 0);
    }

    #[test]
    fn effect_selection_wraps_on_held_buttons() {
        let battle = battle(4);
        let order = battle.display_order();
        let mut nav =
            NavigationController::new(&battle, &CountingProducer, BattlerIndex(2), &order).unwrap();

        assert_eq!(nav.tick(&held(Buttons::UP)), Step::Continue(Refresh::Partial));
        assert_eq!(nav.state().selected_effect, 2);
        nav.tick(&held(Buttons::DOWN));
        assert_eq!(nav.state().selected_effect, 0);
    }

    #[test]
    fn single_effect_ignores_scrolling() {
        let battle = battle(2);
        let order = battle.display_order();
        let mut nav =
            NavigationController::new(&battle, &CountingProducer, BattlerIndex(0), &order).unwrap();
        assert_eq!(nav.tick(&held(Buttons::UP)), Step::Continue(Refresh::None));
        assert_eq!(nav.state().selected_effect, 0);
    }

    #[test]
    fn scroll_guard_falls_through_to_later_buttons() {
        let battle = battle(2);
        let order = battle.display_order();
        let mut nav =
            NavigationController::new(&battle, &CountingProducer, BattlerIndex(0), &order).unwrap();
        assert_eq!(
            nav.tick(&press(Buttons::UP | Buttons::USE)),
            Step::Finish(InfoAction::SwitchTo {
                side: Side::Ally,
                position: 0
            })
        );
    }

    #[test]
    fn back_wins_over_everything() {
        let battle = battle(2);
        let order = battle.display_order();
        let mut nav =
            NavigationController::new(&battle, &CountingProducer, BattlerIndex(0), &order).unwrap();
        let step = nav.tick(&press(Buttons::all()));
        assert_eq!(step, Step::Finish(InfoAction::Cancelled));
    }

    #[test]
    fn left_beats_right_in_the_same_frame() {
        let battle = battle(4);
        let order = battle.display_order();
        let mut nav =
            NavigationController::new(&battle, &CountingProducer, BattlerIndex(0), &order).unwrap();
        nav.tick(&press(Buttons::LEFT | Buttons::RIGHT));
        assert_eq!(nav.inspected(), BattlerIndex(3));
    }

    #[test]
    fn confirm_primary_prefers_command_window() {
        let mut battle = battle(2);
        battle.wild = true;
        battle.command_window_visible = true;
        let order = battle.display_order();
        let mut nav =
            NavigationController::new(&battle, &CountingProducer, BattlerIndex(1), &order).unwrap();
        assert_eq!(
            nav.tick(&press(Buttons::JUMP_DOWN)),
            Step::Finish(InfoAction::ConfirmWindow)
        );

        battle.command_window_visible = false;
        let mut nav =
            NavigationController::new(&battle, &CountingProducer, BattlerIndex(1), &order).unwrap();
        assert_eq!(
            nav.tick(&press(Buttons::JUMP_DOWN)),
            Step::Finish(InfoAction::ConfirmCapture)
        );

        battle.wild = false;
        let mut nav =
            NavigationController::new(&battle, &CountingProducer, BattlerIndex(1), &order).unwrap();
        assert_eq!(nav.tick(&press(Buttons::JUMP_DOWN)), Step::Continue(Refresh::None));
    }

    #[test]
    fn opposing_positions_count_from_the_far_end() {
        let battle = battle(6);
        let order = battle.display_order();
        let mut nav =
            NavigationController::new(&battle, &CountingProducer, BattlerIndex(1), &order).unwrap();
        assert_eq!(
            nav.tick(&press(Buttons::JUMP_UP)),
            Step::Finish(InfoAction::SwitchTo {
                side: Side::Enemy,
                position: 2
            })
        );
    }

    #[test]
    fn unknown_combatants_are_rejected() {
        let battle = battle(2);
        let result = NavigationController::new(
            &battle,
            &CountingProducer,
            BattlerIndex(0),
            &[BattlerIndex(0), BattlerIndex(7)],
        );
        assert!(matches!(result, Err(OverlayError::UnknownCombatant(BattlerIndex(7)))));
    }

    #[test]
    fn initial_combatant_must_be_listed() {
        let battle = battle(3);
        let result = NavigationController::new(
            &battle,
            &CountingProducer,
            BattlerIndex(2),
            &[BattlerIndex(0), BattlerIndex(1)],
        );
        assert!(matches!(result, Err(OverlayError::UnknownCombatant(BattlerIndex(2)))));
    }

    #[test]
    fn actions_read_as_outcomes() {
        assert_eq!(InfoAction::Cancelled.to_string(), "cancelled");
        let switch = InfoAction::SwitchTo {
            side: Side::Enemy,
            position: 1,
        };
        assert_eq!(switch.to_string(), "select enemy position 1");
    }
}
