//! Frame loop of the battler info overlay.
use battle_core::BattlerIndex;
use tracing::{debug, info};

use crate::accessor::BattleAccessor;
use crate::clock::FrameClock;
use crate::config::FrontendConfig;
use crate::error::{OverlayError, Result};
use crate::input::InputSource;
use crate::navigation::{InfoAction, NavigationController, Refresh, Step};
use crate::render::{Cue, DrawCommand, Indicator, OverlayRenderer};
use crate::services::effects::EffectProducer;
use crate::view_model::layout::{left_indicator, right_indicator};
use crate::view_model::{BattlerInfoView, EffectsPanelView};

/// Inspects combatants of one battle until the player leaves.
pub struct BattlerInfoOverlay<'a, A: ?Sized, P: ?Sized> {
    accessor: &'a A,
    producer: &'a P,
    config: &'a FrontendConfig,
}

impl<'a, A, P> BattlerInfoOverlay<'a, A, P>
where
    A: BattleAccessor + ?Sized,
    P: EffectProducer + ?Sized,
{
    pub fn new(accessor: &'a A, producer: &'a P, config: &'a FrontendConfig) -> Self {
        Self {
            accessor,
            producer,
            config,
        }
    }

    /// Opens the overlay on `initial` and runs until it closes.
    ///
    /// Each frame polls input once, applies at most one navigation action,
    /// redraws when needed, then waits on `clock`. The indicators are shown
    /// for the whole session and hidden again on the way out, also when a
    /// collaborator fails.
    pub async fn open<I, R, C>(
        &self,
        initial: BattlerIndex,
        combatants: &[BattlerIndex],
        input: &mut I,
        renderer: &mut R,
        clock: &mut C,
    ) -> Result<InfoAction>
    where
        I: InputSource + ?Sized,
        R: OverlayRenderer + ?Sized,
        C: FrameClock + ?Sized,
    {
        let mut controller =
            NavigationController::new(self.accessor, self.producer, initial, combatants)?;
        info!(
            combatant = %initial,
            combatants = controller.state().combatants.len(),
            "battler info opened"
        );

        let outcome = self.run(&mut controller, input, renderer, clock).await;

        self.set_indicators(renderer, false);
        let hidden = renderer.flush();

        let action = outcome?;
        hidden?;
        info!(?action, combatant = %controller.inspected(), "battler info closed");
        Ok(action)
    }

    async fn run<I, R, C>(
        &self,
        controller: &mut NavigationController<'a, A, P>,
        input: &mut I,
        renderer: &mut R,
        clock: &mut C,
    ) -> Result<InfoAction>
    where
        I: InputSource + ?Sized,
        R: OverlayRenderer + ?Sized,
        C: FrameClock + ?Sized,
    {
        self.redraw(controller, renderer)?;
        self.set_indicators(renderer, true);
        renderer.flush()?;

        loop {
            clock.next_frame().await;
            input.poll()?;

            match controller.tick(&*input) {
                Step::Finish(action) => {
                    if matches!(action, InfoAction::SwitchTo { .. }) {
                        renderer.play(Cue::Decision);
                    }
                    return Ok(action);
                }
                Step::Continue(Refresh::None) => {}
                Step::Continue(refresh) => {
                    debug!(
                        ?refresh,
                        combatant = %controller.inspected(),
                        effect = controller.state().selected_effect,
                        "refreshing battler info"
                    );
                    renderer.play(Cue::Cursor);
                    self.redraw(controller, renderer)?;
                    renderer.flush()?;
                }
            }
        }
    }

    fn redraw<R>(&self, controller: &NavigationController<'a, A, P>, renderer: &mut R) -> Result<()>
    where
        R: OverlayRenderer + ?Sized,
    {
        let state = controller.state();
        let index = state.inspected();
        let combatant = self
            .accessor
            .combatant(index)
            .ok_or(OverlayError::UnknownCombatant(index))?;

        let info = BattlerInfoView::from_battle(self.accessor.state(), combatant, self.config);
        let panel = EffectsPanelView::new(&state.effects, state.selected_effect);

        let mut commands: Vec<DrawCommand> = info.draw_commands();
        commands.extend(panel.draw_commands());

        renderer.clear();
        renderer.draw(&commands);
        Ok(())
    }

    fn set_indicators<R>(&self, renderer: &mut R, visible: bool)
    where
        R: OverlayRenderer + ?Sized,
    {
        renderer.set_indicator(Indicator::LeftArrow, visible, left_indicator());
        renderer.set_indicator(
            Indicator::RightArrow,
            visible,
            right_indicator(self.config.surface_width),
        );
    }
}
