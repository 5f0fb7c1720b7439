use std::collections::VecDeque;

use async_trait::async_trait;
use battle_core::{
    BattleState, BattlerIndex, Combatant, ConditionKind, EffectStore, EffectValue, ElementType,
    Identity, Side,
};
use client_frontend_core::{
    Asset, BattleAccessor, BattlerInfoOverlay, Button, ButtonState, Buttons,
    CatalogEffectProducer, Cue, DrawCommand, FrameClock, FrontendConfig, Indicator, InfoAction,
    InputSource, OverlayError, OverlayRenderer, Point, Result,
};

/// Replays one set of pressed buttons per frame, then presses Back.
struct ScriptedInput {
    script: VecDeque<Buttons>,
    current: ButtonState,
}

impl ScriptedInput {
    fn new(frames: impl IntoIterator<Item = Buttons>) -> Self {
        Self {
            script: frames.into_iter().collect(),
            current: ButtonState::default(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Result<()> {
        let next = self.script.pop_front().unwrap_or(Buttons::BACK);
        self.current = ButtonState::pressed(next);
        Ok(())
    }

    fn is_triggered(&self, button: Button) -> bool {
        self.current.is_triggered(button)
    }

    fn is_repeated(&self, button: Button) -> bool {
        self.current.is_repeated(button)
    }
}

#[derive(Default)]
struct RecordingRenderer {
    pending: Vec<DrawCommand>,
    frames: Vec<Vec<DrawCommand>>,
    cues: Vec<Cue>,
    indicators: Vec<(Indicator, bool, Point)>,
    fail_flush: bool,
}

impl OverlayRenderer for RecordingRenderer {
    fn clear(&mut self) {
        self.pending.clear();
    }

    fn draw(&mut self, commands: &[DrawCommand]) {
        self.pending.extend_from_slice(commands);
    }

    fn set_indicator(&mut self, indicator: Indicator, visible: bool, at: Point) {
        self.indicators.push((indicator, visible, at));
    }

    fn play(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    fn flush(&mut self) -> Result<()> {
        if self.fail_flush {
            return Err(OverlayError::Render(std::io::Error::other("display lost")));
        }
        self.frames.push(self.pending.clone());
        Ok(())
    }
}

#[derive(Default)]
struct CountingClock {
    frames: usize,
}

#[async_trait]
impl FrameClock for CountingClock {
    async fn next_frame(&mut self) {
        self.frames += 1;
    }
}

fn combatant(index: u8, name: &str) -> Combatant {
    Combatant::new(
        BattlerIndex(index),
        Identity::new(name, vec![ElementType::Normal]),
        30,
        90,
    )
}

fn triple_battle() -> BattleState {
    BattleState {
        combatants: vec![
            combatant(0, "Eevee"),
            combatant(1, "Rattata"),
            combatant(2, "Snorlax"),
            combatant(3, "Pidgey"),
            combatant(4, "Ditto"),
            combatant(5, "Meowth"),
        ],
        ..BattleState::default()
    }
}

fn images(frame: &[DrawCommand], asset: Asset) -> usize {
    frame
        .iter()
        .filter_map(DrawCommand::as_image)
        .filter(|image| image.asset == asset)
        .count()
}

async fn open(
    battle: &BattleState,
    initial: u8,
    input: &mut ScriptedInput,
    renderer: &mut RecordingRenderer,
) -> Result<InfoAction> {
    let producer = CatalogEffectProducer::default();
    let config = FrontendConfig::default();
    let overlay = BattlerInfoOverlay::new(battle, &producer, &config);
    let mut clock = CountingClock::default();
    overlay
        .open(
            BattlerIndex(initial),
            &battle.all_combatants(),
            input,
            renderer,
            &mut clock,
        )
        .await
}

#[tokio::test]
async fn indicators_bracket_the_session() {
    let battle = triple_battle();
    let mut input = ScriptedInput::new(Vec::new());
    let mut renderer = RecordingRenderer::default();

    let action = open(&battle, 0, &mut input, &mut renderer).await.unwrap();
    assert_eq!(action, InfoAction::Cancelled);

    assert_eq!(
        renderer.indicators,
        vec![
            (Indicator::LeftArrow, true, Point::new(-2, 71)),
            (Indicator::RightArrow, true, Point::new(474, 71)),
            (Indicator::LeftArrow, false, Point::new(-2, 71)),
            (Indicator::RightArrow, false, Point::new(474, 71)),
        ]
    );
    assert_eq!(images(&renderer.frames[0], Asset::BattlerIcon(BattlerIndex(0))), 1);
    assert!(renderer.cues.is_empty());
}

#[tokio::test]
async fn empty_effect_list_draws_no_rows() {
    let battle = triple_battle();
    let mut input = ScriptedInput::new([Buttons::UP, Buttons::DOWN]);
    let mut renderer = RecordingRenderer::default();

    open(&battle, 1, &mut input, &mut renderer).await.unwrap();

    let first = &renderer.frames[0];
    assert_eq!(images(first, Asset::Cursor), 0);
    assert_eq!(images(first, Asset::EffectsPanel), 0);
    assert_eq!(images(first, Asset::Slider), 0);
    // Scrolling an empty list is not a refresh.
    assert!(renderer.cues.is_empty());
    assert_eq!(renderer.frames.len(), 2);
}

#[tokio::test]
async fn selecting_third_ally_switches_to_its_position() {
    let battle = triple_battle();
    let mut input = ScriptedInput::new([Buttons::JUMP_UP]);
    let mut renderer = RecordingRenderer::default();

    let action = open(&battle, 4, &mut input, &mut renderer).await.unwrap();
    assert_eq!(
        action,
        InfoAction::SwitchTo {
            side: Side::Ally,
            position: 2
        }
    );
    assert_eq!(renderer.cues, vec![Cue::Decision]);
}

#[tokio::test]
async fn fainted_allies_do_not_take_a_position() {
    let mut battle = triple_battle();
    battle.combatants[0].hp = 0;
    let mut input = ScriptedInput::new([Buttons::JUMP_UP]);
    let mut renderer = RecordingRenderer::default();

    let action = open(&battle, 2, &mut input, &mut renderer).await.unwrap();
    assert_eq!(
        action,
        InfoAction::SwitchTo {
            side: Side::Ally,
            position: 0
        }
    );
}

#[tokio::test]
async fn fainted_combatants_still_navigate() {
    let mut battle = triple_battle();
    battle.combatants[2].hp = 0;
    let mut input = ScriptedInput::new([Buttons::RIGHT]);
    let mut renderer = RecordingRenderer::default();

    open(&battle, 0, &mut input, &mut renderer).await.unwrap();
    assert_eq!(images(&renderer.frames[1], Asset::BattlerIcon(BattlerIndex(2))), 1);
}

#[tokio::test]
async fn fainted_imprison_user_adds_no_row() {
    let mut battle = triple_battle();
    battle.combatants[1].effects =
        EffectStore::new().with(ConditionKind::Imprison, EffectValue::Flag(true));
    let mut renderer = RecordingRenderer::default();
    open(&battle, 0, &mut ScriptedInput::new(Vec::new()), &mut renderer).await.unwrap();
    assert_eq!(images(&renderer.frames[0], Asset::Cursor), 1);

    battle.combatants[1].hp = 0;
    let mut renderer = RecordingRenderer::default();
    open(&battle, 0, &mut ScriptedInput::new(Vec::new()), &mut renderer).await.unwrap();
    assert_eq!(images(&renderer.frames[0], Asset::Cursor), 0);
}

#[tokio::test]
async fn navigation_refreshes_with_cursor_cue() {
    let mut battle = triple_battle();
    battle.ally_side.effects = EffectStore::new()
        .with(ConditionKind::Reflect, EffectValue::Counter(5))
        .with(ConditionKind::LightScreen, EffectValue::Counter(3));
    let mut input = ScriptedInput::new([Buttons::DOWN, Buttons::RIGHT]);
    let mut renderer = RecordingRenderer::default();

    open(&battle, 0, &mut input, &mut renderer).await.unwrap();

    assert_eq!(renderer.cues, vec![Cue::Cursor, Cue::Cursor]);
    // Initial draw, two refreshes, then hiding the indicators.
    assert_eq!(renderer.frames.len(), 4);
    assert_eq!(images(&renderer.frames[1], Asset::Cursor), 2);
    assert_eq!(images(&renderer.frames[2], Asset::BattlerIcon(BattlerIndex(2))), 1);
}

#[tokio::test]
async fn renderer_failure_is_reported() {
    let battle = triple_battle();
    let mut input = ScriptedInput::new(Vec::new());
    let mut renderer = RecordingRenderer {
        fail_flush: true,
        ..RecordingRenderer::default()
    };

    let result = open(&battle, 0, &mut input, &mut renderer).await;
    assert!(matches!(result, Err(OverlayError::Render(_))));
    assert_eq!(renderer.indicators.last().map(|entry| entry.1), Some(false));
}

#[tokio::test]
async fn unknown_initial_combatant_fails_before_drawing() {
    let battle = triple_battle();
    let mut input = ScriptedInput::new(Vec::new());
    let mut renderer = RecordingRenderer::default();

    let producer = CatalogEffectProducer::default();
    let config = FrontendConfig::default();
    let overlay = BattlerInfoOverlay::new(&battle, &producer, &config);
    let mut clock = CountingClock::default();
    let result = overlay
        .open(
            BattlerIndex(9),
            &[BattlerIndex(9)],
            &mut input,
            &mut renderer,
            &mut clock,
        )
        .await;

    assert!(matches!(result, Err(OverlayError::UnknownCombatant(BattlerIndex(9)))));
    assert!(renderer.frames.is_empty());
    assert_eq!(clock.frames, 0);
}
