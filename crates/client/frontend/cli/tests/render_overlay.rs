use battle_core::{
    BattleState, BattlerIndex, Combatant, ConditionKind, EffectStore, EffectValue, ElementType,
    Identity,
};
use client_frontend_cli::{CellSize, TerminalRenderer};
use client_frontend_core::{
    CatalogEffectProducer, EffectProducer, FrontendConfig, OverlayRenderer,
    view_model::{BattlerInfoView, EffectsPanelView},
};
use ratatui::{Terminal, backend::TestBackend};

fn battle() -> BattleState {
    let mut eevee = Combatant::new(
        BattlerIndex(0),
        Identity::new("Eevee", vec![ElementType::Normal]),
        25,
        60,
    );
    eevee.owned_by_player = true;

    let mut battle = BattleState {
        combatants: vec![
            eevee,
            Combatant::new(
                BattlerIndex(1),
                Identity::new("Pidgey", vec![ElementType::Normal, ElementType::Flying]),
                20,
                40,
            ),
        ],
        ..BattleState::default()
    };
    battle.ally_side.effects =
        EffectStore::new().with(ConditionKind::Reflect, EffectValue::Counter(5));
    battle
}

fn screen(renderer: &TerminalRenderer<TestBackend>) -> Vec<String> {
    let buffer = renderer.terminal().backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect()
        })
        .collect()
}

#[test]
fn full_overlay_frame_fits_the_terminal() {
    let battle = battle();
    let config = FrontendConfig::default();
    let combatant = battle.combatant(BattlerIndex(0)).unwrap();
    let effects = CatalogEffectProducer::default().generate_effects(&battle, combatant);

    let info = BattlerInfoView::from_battle(&battle, combatant, &config);
    let panel = EffectsPanelView::new(&effects, 0);

    let terminal = Terminal::new(TestBackend::new(64, 24)).unwrap();
    let mut renderer = TerminalRenderer::new(terminal, CellSize::default(), config.surface_width);
    renderer.clear();
    renderer.draw(&info.draw_commands());
    renderer.draw(&panel.draw_commands());
    renderer.flush().unwrap();

    let rows = screen(&renderer);
    assert!(rows.iter().any(|row| row.contains("Eevee")));
    assert!(rows.iter().any(|row| row.contains("Turn 1")));
    assert!(rows.iter().any(|row| row.contains("Reflect")));
    assert!(rows.iter().any(|row| row.contains("NORMAL")));
    assert!(rows.iter().any(|row| row.contains("[#0]")));
}
