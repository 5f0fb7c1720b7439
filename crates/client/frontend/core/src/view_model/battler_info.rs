//! Left-hand panel: identity, HP, stats, typing and cosmetics.
use arrayvec::ArrayVec;
use battle_core::{
    BattleState, BattlerIndex, Combatant, ConditionKind, ElementType, Gender, Stat,
    StatusCondition,
};
use strum::IntoEnumIterator;

use super::layout::{
    ICON_X, ICON_Y, NATURE_LOWERED, NATURE_RAISED, PANEL_X, ROW_HEIGHT, XPOS, YPOS,
};
use crate::config::FrontendConfig;
use crate::render::{Asset, ColorPair, DrawCommand, ImageDraw, Rgb, TextAlign, TextDraw};

/// Width of a full HP bar, in pixels.
pub const HP_BAR_WIDTH: u32 = 96;
/// Longest move name shown untruncated.
const MOVE_NAME_LIMIT: usize = 16;
const MOVE_NAME_KEEP: usize = 13;
const MAX_CRIT_STAGE: i32 = 3;
const MAX_TYPES: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HpBar {
    /// Filled width; always even and at least 2.
    pub width: i32,
    /// 0 above half HP, 1 at or below half, 2 at or below a quarter.
    pub zone: u8,
}

impl HpBar {
    /// Bar for `hp` out of `total`; `None` once the combatant has fainted.
    pub fn new(hp: u32, total: u32) -> Option<Self> {
        if hp == 0 || total == 0 {
            return None;
        }
        let raw = (f64::from(hp) * f64::from(HP_BAR_WIDTH) / f64::from(total)).max(1.0);
        let width = ((raw / 2.0).round() * 2.0) as i32;

        let zone = if hp <= total / 4 {
            2
        } else if hp <= total / 2 {
            1
        } else {
            0
        };
        Some(Self { width, zone })
    }
}

/// Ability, item and exact HP, only shown for the player's own combatants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnerDetails {
    pub ability: String,
    pub item: String,
    pub hp_text: String,
}

/// Cosmetic icon of a wild combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cosmetic {
    ShinyLeaf,
    Small,
    Large,
    Mark,
}

impl Cosmetic {
    fn image(self, x: i32, y: i32) -> ImageDraw {
        match self {
            Cosmetic::ShinyLeaf => ImageDraw::new(Asset::ShinyLeaf, x + 12, y + 10),
            Cosmetic::Small => {
                ImageDraw::new(Asset::SizeIcon, x + 6, y + 2).with_source(0, 0, 28, 28)
            }
            Cosmetic::Large => {
                ImageDraw::new(Asset::SizeIcon, x + 6, y + 4).with_source(28, 0, 28, 28)
            }
            Cosmetic::Mark => {
                ImageDraw::new(Asset::MarkIcon, x + 6, y + 4).with_source(0, 0, 28, 28)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatRow {
    pub label: String,
    pub shadow: Rgb,
    /// Signed stage; one arrow is drawn per point.
    pub stage: i32,
}

/// Everything the left-hand panel shows for one combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattlerInfoView {
    pub index: BattlerIndex,
    pub name: String,
    pub level: String,
    pub last_move: String,
    pub turn: u32,
    /// Hidden for raid bosses.
    pub gender: Option<Gender>,
    /// Trainer name; wild combatants have none.
    pub trainer: Option<String>,
    pub hp_bar: Option<HpBar>,
    pub status: StatusCondition,
    pub shiny: bool,
    pub details: Option<OwnerDetails>,
    pub cosmetics: ArrayVec<Cosmetic, 3>,
    pub stats: Vec<StatRow>,
    pub types: ArrayVec<ElementType, MAX_TYPES>,
    pub tera_badge: Option<ElementType>,
    surface_width: i32,
}

impl BattlerInfoView {
    pub fn from_battle(
        battle: &BattleState,
        combatant: &Combatant,
        config: &FrontendConfig,
    ) -> Self {
        let shown = combatant.displayed_identity();

        Self {
            index: combatant.index,
            name: shown.name.clone(),
            level: if combatant.raid_boss {
                "???".to_string()
            } else {
                combatant.level.to_string()
            },
            last_move: move_label(combatant.last_move.as_deref()),
            turn: battle.turn_count + 1,
            gender: (!combatant.raid_boss).then_some(shown.gender),
            trainer: combatant.owner.clone(),
            hp_bar: HpBar::new(combatant.hp, combatant.total_hp),
            status: combatant.status,
            shiny: shown.shiny,
            details: combatant.owned_by_player.then(|| OwnerDetails {
                ability: combatant.ability.clone(),
                item: combatant.item.clone().unwrap_or_default(),
                hp_text: format!("{}/{}", combatant.hp, combatant.total_hp),
            }),
            cosmetics: cosmetics(combatant),
            stats: stat_rows(combatant),
            types: display_types(battle, combatant, config),
            tera_badge: tera_badge(battle, combatant),
            surface_width: config.surface_width,
        }
    }

    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        let mut images = vec![
            ImageDraw::new(Asset::InfoBackground, 0, 0),
            ImageDraw::new(Asset::InfoData, 0, 0),
            ImageDraw::new(Asset::LevelPlate, XPOS + 16, YPOS + 106),
        ];
        let mut texts = vec![
            TextDraw::new(&self.name, ICON_X + 82, ICON_Y - 20, TextAlign::Center, ColorPair::DARK),
            TextDraw::new(&self.level, XPOS + 38, YPOS + 104, TextAlign::Left, ColorPair::LIGHT),
            TextDraw::new(
                format!("Used: {}", self.last_move),
                XPOS + 349,
                YPOS + 104,
                TextAlign::Center,
                ColorPair::LIGHT,
            ),
            TextDraw::new(
                format!("Turn {}", self.turn),
                self.surface_width - XPOS - 32,
                YPOS + 8,
                TextAlign::Center,
                ColorPair::DARK,
            ),
        ];

        if let Some(gender) = self.gender {
            let column = i32::from(gender.icon_position()) * 22;
            images.push(
                ImageDraw::new(Asset::Gender, XPOS + 148, YPOS + 22).with_source(column, 0, 22, 22),
            );
        }

        if let Some(trainer) = &self.trainer {
            images.push(
                ImageDraw::new(Asset::OwnerPlate, XPOS - 34, YPOS + 6).with_source(0, 20, 128, 20),
            );
            texts.push(TextDraw::new(
                trainer,
                XPOS + 32,
                YPOS + 8,
                TextAlign::Center,
                ColorPair::DARK,
            ));
        }

        if let Some(bar) = self.hp_bar {
            images.push(ImageDraw::new(Asset::HpBar, 86, 86).with_source(
                0,
                i32::from(bar.zone) * 6,
                bar.width,
                6,
            ));
        }

        if let Some(row) = self.status.icon_position() {
            images.push(
                ImageDraw::new(Asset::Statuses, XPOS + 86, YPOS + 104)
                    .with_source(0, i32::from(row) * 16, 44, 16),
            );
        }

        if self.shiny {
            images.push(ImageDraw::new(Asset::ShinyMark, XPOS + 142, YPOS + 102));
        }

        if let Some(details) = &self.details {
            images.extend([
                ImageDraw::new(Asset::OwnerPlate, XPOS + 36, ICON_Y + 10)
                    .with_source(0, 0, 128, 20),
                ImageDraw::new(Asset::Cursor, PANEL_X, 62).with_source(0, 0, 218, 26),
                ImageDraw::new(Asset::Cursor, PANEL_X, 86).with_source(0, 0, 218, 26),
            ]);
            texts.extend([
                TextDraw::new("Abil.", XPOS + 272, YPOS + 44, TextAlign::Center, ColorPair::LIGHT),
                TextDraw::new("Item", XPOS + 272, YPOS + 68, TextAlign::Center, ColorPair::LIGHT),
                TextDraw::new(
                    &details.ability,
                    XPOS + 376,
                    YPOS + 44,
                    TextAlign::Center,
                    ColorPair::DARK,
                ),
                TextDraw::new(
                    &details.item,
                    XPOS + 376,
                    YPOS + 68,
                    TextAlign::Center,
                    ColorPair::DARK,
                ),
                TextDraw::new(
                    &details.hp_text,
                    ICON_X + 74,
                    ICON_Y + 12,
                    TextAlign::Center,
                    ColorPair::LIGHT,
                ),
            ]);
        }

        self.push_cosmetics(&mut images);
        self.push_stats(&mut images, &mut texts);

        let mut commands: Vec<DrawCommand> = images.into_iter().map(DrawCommand::from).collect();
        commands.extend(texts.into_iter().map(DrawCommand::from));
        commands.push(ImageDraw::new(Asset::BattlerIcon(self.index), ICON_X, ICON_Y).into());
        self.push_types(&mut commands);
        commands
    }

    fn push_cosmetics(&self, images: &mut Vec<ImageDraw>) {
        if self.cosmetics.is_empty() {
            return;
        }
        let base_x = XPOS + 328 - (self.cosmetics.len() as i32 - 1) * 26;
        let base_y = YPOS + 42;
        for (slot, cosmetic) in self.cosmetics.iter().enumerate() {
            let x = base_x + 50 * slot as i32;
            images.push(ImageDraw::new(Asset::ExtraSlot, x, base_y));
            images.push(cosmetic.image(x, base_y));
        }
    }

    fn push_stats(&self, images: &mut Vec<ImageDraw>, texts: &mut Vec<TextDraw>) {
        for (row, stat) in self.stats.iter().enumerate() {
            let y = YPOS + row as i32 * ROW_HEIGHT;
            texts.push(TextDraw::new(
                &stat.label,
                XPOS + 16,
                y + 138,
                TextAlign::Left,
                ColorPair::LIGHT.with_shadow(stat.shadow),
            ));
            let column = if stat.stage > 0 { 0 } else { 18 };
            for step in 0..stat.stage.abs() {
                images.push(
                    ImageDraw::new(Asset::StatArrows, XPOS + 110 + step * 18, y + 136)
                        .with_source(column, 0, 18, 18),
                );
            }
        }
    }

    fn push_types(&self, commands: &mut Vec<DrawCommand>) {
        let top = if self.types.len() >= MAX_TYPES {
            YPOS + 6
        } else {
            YPOS + 34
        };
        for (slot, element) in self.types.iter().enumerate() {
            let row = i32::from(element.icon_position()) * 28;
            commands.push(
                ImageDraw::new(Asset::Types, XPOS + 170, top + slot as i32 * 30)
                    .with_source(0, row, 64, 28)
                    .into(),
            );
        }

        if let Some(tera_type) = self.tera_badge {
            let row = i32::from(tera_type.icon_position()) * 32;
            commands.push(ImageDraw::new(Asset::ExtraSlot, XPOS + 182, YPOS + 95).into());
            commands.push(
                ImageDraw::new(Asset::TeraTypes, XPOS + 186, YPOS + 97)
                    .with_source(0, row, 32, 32)
                    .into(),
            );
        }
    }
}

fn move_label(name: Option<&str>) -> String {
    match name {
        None => "---".to_string(),
        Some(name) if name.chars().count() > MOVE_NAME_LIMIT => {
            let kept: String = name.chars().take(MOVE_NAME_KEEP).collect();
            format!("{kept}...")
        }
        Some(name) => name.to_string(),
    }
}

fn cosmetics(combatant: &Combatant) -> ArrayVec<Cosmetic, 3> {
    let mut icons = ArrayVec::new();
    if !combatant.is_wild() {
        return icons;
    }
    let cosmetics = combatant.cosmetics;
    if cosmetics.shiny_leaves > 0 {
        icons.push(Cosmetic::ShinyLeaf);
    }
    match cosmetics.size_scale {
        Some(0..=59) => icons.push(Cosmetic::Small),
        Some(196..=255) => icons.push(Cosmetic::Large),
        _ => {}
    }
    if cosmetics.marked {
        icons.push(Cosmetic::Mark);
    }
    icons
}

fn stat_rows(combatant: &Combatant) -> Vec<StatRow> {
    let mut rows: Vec<StatRow> = Stat::iter()
        .map(|stat| {
            let shadow = match combatant.nature.direction(stat) {
                _ if !combatant.owned_by_player => ColorPair::LIGHT.shadow,
                1 => NATURE_RAISED,
                -1 => NATURE_LOWERED,
                _ => ColorPair::LIGHT.shadow,
            };
            StatRow {
                label: stat.to_string(),
                shadow,
                stage: i32::from(combatant.stages.get(stat)),
            }
        })
        .collect();

    let focus = combatant.effects.counter(ConditionKind::FocusEnergy);
    rows.push(StatRow {
        label: "Crit. Hit".to_string(),
        shadow: ColorPair::LIGHT.shadow,
        stage: focus.clamp(0, MAX_CRIT_STAGE),
    });
    rows
}

fn display_types(
    battle: &BattleState,
    combatant: &Combatant,
    config: &FrontendConfig,
) -> ArrayVec<ElementType, MAX_TYPES> {
    let illusion = combatant
        .disguise
        .as_ref()
        .filter(|_| !combatant.owned_by_player);

    let with_extra = |mut types: Vec<ElementType>| {
        if let Some(extra) = combatant.extra_type
            && !types.contains(&extra)
        {
            types.push(extra);
        }
        types
    };

    let types = match illusion {
        Some(disguise) if combatant.is_terastallized() => disguise.types.clone(),
        Some(disguise) => with_extra(disguise.types.clone()),
        None => with_extra(combatant.types.clone()),
    };

    let unknown_species = !config.show_new_species_types
        && battle.internal
        && !combatant.owned_by_player
        && !combatant.species_known;

    if unknown_species || types.is_empty() {
        return [ElementType::Unknown].into_iter().collect();
    }
    types.into_iter().take(MAX_TYPES).collect()
}

fn tera_badge(battle: &BattleState, combatant: &Combatant) -> Option<ElementType> {
    let shown = combatant.is_terastallized()
        || (combatant.tera.tera_type.is_some()
            && combatant.tera.available
            && (!battle.internal || !combatant.opposes()));
    shown.then(|| combatant.tera.tera_type.unwrap_or(ElementType::Unknown))
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{Cosmetics, Identity, NatureShift, StatStages, TeraState};

    fn pikachu(index: u8) -> Combatant {
        Combatant::new(
            BattlerIndex(index),
            Identity::new("Pikachu", vec![ElementType::Electric]),
            25,
            60,
        )
    }

    fn view(battle: &BattleState, combatant: &Combatant) -> BattlerInfoView {
        BattlerInfoView::from_battle(battle, combatant, &FrontendConfig::default())
    }

    fn images(commands: &[DrawCommand], asset: Asset) -> Vec<ImageDraw> {
        commands
            .iter()
            .filter_map(DrawCommand::as_image)
            .filter(|image| image.asset == asset)
            .copied()
            .collect()
    }

    fn has_text(commands: &[DrawCommand], text: &str) -> bool {
        commands
            .iter()
            .filter_map(DrawCommand::as_text)
            .any(|draw| draw.text == text)
    }

    #[test]
    fn hp_bar_rounds_to_even_widths_and_zones() {
        assert_eq!(HpBar::new(60, 60), Some(HpBar { width: 96, zone: 0 }));
        assert_eq!(HpBar::new(30, 60), Some(HpBar { width: 48, zone: 1 }));
        assert_eq!(HpBar::new(37, 120), Some(HpBar { width: 30, zone: 1 }));
        assert_eq!(HpBar::new(1, 100), Some(HpBar { width: 2, zone: 2 }));
        assert_eq!(HpBar::new(0, 100), None);
    }

    #[test]
    fn long_move_names_are_truncated() {
        assert_eq!(move_label(None), "---");
        assert_eq!(move_label(Some("Thunderbolt")), "Thunderbolt");
        assert_eq!(move_label(Some("Sixteen Letters!")), "Sixteen Letters!");
        assert_eq!(move_label(Some("Double Iron Bash Extra")), "Double Iron B...");
    }

    #[test]
    fn raid_bosses_hide_level_and_gender() {
        let battle = BattleState::default();
        let mut boss = pikachu(1);
        boss.raid_boss = true;
        let info = view(&battle, &boss);
        assert_eq!(info.level, "???");
        assert!(info.gender.is_none());
        assert!(images(&info.draw_commands(), Asset::Gender).is_empty());
    }

    #[test]
    fn player_combatants_show_details_and_nature_colors() {
        let battle = BattleState::default();
        let mut own = pikachu(0);
        own.owned_by_player = true;
        own.owner = Some("Red".to_string());
        own.ability = "Static".to_string();
        own.nature = NatureShift::new(Stat::Speed, Stat::Attack);
        own.hp = 42;

        let info = view(&battle, &own);
        let details = info.details.as_ref().unwrap();
        assert_eq!(details.hp_text, "42/60");
        assert_eq!(details.item, "");

        let speed = info.stats.iter().find(|row| row.label == "Speed").unwrap();
        assert_eq!(speed.shadow, NATURE_RAISED);
        let attack = info.stats.iter().find(|row| row.label == "Attack").unwrap();
        assert_eq!(attack.shadow, NATURE_LOWERED);

        let commands = info.draw_commands();
        assert!(has_text(&commands, "Abil."));
        assert!(has_text(&commands, "Static"));
        assert_eq!(images(&commands, Asset::OwnerPlate).len(), 2);
        assert_eq!(images(&commands, Asset::Cursor).len(), 2);
    }

    #[test]
    fn foes_keep_plain_stat_colors() {
        let battle = BattleState::default();
        let mut foe = pikachu(1);
        foe.nature = NatureShift::new(Stat::Speed, Stat::Attack);
        let info = view(&battle, &foe);
        assert!(info.stats.iter().all(|row| row.shadow == ColorPair::LIGHT.shadow));
        assert!(info.details.is_none());
    }

    #[test]
    fn stages_draw_one_arrow_each() {
        let battle = BattleState::default();
        let mut foe = pikachu(1);
        foe.stages = StatStages::default()
            .with(Stat::Attack, 2)
            .with(Stat::Speed, -1);
        foe.effects = foe
            .effects
            .with(ConditionKind::FocusEnergy, battle_core::EffectValue::Counter(4));

        let info = view(&battle, &foe);
        assert_eq!(info.stats.len(), 8);
        assert_eq!(info.stats[7].stage, 3);

        let arrows = images(&info.draw_commands(), Asset::StatArrows);
        assert_eq!(arrows.len(), 6);
        let speed_arrow = arrows
            .iter()
            .find(|image| image.at.y == YPOS + 4 * ROW_HEIGHT + 136)
            .unwrap();
        assert_eq!(speed_arrow.source.unwrap().x, 18);
    }

    #[test]
    fn wild_cosmetics_are_laid_out_right_to_left() {
        let battle = BattleState::default();
        let mut wild = pikachu(1);
        wild.cosmetics = Cosmetics {
            shiny_leaves: 2,
            size_scale: Some(220),
            marked: false,
        };
        let info = view(&battle, &wild);
        assert_eq!(info.cosmetics.as_slice(), &[Cosmetic::ShinyLeaf, Cosmetic::Large]);

        let commands = info.draw_commands();
        let slots = images(&commands, Asset::ExtraSlot);
        assert_eq!(slots[0].at.x, XPOS + 328 - 26);
        assert_eq!(slots[1].at.x, XPOS + 328 + 24);
        let size = images(&commands, Asset::SizeIcon);
        assert_eq!(size[0].at.x, slots[1].at.x + 6);
    }

    #[test]
    fn trainer_combatants_have_no_cosmetics() {
        let battle = BattleState::default();
        let mut trained = pikachu(1);
        trained.owner = Some("Blue".to_string());
        trained.cosmetics.marked = true;
        let info = view(&battle, &trained);
        assert!(info.cosmetics.is_empty());
        assert!(has_text(&info.draw_commands(), "Blue"));
    }

    #[test]
    fn illusion_shows_disguise_typing_to_the_viewer() {
        let battle = BattleState::default();
        let mut zoroark = Combatant::new(
            BattlerIndex(1),
            Identity::new("Zoroark", vec![ElementType::Dark]),
            50,
            120,
        );
        zoroark.disguise = Some(Identity::new(
            "Lapras",
            vec![ElementType::Water, ElementType::Ice],
        ));
        zoroark.extra_type = Some(ElementType::Ghost);

        let info = view(&battle, &zoroark);
        assert_eq!(info.name, "Lapras");
        assert_eq!(
            info.types.as_slice(),
            &[ElementType::Water, ElementType::Ice, ElementType::Ghost]
        );
        let icons = images(&info.draw_commands(), Asset::Types);
        assert_eq!(icons[0].at.y, YPOS + 6);
    }

    #[test]
    fn unknown_species_show_question_marks() {
        let battle = BattleState {
            internal: true,
            ..BattleState::default()
        };
        let foe = pikachu(1);
        assert_eq!(view(&battle, &foe).types.as_slice(), &[ElementType::Unknown]);

        let config = FrontendConfig {
            show_new_species_types: true,
            ..FrontendConfig::default()
        };
        let info = BattlerInfoView::from_battle(&battle, &foe, &config);
        assert_eq!(info.types.as_slice(), &[ElementType::Electric]);
    }

    #[test]
    fn tera_badge_hidden_for_foes_in_internal_battles() {
        let mut battle = BattleState::default();
        let mut foe = pikachu(1);
        foe.tera = TeraState {
            tera_type: Some(ElementType::Fairy),
            active: false,
            available: true,
        };
        assert_eq!(view(&battle, &foe).tera_badge, Some(ElementType::Fairy));

        battle.internal = true;
        assert_eq!(view(&battle, &foe).tera_badge, None);

        foe.tera.active = true;
        assert_eq!(view(&battle, &foe).tera_badge, Some(ElementType::Fairy));
    }
}
