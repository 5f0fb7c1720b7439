//! Effect rows listed in the overlay's effects panel.
//!
//! [`CatalogEffectProducer`] walks the battle snapshot in a fixed order
//! (special states, weather, terrain, cross-battler conditions, then every
//! registered condition) and formats each active one through the condition
//! catalog.
use battle_content::{
    ConditionCatalog, ConditionRegistry, ConditionSpec, Description, HailStyle, MoveSlot,
    NO_COUNTER, Visibility, terrain_text, weather_text,
};
use battle_core::{
    BattleState, Combatant, ConditionKind, ConditionScope, EffectStore, EffectValue, ElementType,
    ValueKind,
};

/// Turns a Dynamax lasts.
pub const DYNAMAX_TURNS: u8 = 3;
/// Turns weather and terrain last when set by a move.
pub const FIELD_TURNS: u8 = 5;

/// One row of the effects panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectEntry {
    pub label: String,
    /// Turn counter column, `--` when there is nothing to count.
    pub counter: String,
    pub description: String,
}

impl EffectEntry {
    pub fn new(
        label: impl Into<String>,
        counter: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            counter: counter.into(),
            description: description.into(),
        }
    }
}

/// Ordered, duplicate-free effect rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectList {
    entries: Vec<EffectEntry>,
}

impl EffectList {
    /// Keeps the first occurrence of every identical row.
    pub fn from_entries(entries: impl IntoIterator<Item = EffectEntry>) -> Self {
        let mut unique: Vec<EffectEntry> = Vec::new();
        for entry in entries {
            if !unique.contains(&entry) {
                unique.push(entry);
            }
        }
        Self { entries: unique }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&EffectEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EffectEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[EffectEntry] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a EffectList {
    type Item = &'a EffectEntry;
    type IntoIter = std::slice::Iter<'a, EffectEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Produces the effect rows of one combatant.
pub trait EffectProducer {
    fn generate_effects(&self, battle: &BattleState, combatant: &Combatant) -> EffectList;
}

/// Effect producer driven by a condition catalog and registry.
#[derive(Clone, Debug, Default)]
pub struct CatalogEffectProducer {
    catalog: ConditionCatalog,
    registry: ConditionRegistry,
    hail_style: HailStyle,
}

impl CatalogEffectProducer {
    pub fn new(catalog: ConditionCatalog, registry: ConditionRegistry) -> Self {
        Self {
            catalog,
            registry,
            hail_style: HailStyle::default(),
        }
    }

    pub fn with_hail_style(mut self, hail_style: HailStyle) -> Self {
        self.hail_style = hail_style;
        self
    }

    pub fn catalog(&self) -> &ConditionCatalog {
        &self.catalog
    }

    pub fn registry(&self) -> &ConditionRegistry {
        &self.registry
    }

    fn special_states(&self, combatant: &Combatant, rows: &mut Vec<EffectEntry>) {
        if let Some(threshold) = combatant.damage_threshold {
            rows.push(EffectEntry::new(
                "Damage Gate",
                NO_COUNTER,
                format!("The Pokémon's HP won't fall below {threshold}% when attacked."),
            ));
        }

        if let Some(turns) = combatant.dynamax_turns {
            let counter = if turns > 0 && !combatant.raid_boss {
                format!("{turns}/{DYNAMAX_TURNS}")
            } else {
                NO_COUNTER.to_string()
            };
            rows.push(EffectEntry::new(
                "Dynamax",
                counter,
                "The Pokémon is in the Dynamax state.",
            ));
        } else if combatant.is_terastallized() {
            let tera_type = combatant.tera.tera_type.unwrap_or(ElementType::Unknown);
            rows.push(EffectEntry::new(
                "Terastallization",
                NO_COUNTER,
                format!("The Pokémon is Terastallized into the {tera_type} type."),
            ));
        }
    }

    fn field_rows(&self, battle: &BattleState, combatant: &Combatant, rows: &mut Vec<EffectEntry>) {
        let weather = battle.effective_weather(combatant);
        if let Some(text) = weather_text(weather, self.hail_style) {
            let duration = if weather == battle.field.weather {
                battle.field.weather_duration
            } else {
                0
            };
            rows.push(EffectEntry::new(
                text.label,
                field_counter(duration),
                text.description,
            ));
        }

        if combatant.grounded
            && let Some(text) = terrain_text(battle.field.terrain)
        {
            rows.push(EffectEntry::new(
                text.label,
                field_counter(battle.field.terrain_duration),
                text.description,
            ));
        }
    }

    fn cross_battler_rows(
        &self,
        battle: &BattleState,
        combatant: &Combatant,
        rows: &mut Vec<EffectEntry>,
    ) {
        let mut shared = Vec::new();
        if any_combatant(battle, |effects| effects.is_active(ConditionKind::Imprison)) {
            shared.push(ConditionKind::Imprison);
        }
        if any_combatant(battle, |effects| effects.counter(ConditionKind::Uproar) > 0) {
            shared.push(ConditionKind::Uproar);
        }
        if any_combatant(battle, |effects| {
            effects
                .get(ConditionKind::JawLock)
                .and_then(|value| value.battler())
                == Some(combatant.index)
        }) {
            shared.push(ConditionKind::JawLock);
        }

        for kind in shared {
            if let Some(spec) = self.catalog.spec(kind) {
                rows.push(EffectEntry::new(
                    &spec.label,
                    NO_COUNTER,
                    describe(spec, battle, combatant, EffectValue::Flag(true)),
                ));
            }
        }
    }

    fn registered_rows(
        &self,
        battle: &BattleState,
        combatant: &Combatant,
        rows: &mut Vec<EffectEntry>,
    ) {
        for (scope, value_kind, kind) in self.registry.iter() {
            let Some(spec) = self.catalog.spec(kind) else {
                continue;
            };
            let Some(value) =
                scoped_store(battle, combatant, scope).and_then(|store| store.get(kind))
            else {
                continue;
            };
            if !value.is_active_as(value_kind) {
                continue;
            }
            if spec.visibility == Visibility::SemiInvulnerable && !combatant.semi_invulnerable {
                continue;
            }

            let number = value.number();
            let counter = if value_kind == ValueKind::Counter && number < 0 {
                NO_COUNTER.to_string()
            } else {
                spec.counter.format(number)
            };
            rows.push(EffectEntry::new(
                &spec.label,
                counter,
                describe(spec, battle, combatant, value),
            ));
        }
    }
}

impl EffectProducer for CatalogEffectProducer {
    fn generate_effects(&self, battle: &BattleState, combatant: &Combatant) -> EffectList {
        let mut rows = Vec::new();
        self.special_states(combatant, &mut rows);
        self.field_rows(battle, combatant, &mut rows);
        self.cross_battler_rows(battle, combatant, &mut rows);
        self.registered_rows(battle, combatant, &mut rows);
        EffectList::from_entries(rows)
    }
}

/// Whether a standing combatant's own effects pass `test`.
fn any_combatant(battle: &BattleState, test: impl Fn(&EffectStore) -> bool) -> bool {
    battle
        .combatants
        .iter()
        .filter(|other| !other.is_fainted())
        .any(|other| test(&other.effects))
}

fn field_counter(duration: u8) -> String {
    if duration > 0 {
        format!("{duration}/{FIELD_TURNS}")
    } else {
        NO_COUNTER.to_string()
    }
}

fn scoped_store<'a>(
    battle: &'a BattleState,
    combatant: &'a Combatant,
    scope: ConditionScope,
) -> Option<&'a EffectStore> {
    match scope {
        ConditionScope::Field => Some(&battle.field.effects),
        ConditionScope::Team => Some(&battle.side(combatant.side()).effects),
        ConditionScope::Position => battle.position(combatant.index).map(|p| &p.effects),
        ConditionScope::Battler => Some(&combatant.effects),
    }
}

fn describe(
    spec: &ConditionSpec,
    battle: &BattleState,
    combatant: &Combatant,
    value: EffectValue,
) -> String {
    match &spec.description {
        Description::Text(text) => text.clone(),
        Description::WithBattler(template) => {
            let name = value
                .battler()
                .and_then(|index| battle.combatant(index))
                .map(|target| target.displayed_identity().name.as_str())
                .unwrap_or("???");
            template.replace("{battler}", name)
        }
        Description::WithMove { template, slot } => {
            let held = match slot {
                MoveSlot::Encore => combatant.encore_move.as_deref(),
                MoveSlot::Disable => combatant.disable_move.as_deref(),
            };
            template
                .replace("{label}", &spec.label)
                .replace("{move}", held.unwrap_or("---"))
        }
        Description::ByType {
            element,
            when,
            otherwise,
        } => {
            if combatant.has_type(*element) {
                when.clone()
            } else {
                otherwise.clone()
            }
        }
        Description::Weight(template) => {
            let change = if value.number() > 0 {
                "increased"
            } else {
                "decreased"
            };
            template.replace("{change}", change)
        }
    }
}
