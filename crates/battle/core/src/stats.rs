//! Battle stats and stat stages.

/// Stats that can be raised or lowered in battle.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Stat {
    Attack,
    Defense,
    #[strum(to_string = "Sp. Atk")]
    SpecialAttack,
    #[strum(to_string = "Sp. Def")]
    SpecialDefense,
    Speed,
    Accuracy,
    Evasion,
}

/// Lowest and highest stage a stat can sit at.
pub const STAGE_LIMIT: i8 = 6;

/// Stage modifiers for every battle stat, each in `-6..=6`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatStages {
    pub attack: i8,
    pub defense: i8,
    pub special_attack: i8,
    pub special_defense: i8,
    pub speed: i8,
    pub accuracy: i8,
    pub evasion: i8,
}

impl StatStages {
    pub fn get(&self, stat: Stat) -> i8 {
        match stat {
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
            Stat::Accuracy => self.accuracy,
            Stat::Evasion => self.evasion,
        }
    }

    /// Sets a stage, clamped to the legal range.
    pub fn set(&mut self, stat: Stat, stage: i8) {
        let stage = stage.clamp(-STAGE_LIMIT, STAGE_LIMIT);
        let slot = match stat {
            Stat::Attack => &mut self.attack,
            Stat::Defense => &mut self.defense,
            Stat::SpecialAttack => &mut self.special_attack,
            Stat::SpecialDefense => &mut self.special_defense,
            Stat::Speed => &mut self.speed,
            Stat::Accuracy => &mut self.accuracy,
            Stat::Evasion => &mut self.evasion,
        };
        *slot = stage;
    }

    pub fn with(mut self, stat: Stat, stage: i8) -> Self {
        self.set(stat, stage);
        self
    }
}

/// Which stats a nature raises and lowers. Neutral natures leave both empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NatureShift {
    pub raised: Option<Stat>,
    pub lowered: Option<Stat>,
}

impl NatureShift {
    pub const NEUTRAL: Self = Self {
        raised: None,
        lowered: None,
    };

    pub const fn new(raised: Stat, lowered: Stat) -> Self {
        Self {
            raised: Some(raised),
            lowered: Some(lowered),
        }
    }

    /// Direction of the nature's effect on `stat`: positive, negative or zero.
    pub fn direction(&self, stat: Stat) -> i8 {
        if self.raised == self.lowered {
            return 0;
        }
        if self.raised == Some(stat) {
            1
        } else if self.lowered == Some(stat) {
            -1
        } else {
            0
        }
    }
}
