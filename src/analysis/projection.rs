use crate::api::models::{Champion, ChampionStats};

pub const MIN_LEVEL: u32 = 1;
pub const MAX_LEVEL: u32 = 18;
pub const DEFAULT_LEVEL: u32 = 18;

/// Stats of a champion at a given level. Recomputed on demand, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DerivedStats {
    pub hp: f64,
    pub mp: f64,
    pub armor: f64,
    pub spellblock: f64,
    pub attackdamage: f64,
    pub attackspeed: f64,
    pub hpregen: f64,
    pub mpregen: f64,
    pub effective_hp_physical: f64,
    pub effective_hp_magic: f64,
    /// Auto-attack damage per second, no crit or bonus stats
    pub dps: f64,
}

impl DerivedStats {
    pub fn average_effective_hp(&self) -> f64 {
        (self.effective_hp_physical + self.effective_hp_magic) / 2.0
    }
}

pub fn clamp_level(level: u32) -> u32 {
    level.clamp(MIN_LEVEL, MAX_LEVEL)
}

pub fn project(base: &ChampionStats, level: u32) -> DerivedStats {
    // No clamping: level 0 removes one level of growth
    let level_multiplier = f64::from(level) - 1.0;

    let hp = base.hp + base.hpperlevel * level_multiplier;
    let mp = base.mp + base.mpperlevel * level_multiplier;
    let armor = base.armor + base.armorperlevel * level_multiplier;
    let spellblock = base.spellblock + base.spellblockperlevel * level_multiplier;
    let attackdamage = base.attackdamage + base.attackdamageperlevel * level_multiplier;
    let hpregen = base.hpregen + base.hpregenperlevel * level_multiplier;
    let mpregen = base.mpregen + base.mpregenperlevel * level_multiplier;
    let attackspeed = base.attackspeed * (1.0 + base.attackspeedperlevel * level_multiplier / 100.0);

    DerivedStats {
        hp,
        mp,
        armor,
        spellblock,
        attackdamage,
        attackspeed,
        hpregen,
        mpregen,
        effective_hp_physical: hp * (1.0 + armor / 100.0),
        effective_hp_magic: hp * (1.0 + spellblock / 100.0),
        dps: attackdamage * attackspeed,
    }
}

pub fn project_stats_at_level(champion: &Champion, level: u32) -> DerivedStats {
    project(&champion.stats, level)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bruiser() -> ChampionStats {
        ChampionStats {
            hp: 600.0,
            hpperlevel: 100.0,
            mp: 300.0,
            mpperlevel: 40.0,
            armor: 30.0,
            armorperlevel: 4.0,
            spellblock: 32.0,
            spellblockperlevel: 2.0,
            attackdamage: 60.0,
            attackdamageperlevel: 3.0,
            attackspeed: 0.625,
            attackspeedperlevel: 2.0,
            hpregen: 8.0,
            hpregenperlevel: 0.5,
            mpregen: 7.0,
            mpregenperlevel: 0.7,
            movespeed: 345.0,
            ..Default::default()
        }
    }

    #[test]
    fn level_one_is_base_stats() {
        let base = bruiser();
        let stats = project(&base, 1);

        assert_eq!(stats.hp, 600.0);
        assert_eq!(stats.mp, 300.0);
        assert_eq!(stats.armor, 30.0);
        assert_eq!(stats.spellblock, 32.0);
        assert_eq!(stats.attackdamage, 60.0);
        assert_eq!(stats.attackspeed, 0.625);
        assert_eq!(stats.hpregen, 8.0);
        assert_eq!(stats.mpregen, 7.0);
        assert!((stats.effective_hp_physical - 780.0).abs() < 1e-9);
        assert!((stats.effective_hp_magic - 792.0).abs() < 1e-9);
        assert_eq!(stats.dps, 60.0 * 0.625);
    }

    #[test]
    fn level_six_applies_five_growth_steps() {
        let stats = project(&bruiser(), 6);

        assert_eq!(stats.hp, 1100.0);
        assert_eq!(stats.armor, 50.0);
        assert_eq!(stats.effective_hp_physical, 1650.0);
        assert_eq!(stats.attackdamage, 75.0);
    }

    #[test]
    fn attack_speed_grows_by_percentage() {
        let stats = project(&bruiser(), 11);
        // 10 levels at 2% each
        assert!((stats.attackspeed - 0.625 * 1.2).abs() < 1e-12);
        assert!((stats.dps - 90.0 * 0.75).abs() < 1e-9);
    }

    #[test]
    fn average_effective_hp_is_the_mean() {
        let stats = project(&bruiser(), 1);
        assert!((stats.average_effective_hp() - 786.0).abs() < 1e-9);
    }

    #[test]
    fn negative_inputs_are_passed_through() {
        let base = ChampionStats {
            hp: -10.0,
            armor: -100.0,
            ..Default::default()
        };
        let stats = project(&base, 1);
        assert_eq!(stats.hp, -10.0);
        assert_eq!(stats.effective_hp_physical, 0.0);
    }

    #[test]
    fn level_zero_subtracts_one_growth_step() {
        let base = ChampionStats {
            hp: 600.0,
            hpperlevel: 100.0,
            armor: 30.0,
            armorperlevel: 4.0,
            ..Default::default()
        };
        let stats = project(&base, 0);

        assert_eq!(stats.hp, 500.0);
        assert_eq!(stats.armor, 26.0);
    }

    #[test]
    fn out_of_range_levels_are_not_clamped() {
        let stats = project(&bruiser(), 20);
        assert_eq!(stats.hp, 600.0 + 100.0 * 19.0);
    }

    #[test]
    fn clamps_levels_into_range() {
        assert_eq!(clamp_level(0), 1);
        assert_eq!(clamp_level(7), 7);
        assert_eq!(clamp_level(30), 18);
    }
}
