//! Closed vocabulary of module stats.
//!
//! Every characteristic an outfitting module can carry has exactly one
//! [`StatName`]. Rule tables, blend tables and effect catalogs all key on this
//! enum, so an unknown stat is rejected once at table-build time instead of
//! being looked up by string on every application.

/// Numeric subtype of a stat slot.
///
/// The subtype belongs to the stat, not to the value that happens to be
/// stored: clip sizes are whole rounds no matter what ratio was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatKind {
    Float,
    Integer,
}

/// Name of a single module stat.
///
/// Parsing is case-insensitive and accepts the canonical PascalCase form
/// (`"AmmoClipSize"`, `"ammoclipsize"`); display always yields the canonical
/// form.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum StatName {
    // ===== common =====
    Mass,
    Integrity,
    PowerDraw,
    BootTime,

    // ===== weapons =====
    DamagePerSecond,
    Damage,
    DistributorDraw,
    ThermalLoad,
    ArmourPenetration,
    Range,
    FalloffRange,
    ShotSpeed,
    RateOfFire,
    BurstInterval,
    BurstRateOfFire,
    BurstSize,
    AmmoClipSize,
    AmmoMaximum,
    RoundsPerShot,
    ReloadTime,
    BreachDamage,
    BreachMin,
    BreachMax,
    Jitter,

    // ===== power plant / distributor =====
    PowerGeneration,
    HeatEfficiency,
    WeaponsCapacity,
    WeaponsRecharge,
    EnginesCapacity,
    EnginesRecharge,
    SystemsCapacity,
    SystemsRecharge,

    // ===== thrusters =====
    EngineMinimumMass,
    EngineOptimalMass,
    EngineMaximumMass,
    EngineMinMultiplier,
    EngineOptMultiplier,
    EngineMaxMultiplier,
    EngineHeatRate,

    // ===== frame shift drive / interdictor =====
    FsdOptimalMass,
    MaxFuelPerJump,
    FsdHeatRate,
    InterdictorRange,
    InterdictorFacingLimit,

    // ===== shield generator =====
    ShieldGenMinimumMass,
    ShieldGenOptimalMass,
    ShieldGenMaximumMass,
    ShieldGenMinStrength,
    ShieldGenStrength,
    ShieldGenMaxStrength,
    RegenRate,
    BrokenRegenRate,
    EnergyPerRegen,

    // ===== resistances / reinforcement =====
    KineticResistance,
    ThermalResistance,
    ExplosiveResistance,
    CausticResistance,
    HullStrengthBonus,
    HullReinforcement,
    ShieldStrengthBonus,
    ShieldReinforcement,
    ModuleDefenceAbsorption,

    // ===== shield cell bank =====
    ShieldBankSpinUp,
    ShieldBankDuration,
    ShieldBankReinforcement,
    ShieldBankHeat,

    // ===== sensors / scanners =====
    ScanAngle,
    ScanTime,

    // ===== countermeasures =====
    EcmRange,
    EcmTimeToCharge,
    EcmActivePowerConsumption,
    EcmHeat,
    EcmCooldown,
    HeatSinkDuration,
    ThermalDrain,
    ChaffJamDuration,

    // ===== limpet controllers =====
    MaxActiveDrones,
    DroneTargetRange,
    DroneLifeTime,
    DroneSpeed,
    DroneMultiTargetSpeed,
    DroneFuelCapacity,
    DroneRepairCapacity,
    DroneHackingTime,
    DroneMinJettisonedCargo,
    DroneMaxJettisonedCargo,

    // ===== utility / internals =====
    RefuelRate,
    Capacity,
    AfmRepairCapacity,
    AfmRepairConsumption,
    AfmRepairPerAmmo,
}

impl StatName {
    /// Numeric subtype stored in this stat's slot.
    pub const fn kind(self) -> StatKind {
        match self {
            Self::BurstSize
            | Self::AmmoClipSize
            | Self::AmmoMaximum
            | Self::RoundsPerShot
            | Self::MaxActiveDrones
            | Self::DroneFuelCapacity
            | Self::DroneRepairCapacity
            | Self::DroneMinJettisonedCargo
            | Self::DroneMaxJettisonedCargo
            | Self::Capacity
            | Self::AfmRepairCapacity => StatKind::Integer,
            _ => StatKind::Float,
        }
    }

    /// Returns true if this stat holds whole numbers.
    pub const fn is_integer(self) -> bool {
        matches!(self.kind(), StatKind::Integer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(StatName::from_str("AmmoClipSize"), Ok(StatName::AmmoClipSize));
        assert_eq!(StatName::from_str("ammoclipsize"), Ok(StatName::AmmoClipSize));
        assert_eq!(StatName::from_str("DAMAGE"), Ok(StatName::Damage));
        assert!(StatName::from_str("Warp").is_err());
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(StatName::ShieldGenStrength.to_string(), "ShieldGenStrength");
        assert_eq!(StatName::EngineOptMultiplier.as_ref(), "EngineOptMultiplier");
    }

    #[test]
    fn integer_stats_are_counts() {
        let integers: Vec<StatName> = StatName::iter().filter(|s| s.is_integer()).collect();
        assert!(integers.contains(&StatName::AmmoClipSize));
        assert!(integers.contains(&StatName::AmmoMaximum));
        assert!(!integers.contains(&StatName::Damage));
        assert!(!integers.contains(&StatName::Mass));
    }
}
