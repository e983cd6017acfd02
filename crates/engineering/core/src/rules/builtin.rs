//! Built-in modifier rules, keyed by the labels the crafting system writes.
//!
//! Labels are matched case-insensitively. Each label appears once.

use crate::stats::StatName::{self, *};

use super::{Condition, ModifierRule, ModifierRuleTable, TargetSpec};

#[derive(Clone, Copy)]
enum Cond {
    Only(&'static str),
    Unless(&'static str),
}

#[derive(Clone, Copy)]
struct Target {
    stat: StatName,
    invert: bool,
    exceptions: &'static [Cond],
}

const fn t(stat: StatName) -> Target {
    Target {
        stat,
        invert: false,
        exceptions: &[],
    }
}

const fn inv(stat: StatName) -> Target {
    Target {
        stat,
        invert: true,
        exceptions: &[],
    }
}

impl Target {
    const fn when(self, exceptions: &'static [Cond]) -> Self {
        Self { exceptions, ..self }
    }

    fn build(self) -> TargetSpec {
        let mut spec = TargetSpec::new(self.stat);
        spec.invert = self.invert;
        spec.exceptions = self
            .exceptions
            .iter()
            .map(|c| match *c {
                Cond::Only(text) => Condition::require(text),
                Cond::Unless(text) => Condition::forbid(text),
            })
            .collect();
        spec
    }
}

const FAST_ENGINE: &[Cond] = &[Cond::Only("int_engine_*_fast")];

static MODIFIER_RULES: &[(&str, &[Target])] = &[
    // ===== common =====
    ("Mass", &[t(Mass)]),
    ("Integrity", &[t(Integrity)]),
    ("PowerDraw", &[t(PowerDraw)]),
    ("BootTime", &[t(BootTime)]),
    // ===== weapons =====
    (
        "DamagePerSecond",
        &[
            t(DamagePerSecond),
            // DPS also moves with rate of fire; only derive damage per shot
            // when rate of fire is unchanged.
            t(Damage).when(&[Cond::Unless("RateOfFire")]),
        ],
    ),
    ("Damage", &[t(Damage), t(DamagePerSecond), t(BreachDamage)]),
    ("DistributorDraw", &[t(DistributorDraw)]),
    ("ThermalLoad", &[t(ThermalLoad)]),
    ("ArmourPenetration", &[t(ArmourPenetration)]),
    (
        "MaximumRange",
        &[
            t(Range),
            t(FalloffRange).when(&[Cond::Only("Weapon_LongRange")]),
        ],
    ),
    ("DamageFalloffRange", &[t(FalloffRange)]),
    ("ShotSpeed", &[t(ShotSpeed)]),
    (
        "RateOfFire",
        &[
            t(RateOfFire),
            t(DamagePerSecond),
            inv(BurstInterval).when(&[Cond::Unless("hpt_railgun*")]),
        ],
    ),
    ("BurstRateOfFire", &[t(BurstRateOfFire)]),
    ("BurstSize", &[t(BurstSize)]),
    ("AmmoClipSize", &[t(AmmoClipSize)]),
    ("AmmoMaximum", &[t(AmmoMaximum)]),
    ("RoundsPerShot", &[t(RoundsPerShot)]),
    ("ReloadTime", &[t(ReloadTime)]),
    ("BreachDamage", &[t(BreachDamage)]),
    ("MinBreachChance", &[t(BreachMin)]),
    ("MaxBreachChance", &[t(BreachMax)]),
    ("Jitter", &[t(Jitter)]),
    // ===== power plant / distributor =====
    ("PowerCapacity", &[t(PowerGeneration)]),
    ("HeatEfficiency", &[t(HeatEfficiency)]),
    ("WeaponsCapacity", &[t(WeaponsCapacity)]),
    ("WeaponsRecharge", &[t(WeaponsRecharge)]),
    ("EnginesCapacity", &[t(EnginesCapacity)]),
    ("EnginesRecharge", &[t(EnginesRecharge)]),
    ("SystemsCapacity", &[t(SystemsCapacity)]),
    ("SystemsRecharge", &[t(SystemsRecharge)]),
    // ===== thrusters =====
    ("EngineMinimumMass", &[t(EngineMinimumMass)]),
    (
        "EngineOptimalMass",
        &[t(EngineOptimalMass), t(EngineMinimumMass), t(EngineMaximumMass)],
    ),
    ("EngineMaximumMass", &[t(EngineMaximumMass)]),
    (
        "EngineOptPerformance",
        &[
            t(EngineOptMultiplier),
            t(EngineMinMultiplier).when(FAST_ENGINE),
            t(EngineMaxMultiplier).when(FAST_ENGINE),
        ],
    ),
    ("EngineMinPerformance", &[t(EngineMinMultiplier)]),
    ("EngineMaxPerformance", &[t(EngineMaxMultiplier)]),
    ("EngineHeatRate", &[t(EngineHeatRate)]),
    // ===== frame shift drive / interdictor =====
    ("FSDOptimalMass", &[t(FsdOptimalMass)]),
    ("MaxFuelPerJump", &[t(MaxFuelPerJump)]),
    ("FSDHeatRate", &[t(FsdHeatRate)]),
    ("FSDInterdictorRange", &[t(InterdictorRange)]),
    ("FSDInterdictorFacingLimit", &[t(InterdictorFacingLimit)]),
    // ===== shield generator =====
    ("ShieldGenMinimumMass", &[t(ShieldGenMinimumMass)]),
    (
        "ShieldGenOptimalMass",
        &[
            t(ShieldGenOptimalMass),
            t(ShieldGenMinimumMass),
            t(ShieldGenMaximumMass),
        ],
    ),
    ("ShieldGenMaximumMass", &[t(ShieldGenMaximumMass)]),
    ("ShieldGenMinStrength", &[t(ShieldGenMinStrength)]),
    (
        "ShieldGenStrength",
        &[
            t(ShieldGenStrength),
            t(ShieldGenMinStrength),
            t(ShieldGenMaxStrength),
        ],
    ),
    ("ShieldGenMaxStrength", &[t(ShieldGenMaxStrength)]),
    ("RegenRate", &[t(RegenRate)]),
    ("BrokenRegenRate", &[t(BrokenRegenRate)]),
    ("EnergyPerRegen", &[t(EnergyPerRegen)]),
    // ===== resistances / reinforcement =====
    ("KineticResistance", &[t(KineticResistance)]),
    ("ThermicResistance", &[t(ThermalResistance)]),
    ("ExplosiveResistance", &[t(ExplosiveResistance)]),
    ("CausticResistance", &[t(CausticResistance)]),
    ("DefenceModifierHealthMultiplier", &[t(HullStrengthBonus)]),
    ("DefenceModifierHealthAddition", &[t(HullReinforcement)]),
    ("DefenceModifierShieldMultiplier", &[t(ShieldStrengthBonus)]),
    ("DefenceModifierShieldAddition", &[t(ShieldReinforcement)]),
    ("ModuleDefenceAbsorption", &[t(ModuleDefenceAbsorption)]),
    // ===== shield cell bank =====
    ("ShieldBankSpinUp", &[t(ShieldBankSpinUp)]),
    ("ShieldBankDuration", &[t(ShieldBankDuration)]),
    ("ShieldBankReinforcement", &[t(ShieldBankReinforcement)]),
    ("ShieldBankHeat", &[t(ShieldBankHeat)]),
    // ===== sensors / scanners =====
    ("Range", &[t(Range)]),
    ("ScannerRange", &[t(Range)]),
    ("SensorTargetScanAngle", &[t(ScanAngle)]),
    ("MaxAngle", &[t(ScanAngle)]),
    ("ScannerTimeToScan", &[t(ScanTime)]),
    // ===== countermeasures =====
    ("ECMRange", &[t(EcmRange)]),
    ("ECMTimeToCharge", &[t(EcmTimeToCharge)]),
    ("ECMActivePowerConsumption", &[t(EcmActivePowerConsumption)]),
    ("ECMHeat", &[t(EcmHeat)]),
    ("ECMCooldown", &[t(EcmCooldown)]),
    ("HeatSinkDuration", &[t(HeatSinkDuration)]),
    ("ThermalDrain", &[t(ThermalDrain)]),
    ("ChaffJamDuration", &[t(ChaffJamDuration)]),
    // ===== limpet controllers =====
    ("MaxActiveDrones", &[t(MaxActiveDrones)]),
    ("DroneTargetRange", &[t(DroneTargetRange)]),
    ("DroneLifeTime", &[t(DroneLifeTime)]),
    ("DroneSpeed", &[t(DroneSpeed)]),
    ("DroneMultiTargetSpeed", &[t(DroneMultiTargetSpeed)]),
    ("DroneFuelCapacity", &[t(DroneFuelCapacity)]),
    ("DroneRepairCapacity", &[t(DroneRepairCapacity)]),
    ("DroneHackingTime", &[t(DroneHackingTime)]),
    ("DroneMinJettisonedCargo", &[t(DroneMinJettisonedCargo)]),
    ("DroneMaxJettisonedCargo", &[t(DroneMaxJettisonedCargo)]),
    // ===== utility / internals =====
    ("FuelScoopRate", &[t(RefuelRate)]),
    ("CargoCapacity", &[t(Capacity)]),
    ("FuelCapacity", &[t(Capacity)]),
    ("AFMRepairCapacity", &[t(AfmRepairCapacity)]),
    ("AFMRepairConsumption", &[t(AfmRepairConsumption)]),
    ("AFMRepairPerAmmo", &[t(AfmRepairPerAmmo)]),
];

pub(super) fn modifier_rules() -> ModifierRuleTable {
    let mut table = ModifierRuleTable::new();
    for (label, targets) in MODIFIER_RULES {
        let rule = ModifierRule {
            label: (*label).to_owned(),
            targets: targets.iter().map(|t| t.build()).collect(),
        };
        table.rules.insert(label.to_ascii_lowercase(), rule);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn labels_are_unique() {
        let mut seen = HashSet::new();
        for (label, targets) in MODIFIER_RULES {
            assert!(seen.insert(label.to_ascii_lowercase()), "duplicate label {label}");
            assert!(!targets.is_empty(), "{label} has no targets");
        }
        assert_eq!(ModifierRuleTable::builtin().len(), MODIFIER_RULES.len());
    }

    #[test]
    fn fast_engine_targets_are_guarded() {
        let rule = ModifierRuleTable::builtin().get("EngineOptPerformance").unwrap();
        for target in rule.secondaries() {
            assert_eq!(target.exceptions, vec![Condition::require("int_engine_*_fast")]);
        }
    }
}
