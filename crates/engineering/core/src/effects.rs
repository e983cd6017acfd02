//! Experimental (special) effects and the catalog that resolves them.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use crate::stats::StatName::{self, *};

static BUILTIN: LazyLock<EffectCatalog> = LazyLock::new(|| {
    EffectCatalog::from_effects(BUILTIN_EFFECTS.iter().map(|(id, name, deltas)| {
        SpecialEffect::new(*id, *name, deltas.iter().copied())
    }))
});

// Deltas are in the units of each stat's blend mode: percentages for percent
// blends, absolute amounts for additive ones.
const BUILTIN_EFFECTS: &[(&str, &str, &[(StatName, f64)])] = &[
    // ===== weapons =====
    ("special_auto_loader", "Auto Loader", &[]),
    ("special_concordant_sequence", "Concordant Sequence", &[(ThermalLoad, 50.0)]),
    ("special_corrosive_shell", "Corrosive Shell", &[(AmmoMaximum, -20.0)]),
    ("special_dispersal_field", "Dispersal Field", &[]),
    ("special_drag_munitions", "Drag Munitions", &[]),
    ("special_emissive_munitions", "Emissive Munitions", &[(ThermalLoad, 100.0)]),
    (
        "special_feedback_cascade_cooled",
        "Feedback Cascade",
        &[(Damage, -20.0), (ThermalLoad, -40.0)],
    ),
    ("special_force_shell", "Force Shell", &[(ShotSpeed, -16.67)]),
    ("special_high_yield_shell", "High Yield Shell", &[(Damage, -35.0)]),
    (
        "special_incendiary_rounds",
        "Incendiary Rounds",
        &[(RateOfFire, -5.0), (ThermalLoad, 200.0)],
    ),
    ("special_phasing_sequence", "Phasing Sequence", &[(Damage, -10.0)]),
    ("special_plasma_slug", "Plasma Slug", &[(Damage, -10.0)]),
    ("special_screening_shell", "Screening Shell", &[(ReloadTime, -50.0)]),
    ("special_super_penetrator", "Super Penetrator", &[(ReloadTime, 50.0)]),
    ("special_thermal_vent", "Thermal Vent", &[]),
    ("special_weapon_damage", "Oversized", &[(Damage, 3.0), (PowerDraw, 5.0)]),
    ("special_weapon_efficient", "Flow Control", &[(PowerDraw, -10.0)]),
    ("special_weapon_lightweight", "Stripped Down", &[(Mass, -10.0)]),
    (
        "special_weapon_rateoffire",
        "Multi-servos",
        &[(RateOfFire, 3.0), (PowerDraw, 5.0)],
    ),
    ("special_weapon_toughened", "Double Braced", &[(Integrity, 15.0)]),
    // ===== armour / hull =====
    (
        "special_armour_kinetic",
        "Angled Plating",
        &[(KineticResistance, 8.0), (ExplosiveResistance, -3.0), (ThermalResistance, -3.0)],
    ),
    (
        "special_armour_thermic",
        "Reflective Plating",
        &[(ThermalResistance, 8.0), (KineticResistance, -3.0), (ExplosiveResistance, -3.0)],
    ),
    (
        "special_armour_explosive",
        "Layered Plating",
        &[(ExplosiveResistance, 8.0), (KineticResistance, -3.0), (ThermalResistance, -3.0)],
    ),
    ("special_armour_chunky", "Deep Plating", &[(HullStrengthBonus, 8.0)]),
    // ===== shields =====
    (
        "special_shield_resistive",
        "Multi-Weave",
        &[
            (KineticResistance, 3.0),
            (ThermalResistance, 3.0),
            (ExplosiveResistance, 3.0),
            (PowerDraw, 10.0),
        ],
    ),
    (
        "special_shield_regenerative",
        "Fast Charge",
        &[(RegenRate, 15.0), (BrokenRegenRate, 15.0), (ShieldGenStrength, -1.5)],
    ),
    ("special_shield_toughened", "Hi-Cap", &[(ShieldGenStrength, 6.0)]),
    ("special_shield_efficient", "Lo-draw", &[(PowerDraw, -20.0), (EnergyPerRegen, -20.0)]),
    ("special_shieldcell_gradual", "Recycling Cell", &[(ShieldBankDuration, 10.0)]),
    // ===== core internals =====
    (
        "special_engine_overloaded",
        "Drag Drives",
        &[(EngineOptMultiplier, 4.0), (EngineHeatRate, 10.0)],
    ),
    ("special_engine_cooled", "Thermal Spread", &[(EngineHeatRate, -10.0)]),
    ("special_engine_lightweight", "Stripped Down", &[(Mass, -10.0)]),
    ("special_fsd_fuelcapacity", "Deep Charge", &[(MaxFuelPerJump, 10.0), (PowerDraw, 5.0)]),
    (
        "special_fsd_heavy",
        "Mass Manager",
        &[(FsdOptimalMass, 4.0), (Integrity, -8.0)],
    ),
    ("special_fsd_lightweight", "Stripped Down", &[(Mass, -10.0)]),
    ("special_fsd_toughened", "Double Braced", &[(Integrity, 25.0)]),
    ("special_powerplant_highcharge", "Monstered", &[(PowerGeneration, 5.0), (Mass, 10.0)]),
    ("special_powerplant_cooled", "Thermal Spread", &[(HeatEfficiency, -10.0)]),
    (
        "special_powerdistributor_capacity",
        "Super Conduits",
        &[(WeaponsCapacity, 8.0), (EnginesCapacity, 8.0), (SystemsCapacity, 8.0)],
    ),
];

/// Stat deltas contributed by one experimental effect.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialEffect {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub deltas: BTreeMap<StatName, f64>,
}

impl SpecialEffect {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        deltas: impl IntoIterator<Item = (StatName, f64)>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            deltas: deltas.into_iter().collect(),
        }
    }

    /// Stats this effect touches, in vocabulary order.
    pub fn deltas(&self) -> impl Iterator<Item = (StatName, f64)> + '_ {
        self.deltas.iter().map(|(stat, delta)| (*stat, *delta))
    }
}

/// Resolves an experimental effect id (as written in the engineering record)
/// to its stat deltas.
pub trait SpecialEffectOracle: Send + Sync {
    fn effect(&self, id: &str) -> Option<&SpecialEffect>;
}

/// In-memory effect catalog keyed by lower-cased id.
#[derive(Clone, Debug, Default)]
pub struct EffectCatalog {
    effects: HashMap<String, SpecialEffect>,
}

impl EffectCatalog {
    /// Effects shipped with the crate, built once on first use.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_effects(effects: impl IntoIterator<Item = SpecialEffect>) -> Self {
        let mut catalog = Self::new();
        for effect in effects {
            catalog.insert(effect);
        }
        catalog
    }

    pub fn insert(&mut self, effect: SpecialEffect) -> Option<SpecialEffect> {
        self.effects.insert(effect.id.to_ascii_lowercase(), effect)
    }

    /// All effects, in no particular order.
    pub fn effects(&self) -> impl Iterator<Item = &SpecialEffect> + '_ {
        self.effects.values()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

impl SpecialEffectOracle for EffectCatalog {
    fn effect(&self, id: &str) -> Option<&SpecialEffect> {
        self.effects.get(&id.to_ascii_lowercase())
    }
}
