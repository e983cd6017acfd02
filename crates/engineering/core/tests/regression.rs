//! Regression fixtures: literal before/after stat blocks for engineered
//! modules.

use engineering_core::{
    EffectCatalog, EngineeringConfig, EngineeringEngine, EngineeringWarning,
    ModifierEntry, SpecialEffect, SpecialEffectBlendTable, StatBlock, StatName, StatValue,
};

/// `actual` is within `percent`% of `expected`.
fn approx_eq_percent(actual: f64, expected: f64, percent: f64) -> bool {
    (actual - expected).abs() <= expected.abs() * percent / 100.0
}

#[track_caller]
fn assert_approx(block: &StatBlock, stat: StatName, expected: f64) {
    let actual = block
        .value(stat)
        .unwrap_or_else(|| panic!("{stat} missing from result"));
    assert!(
        approx_eq_percent(actual, expected, 0.1),
        "{stat}: expected ~{expected}, got {actual}"
    );
}

#[track_caller]
fn assert_same_slots(result: &StatBlock, base: &StatBlock) {
    let result_names: Vec<StatName> = result.names().collect();
    let base_names: Vec<StatName> = base.names().collect();
    assert_eq!(result_names, base_names);
}

fn huge_multicannon() -> StatBlock {
    StatBlock::new()
        .with(StatName::Mass, 16.0)
        .with(StatName::Integrity, 80.0)
        .with(StatName::PowerDraw, 1.22)
        .with(StatName::BootTime, 0.0)
        .with(StatName::DamagePerSecond, 23.299664)
        .with(StatName::Damage, 3.46)
        .with(StatName::DistributorDraw, 0.364)
        .with(StatName::ThermalLoad, 0.39)
        .with(StatName::ArmourPenetration, 68.0)
        .with(StatName::Range, 4000.0)
        .with(StatName::FalloffRange, 2000.0)
        .with(StatName::ShotSpeed, 1600.0)
        .with(StatName::RateOfFire, 6.734)
        .with(StatName::BurstInterval, 0.1485)
        .with(StatName::AmmoClipSize, 90.0)
        .with(StatName::AmmoMaximum, 2100.0)
        .with(StatName::ReloadTime, 5.0)
        .with(StatName::BreachDamage, 2.9)
        .with(StatName::BreachMin, 50.0)
        .with(StatName::BreachMax, 50.0)
        .with(StatName::Jitter, 0.0)
}

fn medium_railgun() -> StatBlock {
    StatBlock::new()
        .with(StatName::Mass, 4.0)
        .with(StatName::Integrity, 51.0)
        .with(StatName::PowerDraw, 1.63)
        .with(StatName::DamagePerSecond, 41.54)
        .with(StatName::Damage, 41.54)
        .with(StatName::ThermalLoad, 20.0)
        .with(StatName::RateOfFire, 1.0)
        .with(StatName::BurstInterval, 0.6)
        .with(StatName::AmmoClipSize, 1.0)
        .with(StatName::AmmoMaximum, 80.0)
}

fn small_pulse_laser() -> StatBlock {
    StatBlock::new()
        .with(StatName::Mass, 2.0)
        .with(StatName::DamagePerSecond, 7.885)
        .with(StatName::Damage, 2.05)
        .with(StatName::RateOfFire, 3.846)
        .with(StatName::BurstInterval, 0.26)
}

fn military_armour() -> StatBlock {
    StatBlock::new()
        .with(StatName::Mass, 0.0)
        .with(StatName::HullStrengthBonus, 250.0)
        .with(StatName::KineticResistance, -20.0)
        .with(StatName::ThermalResistance, 0.0)
        .with(StatName::ExplosiveResistance, -40.0)
        .with(StatName::CausticResistance, 0.0)
}

fn enhanced_thrusters() -> StatBlock {
    StatBlock::new()
        .with(StatName::Mass, 5.0)
        .with(StatName::EngineOptimalMass, 90.0)
        .with(StatName::EngineOptMultiplier, 130.0)
        .with(StatName::EngineMinMultiplier, 90.0)
        .with(StatName::EngineMaxMultiplier, 200.0)
}

// ============================================================================
// Fixtures
// ============================================================================

#[test]
fn overcharged_huge_multicannon() {
    let base = huge_multicannon();
    let modifiers = [
        ModifierEntry::new("DamagePerSecond", 38.12291, 23.299664),
        ModifierEntry::new("ThermalLoad", 0.4446, 0.39).less_is_good(true),
        ModifierEntry::new("AmmoClipSize", 77.0, 90.0),
    ];

    let result = EngineeringEngine::builtin().apply(
        &base,
        &modifiers,
        None,
        "hpt_multicannon_gimbal_huge",
        "Weapon_Overcharged",
    );

    assert_eq!(result.value(StatName::DamagePerSecond), Some(38.12291));
    assert_approx(&result, StatName::Damage, 5.661);
    assert_approx(&result, StatName::ThermalLoad, 0.4446);
    assert_eq!(result.get(StatName::AmmoClipSize), Some(StatValue::Int(77)));

    assert_eq!(result.get(StatName::AmmoMaximum), Some(StatValue::Int(2100)));
    assert_eq!(result.value(StatName::RateOfFire), Some(6.734));
    assert_eq!(result.value(StatName::Mass), Some(16.0));
    assert_same_slots(&result, &base);
}

#[test]
fn rate_of_fire_leaves_railgun_burst_interval() {
    let base = medium_railgun();
    let modifiers = [ModifierEntry::new("RateOfFire", 1.2, 1.0)];

    let result = EngineeringEngine::builtin().apply(
        &base,
        &modifiers,
        None,
        "hpt_railgun_fixed_medium",
        "Weapon_ShortRange",
    );

    assert_eq!(result.value(StatName::RateOfFire), Some(1.2));
    assert_eq!(result.value(StatName::BurstInterval), Some(0.6));
    assert_approx(&result, StatName::DamagePerSecond, 49.848);
    assert_same_slots(&result, &base);
}

#[test]
fn rate_of_fire_scales_burst_interval_elsewhere() {
    let base = small_pulse_laser();
    let modifiers = [ModifierEntry::new("RateOfFire", 4.6152, 3.846)];

    let result = EngineeringEngine::builtin().apply(
        &base,
        &modifiers,
        None,
        "hpt_pulselaser_fixed_small",
        "Weapon_RapidFire",
    );

    // Inverted secondary: interval shrinks as rate of fire grows.
    assert_approx(&result, StatName::BurstInterval, 0.26 / 1.2);
    assert_approx(&result, StatName::DamagePerSecond, 7.885 * 1.2);
    // Damage per shot is unchanged by rate of fire.
    assert_eq!(result.value(StatName::Damage), Some(2.05));
}

#[test]
fn primary_beats_secondary_on_same_stat() {
    let base = small_pulse_laser();
    let modifiers = [
        ModifierEntry::new("RateOfFire", 4.6152, 3.846),
        ModifierEntry::new("DamagePerSecond", 8.5, 7.885),
    ];

    let result = EngineeringEngine::builtin().apply(
        &base,
        &modifiers,
        None,
        "hpt_pulselaser_fixed_small",
        "Weapon_RapidFire",
    );

    assert_eq!(result.value(StatName::DamagePerSecond), Some(8.5));
    // DPS does not derive damage per shot while rate of fire also changed.
    assert_eq!(result.value(StatName::Damage), Some(2.05));
}

#[test]
fn primary_order_does_not_matter() {
    let base = small_pulse_laser();
    let forward = [
        ModifierEntry::new("DamagePerSecond", 8.5, 7.885),
        ModifierEntry::new("RateOfFire", 4.6152, 3.846),
    ];
    let backward = [forward[1].clone(), forward[0].clone()];

    let engine = EngineeringEngine::builtin();
    let a = engine.apply(&base, &forward, None, "hpt_pulselaser_fixed_small", "");
    let b = engine.apply(&base, &backward, None, "hpt_pulselaser_fixed_small", "");
    assert_eq!(a, b);
}

#[test]
fn primary_beats_special_effect() {
    let base = huge_multicannon();
    let modifiers = [ModifierEntry::new("ThermalLoad", 0.3, 0.39).less_is_good(true)];

    let result = EngineeringEngine::builtin().apply(
        &base,
        &modifiers,
        Some("special_incendiary_rounds"),
        "hpt_multicannon_gimbal_huge",
        "Weapon_Overcharged",
    );

    assert_eq!(result.value(StatName::ThermalLoad), Some(0.3));
    // The effect's other delta still applies: -5% rate of fire.
    assert_approx(&result, StatName::RateOfFire, 6.734 * 0.95);
}

#[test]
fn special_effect_percent_blend() {
    let base = huge_multicannon();
    let result = EngineeringEngine::builtin().apply(
        &base,
        &[],
        Some("special_weapon_lightweight"),
        "hpt_multicannon_gimbal_huge",
        "",
    );
    assert_approx(&result, StatName::Mass, 14.4);
    assert_same_slots(&result, &base);
}

#[test]
fn special_effect_additive_resistances() {
    let base = military_armour();
    let result = EngineeringEngine::builtin().apply(
        &base,
        &[ModifierEntry::new("DefenceModifierHealthMultiplier", 305.0, 250.0)],
        Some("special_armour_kinetic"),
        "anaconda_armour_grade3",
        "Armour_HeavyDuty",
    );

    assert_eq!(result.value(StatName::HullStrengthBonus), Some(305.0));
    assert_eq!(result.value(StatName::KineticResistance), Some(-12.0));
    assert_eq!(result.value(StatName::ThermalResistance), Some(-3.0));
    assert_eq!(result.value(StatName::ExplosiveResistance), Some(-43.0));
    assert_eq!(result.value(StatName::CausticResistance), Some(0.0));
}

#[test]
fn special_effect_replace_blend_with_custom_tables() {
    let base = StatBlock::new()
        .with(StatName::Damage, 10.0)
        .with(StatName::RoundsPerShot, 1.0)
        .with(StatName::Jitter, 0.0);

    let effects = EffectCatalog::from_effects([SpecialEffect::new(
        "special_scatter",
        "Scatter",
        [
            (StatName::RoundsPerShot, 3.0),
            (StatName::Jitter, 1.7),
            (StatName::Damage, -40.0),
        ],
    )]);
    let blends = SpecialEffectBlendTable::from_values([
        (StatName::RoundsPerShot, 0.0),
        (StatName::Jitter, 1.0),
        (StatName::Damage, 50.0),
    ])
    .unwrap();

    let engine = EngineeringEngine::builtin()
        .with_effects(&effects)
        .with_blends(&blends);
    let result = engine.apply(&base, &[], Some("special_scatter"), "hpt_x", "");

    assert_eq!(result.get(StatName::RoundsPerShot), Some(StatValue::Int(3)));
    assert_eq!(result.value(StatName::Jitter), Some(1.7));
    // 10 × (1 - 40/50)
    assert_approx(&result, StatName::Damage, 2.0);
}

#[test]
fn configured_default_blend_divisor() {
    let base = StatBlock::new().with(StatName::Mass, 10.0);
    let effects = EffectCatalog::from_effects([SpecialEffect::new(
        "special_light",
        "Light",
        [(StatName::Mass, -10.0)],
    )]);
    let config = EngineeringConfig::new().with_default_blend_divisor(20.0).unwrap();

    let engine = EngineeringEngine::builtin()
        .with_effects(&effects)
        .with_config(&config);
    let result = engine.apply(&base, &[], Some("special_light"), "x", "");

    assert_approx(&result, StatName::Mass, 5.0);
}

#[test]
fn special_effect_never_creates_stats() {
    // A multicannon has none of the shield stats this effect touches.
    let base = huge_multicannon();
    let outcome = EngineeringEngine::builtin().apply_with_report(
        &base,
        &[],
        Some("special_shield_regenerative"),
        "hpt_multicannon_gimbal_huge",
        "",
    );

    assert_eq!(outcome.stats, base);
    assert!(outcome.warnings.iter().all(|w| matches!(
        w,
        EngineeringWarning::MissingEffectStat { .. }
    )));
    assert_eq!(outcome.warnings.len(), 3);
}

#[test]
fn text_modifier_is_numeric_no_op() {
    let base = huge_multicannon();
    let outcome = EngineeringEngine::builtin().apply_with_report(
        &base,
        &[ModifierEntry::text("DamageType", "$Kinetic;")],
        None,
        "hpt_multicannon_gimbal_huge",
        "",
    );

    assert_eq!(outcome.stats, base);
    assert!(outcome.changes.is_empty());
    // No rule exists for the display-only label.
    assert_eq!(
        outcome.warnings,
        vec![EngineeringWarning::UnknownModifier {
            label: "DamageType".to_owned(),
            item_type: "hpt_multicannon_gimbal_huge".to_owned(),
        }]
    );
}

#[test]
fn text_modifier_claims_its_primary_stat() {
    let base = small_pulse_laser();
    let modifiers = [
        ModifierEntry::text("DamagePerSecond", "$x;"),
        ModifierEntry::text("DamageType", "$Kinetic;"),
        ModifierEntry::new("RateOfFire", 4.6152, 3.846),
    ];

    let outcome = EngineeringEngine::builtin().apply_with_report(
        &base,
        &modifiers,
        None,
        "hpt_pulselaser_fixed_small",
        "Weapon_RapidFire",
    );

    // DPS is in the footprint, so rate of fire does not propagate onto it.
    assert_eq!(outcome.stats.value(StatName::DamagePerSecond), Some(7.885));
    assert!(outcome.last_change(StatName::DamagePerSecond).is_none());
    assert_eq!(outcome.stats.value(StatName::RateOfFire), Some(4.6152));
    assert_approx(&outcome.stats, StatName::BurstInterval, 0.26 / 1.2);
    assert!(matches!(
        outcome.warnings.as_slice(),
        [EngineeringWarning::UnknownModifier { label, .. }] if label == "DamageType"
    ));
}

#[test]
fn integer_stat_rounds_to_nearest() {
    let base = huge_multicannon();
    let modifiers = [ModifierEntry::new("AmmoMaximum", 2572.5, 2100.0)];

    let result = EngineeringEngine::builtin().apply(
        &base,
        &modifiers,
        None,
        "hpt_multicannon_gimbal_huge",
        "Weapon_HighCapacity",
    );

    assert_eq!(result.get(StatName::AmmoMaximum), Some(StatValue::Int(2573)));
}

#[test]
fn fast_thruster_secondaries() {
    let base = enhanced_thrusters();
    let modifiers = [ModifierEntry::new("EngineOptPerformance", 156.0, 130.0)];
    let engine = EngineeringEngine::builtin();

    let fast = engine.apply(
        &base,
        &modifiers,
        None,
        "int_engine_size3_class5_fast",
        "Engine_Tuned",
    );
    assert_eq!(fast.value(StatName::EngineOptMultiplier), Some(156.0));
    assert_approx(&fast, StatName::EngineMinMultiplier, 108.0);
    assert_approx(&fast, StatName::EngineMaxMultiplier, 240.0);

    let regular = engine.apply(&base, &modifiers, None, "int_engine_size3_class5", "Engine_Tuned");
    assert_eq!(regular.value(StatName::EngineOptMultiplier), Some(156.0));
    assert_eq!(regular.value(StatName::EngineMinMultiplier), Some(90.0));
    assert_eq!(regular.value(StatName::EngineMaxMultiplier), Some(200.0));
}

#[test]
fn falloff_follows_range_only_for_long_range_blueprint() {
    let base = huge_multicannon();
    let modifiers = [ModifierEntry::new("MaximumRange", 6000.0, 4000.0)];
    let engine = EngineeringEngine::builtin();

    let long_range = engine.apply(
        &base,
        &modifiers,
        None,
        "hpt_multicannon_gimbal_huge",
        "weapon_longrange",
    );
    assert_eq!(long_range.value(StatName::Range), Some(6000.0));
    assert_approx(&long_range, StatName::FalloffRange, 3000.0);

    let other = engine.apply(
        &base,
        &modifiers,
        None,
        "hpt_multicannon_gimbal_huge",
        "Weapon_Overcharged",
    );
    assert_eq!(other.value(StatName::FalloffRange), Some(2000.0));
}

#[test]
fn zero_original_value_propagates_non_finite() {
    let base = StatBlock::new()
        .with(StatName::ShieldGenStrength, 100.0)
        .with(StatName::ShieldGenMinStrength, 30.0);
    let modifiers = [ModifierEntry::new("ShieldGenStrength", 150.0, 0.0)];

    let result = EngineeringEngine::builtin().apply(&base, &modifiers, None, "int_shieldgenerator", "");

    assert_eq!(result.value(StatName::ShieldGenStrength), Some(150.0));
    assert!(result.value(StatName::ShieldGenMinStrength).unwrap().is_infinite());
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn no_modifiers_no_effect_is_identity_and_idempotent() {
    let engine = EngineeringEngine::builtin();
    for base in [
        huge_multicannon(),
        medium_railgun(),
        military_armour(),
        enhanced_thrusters(),
        StatBlock::new(),
    ] {
        let once = engine.apply(&base, &[], None, "x", "");
        let twice = engine.apply(&once, &[], None, "x", "");
        assert_eq!(once, base);
        assert_eq!(twice, base);
    }
}

#[test]
fn slots_are_preserved_for_every_builtin_rule() {
    let engine = EngineeringEngine::builtin();
    let base = huge_multicannon();

    for rule in engine.rules().rules() {
        let modifiers = [ModifierEntry::new(rule.label(), 2.0, 1.0)];
        let result = engine.apply(&base, &modifiers, Some("special_auto_loader"), "hpt_any", "");
        assert_same_slots(&result, &base);
    }
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = EngineeringEngine::builtin();
    let base = huge_multicannon();
    let modifiers = [ModifierEntry::new("DamagePerSecond", 38.12291, 23.299664)];

    let results: Vec<StatBlock> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    engine.apply(&base, &modifiers, None, "hpt_multicannon_gimbal_huge", "")
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for result in &results {
        assert_eq!(result, &results[0]);
    }
    assert_approx(&results[0], StatName::Damage, 5.661);
}
