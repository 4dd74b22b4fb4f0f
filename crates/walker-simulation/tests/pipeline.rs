use walker_physics::{InteractionLaw, RelationModel};
use walker_simulation::*;

fn params(law: InteractionLaw, model: RelationModel) -> SimulationParameters {
    SimulationParameters {
        count: 8,
        spread: 20.0,
        interaction_law: law,
        relation_model: model,
        relation_avg: 0.02,
        relation_variance: 0.05,
        iterations: 30,
    }
}

fn bits(history: &PositionHistory) -> Vec<[u64; 3]> {
    history
        .as_flat()
        .iter()
        .map(|p| [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()])
        .collect()
}

#[test]
fn identical_seeds_give_bit_identical_histories() {
    for law in InteractionLaw::ALL {
        for model in RelationModel::ALL {
            let a = WalkerSystem::with_seed_provider(params(law, model), FixedSeeds::new(1)).unwrap();
            let b = WalkerSystem::with_seed_provider(params(law, model), FixedSeeds::new(1)).unwrap();
            assert_eq!(bits(a.positions()), bits(b.positions()), "{law:?} {model:?}");
        }
    }
}

#[test]
fn regenerating_stages_out_of_band_is_reproducible() {
    let mut sys = WalkerSystem::with_seed_provider(
        params(InteractionLaw::Position, RelationModel::Sparse),
        FixedSeeds::new(77),
    )
    .unwrap();
    let before = bits(sys.positions());

    sys.generate_start_positions();
    sys.generate_relation_mask();
    sys.generate_relation_matrix();
    sys.compute_positions();

    assert_eq!(bits(sys.positions()), before);
}

#[test]
fn different_seeds_give_different_start_positions() {
    let p = params(InteractionLaw::Position, RelationModel::OneToOne);
    let a = WalkerSystem::with_seed_provider(p.clone(), FixedSeeds::new(1)).unwrap();
    let b = WalkerSystem::with_seed_provider(p, FixedSeeds::new(100)).unwrap();
    assert_ne!(a.start_positions(), b.start_positions());
}

#[test]
fn mask_invariants_hold_for_every_model() {
    for count in [2, 3, 7, 25] {
        for model in RelationModel::ALL {
            let p = SimulationParameters {
                count,
                ..params(InteractionLaw::Position, model)
            };
            let sys = WalkerSystem::with_seed_provider(p, FixedSeeds::new(count as u64)).unwrap();
            let mask = sys.relation_mask();

            for i in 0..count {
                assert!(!mask.get(i, i));
                let row = mask.row(i).iter().filter(|&&r| r).count();
                match model {
                    RelationModel::OneToOne => assert_eq!(row, 1),
                    RelationModel::ManyToMany => assert_eq!(row, count - 1),
                    RelationModel::Sparse => assert!(row < count),
                }
            }
        }
    }
}

#[test]
fn relation_matrix_is_zero_outside_mask() {
    for model in RelationModel::ALL {
        let sys = WalkerSystem::with_seed_provider(
            params(InteractionLaw::Asymmetry, model),
            FixedSeeds::new(5),
        )
        .unwrap();
        let (mask, matrix) = (sys.relation_mask(), sys.relation_matrix());
        for i in 0..8 {
            for j in 0..8 {
                if !mask.get(i, j) {
                    assert_eq!(matrix.get(i, j), 0.0, "{model:?} ({i}, {j})");
                }
            }
        }
    }
}

#[test]
fn history_has_one_snapshot_per_iteration() {
    for iterations in [1, 2, 13] {
        let p = SimulationParameters {
            iterations,
            ..params(InteractionLaw::NewtonLinear, RelationModel::ManyToMany)
        };
        let sys = WalkerSystem::with_seed_provider(p, FixedSeeds::new(9)).unwrap();
        let history = sys.positions();

        assert_eq!(history.iterations(), iterations);
        assert_eq!(history.as_flat().len(), iterations * 8);
        assert_eq!(history.snapshot(0), sys.start_positions().as_slice());
    }
}

#[test]
fn newton_laws_stay_finite_with_coincident_walkers() {
    // A tiny spread packs eight walkers into a near point.
    for law in [InteractionLaw::NewtonLinear, InteractionLaw::Newton] {
        let p = SimulationParameters {
            spread: 1e-9,
            iterations: 40,
            ..params(law, RelationModel::ManyToMany)
        };
        let sys = WalkerSystem::with_seed_provider(p, FixedSeeds::new(3)).unwrap();
        assert!(
            sys.positions().as_flat().iter().all(|p| p.is_finite()),
            "{law:?}"
        );
    }
}

#[test]
fn interaction_law_change_recomputes_positions_only() {
    let mut sys = WalkerSystem::with_seed_provider(
        params(InteractionLaw::Position, RelationModel::Sparse),
        FixedSeeds::new(21),
    )
    .unwrap();
    let start = sys.start_positions();
    let matrix = sys.relation_matrix().clone();
    let before = sys.positions().clone();

    sys.set_interaction_law(InteractionLaw::Velocity).unwrap();

    assert_eq!(sys.start_positions(), start);
    assert_eq!(sys.relation_matrix(), &matrix);
    assert_ne!(sys.positions(), &before);
    assert_eq!(sys.positions().snapshot(0), start.as_slice());
}

#[test]
fn relation_model_change_keeps_start_positions() {
    let mut sys = WalkerSystem::with_seed_provider(
        params(InteractionLaw::Position, RelationModel::OneToOne),
        FixedSeeds::new(4),
    )
    .unwrap();
    let start = sys.start_positions();

    sys.set_relation_model(RelationModel::ManyToMany).unwrap();

    assert_eq!(sys.start_positions(), start);
    assert_eq!(sys.relation_mask().relation_count(), 8 * 7);
}

#[test]
fn set_params_matches_fresh_system() {
    let target = params(InteractionLaw::Newton, RelationModel::Sparse);

    let mut edited = WalkerSystem::with_seed_provider(
        SimulationParameters::default(),
        FixedSeeds::new(11),
    )
    .unwrap();
    edited.set_params(target.clone()).unwrap();

    let fresh = WalkerSystem::with_seed_provider(target, FixedSeeds::new(11)).unwrap();
    assert_eq!(bits(edited.positions()), bits(fresh.positions()));
}
