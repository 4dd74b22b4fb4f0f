//! Walker system: parameters, seeds and the staged generation pipeline
//!
//! Parameter mutators validate first, then invalidate the earliest affected
//! [`Stage`] and synchronously recompute from there. Nothing upstream of the
//! invalidated stage is ever recomputed.

use crate::error::ParamError;
use crate::history::PositionHistory;
use crate::integrator::WalkerState;
use crate::params::SimulationParameters;
use crate::relations::{RelationMask, RelationMatrix};
use crate::seed::{spread_sample, stage_rng, ClockSeeds, SeedProvider, SeedTriple};
use crate::stage::{Stage, StageState, StageTracker};
use glam::DVec3;
use std::time::Instant;
use walker_physics::{InteractionLaw, RelationModel};

/// Interacting walkers and everything generated from them
pub struct WalkerSystem {
    params: SimulationParameters,
    seeds: SeedTriple,
    seed_provider: Box<dyn SeedProvider>,
    stages: StageTracker,

    /// Start positions in the unit cube, before scaling by `spread`
    unit_positions: Vec<DVec3>,
    relation_mask: RelationMask,
    relation_matrix: RelationMatrix,
    history: PositionHistory,
}

impl WalkerSystem {
    /// Creates a fully computed system seeded from the clock.
    pub fn new(params: SimulationParameters) -> Result<Self, ParamError> {
        Self::with_seed_provider(params, ClockSeeds::default())
    }

    /// Creates a fully computed system whose seeds, initial and reseeded,
    /// all come from `provider`.
    pub fn with_seed_provider(
        params: SimulationParameters,
        provider: impl SeedProvider + 'static,
    ) -> Result<Self, ParamError> {
        params.validate()?;

        let mut seed_provider: Box<dyn SeedProvider> = Box::new(provider);
        let seeds = SeedTriple::draw(seed_provider.as_mut());

        let mut system = Self {
            params,
            seeds,
            seed_provider,
            stages: StageTracker::default(),
            unit_positions: Vec::new(),
            relation_mask: RelationMask::default(),
            relation_matrix: RelationMatrix::default(),
            history: PositionHistory::default(),
        };
        system.refresh();
        Ok(system)
    }

    // Queries

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn seeds(&self) -> SeedTriple {
        self.seeds
    }

    pub fn stage_state(&self, stage: Stage) -> StageState {
        self.stages.state(stage)
    }

    /// Walker start positions, scaled by `spread`
    pub fn start_positions(&self) -> Vec<DVec3> {
        let spread = self.params.spread;
        self.unit_positions.iter().map(|&p| p * spread).collect()
    }

    pub fn relation_mask(&self) -> &RelationMask {
        &self.relation_mask
    }

    pub fn relation_matrix(&self) -> &RelationMatrix {
        &self.relation_matrix
    }

    pub fn positions(&self) -> &PositionHistory {
        &self.history
    }

    // Mutators

    /// Replaces every parameter at once, recomputing from the earliest
    /// stage the change affects.
    pub fn set_params(&mut self, params: SimulationParameters) -> Result<(), ParamError> {
        if let Err(e) = params.validate() {
            log::warn!("Rejected simulation parameters: {}", e);
            return Err(e);
        }

        if let Some(stage) = self.params.invalidated_stage(&params) {
            self.params = params;
            self.stages.invalidate(stage);
            self.refresh();
        }
        Ok(())
    }

    pub fn set_count(&mut self, count: usize) -> Result<(), ParamError> {
        self.update(|p| p.count = count)
    }

    pub fn set_spread(&mut self, spread: f64) -> Result<(), ParamError> {
        self.update(|p| p.spread = spread)
    }

    pub fn set_interaction_law(&mut self, law: InteractionLaw) -> Result<(), ParamError> {
        self.update(|p| p.interaction_law = law)
    }

    pub fn set_relation_model(&mut self, model: RelationModel) -> Result<(), ParamError> {
        self.update(|p| p.relation_model = model)
    }

    pub fn set_relation_avg(&mut self, avg: f64) -> Result<(), ParamError> {
        self.update(|p| p.relation_avg = avg)
    }

    pub fn set_relation_variance(&mut self, variance: f64) -> Result<(), ParamError> {
        self.update(|p| p.relation_variance = variance)
    }

    pub fn set_iterations(&mut self, iterations: usize) -> Result<(), ParamError> {
        self.update(|p| p.iterations = iterations)
    }

    fn update(&mut self, edit: impl FnOnce(&mut SimulationParameters)) -> Result<(), ParamError> {
        let mut params = self.params.clone();
        edit(&mut params);
        self.set_params(params)
    }

    /// Replaces all three seeds, recomputing from the earliest stage whose
    /// seed changed.
    pub fn set_seeds(&mut self, seeds: SeedTriple) {
        let changed = if seeds.start_positions != self.seeds.start_positions {
            Some(Stage::StartPositions)
        } else if seeds.relation_mask != self.seeds.relation_mask {
            Some(Stage::RelationMask)
        } else if seeds.relation_matrix != self.seeds.relation_matrix {
            Some(Stage::RelationMatrix)
        } else {
            None
        };

        self.seeds = seeds;
        if let Some(stage) = changed {
            self.stages.invalidate(stage);
            self.refresh();
        }
    }

    pub fn reseed_start_positions(&mut self) {
        self.seeds.start_positions = self.seed_provider.next_seed();
        self.reseeded(Stage::StartPositions, self.seeds.start_positions);
    }

    pub fn reseed_relation_mask(&mut self) {
        self.seeds.relation_mask = self.seed_provider.next_seed();
        self.reseeded(Stage::RelationMask, self.seeds.relation_mask);
    }

    pub fn reseed_relation_matrix(&mut self) {
        self.seeds.relation_matrix = self.seed_provider.next_seed();
        self.reseeded(Stage::RelationMatrix, self.seeds.relation_matrix);
    }

    fn reseeded(&mut self, stage: Stage, seed: u64) {
        log::debug!("Reseeded {} with {:#018x}", stage.name(), seed);
        self.stages.invalidate(stage);
        self.refresh();
    }

    // Pipeline

    /// Recomputes every invalid stage, in order.
    ///
    /// Returns `true` if the position history was recomputed.
    pub fn refresh(&mut self) -> bool {
        let Some(first) = self.stages.first_invalid() else {
            return false;
        };

        for stage in first.and_downstream() {
            let started = Instant::now();
            match stage {
                Stage::StartPositions => self.generate_start_positions(),
                Stage::RelationMask => self.generate_relation_mask(),
                Stage::RelationMatrix => self.generate_relation_matrix(),
                Stage::Positions => self.compute_positions(),
            }
            log::debug!(
                "Computed {} for {} walkers in {:.2?}",
                stage.name(),
                self.params.count,
                started.elapsed()
            );
        }
        true
    }

    /// Draws `count` start positions in the unit cube from the start
    /// position seed.
    pub fn generate_start_positions(&mut self) {
        let mut rng = stage_rng(self.seeds.start_positions);
        self.unit_positions = (0..self.params.count)
            .map(|_| {
                let x = spread_sample(&mut rng, 0.0, 1.0);
                let y = spread_sample(&mut rng, 0.0, 1.0);
                let z = spread_sample(&mut rng, 0.0, 1.0);
                DVec3::new(x, y, z)
            })
            .collect();
        self.stages.mark_valid(Stage::StartPositions);
    }

    /// Builds the relation mask for the current relation model from the
    /// relation mask seed.
    pub fn generate_relation_mask(&mut self) {
        let mut rng = stage_rng(self.seeds.relation_mask);
        self.relation_mask =
            RelationMask::generate(self.params.relation_model, self.params.count, &mut rng);
        self.stages.mark_valid(Stage::RelationMask);
    }

    /// Draws relation weights from the relation matrix seed and restricts
    /// them to the relation mask.
    pub fn generate_relation_matrix(&mut self) {
        let mut rng = stage_rng(self.seeds.relation_matrix);
        self.relation_matrix = RelationMatrix::generate(
            &self.relation_mask,
            self.params.relation_avg,
            self.params.relation_variance,
            &mut rng,
        );
        self.stages.mark_valid(Stage::RelationMatrix);
    }

    /// Integrates `iterations` snapshots. Snapshot 0 is the start positions;
    /// every later snapshot is one step of the interaction law applied to the
    /// previous one.
    pub fn compute_positions(&mut self) {
        let law = self.params.interaction_law;
        let iterations = self.params.iterations;

        let mut state = WalkerState::at_rest(self.start_positions());
        let mut history = PositionHistory::with_capacity(self.params.count, iterations);

        for k in 0..iterations {
            history.record(&state.positions);
            if k + 1 < iterations {
                state.step(law, &self.relation_matrix);
            }
        }

        self.history = history;
        self.stages.mark_valid(Stage::Positions);
    }
}
