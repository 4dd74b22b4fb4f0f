//! Simulation parameters and their validation

use crate::error::ParamError;
use crate::stage::Stage;
use walker_physics::{InteractionLaw, RelationModel};

/// Snapshot of every parameter consumed by one simulation pass
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    /// Number of walkers
    pub count: usize,
    /// Half-extent of the cube walkers start in
    pub spread: f64,
    pub interaction_law: InteractionLaw,
    pub relation_model: RelationModel,
    /// Center of the relation weight distribution. Negative means repulsion.
    pub relation_avg: f64,
    /// Half-width of the relation weight distribution. Zero means every
    /// relation weighs exactly `relation_avg`.
    pub relation_variance: f64,
    /// Number of recorded snapshots, the start positions included
    pub iterations: usize,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            count: 4,
            spread: 50.0,
            interaction_law: InteractionLaw::Position,
            relation_model: RelationModel::OneToOne,
            relation_avg: 0.05,
            relation_variance: 0.0,
            iterations: 50,
        }
    }
}

impl SimulationParameters {
    pub fn validate(&self) -> Result<(), ParamError> {
        validate_count(self.count)?;
        validate_spread(self.spread)?;
        validate_relation_avg(self.relation_avg)?;
        validate_relation_variance(self.relation_variance)?;
        validate_iterations(self.iterations)?;
        Ok(())
    }

    /// Earliest stage invalidated by moving from `self` to `next`.
    ///
    /// - `count`: every stage
    /// - `relation_model`: relation mask onwards
    /// - `relation_avg`, `relation_variance`: relation matrix onwards
    /// - `spread`, `iterations`, `interaction_law`: positions only
    pub fn invalidated_stage(&self, next: &SimulationParameters) -> Option<Stage> {
        if self.count != next.count {
            Some(Stage::StartPositions)
        } else if self.relation_model != next.relation_model {
            Some(Stage::RelationMask)
        } else if self.relation_avg != next.relation_avg
            || self.relation_variance != next.relation_variance
        {
            Some(Stage::RelationMatrix)
        } else if self.spread != next.spread
            || self.iterations != next.iterations
            || self.interaction_law != next.interaction_law
        {
            Some(Stage::Positions)
        } else {
            None
        }
    }
}

pub fn validate_count(count: usize) -> Result<(), ParamError> {
    if count < 1 {
        return Err(ParamError::InvalidCount(count));
    }
    Ok(())
}

pub fn validate_iterations(iterations: usize) -> Result<(), ParamError> {
    if iterations < 1 {
        return Err(ParamError::InvalidIterations(iterations));
    }
    Ok(())
}

pub fn validate_spread(spread: f64) -> Result<(), ParamError> {
    if !(spread.is_finite() && spread > 0.0) {
        return Err(ParamError::InvalidSpread(spread));
    }
    Ok(())
}

pub fn validate_relation_avg(avg: f64) -> Result<(), ParamError> {
    if !avg.is_finite() {
        return Err(ParamError::InvalidRelationAverage(avg));
    }
    Ok(())
}

pub fn validate_relation_variance(variance: f64) -> Result<(), ParamError> {
    if !(variance.is_finite() && variance >= 0.0) {
        return Err(ParamError::InvalidRelationVariance(variance));
    }
    Ok(())
}
