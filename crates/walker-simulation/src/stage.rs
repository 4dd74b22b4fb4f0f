//! Pipeline stages and their validity
//!
//! Validity is always a prefix of [`Stage::ALL`]: a stage can only be valid
//! if every stage before it is valid too.

/// One step of the generation pipeline, in dependency order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    StartPositions,
    RelationMask,
    RelationMatrix,
    Positions,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::StartPositions,
        Stage::RelationMask,
        Stage::RelationMatrix,
        Stage::Positions,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Stage::StartPositions => "start positions",
            Stage::RelationMask => "relation mask",
            Stage::RelationMatrix => "relation matrix",
            Stage::Positions => "positions",
        }
    }

    /// This stage followed by every stage depending on it
    pub fn and_downstream(self) -> impl Iterator<Item = Stage> {
        Self::ALL.into_iter().skip(self.index())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageState {
    Invalid,
    Valid,
}

/// Per-stage validity of a [`crate::WalkerSystem`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageTracker {
    states: [StageState; 4],
}

impl Default for StageTracker {
    fn default() -> Self {
        Self {
            states: [StageState::Invalid; 4],
        }
    }
}

impl StageTracker {
    pub fn state(&self, stage: Stage) -> StageState {
        self.states[stage.index()]
    }

    pub fn is_valid(&self, stage: Stage) -> bool {
        self.state(stage) == StageState::Valid
    }

    /// Marks `stage` and all stages after it as invalid.
    pub fn invalidate(&mut self, stage: Stage) {
        for s in stage.and_downstream() {
            self.states[s.index()] = StageState::Invalid;
        }
    }

    /// Marks `stage` as valid and its downstream stages as invalid, since
    /// they were derived from the previous output of `stage`.
    pub fn mark_valid(&mut self, stage: Stage) {
        debug_assert!(
            Stage::ALL[..stage.index()].iter().all(|&s| self.is_valid(s)),
            "{} computed before its upstream stages",
            stage.name()
        );
        self.invalidate(stage);
        self.states[stage.index()] = StageState::Valid;
    }

    /// Earliest stage needing recomputation, if any
    pub fn first_invalid(&self) -> Option<Stage> {
        Stage::ALL.into_iter().find(|&s| !self.is_valid(s))
    }
}
