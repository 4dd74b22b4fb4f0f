//! Interaction laws and relation models
//!
//! Both enumerations are plain tags. Their display labels live in separate
//! lookup tables ([`INTERACTION_LAW_LABELS`], [`RELATION_MODEL_LABELS`]) so
//! that nothing in the simulation depends on how a tag is presented.

use crate::constants::{LINEAR_DEGREE, QUADRATIC_DEGREE};
use crate::forces::ForceKernel;

/// Numeric rule binding walkers together at each iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionLaw {
    /// Each walker moves a relation-weighted fraction of the way towards
    /// every walker it is related to.
    #[default]
    Position,
    /// Like [`InteractionLaw::Position`], but the correction term uses the
    /// transposed relations, so only asymmetric relations produce motion.
    Asymmetry,
    /// Velocity-based: raw displacements act as forces (spring-like).
    Velocity,
    /// Velocity-based Newton-style law with force magnitude `k / d`.
    NewtonLinear,
    /// Velocity-based Newton-style law with force magnitude `k / d²`.
    Newton,
}

/// How an interaction law advances positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Integration {
    /// Direct position update from the relation rows
    Position,
    /// Direct position update from relation rows minus relation columns
    Asymmetry,
    /// Persistent velocity accumulated from pairwise forces
    Force(ForceKernel),
}

impl InteractionLaw {
    pub const ALL: [InteractionLaw; 5] = [
        InteractionLaw::Position,
        InteractionLaw::Asymmetry,
        InteractionLaw::Velocity,
        InteractionLaw::NewtonLinear,
        InteractionLaw::Newton,
    ];

    /// Tag at position `index` of [`InteractionLaw::ALL`] (UI list rows).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub const fn integration(self) -> Integration {
        match self {
            InteractionLaw::Position => Integration::Position,
            InteractionLaw::Asymmetry => Integration::Asymmetry,
            InteractionLaw::Velocity => Integration::Force(ForceKernel::Spring),
            InteractionLaw::NewtonLinear => Integration::Force(ForceKernel::Newton {
                degree: LINEAR_DEGREE,
            }),
            InteractionLaw::Newton => Integration::Force(ForceKernel::Newton {
                degree: QUADRATIC_DEGREE,
            }),
        }
    }

    /// Whether the law keeps a velocity per walker between iterations
    pub const fn is_velocity_based(self) -> bool {
        matches!(self.integration(), Integration::Force(_))
    }
}

/// Density model of the relation mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RelationModel {
    /// Walker `i` is influenced by walker `(i + 1) mod N` only.
    #[default]
    OneToOne,
    /// Each off-diagonal relation exists with a 25% probability.
    Sparse,
    /// Every walker is influenced by every other walker.
    ManyToMany,
}

impl RelationModel {
    pub const ALL: [RelationModel; 3] = [
        RelationModel::OneToOne,
        RelationModel::Sparse,
        RelationModel::ManyToMany,
    ];

    /// Tag at position `index` of [`RelationModel::ALL`] (UI list rows).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Whether mask generation draws from the relation mask seed
    pub const fn is_random(self) -> bool {
        matches!(self, RelationModel::Sparse)
    }
}

/// Display labels for [`InteractionLaw`]
pub const INTERACTION_LAW_LABELS: [(InteractionLaw, &str); 5] = [
    (InteractionLaw::Position, "Distance fraction"),
    (InteractionLaw::Asymmetry, "Asymmetry"),
    (InteractionLaw::Velocity, "Velocity"),
    (InteractionLaw::NewtonLinear, "Newton's (linear)"),
    (InteractionLaw::Newton, "Newton's (quadratic)"),
];

/// Display labels for [`RelationModel`]
pub const RELATION_MODEL_LABELS: [(RelationModel, &str); 3] = [
    (RelationModel::OneToOne, "One to one"),
    (RelationModel::Sparse, "Sparse (25%)"),
    (RelationModel::ManyToMany, "Many to many"),
];

pub fn interaction_law_label(law: InteractionLaw) -> &'static str {
    INTERACTION_LAW_LABELS
        .iter()
        .find(|(tag, _)| *tag == law)
        .map_or("", |&(_, label)| label)
}

pub fn relation_model_label(model: RelationModel) -> &'static str {
    RELATION_MODEL_LABELS
        .iter()
        .find(|(tag, _)| *tag == model)
        .map_or("", |&(_, label)| label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tag_has_a_label() {
        for law in InteractionLaw::ALL {
            assert!(!interaction_law_label(law).is_empty(), "{law:?}");
        }
        for model in RelationModel::ALL {
            assert!(!relation_model_label(model).is_empty(), "{model:?}");
        }
    }

    #[test]
    fn from_index_follows_list_order() {
        assert_eq!(InteractionLaw::from_index(0), Some(InteractionLaw::Position));
        assert_eq!(InteractionLaw::from_index(4), Some(InteractionLaw::Newton));
        assert_eq!(InteractionLaw::from_index(5), None);
        assert_eq!(RelationModel::from_index(2), Some(RelationModel::ManyToMany));
        assert_eq!(RelationModel::from_index(3), None);
    }

    #[test]
    fn newton_laws_map_to_their_degree() {
        assert_eq!(
            InteractionLaw::NewtonLinear.integration(),
            Integration::Force(ForceKernel::Newton { degree: 1 })
        );
        assert_eq!(
            InteractionLaw::Newton.integration(),
            Integration::Force(ForceKernel::Newton { degree: 2 })
        );
        assert!(InteractionLaw::Velocity.is_velocity_based());
        assert!(!InteractionLaw::Asymmetry.is_velocity_based());
    }
}
