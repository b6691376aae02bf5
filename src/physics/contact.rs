//! Contact rules between surface materials.
//!
//! Rapier has no notion of a per-pair contact material; it combines the two
//! colliders' coefficients with a [`CoefficientCombineRule`] and uses the rule
//! with the higher priority (`Average < Min < Multiply < Max`). A material that
//! owns a self rule therefore gets `Min` restitution and `Max` friction: against
//! itself the self rule comes out unchanged, against any default-rule surface
//! the default coefficients win, provided the self rule is at least as bouncy
//! and at most as rough as the default (checked by `CradleConfig::validate`).

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::components::SurfaceMaterial;
use crate::core::config::{ContactConfig, CradleConfig, RuleCoefficients};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContactRule {
    pub a: SurfaceMaterial,
    pub b: SurfaceMaterial,
    pub restitution: f32,
    pub friction: f32,
}

impl ContactRule {
    #[inline]
    pub fn matches(&self, x: SurfaceMaterial, y: SurfaceMaterial) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    #[inline]
    pub fn coefficients(&self) -> RuleCoefficients {
        RuleCoefficients {
            restitution: self.restitution,
            friction: self.friction,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct ContactRules {
    default: RuleCoefficients,
    rules: Vec<ContactRule>,
}

impl ContactRules {
    pub fn from_config(cfg: &ContactConfig) -> Self {
        Self {
            default: cfg.default,
            rules: vec![ContactRule {
                a: SurfaceMaterial::Ball,
                b: SurfaceMaterial::Ball,
                restitution: cfg.ball.restitution,
                friction: cfg.ball.friction,
            }],
        }
    }

    pub fn default_rule(&self) -> RuleCoefficients {
        self.default
    }

    pub fn rules(&self) -> &[ContactRule] {
        &self.rules
    }

    /// Effective coefficients when `a` touches `b`.
    pub fn resolve(&self, a: SurfaceMaterial, b: SurfaceMaterial) -> RuleCoefficients {
        self.rules
            .iter()
            .find(|r| r.matches(a, b))
            .map(ContactRule::coefficients)
            .unwrap_or(self.default)
    }

    /// Collider components encoding this table for a body of `material`.
    pub fn collider_coefficients(&self, material: SurfaceMaterial) -> (Restitution, Friction) {
        match self.rules.iter().find(|r| r.a == material && r.b == material) {
            Some(rule) => (
                Restitution {
                    coefficient: rule.restitution,
                    combine_rule: CoefficientCombineRule::Min,
                },
                Friction {
                    coefficient: rule.friction,
                    combine_rule: CoefficientCombineRule::Max,
                },
            ),
            None => (
                Restitution {
                    coefficient: self.default.restitution,
                    combine_rule: CoefficientCombineRule::Average,
                },
                Friction {
                    coefficient: self.default.friction,
                    combine_rule: CoefficientCombineRule::Average,
                },
            ),
        }
    }
}

impl FromWorld for ContactRules {
    fn from_world(world: &mut World) -> Self {
        world
            .get_resource::<CradleConfig>()
            .map(|cfg| Self::from_config(&cfg.contact))
            .unwrap_or_else(|| Self::from_config(&ContactConfig::default()))
    }
}
