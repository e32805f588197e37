//! Generation context - state owned by exactly one generation run

use std::fmt;
use std::str::FromStr;

use crate::generation::dto::DtoCache;
use crate::generation::{Diagnostic, GenerationError};

/// What to do when two path templates derive the same controller name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Fold the actions of every such path into one controller
    #[default]
    Merge,
    /// Abort the run with [`GenerationError::ControllerCollision`]
    Reject,
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionPolicy::Merge => write!(f, "merge"),
            CollisionPolicy::Reject => write!(f, "reject"),
        }
    }
}

impl FromStr for CollisionPolicy {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "merge" => Ok(CollisionPolicy::Merge),
            "reject" => Ok(CollisionPolicy::Reject),
            _ => Err(GenerationError::InvalidConfiguration(format!(
                "unknown collision policy '{s}', expected 'merge' or 'reject'"
            ))),
        }
    }
}

/// The context that flows through one generation run.
///
/// A fresh context means a fresh DTO cache; nothing carries over between runs.
#[derive(Debug, Default)]
pub struct GenerationContext {
    pub collision_policy: CollisionPolicy,
    pub dtos: DtoCache,
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationContext {
    pub fn new(collision_policy: CollisionPolicy) -> Self {
        Self {
            collision_policy,
            ..Default::default()
        }
    }

    /// Record a recoverable problem and keep going
    pub fn report(&mut self, diagnostic: Diagnostic) {
        tracing::debug!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}
