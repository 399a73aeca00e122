//! Host-side joint descriptions.

use super::registry::{BodyKey, JointKey};

/// Constraint flavor joining two bodies.
#[derive(Debug, Clone, Copy)]
pub enum JointKind {
    /// Pin joint: bodies rotate freely about a shared anchor. Optional
    /// angular limits in radians (display convention, clockwise-positive).
    Revolute { limits: Option<[f32; 2]> },
    /// Piston joint: translation along `axis` (display coordinates),
    /// rotation locked. Optional translation limits in pixels.
    Prismatic {
        axis: [f32; 2],
        limits: Option<[f32; 2]>,
    },
    /// Welds the two anchors together rigidly.
    Fixed,
    /// Damped spring keeping the anchors `rest_length` pixels apart.
    Spring {
        rest_length: f32,
        stiffness: f32,
        damping: f32,
    },
}

/// Everything needed to create a joint between two registered bodies.
#[derive(Debug, Clone)]
pub struct JointDef {
    pub kind: JointKind,
    pub body_a: BodyKey,
    pub body_b: BodyKey,
    /// Anchor on body A, pixels, relative to the body origin.
    pub local_anchor_a: [f32; 2],
    /// Anchor on body B, pixels, relative to the body origin.
    pub local_anchor_b: [f32; 2],
}

impl JointDef {
    pub fn new(kind: JointKind, body_a: BodyKey, body_b: BodyKey) -> Self {
        Self {
            kind,
            body_a,
            body_b,
            local_anchor_a: [0.0, 0.0],
            local_anchor_b: [0.0, 0.0],
        }
    }

    pub fn with_anchors(mut self, anchor_a: [f32; 2], anchor_b: [f32; 2]) -> Self {
        self.local_anchor_a = anchor_a;
        self.local_anchor_b = anchor_b;
        self
    }
}

/// A host-owned joint.
///
/// Joints die in two ways: explicit unregistration, or as a cascade when one
/// of their bodies is unregistered. After a cascade the wrapper's key is
/// stale and a later explicit unregistration is a harmless no-op — the world
/// never asks the engine to destroy the same joint twice.
#[derive(Debug, Clone)]
pub struct Joint {
    pub(crate) def: JointDef,
    pub(crate) key: Option<JointKey>,
}

impl Joint {
    pub fn new(def: JointDef) -> Self {
        Self { def, key: None }
    }

    pub fn def(&self) -> &JointDef {
        &self.def
    }

    /// Registry key while registered, `None` otherwise. May be stale after a
    /// cascade; stale keys fail every world lookup.
    pub fn key(&self) -> Option<JointKey> {
        self.key
    }
}
