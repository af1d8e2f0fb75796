//! Host interactions delivered to trigger handlers
//!
//! A click in a browser carries a default action (following the anchor the
//! trigger is drawn as). The host exposes suppressing it as a capability of
//! the interaction value so the carousel logic itself stays host-agnostic.

/// One activation of a trigger, as delivered by the host's event dispatch.
pub trait Interaction {
    /// Suppresses the host's default handling of this activation.
    fn prevent_default(&self);
}

/// Interaction with no default action, for programmatic activations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Programmatic;

impl Interaction for Programmatic {
    fn prevent_default(&self) {}
}
