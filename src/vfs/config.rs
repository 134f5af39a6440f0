/// What `mkdir` does when the parent already has a child with the requested name.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Allocate a new node anyway and rebind the name to it. The previous node stays in the
    /// table but can no longer be reached by name. The shadowed ID is reported in
    /// [`Created::shadowed`](crate::Created).
    #[default]
    Shadow,
    /// Refuse with [`NamespaceError::AlreadyExists`](crate::NamespaceError).
    Reject,
}

/// Tunables of a [`TreeFS`](crate::TreeFS). Survives `reset()`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TreeConfig {
    pub duplicate_policy: DuplicatePolicy,
}

impl TreeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }
}
