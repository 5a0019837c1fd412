//! Optimistic like/subscribe toggles.
//!
//! # Design
//! - The local shadow flips immediately; the server call runs unawaited.
//! - Each flip returns a token so a late failure only rolls back if no newer
//!   flip happened since.
//! - Rollback is a policy; the default keeps the optimistic state.
//! - New authoritative props replace the shadow wholesale.

/// What to do when the server rejects a toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RollbackPolicy {
    /// Leave the optimistic state in place.
    #[default]
    Keep,
    /// Restore the pre-toggle state if the failed toggle is still the latest.
    Revert,
}

/// Handle for one optimistic flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleToken {
    generation: u64,
    previous: (bool, u64),
}

/// Local shadow of an active flag and its counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OptimisticToggle {
    active: bool,
    count: u64,
    generation: u64,
    policy: RollbackPolicy,
}

impl OptimisticToggle {
    /// Shadow seeded from authoritative values.
    #[must_use]
    pub const fn new(active: bool, count: u64) -> Self {
        Self {
            active,
            count,
            generation: 0,
            policy: RollbackPolicy::Keep,
        }
    }

    /// Same shadow with a different rollback policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: RollbackPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Current flag.
    #[must_use]
    pub const fn active(&self) -> bool {
        self.active
    }

    /// Current counter.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Flip the flag and move the counter by one, saturating at zero.
    pub const fn toggle(&mut self) -> ToggleToken {
        let previous = (self.active, self.count);
        self.active = !self.active;
        self.count = if self.active {
            self.count.saturating_add(1)
        } else {
            self.count.saturating_sub(1)
        };
        self.generation += 1;
        ToggleToken {
            generation: self.generation,
            previous,
        }
    }

    /// Converge to new authoritative values.
    pub const fn sync(&mut self, active: bool, count: u64) {
        self.active = active;
        self.count = count;
        self.generation += 1;
    }

    /// Record the server outcome of `token`'s flip.
    ///
    /// Returns `true` when the shadow changed.
    pub const fn settle(&mut self, token: ToggleToken, succeeded: bool) -> bool {
        if succeeded || token.generation != self.generation {
            return false;
        }
        match self.policy {
            RollbackPolicy::Keep => false,
            RollbackPolicy::Revert => {
                self.active = token.previous.0;
                self.count = token.previous.1;
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_toggle_moves_count_both_ways() {
        let mut like = OptimisticToggle::new(false, 5);
        like.toggle();
        assert_eq!((like.active(), like.count()), (true, 6));
        like.toggle();
        assert_eq!((like.active(), like.count()), (false, 5));
    }

    #[test]
    fn unlike_at_zero_saturates() {
        let mut like = OptimisticToggle::new(true, 0);
        like.toggle();
        assert_eq!((like.active(), like.count()), (false, 0));
    }

    #[test]
    fn default_policy_keeps_optimistic_state_on_failure() {
        let mut like = OptimisticToggle::new(false, 5);
        let token = like.toggle();
        assert!(!like.settle(token, false));
        assert_eq!((like.active(), like.count()), (true, 6));
    }

    #[test]
    fn revert_policy_restores_latest_failed_flip_only() {
        let mut like = OptimisticToggle::new(false, 5).with_policy(RollbackPolicy::Revert);
        let first = like.toggle();
        let second = like.toggle();
        assert!(!like.settle(first, false));
        assert_eq!((like.active(), like.count()), (false, 5));

        let third = like.toggle();
        assert!(like.settle(third, false));
        assert_eq!((like.active(), like.count()), (false, 5));
        assert!(!like.settle(second, true));
    }

    #[test]
    fn sync_replaces_shadow_and_invalidates_tokens() {
        let mut sub = OptimisticToggle::new(false, 10).with_policy(RollbackPolicy::Revert);
        let token = sub.toggle();
        sub.sync(true, 42);
        assert!(!sub.settle(token, false));
        assert_eq!((sub.active(), sub.count()), (true, 42));
    }
}
