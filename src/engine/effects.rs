//! Timed status effects and the expiry scheduler behind them.
//!
//! Every activation takes a fresh [`ActivationToken`] and schedules its own
//! expiry. An expiry only clears its effect while the effect still carries the
//! same token, so a superseded timer fires harmlessly.

use std::time::Duration;

/// A timed status effect granted by food.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Effect {
    SpeedBoost,
    Invincibility,
}

/// Identity of a single effect activation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ActivationToken(u64);

#[derive(Debug, Clone)]
struct ScheduledExpiry {
    due: Duration,
    effect: Effect,
    token: ActivationToken,
}

/// Deferred expiry callbacks ordered by due time.
#[derive(Debug, Clone, Default)]
pub struct ExpiryScheduler {
    now: Duration,
    next_token: u64,
    pending: Vec<ScheduledExpiry>,
}

impl ExpiryScheduler {
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedules `effect` to expire `delay` from now.
    pub fn schedule(&mut self, effect: Effect, delay: Duration) -> ActivationToken {
        let token = ActivationToken(self.next_token);
        self.next_token += 1;
        let due = self.now + delay;
        let index = self.pending.partition_point(|entry| entry.due <= due);
        self.pending.insert(index, ScheduledExpiry { due, effect, token });
        token
    }

    /// Due time of the task scheduled under `token`.
    pub fn due(&self, token: ActivationToken) -> Option<Duration> {
        self.pending
            .iter()
            .find(|entry| entry.token == token)
            .map(|entry| entry.due)
    }

    /// Moves the clock forward and drains every task that came due, oldest first.
    pub fn advance(&mut self, dt: Duration) -> Vec<(Effect, ActivationToken)> {
        self.now += dt;
        let ready = self.pending.partition_point(|entry| entry.due <= self.now);
        self.pending
            .drain(..ready)
            .map(|entry| (entry.effect, entry.token))
            .collect()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

/// Speed boost and invincibility state.
#[derive(Debug, Clone)]
pub struct StatusEffects {
    duration: Duration,
    scheduler: ExpiryScheduler,
    speed_boost: Option<ActivationToken>,
    invincibility: Option<ActivationToken>,
}

impl StatusEffects {
    pub fn new(duration: Duration) -> Self {
        StatusEffects {
            duration,
            scheduler: ExpiryScheduler::default(),
            speed_boost: None,
            invincibility: None,
        }
    }

    fn slot(&self, effect: Effect) -> Option<ActivationToken> {
        match effect {
            Effect::SpeedBoost => self.speed_boost,
            Effect::Invincibility => self.invincibility,
        }
    }

    fn slot_mut(&mut self, effect: Effect) -> &mut Option<ActivationToken> {
        match effect {
            Effect::SpeedBoost => &mut self.speed_boost,
            Effect::Invincibility => &mut self.invincibility,
        }
    }

    pub fn is_active(&self, effect: Effect) -> bool {
        self.slot(effect).is_some()
    }

    /// Time left before `effect` runs out, if it is active.
    pub fn remaining(&self, effect: Effect) -> Option<Duration> {
        let token = self.slot(effect)?;
        let due = self.scheduler.due(token)?;
        Some(due.saturating_sub(self.scheduler.now()))
    }

    /// Starts the speed boost. Does nothing while one is already running:
    /// boosts neither stack nor refresh. Returns whether a boost started.
    pub fn activate_speed_boost(&mut self) -> bool {
        if self.speed_boost.is_some() {
            return false;
        }
        let token = self.scheduler.schedule(Effect::SpeedBoost, self.duration);
        self.speed_boost = Some(token);
        true
    }

    /// Arms invincibility, restarting its countdown if it is already active.
    pub fn arm_invincibility(&mut self) {
        let token = self.scheduler.schedule(Effect::Invincibility, self.duration);
        self.invincibility = Some(token);
    }

    /// Advances effect time and returns the effects that ended.
    pub fn advance(&mut self, dt: Duration) -> Vec<Effect> {
        let mut ended = Vec::new();
        for (effect, token) in self.scheduler.advance(dt) {
            let slot = self.slot_mut(effect);
            if *slot == Some(token) {
                *slot = None;
                ended.push(effect);
            }
        }
        ended
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE_SECONDS: Duration = Duration::from_millis(5000);

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn scheduler_fires_in_due_order() {
        let mut scheduler = ExpiryScheduler::default();
        let late = scheduler.schedule(Effect::Invincibility, ms(300));
        let early = scheduler.schedule(Effect::SpeedBoost, ms(100));

        assert!(scheduler.advance(ms(99)).is_empty());
        assert_eq!(scheduler.advance(ms(1)), vec![(Effect::SpeedBoost, early)]);
        assert_eq!(scheduler.advance(ms(500)), vec![(Effect::Invincibility, late)]);
        assert_eq!(scheduler.pending_len(), 0);
    }

    #[test]
    fn tokens_are_unique() {
        let mut scheduler = ExpiryScheduler::default();
        let a = scheduler.schedule(Effect::SpeedBoost, ms(10));
        let b = scheduler.schedule(Effect::SpeedBoost, ms(10));
        assert_ne!(a, b);
    }

    #[test]
    fn speed_boost_expires_after_exactly_five_seconds() {
        let mut effects = StatusEffects::new(FIVE_SECONDS);
        assert!(effects.activate_speed_boost());
        assert!(effects.advance(ms(4999)).is_empty());
        assert!(effects.is_active(Effect::SpeedBoost));
        assert_eq!(effects.advance(ms(1)), vec![Effect::SpeedBoost]);
        assert!(!effects.is_active(Effect::SpeedBoost));
    }

    #[test]
    fn speed_boost_does_not_stack_or_refresh() {
        let mut effects = StatusEffects::new(FIVE_SECONDS);
        assert!(effects.activate_speed_boost());
        effects.advance(ms(3000));

        assert!(!effects.activate_speed_boost());
        assert_eq!(effects.remaining(Effect::SpeedBoost), Some(ms(2000)));

        assert_eq!(effects.advance(ms(2000)), vec![Effect::SpeedBoost]);
        assert!(effects.advance(ms(10_000)).is_empty());
    }

    #[test]
    fn rearming_invincibility_supersedes_the_stale_expiry() {
        let mut effects = StatusEffects::new(FIVE_SECONDS);
        effects.arm_invincibility();
        effects.advance(ms(3000));
        effects.arm_invincibility();
        assert_eq!(effects.remaining(Effect::Invincibility), Some(FIVE_SECONDS));

        // The first activation's timer comes due here and must not clear the second.
        assert!(effects.advance(ms(2500)).is_empty());
        assert!(effects.is_active(Effect::Invincibility));

        assert!(effects.advance(ms(2499)).is_empty());
        assert_eq!(effects.advance(ms(1)), vec![Effect::Invincibility]);
        assert!(!effects.is_active(Effect::Invincibility));
    }

    #[test]
    fn effects_expire_independently() {
        let mut effects = StatusEffects::new(FIVE_SECONDS);
        effects.activate_speed_boost();
        effects.advance(ms(1000));
        effects.arm_invincibility();

        assert_eq!(effects.advance(ms(4000)), vec![Effect::SpeedBoost]);
        assert!(effects.is_active(Effect::Invincibility));
        assert_eq!(effects.advance(ms(1000)), vec![Effect::Invincibility]);
    }
}
