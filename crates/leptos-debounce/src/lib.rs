//! Leptos Debounce Utilities
//!
//! Timer helpers for Leptos built on `gloo-timers`.
//! A pending timer is cancelled by dropping its `Timeout`, so each helper
//! keeps at most one timer alive and replaces it on every new trigger.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Bookkeeping behind `use_debounced`, kept free of timers
///
/// Every new source value takes a generation number. A timer that fires
/// only publishes if its generation is still the latest pending one.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    settled: T,
    pending: Option<(u64, T)>,
    generation: u64,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(initial: T) -> Self {
        Self {
            settled: initial,
            pending: None,
            generation: 0,
        }
    }

    /// Last published value
    pub fn settled(&self) -> &T {
        &self.settled
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a source change; returns the generation to fire after the delay,
    /// or `None` when the value is already published (any pending one is dropped)
    pub fn push(&mut self, value: T) -> Option<u64> {
        self.generation += 1;
        if value == self.settled {
            self.pending = None;
            return None;
        }
        self.pending = Some((self.generation, value));
        Some(self.generation)
    }

    /// The timer for `generation` elapsed; yields the value to publish
    pub fn fire(&mut self, generation: u64) -> Option<T> {
        match self.pending.take() {
            Some((latest, value)) if latest == generation => {
                self.settled = value.clone();
                Some(value)
            }
            other => {
                self.pending = other;
                None
            }
        }
    }
}

/// Holder for a single pending timeout
#[derive(Clone, Copy)]
pub struct TimerSlot {
    pending: StoredValue<Option<Timeout>, LocalStorage>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self {
            pending: StoredValue::new_local(None),
        }
    }

    /// Schedule `callback` after `delay_ms`, cancelling whatever was pending
    pub fn schedule(&self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        let timeout = Timeout::new(delay_ms, callback);
        self.pending.update_value(|slot| *slot = Some(timeout));
    }

    /// Drop the pending timer without firing it
    pub fn cancel(&self) {
        self.pending.update_value(|slot| *slot = None);
    }
}

impl Default for TimerSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Mirror `source`, but only after it has been quiet for `delay_ms`
///
/// The initial value is passed through immediately.
pub fn use_debounced<T>(source: Signal<T>, delay_ms: u32) -> ReadSignal<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let initial = source.get_untracked();
    let (debounced, set_debounced) = signal(initial.clone());
    let state = StoredValue::new(Debouncer::new(initial));
    let timer = TimerSlot::new();

    Effect::new(move |_| {
        let value = source.get();
        match state.try_update_value(|debouncer| debouncer.push(value)).flatten() {
            Some(generation) => timer.schedule(delay_ms, move || {
                if let Some(value) = state.try_update_value(|debouncer| debouncer.fire(generation)).flatten() {
                    set_debounced.set(value);
                }
            }),
            None => timer.cancel(),
        }
    });

    debounced
}

/// Clear `target` back to `None` once it has stayed `Some` for `delay_ms`
///
/// Each new `Some` value restarts the countdown.
pub fn use_auto_dismiss<T>(target: RwSignal<Option<T>>, delay_ms: u32)
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let timer = TimerSlot::new();

    Effect::new(move |_| {
        if target.with(|value| value.is_some()) {
            timer.schedule(delay_ms, move || target.set(None));
        } else {
            timer.cancel();
        }
    });
}
