//! Visibility-driven reveal controller.
//!
//! Elements are registered in a hidden state and watched through a host
//! [`Viewport`]. The first time one is reported as intersecting, it is flipped
//! to revealed after its delay and dropped from the registry. Delays run on a
//! host [`Timers`] implementation so they can be cancelled when the element
//! unmounts.

use std::{
    collections::HashMap,
    fmt::Debug,
    hash::Hash,
    sync::{
        atomic::{AtomicU8, Ordering},
        Arc, Mutex, MutexGuard, PoisonError,
    },
    time::Duration,
};

pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Presentation state of a watched element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Unregistered,
    Hidden,
    Revealed,
}

impl RevealState {
    fn to_u8(self) -> u8 {
        match self {
            Self::Unregistered => 0,
            Self::Hidden => 1,
            Self::Revealed => 2,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Hidden,
            2 => Self::Revealed,
            _ => Self::Unregistered,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    threshold: f64,
    delay: Duration,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            delay: Duration::ZERO,
        }
    }
}

impl RevealOptions {
    pub fn new(threshold: f64, delay: Duration) -> Self {
        Self {
            threshold: clamp_threshold(threshold),
            delay,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = clamp_threshold(threshold);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_finite() {
        threshold.clamp(0.0, 1.0)
    } else {
        DEFAULT_THRESHOLD
    }
}

/// Arithmetic delay schedule for a run of sibling elements: `base + index * step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    base: Duration,
    step: Duration,
}

impl Stagger {
    pub const fn from_millis(base_ms: u64, step_ms: u64) -> Self {
        Self {
            base: Duration::from_millis(base_ms),
            step: Duration::from_millis(step_ms),
        }
    }

    pub fn delay(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.base.saturating_add(self.step.saturating_mul(index))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEvent<K> {
    pub element: K,
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// Host capability that reports when elements cross into the viewport.
///
/// Events are delivered back through [`RevealController::on_intersection`].
pub trait Viewport<K>: Send + Sync {
    fn is_available(&self) -> bool;
    fn observe(&self, element: &K, threshold: f64);
    fn unobserve(&self, element: &K);
}

/// Host capability for cancellable delayed callbacks.
pub trait Timers: Send + Sync {
    type Handle: Send + 'static;

    /// Returns `None` when the host could not schedule the task.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send>) -> Option<Self::Handle>;
    fn cancel(&self, handle: Self::Handle);
}

impl<K, V: Viewport<K> + ?Sized> Viewport<K> for Arc<V> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn observe(&self, element: &K, threshold: f64) {
        (**self).observe(element, threshold)
    }

    fn unobserve(&self, element: &K) {
        (**self).unobserve(element)
    }
}

impl<T: Timers + ?Sized> Timers for Arc<T> {
    type Handle = T::Handle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send>) -> Option<Self::Handle> {
        (**self).schedule(delay, task)
    }

    fn cancel(&self, handle: Self::Handle) {
        (**self).cancel(handle)
    }
}

#[derive(Debug, Clone)]
struct StateCell(Arc<AtomicU8>);

impl StateCell {
    fn new(state: RevealState) -> Self {
        Self(Arc::new(AtomicU8::new(state.to_u8())))
    }

    fn get(&self) -> RevealState {
        RevealState::from_u8(self.0.load(Ordering::Acquire))
    }

    fn set(&self, state: RevealState) {
        self.0.store(state.to_u8(), Ordering::Release);
    }
}

/// Handle returned by [`RevealController::register`].
///
/// Carries the registration generation, so a handle kept from an earlier
/// mount never unregisters a later registration of the same element.
#[derive(Debug, Clone)]
pub struct Subscription<K> {
    element: K,
    generation: u64,
    state: StateCell,
}

impl<K> Subscription<K> {
    pub fn element(&self) -> &K {
        &self.element
    }

    pub fn state(&self) -> RevealState {
        self.state.get()
    }
}

type RevealFn = Box<dyn FnOnce() + Send>;

enum Pending<H> {
    Idle,
    Scheduling,
    Scheduled(H),
}

struct Entry<H> {
    generation: u64,
    delay: Duration,
    state: StateCell,
    pending: Pending<H>,
    on_reveal: Option<RevealFn>,
}

impl<H> Entry<H> {
    fn settle(mut self, state: RevealState) -> (Option<H>, Option<RevealFn>) {
        self.state.set(state);
        let handle = match std::mem::replace(&mut self.pending, Pending::Idle) {
            Pending::Scheduled(handle) => Some(handle),
            Pending::Idle | Pending::Scheduling => None,
        };
        (handle, self.on_reveal.take())
    }
}

struct Registry<K, H> {
    next_generation: u64,
    entries: HashMap<K, Entry<H>>,
}

struct Shared<K, V, T: Timers> {
    viewport: V,
    timers: T,
    registry: Mutex<Registry<K, T::Handle>>,
}

impl<K, V, T> Shared<K, V, T>
where
    K: Clone + Eq + Hash + Debug + Send + 'static,
    V: Viewport<K> + 'static,
    T: Timers + 'static,
{
    // host callbacks and `on_reveal` must never run while this guard is held
    fn lock(&self) -> MutexGuard<'_, Registry<K, T::Handle>> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn take(&self, element: &K, generation: Option<u64>) -> Option<Entry<T::Handle>> {
        let mut registry = self.lock();
        let current = registry.entries.get(element)?.generation;
        if generation.is_some_and(|g| g != current) {
            return None;
        }
        registry.entries.remove(element)
    }

    fn reveal(&self, element: &K, generation: u64) {
        let Some(entry) = self.take(element, Some(generation)) else {
            return;
        };
        // a scheduled handle here belongs to the timer that is firing
        let (_, on_reveal) = entry.settle(RevealState::Revealed);
        self.viewport.unobserve(element);
        log::debug!("revealed {element:?}");
        if let Some(on_reveal) = on_reveal {
            on_reveal();
        }
    }

    fn remove(&self, element: &K, generation: Option<u64>) {
        let Some(entry) = self.take(element, generation) else {
            return;
        };
        let (handle, _) = entry.settle(RevealState::Unregistered);
        if let Some(handle) = handle {
            self.timers.cancel(handle);
        }
        self.viewport.unobserve(element);
        log::trace!("unregistered {element:?}");
    }
}

/// Shared registry of watched elements.
///
/// Cloning is cheap and every clone drives the same registry.
pub struct RevealController<K, V, T: Timers> {
    shared: Arc<Shared<K, V, T>>,
}

impl<K, V, T: Timers> Clone for RevealController<K, V, T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<K, V, T> RevealController<K, V, T>
where
    K: Clone + Eq + Hash + Debug + Send + 'static,
    V: Viewport<K> + 'static,
    T: Timers + 'static,
{
    pub fn new(viewport: V, timers: T) -> Self {
        Self {
            shared: Arc::new(Shared {
                viewport,
                timers,
                registry: Mutex::new(Registry {
                    next_generation: 0,
                    entries: HashMap::new(),
                }),
            }),
        }
    }

    pub fn viewport(&self) -> &V {
        &self.shared.viewport
    }

    pub fn timers(&self) -> &T {
        &self.shared.timers
    }

    /// Starts watching `element` in the hidden state.
    ///
    /// Registering an element that is still hidden returns the existing
    /// subscription and drops `on_reveal`. When the viewport capability is
    /// missing the element is revealed before this returns.
    pub fn register<F>(&self, element: K, options: RevealOptions, on_reveal: F) -> Subscription<K>
    where
        F: FnOnce() + Send + 'static,
    {
        let available = self.shared.viewport.is_available();
        let subscription = {
            let mut registry = self.shared.lock();
            if let Some(entry) = registry.entries.get(&element) {
                log::debug!("{element:?} is already registered");
                return Subscription {
                    element,
                    generation: entry.generation,
                    state: entry.state.clone(),
                };
            }
            let generation = registry.next_generation;
            registry.next_generation += 1;
            let subscription = Subscription {
                element: element.clone(),
                generation,
                state: StateCell::new(RevealState::Hidden),
            };
            if available {
                registry.entries.insert(
                    element.clone(),
                    Entry {
                        generation,
                        delay: options.delay(),
                        state: subscription.state.clone(),
                        pending: Pending::Idle,
                        on_reveal: Some(Box::new(on_reveal)),
                    },
                );
                subscription
            } else {
                drop(registry);
                log::debug!("viewport unavailable, revealing {element:?} immediately");
                subscription.state.set(RevealState::Revealed);
                on_reveal();
                return subscription;
            }
        };
        self.shared.viewport.observe(&element, options.threshold());
        subscription
    }

    /// Stops watching the registration behind `subscription`, cancelling a
    /// pending reveal. Unknown or stale subscriptions are ignored.
    pub fn unregister(&self, subscription: &Subscription<K>) {
        self.shared
            .remove(&subscription.element, Some(subscription.generation));
    }

    /// Like [`Self::unregister`] but for whatever registration `element` has.
    pub fn unregister_element(&self, element: &K) {
        self.shared.remove(element, None);
    }

    pub fn on_intersection(&self, event: IntersectionEvent<K>) {
        if !event.is_intersecting {
            return;
        }
        let (generation, delay) = {
            let mut registry = self.shared.lock();
            let Some(entry) = registry.entries.get_mut(&event.element) else {
                return;
            };
            if !matches!(entry.pending, Pending::Idle) {
                return;
            }
            entry.pending = Pending::Scheduling;
            (entry.generation, entry.delay)
        };
        log::trace!(
            "{:?} intersecting at ratio {:.2}",
            event.element,
            event.ratio
        );

        if delay.is_zero() {
            self.shared.reveal(&event.element, generation);
            return;
        }

        let shared = Arc::downgrade(&self.shared);
        let element = event.element.clone();
        let task = Box::new(move || {
            if let Some(shared) = shared.upgrade() {
                shared.reveal(&element, generation);
            }
        });
        let Some(handle) = self.shared.timers.schedule(delay, task) else {
            log::warn!("could not schedule reveal of {:?}, revealing now", event.element);
            self.shared.reveal(&event.element, generation);
            return;
        };

        let mut registry = self.shared.lock();
        match registry.entries.get_mut(&event.element) {
            Some(entry) if entry.generation == generation => {
                entry.pending = Pending::Scheduled(handle);
            }
            _ => {
                // already revealed or unregistered while scheduling
                drop(registry);
                self.shared.timers.cancel(handle);
            }
        }
    }

    /// Reveals every registered element at once, cancelling their timers.
    pub fn reveal_all(&self) {
        let entries = self.shared.lock().entries.drain().collect::<Vec<_>>();
        if !entries.is_empty() {
            log::debug!("revealing {} elements", entries.len());
        }
        for (element, entry) in entries {
            let (handle, on_reveal) = entry.settle(RevealState::Revealed);
            if let Some(handle) = handle {
                self.shared.timers.cancel(handle);
            }
            self.shared.viewport.unobserve(&element);
            if let Some(on_reveal) = on_reveal {
                on_reveal();
            }
        }
    }

    pub fn is_registered(&self, element: &K) -> bool {
        self.shared.lock().entries.contains_key(element)
    }

    pub fn len(&self) -> usize {
        self.shared.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize};

    #[derive(Default)]
    struct RecordingViewport {
        unavailable: AtomicBool,
        observed: Mutex<Vec<(u32, f64)>>,
        unobserved: Mutex<Vec<u32>>,
    }

    impl RecordingViewport {
        fn observed(&self) -> Vec<(u32, f64)> {
            self.observed.lock().unwrap().clone()
        }

        fn unobserved(&self) -> Vec<u32> {
            self.unobserved.lock().unwrap().clone()
        }
    }

    impl Viewport<u32> for RecordingViewport {
        fn is_available(&self) -> bool {
            !self.unavailable.load(Ordering::SeqCst)
        }

        fn observe(&self, element: &u32, threshold: f64) {
            self.observed.lock().unwrap().push((*element, threshold));
        }

        fn unobserve(&self, element: &u32) {
            self.unobserved.lock().unwrap().push(*element);
        }
    }

    struct Scheduled {
        id: u64,
        due: Duration,
        task: Box<dyn FnOnce() + Send>,
    }

    /// Virtual clock. Tasks only run from `advance_to`.
    #[derive(Default)]
    struct ManualTimers {
        refuse: AtomicBool,
        now: Mutex<Duration>,
        next_id: AtomicU64,
        queue: Mutex<Vec<Scheduled>>,
        cancelled: AtomicUsize,
    }

    impl ManualTimers {
        fn now(&self) -> Duration {
            *self.now.lock().unwrap()
        }

        fn pending(&self) -> usize {
            self.queue.lock().unwrap().len()
        }

        fn advance_to(&self, target: Duration) {
            loop {
                let next = {
                    let mut queue = self.queue.lock().unwrap();
                    let index = queue
                        .iter()
                        .enumerate()
                        .filter(|(_, s)| s.due <= target)
                        .min_by_key(|(_, s)| (s.due, s.id))
                        .map(|(i, _)| i);
                    match index {
                        Some(i) => queue.remove(i),
                        None => break,
                    }
                };
                *self.now.lock().unwrap() = next.due;
                (next.task)();
            }
            *self.now.lock().unwrap() = target;
        }
    }

    impl Timers for ManualTimers {
        type Handle = u64;

        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send>) -> Option<u64> {
            if self.refuse.load(Ordering::SeqCst) {
                return None;
            }
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let due = self.now() + delay;
            self.queue.lock().unwrap().push(Scheduled { id, due, task });
            Some(id)
        }

        fn cancel(&self, handle: u64) {
            self.cancelled.fetch_add(1, Ordering::SeqCst);
            self.queue.lock().unwrap().retain(|s| s.id != handle);
        }
    }

    type TestController = RevealController<u32, Arc<RecordingViewport>, Arc<ManualTimers>>;

    fn fixture() -> (TestController, Arc<RecordingViewport>, Arc<ManualTimers>) {
        let viewport = Arc::new(RecordingViewport::default());
        let timers = Arc::new(ManualTimers::default());
        let controller = RevealController::new(Arc::clone(&viewport), Arc::clone(&timers));
        (controller, viewport, timers)
    }

    fn counter() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let inner = Arc::clone(&count);
        (count, move || {
            inner.fetch_add(1, Ordering::SeqCst);
        })
    }

    fn hit(element: u32) -> IntersectionEvent<u32> {
        IntersectionEvent {
            element,
            is_intersecting: true,
            ratio: 0.5,
        }
    }

    fn miss(element: u32) -> IntersectionEvent<u32> {
        IntersectionEvent {
            element,
            is_intersecting: false,
            ratio: 0.0,
        }
    }

    fn ms(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    #[test]
    fn test_register_starts_hidden_and_observed() {
        let (controller, viewport, _) = fixture();
        let (count, on_reveal) = counter();

        let sub = controller.register(7, RevealOptions::default(), on_reveal);

        assert_eq!(sub.state(), RevealState::Hidden);
        assert_eq!(*sub.element(), 7);
        assert!(controller.is_registered(&7));
        assert_eq!(viewport.observed(), vec![(7, DEFAULT_THRESHOLD)]);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_zero_delay_reveals_synchronously() {
        let (controller, viewport, timers) = fixture();
        let (count, on_reveal) = counter();
        let sub = controller.register(1, RevealOptions::default(), on_reveal);

        controller.on_intersection(hit(1));

        assert_eq!(sub.state(), RevealState::Revealed);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(timers.pending(), 0);
        assert!(!controller.is_registered(&1));
        assert_eq!(viewport.unobserved(), vec![1]);
    }

    #[test]
    fn test_non_intersecting_event_changes_nothing() {
        let (controller, _, timers) = fixture();
        let (count, on_reveal) = counter();
        let hidden = controller.register(1, RevealOptions::default(), on_reveal);

        controller.on_intersection(miss(1));
        assert_eq!(hidden.state(), RevealState::Hidden);
        assert_eq!(timers.pending(), 0);

        controller.on_intersection(hit(1));
        controller.on_intersection(miss(1));
        assert_eq!(hidden.state(), RevealState::Revealed);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // never registered
        controller.on_intersection(miss(99));
        controller.on_intersection(hit(99));
        assert!(controller.is_empty());
    }

    #[test]
    fn test_staggered_reveal_schedule() {
        let (controller, viewport, timers) = fixture();
        let stagger = Stagger::from_millis(100, 100);
        let subs = (0..5)
            .map(|i| {
                let options = RevealOptions::new(0.1, stagger.delay(i));
                controller.register(i as u32, options, || {})
            })
            .collect::<Vec<_>>();
        assert_eq!(viewport.observed().len(), 5);

        for i in 0..5 {
            controller.on_intersection(hit(i));
        }
        assert_eq!(timers.pending(), 5);

        timers.advance_to(ms(250));
        let states = subs.iter().map(|s| s.state()).collect::<Vec<_>>();
        assert_eq!(
            states,
            vec![
                RevealState::Revealed,
                RevealState::Revealed,
                RevealState::Hidden,
                RevealState::Hidden,
                RevealState::Hidden,
            ]
        );

        timers.advance_to(ms(501));
        assert!(subs.iter().all(|s| s.state() == RevealState::Revealed));
        assert!(controller.is_empty());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_unregister_cancels_pending_reveal() {
        let (controller, viewport, timers) = fixture();
        let (count, on_reveal) = counter();
        let sub = controller.register(3, RevealOptions::default().with_delay(ms(1000)), on_reveal);

        controller.on_intersection(hit(3));
        assert_eq!(timers.pending(), 1);

        timers.advance_to(ms(100));
        controller.unregister(&sub);
        assert_eq!(timers.pending(), 0);
        assert_eq!(timers.cancelled.load(Ordering::SeqCst), 1);

        timers.advance_to(ms(1000));
        assert_eq!(sub.state(), RevealState::Unregistered);
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(viewport.unobserved(), vec![3]);
    }

    #[test]
    fn test_missing_viewport_reveals_immediately() {
        let (controller, viewport, timers) = fixture();
        viewport.unavailable.store(true, Ordering::SeqCst);
        let (count, _) = counter();

        let subs = (0..3)
            .map(|i| {
                let count = Arc::clone(&count);
                controller.register(i, RevealOptions::default().with_delay(ms(300)), move || {
                    count.fetch_add(1, Ordering::SeqCst);
                })
            })
            .collect::<Vec<_>>();

        assert!(subs.iter().all(|s| s.state() == RevealState::Revealed));
        assert_eq!(count.load(Ordering::SeqCst), 3);
        assert_eq!(timers.pending(), 0);
        assert!(viewport.observed().is_empty());
        assert!(controller.is_empty());
    }

    #[test]
    fn test_unregister_is_idempotent() {
        let (controller, viewport, _) = fixture();
        let sub = controller.register(5, RevealOptions::default(), || {});

        controller.unregister(&sub);
        controller.unregister(&sub);
        controller.unregister_element(&5);
        controller.unregister_element(&42);

        assert_eq!(sub.state(), RevealState::Unregistered);
        assert_eq!(viewport.unobserved(), vec![5]);

        // intersection after unregister is ignored
        controller.on_intersection(hit(5));
        assert_eq!(sub.state(), RevealState::Unregistered);
    }

    #[test]
    fn test_revealed_is_terminal() {
        let (controller, _, _) = fixture();
        let sub = controller.register(1, RevealOptions::default(), || {});
        controller.on_intersection(hit(1));

        controller.unregister(&sub);
        controller.on_intersection(miss(1));

        assert_eq!(sub.state(), RevealState::Revealed);
    }

    #[test]
    fn test_double_registration_keeps_one_observer() {
        let (controller, viewport, _) = fixture();
        let (first, on_first) = counter();
        let (second, on_second) = counter();

        let a = controller.register(9, RevealOptions::default(), on_first);
        let b = controller.register(9, RevealOptions::default().with_delay(ms(50)), on_second);

        assert_eq!(viewport.observed().len(), 1);
        assert_eq!(controller.len(), 1);

        controller.on_intersection(hit(9));
        assert_eq!(a.state(), RevealState::Revealed);
        assert_eq!(b.state(), RevealState::Revealed);
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_stale_subscription_leaves_new_registration_alone() {
        let (controller, _, _) = fixture();
        let old = controller.register(4, RevealOptions::default(), || {});
        controller.unregister(&old);

        let new = controller.register(4, RevealOptions::default(), || {});
        controller.unregister(&old);

        assert_eq!(old.state(), RevealState::Unregistered);
        assert_eq!(new.state(), RevealState::Hidden);
        assert!(controller.is_registered(&4));
    }

    #[test]
    fn test_repeated_intersection_schedules_once() {
        let (controller, _, timers) = fixture();
        let (count, on_reveal) = counter();
        let sub = controller.register(2, RevealOptions::default().with_delay(ms(200)), on_reveal);

        controller.on_intersection(hit(2));
        timers.advance_to(ms(50));
        controller.on_intersection(hit(2));
        assert_eq!(timers.pending(), 1);

        timers.advance_to(ms(200));
        assert_eq!(sub.state(), RevealState::Revealed);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_reveal_all_cancels_timers() {
        let (controller, _, timers) = fixture();
        let waiting = controller.register(1, RevealOptions::default().with_delay(ms(500)), || {});
        let idle = controller.register(2, RevealOptions::default(), || {});
        controller.on_intersection(hit(1));
        assert_eq!(timers.pending(), 1);

        controller.reveal_all();

        assert_eq!(waiting.state(), RevealState::Revealed);
        assert_eq!(idle.state(), RevealState::Revealed);
        assert_eq!(timers.pending(), 0);
        assert!(controller.is_empty());
    }

    #[test]
    fn test_refused_timer_reveals_immediately() {
        let (controller, _, timers) = fixture();
        timers.refuse.store(true, Ordering::SeqCst);
        let sub = controller.register(1, RevealOptions::default().with_delay(ms(300)), || {});

        controller.on_intersection(hit(1));

        assert_eq!(sub.state(), RevealState::Revealed);
    }

    #[test]
    fn test_dropped_controller_timer_is_noop() {
        let (controller, _, timers) = fixture();
        let (count, on_reveal) = counter();
        let sub = controller.register(1, RevealOptions::default().with_delay(ms(10)), on_reveal);
        controller.on_intersection(hit(1));

        drop(controller);
        timers.advance_to(ms(10));

        assert_eq!(sub.state(), RevealState::Hidden);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_stagger_and_threshold() {
        let stagger = Stagger::from_millis(500, 200);
        assert_eq!(stagger.delay(0), ms(500));
        assert_eq!(stagger.delay(3), ms(1100));

        assert_eq!(RevealOptions::new(1.5, Duration::ZERO).threshold(), 1.0);
        assert_eq!(RevealOptions::new(-0.2, Duration::ZERO).threshold(), 0.0);
        assert_eq!(
            RevealOptions::default().with_threshold(f64::NAN).threshold(),
            DEFAULT_THRESHOLD
        );
    }

    /// Host whose `schedule` calls back into the controller before returning.
    #[derive(Default)]
    struct ReentrantTimers {
        run_inline: bool,
        during_schedule: Mutex<Option<Box<dyn FnOnce() + Send>>>,
        held: Mutex<Vec<Box<dyn FnOnce() + Send>>>,
        next_id: AtomicU64,
        cancelled: Mutex<Vec<u64>>,
    }

    impl Timers for ReentrantTimers {
        type Handle = u64;

        fn schedule(&self, _delay: Duration, task: Box<dyn FnOnce() + Send>) -> Option<u64> {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let hook = self.during_schedule.lock().unwrap().take();
            if let Some(hook) = hook {
                hook();
            }
            if self.run_inline {
                task();
            } else {
                self.held.lock().unwrap().push(task);
            }
            Some(id)
        }

        fn cancel(&self, handle: u64) {
            self.cancelled.lock().unwrap().push(handle);
        }
    }

    type ReentrantController =
        RevealController<u32, Arc<RecordingViewport>, Arc<ReentrantTimers>>;

    fn reentrant(run_inline: bool) -> (ReentrantController, Arc<ReentrantTimers>) {
        let timers = Arc::new(ReentrantTimers {
            run_inline,
            ..Default::default()
        });
        let controller =
            RevealController::new(Arc::new(RecordingViewport::default()), Arc::clone(&timers));
        (controller, timers)
    }

    #[test]
    fn test_host_firing_inside_schedule_reveals_once() {
        let (controller, timers) = reentrant(true);
        let (count, on_reveal) = counter();
        let sub = controller.register(1, RevealOptions::default().with_delay(ms(300)), on_reveal);

        controller.on_intersection(hit(1));
        controller.on_intersection(hit(1));

        assert_eq!(sub.state(), RevealState::Revealed);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(!controller.is_registered(&1));
        // the handle came back after the reveal, so it is cancelled
        assert_eq!(*timers.cancelled.lock().unwrap(), vec![0]);
    }

    #[test]
    fn test_unregister_inside_schedule_cancels_returned_handle() {
        let (controller, timers) = reentrant(false);
        let (count, on_reveal) = counter();
        let sub = controller.register(1, RevealOptions::default().with_delay(ms(300)), on_reveal);

        let inner = controller.clone();
        *timers.during_schedule.lock().unwrap() =
            Some(Box::new(move || inner.unregister_element(&1)));
        controller.on_intersection(hit(1));

        assert_eq!(sub.state(), RevealState::Unregistered);
        assert_eq!(*timers.cancelled.lock().unwrap(), vec![0]);

        // the host ignored the cancel and fires anyway
        let held = std::mem::take(&mut *timers.held.lock().unwrap());
        assert_eq!(held.len(), 1);
        for task in held {
            task();
        }
        assert_eq!(sub.state(), RevealState::Unregistered);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_reregister_inside_schedule_is_not_revealed_by_old_timer() {
        let (controller, timers) = reentrant(false);
        let old = controller.register(1, RevealOptions::default().with_delay(ms(300)), || {});

        let inner = controller.clone();
        let (count, on_reveal) = counter();
        *timers.during_schedule.lock().unwrap() = Some(Box::new(move || {
            inner.unregister_element(&1);
            inner.register(1, RevealOptions::default().with_delay(ms(300)), on_reveal);
        }));
        controller.on_intersection(hit(1));

        assert_eq!(old.state(), RevealState::Unregistered);
        assert!(controller.is_registered(&1));
        assert_eq!(*timers.cancelled.lock().unwrap(), vec![0]);

        let held = std::mem::take(&mut *timers.held.lock().unwrap());
        for task in held {
            task();
        }
        assert!(controller.is_registered(&1));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
