use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use leptos::{html, prelude::*};

use crate::reveal::{RevealOptions, DEFAULT_THRESHOLD};

/// Identity of one mounted watched element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealId(u64);

impl RevealId {
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

mod host {
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex, MutexGuard, PoisonError},
        time::Duration,
    };

    use leptos::prelude::{set_timeout_with_handle, TimeoutHandle};

    use super::RevealId;
    use crate::reveal::{Timers, Viewport};

    type ObserverFn = Arc<dyn Fn() + Send + Sync>;

    #[derive(Clone)]
    struct ObserverHandles {
        resume: ObserverFn,
        stop: ObserverFn,
    }

    /// Viewport backed by one paused intersection observer per element. The
    /// threshold is fixed when the observer is created, so `observe` only
    /// resumes it. Browser support is decided once for the whole page.
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    pub struct ObserverViewport {
        supported: bool,
        observers: Mutex<HashMap<RevealId, ObserverHandles>>,
    }

    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    impl ObserverViewport {
        pub fn new(supported: bool) -> Self {
            Self {
                supported,
                observers: Mutex::default(),
            }
        }

        fn observers(&self) -> MutexGuard<'_, HashMap<RevealId, ObserverHandles>> {
            self.observers.lock().unwrap_or_else(PoisonError::into_inner)
        }

        pub fn attach(
            &self,
            id: RevealId,
            resume: impl Fn() + Send + Sync + 'static,
            stop: impl Fn() + Send + Sync + 'static,
        ) {
            self.observers().insert(
                id,
                ObserverHandles {
                    resume: Arc::new(resume),
                    stop: Arc::new(stop),
                },
            );
        }

        pub fn detach(&self, id: &RevealId) {
            self.observers().remove(id);
        }

        pub fn attached(&self) -> usize {
            self.observers().len()
        }
    }

    impl Viewport<RevealId> for ObserverViewport {
        fn is_available(&self) -> bool {
            self.supported
        }

        fn observe(&self, element: &RevealId, _threshold: f64) {
            let handles = self.observers().get(element).cloned();
            if let Some(handles) = handles {
                (handles.resume)();
            }
        }

        fn unobserve(&self, element: &RevealId) {
            let handles = self.observers().remove(element);
            if let Some(handles) = handles {
                (handles.stop)();
            }
        }
    }

    /// Browser timeouts.
    pub struct DomTimers;

    impl Timers for DomTimers {
        type Handle = TimeoutHandle;

        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send>) -> Option<TimeoutHandle> {
            set_timeout_with_handle(task, delay)
                .map_err(|e| log::warn!("set_timeout failed: {e:?}"))
                .ok()
        }

        fn cancel(&self, handle: TimeoutHandle) {
            handle.clear();
        }
    }
}

pub use host::{DomTimers, ObserverViewport};

#[cfg(feature = "hydrate")]
pub type PageReveal = crate::reveal::RevealController<RevealId, ObserverViewport, DomTimers>;

/// Installs the page's reveal controller. Only the browser gets one, so
/// server-rendered markup starts hidden and the `<noscript>` style in the
/// shell covers visitors without JavaScript.
pub fn provide_reveal() {
    #[cfg(feature = "hydrate")]
    {
        use leptos_use::{js, use_supported};

        let supported = use_supported(|| js!("IntersectionObserver" in &window())).get_untracked();
        if !supported {
            log::info!("IntersectionObserver unavailable, content is shown without animation");
        }
        provide_context(PageReveal::new(ObserverViewport::new(supported), DomTimers));
    }
}

/// Watches `target` and returns a signal that turns true once it is revealed.
#[cfg(feature = "hydrate")]
pub fn use_reveal(target: NodeRef<html::Div>, options: RevealOptions) -> Signal<bool> {
    use leptos_use::{
        use_intersection_observer_with_options, UseIntersectionObserverOptions,
        UseIntersectionObserverReturn,
    };

    use crate::reveal::IntersectionEvent;

    let Some(controller) = use_context::<PageReveal>() else {
        return Signal::stored(true);
    };
    let id = RevealId::next();

    let on_entries = controller.clone();
    let UseIntersectionObserverReturn { stop, resume, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                on_entries.on_intersection(IntersectionEvent {
                    element: id,
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                });
            }
        },
        UseIntersectionObserverOptions::default()
            .immediate(false)
            .thresholds(vec![options.threshold()]),
    );
    controller.viewport().attach(id, resume, stop);

    let revealed = RwSignal::new(false);
    let registering = controller.clone();
    // registering after hydration keeps the first client render equal to the server's
    Effect::new(move |_| {
        registering.register(id, options, move || revealed.set(true));
    });
    on_cleanup(move || {
        controller.unregister_element(&id);
        controller.viewport().detach(&id);
    });

    revealed.into()
}

#[cfg(not(feature = "hydrate"))]
pub fn use_reveal(_target: NodeRef<html::Div>, _options: RevealOptions) -> Signal<bool> {
    Signal::stored(false)
}

pub fn reveal_class(revealed: bool) -> &'static str {
    if revealed {
        "reveal reveal-shown"
    } else {
        "reveal reveal-hidden"
    }
}

/// A `div` that fades in the first time it scrolls into view.
#[component]
pub fn Reveal(
    #[prop(optional)] delay: Duration,
    #[prop(default = DEFAULT_THRESHOLD)] threshold: f64,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] id: Option<String>,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node_ref, RevealOptions::new(threshold, delay));
    view! {
        <div
            id=id
            node_ref=node_ref
            class=move || format!("{} {}", reveal_class(revealed.get()), class)
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;
    use crate::reveal::{IntersectionEvent, RevealController, RevealState, Viewport};

    fn counting() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let inner = Arc::clone(&count);
        (count, move || {
            inner.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_support_is_fixed_per_page() {
        let viewport = ObserverViewport::new(false);
        viewport.attach(RevealId::next(), || {}, || {});
        viewport.attach(RevealId::next(), || {}, || {});
        assert!(!viewport.is_available());
        assert!(ObserverViewport::new(true).is_available());
    }

    #[test]
    fn test_observe_resumes_and_unobserve_stops_once() {
        let viewport = ObserverViewport::new(true);
        let id = RevealId::next();
        let (resumed, resume) = counting();
        let (stopped, stop) = counting();
        viewport.attach(id, resume, stop);

        viewport.observe(&id, 0.1);
        viewport.unobserve(&id);
        viewport.unobserve(&id);
        viewport.observe(&id, 0.1);

        assert_eq!(resumed.load(Ordering::SeqCst), 1);
        assert_eq!(stopped.load(Ordering::SeqCst), 1);
        assert_eq!(viewport.attached(), 0);
    }

    #[test]
    fn test_reveal_stops_its_observer() {
        let controller = RevealController::new(ObserverViewport::new(true), DomTimers);
        let id = RevealId::next();
        let (stopped, stop) = counting();
        controller.viewport().attach(id, || {}, stop);

        let sub = controller.register(id, RevealOptions::default(), || {});
        controller.on_intersection(IntersectionEvent {
            element: id,
            is_intersecting: true,
            ratio: 1.0,
        });

        assert_eq!(sub.state(), RevealState::Revealed);
        assert_eq!(stopped.load(Ordering::SeqCst), 1);
        assert_eq!(controller.viewport().attached(), 0);
    }

    #[test]
    fn test_unsupported_page_reveals_on_register() {
        let controller = RevealController::new(ObserverViewport::new(false), DomTimers);
        let id = RevealId::next();
        let (resumed, resume) = counting();
        controller.viewport().attach(id, resume, || {});

        let sub = controller.register(id, RevealOptions::default(), || {});

        assert_eq!(sub.state(), RevealState::Revealed);
        assert_eq!(resumed.load(Ordering::SeqCst), 0);
    }
}
