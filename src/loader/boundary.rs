//! Retry Boundary
//!
//! Hosts a [`RecoveryMachine`](super::recovery::RecoveryMachine):
//! descendants report load failures through the boundary handle; chunk
//! failures re-render the children after backoff, anything else renders
//! the error screen. The pending retry timer is an owned handle, dropped
//! (and thereby cancelled) when the boundary unmounts.

use gloo_timers::callback::Timeout;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use super::classify::RecoveryPredicate;
use super::error::LoadError;
use super::recovery::{ErrorDisposition, RecoveryMachine, RecoveryPhase};
use super::route::reload_page;

/// Context handle descendants use to report rendering-time load failures.
#[derive(Clone)]
pub struct BoundaryHandle {
    report: Rc<dyn Fn(LoadError)>,
}

impl BoundaryHandle {
    pub fn report(&self, error: LoadError) {
        (self.report)(error)
    }
}

/// Retry boundary around a lazily loaded subtree.
#[component]
pub fn RetryBoundary(
    /// Called for every reported error, recoverable or not.
    #[prop(optional)]
    on_error: Option<Callback<LoadError>>,
    /// Override the chunk-failure classifier.
    #[prop(optional)]
    is_recoverable: Option<RecoveryPredicate>,
    children: ChildrenFn,
) -> impl IntoView {
    let machine = Rc::new(RefCell::new(match is_recoverable {
        Some(predicate) => RecoveryMachine::with_predicate(predicate),
        None => RecoveryMachine::new(),
    }));

    let phase = create_rw_signal(RecoveryPhase::Ok);
    let last_error = create_rw_signal(None::<LoadError>);
    let generation = create_rw_signal(0u32);
    let timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    // Timer-fired path: back to Ok, bump the generation so the children
    // closure re-runs and re-triggers the failed work.
    let fire: Rc<dyn Fn()> = {
        let machine = Rc::clone(&machine);
        let timer = Rc::clone(&timer);
        Rc::new(move || {
            timer.borrow_mut().take();
            machine.borrow_mut().on_timer_fired();
            phase.set(machine.borrow().phase());
            generation.update(|generation| *generation += 1);
        })
    };

    let report = {
        let machine = Rc::clone(&machine);
        let timer = Rc::clone(&timer);
        let fire = Rc::clone(&fire);
        move |error: LoadError| {
            if let Some(callback) = on_error {
                callback.call(error.clone());
            }

            let disposition = machine.borrow_mut().on_error(error.clone());
            phase.set(machine.borrow().phase());
            last_error.set(Some(error));

            if let ErrorDisposition::Retry(delay) = disposition {
                let fire = Rc::clone(&fire);
                let handle = Timeout::new(delay.as_millis() as u32, move || fire());
                // Replacing the slot drops, and thereby cancels, any
                // previously scheduled timer.
                *timer.borrow_mut() = Some(handle);
            }
        }
    };
    provide_context(BoundaryHandle {
        report: Rc::new(report),
    });

    {
        let timer = Rc::clone(&timer);
        on_cleanup(move || {
            timer.borrow_mut().take();
        });
    }

    let manual_retry = {
        let machine = Rc::clone(&machine);
        let timer = Rc::clone(&timer);
        Callback::new(move |_: ()| {
            if machine.borrow_mut().on_manual_retry() {
                timer.borrow_mut().take();
                phase.set(machine.borrow().phase());
                generation.update(|generation| *generation += 1);
            }
        })
    };

    view! {
        {move || match phase.get() {
            RecoveryPhase::Ok => {
                // Subscribe to the generation counter so a recovery
                // re-invokes the children.
                let _ = generation.get();
                children().into_view()
            }
            RecoveryPhase::RetryScheduled => {
                view! { <RetryingView on_retry=manual_retry /> }.into_view()
            }
            RecoveryPhase::Exhausted => {
                view! { <BoundaryErrorView error=last_error /> }.into_view()
            }
        }}
    }
}

/// Quiet holding state while a scheduled retry is pending.
#[component]
fn RetryingView(on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[40vh] space-y-4">
            <div class="loading-spinner w-8 h-8" />
            <p class="text-gray-400 text-sm">"Connection hiccup, retrying..."</p>
            <button
                class="text-sm text-primary-400 hover:text-primary-300"
                on:click=move |_| on_retry.call(())
            >
                "Try Again"
            </button>
        </div>
    }
}

/// Terminal error screen; the only way out is a full reload.
#[component]
fn BoundaryErrorView(error: RwSignal<Option<LoadError>>) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center px-4">
            <div class="text-6xl mb-4">"😵"</div>
            <h1 class="text-2xl font-bold mb-2">"Something went wrong"</h1>
            <p class="text-gray-400 mb-6">"The page failed to load after several attempts."</p>
            <button
                on:click=|_| reload_page()
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Reload Page"
            </button>
            <details class="mt-6 text-left text-sm text-gray-500 max-w-xl">
                <summary class="cursor-pointer">"Technical details"</summary>
                <pre class="mt-2 whitespace-pre-wrap">
                    {move || error.get().map(|error| error.to_string()).unwrap_or_default()}
                </pre>
            </details>
        </div>
    }
}
