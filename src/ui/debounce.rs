//! Browser-side debouncing on top of [`Debouncer`]

#[cfg(not(feature = "ssr"))]
use std::cell::{Cell, RefCell};
#[cfg(not(feature = "ssr"))]
use std::rc::Rc;

#[cfg(not(feature = "ssr"))]
use crate::core::debounce::Debouncer;

/// Wrap `f` so that it runs once, `wait_ms` after the last call of a burst,
/// with the arguments of that last call
#[cfg(not(feature = "ssr"))]
pub fn debounced<A, F>(wait_ms: u64, f: F) -> impl Fn(A) + Clone + 'static
where
    A: 'static,
    F: Fn(A) + 'static,
{
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_futures::spawn_local;

    let debouncer = Rc::new(RefCell::new(Debouncer::new(wait_ms)));
    let generation = Rc::new(Cell::new(0u64));
    let f = Rc::new(f);

    move |args: A| {
        let now = super::now_ms();
        debouncer.borrow_mut().call(args, now);

        // Only the newest timer polls; older ones wake up and leave
        let ticket = generation.get().wrapping_add(1);
        generation.set(ticket);

        let debouncer = debouncer.clone();
        let generation = generation.clone();
        let f = f.clone();
        let mut sleep_ms = wait_ms;

        spawn_local(async move {
            loop {
                TimeoutFuture::new(sleep_ms.min(u32::MAX as u64) as u32).await;
                if generation.get() != ticket {
                    return;
                }

                let now = super::now_ms();
                let mut pending = debouncer.borrow_mut();
                if let Some(args) = pending.poll(now) {
                    drop(pending);
                    f(args);
                    return;
                }

                // Timers may fire a little early against the wall clock
                match pending.deadline_ms() {
                    Some(deadline) => sleep_ms = deadline.saturating_sub(now).max(1),
                    None => return,
                }
            }
        });
    }
}
