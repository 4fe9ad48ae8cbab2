//! `setTimeout`-backed scheduler.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use homeward_core::{Scheduler, Task, TimerId};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::dom;

struct PendingTimer {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

/// Every pending closure is owned here until it fires or is cancelled, so
/// nothing is leaked with `forget`.
#[derive(Default)]
pub struct WebScheduler {
    next_id: Cell<u64>,
    timers: Rc<RefCell<HashMap<u64, PendingTimer>>>,
}

impl WebScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.timers.borrow().len()
    }
}

impl Scheduler for WebScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TimerId {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);

        let timers = Rc::clone(&self.timers);
        let callback = Closure::once(move || {
            let finished = timers.borrow_mut().remove(&id);
            task();
            drop(finished);
        });

        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        let handle = dom::window().and_then(|win| {
            win.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay,
            )
            .ok()
        });
        match handle {
            Some(handle) => {
                self.timers.borrow_mut().insert(
                    id,
                    PendingTimer {
                        handle,
                        _callback: callback,
                    },
                );
            }
            None => log::warn!("timer {id} could not be scheduled"),
        }
        TimerId(id)
    }

    fn cancel(&self, id: TimerId) {
        let removed = self.timers.borrow_mut().remove(&id.0);
        if let (Some(timer), Some(win)) = (removed, dom::window()) {
            win.clear_timeout_with_handle(timer.handle);
        }
    }

    fn cancel_all(&self) {
        let drained: Vec<PendingTimer> = self.timers.borrow_mut().drain().map(|(_, t)| t).collect();
        if let Some(win) = dom::window() {
            for timer in &drained {
                win.clear_timeout_with_handle(timer.handle);
            }
        }
    }
}
