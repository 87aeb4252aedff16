//! Repeating ticks via `window.setInterval`

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::tracker::{Scheduler, TaskId};

/// Fires one shared callback on every interval it starts
///
/// The callback is installed after construction because it usually needs a
/// handle to the app that owns this scheduler.
#[derive(Default)]
pub struct IntervalScheduler {
    callback: Option<Closure<dyn FnMut()>>,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_callback(&mut self, callback: Closure<dyn FnMut()>) {
        self.callback = Some(callback);
    }
}

impl Scheduler for IntervalScheduler {
    fn start_repeating(&mut self, interval_ms: u32) -> TaskId {
        let (Some(window), Some(callback)) = (web_sys::window(), self.callback.as_ref()) else {
            log::error!("Interval requested before callback was installed");
            return TaskId(0);
        };
        let timeout = i32::try_from(interval_ms).unwrap_or(i32::MAX);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            timeout,
        ) {
            Ok(id) => TaskId(id),
            Err(e) => {
                log::error!("setInterval failed: {:?}", e);
                TaskId(0)
            }
        }
    }

    fn cancel(&mut self, task: TaskId) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(task.0);
        }
    }
}
