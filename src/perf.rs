//! Frame-budget instrumentation for the drawer's hot paths.
//!
//! A claimed touch move writes the front panel transform synchronously, so it
//! has to finish well inside one frame. `ScopedTimer` measures a scope and
//! reports it through `tracing` when it overruns its budget.
//!
//! With the `profiling` feature, `profile_scope!` also times the inner
//! scopes (drag math, commit scheduling) and logs them nested by depth at
//! `trace` level. Without it the macro compiles to nothing.
//!
//! ```ignore
//! use reveal_drawer::profile_scope;
//!
//! fn apply_drag() {
//!     profile_scope!("drawer_drag");
//!     // ...
//! }
//! ```

use std::time::Instant;

use crate::constants::TOUCH_MOVE_BUDGET_MS;

/// Budget for scopes timed by `profile_scope!` under the `profiling` feature
pub const PROFILE_SCOPE_BUDGET_MS: f64 = 1.0;

/// Time a scope. Compiles to nothing unless the `profiling` feature is on.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _scope_timer =
            $crate::perf::ScopedTimer::new($name, $crate::perf::PROFILE_SCOPE_BUDGET_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $budget_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _scope_timer = $crate::perf::ScopedTimer::new($name, $budget_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $budget_ms);
    };
}

pub use crate::profile_scope;

#[cfg(feature = "profiling")]
thread_local! {
    static DEPTH: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// Reports the enclosing scope on drop if it took longer than `budget_ms`.
#[derive(Debug)]
pub struct ScopedTimer {
    operation: &'static str,
    started: Instant,
    budget_ms: f64,
    #[cfg(feature = "profiling")]
    depth: usize,
}

impl ScopedTimer {
    pub fn new(operation: &'static str, budget_ms: f64) -> Self {
        #[cfg(feature = "profiling")]
        let depth = DEPTH.with(|d| d.replace(d.get() + 1));

        Self {
            operation,
            started: Instant::now(),
            budget_ms,
            #[cfg(feature = "profiling")]
            depth,
        }
    }

    /// Timer with the touch-move (one frame) budget.
    pub fn per_frame(operation: &'static str) -> Self {
        Self::new(operation, TOUCH_MOVE_BUDGET_MS)
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn budget_ms(&self) -> f64 {
        self.budget_ms
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    pub fn is_over_budget(&self) -> bool {
        self.elapsed_ms() > self.budget_ms
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();

        #[cfg(feature = "profiling")]
        {
            DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
            tracing::trace!(
                "{}{}: {:.3}ms",
                "  ".repeat(self.depth),
                self.operation,
                elapsed_ms
            );
        }

        if elapsed_ms > self.budget_ms {
            tracing::warn!(
                operation = self.operation,
                elapsed_ms = format!("{elapsed_ms:.2}"),
                budget_ms = format!("{:.2}", self.budget_ms),
                "Drawer operation over budget"
            );
        }
    }
}
