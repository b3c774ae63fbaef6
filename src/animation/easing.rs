//! Timing curves for the commit animation.

use serde::{Deserialize, Serialize};

/// Easing curves, named after their CSS counterparts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// No easing
    Linear,
    /// CSS `ease`: quick start, long gentle settle
    Ease,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map a linear fraction in [0, 1] to eased progress in [0, 1].
    pub fn transform(self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
            Easing::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, fraction),
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
        }
    }
}

/// Unit cubic bezier from (0, 0) to (1, 1), stored as polynomial
/// coefficients per axis: `p(t) = ((a * t + b) * t + c) * t`.
#[derive(Debug, Clone, Copy)]
struct UnitBezier {
    x: [f32; 3],
    y: [f32; 3],
}

const SOLVE_EPSILON: f32 = 1e-6;
const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 20;

impl UnitBezier {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x: Self::coefficients(x1, x2),
            y: Self::coefficients(y1, y2),
        }
    }

    fn coefficients(p1: f32, p2: f32) -> [f32; 3] {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        [a, b, c]
    }

    fn eval([a, b, c]: [f32; 3], t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn slope([a, b, c]: [f32; 3], t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    /// Curve y at the point whose x is `x`.
    fn y_for_x(&self, x: f32) -> f32 {
        if x.is_nan() || x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let t = self.newton(x).unwrap_or_else(|| self.bisect(x));
        Self::eval(self.y, t).clamp(0.0, 1.0)
    }

    /// Parameter t with x(t) == x, if Newton-Raphson converges.
    fn newton(&self, x: f32) -> Option<f32> {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = Self::eval(self.x, t) - x;
            if error.abs() < SOLVE_EPSILON {
                return Some(t);
            }
            let slope = Self::slope(self.x, t);
            if slope.abs() < SOLVE_EPSILON {
                return None;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }
        None
    }

    /// Requires x(t) monotonic on [0, 1], i.e. control x values in [0, 1].
    fn bisect(&self, x: f32) -> f32 {
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        let mut t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let error = Self::eval(self.x, t) - x;
            if error.abs() < SOLVE_EPSILON {
                break;
            }
            if error > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
        t
    }
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    UnitBezier::new(x1, y1, x2, y2).y_for_x(fraction)
}
