//! Small nonlinear least-squares solver used by circle fitting.
//!
//! - `least_squares_2d`: Levenberg–Marquardt over two parameters with analytic
//!   Jacobian rows supplied by the caller.
//!
//! The objective is `½ Σ fᵢ(x)²`. Each residual comes with its gradient row
//! `∂fᵢ/∂x`, so the normal equations stay 2×2 and are solved in closed form.
//!
//! Code cross-refs: `label::circle_fit::fit_circle`
use nalgebra::{Matrix2, Vector2};

/// Solver budget and tolerances.
#[derive(Clone, Copy, Debug)]
pub struct LmCfg {
    pub max_iter: usize,
    /// Initial damping factor (Marquardt scaling of the diagonal).
    pub lambda0: f64,
    /// Relative step tolerance: stop when `|δ| <= xtol (|x| + xtol)`.
    pub xtol: f64,
    /// Absolute gradient tolerance on `max |Jᵀf|`.
    pub gtol: f64,
    /// Relative cost-decrease tolerance.
    pub ftol: f64,
}

impl Default for LmCfg {
    fn default() -> Self {
        Self {
            max_iter: 200,
            lambda0: 1e-3,
            xtol: 1e-12,
            gtol: 1e-14,
            ftol: 1e-15,
        }
    }
}

/// Outcome of a converged solve.
#[derive(Clone, Copy, Debug)]
pub struct LmReport {
    pub x: Vector2<f64>,
    /// Final objective `½ Σ fᵢ²`.
    pub cost: f64,
    pub iterations: usize,
}

/// Residual rows `(fᵢ, ∇fᵢ)` at a parameter vector; `None` if evaluation fails.
pub type Rows = Vec<(f64, Vector2<f64>)>;

fn cost_of(rows: &Rows) -> f64 {
    0.5 * rows.iter().map(|(f, _)| f * f).sum::<f64>()
}

fn normal_equations(rows: &Rows) -> (Matrix2<f64>, Vector2<f64>) {
    let mut jtj = Matrix2::zeros();
    let mut jtf = Vector2::zeros();
    for (f, g) in rows {
        jtj += g * g.transpose();
        jtf += g * *f;
    }
    (jtj, jtf)
}

/// Levenberg–Marquardt minimization of `½ Σ fᵢ(x)²` starting at `x0`.
///
/// Returns `None` if the iteration budget is exhausted before any convergence
/// test passes, or if residuals/steps become non-finite.
pub fn least_squares_2d<F>(residuals: F, x0: Vector2<f64>, cfg: LmCfg) -> Option<LmReport>
where
    F: Fn(Vector2<f64>) -> Option<Rows>,
{
    let mut x = x0;
    let mut rows = residuals(x)?;
    let mut cost = cost_of(&rows);
    if !cost.is_finite() {
        return None;
    }
    let mut lambda = cfg.lambda0;
    for it in 1..=cfg.max_iter {
        let (jtj, jtf) = normal_equations(&rows);
        if cost == 0.0 || jtf.amax() <= cfg.gtol {
            return Some(LmReport {
                x,
                cost,
                iterations: it - 1,
            });
        }
        let floor = 1e-12 * jtj.diagonal().amax().max(1.0);
        let diag = jtj.diagonal().map(|d| d.max(floor));
        let damped = jtj + Matrix2::from_diagonal(&(diag * lambda));
        let step = match damped.try_inverse() {
            Some(inv) => -(inv * jtf),
            None => {
                lambda *= 10.0;
                continue;
            }
        };
        if !step.x.is_finite() || !step.y.is_finite() {
            return None;
        }
        let x_new = x + step;
        let accepted = residuals(x_new).and_then(|r| {
            let c = cost_of(&r);
            (c.is_finite() && c < cost).then_some((r, c))
        });
        match accepted {
            Some((rows_new, cost_new)) => {
                let decrease = cost - cost_new;
                x = x_new;
                rows = rows_new;
                cost = cost_new;
                lambda = (lambda / 10.0).max(1e-15);
                if step.norm() <= cfg.xtol * (x.norm() + cfg.xtol)
                    || decrease <= cfg.ftol * cost
                {
                    return Some(LmReport {
                        x,
                        cost,
                        iterations: it,
                    });
                }
            }
            None => {
                lambda *= 10.0;
                // No damping can reduce the cost any further: stationary point.
                if lambda > 1e16 {
                    return Some(LmReport {
                        x,
                        cost,
                        iterations: it,
                    });
                }
            }
        }
    }
    None
}
