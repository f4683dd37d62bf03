//! Interval sweep: maximal label heights under a set of wedges.
//!
//! Model
//! - Open angular intervals start as one interval over `[−2π, 2π]` at height 0.
//! - Wedges are processed by non-decreasing height. Raising the height by `dh`
//!   narrows every open interval by `2·dh/ascend`; an interval narrower than
//!   that tops out below the new height and is emitted at its own peak.
//! - Each wedge then occludes its interval `[a, b]`; an open interval removed
//!   entirely is emitted at the wedge height.
//! - Whatever is still open at the end is emitted at its own peak, using the
//!   last wedge's ascend rate.
//!
//! Heights and ascend rates only need consistent units. Wedges from
//! `wedge::compute_wedges` use half-angles at rate 1, which makes the peak
//! emissions exact.
//!
//! The open set stays sorted, pairwise disjoint and well-formed (`lo < hi`)
//! after every step; this is asserted in debug builds.
//!
//! Code cross-refs: `wedge::{compute_wedges, replicate_wrapped}`,
//! `select::best_for_circle` (consumer)

use std::f64::consts::TAU;

use crate::error::{LabelError, Result};

use super::wedge::Wedge;

/// Open angular interval with `lo < hi`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    /// `None` unless `lo < hi`.
    #[inline]
    pub fn new(lo: f64, hi: f64) -> Option<Self> {
        (lo < hi).then_some(Self { lo, hi })
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }
    #[inline]
    pub fn mid(&self) -> f64 {
        0.5 * (self.lo + self.hi)
    }
    /// Parts of `self` left and right of `[a, b]`.
    #[inline]
    pub fn subtract(&self, a: f64, b: f64) -> (Option<Interval>, Option<Interval>) {
        (
            Interval::new(self.lo, self.hi.min(a)),
            Interval::new(b.max(self.lo), self.hi),
        )
    }
}

/// A locally maximal placement on one circle: polar angle and half-height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub angle: f64,
    pub height: f64,
}

/// Incremental sweep state. Feed wedges in non-decreasing height order with
/// [`Sweep::push`], then drain with [`Sweep::finish`].
#[derive(Clone, Debug)]
pub struct Sweep {
    open: Vec<Interval>,
    height: f64,
    ascend: Option<f64>,
    found: Vec<Candidate>,
}

impl Default for Sweep {
    fn default() -> Self {
        Self::new()
    }
}

fn emit(found: &mut Vec<Candidate>, angle: f64, height: f64) {
    tracing::trace!(angle, height, "sweep candidate");
    found.push(Candidate { angle, height });
}

impl Sweep {
    /// Sweep over `[−2π, 2π]`.
    pub fn new() -> Self {
        Self::with_domain(Interval { lo: -TAU, hi: TAU })
    }

    pub fn with_domain(domain: Interval) -> Self {
        Self {
            open: vec![domain],
            height: 0.0,
            ascend: None,
            found: Vec::new(),
        }
    }

    #[inline]
    pub fn intervals(&self) -> &[Interval] {
        &self.open
    }
    /// Height reached so far.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }
    /// Candidates emitted so far, in discovery order.
    #[inline]
    pub fn candidates(&self) -> &[Candidate] {
        &self.found
    }

    /// Sorted, pairwise disjoint, each `lo < hi` with finite bounds.
    pub fn is_well_formed(&self) -> bool {
        self.open
            .iter()
            .all(|iv| iv.lo.is_finite() && iv.hi.is_finite() && iv.lo < iv.hi)
            && self.open.windows(2).all(|w| w[0].hi <= w[1].lo)
    }

    /// Process one wedge. A wedge lower than the current height is handled at
    /// the current height (no growth).
    pub fn push(&mut self, wedge: &Wedge) -> Result<()> {
        let (a, b) = (wedge.lo(), wedge.hi());
        if !(a.is_finite() && b.is_finite() && a < b) {
            return Err(LabelError::IllFormedWedge { lo: a, hi: b });
        }
        let h = wedge.height().max(self.height);
        self.grow(h, wedge.ascend());
        debug_assert!(self.is_well_formed(), "open intervals after growth");
        self.occlude(a, b, h);
        debug_assert!(self.is_well_formed(), "open intervals after occlusion");
        self.height = h;
        self.ascend = Some(wedge.ascend());
        Ok(())
    }

    fn grow(&mut self, h: f64, ascend: f64) {
        let dx = 2.0 * (h - self.height) / ascend;
        if dx <= 0.0 {
            return;
        }
        let prev = self.height;
        let mut kept = Vec::with_capacity(self.open.len());
        for iv in self.open.drain(..) {
            match Interval::new(iv.lo + 0.5 * dx, iv.hi - 0.5 * dx) {
                Some(narrowed) => kept.push(narrowed),
                None => emit(&mut self.found, iv.mid(), prev + iv.width() * ascend / 2.0),
            }
        }
        self.open = kept;
    }

    fn occlude(&mut self, a: f64, b: f64, h: f64) {
        let mut kept = Vec::with_capacity(self.open.len() + 1);
        for iv in self.open.drain(..) {
            match iv.subtract(a, b) {
                (None, None) => emit(&mut self.found, iv.mid(), h),
                (left, right) => kept.extend(left.into_iter().chain(right)),
            }
        }
        self.open = kept;
    }

    /// Emit every still-open interval at its own peak and return all
    /// candidates in discovery order. With no wedges pushed, nothing is open
    /// to a ceiling and the result is empty.
    pub fn finish(mut self) -> Vec<Candidate> {
        if let Some(ascend) = self.ascend {
            for iv in std::mem::take(&mut self.open) {
                emit(&mut self.found, iv.mid(), self.height + iv.width() * ascend / 2.0);
            }
        }
        self.found
    }
}

/// Sweep `wedges` (any order) and return every locally maximal candidate.
///
/// Wedges are stably sorted by height. Fails with `IllFormedWedge` on the
/// first wedge without a proper interval.
pub fn solve_placement(wedges: &[Wedge]) -> Result<Vec<Candidate>> {
    let mut order: Vec<&Wedge> = wedges.iter().collect();
    order.sort_by(|x, y| x.height().total_cmp(&y.height()));
    let mut sweep = Sweep::new();
    for w in order {
        sweep.push(w)?;
    }
    let out = sweep.finish();
    tracing::trace!(wedges = wedges.len(), candidates = out.len(), "sweep finished");
    Ok(out)
}
