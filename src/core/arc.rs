//! Arc path generation for segments and category bands.
//!
//! Angles follow the pie layout convention (radians, clockwise from 12
//! o'clock). Paths are centered on the origin in chart-local units.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use kurbo::{Arc, BezPath, Circle, Point, Shape, Vec2};

const EPSILON: f64 = 1e-12;

/// Annular sector generator with optional rounded corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGenerator {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub corner_radius: f64,
    /// Curve flattening tolerance used for arc approximation.
    pub tolerance: f64,
}

impl ArcGenerator {
    #[must_use]
    pub fn new(inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            inner_radius,
            outer_radius,
            corner_radius: 0.0,
            tolerance: 0.1,
        }
    }

    #[must_use]
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Generates the outline of the sector spanning `[start_angle, end_angle]`.
    #[must_use]
    pub fn path(&self, start_angle: f64, end_angle: f64) -> BezPath {
        let mut r0 = self.inner_radius.max(0.0);
        let mut r1 = self.outer_radius.max(0.0);
        if r1 < r0 {
            std::mem::swap(&mut r0, &mut r1);
        }

        let (from, to) = if end_angle >= start_angle {
            (start_angle, end_angle)
        } else {
            (end_angle, start_angle)
        };
        let t0 = from - FRAC_PI_2;
        let sweep = (to - from).min(TAU);

        if r1 <= EPSILON {
            let mut path = BezPath::new();
            path.move_to(Point::ORIGIN);
            path.close_path();
            return path;
        }

        let rc = self.corner_radius.max(0.0).min((r1 - r0) / 2.0);
        if rc <= EPSILON || sweep <= EPSILON || sweep >= TAU - EPSILON {
            return Circle::new(Point::ORIGIN, r1)
                .segment(r0, t0, sweep)
                .to_path(self.tolerance);
        }

        self.rounded_sector(r0, r1, rc, t0, sweep)
    }

    /// Sector with each corner replaced by a circle tangent to both edges.
    ///
    /// Corner radii shrink so the corners never overlap across the angular
    /// span.
    fn rounded_sector(&self, r0: f64, r1: f64, rc: f64, t0: f64, sweep: f64) -> BezPath {
        let t1 = t0 + sweep;
        let half_sin = (sweep / 2.0).sin();

        let rc1 = if sweep < PI {
            rc.min(r1 * half_sin / (1.0 + half_sin))
        } else {
            rc
        };
        let d1 = (rc1 / (r1 - rc1)).asin();

        let mut path = BezPath::new();
        path.move_to(polar((r1 - rc1) * d1.cos(), t0));
        self.append_arc(
            &mut path,
            polar(r1 - rc1, t0 + d1),
            rc1,
            t0 - FRAC_PI_2,
            FRAC_PI_2 + d1,
        );
        self.append_arc(&mut path, Point::ORIGIN, r1, t0 + d1, sweep - 2.0 * d1);
        self.append_arc(
            &mut path,
            polar(r1 - rc1, t1 - d1),
            rc1,
            t1 - d1,
            FRAC_PI_2 + d1,
        );

        if r0 <= EPSILON {
            path.line_to(Point::ORIGIN);
        } else {
            let rc0 = if sweep < PI {
                rc.min(r0 * half_sin / (1.0 - half_sin))
            } else {
                rc
            };
            let d0 = (rc0 / (r0 + rc0)).asin();

            path.line_to(polar((r0 + rc0) * d0.cos(), t1));
            self.append_arc(
                &mut path,
                polar(r0 + rc0, t1 - d0),
                rc0,
                t1 + FRAC_PI_2,
                FRAC_PI_2 - d0,
            );
            self.append_arc(&mut path, Point::ORIGIN, r0, t1 - d0, -(sweep - 2.0 * d0));
            self.append_arc(
                &mut path,
                polar(r0 + rc0, t0 + d0),
                rc0,
                t0 + d0 + PI,
                FRAC_PI_2 - d0,
            );
        }

        path.close_path();
        path
    }

    fn append_arc(
        &self,
        path: &mut BezPath,
        center: Point,
        radius: f64,
        start_angle: f64,
        sweep_angle: f64,
    ) {
        if sweep_angle.abs() <= EPSILON || radius <= EPSILON {
            return;
        }
        let arc = Arc {
            center,
            radii: Vec2::new(radius, radius),
            start_angle,
            sweep_angle,
            x_rotation: 0.0,
        };
        for element in arc.append_iter(self.tolerance) {
            path.push(element);
        }
    }
}

fn polar(radius: f64, angle: f64) -> Point {
    Point::new(radius * angle.cos(), radius * angle.sin())
}
