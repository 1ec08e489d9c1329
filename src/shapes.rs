use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt::Write;

use glam::Vec2;

use crate::data_types::CategoryValue;

fn push_coord(out: &mut String, v: f32) {
    // f32 Display is the shortest round-trippable form; good enough for SVG.
    let _ = write!(out, "{}", v);
}

fn move_to(out: &mut String, p: Vec2) {
    let _ = write!(out, "M");
    push_coord(out, p.x);
    out.push(',');
    push_coord(out, p.y);
}

fn line_to(out: &mut String, p: Vec2) {
    let _ = write!(out, "L");
    push_coord(out, p.x);
    out.push(',');
    push_coord(out, p.y);
}

/// Polyline path through `points` in the order given.
pub fn line_path(points: &[Vec2]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        if i == 0 {
            move_to(&mut d, *p);
        } else {
            line_to(&mut d, *p);
        }
    }
    d
}

/// Area under a polyline, closed back to `baseline_y` at both ends.
pub fn area_path(points: &[Vec2], baseline_y: f32) -> String {
    if points.is_empty() {
        return String::new();
    }
    let mut d = String::new();
    move_to(&mut d, Vec2::new(points[0].x, baseline_y));
    for p in points {
        line_to(&mut d, *p);
    }
    line_to(&mut d, Vec2::new(points[points.len() - 1].x, baseline_y));
    d.push('Z');
    d
}

fn sign(v: f64) -> f64 {
    if v < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Fritsch-Carlson tangents for a monotone-in-x cubic through `points`.
fn monotone_tangents(points: &[Vec2]) -> Vec<f64> {
    let n = points.len();
    let mut m = vec![0.0f64; n];
    if n < 2 {
        return m;
    }
    let slope = |a: Vec2, b: Vec2| -> f64 {
        let h = (b.x - a.x) as f64;
        if h.abs() < f64::EPSILON {
            0.0
        } else {
            (b.y - a.y) as f64 / h
        }
    };
    if n == 2 {
        let s = slope(points[0], points[1]);
        m[0] = s;
        m[1] = s;
        return m;
    }
    for i in 1..n - 1 {
        let h0 = (points[i].x - points[i - 1].x) as f64;
        let h1 = (points[i + 1].x - points[i].x) as f64;
        let s0 = slope(points[i - 1], points[i]);
        let s1 = slope(points[i], points[i + 1]);
        if s0 * s1 <= 0.0 {
            m[i] = 0.0;
        } else {
            let p = (s0 * h1 + s1 * h0) / (h0 + h1);
            m[i] = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
        }
    }
    // One-sided endpoint tangents, clamped against the interior tangent.
    m[0] = endpoint_tangent(slope(points[0], points[1]), m[1]);
    m[n - 1] = endpoint_tangent(slope(points[n - 2], points[n - 1]), m[n - 2]);
    m
}

fn endpoint_tangent(s: f64, t: f64) -> f64 {
    let v = (3.0 * s - t) / 2.0;
    if s * v <= 0.0 {
        0.0
    } else {
        v.abs().min(3.0 * s.abs()) * sign(s)
    }
}

fn monotone_segments(out: &mut String, points: &[Vec2]) {
    let m = monotone_tangents(points);
    for i in 1..points.len() {
        let p0 = points[i - 1];
        let p1 = points[i];
        let dx = (p1.x - p0.x) as f64 / 3.0;
        let _ = write!(
            out,
            "C{},{} {},{} {},{}",
            p0.x as f64 + dx,
            p0.y as f64 + dx * m[i - 1],
            p1.x as f64 - dx,
            p1.y as f64 - dx * m[i],
            p1.x,
            p1.y,
        );
    }
}

/// Monotone-cubic polyline (no overshoot between samples).
pub fn monotone_line_path(points: &[Vec2]) -> String {
    if points.is_empty() {
        return String::new();
    }
    if points.len() == 1 {
        let mut d = String::new();
        move_to(&mut d, points[0]);
        return d;
    }
    let mut d = String::new();
    move_to(&mut d, points[0]);
    monotone_segments(&mut d, points);
    d
}

/// Closed band between a top and bottom boundary, both monotone-interpolated.
/// `top` and `bottom` are given left to right and must share x coordinates.
pub fn monotone_band_path(top: &[Vec2], bottom: &[Vec2]) -> String {
    if top.is_empty() {
        return String::new();
    }
    let mut d = String::new();
    move_to(&mut d, top[0]);
    monotone_segments(&mut d, top);
    let mut back: Vec<Vec2> = bottom.to_vec();
    back.reverse();
    line_to(&mut d, back[0]);
    monotone_segments(&mut d, &back);
    d.push('Z');
    d
}

/// One pie slice: `[start_angle, end_angle)` includes the `pad_angle` gap,
/// which the arc generator insets half on each side. Angles are radians from
/// 12 o'clock, clockwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieSlice {
    /// Index into the source data.
    pub index: usize,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub pad_angle: f64,
}

impl PieSlice {
    /// Angular span net of the pad gap.
    pub fn span(&self) -> f64 {
        (self.end_angle - self.start_angle - self.pad_angle).max(0.0)
    }
}

/// Proportional angular layout over the full circle. Non-finite or negative
/// values contribute zero (zero-span slice), never a panic. Order follows the
/// input; slices keep their source index.
pub fn pie_layout(values: &[f64], pad_angle: f64) -> Vec<PieSlice> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }
    let sanitized: Vec<f64> = values
        .iter()
        .map(|v| if v.is_finite() && *v > 0.0 { *v } else { 0.0 })
        .collect();
    let sum: f64 = sanitized.iter().sum();
    let pad = pad_angle.max(0.0).min(TAU / n as f64);
    let k = if sum > 0.0 {
        (TAU - pad * n as f64) / sum
    } else {
        0.0
    };
    let mut a = 0.0;
    sanitized
        .iter()
        .enumerate()
        .map(|(index, v)| {
            let start_angle = a;
            let end_angle = a + v * k + pad;
            a = end_angle;
            PieSlice {
                index,
                value: values[index],
                start_angle,
                end_angle,
                pad_angle: pad,
            }
        })
        .collect()
}

fn polar(radius: f64, angle: f64) -> Vec2 {
    // d3 convention: angle 0 at 12 o'clock, increasing clockwise.
    Vec2::new(
        (radius * (angle - FRAC_PI_2).cos()) as f32,
        (radius * (angle - FRAC_PI_2).sin()) as f32,
    )
}

/// Annular sector path centered on the origin. `inner_radius` 0 gives a full
/// pie wedge; the slice's pad gap is split between its two edges.
pub fn arc_path(slice: &PieSlice, inner_radius: f64, outer_radius: f64) -> String {
    let half_pad = slice.pad_angle / 2.0;
    let a0 = slice.start_angle + half_pad;
    let a1 = (slice.end_angle - half_pad).max(a0);
    let large = if a1 - a0 > PI { 1 } else { 0 };
    let r0 = inner_radius.max(0.0);
    let r1 = outer_radius.max(r0);

    let outer_start = polar(r1, a0);
    let outer_end = polar(r1, a1);
    let mut d = String::new();
    move_to(&mut d, outer_start);
    let _ = write!(
        &mut d,
        "A{},{} 0 {} 1 {},{}",
        r1, r1, large, outer_end.x, outer_end.y
    );
    if r0 > 0.0 {
        let inner_end = polar(r0, a1);
        let inner_start = polar(r0, a0);
        line_to(&mut d, inner_end);
        let _ = write!(
            &mut d,
            "A{},{} 0 {} 0 {},{}",
            r0, r0, large, inner_start.x, inner_start.y
        );
    } else {
        line_to(&mut d, Vec2::ZERO);
    }
    d.push('Z');
    d
}

/// Union of the categories across all rows, in first-seen order.
pub fn first_seen_categories<'a, I>(rows: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a [CategoryValue]>,
{
    let mut categories: Vec<String> = Vec::new();
    for row in rows {
        for cv in row {
            if !categories.iter().any(|c| *c == cv.category) {
                categories.push(cv.category.clone());
            }
        }
    }
    categories
}

fn stack_value(row: &[CategoryValue], category: &str) -> f64 {
    // Missing categories count as zero; so do negatives and non-finite
    // values, which have no meaning in a cumulative stack.
    row.iter()
        .find(|cv| cv.category == category)
        .map(|cv| {
            if cv.value.is_finite() && cv.value > 0.0 {
                cv.value
            } else {
                0.0
            }
        })
        .unwrap_or(0.0)
}

/// Cumulative `[start, end]` intervals, indexed `[category][row]`, in the
/// category order given. For each row the intervals are ordered,
/// non-overlapping and union to `[0, total]`.
pub fn stack_intervals(rows: &[&[CategoryValue]], categories: &[String]) -> Vec<Vec<(f64, f64)>> {
    let mut out = vec![Vec::with_capacity(rows.len()); categories.len()];
    for row in rows {
        let mut acc = 0.0;
        for (ci, category) in categories.iter().enumerate() {
            let v = stack_value(row, category);
            out[ci].push((acc, acc + v));
            acc += v;
        }
    }
    out
}
