use crate::color::{Color, ColorScheme};

/// Continuous numeric domain to pixel range.
///
/// A degenerate domain (zero span, e.g. all-zero data) maps every value to
/// the range start instead of producing NaN.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    pub fn map(&self, value: f64) -> f32 {
        let span = self.domain.1 - self.domain.0;
        if span.abs() < f64::EPSILON {
            return self.range.0;
        }
        let t = (value - self.domain.0) / span;
        let res = self.range.0 as f64 + t * (self.range.1 - self.range.0) as f64;
        if res.is_finite() {
            res as f32
        } else {
            self.range.0
        }
    }

    pub fn invert(&self, pixel: f32) -> f64 {
        let r = (self.range.1 - self.range.0) as f64;
        if r.abs() < f64::EPSILON {
            return self.domain.0;
        }
        let t = (pixel - self.range.0) as f64 / r;
        self.domain.0 + t * (self.domain.1 - self.domain.0)
    }

    /// Nice tick values covering the domain, in steps of 1/2/5 times a power
    /// of ten, at most roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (start, stop) = self.domain;
        if count == 0 || (stop - start).abs() < f64::EPSILON {
            return vec![start];
        }
        let (lo, hi, reversed) = if stop < start {
            (stop, start, true)
        } else {
            (start, stop, false)
        };
        let step = tick_increment(lo, hi, count);
        if step == 0.0 || !step.is_finite() {
            return vec![lo];
        }
        // A negative increment means an inverse step: dividing instead of
        // multiplying keeps fractional ticks exact (0.3, not 0.30000000000000004).
        let mut ticks: Vec<f64> = if step > 0.0 {
            let first = (lo / step).ceil();
            let last = (hi / step).floor();
            let n = (last - first + 1.0).max(0.0) as usize;
            (0..n).map(|i| (first + i as f64) * step).collect()
        } else {
            let inv = -step;
            let first = (lo * inv).ceil();
            let last = (hi * inv).floor();
            let n = (last - first + 1.0).max(0.0) as usize;
            (0..n).map(|i| (first + i as f64) / inv).collect()
        };
        if reversed {
            ticks.reverse();
        }
        ticks
    }
}

fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

/// Ordered discrete labels to contiguous pixel bands with inner padding.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    range: (f32, f32),
    padding: f32,
    step: f32,
    bandwidth: f32,
}

impl BandScale {
    /// `padding` is the fraction of each step left empty, in `[0, 1)`.
    pub fn new(domain: Vec<String>, range: (f32, f32), padding: f32) -> Self {
        let n = domain.len();
        let span = range.1 - range.0;
        let (step, bandwidth) = if n == 0 {
            (0.0, 0.0)
        } else {
            // d3 band layout with padding_inner == padding_outer.
            let step = span / (n as f32 - padding + 2.0 * padding);
            (step, step * (1.0 - padding))
        };
        Self {
            domain,
            range,
            padding,
            step,
            bandwidth,
        }
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    /// Leading edge of the band for `label`, `None` for unknown labels.
    pub fn position(&self, label: &str) -> Option<f32> {
        let idx = self.domain.iter().position(|l| l == label)?;
        Some(self.range.0 + self.step * self.padding + self.step * idx as f32)
    }

    /// Band center, where tick marks and labels go.
    pub fn center(&self, label: &str) -> Option<f32> {
        Some(self.position(label)? + self.bandwidth / 2.0)
    }

    pub fn bandwidth(&self) -> f32 {
        self.bandwidth
    }

    pub fn step(&self) -> f32 {
        self.step
    }
}

/// Domain value for the polymorphic scale surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleValue<'a> {
    Label(&'a str),
    Number(f64),
}

/// Tagged scale variant selected once per render from the chart
/// configuration, with a uniform map-to-pixel capability.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartScale {
    Band(BandScale),
    Linear(LinearScale),
}

impl ChartScale {
    /// Maps a domain value to a pixel coordinate. Mismatched value kinds and
    /// unknown labels map to the range start rather than failing.
    pub fn map(&self, value: ScaleValue) -> f32 {
        match (self, value) {
            (Self::Band(s), ScaleValue::Label(l)) => s.position(l).unwrap_or(s.range().0),
            (Self::Linear(s), ScaleValue::Number(v)) => s.map(v),
            (Self::Band(s), ScaleValue::Number(_)) => s.range().0,
            (Self::Linear(s), ScaleValue::Label(_)) => s.range().0,
        }
    }

    pub fn range(&self) -> (f32, f32) {
        match self {
            Self::Band(s) => s.range(),
            Self::Linear(s) => s.range(),
        }
    }
}

/// Ordinal key to color mapping, cycling when keys outnumber the palette.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorScale {
    domain: Vec<String>,
    palette: Vec<Color>,
}

impl ColorScale {
    /// Resolution order from the chart configs: explicit colors win over a
    /// named scheme, which wins over the default ten-color palette.
    pub fn resolve(domain: Vec<String>, colors: Option<&[Color]>, scheme: ColorScheme) -> Self {
        let palette = match colors {
            Some(list) if !list.is_empty() => list.to_vec(),
            _ => scheme.colors().to_vec(),
        };
        Self { domain, palette }
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn color(&self, key: &str) -> Color {
        let idx = self
            .domain
            .iter()
            .position(|k| k == key)
            .unwrap_or(self.domain.len());
        self.palette[idx % self.palette.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_map() {
        let s = LinearScale::new((0.0, 20.0), (100.0, 0.0));
        assert_eq!(s.map(0.0), 100.0);
        assert_eq!(s.map(20.0), 0.0);
        assert_eq!(s.map(10.0), 50.0);
    }

    #[test]
    fn test_linear_degenerate_domain() {
        // All-zero data: everything maps to the range start, no NaN.
        let s = LinearScale::new((0.0, 0.0), (300.0, 0.0));
        assert_eq!(s.map(0.0), 300.0);
        assert_eq!(s.map(5.0), 300.0);
    }

    #[test]
    fn test_linear_ticks_nice() {
        let s = LinearScale::new((0.0, 20.0), (0.0, 100.0));
        assert_eq!(s.ticks(5), vec![0.0, 5.0, 10.0, 15.0, 20.0]);
        let s = LinearScale::new((0.0, 1.0), (0.0, 100.0));
        assert_eq!(s.ticks(10), (0..=10).map(|i| i as f64 / 10.0).collect::<Vec<_>>());
    }

    #[test]
    fn test_band_positions() {
        let s = BandScale::new(
            vec!["A".into(), "B".into(), "C".into()],
            (0.0, 310.0),
            0.1,
        );
        // step = 310 / (3 - 0.1 + 0.2) = 100, bandwidth = 90
        assert!((s.step() - 100.0).abs() < 1e-4);
        assert!((s.bandwidth() - 90.0).abs() < 1e-4);
        assert!((s.position("A").unwrap() - 10.0).abs() < 1e-4);
        assert!((s.position("B").unwrap() - 110.0).abs() < 1e-4);
        assert_eq!(s.position("missing"), None);
    }

    #[test]
    fn test_band_empty_domain() {
        let s = BandScale::new(vec![], (0.0, 100.0), 0.1);
        assert_eq!(s.bandwidth(), 0.0);
        assert_eq!(s.position("A"), None);
    }

    #[test]
    fn test_chart_scale_uniform_map() {
        let band = ChartScale::Band(BandScale::new(vec!["A".into()], (0.0, 100.0), 0.0));
        let linear = ChartScale::Linear(LinearScale::new((0.0, 10.0), (0.0, 100.0)));
        assert_eq!(band.map(ScaleValue::Label("A")), 0.0);
        assert_eq!(linear.map(ScaleValue::Number(5.0)), 50.0);
        // Mismatched kinds fall back to the range start.
        assert_eq!(band.map(ScaleValue::Number(3.0)), 0.0);
    }

    #[test]
    fn test_color_scale_cycles() {
        let domain: Vec<String> = (0..12).map(|i| format!("s{i}")).collect();
        let scale = ColorScale::resolve(domain.clone(), None, ColorScheme::Category10);
        assert_eq!(scale.color("s0"), scale.color("s10"));
        assert_ne!(scale.color("s0"), scale.color("s1"));
    }

    #[test]
    fn test_color_scale_explicit_overrides_scheme() {
        let red = Color::rgb(255, 0, 0);
        let scale = ColorScale::resolve(vec!["a".into()], Some(&[red]), ColorScheme::Pastel2);
        assert_eq!(scale.color("a"), red);
    }
}
