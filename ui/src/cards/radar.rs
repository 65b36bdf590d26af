//! Radar (spider) chart geometry and SVG markup for the statistic panel.
//!
//! Axes start at angle 0 (pointing right) and advance counter-clockwise in
//! steps of `2π / n`. The plotted series repeats its first point at the end
//! so both the filled area and the outline close on themselves.

use std::f64::consts::TAU;
use std::fmt::Write;

/// Axis labels in plotting order.
pub const STAT_AXES: [&str; 6] = ["HP", "Attack", "Defense", "Sp. Atk", "Sp. Def", "Speed"];

/// Radial limit is rounded up to a multiple of this.
const RADIAL_STEP: f64 = 25.0;
const GRID_RINGS: usize = 4;
const FILL_COLOR: &str = "#e5383b";

/// Evenly spaced axis angles over `[0, 2π)`, starting at 0.
pub fn axis_angles(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| TAU * i as f64 / count as f64)
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarChart {
    labels: Vec<&'static str>,
    /// Closed sequence: one entry per axis plus the first repeated.
    angles: Vec<f64>,
    values: Vec<f64>,
    radial_max: f64,
}

impl RadarChart {
    pub fn new(labels: &[&'static str], values: &[f64]) -> Self {
        debug_assert_eq!(labels.len(), values.len());

        let mut angles = axis_angles(values.len());
        let mut closed = values.to_vec();
        if let (Some(&first_angle), Some(&first_value)) = (angles.first(), values.first()) {
            angles.push(first_angle);
            closed.push(first_value);
        }

        let peak = values.iter().copied().fold(0.0_f64, f64::max);
        let radial_max = ((peak / RADIAL_STEP).ceil() * RADIAL_STEP).max(RADIAL_STEP);

        Self {
            labels: labels.to_vec(),
            angles,
            values: closed,
            radial_max,
        }
    }

    pub fn for_stats(stats: [u32; 6]) -> Self {
        let values = stats.map(f64::from);
        Self::new(&STAT_AXES, &values)
    }

    pub fn labels(&self) -> &[&'static str] {
        &self.labels
    }

    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn radial_max(&self) -> f64 {
        self.radial_max
    }

    /// `(angle, value)` pairs in drawing order, closing point included.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.angles
            .iter()
            .copied()
            .zip(self.values.iter().copied())
            .collect()
    }

    /// Render into a square SVG document `size` pixels wide.
    ///
    /// Grid rings and spokes are drawn without numeric ticks; only the filled
    /// shape conveys magnitude.
    pub fn to_svg(&self, size: f64) -> String {
        let center = size / 2.0;
        let radius = size * 0.34;
        let label_radius = radius + size * 0.08;
        let project = |angle: f64, fraction: f64| {
            (
                center + radius * fraction * angle.cos(),
                center - radius * fraction * angle.sin(),
            )
        };

        let mut svg = String::new();
        let _ = write!(
            svg,
            "<svg xmlns='http://www.w3.org/2000/svg' class='radar' width='{size:.0}' height='{size:.0}' viewBox='0 0 {size:.0} {size:.0}' role='img'>"
        );

        for ring in 1..=GRID_RINGS {
            let r = radius * ring as f64 / GRID_RINGS as f64;
            let _ = write!(
                svg,
                "<circle class='radar__ring' cx='{center:.2}' cy='{center:.2}' r='{r:.2}' fill='none' stroke='currentColor' stroke-opacity='0.2'/>"
            );
        }

        let axis_count = self.labels.len();
        for &angle in self.angles.iter().take(axis_count) {
            let (x, y) = project(angle, 1.0);
            let _ = write!(
                svg,
                "<line class='radar__spoke' x1='{center:.2}' y1='{center:.2}' x2='{x:.2}' y2='{y:.2}' stroke='currentColor' stroke-opacity='0.2'/>"
            );
        }

        let coords = self
            .points()
            .into_iter()
            .map(|(angle, value)| {
                let (x, y) = project(angle, value / self.radial_max);
                format!("{x:.2},{y:.2}")
            })
            .collect::<Vec<_>>()
            .join(" ");

        let _ = write!(
            svg,
            "<polygon class='radar__area' points='{coords}' fill='{FILL_COLOR}' fill-opacity='0.25' stroke='none'/>"
        );
        let _ = write!(
            svg,
            "<polyline class='radar__outline' points='{coords}' fill='none' stroke='{FILL_COLOR}' stroke-width='2' stroke-linejoin='round'/>"
        );

        for (label, &angle) in self.labels.iter().zip(&self.angles) {
            let x = center + label_radius * angle.cos();
            let y = center - label_radius * angle.sin();
            let anchor = match angle.cos() {
                c if c > 0.3 => "start",
                c if c < -0.3 => "end",
                _ => "middle",
            };
            let _ = write!(
                svg,
                "<text class='radar__label' x='{x:.2}' y='{y:.2}' text-anchor='{anchor}' dominant-baseline='middle' fill='currentColor'>{label}</text>"
            );
        }

        svg.push_str("</svg>");
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const SAMPLE: [u32; 6] = [65, 130, 60, 95, 115, 55];

    #[test]
    fn angles_are_evenly_spaced_from_zero() {
        let angles = axis_angles(6);
        assert_eq!(angles.len(), 6);
        assert_eq!(angles[0], 0.0);
        for (i, angle) in angles.iter().enumerate() {
            assert!((angle - i as f64 * PI / 3.0).abs() < 1e-12);
            assert!(*angle < TAU);
        }
    }

    #[test]
    fn series_closes_on_its_first_point() {
        let chart = RadarChart::for_stats(SAMPLE);
        let points = chart.points();
        assert_eq!(points.len(), 7);
        assert_eq!(points[6], points[0]);
        assert_eq!(chart.values(), [65.0, 130.0, 60.0, 95.0, 115.0, 55.0, 65.0]);
        assert_eq!(chart.labels(), STAT_AXES);
    }

    #[test]
    fn radial_limit_rounds_up_to_the_grid_step() {
        assert_eq!(RadarChart::for_stats(SAMPLE).radial_max(), 150.0);
        assert_eq!(RadarChart::for_stats([100; 6]).radial_max(), 100.0);
        assert_eq!(RadarChart::for_stats([0; 6]).radial_max(), RADIAL_STEP);
    }

    #[test]
    fn svg_has_closed_shapes_and_axis_labels_only() {
        let svg = RadarChart::for_stats(SAMPLE).to_svg(300.0);

        assert_eq!(svg.matches("<text").count(), 6);
        for label in STAT_AXES {
            assert!(svg.contains(&format!(">{label}</text>")), "missing {label}");
        }

        for shape in ["<polygon", "<polyline"] {
            let start = svg.find(shape).unwrap();
            let points_attr = svg[start..]
                .split("points='")
                .nth(1)
                .unwrap()
                .split('\'')
                .next()
                .unwrap();
            let pairs: Vec<&str> = points_attr.split(' ').collect();
            assert_eq!(pairs.len(), 7, "{shape} should carry 7 points");
            assert_eq!(pairs[0], pairs[6]);
        }
    }

    #[test]
    fn first_axis_points_right() {
        let svg = RadarChart::for_stats([150, 0, 0, 0, 0, 0]).to_svg(200.0);
        // HP at full scale sits on the positive x axis: (100 + 68, 100).
        assert!(svg.contains("points='168.00,100.00 "));
    }
}
