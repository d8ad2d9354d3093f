//! Radar chart for per-section match scores.
//!
//! The geometry is computed here as plain numbers and rendered as inline SVG
//! by [`SectionChart`]; there is no charting library to go missing at call
//! time. One dataset, fixed colors, radial axis clamped to [0, 100] with a
//! ring every 20, no legend. Built once from the embedded chart data and
//! never refreshed.

use std::f64::consts::TAU;

use dioxus::prelude::*;

use super::SectionChartData;

/// Radial axis ceiling.
pub const AXIS_MAX: f64 = 100.0;

/// Spacing of the concentric tick rings.
pub const TICK_STEP: f64 = 20.0;

/// Rendered viewbox edge in CSS pixels.
const CHART_SIZE: f64 = 320.0;

/// Margin between the outer ring and the viewbox edge, leaving room for the
/// axis labels.
const RIM_PADDING: f64 = 56.0;

/// Gap between the outer ring and its label baseline.
const LABEL_OFFSET: f64 = 16.0;

const DATASET_LABEL: &str = "Section Match Score";
const FILL_COLOR: &str = "rgba(102, 126, 234, 0.2)";
const STROKE_COLOR: &str = "rgba(102, 126, 234, 1)";
const GRID_COLOR: &str = "rgba(128, 128, 128, 0.28)";

/// Rim endpoint of one axis line (the other end is the center).
#[derive(Debug, Clone, PartialEq)]
pub struct Spoke {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub x: f64,
    pub y: f64,
    pub anchor: &'static str,
    pub text: String,
}

/// Precomputed drawing instructions for one radar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarGeometry {
    pub size: f64,
    pub center: f64,
    /// `points` attribute per tick ring, innermost first.
    pub rings: Vec<String>,
    pub spokes: Vec<Spoke>,
    /// `points` attribute of the value polygon.
    pub polygon: String,
    pub vertices: Vec<(f64, f64)>,
    pub labels: Vec<AxisLabel>,
}

/// Lay out a radar chart for parallel label/value arrays. Extra entries on
/// either side are ignored; values are clamped to [0, AXIS_MAX]. `None` when
/// there is nothing to draw.
pub fn radar_geometry(labels: &[String], values: &[f64], size: f64) -> Option<RadarGeometry> {
    let axes = labels.len().min(values.len());
    let center = size / 2.0;
    let radius = center - RIM_PADDING;
    if axes == 0 || radius <= 0.0 {
        return None;
    }

    let direction = |index: usize| {
        // First axis points straight up; the rest proceed clockwise.
        let angle = index as f64 * TAU / axes as f64 - TAU / 4.0;
        (angle.cos(), angle.sin())
    };
    let point = |index: usize, r: f64| {
        let (dx, dy) = direction(index);
        (round1(center + dx * r), round1(center + dy * r))
    };

    let ring_count = (AXIS_MAX / TICK_STEP) as usize;
    let rings = (1..=ring_count)
        .map(|step| {
            let r = radius * (step as f64 * TICK_STEP) / AXIS_MAX;
            points_attr((0..axes).map(|i| point(i, r)))
        })
        .collect();

    let spokes = (0..axes)
        .map(|i| {
            let (x, y) = point(i, radius);
            Spoke { x, y }
        })
        .collect();

    let vertices: Vec<(f64, f64)> = (0..axes)
        .map(|i| {
            let value = values[i].clamp(0.0, AXIS_MAX);
            point(i, radius * value / AXIS_MAX)
        })
        .collect();
    let polygon = points_attr(vertices.iter().copied());

    let labels = (0..axes)
        .map(|i| {
            let (dx, _) = direction(i);
            let (x, y) = point(i, radius + LABEL_OFFSET);
            let anchor = if dx > 0.1 {
                "start"
            } else if dx < -0.1 {
                "end"
            } else {
                "middle"
            };
            AxisLabel {
                x,
                y,
                anchor,
                text: labels[i].clone(),
            }
        })
        .collect();

    Some(RadarGeometry {
        size,
        center,
        rings,
        spokes,
        polygon,
        vertices,
        labels,
    })
}

fn points_attr(points: impl Iterator<Item = (f64, f64)>) -> String {
    points
        .map(|(x, y)| format!("{x},{y}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[component]
pub fn SectionChart(data: SectionChartData) -> Element {
    match radar_geometry(&data.labels, &data.values, CHART_SIZE) {
        None => rsx! {},
        Some(geom) => rsx! {
            figure { class: "results-chart", id: "sectionChart",
                svg {
                    view_box: "0 0 {geom.size} {geom.size}",
                    width: "{geom.size}",
                    height: "{geom.size}",
                    role: "img",
                    "aria-label": DATASET_LABEL,
                    for ring in geom.rings.iter() {
                        polygon {
                            points: "{ring}",
                            fill: "none",
                            stroke: GRID_COLOR,
                            stroke_width: "1",
                        }
                    }
                    for spoke in geom.spokes.iter() {
                        line {
                            x1: "{geom.center}",
                            y1: "{geom.center}",
                            x2: "{spoke.x}",
                            y2: "{spoke.y}",
                            stroke: GRID_COLOR,
                            stroke_width: "1",
                        }
                    }
                    polygon {
                        points: "{geom.polygon}",
                        fill: FILL_COLOR,
                        stroke: STROKE_COLOR,
                        stroke_width: "2",
                    }
                    for (x, y) in geom.vertices.iter() {
                        circle {
                            cx: "{x}",
                            cy: "{y}",
                            r: "3",
                            fill: STROKE_COLOR,
                            stroke: "#fff",
                            stroke_width: "1",
                        }
                    }
                    for label in geom.labels.iter() {
                        text {
                            x: "{label.x}",
                            y: "{label.y}",
                            text_anchor: label.anchor,
                            class: "results-chart__label",
                            "{label.text}"
                        }
                    }
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn five_tick_rings() {
        let geom =
            radar_geometry(&labels(&["a", "b", "c"]), &[10.0, 20.0, 30.0], 320.0).unwrap();
        assert_eq!(geom.rings.len(), 5);
        assert_eq!(geom.spokes.len(), 3);
        assert_eq!(geom.vertices.len(), 3);
    }

    #[test]
    fn values_clamp_to_axis_range() {
        let over = radar_geometry(&labels(&["a", "b", "c"]), &[150.0, 50.0, 50.0], 320.0).unwrap();
        let max = radar_geometry(&labels(&["a", "b", "c"]), &[100.0, 50.0, 50.0], 320.0).unwrap();
        assert_eq!(over.vertices[0], max.vertices[0]);

        let under = radar_geometry(&labels(&["a", "b", "c"]), &[-5.0, 0.0, 0.0], 320.0).unwrap();
        assert_eq!(under.vertices[0], (under.center, under.center));
    }

    #[test]
    fn first_axis_points_up_with_centered_label() {
        let geom = radar_geometry(&labels(&["top", "b", "c"]), &[50.0; 3], 320.0).unwrap();
        assert_eq!(geom.labels[0].anchor, "middle");
        assert!((geom.labels[0].x - geom.center).abs() < 0.5);
        assert!(geom.labels[0].y < geom.center);
    }

    #[test]
    fn mismatched_lengths_use_common_prefix() {
        let geom = radar_geometry(&labels(&["a", "b", "c"]), &[40.0, 60.0], 320.0).unwrap();
        assert_eq!(geom.vertices.len(), 2);
        assert_eq!(geom.labels.len(), 2);
    }

    #[test]
    fn nothing_to_draw() {
        assert!(radar_geometry(&[], &[1.0], 320.0).is_none());
        assert!(radar_geometry(&labels(&["a"]), &[], 320.0).is_none());
        assert!(radar_geometry(&labels(&["a"]), &[1.0], 10.0).is_none());
    }
}
