//! Chart Components
//!
//! Multi-series trend chart and a simple bar chart, drawn on HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::data::TrendPoint;

/// Visual description of one data series
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Series {
    pub name: &'static str,
    pub color: &'static str,
}

/// How a trend series is rendered
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Area,
}

/// Multi-series chart over labelled points
#[component]
pub fn TrendChart(
    /// Labelled points; every point carries one value per series
    points: Vec<TrendPoint>,
    /// One entry per value in each point, in the same order
    series: Vec<Series>,
    #[prop(default = ChartKind::Line)]
    kind: ChartKind,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    let legend = series.clone();
    let draw_points = points;
    let draw_series = series;
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_trend(&canvas, &draw_points, &draw_series, kind);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="300"
                class="w-full h-64 md:h-72"
            />
            <ChartLegend series=legend />
        </div>
    }
}

/// Vertical bar chart over labelled points (first value of each point)
#[component]
pub fn BarChart(
    points: Vec<TrendPoint>,
    #[prop(default = "#3b82f6")]
    color: &'static str,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &points, color);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="300"
            class="w-full h-64 md:h-72"
        />
    }
}

/// Legend row showing series colors
#[component]
fn ChartLegend(series: Vec<Series>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-3">
            {series.into_iter().map(|s| view! {
                <div class="flex items-center space-x-2">
                    <div
                        class="w-3 h-3 rounded-full"
                        style=format!("background-color: {}", s.color)
                    />
                    <span class="text-sm text-gray-600">{s.name}</span>
                </div>
            }).collect_view()}
        </div>
    }
}

const MARGIN_LEFT: f64 = 50.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 30.0;

fn chart_context(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

/// Draw the trend chart: grid, y-axis labels, one polyline (or filled area)
/// per series, x labels from point labels.
fn draw_trend(
    canvas: &HtmlCanvasElement,
    points: &[TrendPoint],
    series: &[Series],
    kind: ChartKind,
) {
    let Some(ctx) = chart_context(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if points.is_empty() || series.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data", width / 2.0 - 30.0, height / 2.0);
        return;
    }

    // Scale from zero so series with different magnitudes stay comparable.
    let max_value = points
        .iter()
        .flat_map(|p| p.values.iter().copied())
        .fold(0.0_f64, f64::max);
    let y_max = if max_value > 0.0 { max_value * 1.1 } else { 1.0 };

    // Horizontal grid lines and y labels
    ctx.set_line_width(1.0);
    for i in 0..=4 {
        let y = MARGIN_TOP + (i as f64 / 4.0) * chart_height;
        ctx.set_stroke_style(&"#e5e7eb".into());
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = y_max * (1.0 - i as f64 / 4.0);
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    let x_at = |i: usize| {
        if points.len() == 1 {
            MARGIN_LEFT + chart_width / 2.0
        } else {
            MARGIN_LEFT + (i as f64 / (points.len() - 1) as f64) * chart_width
        }
    };
    let y_at = |value: f64| MARGIN_TOP + (1.0 - value / y_max) * chart_height;
    let baseline = MARGIN_TOP + chart_height;

    for (s_idx, s) in series.iter().enumerate() {
        // Filled area under the series
        if kind == ChartKind::Area {
            ctx.set_global_alpha(0.15);
            ctx.set_fill_style(&s.color.into());
            ctx.begin_path();
            ctx.move_to(x_at(0), baseline);
            for (i, point) in points.iter().enumerate() {
                let value = point.values.get(s_idx).copied().unwrap_or(0.0);
                ctx.line_to(x_at(i), y_at(value));
            }
            ctx.line_to(x_at(points.len() - 1), baseline);
            ctx.close_path();
            ctx.fill();
            ctx.set_global_alpha(1.0);
        }

        // Series line
        ctx.set_stroke_style(&s.color.into());
        ctx.set_line_width(2.0);
        ctx.begin_path();
        for (i, point) in points.iter().enumerate() {
            let value = point.values.get(s_idx).copied().unwrap_or(0.0);
            if i == 0 {
                ctx.move_to(x_at(i), y_at(value));
            } else {
                ctx.line_to(x_at(i), y_at(value));
            }
        }
        ctx.stroke();

        // Data points
        ctx.set_fill_style(&s.color.into());
        for (i, point) in points.iter().enumerate() {
            let value = point.values.get(s_idx).copied().unwrap_or(0.0);
            ctx.begin_path();
            let _ = ctx.arc(x_at(i), y_at(value), 3.0, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }
    }

    // X labels
    ctx.set_fill_style(&"#6b7280".into());
    ctx.set_font("12px sans-serif");
    for (i, point) in points.iter().enumerate() {
        let _ = ctx.fill_text(&point.label, x_at(i) - 15.0, height - 8.0);
    }
}

/// Draw the bar chart from the first value of each point.
fn draw_bars(canvas: &HtmlCanvasElement, points: &[TrendPoint], color: &str) {
    let Some(ctx) = chart_context(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if points.is_empty() {
        return;
    }

    let max_value = points
        .iter()
        .filter_map(|p| p.values.first().copied())
        .fold(0.0_f64, f64::max);
    let y_max = if max_value > 0.0 { max_value * 1.1 } else { 1.0 };

    ctx.set_line_width(1.0);
    for i in 0..=4 {
        let y = MARGIN_TOP + (i as f64 / 4.0) * chart_height;
        ctx.set_stroke_style(&"#e5e7eb".into());
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = y_max * (1.0 - i as f64 / 4.0);
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    let slot = chart_width / points.len() as f64;
    let bar_width = slot * 0.6;

    ctx.set_fill_style(&color.into());
    for (i, point) in points.iter().enumerate() {
        let value = point.values.first().copied().unwrap_or(0.0);
        let bar_height = value / y_max * chart_height;
        let x = MARGIN_LEFT + i as f64 * slot + (slot - bar_width) / 2.0;
        ctx.fill_rect(x, MARGIN_TOP + chart_height - bar_height, bar_width, bar_height);
    }

    ctx.set_fill_style(&"#6b7280".into());
    ctx.set_font("11px sans-serif");
    for (i, point) in points.iter().enumerate() {
        let x = MARGIN_LEFT + i as f64 * slot + slot / 2.0 - 18.0;
        let _ = ctx.fill_text(&point.label, x, height - 8.0);
    }
}
