//! Static SVG charts for the report.
//!
//!   Product_KPIs_Dashboard.svg   2×2 bar panels, one KPI per panel
//!   Risk_Aggregation_Chart.svg   stacked risk bands per business segment

use crate::{
    aggregator::{ProductKpi, SegmentRiskAggregate},
    error::{AuditError, AuditResult},
};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

pub const PRODUCT_DASHBOARD_FILE: &str = "Product_KPIs_Dashboard.svg";
pub const RISK_AGGREGATION_CHART_FILE: &str = "Risk_Aggregation_Chart.svg";

const SET2: [RGBColor; 4] = [
    RGBColor(102, 194, 165),
    RGBColor(252, 141, 98),
    RGBColor(141, 160, 203),
    RGBColor(231, 138, 195),
];
const SET1: [RGBColor; 4] = [
    RGBColor(228, 26, 28),
    RGBColor(55, 126, 184),
    RGBColor(77, 175, 74),
    RGBColor(152, 78, 163),
];
const BLUES: [RGBColor; 4] = [
    RGBColor(198, 219, 239),
    RGBColor(107, 174, 214),
    RGBColor(33, 113, 181),
    RGBColor(8, 48, 107),
];
const YLGN: [RGBColor; 4] = [
    RGBColor(217, 240, 163),
    RGBColor(120, 198, 121),
    RGBColor(35, 132, 67),
    RGBColor(0, 69, 41),
];
const RISK_COLORS: [RGBColor; 3] = [
    RGBColor(255, 0, 0),
    RGBColor(255, 165, 0),
    RGBColor(0, 128, 0),
];

fn chart_err<E: std::fmt::Display>(chart: &str) -> impl Fn(E) -> AuditError + '_ {
    move |e| AuditError::Chart {
        chart: chart.to_string(),
        message: e.to_string(),
    }
}

/// Headroom above the tallest bar; an all-zero panel still gets an axis.
fn y_ceiling(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(0.0_f64, f64::max);
    if max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}

fn segment_label(labels: &[&str], value: &SegmentValue<i32>) -> String {
    match value {
        SegmentValue::CenterOf(i) => labels
            .get(*i as usize)
            .map(|s| s.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

struct BarPanel<'a> {
    title: &'a str,
    y_desc: &'a str,
    labels: &'a [&'a str],
    values: Vec<f64>,
    palette: &'a [RGBColor],
}

fn draw_bar_panel(area: &DrawingArea<SVGBackend<'_>, Shift>, panel: &BarPanel<'_>) -> AuditResult<()> {
    let err = chart_err(panel.title);
    let n = panel.values.len() as i32;

    let mut chart = ChartBuilder::on(area)
        .caption(panel.title, ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0..n).into_segmented(), 0f64..y_ceiling(panel.values.iter().copied()))
        .map_err(&err)?;

    let labels = panel.labels;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Product")
        .y_desc(panel.y_desc)
        .x_label_formatter(&|v| segment_label(labels, v))
        .draw()
        .map_err(&err)?;

    chart
        .draw_series(panel.values.iter().enumerate().map(|(i, v)| {
            let i = i as i32;
            let color = panel.palette[i as usize % panel.palette.len()];
            Rectangle::new(
                [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), *v)],
                color.filled(),
            )
        }))
        .map_err(&err)?;

    Ok(())
}

/// Four KPI panels in a 2×2 grid.
pub fn render_product_dashboard(dir: &Path, kpis: &[ProductKpi]) -> AuditResult<PathBuf> {
    let path = dir.join(PRODUCT_DASHBOARD_FILE);
    let err = chart_err(PRODUCT_DASHBOARD_FILE);
    let labels: Vec<&str> = kpis.iter().map(|k| k.product.label()).collect();

    let panels = [
        BarPanel {
            title: "Total Audits by Product",
            y_desc: "Total Audits",
            labels: &labels,
            values: kpis.iter().map(|k| k.total_audits as f64).collect(),
            palette: &SET2,
        },
        BarPanel {
            title: "Failed Audits by Product",
            y_desc: "Failed Audits",
            labels: &labels,
            values: kpis.iter().map(|k| k.failed_audits as f64).collect(),
            palette: &SET1,
        },
        BarPanel {
            title: "Average Risk Score by Product",
            y_desc: "Average Risk Score",
            labels: &labels,
            values: kpis.iter().map(|k| k.avg_risk_score).collect(),
            palette: &BLUES,
        },
        BarPanel {
            title: "Average Operating Effectiveness by Product",
            y_desc: "Average Operating Effectiveness",
            labels: &labels,
            values: kpis.iter().map(|k| k.avg_operating_effectiveness).collect(),
            palette: &YLGN,
        },
    ];

    {
        let root = SVGBackend::new(&path, (1500, 1200)).into_drawing_area();
        root.fill(&WHITE).map_err(&err)?;
        let areas = root.split_evenly((2, 2));
        for (area, panel) in areas.iter().zip(panels.iter()) {
            draw_bar_panel(area, panel)?;
        }
        root.present().map_err(&err)?;
    }

    log::debug!("Rendered {}", path.display());
    Ok(path)
}

/// Stacked High/Medium/Low risk counts per business segment.
pub fn render_risk_aggregation(dir: &Path, aggregates: &[SegmentRiskAggregate]) -> AuditResult<PathBuf> {
    let path = dir.join(RISK_AGGREGATION_CHART_FILE);
    let err = chart_err(RISK_AGGREGATION_CHART_FILE);
    let labels: Vec<&str> = aggregates.iter().map(|a| a.business_segment.label()).collect();
    let n = aggregates.len() as i32;

    {
        let root = SVGBackend::new(&path, (1000, 600)).into_drawing_area();
        root.fill(&WHITE).map_err(&err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Risk Aggregation by Business Segment", ("sans-serif", 24))
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(
                (0..n).into_segmented(),
                0f64..y_ceiling(aggregates.iter().map(|a| a.total() as f64)),
            )
            .map_err(&err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("Business Segment")
            .y_desc("Risk Count")
            .x_label_formatter(&|v| segment_label(&labels, v))
            .draw()
            .map_err(&err)?;

        let bands: [(&str, fn(&SegmentRiskAggregate) -> u64); 3] = [
            ("High Risk", |a| a.high_risk_count),
            ("Medium Risk", |a| a.medium_risk_count),
            ("Low Risk", |a| a.low_risk_count),
        ];

        let mut base = vec![0.0_f64; aggregates.len()];
        for ((label, count), color) in bands.iter().zip(RISK_COLORS) {
            let bars: Vec<_> = aggregates
                .iter()
                .enumerate()
                .map(|(i, a)| {
                    let bottom = base[i];
                    let top = bottom + count(a) as f64;
                    base[i] = top;
                    let x = i as i32;
                    Rectangle::new(
                        [(SegmentValue::Exact(x), bottom), (SegmentValue::Exact(x + 1), top)],
                        color.filled(),
                    )
                })
                .collect();

            chart
                .draw_series(bars)
                .map_err(&err)?
                .label(*label)
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled()));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(&err)?;

        root.present().map_err(&err)?;
    }

    log::debug!("Rendered {}", path.display());
    Ok(path)
}
