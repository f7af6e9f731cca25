//! Two-panel bar chart of size and cycle deltas per library

use plotters::coord::Shift;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

use crate::analysis::GroupedSeries;
use crate::config::ChartConfig;
use crate::core::NormalizedRow;
use crate::core::constants::chart::{
    AXIS_LABEL_FONT_SIZE, CYCLES_AXIS_DESC, DATA_LABEL_FONT_SIZE, FONT_FAMILY, GROUP_WIDTH,
    PALETTE, SIZE_AXIS_DESC, SPREAD_OPACITY, TICK_LABEL_FONT_SIZE, TITLE_FONT_SIZE,
};
use crate::core::error::{ReportError, Result};

type DrawResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Color of the n-th library group
pub fn series_color(group_index: usize) -> RGBColor {
    let (r, g, b) = PALETTE[group_index % PALETTE.len()];
    RGBColor(r, g, b)
}

/// Horizontal extent `(left, right)` of one bar within its category slot.
///
/// All bars of a category together span `GROUP_WIDTH`, centered on the
/// category index.
pub fn bar_span(category: usize, group_index: usize, group_count: usize) -> (f64, f64) {
    let bar_width = GROUP_WIDTH / group_count.max(1) as f64;
    let left = category as f64 - GROUP_WIDTH / 2.0 + group_index as f64 * bar_width;
    (left, left + bar_width)
}

/// Render the size and cycle panels side by side into `path`.
///
/// A `.svg` extension selects the SVG backend; everything else is written
/// as a bitmap whose format follows the extension.
pub fn render_chart(series: &GroupedSeries, config: &ChartConfig, path: &Path) -> Result<()> {
    let dimensions = (config.width, config.height);
    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    let outcome = if is_svg {
        draw_panels(
            SVGBackend::new(path, dimensions).into_drawing_area(),
            series,
            config,
        )
    } else {
        draw_panels(
            BitMapBackend::new(path, dimensions).into_drawing_area(),
            series,
            config,
        )
    };

    outcome.map_err(|e| ReportError::Rendering(format!("{}: {e}", path.display())))
}

fn draw_panels<DB>(
    root: DrawingArea<DB, Shift>,
    series: &GroupedSeries,
    config: &ChartConfig,
) -> DrawResult<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 2));

    draw_size_panel(&panels[0], series, config)?;
    draw_cycles_panel(&panels[1], series, config)?;

    root.present()?;
    Ok(())
}

/// Grouped bars of the flash size delta
fn draw_size_panel<DB>(
    area: &DrawingArea<DB, Shift>,
    series: &GroupedSeries,
    config: &ChartConfig,
) -> DrawResult<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let y_max = f64::from(config.size_axis_max);
    let mut chart = build_panel(area, series, &config.size_title, y_max, SIZE_AXIS_DESC)?;
    let group_count = series.group_count();

    for (group_index, (tag, rows)) in series.groups().enumerate() {
        let color = series_color(group_index);
        let bars = placed(series, rows, group_index, group_count);

        chart
            .draw_series(bars.iter().map(|(left, right, row)| {
                Rectangle::new(
                    [(*left, 0.0), (*right, row.delta_size as f64)],
                    color.filled(),
                )
            }))?
            .label(tag)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled()));

        chart.draw_series(bars.iter().map(|(left, right, row)| {
            value_label(row.delta_size, (left + right) / 2.0, row.delta_size as f64, y_max)
        }))?;
    }

    draw_legend(&mut chart)
}

/// Stacked bars: best case cycles, then the spread up to the worst case
fn draw_cycles_panel<DB>(
    area: &DrawingArea<DB, Shift>,
    series: &GroupedSeries,
    config: &ChartConfig,
) -> DrawResult<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let y_max = f64::from(config.cycles_axis_max);
    let mut chart = build_panel(area, series, &config.cycles_title, y_max, CYCLES_AXIS_DESC)?;
    let group_count = series.group_count();

    for (group_index, (tag, rows)) in series.groups().enumerate() {
        let color = series_color(group_index);
        let spread = color.mix(SPREAD_OPACITY);
        let bars = placed(series, rows, group_index, group_count);

        chart
            .draw_series(bars.iter().map(|(left, right, row)| {
                Rectangle::new(
                    [(*left, 0.0), (*right, row.delta_cycles_min as f64)],
                    color.filled(),
                )
            }))?
            .label(format!("{tag}-min"))
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled()));

        chart
            .draw_series(bars.iter().map(|(left, right, row)| {
                Rectangle::new(
                    [
                        (*left, row.delta_cycles_min as f64),
                        (*right, row.delta_cycles_max as f64),
                    ],
                    spread.filled(),
                )
            }))?
            .label(format!("{tag}-max"))
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], spread.filled()));

        chart.draw_series(bars.iter().map(|(left, right, row)| {
            value_label(
                row.delta_cycles_spread(),
                (left + right) / 2.0,
                row.delta_cycles_max as f64,
                y_max,
            )
        }))?;
    }

    draw_legend(&mut chart)
}

type Panel<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn build_panel<'a, DB>(
    area: &'a DrawingArea<DB, Shift>,
    series: &GroupedSeries,
    title: &str,
    y_max: f64,
    y_desc: &str,
) -> DrawResult<Panel<'a, DB>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let categories = series.categories();
    let category_count = categories.len().max(1);

    let mut chart = ChartBuilder::on(area)
        .caption(title, (FONT_FAMILY, TITLE_FONT_SIZE))
        .margin(15)
        .x_label_area_size(35)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5..(category_count as f64 - 0.5), 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(category_count * 2 + 1)
        .x_label_formatter(&|x| category_label(categories, *x))
        .y_desc(y_desc)
        .label_style((FONT_FAMILY, TICK_LABEL_FONT_SIZE))
        .axis_desc_style((FONT_FAMILY, AXIS_LABEL_FONT_SIZE))
        .draw()?;

    Ok(chart)
}

fn draw_legend<'a, DB>(chart: &mut Panel<'a, DB>) -> DrawResult<()>
where
    DB: DrawingBackend + 'a,
    DB::ErrorType: 'static,
{
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((FONT_FAMILY, TICK_LABEL_FONT_SIZE))
        .draw()?;
    Ok(())
}

/// Bars of one group with their horizontal extent, skipping unknown names
fn placed<'r>(
    series: &GroupedSeries,
    rows: &'r [NormalizedRow],
    group_index: usize,
    group_count: usize,
) -> Vec<(f64, f64, &'r NormalizedRow)> {
    rows.iter()
        .filter_map(|row| {
            let category = series.category_index(&row.name)?;
            let (left, right) = bar_span(category, group_index, group_count);
            Some((left, right, row))
        })
        .collect()
}

/// Tick label for a category axis position; only whole positions are named
fn category_label(categories: &[String], x: f64) -> String {
    let index = x.round();
    if index < 0.0 || (x - index).abs() > 0.05 {
        return String::new();
    }
    categories.get(index as usize).cloned().unwrap_or_default()
}

fn value_label(value: i64, x: f64, top: f64, y_max: f64) -> Text<'static, (f64, f64), String> {
    Text::new(
        value.to_string(),
        (x, top + y_max * 0.01),
        (FONT_FAMILY, DATA_LABEL_FONT_SIZE)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom)),
    )
}
