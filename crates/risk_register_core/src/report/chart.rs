//! Risk-level distribution chart.
//!
//! # Responsibility
//! - Define the narrow "render counts to an image file" seam.
//! - Provide the PNG bar-chart implementation.
//!
//! # Invariants
//! - Exactly three bars in High, Medium, Low order.
//! - Zero counts render as zero-height bars that still carry a "0" label.

use super::glyphs::{draw_text, draw_text_vertical, text_width, GLYPH_HEIGHT};
use super::summary::LevelDistribution;
use super::ReportResult;
use crate::model::risk::RiskLevel;
use image::{ImageFormat, Rgb, RgbImage};
use std::path::Path;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const INK: Rgb<u8> = Rgb([33, 33, 33]);
const GRID: Rgb<u8> = Rgb([225, 225, 225]);
const HIGH_COLOR: Rgb<u8> = Rgb([0xd6, 0x27, 0x28]);
const MEDIUM_COLOR: Rgb<u8> = Rgb([0xff, 0x7f, 0x0e]);
const LOW_COLOR: Rgb<u8> = Rgb([0x2c, 0xa0, 0x2c]);

const CHART_TITLE: &str = "Risk Level Distribution";
const X_AXIS_TITLE: &str = "Risk Level";
const Y_AXIS_TITLE: &str = "Count";

/// Renders level counts to an image file.
pub trait ChartRenderer {
    fn render_distribution(&self, distribution: &LevelDistribution, path: &Path)
        -> ReportResult<()>;
}

impl<T: ChartRenderer + ?Sized> ChartRenderer for &T {
    fn render_distribution(
        &self,
        distribution: &LevelDistribution,
        path: &Path,
    ) -> ReportResult<()> {
        (**self).render_distribution(distribution, path)
    }
}

/// Bar color for a severity band.
pub fn level_color(level: RiskLevel) -> Rgb<u8> {
    match level {
        RiskLevel::High => HIGH_COLOR,
        RiskLevel::Medium => MEDIUM_COLOR,
        RiskLevel::Low => LOW_COLOR,
    }
}

/// PNG bar chart drawn with the `image` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngChartRenderer {
    pub width: u32,
    pub height: u32,
}

impl Default for PngChartRenderer {
    /// 6x4 inches at 150 dpi.
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
        }
    }
}

struct PlotArea {
    left: i64,
    top: i64,
    right: i64,
    bottom: i64,
}

impl PlotArea {
    fn width(&self) -> i64 {
        self.right - self.left
    }

    fn height(&self) -> i64 {
        self.bottom - self.top
    }
}

impl PngChartRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Draws the chart into an in-memory image.
    pub fn render(&self, distribution: &LevelDistribution) -> RgbImage {
        let mut image = RgbImage::from_pixel(self.width, self.height, BACKGROUND);
        let area = PlotArea {
            left: 90,
            top: 80,
            right: i64::from(self.width) - 40,
            bottom: i64::from(self.height) - 90,
        };
        if area.width() <= 0 || area.height() <= 0 {
            return image;
        }

        let title_scale = 3;
        let title_x = (i64::from(self.width) - i64::from(text_width(CHART_TITLE, title_scale))) / 2;
        draw_text(&mut image, CHART_TITLE, title_x, 24, title_scale, INK);

        let axis_max = axis_max(distribution.max_count());
        let step = tick_step(axis_max);
        let mut tick = 0;
        while tick <= axis_max {
            let y = value_to_y(&area, tick, axis_max);
            if tick > 0 {
                fill_rect(&mut image, area.left + 1, y, area.width(), 1, GRID);
            }
            let label = tick.to_string();
            let label_x = area.left - 10 - i64::from(text_width(&label, 2));
            draw_text(&mut image, &label, label_x, y - i64::from(GLYPH_HEIGHT), 2, INK);
            fill_rect(&mut image, area.left - 6, y, 6, 1, INK);
            tick += step;
        }

        let slot = area.width() / distribution.bars.len() as i64;
        let bar_width = slot * 3 / 5;
        for (index, (level, count)) in distribution.bars.iter().enumerate() {
            let slot_left = area.left + slot * index as i64;
            let bar_left = slot_left + (slot - bar_width) / 2;
            let bar_top = value_to_y(&area, *count, axis_max);
            fill_rect(
                &mut image,
                bar_left,
                bar_top,
                bar_width,
                area.bottom - bar_top,
                level_color(*level),
            );

            let value_label = count.to_string();
            let value_x =
                bar_left + (bar_width - i64::from(text_width(&value_label, 3))) / 2;
            let value_y = bar_top - 8 - i64::from(GLYPH_HEIGHT * 3);
            draw_text(&mut image, &value_label, value_x, value_y, 3, INK);

            let level_label = level.as_str();
            let level_x = slot_left + (slot - i64::from(text_width(level_label, 2))) / 2;
            draw_text(&mut image, level_label, level_x, area.bottom + 14, 2, INK);
        }

        fill_rect(&mut image, area.left, area.top, 2, area.height() + 2, INK);
        fill_rect(&mut image, area.left, area.bottom, area.width(), 2, INK);

        let x_title_x =
            area.left + (area.width() - i64::from(text_width(X_AXIS_TITLE, 2))) / 2;
        draw_text(&mut image, X_AXIS_TITLE, x_title_x, area.bottom + 50, 2, INK);
        draw_text_vertical(&mut image, Y_AXIS_TITLE, 16, area.top + 60, 2, INK);

        image
    }
}

impl ChartRenderer for PngChartRenderer {
    fn render_distribution(
        &self,
        distribution: &LevelDistribution,
        path: &Path,
    ) -> ReportResult<()> {
        let image = self.render(distribution);
        image.save_with_format(path, ImageFormat::Png)?;
        log::info!(
            "event=chart_written module=report status=ok path={} width={} height={}",
            path.display(),
            self.width,
            self.height
        );
        Ok(())
    }
}

/// Fills a rectangle, clipping to the image bounds.
pub(crate) fn fill_rect(
    image: &mut RgbImage,
    x: i64,
    y: i64,
    width: i64,
    height: i64,
    color: Rgb<u8>,
) {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + width).min(i64::from(image.width()));
    let y1 = (y + height).min(i64::from(image.height()));
    for py in y0..y1 {
        for px in x0..x1 {
            image.put_pixel(px as u32, py as u32, color);
        }
    }
}

/// Axis ceiling with headroom for the value labels; at least 1.
fn axis_max(max_count: usize) -> usize {
    let padded = (max_count as f64 * 1.15).ceil() as usize;
    padded.max(max_count + 1).max(1)
}

fn tick_step(axis_max: usize) -> usize {
    axis_max.div_ceil(5).max(1)
}

fn value_to_y(area: &PlotArea, value: usize, axis_max: usize) -> i64 {
    let ratio = value as f64 / axis_max as f64;
    area.bottom - (ratio * area.height() as f64).round() as i64
}

#[cfg(test)]
mod tests {
    use super::{axis_max, level_color, tick_step, PngChartRenderer};
    use crate::model::risk::RiskLevel;
    use crate::report::summary::LevelDistribution;

    fn distribution(high: usize, medium: usize, low: usize) -> LevelDistribution {
        LevelDistribution {
            bars: [
                (RiskLevel::High, high),
                (RiskLevel::Medium, medium),
                (RiskLevel::Low, low),
            ],
        }
    }

    #[test]
    fn axis_leaves_headroom_above_tallest_bar() {
        assert_eq!(axis_max(0), 1);
        assert_eq!(axis_max(1), 2);
        assert_eq!(axis_max(20), 23);
        assert_eq!(tick_step(23), 5);
        assert_eq!(tick_step(1), 1);
    }

    #[test]
    fn render_draws_bars_only_for_non_zero_levels() {
        let image = PngChartRenderer::default().render(&distribution(4, 0, 2));
        assert_eq!(image.dimensions(), (900, 600));
        let has = |level| image.pixels().any(|p| *p == level_color(level));
        assert!(has(RiskLevel::High));
        assert!(!has(RiskLevel::Medium));
        assert!(has(RiskLevel::Low));
    }

    #[test]
    fn tiny_canvas_renders_blank_without_panicking() {
        let image = PngChartRenderer::new(50, 50).render(&distribution(1, 1, 1));
        assert_eq!(image.dimensions(), (50, 50));
    }
}
