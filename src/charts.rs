//! SVG charts.
//!
//! Renders the word cloud and the activity charts of an [`AnalysisReport`]
//! into an output directory using the `plotters` SVG backend:
//!
//! | File | Content |
//! |------|---------|
//! | `wordcloud.svg` | most frequent words, sized by count |
//! | `timeline.svg` | messages per calendar date |
//! | `hourly_activity.svg` | messages per hour of day |
//! | `hourly_activity_by_author.svg` | messages per hour, one line per author |

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Duration;
use plotters::prelude::*;
use tracing::{debug, info};

use crate::analytics::{ActivityProfile, AnalysisReport, WordCount};
use crate::error::ChatlensError;

pub const WORDCLOUD_FILE: &str = "wordcloud.svg";
pub const TIMELINE_FILE: &str = "timeline.svg";
pub const HOURLY_FILE: &str = "hourly_activity.svg";
pub const HOURLY_BY_AUTHOR_FILE: &str = "hourly_activity_by_author.svg";

const CHART_SIZE: (u32, u32) = (1000, 600);
const FONT: &str = "sans-serif";

fn render_err<E: Display>(chart: &'static str) -> impl Fn(E) -> ChatlensError {
    move |e| ChatlensError::render(chart, e)
}

/// Renders every chart into `output_dir`, creating it if needed.
///
/// Returns the written files. An empty report writes nothing.
pub fn render_all(
    report: &AnalysisReport,
    output_dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>, ChatlensError> {
    let output_dir = output_dir.as_ref();
    if report.is_empty() {
        info!("no records, skipping charts");
        return Ok(Vec::new());
    }

    fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(4);

    if !report.words.is_empty() {
        let path = output_dir.join(WORDCLOUD_FILE);
        render_wordcloud(&report.words, &path)?;
        written.push(path);
    }

    let path = output_dir.join(TIMELINE_FILE);
    render_timeline(&report.activity, &path)?;
    written.push(path);

    let path = output_dir.join(HOURLY_FILE);
    render_hourly(&report.activity, &path)?;
    written.push(path);

    let path = output_dir.join(HOURLY_BY_AUTHOR_FILE);
    render_hourly_by_author(&report.activity, &path)?;
    written.push(path);

    info!(charts = written.len(), dir = %output_dir.display(), "charts written");
    Ok(written)
}

/// Draws words left to right in rows, font size scaled by count.
pub fn render_wordcloud(words: &[WordCount], path: &Path) -> Result<(), ChatlensError> {
    const MIN_SIZE: f64 = 14.0;
    const MAX_SIZE: f64 = 72.0;
    const PAD: i32 = 12;

    let err = render_err("wordcloud");
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(&err)?;

    let (width, height) = (CHART_SIZE.0 as i32, CHART_SIZE.1 as i32);
    let max_count = words.iter().map(|w| w.count).max().unwrap_or(1).max(1) as f64;

    let (mut x, mut y, mut row_height) = (PAD, PAD, 0);
    for (i, word) in words.iter().enumerate() {
        let size = MIN_SIZE + (MAX_SIZE - MIN_SIZE) * (word.count as f64 / max_count);
        // Rough advance width of a sans-serif glyph
        let word_width = (word.word.chars().count() as f64 * size * 0.6) as i32;
        let word_height = (size * 1.2) as i32;

        if x + word_width > width - PAD && x > PAD {
            x = PAD;
            y += row_height;
            row_height = 0;
        }
        if y + word_height > height - PAD {
            debug!(drawn = i, total = words.len(), "word cloud full");
            break;
        }

        let color = Palette99::pick(i).to_rgba();
        root.draw(&Text::new(
            word.word.clone(),
            (x, y),
            (FONT, size).into_font().color(&color),
        ))
        .map_err(&err)?;

        x += word_width + PAD;
        row_height = row_height.max(word_height);
    }

    root.present().map_err(&err)?;
    Ok(())
}

/// Line chart of messages per calendar date.
pub fn render_timeline(activity: &ActivityProfile, path: &Path) -> Result<(), ChatlensError> {
    let err = render_err("timeline");
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(&err)?;

    let (Some(first), Some(last)) = (
        activity.by_date.keys().next().copied(),
        activity.by_date.keys().next_back().copied(),
    ) else {
        root.present().map_err(&err)?;
        return Ok(());
    };

    let days = (last - first).num_days().max(1);
    let max_count = activity.by_date.values().copied().max().unwrap_or(0);

    let mut chart = ChartBuilder::on(&root)
        .caption("Messages per day", (FONT, 28))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(50)
        .build_cartesian_2d(0i64..days, 0usize..max_count + 1)
        .map_err(&err)?;

    let label = |offset: &i64| (first + Duration::days(*offset)).format("%Y-%m-%d").to_string();
    chart
        .configure_mesh()
        .x_labels(8)
        .x_label_formatter(&label)
        .y_desc("Messages")
        .draw()
        .map_err(&err)?;

    chart
        .draw_series(LineSeries::new(
            activity
                .by_date
                .iter()
                .map(|(date, count)| ((*date - first).num_days(), *count)),
            BLUE.stroke_width(2),
        ))
        .map_err(&err)?;

    root.present().map_err(&err)?;
    Ok(())
}

/// Histogram of messages per hour of day.
pub fn render_hourly(activity: &ActivityProfile, path: &Path) -> Result<(), ChatlensError> {
    let err = render_err("hourly_activity");
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(&err)?;

    let max_count = activity.by_hour.iter().copied().max().unwrap_or(0);

    let mut chart = ChartBuilder::on(&root)
        .caption("Messages per hour", (FONT, 28))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d((0u32..24u32).into_segmented(), 0usize..max_count + 1)
        .map_err(&err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Hour")
        .y_desc("Messages")
        .draw()
        .map_err(&err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.mix(0.7).filled())
                .margin(2)
                .data((0u32..).zip(activity.by_hour.iter().copied())),
        )
        .map_err(&err)?;

    root.present().map_err(&err)?;
    Ok(())
}

/// One line per author over the hours of the day.
pub fn render_hourly_by_author(
    activity: &ActivityProfile,
    path: &Path,
) -> Result<(), ChatlensError> {
    let err = render_err("hourly_activity_by_author");
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(&err)?;

    let max_count = activity
        .by_author_hour
        .iter()
        .flat_map(|a| a.hours.iter().copied())
        .max()
        .unwrap_or(0);

    let mut chart = ChartBuilder::on(&root)
        .caption("Messages per hour by author", (FONT, 28))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0u32..23u32, 0usize..max_count + 1)
        .map_err(&err)?;

    chart
        .configure_mesh()
        .x_labels(24)
        .x_desc("Hour")
        .y_desc("Messages")
        .draw()
        .map_err(&err)?;

    for (i, author) in activity.by_author_hour.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        chart
            .draw_series(LineSeries::new(
                (0u32..).zip(author.hours.iter().copied()),
                color.stroke_width(2),
            ))
            .map_err(&err)?
            .label(author.author.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(&err)?;

    root.present().map_err(&err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::analyze;
    use crate::config::AnalysisConfig;
    use crate::record::{ChatRecord, ChatTime, MessageCorpus};
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn report() -> AnalysisReport {
        let day = |d| NaiveDate::from_ymd_opt(2023, 3, d).unwrap();
        let corpus: MessageCorpus = vec![
            ChatRecord::new(1, day(14), ChatTime::new(8, 0).unwrap(), "Bob", "pizza tonight?"),
            ChatRecord::new(2, day(15), ChatTime::new(9, 30).unwrap(), "Alice", "pizza sounds great"),
            ChatRecord::new(3, day(17), ChatTime::new(21, 5).unwrap(), "Bob", "great pizza"),
        ]
        .into_iter()
        .collect();
        analyze(&corpus, &AnalysisConfig::default())
    }

    #[test]
    fn test_render_all_writes_svgs() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("charts");
        let written = render_all(&report(), &out).unwrap();

        assert_eq!(written.len(), 4);
        for file in [WORDCLOUD_FILE, TIMELINE_FILE, HOURLY_FILE, HOURLY_BY_AUTHOR_FILE] {
            let content = fs::read_to_string(out.join(file)).unwrap();
            assert!(content.contains("<svg"), "{file} is not an SVG");
        }
    }

    #[test]
    fn test_wordcloud_contains_words() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(WORDCLOUD_FILE);
        render_wordcloud(&report().words, &path).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("pizza"));
    }

    #[test]
    fn test_empty_report_writes_nothing() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("charts");
        let report = analyze(&MessageCorpus::default(), &AnalysisConfig::default());

        assert!(render_all(&report, &out).unwrap().is_empty());
        assert!(!out.exists());
    }
}
