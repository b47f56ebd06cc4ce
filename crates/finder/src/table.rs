//! GitHub-flavoured markdown table of ranked videos.

use domain::VideoRecord;

pub const HEADERS: [&str; 6] = ["Title", "Channel", "Views", "Likes", "Duration", "Link"];

/// Extra width reserved around each header
const HEADER_PADDING: usize = 2;

/// Numeric columns are right-aligned
const RIGHT_ALIGNED: [bool; 6] = [false, false, true, true, false, false];

/// `12m3s`, or `?` when the duration is unknown or zero
pub fn format_duration(duration_s: Option<u64>) -> String {
    match duration_s {
        Some(seconds) if seconds > 0 => format!("{}m{}s", seconds / 60, seconds % 60),
        _ => "?".to_string(),
    }
}

/// Render the first `top_n` videos. The header row is always present.
pub fn render_table(videos: &[VideoRecord], top_n: usize) -> String {
    let rows: Vec<[String; 6]> = videos
        .iter()
        .take(top_n)
        .map(|video| {
            [
                video.title.clone(),
                video.channel.clone(),
                video.views.to_string(),
                video.likes.to_string(),
                format_duration(video.duration_s),
                video.url.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count() + HEADER_PADDING);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(HEADERS, &widths));
    lines.push(format!(
        "|{}|",
        widths
            .iter()
            .map(|width| "-".repeat(width + 2))
            .collect::<Vec<_>>()
            .join("|")
    ));
    for row in &rows {
        lines.push(format_row(row.each_ref().map(String::as_str), &widths));
    }
    lines.join("\n")
}

fn format_row(cells: [&str; 6], widths: &[usize; 6]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .zip(RIGHT_ALIGNED)
        .map(|((cell, &width), right)| {
            if right {
                format!(" {:>width$} ", cell)
            } else {
                format!(" {:<width$} ", cell)
            }
        })
        .collect();
    format!("|{}|", padded.join("|"))
}
