//! Terminal charts for the stats view.

/// Characters for sparkline rendering.
const BAR_CHARS: [char; 8] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇'];
const FULL_BLOCK: char = '█';

/// Render a horizontal bar chart.
///
/// # Arguments
///
/// * `data` - (label, value) pairs
/// * `label_width` - Width labels are padded or truncated to
/// * `bar_width` - Width of the bar portion
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_bar_chart(data: &[(String, u64)], label_width: usize, bar_width: usize) -> String {
    if data.is_empty() {
        return String::new();
    }

    let max_value = data.iter().map(|(_, v)| *v).max().unwrap_or(1).max(1);

    data.iter()
        .map(|(label, value)| {
            let label = fit_label(label, label_width);
            let bar_length = ((*value as f64 / max_value as f64) * bar_width as f64) as usize;
            let bar = FULL_BLOCK.to_string().repeat(bar_length);
            let padding = " ".repeat(bar_width.saturating_sub(bar_length));
            format!("{label} |{bar}{padding} {value}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn fit_label(label: &str, width: usize) -> String {
    let count = label.chars().count();
    if count <= width {
        format!("{label:width$}")
    } else if width > 3 {
        let head: String = label.chars().take(width - 3).collect();
        format!("{head}...")
    } else {
        label.chars().take(width).collect()
    }
}

/// Render a sparkline (compact inline chart).
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_sparkline(values: &[u64]) -> String {
    let max_value = values.iter().copied().max().unwrap_or(1).max(1);

    values
        .iter()
        .map(|&v| {
            if v == 0 {
                BAR_CHARS[0]
            } else {
                // Non-zero days always get at least the lowest bar
                let level = (v as f64 / max_value as f64 * 7.0).round() as usize;
                BAR_CHARS[level.clamp(1, 7)]
            }
        })
        .collect()
}

/// Render a summary box with key metrics.
pub fn render_summary_box(title: &str, items: &[(&str, String)]) -> String {
    let max_label_len = items.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let max_value_len = items.iter().map(|(_, v)| v.chars().count()).max().unwrap_or(0);
    let content_width = max_label_len + max_value_len + 3; // " : "
    let title_len = title.chars().count();
    let box_width = content_width.max(title_len) + 4;

    let mut lines = Vec::new();
    lines.push(format!("┌{}┐", "─".repeat(box_width)));

    let title_padding = (box_width - title_len) / 2;
    lines.push(format!(
        "│{}{}{}│",
        " ".repeat(title_padding),
        title,
        " ".repeat(box_width - title_padding - title_len)
    ));
    lines.push(format!("├{}┤", "─".repeat(box_width)));

    for (label, value) in items {
        let item = format!("{label:>max_label_len$} : {value}");
        let padding = box_width.saturating_sub(item.chars().count() + 2);
        lines.push(format!("│ {}{} │", item, " ".repeat(padding)));
    }

    lines.push(format!("└{}┘", "─".repeat(box_width)));
    lines.join("\n")
}
