use chrono::Local;
use colored::Colorize;

use crate::features::music::{MusicPlayer, Track, PRESETS};
use crate::features::progress::SessionRecord;
use crate::features::quotes::Quote;
use crate::features::stats::Dashboard;
use crate::features::timer::format_minutes;

fn days(n: u32) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{n} days")
    }
}

/// Format the stats dashboard as pretty output
pub fn format_dashboard_pretty(dashboard: &Dashboard, sparkline: &str) -> String {
    let mut output = format!("{}\n", "Your Progress".bold());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    output.push_str(&format!(
        "  {}: {}\n",
        "Sessions".dimmed(),
        dashboard.total_sessions
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Focus time".dimmed(),
        format_minutes(dashboard.total_minutes)
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Current streak".dimmed(),
        days(dashboard.current_streak).yellow()
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Longest streak".dimmed(),
        days(dashboard.longest_streak)
    ));

    output.push('\n');
    output.push_str(&format!("{}\n", "Last 14 days".bold()));
    output.push_str(&format!("  {}\n", sparkline.cyan()));
    output.push_str(&format!(
        "  {}: {}\n",
        "Avg focus/day".dimmed(),
        format_minutes(dashboard.average_minutes_per_day)
    ));

    output.push('\n');
    output.push_str(&format!("{}\n", "This Week".bold()));
    output.push_str(&format!(
        "  {}: {}\n",
        "Sessions".dimmed(),
        dashboard.week_sessions
    ));
    output.push_str(&format!(
        "  {}: {}h\n",
        "Total time".dimmed(),
        dashboard.week_hours()
    ));

    output
}

/// Format the session log as pretty output
pub fn format_history_pretty(records: &[SessionRecord]) -> String {
    if records.is_empty() {
        return "Sessions (0)\n  No sessions yet".to_string();
    }

    let mut output = format!("Sessions ({})\n", records.len());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for record in records {
        let when = record.timestamp.with_timezone(&Local);
        output.push_str(&format!(
            "{}  {}  {}\n",
            when.format("%Y-%m-%d %H:%M").to_string().dimmed(),
            record.kind.display_name(),
            format_minutes(u64::from(record.duration_minutes)).green()
        ));
    }

    output
}

/// Format a quote as pretty output
pub fn format_quote_pretty(quote: &Quote) -> String {
    format!(
        "\"{}\"\n  - {}",
        quote.text.italic(),
        quote.author.dimmed()
    )
}

/// Format the music catalog with the current selection marked
pub fn format_music_pretty(player: &MusicPlayer) -> String {
    let mut output = format!("{}\n", "Focus Music".bold());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for (index, preset) in PRESETS.iter().enumerate() {
        let selected = matches!(player.track(), Track::Preset { index: i } if *i == index);
        let marker = if selected { "▶".green() } else { " ".normal() };
        output.push_str(&format!(
            "{} {} {:<12} {}\n",
            marker,
            preset.emoji,
            preset.id,
            preset.name
        ));
    }

    if let Track::Custom { url } = player.track() {
        output.push_str(&format!("{} 🎵 {:<12} {}\n", "▶".green(), "custom", url));
    }

    output.push_str(&format!(
        "\n  {}: {}%\n",
        "Volume".dimmed(),
        player.volume()
    ));

    output
}
