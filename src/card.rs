use crate::summary::BirthdaySummary;

const MIN_CARD_CHARS: usize = 40;
const ROW_PREFIX: &str = ". ";

/// Terminal columns, not bytes: names are not always ASCII.
fn width(s: &str) -> usize {
    s.chars().count()
}

enum Line {
    Header(String),
    Stat { k: String, d: String, v: String },
}

// Utilities for building card rows

pub fn build_stat_row(key: &str, value: &str, align_width: usize) -> (String, String, String) {
    let key_part = format!("{key}: ");
    let base_len = width(&key_part) + width(value);
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => format!("{} ", ".".repeat(n - 1)),
    };

    (key_part, dots, value.to_string())
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(width(&base)) + width(ROW_PREFIX);
    format!("{base}{}", "-".repeat(dash_count))
}

fn countdown(days: u32) -> String {
    match days {
        0 => "today!".to_string(),
        1 => "tomorrow".to_string(),
        n => format!("in {n} days"),
    }
}

/// Renders one birthday card as aligned plain text.
pub fn render_card(summary: &BirthdaySummary) -> String {
    let upcoming = summary.upcoming.format("%d.%m.%Y").to_string();
    let mut next_value = format!("{upcoming} ({})", countdown(summary.days_until));
    if summary.urgent && !summary.is_today() {
        next_value.push_str(" *");
    }

    let rows: Vec<(&str, String)> = vec![
        ("Born", summary.display_date.clone()),
        ("Age", summary.age.to_string()),
        ("Exact age", summary.age_detail.to_string()),
        ("Next birthday", next_value),
        ("Turns", summary.turns.to_string()),
        ("Zodiac", summary.zodiac.to_string()),
    ];

    let align_width = rows
        .iter()
        .map(|(k, v)| width(k) + 2 + width(v))
        .max()
        .unwrap_or(0)
        .max(MIN_CARD_CHARS);

    let mut lines = vec![Line::Header(build_header_line(&summary.name, align_width))];
    lines.extend(rows.iter().map(|(k, v)| {
        let (k, d, v) = build_stat_row(k, v, align_width);
        Line::Stat { k, d, v }
    }));

    let mut out = String::new();
    for line in &lines {
        match line {
            Line::Header(text) => out.push_str(text),
            Line::Stat { k, d, v } => {
                out.push_str(ROW_PREFIX);
                out.push_str(k);
                out.push_str(d);
                out.push_str(v);
            }
        }
        out.push('\n');
    }
    out
}

/// Renders cards separated by a blank line.
pub fn render_cards(summaries: &[BirthdaySummary]) -> String {
    summaries
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n")
}
