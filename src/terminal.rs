//! Plain-terminal rendition of a `Page`, built on comfy-table.

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use views::widgets::{Card, Chart, Control, Notice, NoticeLevel};
use views::{Page, Widget};

pub fn render_page(page: &Page) -> String {
    let mut out = format!("\n=== {} ===\n", page.title);
    for widget in &page.widgets {
        out.push('\n');
        out.push_str(&render_widget(widget));
        out.push('\n');
    }
    out
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn render_widget(widget: &Widget) -> String {
    match widget {
        Widget::Header(text) => format!("--- {} ---", text),
        Widget::Notice(notice) => render_notice(notice),
        Widget::Cards(cards) => render_cards(cards),
        Widget::Chart(chart) => render_chart(chart),
        Widget::Table(table) => {
            let mut out = new_table(table.columns.iter().map(String::as_str).collect());
            for row in &table.rows {
                out.add_row(row.clone());
            }
            format!("{}\n{}", table.title, out)
        }
        Widget::Control(control) => render_control(control),
    }
}

fn render_notice(notice: &Notice) -> String {
    let tag = match notice.level {
        NoticeLevel::Info => "info",
        NoticeLevel::Warning => "warning",
        NoticeLevel::Error => "error",
    };
    format!("[{}] {}", tag, notice.message)
}

fn render_cards(cards: &[Card]) -> String {
    let mut table = new_table(vec!["", "Value", ""]);
    for card in cards {
        let value = match card.progress {
            Some(p) => format!("{} ({:.0}%)", card.value, p),
            None => card.value.clone(),
        };
        table.add_row(vec![Cell::new(&card.title), Cell::new(value).fg(Color::Yellow), Cell::new(&card.caption)]);
    }
    table.to_string()
}

fn render_control(control: &Control) -> String {
    match control {
        Control::Select { label, selected, options, .. } => {
            format!("{}: {} (options: {})", label, selected, options.join(", "))
        }
        Control::MultiSelect { label, selected, max, .. } => {
            format!("{}: {} (max {})", label, selected.join(", "), max)
        }
        Control::Slider { label, min, max, value, .. } => format!("{}: {} [{}..={}]", label, value, min, max),
    }
}

fn render_chart(chart: &Chart) -> String {
    let body = match chart {
        Chart::Bar { labels, values, text, .. } => {
            let mut table = new_table(vec!["Label", "Value", ""]);
            for (i, label) in labels.iter().enumerate() {
                let value = values.get(i).copied().unwrap_or_default();
                let color = if value >= 0.0 { Color::Green } else { Color::Red };
                table.add_row(vec![
                    Cell::new(label),
                    Cell::new(format!("{:.2}", value)).fg(color),
                    Cell::new(text.get(i).map(String::as_str).unwrap_or_default()),
                ]);
            }
            table.to_string()
        }
        Chart::Line { series, .. } => {
            let mut table = new_table(vec!["Series", "Points", "First", "Last"]);
            for s in series {
                let values: Vec<f64> = s.points.iter().filter_map(|p| p.value).collect();
                let show = |v: Option<&f64>| v.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".to_string());
                table.add_row(vec![
                    s.name.clone(),
                    s.points.len().to_string(),
                    show(values.first()),
                    show(values.last()),
                ]);
            }
            table.to_string()
        }
        Chart::Scatter { points, x_title, y_title, .. } => {
            let mut table = new_table(vec!["Symbol", "Group", x_title.as_str(), y_title.as_str()]);
            for p in points {
                table.add_row(vec![p.label.clone(), p.group.clone(), format!("{:.2}", p.x), format!("{:.2}", p.y)]);
            }
            table.to_string()
        }
        Chart::Histogram { bins, .. } => {
            let mut table = new_table(vec!["From", "To", "Count"]);
            for bin in bins {
                table.add_row(vec![
                    format!("{:.2}", bin.lower),
                    format!("{:.2}", bin.upper),
                    "#".repeat(bin.count),
                ]);
            }
            table.to_string()
        }
        Chart::Donut { center, slices, .. } => {
            let parts: Vec<String> = slices.iter().map(|s| format!("{} {}", s.label, s.value)).collect();
            format!("{} | {}", center, parts.join(" | "))
        }
        Chart::Heatmap { labels, values, .. } => {
            let mut header = vec![""];
            header.extend(labels.iter().map(String::as_str));
            let mut table = new_table(header);
            for (label, row) in labels.iter().zip(values) {
                let mut cells = vec![label.clone()];
                cells.extend(row.iter().map(|v| format!("{:.2}", v)));
                table.add_row(cells);
            }
            table.to_string()
        }
        Chart::Sunburst { nodes, .. } => {
            let mut table = new_table(vec!["Sector", "Stocks", "Members"]);
            for root in nodes.iter().filter(|n| n.parent.is_none()) {
                let members: Vec<&str> = nodes
                    .iter()
                    .filter(|n| n.parent.as_deref() == Some(root.label.as_str()))
                    .map(|n| n.label.as_str())
                    .collect();
                table.add_row(vec![root.label.clone(), format!("{}", root.value), members.join(", ")]);
            }
            table.to_string()
        }
    };
    format!("{}\n{}", chart.title(), body)
}
