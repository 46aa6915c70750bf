//! Server-side HTML rendition of a `Page`.
//!
//! Cards, tables, notices and controls are drawn directly. Charts are emitted as a
//! JSON description inside the figure for a client-side plotting library, with a plain
//! fallback so the page stays readable without scripts.

use std::fmt::Write;
use views::theme;
use views::widgets::{Card, Chart, Control, Notice, NoticeLevel, Page, Table, Widget};
use views::ViewId;

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A complete HTML document: navigation menu plus the rendered page.
pub fn render_document(page: &Page) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>NIFTY 50 Dashboard · {title}</title><style>{css}</style></head><body>",
        title = escape_html(&page.title),
        css = stylesheet(),
    );
    out.push_str(&render_menu(page.view));
    let _ = write!(out, "<main><h1>{}</h1>", escape_html(&page.title));
    let mut form_open = false;
    for widget in &page.widgets {
        match widget {
            // Adjacent controls share one form so a submit keeps every value.
            Widget::Control(control) => {
                if !form_open {
                    let _ = write!(out, "<form method=\"get\" action=\"/views/{}\">", page.view.slug());
                    form_open = true;
                }
                out.push_str(&render_control(control));
            }
            other => {
                if form_open {
                    out.push_str("<button type=\"submit\">Apply</button></form>");
                    form_open = false;
                }
                out.push_str(&render_widget(other));
            }
        }
    }
    if form_open {
        out.push_str("<button type=\"submit\">Apply</button></form>");
    }
    out.push_str("</main></body></html>");
    out
}

fn stylesheet() -> String {
    format!(
        "body{{margin:0;font-family:sans-serif;background:#0f172a;color:#e2e8f0;display:flex}}\
         nav{{width:220px;min-height:100vh;padding:1rem;background:linear-gradient(180deg,{orange},{pink})}}\
         nav a{{display:block;color:#fff;text-decoration:none;padding:.4rem .6rem;border-radius:6px}}\
         nav a.active{{background:rgba(0,0,0,.25);font-weight:bold}}\
         main{{flex:1;padding:1.5rem}}\
         .cards{{display:flex;flex-wrap:wrap;gap:1rem;margin:1rem 0}}\
         .card{{background:#1e293b;border-left:4px solid;padding:.8rem 1rem;min-width:160px;border-radius:8px}}\
         .card .caption{{color:{muted};font-size:.85rem}}\
         .progress{{height:4px;background:#334155}}.progress div{{height:4px}}\
         .notice{{padding:.6rem 1rem;border-radius:6px;margin:.6rem 0}}\
         .notice.info{{background:#1e3a5f}}.notice.warning{{background:#5f4b1e}}.notice.error{{background:#5f1e2b}}\
         table{{border-collapse:collapse;margin:1rem 0}}td,th{{padding:.3rem .7rem;border-bottom:1px solid #334155}}\
         figure{{margin:1rem 0}}figcaption{{font-weight:bold;color:{accent}}}\
         .bar{{height:14px;display:inline-block;vertical-align:middle}}",
        orange = theme::DARK_ORANGE,
        pink = theme::PINK,
        muted = theme::MUTED_TEXT,
        accent = theme::PEACH,
    )
}

fn render_menu(current: ViewId) -> String {
    let mut out = String::from("<nav><h2>NIFTY 50</h2>");
    for view in ViewId::ALL {
        let class = if view == current { " class=\"active\"" } else { "" };
        let _ = write!(out, "<a href=\"/views/{}\"{}>{}</a>", view.slug(), class, escape_html(view.label()));
    }
    out.push_str("</nav>");
    out
}

fn render_widget(widget: &Widget) -> String {
    match widget {
        Widget::Header(text) => format!("<h2>{}</h2>", escape_html(text)),
        Widget::Notice(notice) => render_notice(notice),
        Widget::Cards(cards) => render_cards(cards),
        Widget::Chart(chart) => render_chart(chart),
        Widget::Table(table) => render_table(table),
        Widget::Control(control) => render_control(control),
    }
}

fn render_notice(notice: &Notice) -> String {
    let class = match notice.level {
        NoticeLevel::Info => "info",
        NoticeLevel::Warning => "warning",
        NoticeLevel::Error => "error",
    };
    format!("<div class=\"notice {}\">{}</div>", class, escape_html(&notice.message))
}

fn render_cards(cards: &[Card]) -> String {
    let mut out = String::from("<div class=\"cards\">");
    for card in cards {
        let _ = write!(
            out,
            "<div class=\"card\" style=\"border-color:{accent}\"><div>{title}</div>\
             <div style=\"font-size:1.4rem;color:{accent}\">{value}</div>\
             <div class=\"caption\">{caption}</div>",
            accent = escape_html(&card.accent),
            title = escape_html(&card.title),
            value = escape_html(&card.value),
            caption = escape_html(&card.caption),
        );
        if let Some(progress) = card.progress {
            let _ = write!(
                out,
                "<div class=\"progress\"><div style=\"width:{:.0}%;background:{}\"></div></div>",
                progress,
                escape_html(&card.accent)
            );
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
    out
}

fn render_table(table: &Table) -> String {
    let mut out = format!("<h3>{}</h3><table><thead><tr>", escape_html(&table.title));
    for column in &table.columns {
        let _ = write!(out, "<th>{}</th>", escape_html(column));
    }
    out.push_str("</tr></thead><tbody>");
    for row in &table.rows {
        out.push_str("<tr>");
        for cell in row {
            let _ = write!(out, "<td>{}</td>", escape_html(cell));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}

fn render_chart(chart: &Chart) -> String {
    let chart_json = serde_json::to_string(chart)
        .unwrap_or_default()
        .replace("</", "<\\/");
    let mut out = format!(
        "<figure><figcaption>{}</figcaption><script type=\"application/json\" class=\"chart-data\">{}</script>",
        escape_html(chart.title()),
        chart_json
    );
    out.push_str(&chart_fallback(chart));
    out.push_str("</figure>");
    out
}

fn chart_fallback(chart: &Chart) -> String {
    match chart {
        Chart::Bar { labels, values, colors, text, .. } => {
            let scale = values.iter().fold(0.0_f64, |m, v| m.max(v.abs())).max(f64::EPSILON);
            let mut out = String::from("<table>");
            for (i, label) in labels.iter().enumerate() {
                let value = values.get(i).copied().unwrap_or_default();
                let color = colors.get(i).map(String::as_str).unwrap_or(theme::CORAL);
                let _ = write!(
                    out,
                    "<tr><td>{}</td><td><span class=\"bar\" style=\"width:{:.0}px;background:{}\"></span> {}</td></tr>",
                    escape_html(label),
                    value.abs() / scale * 300.0,
                    escape_html(color),
                    escape_html(text.get(i).map(String::as_str).unwrap_or_default()),
                );
            }
            out.push_str("</table>");
            out
        }
        Chart::Donut { slices, center, .. } => {
            let parts: Vec<String> = slices
                .iter()
                .map(|s| format!("{}: {}", escape_html(&s.label), s.value))
                .collect();
            format!("<p>{} ({})</p>", escape_html(center), parts.join(", "))
        }
        Chart::Line { series, .. } => {
            let names: Vec<String> = series.iter().map(|s| escape_html(&s.name)).collect();
            format!("<p>Series: {}</p>", names.join(", "))
        }
        Chart::Scatter { points, .. } => format!("<p>{} points</p>", points.len()),
        Chart::Histogram { bins, .. } => {
            let counts: Vec<String> = bins.iter().map(|b| b.count.to_string()).collect();
            format!("<p>Counts per bin: {}</p>", counts.join(" "))
        }
        Chart::Heatmap { labels, .. } => format!("<p>{} x {} matrix</p>", labels.len(), labels.len()),
        Chart::Sunburst { nodes, .. } => {
            let roots = nodes.iter().filter(|n| n.parent.is_none()).count();
            format!("<p>{} groups, {} leaves</p>", roots, nodes.len() - roots)
        }
    }
}

fn render_control(control: &Control) -> String {
    let mut out = String::from("<div class=\"control\">");
    match control {
        Control::Select { name, label, options, selected } => {
            let _ = write!(out, "<label>{} <select name=\"{}\">", escape_html(label), escape_html(name));
            for option in options {
                let mark = if option == selected { " selected" } else { "" };
                let _ = write!(out, "<option{}>{}</option>", mark, escape_html(option));
            }
            out.push_str("</select></label>");
        }
        Control::MultiSelect { name, label, selected, max, .. } => {
            let _ = write!(
                out,
                "<label>{} <input name=\"{}\" value=\"{}\" title=\"Comma separated, at most {}\"></label>",
                escape_html(label),
                escape_html(name),
                escape_html(&selected.join(",")),
                max
            );
        }
        Control::Slider { name, label, min, max, value } => {
            let _ = write!(
                out,
                "<label>{} <input type=\"range\" name=\"{}\" min=\"{}\" max=\"{}\" value=\"{}\"> {}</label>",
                escape_html(label),
                escape_html(name),
                min,
                max,
                value,
                value
            );
        }
    }
    out.push_str("</div>");
    out
}
