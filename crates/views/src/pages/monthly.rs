use crate::controls::Controls;
use crate::error::ViewError;
use crate::format;
use crate::theme;
use crate::view::ViewId;
use crate::widgets::{Card, Chart, Control, Notice, Page, Table, Widget};
use configuration::ViewSettings;
use core_types::{DataBundle, MonthlyRow};

pub(super) fn render(
    bundle: &DataBundle,
    controls: &Controls,
    settings: &ViewSettings,
) -> Result<Page, ViewError> {
    let months = analytics::available_months(&bundle.monthly_performance);
    let mut page = Page::new(ViewId::MonthlyTrends, "Monthly Trends");

    let Some(newest) = months.first() else {
        page.push(Notice::info("No monthly performance data available"));
        return Ok(page);
    };

    let month = match controls.month.as_deref() {
        Some(m) if months.iter().any(|known| known == m) => m.to_string(),
        Some(m) => {
            tracing::debug!(requested = m, fallback = %newest, "Unknown month; using the newest.");
            newest.clone()
        }
        None => newest.clone(),
    };

    page.push(Widget::Control(Control::Select {
        name: "month".to_string(),
        label: "Select Month".to_string(),
        options: months.clone(),
        selected: month.clone(),
    }));

    let movers = analytics::month_movers(&bundle.monthly_performance, &month, settings.monthly_movers);

    let best = movers
        .best()
        .map(|r| format!("{} ({})", r.symbol, format::signed_pct(r.monthly_return)))
        .unwrap_or_else(|| "-".to_string());
    page.push(Widget::Cards(vec![
        Card::new(
            "Average Return",
            movers.average_return.map(format::signed_pct).unwrap_or_else(|| "-".to_string()),
            month.clone(),
            theme::trend_color(movers.average_return.unwrap_or_default()),
        ),
        Card::new("Advancing", movers.advancing.to_string(), "Stocks up this month", theme::SUCCESS),
        Card::new("Declining", movers.declining.to_string(), "Stocks down this month", theme::DANGER),
        Card::new("Best Performer", best, "Top monthly return", theme::ACCENT),
    ]));

    page.push(Widget::Chart(movers_chart(
        format!("Top {} Gainers - {}", settings.monthly_movers, month),
        &movers.gainers,
        theme::SUCCESS,
    )));
    page.push(Widget::Chart(movers_chart(
        format!("Top {} Losers - {}", settings.monthly_movers, month),
        &movers.losers,
        theme::DANGER,
    )));

    let mut table = Table::new(
        format!("All Stocks - {}", month),
        &["Symbol", "Sector", "Monthly Return (%)"],
    );
    for row in &movers.rows {
        let sector = bundle.metric(&row.symbol).map(|m| m.sector.as_str()).unwrap_or("-");
        table.row(vec![row.symbol.clone(), sector.to_string(), format!("{:.2}", row.monthly_return)]);
    }
    page.push(Widget::Table(table));

    Ok(page)
}

fn movers_chart(title: String, rows: &[MonthlyRow], color: &str) -> Chart {
    Chart::Bar {
        title,
        labels: rows.iter().map(|r| r.symbol.clone()).collect(),
        values: rows.iter().map(|r| r.monthly_return).collect(),
        colors: vec![color.to_string(); rows.len()],
        text: rows.iter().map(|r| format!("{:.1}%", r.monthly_return)).collect(),
    }
}
