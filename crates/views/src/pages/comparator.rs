use crate::controls::Controls;
use crate::error::ViewError;
use crate::format;
use crate::theme;
use crate::view::ViewId;
use crate::widgets::{Card, Chart, Control, LinePoint, LineSeries, Notice, Page, Widget};
use analytics::ComparisonMetric;
use core_types::{DataBundle, MetricRow};

pub(super) fn render(bundle: &DataBundle, controls: &Controls) -> Result<Page, ViewError> {
    let mut page = Page::new(ViewId::StockComparator, "Stock Comparator");
    let Some(first_row) = bundle.metrics.first() else {
        page.push(Notice::info("No stocks available to compare"));
        return Ok(page);
    };
    let second_row = bundle.metrics.get(1).unwrap_or(first_row);

    let first = pick(bundle, controls.stock_a.as_deref(), first_row)?;
    let second = pick(bundle, controls.stock_b.as_deref(), second_row)?;

    let options = bundle.symbols();
    page.push(Widget::Control(Control::Select {
        name: "stock_a".to_string(),
        label: "Select First Stock".to_string(),
        options: options.clone(),
        selected: first.symbol.clone(),
    }));
    page.push(Widget::Control(Control::Select {
        name: "stock_b".to_string(),
        label: "Select Second Stock".to_string(),
        options,
        selected: second.symbol.clone(),
    }));

    page.push(Widget::Header(format!("{} vs {}", first.symbol, second.symbol)));
    page.push(Widget::Cards(
        analytics::compare(first, second)
            .into_iter()
            .map(|c| {
                let show = |v: f64| display(c.metric, v);
                let first_leads = c.leader == first.symbol;
                let leading_value = if first_leads { c.first_value } else { c.second_value };
                Card::new(
                    c.metric.label(),
                    format!("{}: {}", c.leader, show(leading_value)),
                    format!(
                        "{} {} | {} {} | Diff {}",
                        first.symbol,
                        show(c.first_value),
                        second.symbol,
                        show(c.second_value),
                        show(c.difference)
                    ),
                    if first_leads { theme::CORAL } else { theme::SUCCESS },
                )
            })
            .collect(),
    ));

    page.push(Widget::Chart(Chart::Line {
        title: "Price Comparison".to_string(),
        y_title: "Close Price (₹)".to_string(),
        series: [(first, theme::CORAL), (second, theme::SUCCESS)]
            .into_iter()
            .map(|(row, color)| LineSeries {
                name: row.symbol.clone(),
                color: color.to_string(),
                fill: None,
                points: analytics::price_history(&bundle.master_data, &row.symbol)
                    .into_iter()
                    .map(|p| LinePoint { date: p.date, value: Some(p.close) })
                    .collect(),
            })
            .collect(),
    }));

    Ok(page)
}

/// Resolves a selection to its metrics row, falling back to `default` when absent.
fn pick<'a>(
    bundle: &'a DataBundle,
    requested: Option<&str>,
    default: &'a MetricRow,
) -> Result<&'a MetricRow, ViewError> {
    match requested.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(default),
        Some(symbol) => bundle
            .metric(symbol)
            .ok_or_else(|| ViewError::UnknownSymbol(symbol.to_string())),
    }
}

fn display(metric: ComparisonMetric, value: f64) -> String {
    match metric {
        ComparisonMetric::YearlyReturn | ComparisonMetric::Volatility => format::pct(value),
        ComparisonMetric::AvgPrice => format::rupees(value),
    }
}
