use crate::error::ViewError;
use crate::format;
use crate::theme;
use crate::view::ViewId;
use crate::widgets::{Card, Chart, Page, Slice, Widget};
use core_types::DataBundle;

pub(super) fn render(bundle: &DataBundle) -> Result<Page, ViewError> {
    let summary = &bundle.market_summary;
    let averages = analytics::market_averages(&bundle.master_data, &bundle.metrics);
    let mut page = Page::new(ViewId::MarketOverview, "Market Overview");

    page.push(Widget::Cards(vec![
        Card::new("Total Stocks", summary.total_stocks.to_string(), "Nifty 50 Constituents", theme::ACCENT),
        Card::new(
            "Green Stocks",
            summary.green_stocks.to_string(),
            format!("{:.1}% of Market", summary.green_percentage),
            theme::SUCCESS,
        ),
        Card::new(
            "Red Stocks",
            summary.red_stocks.to_string(),
            format!("{:.1}% of Market", summary.red_percentage),
            theme::DANGER,
        ),
        Card::new("Avg Return", format::pct(summary.avg_return), "Yearly Performance", theme::CORAL),
    ]));

    page.push(Widget::Cards(vec![
        Card::new(
            "Average Price",
            format::rupees(averages.avg_close),
            "Mean closing price across all stocks",
            theme::SUCCESS,
        ),
        Card::new(
            "Avg Volume",
            format::grouped(averages.avg_volume, 0),
            "Daily trading volume average",
            theme::ACCENT,
        ),
        Card::new(
            "Total Return",
            format!("{}%", format::grouped(averages.total_return, 2)),
            "Aggregated market performance",
            theme::CORAL,
        ),
    ]));

    page.push(Widget::Header("Market Sentiment Distribution".to_string()));
    page.push(Widget::Chart(Chart::Donut {
        title: "Market Sentiment Distribution".to_string(),
        center: format!("{} Advancing", summary.green_stocks),
        slices: vec![
            Slice {
                label: "Green Stocks".to_string(),
                value: summary.green_stocks as f64,
                color: theme::SUCCESS.to_string(),
            },
            Slice {
                label: "Red Stocks".to_string(),
                value: summary.red_stocks as f64,
                color: theme::DANGER.to_string(),
            },
        ],
    }));

    Ok(page)
}
