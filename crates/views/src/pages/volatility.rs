use crate::error::ViewError;
use crate::theme;
use crate::view::ViewId;
use crate::widgets::{Annotation, Axis, Chart, Guide, Notice, Page, ScatterPoint, Widget};
use configuration::ViewSettings;
use core_types::DataBundle;

pub(super) fn render(bundle: &DataBundle, settings: &ViewSettings) -> Result<Page, ViewError> {
    let metrics = &bundle.metrics;
    let mut page = Page::new(ViewId::VolatilityAnalysis, "Volatility Analysis");

    page.push(Notice::info(
        "Volatility measures how much a stock's price fluctuates. Higher volatility means \
         higher risk but also potentially higher returns.",
    ));

    let volatilities: Vec<f64> = metrics.iter().map(|m| m.volatility).collect();
    let max_volatility = volatilities.iter().copied().fold(0.0_f64, f64::max);
    let max_return = metrics.iter().map(|m| m.yearly_return).fold(0.0_f64, f64::max);

    let mut guides = vec![Guide { axis: Axis::Y, value: 0.0 }];
    if let Some(median) = analytics::median(&volatilities) {
        guides.push(Guide { axis: Axis::X, value: median });
    }

    page.push(Widget::Chart(Chart::Scatter {
        title: "Risk vs Return Analysis".to_string(),
        x_title: "Volatility (%)".to_string(),
        y_title: "Annual Return (%)".to_string(),
        points: metrics
            .iter()
            .map(|m| ScatterPoint {
                label: m.symbol.clone(),
                group: m.sector.clone(),
                x: m.volatility,
                y: m.yearly_return,
                size: m.avg_price,
            })
            .collect(),
        guides,
        annotations: vec![Annotation {
            x: max_volatility * 0.9,
            y: max_return * 0.9,
            text: "High Risk / High Return".to_string(),
        }],
    }));

    let volatile = analytics::most_volatile(metrics, settings.top_k);
    page.push(Widget::Chart(Chart::Bar {
        title: format!("Top {} Most Volatile Stocks", settings.top_k),
        labels: volatile.iter().map(|m| m.symbol.clone()).collect(),
        values: volatile.iter().map(|m| m.volatility).collect(),
        colors: volatile
            .iter()
            .map(|m| theme::risk_color(analytics::RiskClass::from_volatility(m.volatility)).to_string())
            .collect(),
        text: volatile.iter().map(|m| format!("{:.1}%", m.volatility)).collect(),
    }));

    page.push(Widget::Chart(Chart::Histogram {
        title: "Volatility Distribution".to_string(),
        x_title: "Volatility (%)".to_string(),
        color: theme::CORAL.to_string(),
        bins: analytics::histogram(&volatilities, settings.histogram_bins)?,
    }));

    Ok(page)
}
