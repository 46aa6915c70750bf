use crate::error::ViewError;
use crate::format;
use crate::theme;
use crate::view::ViewId;
use crate::widgets::{Card, Chart, Page, SunburstNode, Table, Widget};
use core_types::DataBundle;

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

pub(super) fn render(bundle: &DataBundle) -> Result<Page, ViewError> {
    let rollup = analytics::sector_rollup(&bundle.metrics);
    let mut page = Page::new(ViewId::SectorAnalysis, "Sector Analysis");

    let mut nodes = Vec::with_capacity(rollup.len() + bundle.metrics.len());
    for sector in &rollup {
        nodes.push(SunburstNode {
            label: sector.sector.clone(),
            parent: None,
            value: sector.stock_count as f64,
            color_value: sector.avg_return,
        });
    }
    for metric in &bundle.metrics {
        nodes.push(SunburstNode {
            label: metric.symbol.clone(),
            parent: Some(metric.sector.clone()),
            value: 1.0,
            color_value: metric.yearly_return,
        });
    }
    page.push(Widget::Chart(Chart::Sunburst {
        title: "Sector & Stock Hierarchy".to_string(),
        nodes,
        scale: theme::return_scale(),
    }));

    page.push(Widget::Header("Sector Highlights".to_string()));
    page.push(Widget::Cards(
        rollup
            .iter()
            .enumerate()
            .map(|(rank, sector)| {
                let medal = MEDALS.get(rank).copied().unwrap_or("•");
                Card::new(
                    format!("{} {}", medal, sector.sector),
                    format::signed_pct(sector.avg_return),
                    format!(
                        "{} stocks · Avg Vol {:.1}%",
                        sector.stock_count, sector.avg_volatility
                    ),
                    theme::trend_color(sector.avg_return),
                )
                .with_progress((sector.avg_return.abs() * 2.0).min(100.0))
            })
            .collect(),
    ));

    let mut table = Table::new(
        "Sector Leaderboard",
        &["Rank", "Sector", "Stocks", "Avg Return (%)", "Total Return (%)", "Avg Volatility (%)"],
    );
    for (rank, sector) in rollup.iter().enumerate() {
        let place = match MEDALS.get(rank) {
            Some(medal) => format!("{} {}", medal, rank + 1),
            None => (rank + 1).to_string(),
        };
        table.row(vec![
            place,
            sector.sector.clone(),
            sector.stock_count.to_string(),
            format!("{:.2}", sector.avg_return),
            format!("{:.2}", sector.total_return),
            format!("{:.2}", sector.avg_volatility),
        ]);
    }
    page.push(Widget::Table(table));

    Ok(page)
}
