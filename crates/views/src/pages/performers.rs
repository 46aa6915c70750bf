use crate::error::ViewError;
use crate::format;
use crate::theme;
use crate::view::ViewId;
use crate::widgets::{Card, Chart, Page, Table, Widget};
use analytics::{DeclineTier, GainTier, RiskClass};
use configuration::ViewSettings;
use core_types::{DataBundle, MetricRow};

pub(super) fn render_top(bundle: &DataBundle, settings: &ViewSettings) -> Result<Page, ViewError> {
    let top = analytics::top_performers(&bundle.metrics, settings.top_k);
    let mut page = Page::new(ViewId::TopPerformers, format!("Top {} Performers", settings.top_k));

    page.push(Widget::Chart(Chart::Bar {
        title: format!("Top {} Stocks by Annual Return", settings.top_k),
        labels: top.iter().enumerate().map(|(i, m)| format!("#{} {}", i + 1, m.symbol)).collect(),
        values: top.iter().map(|m| m.yearly_return).collect(),
        colors: top
            .iter()
            .map(|m| theme::gain_color(GainTier::from_return(m.yearly_return)).to_string())
            .collect(),
        text: top.iter().map(|m| format!("{:.1}%", m.yearly_return)).collect(),
    }));

    page.push(Widget::Header("Performance Details".to_string()));
    page.push(Widget::Cards(
        top.iter()
            .take(settings.card_count)
            .map(|m| {
                Card::new(
                    m.symbol.clone(),
                    format::signed_pct(m.yearly_return),
                    m.sector.clone(),
                    theme::gain_color(GainTier::from_return(m.yearly_return)),
                )
            })
            .collect(),
    ));

    page.push(Widget::Table(rankings_table("Complete Rankings", &top)));
    Ok(page)
}

pub(super) fn render_worst(bundle: &DataBundle, settings: &ViewSettings) -> Result<Page, ViewError> {
    let worst = analytics::worst_performers(&bundle.metrics, settings.top_k);
    let mut page = Page::new(ViewId::WorstPerformers, format!("Bottom {} Performers", settings.top_k));

    page.push(Widget::Chart(Chart::Bar {
        title: format!("Bottom {} Stocks by Annual Return", settings.top_k),
        labels: worst.iter().map(|m| m.symbol.clone()).collect(),
        values: worst.iter().map(|m| m.yearly_return).collect(),
        colors: worst
            .iter()
            .map(|m| theme::decline_color(DeclineTier::from_return(m.yearly_return)).to_string())
            .collect(),
        text: worst.iter().map(|m| format!("{:.1}%", m.yearly_return)).collect(),
    }));

    page.push(Widget::Header("Risk Assessment".to_string()));
    page.push(Widget::Cards(
        worst
            .iter()
            .take(settings.card_count)
            .map(|m| {
                let risk = RiskClass::from_volatility(m.volatility);
                Card::new(
                    m.symbol.clone(),
                    format::pct(m.yearly_return),
                    format!("{} · {} RISK", m.sector, risk.label().to_uppercase()),
                    theme::risk_color(risk),
                )
            })
            .collect(),
    ));

    Ok(page)
}

fn rankings_table(title: &str, rows: &[&MetricRow]) -> Table {
    let mut table = Table::new(
        title,
        &["Rank", "Symbol", "Sector", "Annual Return (%)", "Volatility", "Avg Price"],
    );
    for (i, m) in rows.iter().enumerate() {
        table.row(vec![
            (i + 1).to_string(),
            m.symbol.clone(),
            m.sector.clone(),
            format!("{:.2}", m.yearly_return),
            format!("{:.2}", m.volatility),
            format::rupees(m.avg_price),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::fixtures;
    use std::collections::HashSet;

    fn bar_labels(page: &Page) -> Vec<String> {
        match page.charts().next() {
            Some(Chart::Bar { labels, .. }) => labels.clone(),
            other => panic!("expected a bar chart, got {:?}", other),
        }
    }

    #[test]
    fn top_page_ranks_best_first() {
        let bundle = fixtures::bundle();
        let page = render_top(&bundle, &ViewSettings::default()).unwrap();

        let labels = bar_labels(&page);
        assert_eq!(labels.len(), 10);
        assert_eq!(labels[0], "#1 ADANIENT");

        let table = page.tables().next().unwrap();
        assert_eq!(table.rows.len(), 10);
        assert_eq!(table.rows[0][1], "ADANIENT");
        assert_eq!(table.rows[0][3], "72.00");

        let Some(Chart::Bar { colors, .. }) = page.charts().next() else { unreachable!() };
        assert_eq!(colors[0], theme::SUCCESS);
    }

    #[test]
    fn worst_page_is_ascending_and_disjoint_from_top() {
        let bundle = fixtures::bundle();
        let settings = ViewSettings::default();
        let top = render_top(&bundle, &settings).unwrap();
        let worst = render_worst(&bundle, &settings).unwrap();

        let Some(Chart::Bar { values, labels, .. }) = worst.charts().next() else { panic!() };
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(labels[0], "BAJFINANCE");

        let top_symbols: HashSet<String> = bar_labels(&top)
            .into_iter()
            .map(|l| l.split_once(' ').unwrap().1.to_string())
            .collect();
        assert!(labels.iter().all(|s| !top_symbols.contains(s)));
    }

    #[test]
    fn worst_cards_carry_risk_class() {
        let bundle = fixtures::bundle();
        let page = render_worst(&bundle, &ViewSettings::default()).unwrap();
        let cards = page
            .widgets
            .iter()
            .find_map(|w| match w {
                Widget::Cards(cards) => Some(cards),
                _ => None,
            })
            .unwrap();

        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0].caption, "Finance · HIGH RISK");
        assert_eq!(cards[0].accent, theme::DANGER);
    }
}
