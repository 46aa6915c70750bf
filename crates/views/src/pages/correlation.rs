use crate::controls::Controls;
use crate::error::ViewError;
use crate::theme;
use crate::view::ViewId;
use crate::widgets::{Chart, Control, Notice, Page, Table, Widget};
use analytics::CorrelationPair;
use configuration::ViewSettings;
use core_types::DataBundle;

pub(super) fn render(
    bundle: &DataBundle,
    controls: &Controls,
    settings: &ViewSettings,
) -> Result<Page, ViewError> {
    let matrix = &bundle.correlation_matrix;
    let num_stocks = controls
        .num_stocks
        .unwrap_or(settings.correlation_default)
        .clamp(settings.correlation_min, settings.correlation_max);

    let mut page = Page::new(ViewId::CorrelationMatrix, "Correlation Matrix");
    page.push(Notice::info(
        "1.0: perfect positive correlation (move together) | -1.0: perfect negative \
         correlation (hedge opportunity) | 0: no correlation (independent movement)",
    ));
    page.push(Widget::Control(Control::Slider {
        name: "num_stocks".to_string(),
        label: "Number of stocks to display".to_string(),
        min: settings.correlation_min,
        max: settings.correlation_max,
        value: num_stocks,
    }));

    let ranked = analytics::ranked_by_return(&bundle.metrics);
    let mut symbols = Vec::with_capacity(num_stocks);
    for metric in ranked {
        if symbols.len() == num_stocks {
            break;
        }
        if matrix.contains(&metric.symbol) {
            symbols.push(metric.symbol.clone());
        } else {
            tracing::warn!(symbol = %metric.symbol, "Symbol missing from correlation matrix; skipped.");
        }
    }

    let subset = matrix.subset(&symbols)?;
    page.push(Widget::Chart(Chart::Heatmap {
        title: format!("Correlation Heatmap: Top {} Stocks", symbols.len()),
        labels: subset.symbols,
        values: subset.values,
        min: -1.0,
        max: 1.0,
        scale: theme::correlation_scale(),
    }));

    let pairs = analytics::correlation_pairs(matrix, &symbols)?;
    let (high, low) = analytics::split_insights(&pairs, settings.insight_pairs);
    page.push(Widget::Table(pair_table("Highly Correlated Pairs", &high)));
    page.push(Widget::Table(pair_table("Least Correlated Pairs", &low)));

    Ok(page)
}

fn pair_table(title: &str, pairs: &[CorrelationPair]) -> Table {
    let mut table = Table::new(title, &["Stock 1", "Stock 2", "Correlation"]);
    for pair in pairs {
        table.row(vec![
            pair.first.clone(),
            pair.second.clone(),
            format!("{:.3}", pair.correlation),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::fixtures;

    fn heatmap_labels(page: &Page) -> Vec<String> {
        match page.charts().next() {
            Some(Chart::Heatmap { labels, .. }) => labels.clone(),
            other => panic!("expected heatmap, got {:?}", other),
        }
    }

    #[test]
    fn default_shows_top_fifteen_by_return() {
        let bundle = fixtures::bundle();
        let page = render(&bundle, &Controls::default(), &ViewSettings::default()).unwrap();

        let labels = heatmap_labels(&page);
        assert_eq!(labels.len(), 15);
        assert_eq!(labels[0], "ADANIENT");

        let tables: Vec<&Table> = page.tables().collect();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].rows.len(), 5);
        let high: f64 = tables[0].rows[0][2].parse().unwrap();
        let low: f64 = tables[1].rows[0][2].parse().unwrap();
        assert!(high >= low);
    }

    #[test]
    fn heatmap_carries_its_colour_scale() {
        let bundle = fixtures::bundle();
        let page = render(&bundle, &Controls::default(), &ViewSettings::default()).unwrap();

        let notice = page.notices().next().unwrap();
        assert!(notice.message.contains("move together"));
        assert!(notice.message.contains("hedge opportunity"));

        let json = serde_json::to_value(page.charts().next().unwrap()).unwrap();
        assert_eq!(json["min"], -1.0);
        assert_eq!(json["max"], 1.0);
        assert_eq!(json["scale"]["mid"], 0.0);
        let stops = json["scale"]["stops"].as_array().unwrap();
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0]["at"], 0.0);
        assert_eq!(stops[0]["color"], theme::DANGER);
        assert_eq!(stops[2]["color"], theme::SUCCESS);
    }

    #[test]
    fn slider_value_is_clamped() {
        let bundle = fixtures::bundle();
        let settings = ViewSettings::default();

        let small = Controls { num_stocks: Some(2), ..Default::default() };
        assert_eq!(heatmap_labels(&render(&bundle, &small, &settings).unwrap()).len(), 5);

        // Clamped to 30, then limited by the 24 symbols on hand.
        let large = Controls { num_stocks: Some(99), ..Default::default() };
        let page = render(&bundle, &large, &settings).unwrap();
        assert_eq!(heatmap_labels(&page).len(), 24);
        let slider = page.widgets.iter().find_map(|w| match w {
            Widget::Control(Control::Slider { value, .. }) => Some(*value),
            _ => None,
        });
        assert_eq!(slider, Some(30));
    }

    #[test]
    fn symbols_absent_from_matrix_are_skipped() {
        let mut bundle = fixtures::bundle();
        bundle.correlation_matrix = bundle
            .correlation_matrix
            .subset(&bundle.symbols()[1..].to_vec())
            .unwrap();

        let page = render(&bundle, &Controls::default(), &ViewSettings::default()).unwrap();
        let labels = heatmap_labels(&page);
        assert_eq!(labels.len(), 15);
        assert_eq!(labels[0], "TATAMOTORS");
    }
}
