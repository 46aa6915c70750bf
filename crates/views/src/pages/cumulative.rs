use crate::controls::{Controls, TimeRange};
use crate::error::ViewError;
use crate::format;
use crate::theme;
use crate::view::ViewId;
use crate::widgets::{Chart, Control, LinePoint, LineSeries, Notice, Page, Table, Widget};
use analytics::RiskClass;
use configuration::ViewSettings;
use core_types::DataBundle;

pub(super) fn render(
    bundle: &DataBundle,
    controls: &Controls,
    settings: &ViewSettings,
) -> Result<Page, ViewError> {
    let time_range = controls.time_range()?;
    let options = bundle.symbols();

    let mut selected = controls.symbol_list().unwrap_or_else(|| {
        options.iter().take(settings.max_compare).cloned().collect()
    });
    if let Some(unknown) = selected.iter().find(|s| bundle.metric(s).is_none()) {
        return Err(ViewError::UnknownSymbol(unknown.clone()));
    }

    let mut page = Page::new(ViewId::CumulativeReturns, "Cumulative Returns");
    let truncated = selected.len() > settings.max_compare;
    if truncated {
        tracing::warn!(requested = selected.len(), max = settings.max_compare, "Too many symbols selected; truncating.");
        selected.truncate(settings.max_compare);
    }

    page.push(Widget::Control(Control::MultiSelect {
        name: "symbols".to_string(),
        label: format!("Select stocks to compare (max {})", settings.max_compare),
        options,
        selected: selected.clone(),
        max: settings.max_compare,
    }));
    page.push(Widget::Control(Control::Select {
        name: "time_range".to_string(),
        label: "Time Range".to_string(),
        options: TimeRange::ALL.iter().map(|r| r.code().to_string()).collect(),
        selected: time_range.code().to_string(),
    }));

    if truncated {
        page.push(Notice::warning(format!(
            "Please select maximum {} stocks for better visualization",
            settings.max_compare
        )));
    }

    if selected.is_empty() {
        page.push(Notice::info("Please select at least one stock to view cumulative returns"));
        return Ok(page);
    }

    let series = selected
        .iter()
        .enumerate()
        .map(|(i, symbol)| {
            let color = theme::series_color(i);
            LineSeries {
                name: symbol.clone(),
                color: color.to_string(),
                fill: (i == 0).then(|| theme::hex_to_rgba(color, 0.1)),
                points: analytics::cumulative_returns(&bundle.master_data, symbol)
                    .into_iter()
                    .map(|p| LinePoint { date: p.date, value: p.value })
                    .collect(),
            }
        })
        .collect();

    page.push(Widget::Chart(Chart::Line {
        title: format!("Cumulative Returns Comparison ({})", time_range),
        y_title: "Cumulative Return (%)".to_string(),
        series,
    }));

    let mut summary = Table::new(
        "Performance Summary",
        &["Symbol", "Total Return", "Volatility", "Risk Class"],
    );
    for symbol in &selected {
        if let Some(metric) = bundle.metric(symbol) {
            summary.row(vec![
                metric.symbol.clone(),
                format::pct(metric.yearly_return),
                format::pct(metric.volatility),
                RiskClass::from_volatility(metric.volatility).label().to_string(),
            ]);
        }
    }
    page.push(Widget::Table(summary));

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::NoticeLevel;
    use crate::pages::fixtures;

    fn with_symbols(symbols: &str) -> Controls {
        Controls { symbols: Some(symbols.to_string()), ..Default::default() }
    }

    fn line_series(page: &Page) -> Option<&Vec<LineSeries>> {
        page.charts().find_map(|c| match c {
            Chart::Line { series, .. } => Some(series),
            _ => None,
        })
    }

    #[test]
    fn defaults_to_first_five_metrics_rows() {
        let bundle = fixtures::bundle();
        let page = render(&bundle, &Controls::default(), &ViewSettings::default()).unwrap();

        let series = line_series(&page).unwrap();
        let names: Vec<&str> = series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["ADANIENT", "TATAMOTORS", "BAJAJ-AUTO", "NTPC", "COALINDIA"]);
        assert!(series[0].fill.is_some());
        assert!(series[1].fill.is_none());
        assert_eq!(page.notices().count(), 0);
    }

    #[test]
    fn more_than_five_symbols_truncates_with_warning() {
        let bundle = fixtures::bundle();
        let controls = with_symbols("TCS,INFY,ITC,SBIN,LT,NTPC,UPL");
        let page = render(&bundle, &controls, &ViewSettings::default()).unwrap();

        assert_eq!(line_series(&page).unwrap().len(), 5);
        let notice = page.notices().next().unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(page.tables().next().unwrap().rows.len(), 5);
    }

    #[test]
    fn empty_selection_shows_info_instead_of_chart() {
        let bundle = fixtures::bundle();
        let page = render(&bundle, &with_symbols(""), &ViewSettings::default()).unwrap();

        assert!(line_series(&page).is_none());
        assert_eq!(page.notices().next().unwrap().level, NoticeLevel::Info);
    }

    #[test]
    fn series_matches_analytics_output() {
        let bundle = fixtures::bundle();
        let page = render(&bundle, &with_symbols("TCS"), &ViewSettings::default()).unwrap();

        let series = &line_series(&page).unwrap()[0];
        let expected = analytics::cumulative_returns(&bundle.master_data, "TCS");
        assert_eq!(series.points.len(), expected.len());
        assert_eq!(series.points[0].value, None);
        assert_eq!(series.points[4].value, expected[4].value);
    }

    #[test]
    fn unknown_symbol_and_bad_time_range_are_rejected() {
        let bundle = fixtures::bundle();
        let settings = ViewSettings::default();
        assert_eq!(
            render(&bundle, &with_symbols("TCS,NOPE"), &settings).unwrap_err(),
            ViewError::UnknownSymbol("NOPE".to_string())
        );

        let bad_range = Controls { time_range: Some("2Y".to_string()), ..Default::default() };
        assert!(matches!(render(&bundle, &bad_range, &settings), Err(ViewError::InvalidControl(..))));
    }

    #[test]
    fn time_range_is_echoed_without_filtering() {
        let bundle = fixtures::bundle();
        let controls = Controls {
            symbols: Some("TCS".to_string()),
            time_range: Some("1M".to_string()),
            ..Default::default()
        };
        let page = render(&bundle, &controls, &ViewSettings::default()).unwrap();

        assert_eq!(page.charts().next().unwrap().title(), "Cumulative Returns Comparison (1M)");
        assert_eq!(line_series(&page).unwrap()[0].points.len(), 5);
    }
}
