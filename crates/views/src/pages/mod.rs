use crate::controls::Controls;
use crate::error::ViewError;
use crate::view::ViewId;
use crate::widgets::Page;
use configuration::ViewSettings;
use core_types::DataBundle;

mod comparator;
mod correlation;
mod cumulative;
mod monthly;
mod overview;
mod performers;
mod sectors;
mod volatility;

#[cfg(test)]
pub(crate) mod fixtures;

/// Renders one page from the bundle and the current control values.
///
/// Each arm is independent; pages share nothing but the read-only bundle.
pub fn render(
    bundle: &DataBundle,
    view: ViewId,
    controls: &Controls,
    settings: &ViewSettings,
) -> Result<Page, ViewError> {
    tracing::debug!(view = %view, ?controls, "Rendering page.");
    match view {
        ViewId::MarketOverview => overview::render(bundle),
        ViewId::TopPerformers => performers::render_top(bundle, settings),
        ViewId::WorstPerformers => performers::render_worst(bundle, settings),
        ViewId::VolatilityAnalysis => volatility::render(bundle, settings),
        ViewId::CumulativeReturns => cumulative::render(bundle, controls, settings),
        ViewId::SectorAnalysis => sectors::render(bundle),
        ViewId::CorrelationMatrix => correlation::render(bundle, controls, settings),
        ViewId::MonthlyTrends => monthly::render(bundle, controls, settings),
        ViewId::StockComparator => comparator::render(bundle, controls),
    }
}
