use crate::view::ViewId;
use analytics::HistogramBin;
use chrono::NaiveDate;
use serde::Serialize;

/// A fully rendered dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub view: ViewId,
    pub title: String,
    pub widgets: Vec<Widget>,
}

impl Page {
    pub fn new(view: ViewId, title: impl Into<String>) -> Self {
        Self {
            view,
            title: title.into(),
            widgets: Vec::new(),
        }
    }

    pub fn push(&mut self, widget: Widget) {
        self.widgets.push(widget);
    }

    pub fn charts(&self) -> impl Iterator<Item = &Chart> {
        self.widgets.iter().filter_map(|w| match w {
            Widget::Chart(chart) => Some(chart),
            _ => None,
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.widgets.iter().filter_map(|w| match w {
            Widget::Table(table) => Some(table),
            _ => None,
        })
    }

    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.widgets.iter().filter_map(|w| match w {
            Widget::Notice(notice) => Some(notice),
            _ => None,
        })
    }
}

/// The building blocks of a page.
///
/// Serialized as `{ "type": "Chart", "payload": { ... } }` so clients can switch on
/// the `type` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload")]
pub enum Widget {
    /// A section heading.
    Header(String),
    Notice(Notice),
    /// A row of metric cards.
    Cards(Vec<Card>),
    Chart(Chart),
    Table(Table),
    /// A user input together with its current value.
    Control(Control),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Widget {
        Widget::Notice(Notice { level: NoticeLevel::Info, message: message.into() })
    }

    pub fn warning(message: impl Into<String>) -> Widget {
        Widget::Notice(Notice { level: NoticeLevel::Warning, message: message.into() })
    }
}

/// A single headline figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub title: String,
    pub value: String,
    pub caption: String,
    /// Hex colour for the card's accent border.
    pub accent: String,
    /// Optional fill level, 0-100, drawn as a bar under the card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
}

impl Card {
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        caption: impl Into<String>,
        accent: &str,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            caption: caption.into(),
            accent: accent.to_string(),
            progress: None,
        }
    }

    pub fn with_progress(mut self, progress: f64) -> Self {
        self.progress = Some(progress.clamp(0.0, 100.0));
        self
    }
}

/// Pre-formatted tabular data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(title: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            title: title.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }
}

/// A user input widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Control {
    Select {
        name: String,
        label: String,
        options: Vec<String>,
        selected: String,
    },
    MultiSelect {
        name: String,
        label: String,
        options: Vec<String>,
        selected: Vec<String>,
        max: usize,
    },
    Slider {
        name: String,
        label: String,
        min: usize,
        max: usize,
        value: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub name: String,
    pub color: String,
    /// Area fill colour, when the series is filled.
    pub fill: Option<String>,
    pub points: Vec<LinePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub label: String,
    pub group: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Axis {
    X,
    Y,
}

/// A dashed reference line across the plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Guide {
    pub axis: Axis,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunburstNode {
    pub label: String,
    pub parent: Option<String>,
    pub value: f64,
    /// Value mapped onto the diverging colour scale.
    pub color_value: f64,
}

/// One anchor of a continuous colour scale; `at` runs from 0 to 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorStop {
    pub at: f64,
    pub color: String,
}

/// Continuous colour scale for heatmaps and sunbursts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorScale {
    pub stops: Vec<ColorStop>,
    /// Data value pinned to the middle of the scale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid: Option<f64>,
}

impl ColorScale {
    pub fn new(stops: &[(f64, &str)]) -> Self {
        Self {
            stops: stops
                .iter()
                .map(|&(at, color)| ColorStop { at, color: color.to_string() })
                .collect(),
            mid: None,
        }
    }

    pub fn centered_at(mut self, mid: f64) -> Self {
        self.mid = Some(mid);
        self
    }
}

/// A declarative chart. Drawing is left to the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Chart {
    Bar {
        title: String,
        labels: Vec<String>,
        values: Vec<f64>,
        colors: Vec<String>,
        text: Vec<String>,
    },
    Line {
        title: String,
        y_title: String,
        series: Vec<LineSeries>,
    },
    Scatter {
        title: String,
        x_title: String,
        y_title: String,
        points: Vec<ScatterPoint>,
        guides: Vec<Guide>,
        annotations: Vec<Annotation>,
    },
    Histogram {
        title: String,
        x_title: String,
        color: String,
        bins: Vec<HistogramBin>,
    },
    Donut {
        title: String,
        center: String,
        slices: Vec<Slice>,
    },
    Heatmap {
        title: String,
        labels: Vec<String>,
        values: Vec<Vec<f64>>,
        min: f64,
        max: f64,
        scale: ColorScale,
    },
    Sunburst {
        title: String,
        nodes: Vec<SunburstNode>,
        scale: ColorScale,
    },
}

impl Chart {
    pub fn title(&self) -> &str {
        match self {
            Chart::Bar { title, .. }
            | Chart::Line { title, .. }
            | Chart::Scatter { title, .. }
            | Chart::Histogram { title, .. }
            | Chart::Donut { title, .. }
            | Chart::Heatmap { title, .. }
            | Chart::Sunburst { title, .. } => title,
        }
    }
}
