use serde::Serialize;

// =============================================================================
// ChartSpec: the renderer-agnostic output tree
// =============================================================================
//
// Builders assemble this tree; the render adapter serializes it and hands
// it to the chart widget's set-option contract verbatim. The tree is
// self-contained and deterministic for identical inputs: no timestamps,
// counters or other hidden state ever land in it. Fields serialize in
// camelCase; absent options are omitted entirely.

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_easing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<Grid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radar: Option<RadarAxes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_map: Option<VisualMap>,
    pub series: Vec<Series>,
}

// =============================================================================
// Title / tooltip / legend / grid blocks
// =============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub text: String,
    pub left: String,
    pub text_style: TextStyle,
    pub subtext: String,
    pub subtext_style: TextStyle,
}

impl Title {
    /// The standard centered title block every kind shares.
    pub fn centered(text: String) -> Self {
        Self {
            text,
            left: "center".to_string(),
            text_style: TextStyle {
                color: Some("#2c3e50".to_string()),
                font_size: Some(16),
                font_weight: Some("bold".to_string()),
            },
            subtext: String::new(),
            subtext_style: TextStyle {
                color: Some("#7f8c8d".to_string()),
                font_size: Some(12),
                font_weight: None,
            },
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    Axis,
    Item,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    Shadow,
    Line,
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisPointer {
    #[serde(rename = "type")]
    pub kind: PointerKind,
}

/// Tooltip behavior descriptor. `formatter` carries a template in the
/// renderer's placeholder syntax ({b} name, {c} value, {d} percent);
/// when absent the renderer's default formatting applies.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub trigger: Trigger,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_pointer: Option<AxisPointer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,
}

impl Tooltip {
    pub fn axis(pointer: PointerKind) -> Self {
        Self {
            trigger: Trigger::Axis,
            axis_pointer: Some(AxisPointer { kind: pointer }),
            formatter: None,
        }
    }

    pub fn item() -> Self {
        Self {
            trigger: Trigger::Item,
            axis_pointer: None,
            formatter: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orient {
    Vertical,
    Horizontal,
}

/// Pixel or named offset for legend placement ("top", "middle", 30).
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Offset {
    Px(u32),
    Named(String),
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    pub show: bool,
    pub data: Vec<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orient: Option<Orient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<Offset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
}

impl Legend {
    /// Marks the legend scrollable (overflow pages instead of wrapping).
    pub fn scrollable(&mut self) {
        self.kind = Some("scroll".to_string());
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    pub left: String,
    pub right: String,
    pub bottom: String,
    pub top: String,
    pub contain_label: bool,
}

impl Grid {
    pub fn standard(bottom: &str, top: &str) -> Self {
        Self {
            left: "3%".to_string(),
            right: "4%".to_string(),
            bottom: bottom.to_string(),
            top: top.to_string(),
            contain_label: true,
        }
    }
}

// =============================================================================
// Axes
// =============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Axis {
    #[serde(rename_all = "camelCase")]
    Category {
        data: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        boundary_gap: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        axis_label: Option<AxisLabel>,
    },
    #[serde(rename_all = "camelCase")]
    Value {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        scale: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        axis_label: Option<AxisLabel>,
    },
}

/// Axis tick label policy. `compact` asks the renderer to run values
/// through the K/M suffixing of `infer::format_number`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub compact: bool,
}

// =============================================================================
// Series descriptors
// =============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Series {
    #[serde(rename_all = "camelCase")]
    Bar {
        name: String,
        data: Vec<f64>,
        item_style: ItemStyle,
        bar_width: f64,
        label: SeriesLabel,
        #[serde(skip_serializing_if = "Option::is_none")]
        stack: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        emphasis: Option<Emphasis>,
    },
    #[serde(rename_all = "camelCase")]
    Line {
        name: String,
        data: Vec<f64>,
        smooth: bool,
        line_style: LineStyle,
        item_style: ItemStyle,
        #[serde(skip_serializing_if = "Option::is_none")]
        area_style: Option<AreaStyle>,
        symbol: String,
        symbol_size: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        emphasis: Option<Emphasis>,
    },
    #[serde(rename_all = "camelCase")]
    Pie {
        name: String,
        radius: String,
        center: [String; 2],
        data: Vec<PieDatum>,
        item_style: ItemStyle,
        label: SeriesLabel,
        label_line: LabelLine,
        #[serde(skip_serializing_if = "Option::is_none")]
        emphasis: Option<Emphasis>,
    },
    #[serde(rename_all = "camelCase")]
    Scatter {
        name: String,
        data: Vec<ScatterPoint>,
        #[serde(skip_serializing_if = "Option::is_none")]
        item_style: Option<ItemStyle>,
        #[serde(skip_serializing_if = "Option::is_none")]
        emphasis: Option<Emphasis>,
    },
    Radar {
        data: Vec<RadarDatum>,
    },
    #[serde(rename_all = "camelCase")]
    Heatmap {
        name: String,
        data: Vec<[f64; 3]>,
        label: SeriesLabel,
        #[serde(skip_serializing_if = "Option::is_none")]
        emphasis: Option<Emphasis>,
    },
    #[serde(rename_all = "camelCase")]
    Gauge {
        name: String,
        detail: GaugeDetail,
        data: Vec<GaugeDatum>,
        axis_line: GaugeAxisLine,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    Top,
    Inside,
    Outside,
}

/// Per-series value label policy; same `compact` contract as AxisLabel.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesLabel {
    pub show: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<LabelPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub compact: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LabelLine {
    pub show: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<BorderRadius>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_blur: Option<u32>,
}

impl ItemStyle {
    pub fn solid(color: &str) -> Self {
        Self {
            color: Some(Color::Solid(color.to_string())),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Color {
    Solid(String),
    Gradient(LinearGradient),
}

/// Linear gradient fill in the renderer's object form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinearGradient {
    #[serde(rename = "type")]
    pub kind: String,
    pub x: f64,
    pub y: f64,
    pub x2: f64,
    pub y2: f64,
    pub color_stops: Vec<ColorStop>,
}

impl LinearGradient {
    /// Top-to-bottom gradient through the given (offset, color) stops.
    pub fn vertical(stops: &[(f64, &str)]) -> Self {
        Self {
            kind: "linear".to_string(),
            x: 0.0,
            y: 0.0,
            x2: 0.0,
            y2: 1.0,
            color_stops: stops
                .iter()
                .map(|(offset, color)| ColorStop {
                    offset: *offset,
                    color: color.to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorStop {
    pub offset: f64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BorderRadius {
    Uniform(u32),
    PerCorner([u32; 4]),
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AreaStyle {
    pub color: Color,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Emphasis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<SeriesLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_size: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PieDatum {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterPoint {
    pub name: String,
    pub value: [f64; 2],
    pub symbol_size: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarDatum {
    pub name: String,
    pub value: Vec<f64>,
    pub item_style: ItemStyle,
}

#[derive(Debug, Clone, Serialize)]
pub struct RadarAxes {
    pub indicator: Vec<RadarIndicator>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RadarIndicator {
    pub name: String,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualMap {
    pub min: f64,
    pub max: f64,
    pub calculable: bool,
    pub orient: Orient,
    pub left: String,
    pub bottom: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GaugeDetail {
    pub formatter: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GaugeDatum {
    pub value: f64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeAxisLine {
    pub line_style: GaugeLineStyle,
}

/// Dial segments as (stop, color) pairs, serialized as `[[0.3, "#.."]]`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeLineStyle {
    pub width: u32,
    pub color: Vec<(f64, String)>,
}
