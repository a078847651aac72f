use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Leadership,
    Product,
    Service,
    Company,
    Contact,
    SmallTalk,
    Fallback,
}

impl Topic {
    pub fn as_code(self) -> &'static str {
        match self {
            Self::Leadership => "leadership",
            Self::Product => "product",
            Self::Service => "service",
            Self::Company => "company",
            Self::Contact => "contact",
            Self::SmallTalk => "small_talk",
            Self::Fallback => "fallback",
        }
    }
}

/// One row of the responder table. A rule fires when any keyword is a
/// substring of the lower-cased input.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleMatch {
    pub topic: Topic,
    pub response: &'static str,
}

impl RuleMatch {
    pub fn is_fallback(&self) -> bool {
        self.topic == Topic::Fallback
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exchange {
    pub at: DateTime<Utc>,
    pub user_text: String,
    pub response_text: String,
    pub topic: Topic,
}

/// Append-only record of one conversation with the site assistant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    exchanges: Vec<Exchange>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, user_text: &str, matched: RuleMatch) -> &Exchange {
        self.exchanges.push(Exchange {
            at: Utc::now(),
            user_text: user_text.to_string(),
            response_text: matched.response.to_string(),
            topic: matched.topic,
        });
        &self.exchanges[self.exchanges.len() - 1]
    }

    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    pub fn last(&self) -> Option<&Exchange> {
        self.exchanges.last()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutVariant {
    Molecule,
    Orbit,
    Blueprint,
    Radar,
}

impl LayoutVariant {
    pub const ALL: [LayoutVariant; 4] = [Self::Molecule, Self::Orbit, Self::Blueprint, Self::Radar];

    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Molecule => "MOLECULE",
            Self::Orbit => "ORBIT",
            Self::Blueprint => "BLUEPRINT",
            Self::Radar => "RADAR",
        }
    }

    /// Orbit nodes rotate as a rigid group in the renderer, so they carry no
    /// connector paths.
    pub fn has_connectors(self) -> bool {
        self != Self::Orbit
    }
}

impl fmt::Display for LayoutVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathSpec {
    Elbow { from: Point, knee: Point, to: Point },
    Step { from: Point, corner: Point, to: Point },
    Quadratic { from: Point, control: Point, to: Point },
}

impl PathSpec {
    pub fn start(&self) -> Point {
        match self {
            Self::Elbow { from, .. } | Self::Step { from, .. } | Self::Quadratic { from, .. } => {
                *from
            }
        }
    }

    pub fn end(&self) -> Point {
        match self {
            Self::Elbow { to, .. } | Self::Step { to, .. } | Self::Quadratic { to, .. } => *to,
        }
    }

    /// SVG path data, e.g. `M 400 250 L 510 70 L 400 70`.
    pub fn to_svg(&self) -> String {
        match self {
            Self::Elbow { from, knee: via, to } | Self::Step { from, corner: via, to } => format!(
                "M {} {} L {} {} L {} {}",
                from.x, from.y, via.x, via.y, to.x, to.y
            ),
            Self::Quadratic { from, control, to } => format!(
                "M {} {} Q {} {} {} {}",
                from.x, from.y, control.x, control.y, to.x, to.y
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutNode {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub connector: Option<PathSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub variant: LayoutVariant,
    pub center: Point,
    pub radius_x: f64,
    pub radius_y: f64,
    pub nodes: Vec<LayoutNode>,
}

impl Layout {
    pub fn paths(&self) -> Vec<PathSpec> {
        self.nodes.iter().filter_map(|node| node.connector).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Viewport {
    #[default]
    Desktop,
    Mobile,
}

impl Viewport {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "desktop" | "wide" => Some(Self::Desktop),
            "mobile" | "narrow" => Some(Self::Mobile),
            _ => None,
        }
    }
}

/// View box the hub diagram is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HubCanvas {
    pub width: f64,
    pub height: f64,
}

impl HubCanvas {
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for HubCanvas {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Red,
    Blue,
    Emerald,
    Amber,
    Purple,
    Indigo,
    Pink,
    Cyan,
    Orange,
}

impl Theme {
    /// Unknown names resolve to blue.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "red" => Self::Red,
            "emerald" => Self::Emerald,
            "amber" => Self::Amber,
            "purple" => Self::Purple,
            "indigo" => Self::Indigo,
            "pink" => Self::Pink,
            "cyan" => Self::Cyan,
            "orange" => Self::Orange,
            _ => Self::Blue,
        }
    }

    pub fn stroke(self) -> &'static str {
        match self {
            Self::Red => "#ef4444",
            Self::Blue => "#3b82f6",
            Self::Emerald => "#10b981",
            Self::Amber => "#f59e0b",
            Self::Purple => "#a855f7",
            Self::Indigo => "#6366f1",
            Self::Pink => "#ec4899",
            Self::Cyan => "#06b6d4",
            Self::Orange => "#f97316",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub key: &'static str,
    pub name: &'static str,
    pub theme: Theme,
    pub features: &'static [&'static str],
}
