use std::f64::consts::{FRAC_PI_2, TAU};
use std::str::FromStr;

use thiserror::Error;

use crate::models::{Layout, LayoutNode, LayoutVariant, PathSpec, Point, Viewport};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("unrecognized layout variant: {0}")]
    InvalidVariant(String),
    #[error("invalid geometry: radii must be non-negative (radius_x={radius_x}, radius_y={radius_y})")]
    InvalidGeometry { radius_x: f64, radius_y: f64 },
}

impl FromStr for LayoutVariant {
    type Err = LayoutError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_uppercase().as_str() {
            "MOLECULE" => Ok(Self::Molecule),
            "ORBIT" => Ok(Self::Orbit),
            "BLUEPRINT" => Ok(Self::Blueprint),
            "RADAR" => Ok(Self::Radar),
            _ => Err(LayoutError::InvalidVariant(value.to_string())),
        }
    }
}

/// Angle of node `index` out of `count`, starting at the top and going
/// clockwise in screen coordinates.
pub fn node_angle(index: usize, count: usize) -> f64 {
    (index as f64 / count as f64) * TAU - FRAC_PI_2
}

pub fn compute_layout<S: AsRef<str>>(
    features: &[S],
    variant: LayoutVariant,
    center: Point,
    radius_x: f64,
    radius_y: f64,
) -> Result<Layout, LayoutError> {
    // NaN fails both comparisons, so it is rejected along with negatives.
    if !(radius_x >= 0.0 && radius_y >= 0.0) {
        return Err(LayoutError::InvalidGeometry { radius_x, radius_y });
    }

    let count = features.len();
    let nodes = features
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let angle = node_angle(index, count);
            let target = Point::new(
                center.x + angle.cos() * radius_x,
                center.y + angle.sin() * radius_y,
            );

            LayoutNode {
                label: label.as_ref().to_string(),
                x: target.x,
                y: target.y,
                angle,
                connector: connector(variant, center, target),
            }
        })
        .collect();

    Ok(Layout {
        variant,
        center,
        radius_x,
        radius_y,
        nodes,
    })
}

/// Same as [`compute_layout`] but takes the variant as a free-form tag.
pub fn compute_layout_tagged<S: AsRef<str>>(
    features: &[S],
    variant_tag: &str,
    center: Point,
    radius_x: f64,
    radius_y: f64,
) -> Result<Layout, LayoutError> {
    let variant = variant_tag.parse::<LayoutVariant>()?;
    compute_layout(features, variant, center, radius_x, radius_y)
}

pub fn connector(variant: LayoutVariant, center: Point, target: Point) -> Option<PathSpec> {
    match variant {
        LayoutVariant::Molecule => Some(PathSpec::Elbow {
            from: center,
            knee: Point::new((center.x + target.x) / 2.0, target.y),
            to: target,
        }),
        LayoutVariant::Blueprint => Some(PathSpec::Step {
            from: center,
            corner: Point::new(target.x, center.y),
            to: target,
        }),
        LayoutVariant::Radar => Some(PathSpec::Quadratic {
            from: center,
            control: Point::new(center.x + (target.x - center.x) * 0.5, target.y),
            to: target,
        }),
        LayoutVariant::Orbit => None,
    }
}

/// Picks a variant for a product hub. An explicit variant wins; otherwise
/// the product name decides, defaulting to molecule.
pub fn infer_variant(explicit: Option<LayoutVariant>, product_name: &str) -> LayoutVariant {
    if let Some(variant) = explicit {
        return variant;
    }

    let name = product_name.to_lowercase();
    if contains_any(&name, &["lims", "hospital"]) {
        LayoutVariant::Molecule
    } else if contains_any(&name, &["school", "accounting"]) {
        LayoutVariant::Orbit
    } else if contains_any(&name, &["property", "inventory"]) {
        LayoutVariant::Blueprint
    } else if contains_any(&name, &["kmacho", "logistics"]) {
        LayoutVariant::Radar
    } else {
        LayoutVariant::Molecule
    }
}

/// Hub radii `(x, y)` for a variant at the given viewport width class.
pub fn default_radii(variant: LayoutVariant, viewport: Viewport) -> (f64, f64) {
    match (variant, viewport) {
        (LayoutVariant::Orbit, Viewport::Desktop) => (200.0, 200.0),
        (LayoutVariant::Orbit, Viewport::Mobile) => (100.0, 100.0),
        (LayoutVariant::Blueprint, Viewport::Desktop) => (280.0, 200.0),
        (LayoutVariant::Radar, Viewport::Desktop) => (260.0, 180.0),
        (LayoutVariant::Molecule, Viewport::Desktop) => (250.0, 180.0),
        (_, Viewport::Mobile) => (110.0, 100.0),
    }
}

fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}
