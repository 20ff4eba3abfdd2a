//! Blast-design features and form coercion.
//!
//! The model consumes thirteen numeric inputs in a fixed order. Forms submit
//! them as free text keyed by human-readable labels (units included), so
//! every label is looked up explicitly and coerced with the same rules:
//! blank or `nil` becomes `0.0`, anything else must parse as a float.

use std::borrow::Cow;
use std::fmt;
use std::ops::Index;

use serde::Serialize;

use crate::error::CoercionError;

/// Number of model inputs.
pub const N_FEATURES: usize = 13;

/// Form labels in the order the model expects them.
pub const FEATURE_NAMES: [&str; N_FEATURES] = [
    "Hole (Nos)",
    "Depth (m)",
    "Spacing(m)",
    "Burden (m)",
    "Stemming(m)",
    "Decking(m)",
    "Total Drill (RMT)",
    "Explosive(kg)",
    "Volume(m3)",
    "Powder Factor(kg/m3)",
    "Av. CPH",
    "MCPD (kg/D)",
    "Seis. Dist. (m)",
];

/// A single blast-design input.
///
/// Discriminants are positions in the model's input row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    HoleCount = 0,
    Depth = 1,
    Spacing = 2,
    Burden = 3,
    Stemming = 4,
    Decking = 5,
    TotalDrill = 6,
    Explosive = 7,
    Volume = 8,
    PowderFactor = 9,
    AvgCostPerHole = 10,
    MaxChargePerDelay = 11,
    SeismographDistance = 12,
}

impl Feature {
    /// All features in model order.
    pub const ALL: [Feature; N_FEATURES] = [
        Feature::HoleCount,
        Feature::Depth,
        Feature::Spacing,
        Feature::Burden,
        Feature::Stemming,
        Feature::Decking,
        Feature::TotalDrill,
        Feature::Explosive,
        Feature::Volume,
        Feature::PowderFactor,
        Feature::AvgCostPerHole,
        Feature::MaxChargePerDelay,
        Feature::SeismographDistance,
    ];

    /// Position in the model's input row.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Form label, e.g. `"Depth (m)"`.
    #[inline]
    pub fn label(self) -> &'static str {
        FEATURE_NAMES[self.index()]
    }

    /// Look up a feature by its exact form label.
    pub fn from_label(label: &str) -> Option<Feature> {
        Self::ALL.into_iter().find(|f| f.label() == label)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coerce one form value into a number.
///
/// Surrounding whitespace is ignored. An empty value or `nil` (any case)
/// yields `0.0`. Single underscores between digits are digit separators
/// (`1_000` is `1000.0`).
pub fn coerce_field(feature: Feature, raw: &str) -> Result<f64, CoercionError> {
    let value = raw.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("nil") {
        return Ok(0.0);
    }
    let invalid = || CoercionError::InvalidNumber {
        field: feature.label(),
        value: value.to_string(),
    };
    strip_digit_separators(value)
        .ok_or_else(invalid)?
        .parse::<f64>()
        .map_err(|_| invalid())
}

/// Remove `_` separators, or `None` if one is not flanked by digits.
fn strip_digit_separators(value: &str) -> Option<Cow<'_, str>> {
    if !value.contains('_') {
        return Some(Cow::Borrowed(value));
    }
    let bytes = value.as_bytes();
    let mut out = String::with_capacity(value.len());
    for (i, c) in value.char_indices() {
        if c == '_' {
            let before = i.checked_sub(1).map(|j| bytes[j]);
            let after = bytes.get(i + 1).copied();
            match (before, after) {
                (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => continue,
                _ => return None,
            }
        }
        out.push(c);
    }
    Some(Cow::Owned(out))
}

// =============================================================================
// BlastForm
// =============================================================================

/// Raw form submission, one optional text value per feature.
///
/// Keys that are not feature labels are ignored. When a label is submitted
/// more than once, the first value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlastForm {
    pub hole_count: Option<String>,
    pub depth: Option<String>,
    pub spacing: Option<String>,
    pub burden: Option<String>,
    pub stemming: Option<String>,
    pub decking: Option<String>,
    pub total_drill: Option<String>,
    pub explosive: Option<String>,
    pub volume: Option<String>,
    pub powder_factor: Option<String>,
    pub avg_cost_per_hole: Option<String>,
    pub max_charge_per_delay: Option<String>,
    pub seismograph_distance: Option<String>,
}

impl BlastForm {
    /// Build a form from decoded `(key, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = BlastForm::default();
        for (key, value) in pairs {
            if let Some(feature) = Feature::from_label(key.as_ref()) {
                let slot = form.slot_mut(feature);
                if slot.is_none() {
                    *slot = Some(value.into());
                }
            }
        }
        form
    }

    /// Raw submitted text for a feature, if any.
    pub fn field(&self, feature: Feature) -> Option<&str> {
        let slot = match feature {
            Feature::HoleCount => &self.hole_count,
            Feature::Depth => &self.depth,
            Feature::Spacing => &self.spacing,
            Feature::Burden => &self.burden,
            Feature::Stemming => &self.stemming,
            Feature::Decking => &self.decking,
            Feature::TotalDrill => &self.total_drill,
            Feature::Explosive => &self.explosive,
            Feature::Volume => &self.volume,
            Feature::PowderFactor => &self.powder_factor,
            Feature::AvgCostPerHole => &self.avg_cost_per_hole,
            Feature::MaxChargePerDelay => &self.max_charge_per_delay,
            Feature::SeismographDistance => &self.seismograph_distance,
        };
        slot.as_deref()
    }

    fn slot_mut(&mut self, feature: Feature) -> &mut Option<String> {
        match feature {
            Feature::HoleCount => &mut self.hole_count,
            Feature::Depth => &mut self.depth,
            Feature::Spacing => &mut self.spacing,
            Feature::Burden => &mut self.burden,
            Feature::Stemming => &mut self.stemming,
            Feature::Decking => &mut self.decking,
            Feature::TotalDrill => &mut self.total_drill,
            Feature::Explosive => &mut self.explosive,
            Feature::Volume => &mut self.volume,
            Feature::PowderFactor => &mut self.powder_factor,
            Feature::AvgCostPerHole => &mut self.avg_cost_per_hole,
            Feature::MaxChargePerDelay => &mut self.max_charge_per_delay,
            Feature::SeismographDistance => &mut self.seismograph_distance,
        }
    }

    /// Coerce every field, in model order.
    ///
    /// Missing fields count as empty. Fails on the first value that is not a
    /// number.
    pub fn to_feature_vector(&self) -> Result<FeatureVector, CoercionError> {
        let mut values = [0.0; N_FEATURES];
        for feature in Feature::ALL {
            values[feature.index()] = coerce_field(feature, self.field(feature).unwrap_or(""))?;
        }
        Ok(FeatureVector(values))
    }
}

// =============================================================================
// FeatureVector
// =============================================================================

/// Coerced model input: all thirteen features, in model order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeatureVector([f64; N_FEATURES]);

impl FeatureVector {
    pub fn new(values: [f64; N_FEATURES]) -> Self {
        Self(values)
    }

    #[inline]
    pub fn values(&self) -> &[f64; N_FEATURES] {
        &self.0
    }

    /// Labelled values in model order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        Feature::ALL.into_iter().map(move |f| (f, self.0[f.index()]))
    }

    /// Single-precision row as consumed by the tree and linear boosters.
    pub fn as_f32_row(&self) -> [f32; N_FEATURES] {
        self.0.map(|v| v as f32)
    }
}

impl Index<Feature> for FeatureVector {
    type Output = f64;

    #[inline]
    fn index(&self, feature: Feature) -> &f64 {
        &self.0[feature.index()]
    }
}

/// Serializes as a label → value map in model order.
impl Serialize for FeatureVector {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(N_FEATURES))?;
        for (feature, value) in self.iter() {
            map.serialize_entry(feature.label(), &value)?;
        }
        map.end()
    }
}
