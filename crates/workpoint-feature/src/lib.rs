#![warn(missing_docs)]

//! Parametric point features over resolved straight edges.
//!
//! The host application reduces a user's selection to shapes with straight
//! edges; this crate owns what happens next. A [`CenterLinePoint`] feature
//! stores its input edge and division properties and recomputes its point
//! on demand, and [`plan_features`] fans a selection out into one feature
//! per point the user asked for (Single/All placement).

mod error;

pub use error::{FeatureError, Result};

use std::collections::HashMap;

use log::warn;
use serde::{Deserialize, Serialize};
use workpoint_divide::{point_at_division, Division, Segment};
use workpoint_math::Point3;

// =============================================================================
// Edge references and the edge store
// =============================================================================

/// Names one edge of a stored shape.
///
/// Ordinals are 1-based, matching the host convention of labeling edges
/// `Edge1`, `Edge2`, ... in selection sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeRef {
    /// Shape identifier in the store.
    pub shape: String,
    /// 1-based edge ordinal on that shape.
    pub ordinal: usize,
}

impl EdgeRef {
    /// Reference edge `ordinal` of `shape`.
    pub fn new(shape: impl Into<String>, ordinal: usize) -> Self {
        Self {
            shape: shape.into(),
            ordinal,
        }
    }
}

/// Resolved straight edges, keyed by shape id.
///
/// Stands in for the host document: by the time features run, selection
/// and topology have already been reduced to endpoint pairs. The store
/// never hands a feature anything but two endpoints.
#[derive(Debug, Clone, Default)]
pub struct EdgeStore {
    shapes: HashMap<String, Vec<Segment>>,
}

impl EdgeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) a shape's edge list.
    pub fn insert_shape(&mut self, id: impl Into<String>, edges: Vec<Segment>) {
        self.shapes.insert(id.into(), edges);
    }

    /// Number of edges on a shape, if the shape exists.
    pub fn edge_count(&self, shape: &str) -> Option<usize> {
        self.shapes.get(shape).map(Vec::len)
    }

    /// References to every edge of `shape`, in ordinal order.
    ///
    /// This is the "select an object to process all its edges at once"
    /// entry path.
    pub fn edges_of(&self, shape: &str) -> Result<Vec<EdgeRef>> {
        let edges = self
            .shapes
            .get(shape)
            .ok_or_else(|| FeatureError::ShapeNotFound(shape.to_owned()))?;
        Ok((1..=edges.len())
            .map(|ordinal| EdgeRef::new(shape, ordinal))
            .collect())
    }

    /// Resolve an edge reference to its segment.
    pub fn resolve(&self, edge: &EdgeRef) -> Result<Segment> {
        let edges = self
            .shapes
            .get(&edge.shape)
            .ok_or_else(|| FeatureError::ShapeNotFound(edge.shape.clone()))?;
        if edge.ordinal == 0 || edge.ordinal > edges.len() {
            return Err(FeatureError::EdgeOutOfRange {
                shape: edge.shape.clone(),
                ordinal: edge.ordinal,
                count: edges.len(),
            });
        }
        Ok(edges[edge.ordinal - 1])
    }
}

// =============================================================================
// CenterLinePoint feature
// =============================================================================

/// A parametric point a fraction of the way along an edge.
///
/// Holds the host's persisted properties: the input edge plus the raw
/// part-count and index integers. The part count is re-clamped on every
/// write so a stored feature never carries an out-of-range count; the
/// index is unbounded, so negative and past-the-end indices place the
/// point beyond the edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterLinePoint {
    edge: EdgeRef,
    parts: i64,
    index: i64,
}

impl CenterLinePoint {
    /// Create a feature on `edge` with the default division of two parts
    /// at index 1, the midpoint.
    pub fn new(edge: EdgeRef) -> Self {
        Self {
            edge,
            parts: 2,
            index: 1,
        }
    }

    /// Create with explicit properties. `parts` is clamped as by
    /// [`CenterLinePoint::set_parts`].
    pub fn with_division(edge: EdgeRef, parts: i64, index: i64) -> Self {
        let mut feature = Self::new(edge);
        feature.set_parts(parts);
        feature.set_index(index);
        feature
    }

    /// The input edge.
    pub fn edge(&self) -> &EdgeRef {
        &self.edge
    }

    /// Stored part count.
    pub fn parts(&self) -> i64 {
        self.parts
    }

    /// Stored part index.
    pub fn index(&self) -> i64 {
        self.index
    }

    /// Set the part count, clamped into `[2, 100]`.
    pub fn set_parts(&mut self, parts: i64) {
        self.parts = parts.clamp(Division::MIN_PARTS, Division::MAX_PARTS);
    }

    /// Set the part index. Not clamped.
    pub fn set_index(&mut self, index: i64) {
        self.index = index;
    }

    /// The division this feature evaluates.
    pub fn division(&self) -> Division {
        Division::new(self.parts, self.index)
    }

    /// Resolve the input edge against `store` and compute the point.
    ///
    /// Idempotent: the same store and properties always produce the same
    /// point, so callers may recompute on every property edit.
    pub fn recompute(&self, store: &EdgeStore) -> Result<Point3> {
        let segment = store.resolve(&self.edge)?;
        Ok(point_at_division(&segment, self.division()))
    }
}

// =============================================================================
// Placement planning
// =============================================================================

/// Where to place points along each selected edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Location {
    /// One point per edge, at the requested index.
    #[default]
    Single,
    /// One point per cut boundary of each edge, index `0..=parts`.
    All,
}

/// Fan a selection of edges out into point features.
///
/// `Single` yields one feature per edge at `index`; `All` yields
/// `parts + 1` features per edge, sweeping the index over every cut
/// boundary of the clamped part count. An edge that fails to resolve is
/// logged and skipped, and the remaining edges are still processed.
pub fn plan_features(
    store: &EdgeStore,
    edges: &[EdgeRef],
    location: Location,
    parts: i64,
    index: i64,
) -> Vec<CenterLinePoint> {
    let mut features = Vec::new();
    for edge in edges {
        if let Err(err) = store.resolve(edge) {
            warn!("skipping Edge{} of {}: {}", edge.ordinal, edge.shape, err);
            continue;
        }
        match location {
            Location::Single => {
                features.push(CenterLinePoint::with_division(edge.clone(), parts, index));
            }
            Location::All => {
                let boundaries = i64::from(Division::new(parts, index).parts());
                for k in 0..=boundaries {
                    features.push(CenterLinePoint::with_division(edge.clone(), parts, k));
                }
            }
        }
    }
    features
}
