use crate::{
    core::geo::PercentPoint,
    layers::{manager::Overlay, marker::Marker},
};

use rstar::{PointDistance, RTree, RTreeObject, AABB};

/// A marker indexed by its percent position
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedMarker {
    pub position: PercentPoint,
    pub title: String,
    pub z_index: i32,
}

impl IndexedMarker {
    pub fn from_marker(marker: &Marker) -> Self {
        Self {
            position: marker.position,
            title: marker.title.clone(),
            z_index: marker.z_index(),
        }
    }
}

// --- rstar integration -------------------------------------------------------------------------

impl RTreeObject for IndexedMarker {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.position.x, self.position.y])
    }
}

impl PointDistance for IndexedMarker {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.position.x - point[0];
        let dy = self.position.y - point[1];
        dx * dx + dy * dy
    }
}

/// R-tree over marker positions, used for hover lookup
#[derive(Default)]
pub struct MarkerIndex {
    rtree: RTree<IndexedMarker>,
}

impl MarkerIndex {
    pub fn new(markers: Vec<IndexedMarker>) -> Self {
        Self {
            rtree: RTree::bulk_load(markers),
        }
    }

    /// Indexes every marker of an overlay. Markers without a title are skipped.
    pub fn from_overlay(overlay: &Overlay) -> Self {
        Self::new(
            overlay
                .markers()
                .filter(|m| !m.title.is_empty())
                .map(IndexedMarker::from_marker)
                .collect(),
        )
    }

    /// Closest marker within `radius` percent units. Ties go to the topmost layer.
    pub fn nearest_within(&self, point: &PercentPoint, radius: f64) -> Option<&IndexedMarker> {
        let query = [point.x, point.y];
        self.rtree
            .locate_within_distance(query, radius * radius)
            .min_by(|a, b| {
                a.distance_2(&query)
                    .total_cmp(&b.distance_2(&query))
                    .then(b.z_index.cmp(&a.z_index))
            })
    }

    pub fn len(&self) -> usize {
        self.rtree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.rtree.size() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(x: f64, y: f64, title: &str, z_index: i32) -> IndexedMarker {
        IndexedMarker {
            position: PercentPoint::new(x, y),
            title: title.to_string(),
            z_index,
        }
    }

    #[test]
    fn test_nearest_within_radius() {
        let index = MarkerIndex::new(vec![item(10.0, 10.0, "a", 30), item(50.0, 50.0, "b", 30)]);
        assert_eq!(index.len(), 2);

        let hit = index.nearest_within(&PercentPoint::new(11.0, 10.0), 2.0).unwrap();
        assert_eq!(hit.title, "a");
        assert!(index.nearest_within(&PercentPoint::new(30.0, 30.0), 2.0).is_none());
    }

    #[test]
    fn test_tie_prefers_top_layer() {
        let index = MarkerIndex::new(vec![
            item(10.0, 10.0, "low", 30),
            item(10.0, 10.0, "high", 100),
        ]);
        let hit = index.nearest_within(&PercentPoint::new(10.0, 10.0), 1.0).unwrap();
        assert_eq!(hit.title, "high");
    }

    #[test]
    fn test_empty_index() {
        let index = MarkerIndex::default();
        assert!(index.is_empty());
        assert!(index.nearest_within(&PercentPoint::new(0.0, 0.0), 5.0).is_none());
    }
}
