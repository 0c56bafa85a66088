//! Tracked quest state: untracked -> tracked -> (expanded | collapsed) -> untracked.

use fxhash::FxHasher;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Marker color of a tracked quest, `hsl(hue, 90%, 65%)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestColor {
    pub hue: u16,
}

impl QuestColor {
    pub const SATURATION: f64 = 0.9;
    pub const LIGHTNESS: f64 = 0.65;

    /// Derives a stable hue from the quest name
    pub fn for_name(name: &str) -> Self {
        let mut hasher = FxHasher::default();
        name.hash(&mut hasher);
        Self {
            hue: (hasher.finish() % 360) as u16,
        }
    }

    /// CSS color string
    pub fn to_css(&self) -> String {
        format!("hsl({}, 90%, 65%)", self.hue)
    }

    /// Converts to 8-bit RGB
    pub fn to_rgb(&self) -> [u8; 3] {
        let h = f64::from(self.hue) / 360.0;
        let (s, l) = (Self::SATURATION, Self::LIGHTNESS);
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        let channel = |t: f64| {
            let t = t.rem_euclid(1.0);
            let value = if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 0.5 {
                q
            } else if t < 2.0 / 3.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            };
            (value * 255.0).round().clamp(0.0, 255.0) as u8
        };

        [channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0)]
    }
}

/// A quest the user follows on the current map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedQuest {
    pub name: String,
    pub color: QuestColor,
}

/// The set of tracked quests for the displayed map, plus the expanded one
#[derive(Debug, Clone, Default)]
pub struct QuestTracker {
    tracked: Vec<TrackedQuest>,
    expanded: Option<String>,
}

impl QuestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking a quest. Returns `false` if it was already tracked,
    /// in which case nothing changes.
    pub fn add(&mut self, name: &str) -> bool {
        if self.is_tracked(name) {
            return false;
        }
        let color = QuestColor::for_name(name);
        log::debug!("Tracking quest {:?} with {}", name, color.to_css());
        self.tracked.push(TrackedQuest {
            name: name.to_string(),
            color,
        });
        true
    }

    /// Stops tracking a quest, clearing expansion if it was the expanded one
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.tracked.len();
        self.tracked.retain(|q| q.name != name);
        if self.expanded.as_deref() == Some(name) {
            self.expanded = None;
        }
        self.tracked.len() != before
    }

    /// Expands a tracked quest, or collapses it if it is already expanded
    pub fn toggle_expanded(&mut self, name: &str) {
        if self.expanded.as_deref() == Some(name) {
            self.expanded = None;
        } else if self.is_tracked(name) {
            self.expanded = Some(name.to_string());
        }
    }

    /// Forgets all tracked quests and expansion
    pub fn clear(&mut self) {
        self.tracked.clear();
        self.expanded = None;
    }

    pub fn is_tracked(&self, name: &str) -> bool {
        self.tracked.iter().any(|q| q.name == name)
    }

    pub fn is_expanded(&self, name: &str) -> bool {
        self.expanded.as_deref() == Some(name)
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn tracked(&self) -> &[TrackedQuest] {
        &self.tracked
    }

    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }
}
