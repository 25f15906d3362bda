//! Batted-ball locations from `inning/inning_hit.xml`.

use std::collections::HashMap;

use super::error::GamedayError;
use super::xml::Node;

/// Field coordinates of a batted ball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitLocation {
    pub x: f64,
    pub y: f64,
}

/// `<hip>` entries keyed by (inning, pitcher id, batter id).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HitChart {
    hits: HashMap<(u32, String, String), HitLocation>,
}

impl HitChart {
    pub fn parse(xml: &str) -> Result<Self, GamedayError> {
        let root = Node::parse_document("inning_hit.xml", xml)?;
        Ok(Self::from_node(&root))
    }

    /// Entries without an inning or coordinates are skipped. A later entry
    /// for the same key replaces an earlier one.
    pub fn from_node(root: &Node) -> Self {
        let mut hits = HashMap::new();
        let entries = std::iter::once(root)
            .filter(|n| n.name == "hip")
            .chain(root.find_all("hip"));
        for hip in entries {
            let (Some(inning), Some(x), Some(y)) = (
                hip.parse_attr::<u32>("inning"),
                hip.parse_attr::<f64>("x"),
                hip.parse_attr::<f64>("y"),
            ) else {
                continue;
            };
            let key = (
                inning,
                hip.attr_or("pitcher", "").to_string(),
                hip.attr_or("batter", "").to_string(),
            );
            hits.insert(key, HitLocation { x, y });
        }
        Self { hits }
    }

    pub fn location(&self, inning: u32, pitcher: &str, batter: &str) -> Option<HitLocation> {
        self.hits
            .get(&(inning, pitcher.to_string(), batter.to_string()))
            .copied()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.hits.len()
    }
}
