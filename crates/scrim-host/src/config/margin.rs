use serde::{Deserialize, Serialize};

/// Distance in pixels kept from each anchored edge. Missing edges are 0.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Margin {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl From<(i32, i32, i32, i32)> for Margin {
    fn from((top, right, bottom, left): (i32, i32, i32, i32)) -> Self {
        Self { top, right, bottom, left }
    }
}

impl From<Margin> for (i32, i32, i32, i32) {
    fn from(m: Margin) -> Self {
        (m.top, m.right, m.bottom, m.left)
    }
}
