use core::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Surface edge a window can be pinned to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Set of edges the window anchors to.
///
/// Bit values match the layer-shell protocol: TOP=1, BOTTOM=2, LEFT=4,
/// RIGHT=8. Serialized as the plain integer.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Anchor(u8);

impl Anchor {
    pub const NONE: Anchor = Anchor(0);
    pub const TOP: Anchor = Anchor(1);
    pub const BOTTOM: Anchor = Anchor(2);
    pub const LEFT: Anchor = Anchor(4);
    pub const RIGHT: Anchor = Anchor(8);
    pub const ALL: Anchor = Anchor(15);

    const EDGES: [(Anchor, Edge); 4] = [
        (Anchor::TOP, Edge::Top),
        (Anchor::BOTTOM, Edge::Bottom),
        (Anchor::LEFT, Edge::Left),
        (Anchor::RIGHT, Edge::Right),
    ];

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0 as u32
    }

    /// `None` when `bits` has anything outside the four edge bits.
    #[inline]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        if bits & !Self::ALL.bits() != 0 {
            None
        } else {
            Some(Self(bits as u8))
        }
    }

    #[inline]
    pub const fn contains(self, other: Anchor) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Decodes the set into its edges, in TOP, BOTTOM, LEFT, RIGHT order.
    pub fn edges(self) -> Vec<Edge> {
        Self::EDGES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|&(_, edge)| edge)
            .collect()
    }
}

impl From<Edge> for Anchor {
    fn from(edge: Edge) -> Self {
        match edge {
            Edge::Top => Anchor::TOP,
            Edge::Bottom => Anchor::BOTTOM,
            Edge::Left => Anchor::LEFT,
            Edge::Right => Anchor::RIGHT,
        }
    }
}

impl BitOr for Anchor {
    type Output = Anchor;
    #[inline]
    fn bitor(self, rhs: Anchor) -> Anchor {
        Anchor(self.0 | rhs.0)
    }
}

impl BitOrAssign for Anchor {
    #[inline]
    fn bitor_assign(&mut self, rhs: Anchor) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<Anchor> for Anchor {
    fn from_iter<I: IntoIterator<Item = Anchor>>(iter: I) -> Self {
        iter.into_iter().fold(Anchor::NONE, BitOr::bitor)
    }
}

impl TryFrom<u32> for Anchor {
    type Error = ConfigError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Anchor::from_bits(bits).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "anchor {bits} has bits outside TOP|BOTTOM|LEFT|RIGHT (1|2|4|8)"
            ))
        })
    }
}

impl From<Anchor> for u32 {
    #[inline]
    fn from(a: Anchor) -> Self {
        a.bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_or_left_is_five_and_decodes_back() {
        let a = Anchor::TOP | Anchor::LEFT;
        assert_eq!(a.bits(), 5);
        assert_eq!(Anchor::from_bits(5).unwrap().edges(), vec![Edge::Top, Edge::Left]);
    }

    #[test]
    fn collect_unions_flags() {
        let a: Anchor = [Anchor::BOTTOM, Anchor::RIGHT, Anchor::BOTTOM].into_iter().collect();
        assert_eq!(a.bits(), 10);
        assert!(a.contains(Anchor::RIGHT));
        assert!(!a.contains(Anchor::TOP));
    }

    #[test]
    fn every_value_in_range_round_trips() {
        for bits in 0..=15 {
            let a = Anchor::from_bits(bits).unwrap();
            let rebuilt: Anchor = a.edges().into_iter().map(Anchor::from).collect();
            assert_eq!(rebuilt, a);
        }
    }

    #[test]
    fn out_of_range_bits_are_rejected() {
        assert!(Anchor::from_bits(16).is_none());
        assert!(matches!(Anchor::try_from(17), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn empty_anchor_has_no_edges() {
        assert!(Anchor::NONE.is_empty());
        assert!(Anchor::NONE.edges().is_empty());
    }
}
