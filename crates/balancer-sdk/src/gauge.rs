//! Networks a liquidity gauge can live on.

/// The numeric values are those stored by the gauge controller and must not be
/// renumbered.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum::Display, strum::EnumIter)]
#[repr(u8)]
pub enum GaugeType {
    Ethereum = 0,
    Polygon = 1,
    Arbitrum = 2,
    Optimism = 3,
    Gnosis = 4,
    Avalanche = 5,
    PolygonZkEvm = 6,
    ZkSync = 7,
}

impl From<GaugeType> for u8 {
    fn from(value: GaugeType) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for GaugeType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use strum::IntoEnumIterator;

        Self::iter().find(|kind| *kind as u8 == value).ok_or(value)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, strum::IntoEnumIterator};

    #[test]
    fn discriminants_are_contiguous() {
        for (index, kind) in GaugeType::iter().enumerate() {
            assert_eq!(usize::from(u8::from(kind)), index);
            assert_eq!(GaugeType::try_from(u8::from(kind)), Ok(kind));
        }
        assert_eq!(GaugeType::ZkSync as u8, 7);
        assert_eq!(GaugeType::try_from(8), Err(8));
    }
}
