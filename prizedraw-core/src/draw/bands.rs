use crate::config::PrizeBand;
use crate::error::{DrawError, Result};
use crate::types::PrizeTag;

/// Prize lookup over ranked slots.
///
/// Stores the exclusive end offset of every band (prefix sums of the band
/// sizes), so slot `i` belongs to the first band whose end is greater than `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrizeTable {
    ends: Vec<usize>,
    prizes: Vec<PrizeTag>,
}

impl PrizeTable {
    pub fn from_bands(bands: &[PrizeBand]) -> Result<Self> {
        let mut ends = Vec::with_capacity(bands.len());
        let mut prizes = Vec::with_capacity(bands.len());
        let mut offset = 0usize;

        for band in bands {
            if band.count == 0 {
                return Err(DrawError::config(format!(
                    "Prize band '{}' has no slots",
                    band.prize
                )));
            }
            offset += band.count;
            ends.push(offset);
            prizes.push(band.prize.clone());
        }

        Ok(Self { ends, prizes })
    }

    /// Number of ranked slots covered by all bands
    pub fn total(&self) -> usize {
        self.ends.last().copied().unwrap_or(0)
    }

    pub fn prize_for(&self, slot: usize) -> Option<&PrizeTag> {
        let band = self.ends.partition_point(|&end| end <= slot);
        self.prizes.get(band)
    }

    /// Half-open slot range of each band, in order
    pub fn ranges(&self) -> impl Iterator<Item = (std::ops::Range<usize>, &PrizeTag)> + '_ {
        let starts = std::iter::once(0).chain(self.ends.iter().copied());
        starts
            .zip(self.ends.iter().copied())
            .map(|(start, end)| start..end)
            .zip(self.prizes.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DrawConfig;

    #[test]
    fn test_bands_partition_slots() {
        let table = PrizeTable::from_bands(&DrawConfig::default().ranked_bands).unwrap();
        assert_eq!(table.total(), 42);

        let mut covered = vec![0u8; table.total()];
        for (range, prize) in table.ranges() {
            for slot in range {
                covered[slot] += 1;
                assert_eq!(table.prize_for(slot), Some(prize));
            }
        }
        assert!(covered.iter().all(|&hits| hits == 1));
    }

    #[test]
    fn test_band_boundaries() {
        let table = PrizeTable::from_bands(&DrawConfig::default().ranked_bands).unwrap();
        assert_eq!(table.prize_for(0).unwrap().as_str(), "silver_coin");
        assert_eq!(table.prize_for(9).unwrap().as_str(), "silver_coin");
        assert_eq!(table.prize_for(10).unwrap().as_str(), "dinner_set");
        assert_eq!(table.prize_for(17).unwrap().as_str(), "dinner_set");
        assert_eq!(table.prize_for(18).unwrap().as_str(), "microwave");
        assert_eq!(table.prize_for(26).unwrap().as_str(), "washing_machine");
        assert_eq!(table.prize_for(32).unwrap().as_str(), "led_tv");
        assert_eq!(table.prize_for(41).unwrap().as_str(), "refrigerator");
        assert_eq!(table.prize_for(42), None);
    }

    #[test]
    fn test_zero_band_rejected() {
        let bands = vec![PrizeBand::new(3, "mug"), PrizeBand::new(0, "pen")];
        assert!(PrizeTable::from_bands(&bands).is_err());
    }
}
