use super::bands::PrizeTable;
use crate::config::ShortfallPolicy;
use crate::error::{DrawError, Result};
use crate::types::{DrawEntry, Participant};
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Full ordered draw: shuffled ranked slots followed by the grand winners
#[derive(Debug, Clone)]
pub struct DrawSequence {
    id: Uuid,
    entries: Vec<DrawEntry>,
    ranked_count: usize,
    generated_at: DateTime<Utc>,
}

impl DrawSequence {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn entries(&self) -> &[DrawEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&DrawEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ranked_count(&self) -> usize {
        self.ranked_count
    }

    pub fn grand_winners(&self) -> &[DrawEntry] {
        &self.entries[self.ranked_count..]
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Hex SHA-256 over every position; fixed once the sequence exists
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for (i, entry) in self.entries.iter().enumerate() {
            hasher.update(
                format!(
                    "{}|{}|{}|{}\n",
                    i + 1,
                    entry.name,
                    entry.identity_code,
                    entry.prize
                )
                .as_bytes(),
            );
        }
        hex::encode(hasher.finalize())
    }
}

/// Generate a sequence with the thread-local RNG
pub fn generate(
    pool: &[Participant],
    prizes: &PrizeTable,
    grand_winners: &[DrawEntry],
    policy: ShortfallPolicy,
) -> Result<DrawSequence> {
    generate_with_rng(pool, prizes, grand_winners, policy, &mut rand::thread_rng())
}

pub fn generate_with_rng<R: Rng + ?Sized>(
    pool: &[Participant],
    prizes: &PrizeTable,
    grand_winners: &[DrawEntry],
    policy: ShortfallPolicy,
    rng: &mut R,
) -> Result<DrawSequence> {
    let need = prizes.total();
    if pool.len() < need {
        match policy {
            ShortfallPolicy::Fail => {
                return Err(DrawError::InsufficientPool {
                    need,
                    available: pool.len(),
                });
            }
            ShortfallPolicy::Truncate => {
                tracing::warn!(
                    "Pool has {} participants for {} ranked slots; only {} will be drawn",
                    pool.len(),
                    need,
                    pool.len()
                );
            }
        }
    }

    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(need);

    let mut entries = Vec::with_capacity(shuffled.len() + grand_winners.len());
    for (slot, participant) in shuffled.into_iter().enumerate() {
        let prize = prizes
            .prize_for(slot)
            .ok_or_else(|| DrawError::internal(format!("No prize band for slot {}", slot)))?;
        entries.push(participant.with_prize(prize.clone()));
    }
    let ranked_count = entries.len();
    entries.extend(grand_winners.iter().cloned());

    let sequence = DrawSequence {
        id: Uuid::new_v4(),
        entries,
        ranked_count,
        generated_at: Utc::now(),
    };

    tracing::info!(
        "Generated draw sequence {} with {} entries ({} ranked, {} grand), fingerprint {}",
        sequence.id,
        sequence.len(),
        ranked_count,
        grand_winners.len(),
        sequence.fingerprint()
    );

    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DrawConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn pool(size: usize) -> Vec<Participant> {
        (0..size)
            .map(|i| Participant::new(&format!("Person {}", i), &format!("ID{:03}", i)))
            .collect()
    }

    fn default_table() -> (PrizeTable, Vec<DrawEntry>) {
        let config = DrawConfig::default();
        (
            PrizeTable::from_bands(&config.ranked_bands).unwrap(),
            config.grand_winners,
        )
    }

    #[test]
    fn test_sequence_length_and_grand_winners() {
        let (table, grand) = default_table();
        let pool = pool(50);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let sequence =
                generate_with_rng(&pool, &table, &grand, ShortfallPolicy::Truncate, &mut rng)
                    .unwrap();
            assert_eq!(sequence.len(), 45);
            assert_eq!(sequence.ranked_count(), 42);
            assert_eq!(sequence.grand_winners(), grand.as_slice());
            assert_eq!(sequence.get(0).unwrap().prize.as_str(), "silver_coin");
            assert_eq!(sequence.get(41).unwrap().prize.as_str(), "refrigerator");
        }
    }

    #[test]
    fn test_ranked_entries_are_distinct_pool_members() {
        let (table, grand) = default_table();
        let pool = pool(50);
        let sequence = generate(&pool, &table, &grand, ShortfallPolicy::Truncate).unwrap();

        let keys: HashSet<_> = sequence.entries()[..42]
            .iter()
            .map(|e| e.identity_code.clone())
            .collect();
        assert_eq!(keys.len(), 42);
        assert!(keys
            .iter()
            .all(|code| pool.iter().any(|p| &p.identity_code == code)));

        for (slot, entry) in sequence.entries()[..42].iter().enumerate() {
            assert_eq!(Some(&entry.prize), table.prize_for(slot));
        }
    }

    #[test]
    fn test_shuffle_varies_between_calls() {
        let (table, grand) = default_table();
        let pool = pool(50);
        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(2);

        let a = generate_with_rng(&pool, &table, &grand, ShortfallPolicy::Truncate, &mut rng_a)
            .unwrap();
        let b = generate_with_rng(&pool, &table, &grand, ShortfallPolicy::Truncate, &mut rng_b)
            .unwrap();

        assert_ne!(a.entries(), b.entries());
        assert_ne!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_shortfall_policies() {
        let (table, grand) = default_table();
        let small = pool(12);

        let sequence = generate(&small, &table, &grand, ShortfallPolicy::Truncate).unwrap();
        assert_eq!(sequence.len(), 15);
        assert_eq!(sequence.ranked_count(), 12);
        assert_eq!(sequence.get(11).unwrap().prize.as_str(), "dinner_set");
        assert_eq!(sequence.grand_winners(), grand.as_slice());

        match generate(&small, &table, &grand, ShortfallPolicy::Fail) {
            Err(DrawError::InsufficientPool { need, available }) => {
                assert_eq!(need, 42);
                assert_eq!(available, 12);
            }
            other => panic!("expected insufficient pool, got {:?}", other),
        }
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let (table, grand) = default_table();
        let sequence = generate(&pool(45), &table, &grand, ShortfallPolicy::Truncate).unwrap();
        assert_eq!(sequence.fingerprint(), sequence.fingerprint());
        assert_eq!(sequence.fingerprint().len(), 64);
    }
}
