use comfy_table::{presets::UTF8_FULL, Table};
use prizedraw_core::{DrawConfig, Participant, PrizeTable, Result, ShortfallPolicy};

/// Show the prize layout for `pool`. A short pool is reported, never rejected.
pub fn handle_check_command(config: &DrawConfig, pool: &[Participant]) -> Result<()> {
    config.validate()?;
    let prizes = PrizeTable::from_bands(&config.ranked_bands)?;

    println!("Participants: {}", config.participants_path.display());
    println!("Draw log: {}", config.log_path.display());
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Positions", "Prize", "Slots"]);
    for (range, prize) in prizes.ranges() {
        table.add_row(vec![
            format!("{}-{}", range.start + 1, range.end),
            prize.label(),
            range.len().to_string(),
        ]);
    }
    let ranked = prizes.total();
    for (i, winner) in config.grand_winners.iter().enumerate() {
        let position = ranked + i + 1;
        table.add_row(vec![
            position.to_string(),
            format!("{} ({}, {})", winner.prize.label(), winner.name, winner.identity_code),
            "1".to_string(),
        ]);
    }
    println!("{}", table);

    println!("Pool size: {}", pool.len());
    println!("Ranked slots: {}", ranked);
    println!("Grand winners: {}", config.grand_winners.len());
    match sequence_length(config, &prizes, pool.len()) {
        Some(len) => println!("Sequence length: {}", len),
        None => println!("Sequence length: none"),
    }

    if let Some(warning) = shortfall_warning(config.shortfall, ranked, pool.len()) {
        println!("Warning: {}", warning);
    }

    Ok(())
}

/// Length of the draw the pool would produce, `None` if it would be refused
fn sequence_length(config: &DrawConfig, prizes: &PrizeTable, pool: usize) -> Option<usize> {
    let ranked = prizes.total();
    if pool < ranked && config.shortfall == ShortfallPolicy::Fail {
        return None;
    }
    Some(ranked.min(pool) + config.grand_winners.len())
}

fn shortfall_warning(policy: ShortfallPolicy, ranked: usize, pool: usize) -> Option<String> {
    if pool >= ranked {
        return None;
    }
    let action = match policy {
        ShortfallPolicy::Truncate => "only the first slots will be drawn",
        ShortfallPolicy::Fail => "the draw will refuse to start",
    };
    Some(format!(
        "pool is {} short of the ranked slots; {}",
        ranked - pool,
        action
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(size: usize) -> Vec<Participant> {
        (0..size)
            .map(|i| Participant::new(&format!("Person {}", i), &format!("ID{:03}", i)))
            .collect()
    }

    #[test]
    fn test_check_reports_short_pool_under_fail_policy() {
        let mut config = DrawConfig::default();
        config.shortfall = ShortfallPolicy::Fail;
        let prizes = PrizeTable::from_bands(&config.ranked_bands).unwrap();

        handle_check_command(&config, &pool(10)).unwrap();
        assert_eq!(sequence_length(&config, &prizes, 10), None);
        assert_eq!(
            shortfall_warning(config.shortfall, 42, 10).unwrap(),
            "pool is 32 short of the ranked slots; the draw will refuse to start"
        );
    }

    #[test]
    fn test_sequence_length_under_truncate() {
        let config = DrawConfig::default();
        let prizes = PrizeTable::from_bands(&config.ranked_bands).unwrap();

        assert_eq!(sequence_length(&config, &prizes, 10), Some(13));
        assert_eq!(sequence_length(&config, &prizes, 50), Some(45));
        assert!(shortfall_warning(config.shortfall, 42, 50).is_none());
        assert!(shortfall_warning(config.shortfall, 42, 10)
            .unwrap()
            .ends_with("only the first slots will be drawn"));
    }
}
