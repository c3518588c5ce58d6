use comfy_table::{presets::UTF8_FULL, Table};
use prizedraw_core::{DrawService, Result};

/// Print one freshly shuffled sequence. Nothing is logged or served.
pub fn handle_preview_command(service: &DrawService, limit: Option<usize>) -> Result<()> {
    let sequence = service.generate_sequence()?;
    let shown = limit.unwrap_or(sequence.len()).min(sequence.len());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Name", "URC", "Prize"]);
    for (i, entry) in sequence.entries().iter().take(shown).enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            entry.name.clone(),
            entry.identity_code.clone(),
            entry.prize.label(),
        ]);
    }

    println!("Preview of sequence {}", sequence.id());
    println!("{}", table);
    if shown < sequence.len() {
        println!("... {} more entries", sequence.len() - shown);
    }
    println!("Fingerprint: {}", sequence.fingerprint());

    Ok(())
}
