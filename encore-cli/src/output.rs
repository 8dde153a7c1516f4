/// Output formatting: terminal table and JSON.
use encore_core::Rating;
use serde::Serialize;

#[derive(Serialize)]
struct JsonRankedItem {
    rank: usize,
    name: String,
    rating: f64,
    comparisons: u32,
}

#[derive(Serialize)]
struct JsonOutput {
    items: Vec<JsonRankedItem>,
    decided: usize,
    skipped: usize,
    complete: bool,
}

/// Print standings as a formatted terminal table.
pub fn print_table(
    standings: &[(i64, Rating)],
    names: &[String],
    decided: usize,
    skipped: usize,
    complete: bool,
) {
    // Find the widest item name for padding
    let name_width = standings
        .iter()
        .map(|(id, _)| names[*id as usize].len())
        .max()
        .unwrap_or(4)
        .max(4); // at least "Show"

    // Header
    println!(" # | {:<name_width$} | Rating | Comparisons", "Show");
    println!("---|-{}-|--------|------------", "-".repeat(name_width));

    // Rows
    for (i, (id, rating)) in standings.iter().enumerate() {
        let name = &names[*id as usize];
        println!(
            "{:>2} | {:<name_width$} | {:>6} | {:>11}",
            i + 1,
            name,
            rating.score,
            rating.games,
        );
    }

    println!(
        "\n{} shows ranked ({} decided, {} skipped){}",
        standings.len(),
        decided,
        skipped,
        if complete { " — pool fully ranked" } else { "" },
    );
}

/// Print standings as JSON.
pub fn print_json(
    standings: &[(i64, Rating)],
    names: &[String],
    decided: usize,
    skipped: usize,
    complete: bool,
) {
    let items: Vec<JsonRankedItem> = standings
        .iter()
        .enumerate()
        .map(|(i, (id, rating))| JsonRankedItem {
            rank: i + 1,
            name: names[*id as usize].clone(),
            rating: rating.score,
            comparisons: rating.games,
        })
        .collect();

    let output = JsonOutput {
        items,
        decided,
        skipped,
        complete,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
