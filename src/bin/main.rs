use crossterm::style::Stylize;
use shloka_core::audio::AudioIndex;
use shloka_core::core::engine::DEFAULT_RESULT_LIMIT;
use shloka_core::persistence::{load_catalog_json, load_snapshot, save_snapshot, CatalogError};
use shloka_core::{Catalog, SearchEngine, SearchResult};
use std::io::{stdin, stdout, Write};
use std::path::Path;

const CATALOG_JSON_PATH: &str = "data/shloka_catalog.json";
const SNAPSHOT_PATH: &str = "data/shloka_catalog.bin";
const SHOWN: usize = 10;

fn main() {
    let json_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| CATALOG_JSON_PATH.to_string());

    let catalog = match load_catalog(Path::new(&json_path)) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("could not load catalog from '{}': {}", json_path, e);
            std::process::exit(1);
        }
    };

    // Audio mappings are optional; an empty index just means no
    // recordings are offered in the detail view.
    let audio = AudioIndex::new();
    let engine = SearchEngine::new(catalog);

    println!("{}", "श्लोक खोज — Shloka Search".bold().dark_yellow());
    println!(
        "Searching {} shlokas. Type the opening words in Devanagari or English.",
        engine.total_count()
    );
    println!("Select a result with :1, :2, ... 'exit' to quit.\n");

    let mut last_results: Vec<SearchResult> = Vec::new();

    loop {
        print!("{} ", ">".dark_yellow());
        let _ = stdout().flush();

        let mut input = String::new();
        if stdin().read_line(&mut input).is_err() {
            break;
        }
        let line = input.trim();

        match line {
            "exit" => break,
            "" => continue,
            s if s.starts_with(':') => {
                let selection = s[1..].parse::<usize>().ok();
                match selection
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| last_results.get(i))
                {
                    Some(result) => print_detail(&engine, &audio, result.index),
                    None => println!("{}", "No such result.".dim()),
                }
            }
            query => {
                let preview = engine.preview(query);
                if !preview.is_empty() {
                    println!("  {} {}", "देवनागरी:".dim(), preview.clone().dark_yellow());
                }

                last_results = engine.search(query, DEFAULT_RESULT_LIMIT);
                if last_results.is_empty() {
                    println!("{}", "No matching shlokas.".dim());
                    continue;
                }

                for (i, result) in last_results.iter().take(SHOWN).enumerate() {
                    let first_line = result.text.lines().next().unwrap_or("");
                    println!(
                        "  {} {}  {}",
                        format!(":{}", i + 1).bold(),
                        first_line,
                        format!("[अगला: {}]", result.next_char).dim()
                    );
                }
                if last_results.len() > SHOWN {
                    println!("  ... and {} more", last_results.len() - SHOWN);
                }
            }
        }
    }
}

/// Loads the bincode snapshot when one exists, otherwise parses the
/// JSON catalog and leaves a snapshot behind for the next start.
fn load_catalog(json_path: &Path) -> Result<Catalog, CatalogError> {
    let snapshot_path = Path::new(SNAPSHOT_PATH);
    if let Ok(catalog) = load_snapshot(snapshot_path) {
        return Ok(catalog);
    }

    let catalog = load_catalog_json(json_path)?;
    if let Err(e) = save_snapshot(&catalog, snapshot_path) {
        eprintln!("warning: could not write catalog snapshot: {}", e);
    }
    Ok(catalog)
}

fn print_detail(engine: &SearchEngine, audio: &AudioIndex, index: usize) {
    // Hydrate through the accessor so the detail view shows exactly
    // what any other caller would get for this index.
    let Some(detail) = engine.get_by_index(index) else {
        println!("{}", "No such result.".dim());
        return;
    };

    println!("\n{}", "पूर्ण श्लोक".bold().dark_yellow());
    println!("{}\n", detail.text);
    println!("अगला अक्षर: {}", detail.next_char.clone().bold());
    println!("स्थिति: #{} / {}", detail.index + 1, engine.total_count());
    if let Some(url) = audio.url_for(&detail.text) {
        println!("Audio: {}", url);
    }
    println!();
}
