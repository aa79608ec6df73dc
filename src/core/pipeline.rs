use crate::core::normalize::{clean_number, parse_count, parse_percent, parse_revenue};
use crate::core::{ConfigProvider, Pipeline, RawRow, Storage, TransformResult};
use crate::domain::model::{Actor, ActorDocument, CategoryCounts, Metadata};
use crate::utils::error::Result;
use chrono::Utc;
use std::path::Path;

/// Rows with fewer fields than this carry no usable actor data.
const MIN_FIELDS: usize = 6;

/// How many categories the run summary lists.
const TOP_CATEGORIES: usize = 5;

/// Reads a positional CSV table of commercial actors, normalizes the
/// locale-formatted numeric columns and writes one JSON document per run.
///
/// Column order: rank, navn, type, adresse, kommune, omsetning,
/// kjedeProsent, yoyVekst, ansatteLokalt, ansatteKjede, kjedeLokasjoner,
/// markedsandel. Trailing columns may be missing.
pub struct ActorCsvPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ActorCsvPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ActorCsvPipeline<S, C> {
    fn extract(&self) -> Result<Vec<RawRow>> {
        tracing::debug!("Reading input table from: {}", self.config.input_path());
        let data = self.storage.read_file(self.config.input_path())?;

        // No header row in these exports; quoted fields may span lines.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(data.as_slice());

        let mut rows = Vec::new();
        for (position, record) in reader.records().enumerate() {
            let record = record?;

            if record.len() < MIN_FIELDS {
                tracing::debug!(
                    "Skipping row {}: {} fields, need at least {}",
                    position + 1,
                    record.len(),
                    MIN_FIELDS
                );
                continue;
            }

            rows.push(RawRow::new(record.iter().map(str::to_string).collect()));
        }

        Ok(rows)
    }

    fn transform(&self, rows: Vec<RawRow>) -> Result<TransformResult> {
        let mut actors = Vec::new();
        let mut categories = CategoryCounts::new();

        for (position, row) in rows.into_iter().enumerate() {
            let navn = row.field(1).trim();
            if navn.is_empty() {
                tracing::debug!("Skipping row {}: no actor name", position + 1);
                continue;
            }

            let actor = Actor {
                rank: row.field(0).trim().to_string(),
                navn: navn.to_string(),
                actor_type: row.field(2).trim().to_string(),
                adresse: row.field(3).trim().to_string(),
                kommune: row.field(4).trim().to_string(),
                omsetning: parse_revenue(row.field(5)),
                kjede_prosent: parse_percent(row.field(6)),
                yoy_vekst: clean_number(row.field(7)),
                ansatte_lokalt: parse_count(row.field(8)),
                ansatte_kjede: parse_count(row.field(9)),
                kjede_lokasjoner: parse_count(row.field(10)),
                markedsandel: clean_number(row.field(11)),
            };

            if !actor.actor_type.is_empty() {
                categories.record(&actor.actor_type);
            }

            actors.push(actor);
        }

        Ok(TransformResult { actors, categories })
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        let output_path = self.config.output_path().to_string();

        let eiendom_id = Path::new(&output_path)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        let metadata = Metadata {
            total_actors: result.actors.len(),
            categories: result.categories.len(),
            generated_date: Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            source: format!("Place Analysis CSV - {}", self.config.input_path()),
        };

        let document = ActorDocument {
            eiendom_id,
            actors: result.actors,
            category_stats: result.categories,
            metadata,
        };

        let json = serde_json::to_string_pretty(&document)?;
        tracing::debug!("Writing document ({} bytes) to {}", json.len(), output_path);
        self.storage.write_file(&output_path, json.as_bytes())?;

        print_summary(&document, &output_path);

        Ok(output_path)
    }
}

fn print_summary(document: &ActorDocument, output_path: &str) {
    println!("✓ Processed {} actors", document.metadata.total_actors);
    println!("✓ Found {} categories", document.metadata.categories);
    println!("✓ Output written to {}", output_path);

    if !document.category_stats.is_empty() {
        println!("\nTop categories:");
        for (category, count) in document.category_stats.top(TOP_CATEGORIES) {
            println!("  - {}: {} actors", category, count);
        }
    }
}
