use crate::core::controller::SearchState;
use crate::domain::model::{DifficultyBand, KeywordRecord};
use crate::utils::error::{KeywordError, Result};
use crate::utils::format::format_volume;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::{Deserialize, Serialize};

pub const LOADING_TEXT: &str = "Recherche...";
pub const NOT_SEARCHED_TEXT: &str =
    "Prêt à trouver des mots-clés ? Lancez une recherche pour voir les résultats s'afficher ici.";
pub const EMPTY_TEXT: &str =
    "Aucun résultat. Aucun mot-clé trouvé pour votre recherche. Essayez un autre terme.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// What to show for a given state. Exactly one applies, checked in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    Loading,
    Error(&'a str),
    NotSearched,
    Empty,
    Results(&'a [KeywordRecord]),
}

impl<'a> View<'a> {
    pub fn from_state(state: &'a SearchState) -> Self {
        if state.is_loading {
            View::Loading
        } else if let Some(error) = state.error.as_deref() {
            View::Error(error)
        } else if !state.has_searched {
            View::NotSearched
        } else if state.results.is_empty() {
            View::Empty
        } else {
            View::Results(&state.results)
        }
    }
}

#[derive(Serialize)]
struct ExportRow<'a> {
    keyword: &'a str,
    volume: u64,
    difficulty: u8,
    level: &'static str,
    band: &'static str,
}

impl<'a> From<&'a KeywordRecord> for ExportRow<'a> {
    fn from(record: &'a KeywordRecord) -> Self {
        Self {
            keyword: &record.keyword,
            volume: record.volume,
            difficulty: record.difficulty,
            level: record.level().as_str(),
            band: record.band().as_str(),
        }
    }
}

pub fn render(view: &View<'_>, format: OutputFormat, color: bool) -> Result<String> {
    match view {
        View::Loading => Ok(LOADING_TEXT.to_string()),
        View::Error(message) => Ok(message.to_string()),
        View::NotSearched => Ok(NOT_SEARCHED_TEXT.to_string()),
        View::Empty => match format {
            OutputFormat::Table => Ok(EMPTY_TEXT.to_string()),
            OutputFormat::Json => Ok("[]".to_string()),
            OutputFormat::Csv => render_csv(&[]),
        },
        View::Results(records) => match format {
            OutputFormat::Table => Ok(render_table(records, color)),
            OutputFormat::Json => render_json(records),
            OutputFormat::Csv => render_csv(records),
        },
    }
}

fn band_color(band: DifficultyBand) -> Color {
    match band {
        DifficultyBand::Green => Color::Green,
        DifficultyBand::Yellow => Color::Yellow,
        DifficultyBand::Orange => Color::Rgb {
            r: 255,
            g: 140,
            b: 0,
        },
        DifficultyBand::Red => Color::Red,
    }
}

fn render_table(records: &[KeywordRecord], color: bool) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Mot-clé", "Volume mensuel", "Difficulté (KD)", ""]);

    for record in records {
        table.add_row(vec![
            Cell::new(&record.keyword),
            Cell::new(format_volume(record.volume)).set_alignment(CellAlignment::Right),
            Cell::new(record.difficulty).set_alignment(CellAlignment::Right),
            Cell::new(record.level().label()).fg(band_color(record.band())),
        ]);
    }

    if !color {
        table.force_no_tty();
    }
    table.to_string()
}

fn render_json(records: &[KeywordRecord]) -> Result<String> {
    let rows: Vec<ExportRow<'_>> = records.iter().map(ExportRow::from).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

fn render_csv(records: &[KeywordRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if records.is_empty() {
        writer.write_record(["keyword", "volume", "difficulty", "level", "band"])?;
    }
    for record in records {
        writer.serialize(ExportRow::from(record))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| KeywordError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
