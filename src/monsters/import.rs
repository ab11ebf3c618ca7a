//! CSV bulk import for extending the monster pool.
//!
//! Rows are validated as a whole: one bad row fails the import and nothing
//! is returned, so a pool is only ever extended with a complete batch.

use super::types::Monster;
use crate::error::ImportError;
use crate::rules::ChallengeRating;
use std::fs;
use std::path::Path;

/// Example file showing the expected columns and separators.
pub const CSV_TEMPLATE: &str = "name,cr,type,tags,environments
Goblin,0.25,humanoid,\"nimble|pack\",\"forest|hills|caves|plains|coast|underdark|urban\"
";

/// Help text printed by `warband csv-template`.
pub fn csv_help() -> String {
    format!(
        "Extend the monster pool with a CSV file. Expected columns:\n\n  \
         name, cr, type, tags, environments\n\n\
         Use pipe separators inside fields, for example:\n\n{CSV_TEMPLATE}\n\
         Pass it to a build with: warband build --import my_monsters.csv\n\n\
         CR values can be integers (2), decimals (0.5) or fractions (1/2).\n\
         Tags and environments are optional, but help filtering.\n"
    )
}

/// Column positions resolved from the header row.
struct Columns {
    count: usize,
    name: usize,
    rating: usize,
    creature_type: Option<usize>,
    tags: Option<usize>,
    environments: Option<usize>,
}

impl Columns {
    fn from_header(fields: &[String]) -> Result<Self, ImportError> {
        let find = |column: &str| {
            fields
                .iter()
                .position(|f| f.trim().eq_ignore_ascii_case(column))
        };
        Ok(Self {
            count: fields.len(),
            name: find("name").ok_or(ImportError::MissingColumn("name"))?,
            rating: find("cr").ok_or(ImportError::MissingColumn("cr"))?,
            creature_type: find("type"),
            tags: find("tags"),
            environments: find("environments"),
        })
    }
}

/// Reads and parses a CSV file of monsters.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<Monster>, ImportError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let monsters = parse_csv(&text)?;
    tracing::debug!(count = monsters.len(), path = %path.display(), "imported monsters");
    Ok(monsters)
}

/// Parses CSV text with a header row into monsters.
pub fn parse_csv(text: &str) -> Result<Vec<Monster>, ImportError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_line, header) = lines.next().ok_or(ImportError::MissingHeader)?;
    let header = split_fields(header).map_err(|message| ImportError::Row {
        line: header_line,
        message,
    })?;
    let columns = Columns::from_header(&header)?;

    let mut monsters = Vec::new();
    for (line, raw) in lines {
        let fields = split_fields(raw).map_err(|message| ImportError::Row { line, message })?;
        monsters.push(parse_row(line, &fields, &columns)?);
    }
    Ok(monsters)
}

fn parse_row(line: usize, fields: &[String], columns: &Columns) -> Result<Monster, ImportError> {
    if fields.len() != columns.count {
        return Err(ImportError::Row {
            line,
            message: format!(
                "expected {} fields, found {}",
                columns.count,
                fields.len()
            ),
        });
    }

    let name = fields[columns.name].trim();
    if name.is_empty() {
        return Err(ImportError::Row {
            line,
            message: "missing name".to_string(),
        });
    }
    let rating: ChallengeRating = fields[columns.rating]
        .parse()
        .map_err(|source| ImportError::ChallengeRating { line, source })?;
    let creature_type = columns
        .creature_type
        .map(|i| fields[i].trim())
        .unwrap_or_default();
    let tags = columns
        .tags
        .map(|i| split_list(&fields[i]))
        .unwrap_or_default();
    let environments = columns
        .environments
        .map(|i| split_list(&fields[i]))
        .unwrap_or_default();

    Ok(Monster::new(name, rating, creature_type, tags, environments))
}

/// Splits a pipe-delimited list, dropping blank entries.
fn split_list(field: &str) -> Vec<String> {
    field
        .split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits one CSV line. Quoted fields may contain commas and `""` escapes.
fn split_fields(line: &str) -> Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            ('"', true) => in_quotes = false,
            ('"', false) if current.trim().is_empty() => {
                current.clear();
                in_quotes = true;
            }
            (',', false) => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    if in_quotes {
        return Err("unterminated quoted field".to_string());
    }
    fields.push(current);
    Ok(fields)
}
