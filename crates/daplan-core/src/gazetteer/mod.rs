//! The street/suffix/suburb/hundred lookup dictionaries used for address
//! normalization.
//!
//! Built once at startup from three flat text files and shared read-only
//! by every normalization call. All dictionaries preserve file order:
//! "first suburb" selection and fuzzy tie-breaks depend on it.

pub mod fuzzy;
pub mod normalize;

use crate::error::DaplanError;
use indexmap::{IndexMap, IndexSet};
use std::path::{Path, PathBuf};

/// Expansions applied to any suburb or hundred name with a `MOUNT `
/// prefix, so register spellings like `MT GAMBIER` and `MT. GAMBIER`
/// resolve too.
const MOUNT_ALIASES: [&str; 3] = ["MT ", "MT.", "MT. "];

#[derive(Debug, Default)]
pub struct Gazetteer {
    /// STREET NAME -> suburbs it runs through, in file order.
    streets: IndexMap<String, IndexSet<String>>,
    /// Suffix ABBREVIATION -> FULL SUFFIX (e.g. `ST` -> `STREET`).
    suffixes: IndexMap<String, String>,
    /// SUBURB NAME (and Mount aliases) -> canonical `SUBURB STATE POSTCODE`.
    suburbs: IndexMap<String, String>,
    /// HUNDRED NAME (and Mount aliases) -> suburbs within it.
    hundreds: IndexMap<String, IndexSet<String>>,
}

impl Gazetteer {
    /// Load `streetnames.txt`, `streetsuffixes.txt` and `suburbnames.txt`
    /// from a directory.
    pub fn load(dir: &Path) -> Result<Gazetteer, DaplanError> {
        let streets = read_file(dir.join("streetnames.txt"))?;
        let suffixes = read_file(dir.join("streetsuffixes.txt"))?;
        let suburbs = read_file(dir.join("suburbnames.txt"))?;
        Ok(Gazetteer::from_text(&streets, &suffixes, &suburbs))
    }

    /// Build from the three files' contents. Lookups are upper-cased, so
    /// every name is upper-cased on the way in; malformed lines are
    /// skipped with a warning.
    pub fn from_text(streets: &str, suffixes: &str, suburbs: &str) -> Gazetteer {
        let mut gazetteer = Gazetteer::default();

        // streetnames.txt: STREET_NAME,SUBURB_NAME (repeatable per street)
        for line in data_lines(streets) {
            let Some((street, suburb)) = line.split_once(',') else {
                log::warn!("skipping malformed street line: {line:?}");
                continue;
            };
            gazetteer
                .streets
                .entry(street.trim().to_uppercase())
                .or_default()
                .insert(suburb.trim().to_uppercase());
        }

        // streetsuffixes.txt: ABBREVIATION,FULL_SUFFIX
        for line in data_lines(suffixes) {
            let Some((abbreviation, full)) = line.split_once(',') else {
                log::warn!("skipping malformed suffix line: {line:?}");
                continue;
            };
            gazetteer.suffixes.insert(
                abbreviation.trim().to_uppercase(),
                full.trim().to_uppercase(),
            );
        }

        // suburbnames.txt: SUBURB_NAME,CANONICAL_STRING,HUNDRED[;HUNDRED...]
        for line in data_lines(suburbs) {
            let mut fields = line.splitn(3, ',');
            let (Some(suburb), Some(canonical)) = (fields.next(), fields.next()) else {
                log::warn!("skipping malformed suburb line: {line:?}");
                continue;
            };
            let suburb = suburb.trim().to_uppercase();
            let canonical = canonical.trim().to_uppercase();
            for alias in mount_aliases(&suburb) {
                gazetteer.suburbs.insert(alias, canonical.clone());
            }
            if let Some(hundreds) = fields.next() {
                for hundred in hundreds.split(';') {
                    let hundred = hundred.trim().to_uppercase();
                    if hundred.is_empty() {
                        continue;
                    }
                    for alias in mount_aliases(&hundred) {
                        gazetteer
                            .hundreds
                            .entry(alias)
                            .or_default()
                            .insert(suburb.clone());
                    }
                }
            }
        }

        gazetteer
    }

    pub fn street_suburbs(&self, street: &str) -> Option<&IndexSet<String>> {
        self.streets.get(street)
    }

    pub fn street_names(&self) -> impl Iterator<Item = &str> {
        self.streets.keys().map(String::as_str)
    }

    /// Expand a trailing street-suffix token: abbreviation to full form,
    /// or the token itself when it already is a full suffix (reverse
    /// lookup). `None` means the token is not a recognized suffix.
    pub fn expand_suffix(&self, token: &str) -> Option<&str> {
        if let Some(full) = self.suffixes.get(token) {
            return Some(full.as_str());
        }
        self.suffixes
            .values()
            .find(|full| full.as_str() == token)
            .map(String::as_str)
    }

    pub fn suffix_abbreviations(&self) -> impl Iterator<Item = &str> {
        self.suffixes.keys().map(String::as_str)
    }

    pub fn canonical_suburb(&self, suburb: &str) -> Option<&str> {
        self.suburbs.get(suburb).map(String::as_str)
    }

    pub fn suburb_names(&self) -> impl Iterator<Item = &str> {
        self.suburbs.keys().map(String::as_str)
    }

    pub fn hundred_suburbs(&self, hundred: &str) -> Option<&IndexSet<String>> {
        self.hundreds.get(hundred)
    }

    pub fn hundred_names(&self) -> impl Iterator<Item = &str> {
        self.hundreds.keys().map(String::as_str)
    }
}

fn read_file(path: PathBuf) -> Result<String, DaplanError> {
    std::fs::read_to_string(&path).map_err(|e| DaplanError::Gazetteer {
        path,
        reason: e.to_string(),
    })
}

fn data_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// A name plus its `MT ` spellings when it starts with `MOUNT `.
fn mount_aliases(name: &str) -> Vec<String> {
    let mut names = vec![name.to_string()];
    if let Some(rest) = name.strip_prefix("MOUNT ") {
        for prefix in MOUNT_ALIASES {
            names.push(format!("{prefix}{rest}"));
        }
    }
    names
}
