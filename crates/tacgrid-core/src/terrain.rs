//! Terrain tags and their static attributes.
//!
//! A [`TerrainTable`] maps the tags found in level data (`"default"`,
//! `"water"`, `"mud"`, ...) to a [`TerrainKind`] and its [`TerrainDef`].
//! The table is configuration: the standard one covers the stock tags, and
//! games can extend it with [`TerrainTable::insert`] or, with the `serde`
//! feature, load it from data.

use std::collections::HashMap;
use std::fmt;

/// Name of the terrain every table must define.
pub const DEFAULT_TERRAIN: &str = "default";

/// Index of a terrain definition inside its [`TerrainTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TerrainKind(pub u16);

impl TerrainKind {
    /// The `default` terrain. Always present, in every table.
    pub const DEFAULT: Self = Self(0);
    /// `water` in [`TerrainTable::standard`].
    pub const WATER: Self = Self(1);
    /// `mud` in [`TerrainTable::standard`].
    pub const MUD: Self = Self(2);

    /// Position of the definition in the table.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Static attributes of one terrain type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainDef {
    pub name: String,
    /// Cost of entering a tile of this terrain on foot. Must be > 0.
    pub walk_penalty: i32,
    /// Additional tags that resolve to this terrain.
    #[cfg_attr(feature = "serde", serde(default))]
    pub aliases: Vec<String>,
}

impl TerrainDef {
    /// Create a definition without aliases.
    pub fn new(name: impl Into<String>, walk_penalty: i32) -> Self {
        Self {
            name: name.into(),
            walk_penalty,
            aliases: Vec::new(),
        }
    }

    /// Add an alias tag.
    pub fn alias(mut self, tag: impl Into<String>) -> Self {
        self.aliases.push(tag.into());
        self
    }
}

/// Lookup from terrain tag to [`TerrainKind`] and attributes.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<TerrainDef>", into = "Vec<TerrainDef>")
)]
pub struct TerrainTable {
    defs: Vec<TerrainDef>,
    by_tag: HashMap<String, TerrainKind>,
}

impl TerrainTable {
    /// Create a table holding only the `default` terrain.
    pub fn new(default_penalty: i32) -> Result<Self, TerrainError> {
        let mut table = Self {
            defs: Vec::new(),
            by_tag: HashMap::new(),
        };
        table.insert(TerrainDef::new(DEFAULT_TERRAIN, default_penalty))?;
        Ok(table)
    }

    /// The stock terrain set: `default` (1), `water` (3) and `mud` (2,
    /// also tagged `boue`).
    pub fn standard() -> Self {
        let defs = vec![
            TerrainDef::new(DEFAULT_TERRAIN, 1),
            TerrainDef::new("water", 3),
            TerrainDef::new("mud", 2).alias("boue"),
        ];
        let by_tag = HashMap::from([
            (DEFAULT_TERRAIN.to_string(), TerrainKind::DEFAULT),
            ("water".to_string(), TerrainKind::WATER),
            ("mud".to_string(), TerrainKind::MUD),
            ("boue".to_string(), TerrainKind::MUD),
        ]);
        Self { defs, by_tag }
    }

    /// Register a new terrain and return its kind.
    ///
    /// Fails if the penalty is not positive or if the name or an alias is
    /// already taken.
    pub fn insert(&mut self, def: TerrainDef) -> Result<TerrainKind, TerrainError> {
        if def.walk_penalty <= 0 {
            return Err(TerrainError::ZeroWalkPenalty { name: def.name });
        }
        for tag in std::iter::once(&def.name).chain(def.aliases.iter()) {
            if self.by_tag.contains_key(tag) {
                return Err(TerrainError::DuplicateTerrain(tag.clone()));
            }
        }
        let kind = u16::try_from(self.defs.len())
            .map(TerrainKind)
            .map_err(|_| TerrainError::TableFull)?;
        for tag in std::iter::once(&def.name).chain(def.aliases.iter()) {
            self.by_tag.insert(tag.clone(), kind);
        }
        self.defs.push(def);
        Ok(kind)
    }

    /// Resolve a tag, if known.
    pub fn kind(&self, tag: &str) -> Option<TerrainKind> {
        self.by_tag.get(tag).copied()
    }

    /// Resolve a tag, substituting the `default` terrain for unknown tags.
    pub fn kind_or_default(&self, tag: &str) -> TerrainKind {
        match self.kind(tag) {
            Some(k) => k,
            None => {
                log::warn!("unknown terrain tag {tag:?}, using {DEFAULT_TERRAIN}");
                TerrainKind::DEFAULT
            }
        }
    }

    /// Definition for a kind. Panics if the kind does not come from this
    /// table.
    pub fn def(&self, kind: TerrainKind) -> &TerrainDef {
        &self.defs[kind.index()]
    }

    /// Foot-movement cost of entering a tile of `kind`.
    pub fn walk_penalty(&self, kind: TerrainKind) -> i32 {
        self.def(kind).walk_penalty
    }

    /// Number of terrain types.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Always false: a table holds at least the default terrain.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Iterate over `(kind, definition)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (TerrainKind, &TerrainDef)> {
        self.defs
            .iter()
            .enumerate()
            .map(|(i, d)| (TerrainKind(i as u16), d))
    }
}

impl Default for TerrainTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<TerrainDef>> for TerrainTable {
    type Error = TerrainError;

    /// Build a table from definitions in any order; one must be named
    /// `default`.
    fn try_from(mut defs: Vec<TerrainDef>) -> Result<Self, TerrainError> {
        let pos = defs
            .iter()
            .position(|d| d.name == DEFAULT_TERRAIN)
            .ok_or(TerrainError::MissingDefault)?;
        let default = defs.remove(pos);
        let mut table = Self {
            defs: Vec::new(),
            by_tag: HashMap::new(),
        };
        table.insert(default)?;
        for def in defs {
            table.insert(def)?;
        }
        Ok(table)
    }
}

impl From<TerrainTable> for Vec<TerrainDef> {
    fn from(table: TerrainTable) -> Self {
        table.defs
    }
}

/// Errors raised while building a [`TerrainTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerrainError {
    /// A terrain was given a walk penalty that is zero or negative.
    ZeroWalkPenalty { name: String },
    /// A name or alias is used by two terrains.
    DuplicateTerrain(String),
    /// No terrain named `default`.
    MissingDefault,
    /// More terrain types than a [`TerrainKind`] can index.
    TableFull,
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWalkPenalty { name } => {
                write!(f, "terrain {name:?}: walk penalty must be positive")
            }
            Self::DuplicateTerrain(tag) => write!(f, "terrain tag {tag:?} defined twice"),
            Self::MissingDefault => write!(f, "terrain table has no {DEFAULT_TERRAIN:?} entry"),
            Self::TableFull => write!(f, "too many terrain types"),
        }
    }
}

impl std::error::Error for TerrainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_tags() {
        let t = TerrainTable::standard();
        assert_eq!(t.len(), 3);
        assert_eq!(t.kind("default"), Some(TerrainKind::DEFAULT));
        assert_eq!(t.kind("water"), Some(TerrainKind::WATER));
        assert_eq!(t.kind("mud"), Some(TerrainKind::MUD));
        assert_eq!(t.kind("boue"), Some(TerrainKind::MUD));
        assert_eq!(t.walk_penalty(TerrainKind::DEFAULT), 1);
        assert_eq!(t.walk_penalty(TerrainKind::WATER), 3);
        assert_eq!(t.walk_penalty(TerrainKind::MUD), 2);
    }

    #[test]
    fn unknown_tag_falls_back_to_default() {
        let t = TerrainTable::standard();
        assert_eq!(t.kind("lava"), None);
        assert_eq!(t.kind_or_default("lava"), TerrainKind::DEFAULT);
    }

    #[test]
    fn insert_extends_table() {
        let mut t = TerrainTable::standard();
        let sand = t.insert(TerrainDef::new("sand", 4)).unwrap();
        assert_eq!(sand, TerrainKind(3));
        assert_eq!(t.kind("sand"), Some(sand));
        assert_eq!(t.walk_penalty(sand), 4);
    }

    #[test]
    fn insert_rejects_non_positive_penalty() {
        let mut t = TerrainTable::new(1).unwrap();
        let err = t.insert(TerrainDef::new("ice", 0)).unwrap_err();
        assert_eq!(
            err,
            TerrainError::ZeroWalkPenalty {
                name: "ice".to_string()
            }
        );
        assert!(TerrainTable::new(-2).is_err());
    }

    #[test]
    fn insert_rejects_duplicate_alias() {
        let mut t = TerrainTable::standard();
        let err = t
            .insert(TerrainDef::new("swamp", 2).alias("boue"))
            .unwrap_err();
        assert_eq!(err, TerrainError::DuplicateTerrain("boue".to_string()));
        // Nothing was registered by the failed insert.
        assert_eq!(t.kind("swamp"), None);
    }

    #[test]
    fn try_from_moves_default_first() {
        let t = TerrainTable::try_from(vec![
            TerrainDef::new("water", 5),
            TerrainDef::new(DEFAULT_TERRAIN, 2),
        ])
        .unwrap();
        assert_eq!(t.kind(DEFAULT_TERRAIN), Some(TerrainKind::DEFAULT));
        assert_eq!(t.walk_penalty(TerrainKind::DEFAULT), 2);
        assert_eq!(t.walk_penalty(t.kind("water").unwrap()), 5);
    }

    #[test]
    fn try_from_requires_default() {
        let err = TerrainTable::try_from(vec![TerrainDef::new("water", 3)]).unwrap_err();
        assert_eq!(err, TerrainError::MissingDefault);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn table_from_json() {
        let json = r#"[
            {"name": "default", "walk_penalty": 1},
            {"name": "mud", "walk_penalty": 2, "aliases": ["boue"]},
            {"name": "snow", "walk_penalty": 3}
        ]"#;
        let t: TerrainTable = serde_json::from_str(json).unwrap();
        assert_eq!(t.len(), 3);
        assert_eq!(t.kind("boue"), t.kind("mud"));
        assert_eq!(t.walk_penalty(t.kind("snow").unwrap()), 3);
    }

    #[test]
    fn invalid_table_is_rejected() {
        let json = r#"[{"name": "default", "walk_penalty": 0}]"#;
        assert!(serde_json::from_str::<TerrainTable>(json).is_err());
    }

    #[test]
    fn table_serializes_as_list() {
        let json = serde_json::to_string(&TerrainTable::standard()).unwrap();
        let back: TerrainTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind("boue"), Some(TerrainKind::MUD));
    }
}
