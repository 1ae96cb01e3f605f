//! Crafting definition loader: the persisted `Crafting.json` format.
//!
//! ```json
//! {
//!   "Items": ["wood", "plank"],
//!   "Initial": {"wood": 1},
//!   "Goal": {"plank": 4},
//!   "Recipes": {
//!     "craft_plank": {"Consumes": {"wood": 1}, "Produces": {"plank": 4}, "Time": 1}
//!   },
//!   "Heuristic": {"Tools": [], "Caps": {"wood": 1}}
//! }
//! ```
//!
//! Object key order is significant for `Recipes` (it is the expansion
//! order), so every map is read into an [`OrderedMap`] that keeps document
//! order instead of a hash or B-tree map.

use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crafter_kernel::operators::recipe::RecipeDefV1;
use crafter_search::heuristic::PruningTableV1;

/// A JSON object read as `(key, value)` pairs in document order.
///
/// Repeated keys are kept; consumers decide what a repeat means.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V>(pub Vec<(String, V)>);

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> OrderedMap<V> {
    /// Entries in document order.
    #[must_use]
    pub fn entries(&self) -> &[(String, V)] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de, V> Deserialize<'de> for OrderedMap<V>
where
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V> Visitor<'de> for OrderedMapVisitor<V>
        where
            V: Deserialize<'de>,
        {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

/// One rule of the `Recipes` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RuleDefinitionV1 {
    /// Presence requirements. Values may be `true` or a number; only the
    /// key matters.
    #[serde(default)]
    pub requires: OrderedMap<serde_json::Value>,
    #[serde(default)]
    pub consumes: OrderedMap<i64>,
    pub produces: OrderedMap<i64>,
    /// Cost in time units.
    #[serde(alias = "Cost")]
    pub time: f64,
}

/// Optional `Heuristic` section: pruning tables.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HeuristicDefinitionV1 {
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub caps: OrderedMap<i64>,
}

/// A whole crafting definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CraftingDefinitionV1 {
    pub items: Vec<String>,
    #[serde(default)]
    pub initial: OrderedMap<i64>,
    #[serde(default)]
    pub goal: OrderedMap<i64>,
    pub recipes: OrderedMap<RuleDefinitionV1>,
    #[serde(default)]
    pub heuristic: Option<HeuristicDefinitionV1>,
}

impl CraftingDefinitionV1 {
    /// Recipe definitions in document order, ready for compilation.
    #[must_use]
    pub fn recipe_defs(&self) -> Vec<RecipeDefV1> {
        self.recipes
            .entries()
            .iter()
            .map(|(name, rule)| RecipeDefV1 {
                name: name.clone(),
                requires: rule
                    .requires
                    .entries()
                    .iter()
                    .map(|(item, _)| (item.clone(), 1))
                    .collect(),
                consumes: rule.consumes.entries().to_vec(),
                produces: rule.produces.entries().to_vec(),
                cost: rule.time,
            })
            .collect()
    }

    /// The `Heuristic` section as a pruning table, if present.
    #[must_use]
    pub fn pruning_table(&self) -> Option<PruningTableV1> {
        self.heuristic.as_ref().map(|h| PruningTableV1 {
            tools: h.tools.clone(),
            material_caps: h.caps.entries().to_vec(),
        })
    }

    /// Same definition with the goal replaced.
    #[must_use]
    pub fn with_goal<'a, I>(mut self, goal: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, i64)>,
    {
        self.goal = OrderedMap(goal.into_iter().map(|(k, v)| (k.to_string(), v)).collect());
        self
    }

    /// Same definition with the initial inventory replaced.
    #[must_use]
    pub fn with_initial<'a, I>(mut self, initial: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, i64)>,
    {
        self.initial = OrderedMap(initial.into_iter().map(|(k, v)| (k.to_string(), v)).collect());
        self
    }
}

/// Error loading a definition.
#[derive(Debug)]
pub enum DefinitionError {
    /// The file could not be read.
    Io { path: String, source: std::io::Error },
    /// The text is not a valid definition.
    Parse { detail: String },
}

impl fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read definition {path}: {source}"),
            Self::Parse { detail } => write!(f, "invalid crafting definition: {detail}"),
        }
    }
}

impl std::error::Error for DefinitionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { .. } => None,
        }
    }
}

/// Parse a definition from JSON text.
///
/// # Errors
///
/// Returns [`DefinitionError::Parse`] for malformed JSON or a missing
/// mandatory field (`Items`, `Recipes`, `Produces`, `Time`).
pub fn parse_definition(text: &str) -> Result<CraftingDefinitionV1, DefinitionError> {
    serde_json::from_str(text).map_err(|e| DefinitionError::Parse {
        detail: e.to_string(),
    })
}

/// Read and parse a definition file.
///
/// # Errors
///
/// Returns [`DefinitionError::Io`] if the file cannot be read, or
/// [`DefinitionError::Parse`] as for [`parse_definition`].
pub fn load_definition(path: &Path) -> Result<CraftingDefinitionV1, DefinitionError> {
    let text = std::fs::read_to_string(path).map_err(|source| DefinitionError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_definition(&text)
}
