//! Static catalog tables: games with their sleeve-size variants, and the
//! sleeve SKU reference data. Loaded once at startup, immutable afterwards.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("game '{0}' has no size variants")]
    EmptyGame(String),
    #[error("duplicate game name '{0}'")]
    DuplicateGame(String),
    #[error("duplicate sku '{0}'")]
    DuplicateSku(String),
}

/// One owned size record within a game. `sku` may not resolve in the sku
/// table; the UI renders such variants as "Unknown Sku" with no purchase
/// action. `count` stays a string because the source data is not guaranteed
/// numeric; aggregation treats unparseable counts as zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeVariant {
    pub sku: String,
    pub count: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl SizeVariant {
    /// Parse-with-fallback: a non-numeric count contributes nothing.
    pub fn count_value(&self) -> u32 {
        self.count.trim().parse().unwrap_or(0)
    }
}

/// Display name plus its precomputed lowercase form. `name_lower` exists
/// only for search and is never rendered.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameEntry {
    pub name: String,
    #[serde(default)]
    pub name_lower: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameGroup {
    pub entry: GameEntry,
    pub variants: Vec<SizeVariant>,
}

impl GameGroup {
    /// Total owned cards across all variants of this game.
    pub fn total_count(&self) -> u32 {
        self.variants.iter().map(SizeVariant::count_value).sum()
    }

    /// (resolved, unresolved) variant tallies against the sku table.
    pub fn sku_tallies(&self, catalog: &Catalog) -> (usize, usize) {
        let resolved = self
            .variants
            .iter()
            .filter(|variant| catalog.sku(&variant.sku).is_some())
            .count();
        (resolved, self.variants.len() - resolved)
    }

    /// Variant indices in display order: variants whose sku resolves come
    /// first, unresolved ones after. Order within a bucket is unspecified.
    pub fn display_order(&self, catalog: &Catalog) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.variants.len()).collect();
        order.sort_by_key(|&idx| catalog.sku(&self.variants[idx].sku).is_none());
        order
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SkuMeta {
    pub sku: String,
    pub name: String,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_link: Option<String>,
}

/// The two static tables. Constructed once by [`Catalog::bundled`] or
/// [`Catalog::from_path`]; no mutation API exists.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub games: Vec<GameGroup>,
    pub skus: Vec<SkuMeta>,
}

#[derive(Debug, Deserialize)]
struct CatalogManifest {
    games: Vec<GameSpec>,
    skus: Vec<SkuMeta>,
}

#[derive(Debug, Deserialize)]
struct GameSpec {
    name: String,
    variants: Vec<SizeVariant>,
}

impl Catalog {
    /// Parse the catalog bundled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Load an alternate catalog file (same JSON shape as the bundled one).
    pub async fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let contents =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| CatalogError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let manifest: CatalogManifest = serde_json::from_str(json)?;
        Self::from_manifest(manifest)
    }

    fn from_manifest(manifest: CatalogManifest) -> Result<Self, CatalogError> {
        let mut seen_games = HashSet::new();
        let mut games = Vec::with_capacity(manifest.games.len());
        for spec in manifest.games {
            if spec.variants.is_empty() {
                return Err(CatalogError::EmptyGame(spec.name));
            }
            if !seen_games.insert(spec.name.to_lowercase()) {
                return Err(CatalogError::DuplicateGame(spec.name));
            }
            let name_lower = spec.name.to_lowercase();
            games.push(GameGroup {
                entry: GameEntry {
                    name: spec.name,
                    name_lower,
                },
                variants: spec.variants,
            });
        }

        let mut seen_skus = HashSet::new();
        for meta in &manifest.skus {
            if !seen_skus.insert(meta.sku.clone()) {
                return Err(CatalogError::DuplicateSku(meta.sku.clone()));
            }
        }

        Ok(Catalog {
            games,
            skus: manifest.skus,
        })
    }

    /// Look up a variant's sku in the sku table. `None` means unresolved.
    pub fn sku(&self, sku: &str) -> Option<&SkuMeta> {
        self.skus.iter().find(|meta| meta.sku == sku)
    }

    /// Width/height to display for a variant: its own override when present,
    /// otherwise the resolved sku's catalog defaults.
    pub fn variant_dimensions(&self, variant: &SizeVariant) -> (Option<f64>, Option<f64>) {
        let meta = self.sku(&variant.sku);
        (
            variant.width.or(meta.map(|m| m.width)),
            variant.height.or(meta.map(|m| m.height)),
        )
    }
}
