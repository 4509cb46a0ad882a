//! # Asset Catalog
//!
//! The website's placeholder images, grouped by page. Each entry names one
//! output file (relative to the output root) and the archetype that draws it.
//!
//! ## Adding an Image
//!
//! 1. Pick a palette below (or add one)
//! 2. Add a [`gem`], [`rough_stone`] or [`jewelry`] entry to the right section
//! 3. Regenerate; output stays deterministic for a given seed

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::art::jewelry::JewelryShape;
use crate::colour::Palette;
use crate::config::Config;
use crate::error::{PlaceholderError, Result};
use crate::pipeline::{Studio, DEFAULT_GEM_ANGLE};

pub type PaletteDef = &'static [&'static str];

pub const RUBY: PaletteDef = &["#1a0a0a", "#3d0c0c", "#c0392b"];
pub const SAPPHIRE: PaletteDef = &["#0a0a2e", "#1a1a5e", "#2980b9"];
pub const EMERALD: PaletteDef = &["#0a1a0a", "#0c3d1a", "#27ae60"];
pub const AMETHYST: PaletteDef = &["#1a0a2e", "#3d0c5e", "#8e44ad"];
pub const GOLD: PaletteDef = &["#1a1a0a", "#3d3d0c", "#c9a962"];
pub const DIAMOND: PaletteDef = &["#1a1a1a", "#3d3d3d", "#bdc3c7"];
pub const TOPAZ: PaletteDef = &["#1a150a", "#3d2e0c", "#e67e22"];
pub const TOURMALINE: PaletteDef = &["#1a0a1a", "#3d1a3d", "#e91e9c"];
pub const OPAL: PaletteDef = &["#0a1a1a", "#1a3d3d", "#1abc9c"];
pub const PEARL: PaletteDef = &["#1a1a1a", "#2d2d2d", "#ecf0f1"];
pub const BLACK_OPAL: PaletteDef = &["#0a0a0a", "#1a1a2e", "#1a1a3d"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GemSpec {
    pub path: &'static str,
    pub size: (u32, u32),
    pub palette: PaletteDef,
    pub label: &'static str,
    pub facets: usize,
    pub angle: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoughStoneSpec {
    pub path: &'static str,
    pub size: (u32, u32),
    pub palette: PaletteDef,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JewelrySpec {
    pub path: &'static str,
    pub size: (u32, u32),
    pub palette: PaletteDef,
    pub label: &'static str,
    pub shape: JewelryShape,
}

/// One output image.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogEntry {
    Gem(GemSpec),
    RoughStone(RoughStoneSpec),
    Jewelry(JewelrySpec),
}

impl CatalogEntry {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Gem(spec) => spec.path,
            Self::RoughStone(spec) => spec.path,
            Self::Jewelry(spec) => spec.path,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Gem(spec) => spec.label,
            Self::RoughStone(spec) => spec.label,
            Self::Jewelry(spec) => spec.label,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Gem(_) => "gem",
            Self::RoughStone(_) => "rough_stone",
            Self::Jewelry(_) => "jewelry",
        }
    }

    /// Render this entry under `root`.
    pub fn render(&self, studio: &mut Studio, root: &Path) -> Result<()> {
        let path = root.join(self.path());
        match self {
            Self::Gem(spec) => {
                let palette = Palette::from_hex(spec.palette)?;
                studio.make_gem_image(&path, spec.size, &palette, spec.label, spec.facets, spec.angle)
            }
            Self::RoughStone(spec) => {
                let palette = Palette::from_hex(spec.palette)?;
                studio.make_rough_stone_image(&path, spec.size, &palette, spec.label)
            }
            Self::Jewelry(spec) => {
                let palette = Palette::from_hex(spec.palette)?;
                studio.make_jewelry_image(&path, spec.size, &palette, spec.label, spec.shape)
            }
        }
    }
}

/// A titled group of entries, printed as `[Title]` during a run.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub entries: Vec<CatalogEntry>,
}

pub fn gem(path: &'static str, size: (u32, u32), palette: PaletteDef, label: &'static str, facets: usize) -> CatalogEntry {
    gem_angled(path, size, palette, label, facets, DEFAULT_GEM_ANGLE)
}

pub fn gem_angled(
    path: &'static str,
    size: (u32, u32),
    palette: PaletteDef,
    label: &'static str,
    facets: usize,
    angle: f32,
) -> CatalogEntry {
    CatalogEntry::Gem(GemSpec {
        path,
        size,
        palette,
        label,
        facets,
        angle,
    })
}

pub fn rough_stone(path: &'static str, size: (u32, u32), palette: PaletteDef, label: &'static str) -> CatalogEntry {
    CatalogEntry::RoughStone(RoughStoneSpec {
        path,
        size,
        palette,
        label,
    })
}

pub fn jewelry(
    path: &'static str,
    size: (u32, u32),
    palette: PaletteDef,
    label: &'static str,
    shape: JewelryShape,
) -> CatalogEntry {
    CatalogEntry::Jewelry(JewelrySpec {
        path,
        size,
        palette,
        label,
        shape,
    })
}

/// Every placeholder the website uses, in generation order.
pub fn catalog() -> Vec<Section> {
    use JewelryShape::{Earring, Necklace, Ring};

    const WIDE: (u32, u32) = (800, 500);
    const BANNER: (u32, u32) = (800, 450);
    const SQUARE: (u32, u32) = (600, 600);
    const PAIR: (u32, u32) = (600, 400);
    const INSTA: (u32, u32) = (400, 400);

    vec![
        Section {
            title: "Homepage",
            entries: vec![
                gem("images/about-preview.jpg", WIDE, AMETHYST, "Officina Gemmologica", 8),
                gem("images/gallery-1.jpg", SQUARE, RUBY, "Rubino", 6),
                gem("images/gallery-2.jpg", SQUARE, SAPPHIRE, "Zaffiro", 8),
                gem("images/gallery-3.jpg", SQUARE, EMERALD, "Smeraldo", 6),
            ],
        },
        Section {
            title: "Before/After",
            entries: vec![
                rough_stone("images/before-1.jpg", PAIR, RUBY, "Rubino Grezzo"),
                gem("images/after-1.jpg", PAIR, RUBY, "Rubino Tagliato", 8),
                rough_stone("images/before-2.jpg", PAIR, SAPPHIRE, "Zaffiro Grezzo"),
                gem("images/after-2.jpg", PAIR, SAPPHIRE, "Zaffiro Tagliato", 8),
                rough_stone("images/before-3.jpg", PAIR, EMERALD, "Smeraldo Grezzo"),
                gem("images/after-3.jpg", PAIR, EMERALD, "Smeraldo Tagliato", 6),
            ],
        },
        Section {
            title: "Instagram",
            entries: vec![
                jewelry("images/insta-1.jpg", INSTA, RUBY, "Rubino", Ring),
                jewelry("images/insta-2.jpg", INSTA, SAPPHIRE, "Zaffiro", Necklace),
                jewelry("images/insta-3.jpg", INSTA, EMERALD, "Smeraldo", Ring),
                jewelry("images/insta-4.jpg", INSTA, AMETHYST, "Ametista", Earring),
                jewelry("images/insta-5.jpg", INSTA, GOLD, "Creazione Oro", Necklace),
                jewelry("images/insta-6.jpg", INSTA, DIAMOND, "Diamante", Ring),
            ],
        },
        Section {
            title: "Chi Siamo",
            entries: vec![
                gem_angled("images/chi-siamo-1.jpg", WIDE, GOLD, "Gemme Preziose", 10, 160.0),
                gem_angled("images/chi-siamo-2.jpg", WIDE, DIAMOND, "Strumenti di Precisione", 12, 100.0),
            ],
        },
        Section {
            title: "Servizi",
            entries: vec![
                gem("images/servizio-taglio.jpg", WIDE, RUBY, "Taglio Gemme", 8),
                gem("images/servizio-consulenza.jpg", WIDE, SAPPHIRE, "Consulenza Gemmologica", 6),
                jewelry("images/servizio-progettazione.jpg", WIDE, GOLD, "Progettazione Gioielli", Ring),
                rough_stone("images/servizio-ricerca.jpg", WIDE, EMERALD, "Ricerca Pietre"),
                jewelry("images/servizio-restauro.jpg", WIDE, PEARL, "Restauro Gioielli", Necklace),
                gem("images/servizio-formazione.jpg", WIDE, AMETHYST, "Formazione Gemmologica", 10),
            ],
        },
        Section {
            title: "Blog",
            entries: vec![
                gem("images/blog/scegliere-pietra.jpg", BANNER, SAPPHIRE, "Come Scegliere la Pietra Giusta", 8),
                gem("images/blog/taglio-mano.jpg", BANNER, RUBY, "L'Arte del Taglio a Mano", 6),
                rough_stone("images/blog/significato-pietre.jpg", BANNER, AMETHYST, "Il Significato delle Pietre"),
                gem("images/blog/tendenze-2024.jpg", BANNER, EMERALD, "Tendenze Gemme 2024", 10),
            ],
        },
        Section {
            title: "Gallery - campioni",
            entries: vec![
                gem("images/gallery/gemma-rubino.jpg", SQUARE, RUBY, "Rubino Birmano", 8),
                gem("images/gallery/zaffiro-ceylon.jpg", SQUARE, SAPPHIRE, "Zaffiro Ceylon", 8),
                gem("images/gallery/ametista.jpg", SQUARE, AMETHYST, "Ametista Brasiliana", 6),
                gem("images/gallery/acquamarina.jpg", SQUARE, OPAL, "Acquamarina", 8),
                gem("images/gallery/opale-nero.jpg", SQUARE, BLACK_OPAL, "Opale Nero", 10),
                jewelry("images/gallery/anello-smeraldo.jpg", SQUARE, EMERALD, "Anello Smeraldo", Ring),
                jewelry("images/gallery/anello-fidanzamento.jpg", SQUARE, DIAMOND, "Anello Fidanzamento", Ring),
                jewelry("images/gallery/anello-tanzanite.jpg", SQUARE, SAPPHIRE, "Anello Tanzanite", Ring),
                jewelry("images/gallery/collana-perle.jpg", SQUARE, PEARL, "Collana Perle", Necklace),
                jewelry("images/gallery/pendente-tormalina.jpg", SQUARE, TOURMALINE, "Pendente Tormalina", Necklace),
                jewelry("images/gallery/orecchini-diamanti.jpg", SQUARE, DIAMOND, "Orecchini Diamanti", Earring),
                jewelry("images/gallery/spilla-vintage.jpg", SQUARE, GOLD, "Spilla Vintage", Necklace),
            ],
        },
    ]
}

/// Render every catalog entry under `config.output_root`.
///
/// Returns the number of images written. The first failure aborts the run.
pub fn generate_catalog(config: &Config) -> Result<usize> {
    let mut studio = Studio::new(config);
    generate_sections(&mut studio, config, &catalog())
}

/// Render the given sections with an existing studio.
pub fn generate_sections(studio: &mut Studio, config: &Config, sections: &[Section]) -> Result<usize> {
    for dir in [config.blog_dir(), config.gallery_dir()] {
        fs::create_dir_all(&dir).map_err(|e| PlaceholderError::io(&dir, e))?;
    }

    println!("=== Generating placeholder images ===");
    let mut total = 0;
    for section in sections {
        println!("\n[{}]", section.title);
        for entry in &section.entries {
            entry.render(studio, &config.output_root)?;
            total += 1;
        }
    }
    println!("\n=== Done! {total} images created ===");
    log::info!("wrote {total} images under {}", config.output_root.display());

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn entries() -> Vec<CatalogEntry> {
        catalog().into_iter().flat_map(|s| s.entries).collect()
    }

    #[test]
    fn test_paths_unique() {
        let all = entries();
        let paths: HashSet<_> = all.iter().map(|e| e.path()).collect();
        assert_eq!(paths.len(), all.len());
    }

    #[test]
    fn test_all_palettes_parse() {
        for entry in entries() {
            let palette = match &entry {
                CatalogEntry::Gem(s) => s.palette,
                CatalogEntry::RoughStone(s) => s.palette,
                CatalogEntry::Jewelry(s) => s.palette,
            };
            assert!(Palette::from_hex(palette).is_ok(), "{}", entry.path());
        }
    }

    #[test]
    fn test_paths_are_jpeg_under_images() {
        for entry in entries() {
            assert!(entry.path().starts_with("images/"));
            assert!(entry.path().ends_with(".jpg"));
        }
    }

    #[test]
    fn test_kinds_present() {
        let kinds: HashSet<_> = entries().iter().map(|e| e.kind()).collect();
        assert_eq!(kinds, HashSet::from(["gem", "rough_stone", "jewelry"]));
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let entry = jewelry("images/x.jpg", (400, 400), GOLD, "Oro", JewelryShape::Necklace);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["kind"], "jewelry");
        assert_eq!(json["shape"], "necklace");
        assert_eq!(json["palette"][2], "#c9a962");
    }
}
