//! Which words have a recording, and where the clip lives.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::AudioError;

const CLIP_EXTENSION: &str = "mp3";

/// Words recorded for the project. File names keep this capitalization
/// (`Cinco.mp3`); lookups are case-insensitive.
pub const RECORDED_WORDS: &[&str] = &[
    "abril", "agosto", "calor", "catorce", "centígrados", "Cero", "Cinco", "Cincuenta",
    "Cuarenta", "Cuatro", "de", "diciembre", "diecinueve", "dieciocho", "diecisiete",
    "dieciséis", "Diez", "doce", "Domingo", "Dos", "el", "enero", "es", "Estacion", "febrero",
    "fresco", "frío", "grados", "hace", "hoy", "Invierno", "Jueves", "julio", "junio", "la",
    "Lunes", "Martes", "marzo", "mayo", "Miercoles", "Monzon", "Noventa", "noviembre", "Nueve",
    "Ochenta", "Ocho", "octubre", "once", "Primavera", "quince", "Seis", "septiembre", "Sesenta",
    "Setenta", "Siete", "sol", "sábado", "temperatura", "tiempo", "trece", "Treinta", "Tres",
    "Uno", "veinte", "veinticinco", "veinticuatro", "veintidós", "veintinueve", "veintiocho",
    "veintisiete", "veintiséis", "veintitrés", "veintiuno", "Verano", "viento", "Viernes", "y",
    "2025", "mil", "dos", "cien", "cuatrocientos", "doscientos", "Estación", "fecca",
    "novecientos", "ochocientos", "quinientos", "seiscientos", "seleccionada", "setecientos",
    "trescientos", "fecha",
];

/// Lowercase word to clip path.
#[derive(Debug, Clone, Default)]
pub struct AudioCatalog {
    clips: HashMap<String, PathBuf>,
}

impl AudioCatalog {
    /// Catalog of [`RECORDED_WORDS`] under `dir`.
    pub fn builtin(dir: &Path) -> Self {
        Self::from_words(dir, RECORDED_WORDS.iter().copied())
    }

    /// One clip per word, named `<word>.mp3` under `dir`. Later words win
    /// when two differ only by case.
    pub fn from_words<'a>(dir: &Path, words: impl IntoIterator<Item = &'a str>) -> Self {
        let clips = words
            .into_iter()
            .map(|word| (word.to_lowercase(), clip_path(dir, word)))
            .collect();
        Self { clips }
    }

    /// Every `*.mp3` file directly inside `dir`, keyed by its lowercased stem.
    pub fn scan(dir: &Path) -> Result<Self, AudioError> {
        let catalog_err = |source| AudioError::Catalog {
            dir: dir.to_path_buf(),
            source,
        };

        let mut clips = HashMap::new();
        for entry in std::fs::read_dir(dir).map_err(catalog_err)? {
            let path = entry.map_err(catalog_err)?.path();
            let is_clip = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(CLIP_EXTENSION));
            if !is_clip {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                clips.insert(stem.to_lowercase(), path.clone());
            }
        }

        tracing::debug!("Found {} clips in {}", clips.len(), dir.display());
        Ok(Self { clips })
    }

    /// Scan `dir` when it holds clips, otherwise fall back to the recorded
    /// word list under the same directory.
    pub fn discover(dir: &Path) -> Self {
        match Self::scan(dir) {
            Ok(catalog) if !catalog.is_empty() => catalog,
            Ok(_) => Self::builtin(dir),
            Err(e) => {
                tracing::debug!("{}; using built-in word list", e);
                Self::builtin(dir)
            }
        }
    }

    /// Clip for `word`, ignoring case.
    pub fn resolve(&self, word: &str) -> Option<&Path> {
        self.clips.get(&word.to_lowercase()).map(PathBuf::as_path)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.resolve(word).is_some()
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

/// `<dir>/<word>.mp3`
pub fn clip_path(dir: &Path, word: &str) -> PathBuf {
    dir.join(format!("{word}.{CLIP_EXTENSION}"))
}
