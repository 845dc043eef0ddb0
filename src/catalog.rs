use crate::models::Movie;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

const SAMPLE_FILMS: &str = include_str!("../assets/films.json");

/// Errors that can occur while loading a catalog file
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The list of films the search box looks through
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    pub fn new(movies: Vec<Movie>) -> Self {
        Catalog { movies }
    }

    /// Parse a JSON array of films
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let movies: Vec<Movie> = serde_json::from_str(json)?;
        Ok(Catalog { movies })
    }

    /// Load a catalog from a JSON file on disk
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        info!("Loaded {} films from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// The films bundled with the binary
    pub fn sample() -> Self {
        // The bundled file is checked by the tests below
        Self::from_json_str(SAMPLE_FILMS).unwrap_or_default()
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Case-insensitive substring match over the title and original title,
    /// in catalog order. Surrounding whitespace in the query is ignored and a
    /// blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Movie> {
        let needle = query.trim().to_lowercase();
        let hits: Vec<&Movie> = self
            .movies
            .iter()
            .filter(|movie| {
                needle.is_empty()
                    || [&movie.title, &movie.original_title]
                        .into_iter()
                        .flatten()
                        .any(|title| title.to_lowercase().contains(&needle))
            })
            .collect();

        debug!("Query {:?} matched {} of {} films", query, hits.len(), self.len());
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_parses() {
        let catalog = Catalog::from_json_str(SAMPLE_FILMS).unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.movies().iter().all(|m| m.running_time.is_some()));
        assert_eq!(Catalog::sample(), catalog);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::sample();
        let hits = catalog.search("TOTORO");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title.as_deref(), Some("My Neighbor Totoro"));
    }

    #[test]
    fn test_search_matches_original_title() {
        let catalog = Catalog::sample();
        let hits = catalog.search("千と千尋");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title.as_deref(), Some("Spirited Away"));
    }

    #[test]
    fn test_blank_query_matches_everything_in_order() {
        let catalog = Catalog::sample();
        let hits = catalog.search("   ");
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].title.as_deref(), Some("Castle in the Sky"));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let catalog = Catalog::sample();
        let hits = catalog.search("  totoro\n");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title.as_deref(), Some("My Neighbor Totoro"));

        // Inner spaces are part of the needle
        assert!(catalog.search("my  neighbor").is_empty());
    }

    #[test]
    fn test_no_match() {
        assert!(Catalog::sample().search("ponyo").is_empty());
    }

    #[test]
    fn test_untitled_films_only_match_blank_queries() {
        let catalog = Catalog::new(vec![Movie::default()]);
        assert!(catalog.search("a").is_empty());
        assert_eq!(catalog.search("").len(), 1);
    }

    #[test]
    fn test_rejects_non_array() {
        let err = Catalog::from_json_str(r#"{ "title": "Ponyo" }"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
