use crate::error::IngestError;
use crate::string_normalization::canonical_actor_name;
use rustc_hash::FxHashMap;
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};
use tracing::{debug, info};

/// A movie title together with its cast in billing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub title: String,
    pub cast: Vec<String>,
}

/// Movie title -> ordered cast, in order of first appearance.
///
/// Adding a title that is already present extends its cast instead of
/// creating a second entry.
#[derive(Debug, Clone, Default)]
pub struct CastRecords {
    movies: Vec<Movie>,
    positions: FxHashMap<String, usize>,
}

impl CastRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_movie<T, I, S>(&mut self, title: T, cast: I)
    where
        T: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let title = title.into();
        let position = match self.positions.get(&title) {
            Some(&position) => position,
            None => {
                self.positions.insert(title.clone(), self.movies.len());
                self.movies.push(Movie {
                    title,
                    cast: Vec::new(),
                });
                self.movies.len() - 1
            }
        };

        self.movies[position]
            .cast
            .extend(cast.into_iter().map(Into::into));
    }

    pub fn cast_of(&self, title: &str) -> Option<&[String]> {
        self.positions
            .get(title)
            .map(|&position| self.movies[position].cast.as_slice())
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.movies.iter()
    }
}

impl<T, I, S> FromIterator<(T, I)> for CastRecords
where
    T: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<It: IntoIterator<Item = (T, I)>>(iter: It) -> Self {
        let mut records = CastRecords::new();
        for (title, cast) in iter {
            records.add_movie(title, cast);
        }
        records
    }
}

/// Parses one `Title/Last, First/Last, First` line.
///
/// Returns `None` for blank lines. Empty actor fields are dropped.
pub fn parse_cast_line(line: &str) -> Option<(String, Vec<String>)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let mut fields = line.split('/');
    let title = fields.next()?.trim().to_string();
    let cast = fields
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(canonical_actor_name)
        .collect();

    Some((title, cast))
}

/// Reads cast records from any byte stream, replacing invalid UTF-8.
pub fn read_cast_records<R: Read>(reader: R) -> std::io::Result<CastRecords> {
    let mut reader = BufReader::new(reader);
    let mut records = CastRecords::new();
    let mut buffer = Vec::new();
    let mut line_count = 0usize;

    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        line_count += 1;

        let line = String::from_utf8_lossy(&buffer);
        if let Some((title, cast)) = parse_cast_line(&line) {
            records.add_movie(title, cast);
        }
    }

    debug!(lines = line_count, movies = records.movie_count(), "parsed cast records");
    Ok(records)
}

pub fn load_cast_file(file_path: &Path) -> Result<CastRecords, IngestError> {
    let to_ingest_error = |source| IngestError::Io {
        path: file_path.to_path_buf(),
        source,
    };

    let file = File::open(file_path).map_err(to_ingest_error)?;
    let records = read_cast_records(file).map_err(to_ingest_error)?;

    info!(
        path = %file_path.display(),
        movies = records.movie_count(),
        "loaded cast file"
    );
    Ok(records)
}
