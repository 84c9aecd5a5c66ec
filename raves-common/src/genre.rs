use serde::Deserialize;
use std::cmp::Ordering;
use std::fmt;

/// A selectable movie genre from the metadata catalog
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// Envelope returned by the genre list endpoint
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GenreList {
    pub genres: Vec<Genre>,
}

impl Genre {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// The movie genre catalog as published by TMDB.
    pub fn tmdb_movie_genres() -> Vec<Genre> {
        [
            (28, "Action"),
            (12, "Adventure"),
            (16, "Animation"),
            (35, "Comedy"),
            (80, "Crime"),
            (99, "Documentary"),
            (18, "Drama"),
            (10751, "Family"),
            (14, "Fantasy"),
            (36, "History"),
            (27, "Horror"),
            (10402, "Music"),
            (9648, "Mystery"),
            (10749, "Romance"),
            (878, "Science Fiction"),
            (10770, "TV Movie"),
            (53, "Thriller"),
            (10752, "War"),
            (37, "Western"),
        ]
        .into_iter()
        .map(|(id, name)| Genre::new(id, name))
        .collect()
    }
}

/// One comma-separated token of a `with_genres` value.
///
/// Tokens are read the way a browser's `Number()` reads a string, and parsing
/// never fails. Integral values become `Id`; other finite or infinite numbers
/// are kept as `Number` so they serialize back unchanged. Anything that is not
/// a number becomes `Invalid`, which behaves like a NaN: it is a member of a
/// selection like any other token, but never compares numerically equal to
/// anything, itself included.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GenreToken {
    Id(i64),
    Number(f64),
    Invalid,
}

impl GenreToken {
    /// Parse a single token. Surrounding whitespace is ignored and an empty
    /// token reads as id 0.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return GenreToken::Id(0);
        }
        match parse_number(trimmed) {
            Some(value) => GenreToken::from_number(value),
            None => GenreToken::Invalid,
        }
    }

    fn from_number(value: f64) -> Self {
        const LIMIT: f64 = 9_223_372_036_854_775_808.0; // 2^63
        if value.is_finite() && value.fract() == 0.0 && (-LIMIT..LIMIT).contains(&value) {
            GenreToken::Id(value as i64)
        } else {
            GenreToken::Number(value)
        }
    }

    pub fn id(&self) -> Option<i64> {
        match self {
            GenreToken::Id(id) => Some(*id),
            _ => None,
        }
    }

    /// Numeric equality: `Invalid` is unequal to everything.
    pub fn numeric_eq(&self, other: &GenreToken) -> bool {
        match (self, other) {
            (GenreToken::Id(a), GenreToken::Id(b)) => a == b,
            (GenreToken::Number(a), GenreToken::Number(b)) => a == b,
            _ => false,
        }
    }

    /// Total order used to line tokens up before comparing them pairwise.
    /// `Id` and `Number` never hold the same value, so grouping by variant
    /// keeps numerically equal tokens adjacent.
    pub(crate) fn sort_cmp(&self, other: &GenreToken) -> Ordering {
        match (self, other) {
            (GenreToken::Id(a), GenreToken::Id(b)) => a.cmp(b),
            (GenreToken::Number(a), GenreToken::Number(b)) => a.total_cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            GenreToken::Id(_) => 0,
            GenreToken::Number(_) => 1,
            GenreToken::Invalid => 2,
        }
    }
}

/// `Number()` string grammar: `0x`/`0o`/`0b` integers, `Infinity` with an
/// optional sign, or a signed decimal with optional fraction and exponent.
fn parse_number(s: &str) -> Option<f64> {
    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() {
            return None;
        }
        return digits.chars().try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        });
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    // Rust's float grammar also takes "inf" and "nan"; Number() does not.
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }
    s.parse::<f64>().ok()
}

impl fmt::Display for GenreToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenreToken::Id(id) => write!(f, "{}", id),
            GenreToken::Number(v) if v.is_infinite() => {
                f.write_str(if *v > 0.0 { "Infinity" } else { "-Infinity" })
            }
            GenreToken::Number(v) => write!(f, "{}", v),
            GenreToken::Invalid => f.write_str("NaN"),
        }
    }
}
