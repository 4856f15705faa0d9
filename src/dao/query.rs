//! Filter and ordering clauses for score listings.
//!
//! Only identifiers from [`SortColumn`] and keywords from [`SortOrder`] are ever
//! written into statement text. The search term always travels as a bound
//! parameter.

use sqlx::{QueryBuilder, Sqlite};

/// Name of the single table holding score records.
pub const SCORE_TABLE: &str = "karaoke_scores";

/// Column list selected for every score read, in [`ScoreEntity`] field order.
///
/// [`ScoreEntity`]: crate::dao::models::ScoreEntity
pub const SCORE_COLUMNS: &str = "id, song_title, artist, total_score, pitch_score, \
    technique_score, long_tone_score, stability_score, expression_score, \
    high_range_score, comments, performed_at";

/// Columns a listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    PerformedAt,
    TotalScore,
    SongTitle,
    Artist,
}

impl SortColumn {
    /// Match a raw client value against the allow-list. Matching is exact.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "performed_at" => Some(Self::PerformedAt),
            "total_score" => Some(Self::TotalScore),
            "song_title" => Some(Self::SongTitle),
            "artist" => Some(Self::Artist),
            _ => None,
        }
    }

    /// Column identifier as written in SQL.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::PerformedAt => "performed_at",
            Self::TotalScore => "total_score",
            Self::SongTitle => "song_title",
            Self::Artist => "artist",
        }
    }
}

/// Direction keyword appended after the sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Accept `asc` or `desc` in any letter case.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if raw.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    /// Keyword as written in SQL.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Validated ordering: an allow-listed column plus an optional direction.
///
/// A missing direction leaves the engine default (ascending) in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSort {
    pub column: SortColumn,
    pub order: Option<SortOrder>,
}

/// Listing criteria after allow-list checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreQuery {
    /// Substring searched in song title, artist and comments.
    pub search: Option<String>,
    /// Ordering; `None` keeps storage-defined order.
    pub sort: Option<ScoreSort>,
}

impl ScoreQuery {
    /// Build criteria from raw client parameters.
    ///
    /// Never fails: an empty search term is dropped, an unknown sort column
    /// disables ordering, and an unknown direction drops the keyword. An absent
    /// direction defaults to descending.
    pub fn from_params(search: Option<&str>, sort_by: Option<&str>, order: Option<&str>) -> Self {
        let search = search
            .filter(|term| !term.is_empty())
            .map(str::to_owned);

        let sort = sort_by.and_then(SortColumn::parse).map(|column| ScoreSort {
            column,
            order: match order {
                Some(raw) => SortOrder::parse(raw),
                None => Some(SortOrder::Desc),
            },
        });

        Self { search, sort }
    }

    /// Append the `WHERE` and `ORDER BY` clauses to `builder`.
    pub fn push_clauses(&self, builder: &mut QueryBuilder<'_, Sqlite>) {
        if let Some(term) = &self.search {
            let pattern = format!("%{term}%");
            builder
                .push(" WHERE song_title LIKE ")
                .push_bind(pattern.clone())
                .push(" OR artist LIKE ")
                .push_bind(pattern.clone())
                .push(" OR comments LIKE ")
                .push_bind(pattern);
        }

        if let Some(sort) = self.sort {
            builder.push(" ORDER BY ").push(sort.column.as_sql());
            if let Some(order) = sort.order {
                builder.push(" ").push(order.as_sql());
            }
        }
    }

    /// Full `SELECT` statement for this listing.
    pub fn select_statement(&self) -> QueryBuilder<'static, Sqlite> {
        let mut builder = QueryBuilder::new(format!("SELECT {SCORE_COLUMNS} FROM {SCORE_TABLE}"));
        self.push_clauses(&mut builder);
        builder
    }
}
