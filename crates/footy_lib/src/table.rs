//! Module which contains the table (leaderboard) computation.
//!
//! A table is a ranked list of per-player records for one scoring metric and one year
//! (0 for all-time). Tables are recomputed on read: one grouped SQL pass collects the
//! per-player aggregates, and [`build_table`] turns them into ranked records.

use std::cmp::Ordering;

use itertools::Itertools as _;
use sqlx::MySqlPool;

use crate::error::FootyResult;
use crate::game_day;
use crate::models::{PlayerRecord, TableKind};

/// The qualification thresholds of the partitioned tables.
///
/// These are configuration, not domain logic: callers construct one (usually from the
/// environment) and pass it down explicitly.
#[derive(Clone, Debug)]
pub struct TableConfig {
    /// The minimum number of games a player must have played to appear in the
    /// qualified averages table.
    pub min_games_for_averages: u32,
    /// The minimum number of replies a player must have given to appear in the
    /// qualified speedy table.
    pub min_replies_for_speedy: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            min_games_for_averages: 10,
            min_replies_for_speedy: 10,
        }
    }
}

/// The type returned by the [`compet_rank_by_key`](CompetRankingByKeyIter::compet_rank_by_key)
/// method.
pub struct CompetitionRankingByKey<I, K, F> {
    iter: I,
    func: F,

    previous_key: Option<K>,
    rank: usize,
    offset: usize,
}

impl<I, K, F> CompetitionRankingByKey<I, K, F> {
    fn new(iter: I, func: F) -> Self {
        Self {
            iter,
            func,

            previous_key: None,
            rank: 0,
            offset: 1,
        }
    }
}

impl<I, K, F> Iterator for CompetitionRankingByKey<I, K, F>
where
    I: Iterator,
    F: FnMut(&<I as Iterator>::Item) -> K,
    K: Eq,
{
    type Item = (usize, <I as Iterator>::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.iter.next()?;
        let key = (self.func)(&next);

        match self.previous_key.take() {
            // First iteration
            None => {
                self.rank += 1;
            }
            // Same keys
            Some(previous_key) if previous_key == key => {
                self.offset += 1;
            }
            // Different keys
            _ => {
                self.rank += self.offset;
                self.offset = 1;
            }
        }

        self.previous_key = Some(key);

        Some((self.rank, next))
    }
}

/// Extends the [`Iterator`] trait by providing the [`compet_rank_by_key`][1] method.
///
/// [1]: CompetRankingByKeyIter::compet_rank_by_key
pub trait CompetRankingByKeyIter: Iterator {
    /// Maps each item to a rank respecting the competition ranking system (1224).
    ///
    /// The key returned by the function is used to know when to increase the rank.
    ///
    /// ## Example
    ///
    /// ```
    /// # use footy_lib::table::CompetRankingByKeyIter as _;
    /// let points = vec![36, 34, 34, 31, 28]
    ///     .into_iter()
    ///     .compet_rank_by_key(|p| *p)
    ///     .collect::<Vec<_>>();
    ///
    /// assert_eq!(
    ///     points,
    ///     vec![(1, 36), (2, 34), (2, 34), (4, 31), (5, 28)],
    /// );
    /// ```
    fn compet_rank_by_key<K, F>(self, f: F) -> CompetitionRankingByKey<Self, K, F>
    where
        F: FnMut(&Self::Item) -> K,
        K: Eq,
        Self: Sized,
    {
        CompetitionRankingByKey::new(self, f)
    }
}

impl<I: Iterator> CompetRankingByKeyIter for I {}

/// The per-player aggregates of one year (or all-time), straight out of the grouping
/// query. Input to [`build_table`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlayerAggregateRow {
    /// The ID of the player.
    pub player_id: u32,
    /// Games played (outcomes with points).
    pub played: i64,
    /// Total points scored.
    pub points: i64,
    /// Games won (3 points).
    pub won: i64,
    /// Games drawn (1 point).
    pub drawn: i64,
    /// Games lost (0 points).
    pub lost: i64,
    /// Pub attendances.
    pub pub_count: i64,
    /// RSVP replies given.
    pub replies: i64,
    /// Mean interval between the invitation mail and the reply, in seconds.
    pub avg_response_secs: Option<f64>,
}

/// Returns the per-player aggregates for the provided year, 0 meaning all-time.
///
/// Only game days on which a game actually took place are counted.
pub async fn get_player_aggregates(
    pool: &MySqlPool,
    year: i32,
) -> FootyResult<Vec<PlayerAggregateRow>> {
    let rows = sqlx::query_as(
        "SELECT o.player_id AS player_id,
            CAST(COUNT(o.points) AS SIGNED) AS played,
            CAST(COALESCE(SUM(o.points), 0) AS SIGNED) AS points,
            CAST(COALESCE(SUM(o.points = 3), 0) AS SIGNED) AS won,
            CAST(COALESCE(SUM(o.points = 1), 0) AS SIGNED) AS drawn,
            CAST(COALESCE(SUM(o.points = 0), 0) AS SIGNED) AS lost,
            CAST(COALESCE(SUM(o.`pub`), 0) AS SIGNED) AS pub_count,
            CAST(COUNT(o.response_time) AS SIGNED) AS replies,
            CAST(AVG(TIMESTAMPDIFF(SECOND, g.mail_sent, o.response_time)) AS DOUBLE)
                AS avg_response_secs
        FROM outcomes o
        INNER JOIN game_days g ON g.id = o.game_day_id
        WHERE g.game = TRUE AND (? = 0 OR YEAR(g.game_date) = ?)
        GROUP BY o.player_id
        ORDER BY o.player_id",
    )
    .bind(year)
    .bind(year)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// The ranking key of a player for the provided table.
///
/// Metrics that are not integral are scaled to an integer (averages in thousandths,
/// speedy in whole seconds) so that tie detection is exact. A player who never replied
/// gets the worst possible speedy key.
fn ranking_key(kind: TableKind, row: &PlayerAggregateRow) -> i64 {
    match kind {
        TableKind::Points => row.points,
        TableKind::Averages if row.played > 0 => {
            (row.points as f64 / row.played as f64 * 1000.).round() as i64
        }
        TableKind::Averages => 0,
        TableKind::Stalwart => row.played,
        TableKind::Speedy => row
            .avg_response_secs
            .map(|secs| secs.round() as i64)
            .unwrap_or(i64::MAX),
        TableKind::Pub => row.pub_count,
    }
}

fn to_record(year: i32, rank: usize, row: PlayerAggregateRow) -> PlayerRecord {
    let averages = if row.played > 0 {
        row.points as f64 / row.played as f64
    } else {
        0.
    };
    PlayerRecord {
        year,
        player_id: row.player_id,
        rank: rank as u32,
        played: row.played as u32,
        won: row.won as u32,
        drawn: row.drawn as u32,
        lost: row.lost as u32,
        points: row.points,
        averages,
        stalwart: row.played as u32,
        speedy: row.avg_response_secs,
        r#pub: row.pub_count as u32,
    }
}

/// Turns the per-player aggregates of one year into the ranked records of the
/// requested table.
///
/// `qualified` selects the partition for the averages and speedy tables (`None` means
/// qualified); the other tables have no unqualified partition, so asking for it
/// returns an empty list. `take` truncates the ranked list to the top N after sorting.
///
/// Ranks follow the competition ranking system (1224) over the table's metric, with
/// player ID as the stable secondary sort so the output is deterministic. Every table
/// ranks descending except speedy, where a smaller mean response interval is better.
pub fn build_table(
    rows: Vec<PlayerAggregateRow>,
    year: i32,
    kind: TableKind,
    config: &TableConfig,
    qualified: Option<bool>,
    take: Option<usize>,
) -> Vec<PlayerRecord> {
    let wants_qualified = qualified.unwrap_or(true);

    let compare = move |a: &PlayerAggregateRow, b: &PlayerAggregateRow| -> Ordering {
        let (key_a, key_b) = (ranking_key(kind, a), ranking_key(kind, b));
        let by_metric = match kind {
            TableKind::Speedy => key_a.cmp(&key_b),
            _ => key_b.cmp(&key_a),
        };
        by_metric.then(a.player_id.cmp(&b.player_id))
    };

    rows.into_iter()
        .filter(|row| {
            let is_qualified = match kind {
                TableKind::Averages => row.played >= config.min_games_for_averages as i64,
                TableKind::Speedy => row.replies >= config.min_replies_for_speedy as i64,
                // The other tables have no unqualified partition.
                _ => true,
            };
            is_qualified == wants_qualified
        })
        .sorted_by(compare)
        .compet_rank_by_key(|row| ranking_key(kind, row))
        .map(|(rank, row)| to_record(year, rank, row))
        .take(take.unwrap_or(usize::MAX))
        .collect()
}

/// Computes the ranked table of the provided kind for the provided year (0 for
/// all-time).
pub async fn get_table(
    pool: &MySqlPool,
    kind: TableKind,
    year: i32,
    config: &TableConfig,
    qualified: Option<bool>,
    take: Option<usize>,
) -> FootyResult<Vec<PlayerRecord>> {
    let rows = get_player_aggregates(pool, year).await?;
    Ok(build_table(rows, year, kind, config, qualified, take))
}

/// Returns the winner (the rank-1 qualified record) of the provided table for every
/// year in which a game was played, ascending by year.
pub async fn get_winners(
    pool: &MySqlPool,
    kind: TableKind,
    config: &TableConfig,
) -> FootyResult<Vec<PlayerRecord>> {
    let years = game_day::get_years(pool).await?;
    let mut winners = Vec::with_capacity(years.len());
    for year in years {
        let rows = get_player_aggregates(pool, year).await?;
        let mut table = build_table(rows, year, kind, config, Some(true), Some(1));
        if let Some(record) = table.pop() {
            winners.push(record);
        }
    }
    Ok(winners)
}
