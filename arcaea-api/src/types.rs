//! Data types for Arcaea game-data API requests and responses.
//!
//! Response DTOs are deserialized straight from the JSON `content` field of
//! the envelope; field names match the wire format (the service already uses
//! `snake_case` for most fields). Request-side types ([`SongQuery`],
//! [`UserQuery`], [`Difficulty`], [`Rating`] and the per-call `*Options`
//! structs) know how to render themselves into query parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::query::QueryBuilder;

/// Chart difficulty class.
///
/// Sent to the API as its ordinal (`0`–`3`) and deserialized from the same
/// ordinal in play records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Difficulty {
    Past,
    Present,
    Future,
    Beyond,
}

impl Difficulty {
    /// The `difficulty` query-parameter value (`"0"`–`"3"`).
    pub fn as_param(self) -> &'static str {
        match self {
            Self::Past => "0",
            Self::Present => "1",
            Self::Future => "2",
            Self::Beyond => "3",
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Past),
            1 => Ok(Self::Present),
            2 => Ok(Self::Future),
            3 => Ok(Self::Beyond),
            other => Err(format!("invalid difficulty ordinal: {other}")),
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(value: Difficulty) -> Self {
        match value {
            Difficulty::Past => 0,
            Difficulty::Present => 1,
            Difficulty::Future => 2,
            Difficulty::Beyond => 3,
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    /// Accepts the ordinal (`"2"`) or the usual abbreviation (`"ftr"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "0" | "pst" | "past" => Ok(Self::Past),
            "1" | "prs" | "present" => Ok(Self::Present),
            "2" | "ftr" | "future" => Ok(Self::Future),
            "3" | "byd" | "byn" | "beyond" => Ok(Self::Beyond),
            other => Err(format!("invalid difficulty: {other}")),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Past => "Past",
            Self::Present => "Present",
            Self::Future => "Future",
            Self::Beyond => "Beyond",
        };
        f.write_str(name)
    }
}

/// A chart-constant bound for rating-range queries, e.g. `9` or `9+`.
///
/// The wire format spells the plus suffix as `p` (`9+` → `9p`), and
/// [`FromStr`] accepts both spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating {
    level: u8,
    plus: bool,
}

impl Rating {
    /// A plain level bound, e.g. `Rating::new(9)` for `9`.
    pub fn new(level: u8) -> Self {
        Self { level, plus: false }
    }

    /// A plus-suffixed bound, e.g. `Rating::plus(9)` for `9+`.
    pub fn plus(level: u8) -> Self {
        Self { level, plus: true }
    }

    /// The `start`/`end` query-parameter value (`"9"` or `"9p"`).
    pub fn as_param(self) -> String {
        if self.plus {
            format!("{}p", self.level)
        } else {
            self.level.to_string()
        }
    }
}

impl FromStr for Rating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (digits, plus) = match s.strip_suffix(['+', 'p']) {
            Some(rest) => (rest, true),
            None => (s, false),
        };
        let level: u8 = digits
            .parse()
            .map_err(|_| format!("invalid rating: {s}"))?;
        Ok(Self { level, plus })
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.plus {
            write!(f, "{}+", self.level)
        } else {
            write!(f, "{}", self.level)
        }
    }
}

/// Selects a song for song-scoped endpoints.
///
/// The service resolves songs three ways; each maps to a different query
/// parameter:
///
/// | Variant  | Parameter  | Matching                        |
/// |----------|------------|---------------------------------|
/// | `Name`   | `songname` | fuzzy match on title or alias   |
/// | `Id`     | `songid`   | exact internal song id          |
/// | `File`   | `file`     | exact sound-file name           |
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SongQuery {
    Name(String),
    Id(String),
    File(String),
}

impl SongQuery {
    /// Fuzzy title/alias lookup.
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Exact song-id lookup.
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Exact sound-file-name lookup.
    pub fn file(file: impl Into<String>) -> Self {
        Self::File(file.into())
    }

    pub(crate) fn apply(&self, query: QueryBuilder) -> QueryBuilder {
        match self {
            Self::Name(name) => query.push("songname", Some(name)),
            Self::Id(id) => query.push("songid", Some(id)),
            Self::File(file) => query.push("file", Some(file)),
        }
    }
}

/// Selects a player for user-scoped endpoints: display name or the 9-digit
/// friend code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserQuery {
    Name(String),
    Code(String),
}

impl UserQuery {
    /// Lookup by display name (`user` parameter).
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Lookup by friend code (`usercode` parameter).
    pub fn code(code: impl Into<String>) -> Self {
        Self::Code(code.into())
    }

    pub(crate) fn apply(&self, query: QueryBuilder) -> QueryBuilder {
        match self {
            Self::Name(name) => query.push("user", Some(name)),
            Self::Code(code) => query.push("usercode", Some(code)),
        }
    }
}

/// Options for [`user_info`](crate::ArcaeaClient::user_info).
#[derive(Debug, Clone, Default)]
pub struct UserInfoOptions {
    /// Number of recent plays to include (0–7).
    pub recent: Option<u8>,
    /// Attach chart metadata for each returned play.
    pub with_songinfo: bool,
}

/// Options for [`user_best`](crate::ArcaeaClient::user_best).
#[derive(Debug, Clone, Default)]
pub struct UserBestOptions {
    /// Attach chart metadata for the returned record.
    pub with_songinfo: bool,
}

/// Options for [`user_best30`](crate::ArcaeaClient::user_best30).
#[derive(Debug, Clone, Default)]
pub struct UserBest30Options {
    /// Number of overflow records past the best 30 to include (0–10).
    pub overflow: Option<u8>,
    /// Attach chart metadata for each returned record.
    pub with_songinfo: bool,
}

/// Options for [`song_random`](crate::ArcaeaClient::song_random).
#[derive(Debug, Clone, Default)]
pub struct RandomOptions {
    /// Lower chart-constant bound, inclusive.
    pub start: Option<Rating>,
    /// Upper chart-constant bound, inclusive.
    pub end: Option<Rating>,
    /// Attach chart metadata for the picked chart.
    pub with_songinfo: bool,
}

/// Player account summary.
///
/// Returned inside [`UserInfo`], [`UserBest`], and [`UserBest30`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountInfo {
    /// 9-digit friend code.
    pub code: String,
    pub user_id: u64,
    /// Display name.
    pub name: String,
    /// Selected partner (character) id.
    pub character: i64,
    pub join_date: i64,
    /// Potential, multiplied by 100 (`1250` = 12.50). `-1` if hidden.
    pub rating: i64,
    pub is_skill_sealed: bool,
    pub is_char_uncapped: bool,
    pub is_char_uncapped_override: bool,
    pub is_mutual: bool,
}

/// A single scored play.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayRecord {
    pub song_id: String,
    pub difficulty: Difficulty,
    pub score: u64,
    /// Play rating (potential contribution) for this score.
    pub rating: f64,
    pub health: i64,
    pub modifier: i64,
    pub clear_type: i64,
    pub best_clear_type: i64,
    /// Unix timestamp in milliseconds.
    pub time_played: i64,
    pub perfect_count: u64,
    pub shiny_perfect_count: u64,
    pub near_count: u64,
    pub miss_count: u64,
}

/// Metadata for one chart of a song.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartInfo {
    pub name_en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_jp: Option<String>,
    pub artist: String,
    /// Display BPM string, e.g. `"126-220"`.
    pub bpm: String,
    pub bpm_base: f64,
    /// Pack (song set) id.
    pub set: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_friendly: Option<String>,
    /// Chart length in seconds.
    pub time: i64,
    /// Track side (0 = light, 1 = conflict, 2 = colorless).
    pub side: i64,
    pub world_unlock: bool,
    pub remote_download: bool,
    /// Background art id.
    pub bg: String,
    /// Release date, Unix timestamp in seconds.
    pub date: i64,
    /// Game version the chart was added in.
    pub version: String,
    /// Chart constant multiplied by 10 (`107` = 10.7).
    pub difficulty: i64,
    /// Displayed level multiplied by 2 (`19` = 9+).
    pub rating: i64,
    pub note: i64,
    pub chart_designer: String,
    pub jacket_designer: String,
    #[serde(default)]
    pub jacket_override: bool,
    #[serde(default)]
    pub audio_override: bool,
}

/// Content of `song/info`: one song with all of its charts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongInfo {
    pub song_id: String,
    /// One entry per difficulty class, ordered Past → Beyond.
    pub difficulties: Vec<ChartInfo>,
}

/// Content of `song/alias`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AliasList {
    /// Community aliases for the song. Empty when none are registered.
    pub alias: Vec<String>,
}

/// Content of `song/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongList {
    pub songs: Vec<SongInfo>,
}

/// Content of `song/random`: a randomly picked chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomSong {
    pub id: String,
    #[serde(rename = "ratingClass")]
    pub rating_class: Difficulty,
    /// Chart metadata, present when requested via
    /// [`RandomOptions::with_songinfo`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub songinfo: Option<ChartInfo>,
}

/// Content of `user/info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub account_info: AccountInfo,
    /// Most recent plays, newest first. Empty unless `recent` was requested.
    #[serde(default)]
    pub recent_score: Vec<PlayRecord>,
    /// Chart metadata parallel to `recent_score`, present when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub songinfo: Option<Vec<ChartInfo>>,
}

/// Content of `user/best`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserBest {
    pub account_info: AccountInfo,
    pub record: PlayRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub songinfo: Option<Vec<ChartInfo>>,
}

/// Content of `user/best30`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserBest30 {
    pub best30_avg: f64,
    pub recent10_avg: f64,
    pub account_info: AccountInfo,
    /// Top plays, highest rating first.
    pub best30_list: Vec<PlayRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best30_songinfo: Option<Vec<ChartInfo>>,
    /// Records past the top 30, present when requested via
    /// [`UserBest30Options::overflow`].
    #[serde(default)]
    pub best30_overflow: Vec<PlayRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best30_overflow_songinfo: Option<Vec<ChartInfo>>,
}

/// Content of `update`: latest game package.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateInfo {
    pub url: String,
    pub version: String,
}

/// One score band of `playdata`: how many tracked players' best score for the
/// chart falls at `fscore`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayDataBand {
    pub fscore: i64,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_ordinals_and_abbreviations() {
        assert_eq!("2".parse::<Difficulty>().unwrap(), Difficulty::Future);
        assert_eq!("byd".parse::<Difficulty>().unwrap(), Difficulty::Beyond);
        assert_eq!("PST".parse::<Difficulty>().unwrap(), Difficulty::Past);
        assert!("4".parse::<Difficulty>().is_err());
    }

    #[test]
    fn difficulty_deserializes_from_ordinal() {
        let d: Difficulty = serde_json::from_str("3").unwrap();
        assert_eq!(d, Difficulty::Beyond);
        assert!(serde_json::from_str::<Difficulty>("7").is_err());
    }

    #[test]
    fn rating_parses_both_plus_spellings() {
        assert_eq!("9+".parse::<Rating>().unwrap(), Rating::plus(9));
        assert_eq!("9p".parse::<Rating>().unwrap(), Rating::plus(9));
        assert_eq!("10".parse::<Rating>().unwrap(), Rating::new(10));
        assert!("x+".parse::<Rating>().is_err());
    }

    #[test]
    fn rating_wire_form_uses_p_suffix() {
        assert_eq!(Rating::plus(9).as_param(), "9p");
        assert_eq!(Rating::new(11).as_param(), "11");
    }

    #[test]
    fn song_query_maps_to_its_parameter() {
        let q = SongQuery::name("fracture").apply(QueryBuilder::new());
        assert_eq!(q.build(), "?songname=fracture");
        let q = SongQuery::id("fracturedray").apply(QueryBuilder::new());
        assert_eq!(q.build(), "?songid=fracturedray");
        let q = SongQuery::file("fracturedray.ogg").apply(QueryBuilder::new());
        assert_eq!(q.build(), "?file=fracturedray.ogg");
    }

    #[test]
    fn play_record_deserializes_from_wire_json() {
        let json = r#"{
            "song_id": "fracturedray",
            "difficulty": 2,
            "score": 9984321,
            "rating": 12.21,
            "health": 100,
            "modifier": 0,
            "clear_type": 1,
            "best_clear_type": 5,
            "time_played": 1662898873000,
            "perfect_count": 1278,
            "shiny_perfect_count": 1200,
            "near_count": 4,
            "miss_count": 0
        }"#;
        let record: PlayRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.difficulty, Difficulty::Future);
        assert_eq!(record.score, 9_984_321);
    }
}
