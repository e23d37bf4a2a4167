//! Song information APIs.
//!
//! # Endpoints
//!
//! ## `song_info` — `GET song/info`
//!
//! Query: `songname` / `songid` / `file` (one of, see
//! [`SongQuery`](crate::types::SongQuery)).
//!
//! Response content:
//! ```json
//! {
//!   "song_id": "fracturedray",
//!   "difficulties": [
//!     { "name_en": "Fracture Ray", "rating": 19, "difficulty": 113, ... },
//!     ...
//!   ]
//! }
//! ```
//!
//! ## `song_alias` — `GET song/alias`
//!
//! Response content: `{ "alias": ["fracture", "光痛", ...] }` — empty array
//! when the song has no registered aliases.
//!
//! ## `song_random` — `GET song/random`
//!
//! Query: `start` / `end` (rating bounds, `9p` form), `withsonginfo`.
//!
//! Response content: `{ "id": "...", "ratingClass": 2, "songinfo": {...}? }`
//!
//! ## `song_list` — `GET song/list`
//!
//! Response content: `{ "songs": [ ...song_info content... ] }`

use crate::client::ArcaeaClient;
use crate::error::Result;
use crate::query::QueryBuilder;
use crate::types::{AliasList, RandomOptions, RandomSong, Rating, SongInfo, SongList, SongQuery};

impl ArcaeaClient {
    /// Get a song's metadata with one entry per chart.
    pub fn song_info(&self, song: &SongQuery) -> Result<SongInfo> {
        let query = song.apply(QueryBuilder::new());
        self.get_json("song/info", &query)
    }

    /// Get the community aliases registered for a song.
    ///
    /// The returned list is empty for songs without aliases; that is a
    /// success, not an error.
    pub fn song_alias(&self, song: &SongQuery) -> Result<AliasList> {
        let query = song.apply(QueryBuilder::new());
        self.get_json("song/alias", &query)
    }

    /// Pick a random chart, optionally constrained to a rating range.
    ///
    /// # Errors
    ///
    /// - [`ArcaeaError::Api`](crate::ArcaeaError::Api) — e.g. an empty range
    /// - [`ArcaeaError::Http`](crate::ArcaeaError::Http) — network failure
    pub fn song_random(&self, opts: &RandomOptions) -> Result<RandomSong> {
        let query = QueryBuilder::new()
            .push("start", opts.start.map(Rating::as_param))
            .push("end", opts.end.map(Rating::as_param))
            .push("withsonginfo", opts.with_songinfo.then_some("true"));
        self.get_json("song/random", &query)
    }

    /// Get the full song catalogue known to the service.
    pub fn song_list(&self) -> Result<SongList> {
        self.get_json("song/list", &QueryBuilder::new())
    }
}
