//! Player lookup APIs.
//!
//! # Endpoints
//!
//! ## `user_info` — `GET user/info`
//!
//! Query: `user` / `usercode`, `recent` (0–7), `withsonginfo`.
//!
//! Response content:
//! ```json
//! {
//!   "account_info": { "code": "062596721", "name": "Nagiha", "rating": 1274, ... },
//!   "recent_score": [ { "song_id": "...", "score": 9984321, ... } ],
//!   "songinfo": [ { "name_en": "...", ... } ]
//! }
//! ```
//!
//! ## `user_best` — `GET user/best`
//!
//! Query: `user` / `usercode`, `songname` / `songid`, `difficulty` (0–3),
//! `withsonginfo`.
//!
//! Response content: `{ "account_info": {...}, "record": {...}, "songinfo"? }`
//!
//! ## `user_best30` — `GET user/best30`
//!
//! Query: `user` / `usercode`, `overflow` (0–10), `withsonginfo`.
//!
//! Response content: best-30 averages, the record list, and (when requested)
//! overflow records past the top 30.

use crate::client::ArcaeaClient;
use crate::error::Result;
use crate::query::QueryBuilder;
use crate::types::{
    Difficulty, SongQuery, UserBest, UserBest30, UserBest30Options, UserBestOptions, UserInfo,
    UserInfoOptions, UserQuery,
};

impl ArcaeaClient {
    /// Get a player's account info, optionally with recent plays.
    ///
    /// # Errors
    ///
    /// - [`ArcaeaError::Api`](crate::ArcaeaError::Api) — user not found, or
    ///   the account is shadow banned
    /// - [`ArcaeaError::Http`](crate::ArcaeaError::Http) — network failure
    pub fn user_info(&self, user: &UserQuery, opts: &UserInfoOptions) -> Result<UserInfo> {
        let query = user
            .apply(QueryBuilder::new())
            .push("recent", opts.recent.map(|n| n.to_string()))
            .push("withsonginfo", opts.with_songinfo.then_some("true"));
        self.get_json("user/info", &query)
    }

    /// Get a player's best score on one chart.
    pub fn user_best(
        &self,
        user: &UserQuery,
        song: &SongQuery,
        difficulty: Difficulty,
        opts: &UserBestOptions,
    ) -> Result<UserBest> {
        let query = song
            .apply(user.apply(QueryBuilder::new()))
            .push("difficulty", Some(difficulty.as_param()))
            .push("withsonginfo", opts.with_songinfo.then_some("true"));
        self.get_json("user/best", &query)
    }

    /// Get a player's best-30 list with the b30/r10 averages.
    ///
    /// Fetching best30 walks the player's whole score table server-side and
    /// can take the service several seconds on a cold cache.
    pub fn user_best30(&self, user: &UserQuery, opts: &UserBest30Options) -> Result<UserBest30> {
        let query = user
            .apply(QueryBuilder::new())
            .push("overflow", opts.overflow.map(|n| n.to_string()))
            .push("withsonginfo", opts.with_songinfo.then_some("true"));
        self.get_json("user/best30", &query)
    }
}
