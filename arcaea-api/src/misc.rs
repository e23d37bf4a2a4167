//! Utility APIs.
//!
//! ## `update_info` — `GET update`
//!
//! Response content: `{ "url": "https://.../arcaea_5.5.8c.apk", "version": "5.5.8c" }`
//!
//! ## `play_data` — `GET playdata`
//!
//! Query: song selector, `difficulty`, `start` / `end` (score bounds).
//!
//! Response content: an array of score bands over the tracked players:
//! ```json
//! [ { "fscore": 9900000, "count": 12 }, { "fscore": 9950000, "count": 4 } ]
//! ```

use crate::client::ArcaeaClient;
use crate::error::Result;
use crate::query::QueryBuilder;
use crate::types::{Difficulty, PlayDataBand, SongQuery, UpdateInfo};

impl ArcaeaClient {
    /// Get the download URL and version of the latest game package.
    pub fn update_info(&self) -> Result<UpdateInfo> {
        self.get_json("update", &QueryBuilder::new())
    }

    /// Get the score distribution of tracked players on one chart, limited
    /// to best scores within `start..=end`.
    pub fn play_data(
        &self,
        song: &SongQuery,
        difficulty: Difficulty,
        start: u64,
        end: u64,
    ) -> Result<Vec<PlayDataBand>> {
        let query = song
            .apply(QueryBuilder::new())
            .push("difficulty", Some(difficulty.as_param()))
            .push("start", Some(start.to_string()))
            .push("end", Some(end.to_string()));
        self.get_json("playdata", &query)
    }
}
