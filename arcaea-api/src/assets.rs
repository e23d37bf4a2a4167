//! Binary asset APIs: partner icons, character art, song covers, chart
//! preview audio.
//!
//! Unlike the JSON endpoints these return the asset bytes directly with no
//! envelope, so the only failure signal is the HTTP status: non-2xx maps to
//! [`ArcaeaError::Http`](crate::ArcaeaError::Http) and a 2xx body is returned
//! unmodified.
//!
//! | Method          | Path             | Query                              |
//! |-----------------|------------------|------------------------------------|
//! | `asset_icon`    | `assets/icon`    | `partner`, `awakened`              |
//! | `asset_char`    | `assets/char`    | `partner`, `awakened`              |
//! | `asset_song`    | `assets/song`    | song selector, `difficulty` (byd)  |
//! | `asset_preview` | `assets/preview` | song selector, `difficulty`        |

use crate::client::ArcaeaClient;
use crate::error::Result;
use crate::query::QueryBuilder;
use crate::types::{Difficulty, SongQuery};

impl ArcaeaClient {
    /// Get a partner's icon (small avatar) as PNG bytes.
    pub fn asset_icon(&self, partner: u32, awakened: bool) -> Result<Vec<u8>> {
        let query = partner_query(partner, awakened);
        self.get_bytes("assets/icon", &query)
    }

    /// Get a partner's full character art as PNG bytes.
    pub fn asset_char(&self, partner: u32, awakened: bool) -> Result<Vec<u8>> {
        let query = partner_query(partner, awakened);
        self.get_bytes("assets/char", &query)
    }

    /// Get a song's cover art (jacket) as JPEG bytes.
    ///
    /// Pass `Some(Difficulty::Beyond)` for songs whose Beyond chart has its
    /// own jacket; `None` selects the base cover.
    pub fn asset_song(&self, song: &SongQuery, difficulty: Option<Difficulty>) -> Result<Vec<u8>> {
        let query = song
            .apply(QueryBuilder::new())
            .push("difficulty", difficulty.map(Difficulty::as_param));
        self.get_bytes("assets/song", &query)
    }

    /// Get a chart's preview audio clip as bytes.
    pub fn asset_preview(&self, song: &SongQuery, difficulty: Difficulty) -> Result<Vec<u8>> {
        let query = song
            .apply(QueryBuilder::new())
            .push("difficulty", Some(difficulty.as_param()));
        self.get_bytes("assets/preview", &query)
    }
}

fn partner_query(partner: u32, awakened: bool) -> QueryBuilder {
    QueryBuilder::new()
        .push("partner", Some(partner.to_string()))
        .push("awakened", awakened.then_some("true"))
}
