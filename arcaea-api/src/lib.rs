//! Arcaea game-data API client library.
//!
//! Typed blocking client for community-run Arcaea data services exposing the
//! BotArcAPI-style REST surface: song metadata, player lookups, best-30
//! queries, and raw game assets.
//!
//! ```no_run
//! use arcaea_api::types::{SongQuery, UserInfoOptions, UserQuery};
//! use arcaea_api::ArcaeaClient;
//!
//! let client = ArcaeaClient::new("https://server.example/botarcapi").unwrap();
//! let song = client.song_info(&SongQuery::name("fracture")).unwrap();
//! let user = client.user_info(
//!     &UserQuery::code("062596721"),
//!     &UserInfoOptions { recent: Some(1), ..Default::default() },
//! ).unwrap();
//! println!("{} — ptt {}", user.account_info.name, user.account_info.rating);
//! ```
//!
//! # API endpoint mapping
//!
//! | Method                           | Endpoint         | Description              |
//! |----------------------------------|------------------|--------------------------|
//! | [`ArcaeaClient::song_info`]      | `song/info`      | Song & chart metadata    |
//! | [`ArcaeaClient::song_alias`]     | `song/alias`     | Community aliases        |
//! | [`ArcaeaClient::song_random`]    | `song/random`    | Random chart pick        |
//! | [`ArcaeaClient::song_list`]      | `song/list`      | Full song catalogue      |
//! | [`ArcaeaClient::user_info`]      | `user/info`      | Account & recent plays   |
//! | [`ArcaeaClient::user_best`]      | `user/best`      | Best score on a chart    |
//! | [`ArcaeaClient::user_best30`]    | `user/best30`    | Best-30 list & averages  |
//! | [`ArcaeaClient::update_info`]    | `update`         | Latest game package      |
//! | [`ArcaeaClient::play_data`]      | `playdata`       | Score distribution       |
//! | [`ArcaeaClient::asset_icon`]     | `assets/icon`    | Partner icon (bytes)     |
//! | [`ArcaeaClient::asset_char`]     | `assets/char`    | Character art (bytes)    |
//! | [`ArcaeaClient::asset_song`]     | `assets/song`    | Song cover (bytes)       |
//! | [`ArcaeaClient::asset_preview`]  | `assets/preview` | Chart preview (bytes)    |
//!
//! # Errors
//!
//! JSON endpoints wrap their payload in a `{status, message, content}`
//! envelope; a negative `status` becomes [`ArcaeaError::Api`] with the
//! service's code and message verbatim, and an envelope that breaks the
//! contract becomes [`ArcaeaError::Malformed`]. Asset endpoints have no
//! envelope, so their failures (and all connection-level failures) surface
//! as [`ArcaeaError::Http`]. The client never retries and never logs.

mod assets;
pub mod client;
mod envelope;
pub mod error;
mod misc;
pub mod query;
mod song;
pub mod types;
mod user;

pub use client::ArcaeaClient;
pub use error::{ArcaeaError, Result};
