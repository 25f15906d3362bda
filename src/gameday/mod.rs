//! MLBAM gameday documents.
//!
//! Everything the play-by-play reconstruction reads about a game:
//!
//! - `xml` - generic element/attribute tree
//! - `nodes` - typed at-bat, pitch, runner and action views
//! - `game` - game, team and park context
//! - `players` - roster lookup
//! - `hit_chart` - batted-ball locations
//! - `boxscore` - per-game box score row
//! - `source` - document retrieval

pub mod boxscore;
pub mod error;
pub mod game;
pub mod hit_chart;
pub mod nodes;
pub mod players;
pub mod source;
pub mod xml;

pub use boxscore::{batting_order, BoxScore, BOXSCORE_HEADER};
pub use error::GamedayError;
pub use game::{parse_game_number, GameContext, GAME_HEADER};
pub use hit_chart::{HitChart, HitLocation};
pub use nodes::{ActionNode, AtBatNode, PitchNode, RunnerNode};
pub use players::{Player, PlayerNames, Roster};
pub use source::{GamedaySource, LocalMirror};
pub use xml::Node;
