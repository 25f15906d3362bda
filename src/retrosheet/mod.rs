//! Retrosheet coding rules.
//!
//! Pure functions shared by the play-by-play assemblers:
//!
//! - `event` - event codes and batted-ball codes from outcome text
//! - `count` - ball/strike counter and plate-appearance termination
//! - `bases` - base occupancy strings

pub mod bases;
pub mod count;
pub mod event;

pub use bases::{base_state, BaseOccupancy};
pub use count::{advance_count, is_pa_terminal, Count, PitchResult};
pub use event::{battedball_code, event_code, BattedBall, EventCode, EventRule, EVENT_RULES};
