//! Track matching and ranking.
//!
//! Every candidate is run through a checklist of predicates grouped in nine
//! categories. Category scores are combined into a weighted overall score,
//! hard filters reject tracks that miss a requested artist or genre, and the
//! survivors are sorted best first.

pub mod aggregate;
pub mod checklist;
pub mod engine;
mod evaluation;
pub mod gate;
pub mod predicates;
pub mod ranker;
pub mod request;
pub mod score;

pub use aggregate::{explain, CategoryWeights, WeightsError};
pub use checklist::{build_checklist, Checklist};
pub use engine::{
    rank_tracks_by_match, score_track_match, MatchScore, MatcherConfig, RankingOutcome,
    RejectedTrack, TrackMatcher,
};
pub use evaluation::Evaluation;
pub use gate::{GateConfig, Rejection, DEFAULT_MIN_SCORE};
pub use request::MatchRequest;
pub use score::{Category, CategoryScore, CategoryScores};
