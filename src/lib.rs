//! Synthetic hot cocoa championship.
//!
//! Generates sixteen recipes with correlated attribute scores, plays them through a four round
//! single elimination bracket with noisy, attribute driven voting, and exports the result as a
//! JSON record, a Markdown report and a match CSV. The [`charts`] module turns an exported record
//! back into chart-ready shapes.
//!
//! ```no_run
//! use cocoa_bracket::tournament::Tournament;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut tournament = Tournament::default();
//! tournament.run_tournament(&mut rng).unwrap();
//! println!("{:?}", tournament.get_champion());
//! ```

pub mod charts;
pub mod data_loader;
pub mod error;
pub mod export;
pub mod recipe;
pub mod report;
pub mod tournament;
pub mod tournament_context;
pub mod util;
pub mod voting;

pub use error::{Result, TournamentError};
