pub mod filter;
pub mod normalize;
pub mod order;
pub mod selection;
pub mod session;

pub use filter::{FilterState, StationChoice, StationFilter, is_visible};
pub use normalize::normalize;
pub use order::{SortMode, order};
pub use selection::{Mark, SelectionState};
pub use session::{RosterSession, RosterView};
