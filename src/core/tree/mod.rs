//! The project tree engine: a mutable forest of transaction and group
//! nodes per project, with derived aggregate totals, drag-and-drop
//! re-parenting, cycle prevention, and incremental synchronization
//! against the flat transaction ledger.

pub mod acyclic;
pub mod engine;
pub mod totals;
pub mod ui_state;
pub mod view;

pub use acyclic::can_adopt;
pub use engine::TreeEngine;
pub use totals::compute_totals;
pub use ui_state::TreeUiState;
pub use view::{LaneSide, TreeView};
