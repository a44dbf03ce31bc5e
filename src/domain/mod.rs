pub mod account;
pub mod category;
pub mod common;
pub mod project;
pub mod settings;
pub mod transaction;

pub use account::{Account, AccountKind};
pub use category::Category;
pub use common::{Displayable, Identifiable, NamedEntity};
pub use project::{NodeKind, Project, ProjectNode};
pub use settings::{AiConfig, Language, LivingFeeRule, Settings};
pub use transaction::{GeoLocation, Transaction, TransactionKind};
