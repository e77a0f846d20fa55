pub mod error;
pub mod feature_flags;

// Session, routing and aggregation
pub mod collection;
pub mod dashboard;
pub mod navigation;
pub mod session;
pub mod stats;

// Care records
pub mod care_log;
pub mod document;
pub mod feedback;
pub mod incident;
pub mod medication;
pub mod message;
pub mod note;
pub mod profile;
pub mod staff;
pub mod timesheet;
pub mod training;
pub mod visit;

// Seed data
pub mod mock;

pub use error::*;
pub use feature_flags::*;

pub use collection::*;
pub use dashboard::*;
pub use navigation::{NavIcon, NavItem};
pub use session::*;
pub use stats::*;

pub use care_log::*;
pub use document::*;
pub use feedback::*;
pub use incident::*;
pub use medication::*;
pub use message::*;
pub use note::*;
pub use profile::*;
pub use staff::*;
pub use timesheet::*;
pub use training::*;
pub use visit::*;
