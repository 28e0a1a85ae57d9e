pub mod change;
pub mod effect;
pub mod entry;
pub mod error;
pub mod script;

pub use change::{Author, Change, Revision};
pub use effect::{
    DestinationEffect, DestinationRef, DestinationRefBuilder, EffectBuilder, EffectType,
};
pub use entry::EffectEntry;
pub use error::EffectError;
