//! Card records and the card registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for a card
//! - `CardKind`: Land, Creature (with attack/defence), Spell, Enchant
//! - `Card`: Printed card data plus its effect text
//! - `CardRecord`: Flat serializable view for persistence and UI layers
//! - `CardRegistry`: Cards with their parsed instructions
//!
//! Cards are collaborators of the effect parser: they supply effect text
//! and receive static abilities back as statuses.

pub mod card;
pub mod registry;

pub use card::{Card, CardId, CardKind, CardRecord, RecordError};
pub use registry::{CardRegistry, CompiledCard, LoadPolicy, RegistryError};
