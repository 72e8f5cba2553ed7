//! Pitchsmith Core - Template registry and message composer
//!
//! Pure data and pure functions. The configurator UI collects an
//! [`AgentConfig`]; [`compose`] turns it into a [`GeneratedMessage`] by
//! combining the static copy tables in [`templates`] and [`catalog`].
//! Nothing in this crate performs I/O.

pub mod catalog;
pub mod compose;
pub mod config;
pub mod enums;
pub mod error;
pub mod export;
pub mod message;
pub mod templates;

pub use catalog::{agent_personas, persona_by_id, product_by_id, product_catalog, AgentPersona, Product};
pub use compose::compose;
pub use config::AgentConfig;
pub use enums::{BuyerArchetype, Channel, CustomerStage, FollowUpCadence};
pub use error::ValidationError;
pub use export::playbook_bundle;
pub use message::{ChannelMessage, GeneratedMessage};
pub use templates::{
    archetype_angle, delivery_template, follow_up_plays, stage_copy, success_metric,
    ArchetypeAngle, DeliveryTemplate, StageCopy,
};
