//! Infrastructure layer: wire DTOs and concrete collaborators.

pub mod dto;
pub mod message_pusher;
pub mod randomizer;
