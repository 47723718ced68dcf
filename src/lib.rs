//! FashNova AI outfit generation service.
//!
//! The gateway in [`routes`] accepts an outfit specification, assembles an
//! image-generation prompt ([`prompt`]), calls the provider ([`openai`]) and
//! decorates the result with table-driven styling text ([`content`]). The
//! client side lives in [`orchestrator`] (three-way generation fan-out) and
//! [`history`] (capacity-bounded persistent design history with gallery
//! filtering).

pub mod content;
pub mod history;
pub mod models;
pub mod openai;
pub mod orchestrator;
pub mod prompt;
pub mod routes;
