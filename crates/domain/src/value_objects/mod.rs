//! Value Objects - Immutable, identity-less domain primitives

mod cep;
mod event_slug;
mod party_size;
mod whatsapp_number;

pub use cep::Cep;
pub use event_slug::EventSlug;
pub use party_size::PartySize;
pub use whatsapp_number::WhatsAppNumber;
