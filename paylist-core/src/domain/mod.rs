//! Core domain entities
//!
//! Native records for each remote source plus the uniform [`ListItem`]
//! they are normalized into. Pure data, no I/O.

mod card;
mod contact;
mod item;
pub mod result;
mod transfer;

pub use card::Card;
pub use contact::Contact;
pub use item::{ListItem, Select, SelectAction};
pub use transfer::{Transfer, TransferDirection};
