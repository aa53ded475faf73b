//! Value objects - Immutable objects defined by their attributes

mod contact_name;
mod phone_number;

pub use contact_name::ContactName;
pub use phone_number::{NumberPolicy, PhoneNumber};
