mod dom;
mod seed;

pub use dom::{TextControlKind, text_control_kind};
pub use seed::{field_key, seed_text_fields_from_dom};
