pub mod guard;
pub mod layout;
pub mod notice;
pub mod tag;
