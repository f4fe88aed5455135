pub mod checker;
pub mod wcag;
