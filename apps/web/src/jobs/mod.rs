// Recruiter-side job cards: backend boundary, shared store, editor drafts,
// card state machine, view models and the HTTP handlers that drive them.

pub mod backend;
pub mod card;
pub mod draft;
pub mod handlers;
pub mod memory;
pub mod store;
pub mod toast;
pub mod view;
