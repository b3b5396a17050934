//! Model-View-Intent (MVI) primitives shared by the screen state machines.
//!
//! # Architecture
//!
//! ```text
//! Input ──→ ViewModel ──→ Intent ──→ Reducer ──→ State ──→ View
//!   ↑           │                                           │
//!   │           └──→ side effects (API, store) ──→ Intent   │
//!   └───────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: snapshot published to the view layer
//! - **Intent**: state transition request (user action or effect completion)
//! - **Reducer**: pure function that transforms state based on intents
//!
//! Side effects never run inside a reducer; view-models perform them around
//! the dispatch and feed completions back as intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
