//! Editable checklist core
//!
//! The list-and-selection state machine behind an editable checklist: ordered
//! items with editable text, a selection for bulk deletion, per-item edit
//! state and the backspace deletion policy. Rendering is left to the caller,
//! which forwards [`Event`]s and renders the returned [`ChecklistView`].

pub mod controller;
pub mod edit;
pub mod error;
pub mod event;
pub mod id;
pub mod key;
pub mod selection;
pub mod store;
pub mod view;

pub use controller::ListController;
pub use edit::{BackspaceAction, EditState, EditStates, backspace_action};
pub use error::{ChecklistError, ChecklistResult};
pub use event::{Event, Outcome};
pub use id::{IdGenerator, ItemId, RandomIds, SequentialIds};
pub use key::{Key, KeyParseError};
pub use selection::SelectionSet;
pub use store::{Item, ItemStore};
pub use view::{ChecklistView, ItemView};
