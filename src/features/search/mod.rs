//! Debounced type-ahead search over personnel and team prefixes.
//!
//! | Widget | Source | Binding |
//! |--------|--------|---------|
//! | Attendance name field | [`PersonnelSource`] | [`PersonnelFormBinding`] |
//! | Prefix field | [`PrefixSource`] | [`PrefixBinding`] |
//! | Unavailability name field | [`PersonnelSource`] | [`UnavailabilityBinding`] |
//! | Reassignment search | [`ReassignmentSource`] | [`NoBinding`] |

pub mod bindings;
pub mod clients;
pub mod dtos;
pub mod sources;
pub mod widget;

pub use bindings::{
    NoBinding, PersonnelFormBinding, PrefixBinding, SelectionBinding, UnavailabilityBinding,
};
pub use clients::{HttpSearchClient, SearchBackend};
pub use sources::{PersonnelSource, PrefixSource, ReassignmentSource, SuggestionSource};
pub use widget::{ClickTarget, PanelRow, PanelView, SuggestionWidget};
