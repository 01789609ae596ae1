//! `pk-agent`: parkgoers and where they are stored.
//!
//! A parkgoer is a party of one or more people moving through the park as a
//! unit.  It never holds references to activities: its itinerary and target
//! are [`ActivityId`](pk_core::ActivityId)s, and anything it needs to know
//! about an activity (position, prospective queue length) is passed in by
//! the driver.
//!
//! | Module        | Contents                                           |
//! |---------------|----------------------------------------------------|
//! | [`parkgoer`]  | `Parkgoer`, `ParkgoerState`, `HistoryEntry`, `Movement` |
//! | [`itinerary`] | `Itinerary` and next-target selection              |
//! | [`store`]     | `ParkgoerStore` (live + exited registries)         |

pub mod itinerary;
pub mod parkgoer;
pub mod store;


pub use itinerary::Itinerary;
pub use parkgoer::{HistoryEntry, Movement, Parkgoer, ParkgoerState, StateProportions};
pub use store::ParkgoerStore;
