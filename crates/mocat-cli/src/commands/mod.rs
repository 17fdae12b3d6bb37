//! CLI command implementations.

mod check;
mod inspect;
mod lookup;
mod plural;

pub use check::{run_check, CheckArgs};
pub use inspect::{run_inspect, InspectArgs};
pub use lookup::{run_lookup, LookupArgs};
pub use plural::{run_plural, PluralArgs};
