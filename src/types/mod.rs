mod sighting;

pub use sighting::{Sighting, SightingId, SightingInfo, SightingUpdateInfo};
