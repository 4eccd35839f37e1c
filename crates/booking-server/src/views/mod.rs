//! View models
//!
//! Everything here turns store rows into owned, serializable records whose
//! field names the page templates bind to. Nothing in this module touches
//! the store; callers fetch rows and pass a reference instant.

pub mod area;
pub mod listing;
pub mod partition;
pub mod summary;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use area::{group_venues_by_area, Area, AreaVenue, VenueDirectory};
pub use listing::{
    assemble_artist_listing, assemble_home, assemble_search_result, assemble_show_listing,
    matches_search_term, ArtistListing, ArtistName, EntityCard, HomeSummary, SearchResult,
    ShowEntry,
};
pub use partition::{count_upcoming, partition, Partition, Scheduled};
pub use summary::{
    assemble_artist_summary, assemble_venue_summary, ArtistShow, ArtistSummary, VenueShow,
    VenueSummary,
};
