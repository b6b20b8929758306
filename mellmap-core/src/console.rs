//! Transitions of the admin console around its mutations.

use mellmap_boundary::PlaceId;

use crate::form::{FormSession, SaveRequest};

/// What the console does once a mutation went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Followup {
    /// Fetch the full list again.
    ReloadList,
}

/// A delete is only sent after the user confirmed it.
#[must_use]
pub const fn delete_intent(id: PlaceId, confirmed: bool) -> Option<PlaceId> {
    if confirmed {
        Some(id)
    } else {
        None
    }
}

#[must_use]
pub fn finish_delete(id: PlaceId) -> Followup {
    log::debug!("Place {id} deleted");
    Followup::ReloadList
}

/// Back to a pristine create form, no matter which kind of save it was.
#[must_use]
pub fn finish_save(session: &mut FormSession, request: &SaveRequest) -> Followup {
    match request {
        SaveRequest::Create(place) => log::debug!("Created place \"{}\"", place.name),
        SaveRequest::Update(id, _) => log::debug!("Updated place {id}"),
    }
    *session = FormSession::default();
    Followup::ReloadList
}
