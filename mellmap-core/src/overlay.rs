use mellmap_boundary::Place;

/// Visibility of the detail panel and the photo zoom overlay.
///
/// Both can be open at the same time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlays {
    detail: Option<Place>,
    zoomed_photo: Option<String>,
}

impl Overlays {
    #[must_use]
    pub const fn detail(&self) -> Option<&Place> {
        self.detail.as_ref()
    }

    #[must_use]
    pub fn zoomed_photo(&self) -> Option<&str> {
        self.zoomed_photo.as_deref()
    }

    #[must_use]
    pub const fn is_detail_open(&self) -> bool {
        self.detail.is_some()
    }

    #[must_use]
    pub const fn is_zoom_open(&self) -> bool {
        self.zoomed_photo.is_some()
    }

    pub fn show_detail(&mut self, place: Place) {
        self.detail = Some(place);
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn zoom(&mut self, photo: String) {
        self.zoomed_photo = Some(photo);
    }

    pub fn close_zoom(&mut self) {
        self.zoomed_photo = None;
    }

    /// Handles the cancel key.
    ///
    /// The panel and the zoom overlay are checked independently,
    /// so one keypress closes both if both are open.
    /// Returns `true` if anything was closed.
    pub fn dismiss_on_cancel_key(&mut self) -> bool {
        let mut dismissed = false;
        if self.is_detail_open() {
            self.close_detail();
            dismissed = true;
        }
        if self.is_zoom_open() {
            self.close_zoom();
            dismissed = true;
        }
        dismissed
    }
}
