/// Shown when a place has no photos at all.
pub const NO_PHOTO_PLACEHOLDER: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iODAwIiBoZWlnaHQ9IjUwMCIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj4KICA8cmVjdCB3aWR0aD0iMTAwJSIgaGVpZ2h0PSIxMDAlIiBmaWxsPSIjZGRkIiAvPgogIDx0ZXh0IHg9IjQwMCIgeT0iMjUwIiBmb250LWZhbWlseT0ic2Fucy1zZXJpZiIgZm9udC1zaXplPSIxOCIgdGV4dC1hbmNob3I9Im1pZGRsZSIgZmlsbD0iIzk5OSI+Tm8gUGhvdG88L3RleHQ+Cjwvc3ZnPgo=";
pub const NO_PHOTO_ALT: &str = "Нет фото";

/// Index state of a one-photo-at-a-time viewer.
///
/// Previous, next and the indicator dots all end up in [`Carousel::set_active`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
}

impl Carousel {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Navigation controls and indicators are only shown for real photos.
    #[must_use]
    pub const fn has_controls(&self) -> bool {
        !self.is_empty()
    }

    #[must_use]
    pub const fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub const fn is_active(&self, index: usize) -> bool {
        !self.is_empty() && self.active == index
    }

    /// Wraps around in both directions.
    pub fn set_active(&mut self, index: usize) {
        if self.is_empty() {
            return;
        }
        self.active = index % self.len;
    }

    pub fn next(&mut self) {
        self.set_active(self.active + 1);
    }

    pub fn prev(&mut self) {
        self.set_active(self.active + self.len.saturating_sub(1));
    }
}

/// The images to render: the photos themselves or the placeholder.
#[must_use]
pub fn slides(photos: &[String]) -> Vec<String> {
    if photos.is_empty() {
        vec![NO_PHOTO_PLACEHOLDER.to_owned()]
    } else {
        photos.to_vec()
    }
}
