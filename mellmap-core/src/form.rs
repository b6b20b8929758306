//! State of the create/edit form of the admin console.

use mellmap_boundary::{BreakfastTime, NewPlace, Place, PlaceId};
use thiserror::Error;

use crate::{district::DISTRICTS, price};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(PlaceId),
}

impl FormMode {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Create => "Добавить заведение",
            Self::Edit(_) => "Редактирование заведения",
        }
    }

    #[must_use]
    pub const fn submit_label(self) -> &'static str {
        match self {
            Self::Create => "Добавить заведение",
            Self::Edit(_) => "Сохранить изменения",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceField {
    Name,
    District,
    Category,
    Lat,
    Lng,
    Address,
    Website,
    Price,
    Rating,
    Description,
    BreakfastTime,
    BreakfastHours,
}

/// Raw input values, exactly as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceForm {
    /// The hidden id field; set iff an existing place is edited.
    pub edit_id: Option<PlaceId>,
    pub name: String,
    pub district: String,
    pub category: String,
    pub lat: String,
    pub lng: String,
    pub address: String,
    pub website: String,
    /// Amount without the currency glyph.
    pub price: String,
    pub rating: String,
    pub description: String,
    pub breakfast_time: BreakfastTime,
    pub breakfast_hours: String,
}

impl Default for PlaceForm {
    fn default() -> Self {
        Self {
            edit_id: None,
            name: String::new(),
            district: DISTRICTS[0].to_owned(),
            category: String::new(),
            lat: String::new(),
            lng: String::new(),
            address: String::new(),
            website: String::new(),
            price: String::new(),
            rating: String::new(),
            description: String::new(),
            breakfast_time: BreakfastTime::AllDay,
            breakfast_hours: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Неверные координаты")]
    InvalidCoordinates,
}

/// Where and how a submission is sent.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveRequest {
    Create(NewPlace),
    Update(PlaceId, NewPlace),
}

fn trimmed_or_none(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_owned())
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

impl PlaceForm {
    #[must_use]
    pub fn from_place(place: &Place) -> Self {
        let Place {
            id,
            name,
            district,
            category,
            lat,
            lng,
            address,
            website,
            price,
            rating,
            description,
            breakfast_time,
            breakfast_hours,
            photos: _,
        } = place;
        let number = |v: &Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();
        Self {
            edit_id: Some(*id),
            name: name.clone(),
            district: district.clone(),
            category: category.clone(),
            lat: number(lat),
            lng: number(lng),
            address: address.clone(),
            website: website.clone().unwrap_or_default(),
            price: price::editable_amount(price),
            rating: rating.to_string(),
            description: description.clone().unwrap_or_default(),
            breakfast_time: breakfast_time.clone(),
            breakfast_hours: breakfast_hours.clone().unwrap_or_default(),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> FormMode {
        match self.edit_id {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }

    /// The hours input is only relevant for a specific breakfast time.
    #[must_use]
    pub const fn shows_breakfast_hours(&self) -> bool {
        self.breakfast_time.is_specific_time()
    }

    #[must_use]
    pub fn field(&self, field: PlaceField) -> &str {
        match field {
            PlaceField::Name => &self.name,
            PlaceField::District => &self.district,
            PlaceField::Category => &self.category,
            PlaceField::Lat => &self.lat,
            PlaceField::Lng => &self.lng,
            PlaceField::Address => &self.address,
            PlaceField::Website => &self.website,
            PlaceField::Price => &self.price,
            PlaceField::Rating => &self.rating,
            PlaceField::Description => &self.description,
            PlaceField::BreakfastTime => self.breakfast_time.as_str(),
            PlaceField::BreakfastHours => &self.breakfast_hours,
        }
    }

    pub fn set_field(&mut self, field: PlaceField, value: String) {
        match field {
            PlaceField::Name => self.name = value,
            PlaceField::District => self.district = value,
            PlaceField::Category => self.category = value,
            PlaceField::Lat => self.lat = value,
            PlaceField::Lng => self.lng = value,
            PlaceField::Address => self.address = value,
            PlaceField::Website => self.website = value,
            PlaceField::Price => self.price = value,
            PlaceField::Rating => self.rating = value,
            PlaceField::Description => self.description = value,
            PlaceField::BreakfastTime => self.breakfast_time = BreakfastTime::from_raw(&value),
            PlaceField::BreakfastHours => self.breakfast_hours = value,
        }
    }

    pub fn coordinates(&self) -> Result<(f64, f64), FormError> {
        match (parse_number(&self.lat), parse_number(&self.lng)) {
            (Some(lat), Some(lng)) => Ok((lat, lng)),
            _ => Err(FormError::InvalidCoordinates),
        }
    }

    pub fn to_new_place(&self, photos: Vec<String>) -> Result<NewPlace, FormError> {
        let (lat, lng) = self.coordinates()?;
        Ok(NewPlace {
            name: self.name.trim().to_owned(),
            district: self.district.clone(),
            category: self.category.clone(),
            lat,
            lng,
            address: self.address.trim().to_owned(),
            website: trimmed_or_none(&self.website),
            price: price::with_currency(&self.price),
            rating: parse_number(&self.rating),
            description: self.description.trim().to_owned(),
            breakfast_time: self.breakfast_time.clone(),
            breakfast_hours: trimmed_or_none(&self.breakfast_hours),
            photos,
        })
    }
}

/// One editing session of the form, from opening to reset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSession {
    pub form: PlaceForm,
    existing_photos: Option<Vec<String>>,
    remove_existing_photos: bool,
}

impl FormSession {
    #[must_use]
    pub fn edit(place: &Place) -> Self {
        Self {
            form: PlaceForm::from_place(place),
            existing_photos: Some(place.photos.clone()),
            remove_existing_photos: false,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.form.mode()
    }

    /// Photos of the edited place for the read-only preview.
    ///
    /// `None` in create mode or after the removal was requested.
    #[must_use]
    pub fn existing_photos_preview(&self) -> Option<&[String]> {
        if self.remove_existing_photos {
            return None;
        }
        self.existing_photos.as_deref()
    }

    /// Only affects what the next save submits.
    pub fn remove_existing_photos(&mut self) {
        self.remove_existing_photos = true;
    }

    #[must_use]
    pub const fn is_removal_pending(&self) -> bool {
        self.remove_existing_photos
    }

    /// Newly uploaded photos replace the existing ones. Without new
    /// uploads the existing photos are kept unless their removal is pending.
    #[must_use]
    pub fn photos_for_submission(&self, uploaded: Vec<String>) -> Vec<String> {
        if !uploaded.is_empty() {
            return uploaded;
        }
        self.existing_photos_preview()
            .map(<[String]>::to_vec)
            .unwrap_or_default()
    }

    pub fn save_request(&self, uploaded: Vec<String>) -> Result<SaveRequest, FormError> {
        let place = self.form.to_new_place(self.photos_for_submission(uploaded))?;
        Ok(match self.mode() {
            FormMode::Create => SaveRequest::Create(place),
            FormMode::Edit(id) => SaveRequest::Update(id, place),
        })
    }
}

#[cfg(test)]
mod tests {
    use mellmap_boundary::builders::*;

    use super::*;

    fn filled_form() -> PlaceForm {
        PlaceForm {
            name: "  Кофемания ".into(),
            category: "кафе".into(),
            lat: "55.76".into(),
            lng: " 37.61".into(),
            address: " Тверская, 1 ".into(),
            website: "   ".into(),
            price: "900".into(),
            rating: "4.5".into(),
            description: " Уютно ".into(),
            breakfast_hours: "8:00–11:00".into(),
            ..Default::default()
        }
    }

    fn stored_place() -> Place {
        Place::build()
            .id(42)
            .name("Берлога")
            .district("САО")
            .category("бистро")
            .pos(Some(55.8), Some(37.5))
            .address("Ленинградский пр., 5")
            .price("₽700")
            .rating(4.0)
            .breakfast(BreakfastTime::SpecificTime, Some("9:00–12:00"))
            .photos(vec!["/p/1.jpg", "/p/2.jpg"])
            .finish()
    }

    #[test]
    fn pristine_form_is_in_create_mode() {
        let session = FormSession::default();
        assert_eq!(session.mode(), FormMode::Create);
        assert_eq!(session.mode().title(), "Добавить заведение");
        assert_eq!(session.mode().submit_label(), "Добавить заведение");
        assert_eq!(session.existing_photos_preview(), None);
        assert!(!session.form.shows_breakfast_hours());
    }

    #[test]
    fn build_payload_from_raw_inputs() {
        let place = filled_form().to_new_place(vec![]).unwrap();
        assert_eq!(place.name, "Кофемания");
        assert_eq!(place.lat, 55.76);
        assert_eq!(place.lng, 37.61);
        assert_eq!(place.address, "Тверская, 1");
        assert_eq!(place.website, None);
        assert_eq!(place.price, "₽900");
        assert_eq!(place.rating, Some(4.5));
        assert_eq!(place.description, "Уютно");
        assert_eq!(place.breakfast_hours.as_deref(), Some("8:00–11:00"));
    }

    #[test]
    fn abort_on_invalid_coordinates() {
        let mut form = filled_form();
        form.lat = "abc".into();
        assert_eq!(form.to_new_place(vec![]), Err(FormError::InvalidCoordinates));
        let mut form = filled_form();
        form.lng = String::new();
        assert_eq!(
            FormSession {
                form,
                ..Default::default()
            }
            .save_request(vec![]),
            Err(FormError::InvalidCoordinates)
        );
    }

    #[test]
    fn send_unparseable_rating_as_null() {
        let mut form = filled_form();
        form.rating = String::new();
        assert_eq!(form.to_new_place(vec![]).unwrap().rating, None);
    }

    #[test]
    fn populate_every_field_when_editing() {
        let session = FormSession::edit(&stored_place());
        let form = &session.form;
        assert_eq!(session.mode(), FormMode::Edit(42));
        assert_eq!(session.mode().title(), "Редактирование заведения");
        assert_eq!(session.mode().submit_label(), "Сохранить изменения");
        assert_eq!(form.field(PlaceField::Name), "Берлога");
        assert_eq!(form.field(PlaceField::District), "САО");
        assert_eq!(form.field(PlaceField::Lat), "55.8");
        assert_eq!(form.field(PlaceField::Price), "700");
        assert_eq!(form.field(PlaceField::Rating), "4");
        assert_eq!(form.field(PlaceField::Website), "");
        assert_eq!(form.field(PlaceField::Description), "");
        assert_eq!(form.field(PlaceField::BreakfastTime), "specific_time");
        assert_eq!(form.field(PlaceField::BreakfastHours), "9:00–12:00");
        assert!(form.shows_breakfast_hours());
        assert_eq!(
            session.existing_photos_preview(),
            Some(&["/p/1.jpg".to_owned(), "/p/2.jpg".to_owned()][..])
        );
    }

    #[test]
    fn toggle_hours_with_breakfast_time() {
        let mut form = PlaceForm::default();
        form.set_field(PlaceField::BreakfastTime, "specific_time".into());
        assert!(form.shows_breakfast_hours());
        form.set_field(PlaceField::BreakfastTime, "weekends_only".into());
        assert!(!form.shows_breakfast_hours());
    }

    #[test]
    fn route_by_hidden_id() {
        let create = FormSession {
            form: filled_form(),
            ..Default::default()
        };
        assert!(matches!(
            create.save_request(vec![]),
            Ok(SaveRequest::Create(_))
        ));
        let update = FormSession::edit(&stored_place());
        assert!(matches!(
            update.save_request(vec![]),
            Ok(SaveRequest::Update(42, _))
        ));
    }

    #[test]
    fn keep_existing_photos_unless_removed() {
        let mut session = FormSession::edit(&stored_place());
        assert_eq!(
            session.photos_for_submission(vec![]),
            vec!["/p/1.jpg", "/p/2.jpg"]
        );
        assert_eq!(
            session.photos_for_submission(vec!["data:new".into()]),
            vec!["data:new"]
        );
        session.remove_existing_photos();
        assert!(session.is_removal_pending());
        assert_eq!(session.existing_photos_preview(), None);
        assert!(session.photos_for_submission(vec![]).is_empty());
    }

    #[test]
    fn reset_returns_to_pristine_create_mode() {
        let mut session = FormSession::edit(&stored_place());
        session.remove_existing_photos();
        session = FormSession::default();
        assert_eq!(session, FormSession::default());
        assert_eq!(session.form.edit_id, None);
    }
}
