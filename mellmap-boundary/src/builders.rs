use super::*;

pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

#[derive(Debug)]
pub struct PlaceBuild {
    place: Place,
}

impl PlaceBuild {
    pub fn id(mut self, id: PlaceId) -> Self {
        self.place.id = id;
        self
    }
    pub fn name(mut self, name: &str) -> Self {
        self.place.name = name.into();
        self
    }
    pub fn district(mut self, district: &str) -> Self {
        self.place.district = district.into();
        self
    }
    pub fn category(mut self, category: &str) -> Self {
        self.place.category = category.into();
        self
    }
    pub fn pos(mut self, lat: Option<f64>, lng: Option<f64>) -> Self {
        self.place.lat = lat;
        self.place.lng = lng;
        self
    }
    pub fn address(mut self, address: &str) -> Self {
        self.place.address = address.into();
        self
    }
    pub fn website(mut self, website: Option<&str>) -> Self {
        self.place.website = website.map(Into::into);
        self
    }
    pub fn price(mut self, price: &str) -> Self {
        self.place.price = price.into();
        self
    }
    pub fn rating(mut self, rating: f64) -> Self {
        self.place.rating = rating;
        self
    }
    pub fn description(mut self, description: Option<&str>) -> Self {
        self.place.description = description.map(Into::into);
        self
    }
    pub fn breakfast(mut self, time: BreakfastTime, hours: Option<&str>) -> Self {
        self.place.breakfast_time = time;
        self.place.breakfast_hours = hours.map(Into::into);
        self
    }
    pub fn photos(mut self, photos: Vec<impl Into<String>>) -> Self {
        self.place.photos = photos.into_iter().map(Into::into).collect();
        self
    }
    #[must_use]
    pub fn finish(self) -> Place {
        self.place
    }
}

impl Builder for Place {
    type Build = PlaceBuild;
    fn build() -> PlaceBuild {
        PlaceBuild {
            place: Place {
                id: 0,
                name: String::new(),
                district: String::new(),
                category: String::new(),
                lat: Some(55.7558),
                lng: Some(37.6176),
                address: String::new(),
                website: None,
                price: format!("{CURRENCY_GLYPH}0"),
                rating: 0.0,
                description: None,
                breakfast_time: BreakfastTime::AllDay,
                breakfast_hours: None,
                photos: vec![],
            },
        }
    }
}
