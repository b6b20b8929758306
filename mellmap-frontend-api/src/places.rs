use gloo_net::http::Request;

use mellmap_boundary::{NewPlace, Place, PlaceId, PlaceSummary, RandomMatchQuery};

use crate::{into_json, into_unit, util::query_string, Result};

pub const DEFAULT_RANDOM_COUNT: usize = 3;

/// Places API
#[derive(Debug, Clone, Copy)]
pub struct PlacesApi {
    url: &'static str,
}

impl PlacesApi {
    #[must_use]
    pub const fn new(url: &'static str) -> Self {
        Self { url }
    }

    fn places_url(&self) -> String {
        format!("{}/places", self.url)
    }

    fn place_url(&self, id: PlaceId) -> String {
        format!("{}/places/{id}", self.url)
    }

    pub async fn places(&self) -> Result<Vec<Place>> {
        let response = Request::get(&self.places_url()).send().await?;
        into_json(response).await
    }

    pub async fn place(&self, id: PlaceId) -> Result<Place> {
        let response = Request::get(&self.place_url(id)).send().await?;
        into_json(response).await
    }

    pub async fn create_place(&self, place: &NewPlace) -> Result<()> {
        let response = Request::post(&self.places_url())
            .json(place)?
            .send()
            .await?;
        into_unit(response).await
    }

    pub async fn update_place(&self, id: PlaceId, place: &NewPlace) -> Result<()> {
        let response = Request::put(&self.place_url(id))
            .json(place)?
            .send()
            .await?;
        into_unit(response).await
    }

    pub async fn delete_place(&self, id: PlaceId) -> Result<()> {
        let response = Request::delete(&self.place_url(id)).send().await?;
        into_unit(response).await
    }

    pub async fn random_places(&self, count: usize) -> Result<Vec<PlaceSummary>> {
        let url = format!("{}/places/random?count={count}", self.url);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn random_matching_place(&self, query: &RandomMatchQuery) -> Result<Place> {
        let mut url = format!("{}/places/random-match", self.url);
        let query = query_string(query);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }
}
