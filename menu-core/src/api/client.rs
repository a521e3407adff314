//! Menu API Client
//!
//! Thin `reqwest` wrapper over the menu endpoints. On wasm32 reqwest goes
//! through the browser's fetch.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use super::query::MenuQuery;
use crate::config::MenuConfig;
use crate::domain::{Category, MenuError, MenuItem, MenuResult, Restaurant};

#[derive(Debug, Clone)]
pub struct MenuApi {
    http: Client,
    base_url: Url,
}

impl MenuApi {
    pub fn new(base_url: &str) -> MenuResult<Self> {
        let mut base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(MenuError::InvalidBaseUrl(base_url.to_string()));
        }
        base_url.set_query(None);
        base_url.set_fragment(None);
        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    pub fn from_config(config: &MenuConfig) -> MenuResult<Self> {
        Self::new(&config.api_base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base url (segments are percent-encoded)
    fn endpoint(&self, segments: &[&str]) -> MenuResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| MenuError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub fn menu_items_url(&self, query: &MenuQuery) -> MenuResult<Url> {
        let mut url = self.endpoint(&["menuItems"])?;
        let params = query.params();
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url)
    }

    pub fn menu_item_url(&self, id: &str) -> MenuResult<Url> {
        self.endpoint(&["menuItems", id])
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> MenuResult<T> {
        log::debug!("GET {}", url);
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(MenuError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(MenuError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// `GET /restaurant`
    pub async fn restaurant(&self) -> MenuResult<Restaurant> {
        self.get_json(self.endpoint(&["restaurant"])?).await
    }

    /// `GET /categories`, with the "View All" entry first
    pub async fn categories(&self) -> MenuResult<Vec<Category>> {
        let fetched: Vec<Category> = self.get_json(self.endpoint(&["categories"])?).await?;
        let mut categories = Vec::with_capacity(fetched.len() + 1);
        categories.push(Category::all());
        categories.extend(fetched.into_iter().filter(|category| !category.is_all()));
        Ok(categories)
    }

    /// `GET /menuItems?category=<id>&q=<text>`
    pub async fn menu_items(&self, query: &MenuQuery) -> MenuResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self.get_json(self.menu_items_url(query)?).await?;
        log::debug!("fetched {} menu items", items.len());
        Ok(items)
    }

    /// `GET /menuItems/<id>`
    pub async fn menu_item(&self, id: &str) -> MenuResult<MenuItem> {
        self.get_json(self.menu_item_url(id)?).await
    }
}
