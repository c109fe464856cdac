//! Gallery view state
//!
//! Category filter over the static catalog, a single-selection lightbox,
//! per-session likes and the share trigger.

use reqwest::Url;
use shared::catalog;
use shared::models::{GalleryCategory, GalleryImage, Locale};
use std::collections::HashSet;
use std::fmt;

use crate::{ClientError, ClientResult};

/// Lightbox state. Opening always replaces the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Lightbox<'a> {
    #[default]
    Closed,
    Open(&'a GalleryImage),
}

impl<'a> Lightbox<'a> {
    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open(_))
    }

    pub fn selected(&self) -> Option<&'a GalleryImage> {
        match self {
            Lightbox::Closed => None,
            Lightbox::Open(image) => Some(image),
        }
    }
}

/// Content handed to a share capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    /// Page URL of the shared image
    pub url: String,
    /// Direct image URL
    pub media_url: String,
}

/// Platform share facility, when the host offers one
pub trait ShareCapability {
    fn share(&self, payload: &SharePayload) -> ClientResult<()>;
}

/// Result of a share request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    /// No capability available; nothing happened
    Unavailable,
}

/// Social network with a link-based share endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SharePlatform {
    Facebook,
    X,
    Pinterest,
    WhatsApp,
}

impl SharePlatform {
    pub const ALL: [SharePlatform; 4] = [Self::Facebook, Self::X, Self::Pinterest, Self::WhatsApp];

    /// Share link for `payload`
    pub fn share_url(&self, payload: &SharePayload) -> ClientResult<Url> {
        let (endpoint, params): (&str, Vec<(&str, String)>) = match self {
            SharePlatform::Facebook => (
                "https://www.facebook.com/sharer/sharer.php",
                vec![("u", payload.url.clone())],
            ),
            SharePlatform::X => (
                "https://twitter.com/intent/tweet",
                vec![("url", payload.url.clone()), ("text", payload.title.clone())],
            ),
            SharePlatform::Pinterest => (
                "https://pinterest.com/pin/create/button/",
                vec![
                    ("url", payload.url.clone()),
                    ("media", payload.media_url.clone()),
                    ("description", payload.title.clone()),
                ],
            ),
            SharePlatform::WhatsApp => (
                "https://wa.me/",
                vec![("text", format!("{} {}", payload.title, payload.url))],
            ),
        };
        Url::parse_with_params(endpoint, &params).map_err(|e| ClientError::Share(e.to_string()))
    }
}

impl fmt::Display for SharePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SharePlatform::Facebook => "Facebook",
            SharePlatform::X => "X",
            SharePlatform::Pinterest => "Pinterest",
            SharePlatform::WhatsApp => "WhatsApp",
        };
        write!(f, "{}", name)
    }
}

/// Public gallery view state
#[derive(Debug, Clone)]
pub struct GalleryView<'a> {
    images: &'a [GalleryImage],
    category: Option<GalleryCategory>,
    locale: Locale,
    lightbox: Lightbox<'a>,
    liked: HashSet<u32>,
}

impl GalleryView<'static> {
    /// View over the built-in catalog
    pub fn from_catalog() -> Self {
        Self::new(catalog::catalog())
    }
}

impl<'a> GalleryView<'a> {
    pub fn new(images: &'a [GalleryImage]) -> Self {
        Self {
            images,
            category: None,
            locale: Locale::default(),
            lightbox: Lightbox::Closed,
            liked: HashSet::new(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn category(&self) -> Option<GalleryCategory> {
        self.category
    }

    /// `None` shows every category
    pub fn set_category(&mut self, category: Option<GalleryCategory>) {
        self.category = category;
    }

    /// Images matching the category filter, in catalog order
    pub fn visible(&self) -> Vec<&'a GalleryImage> {
        catalog::filter_by_category(self.images, self.category)
    }

    // ========== Lightbox ==========

    pub fn lightbox(&self) -> Lightbox<'a> {
        self.lightbox
    }

    pub fn open(&mut self, image: &'a GalleryImage) {
        self.lightbox = Lightbox::Open(image);
    }

    /// Open the image with `id`; `false` if the catalog has no such image
    pub fn open_by_id(&mut self, id: u32) -> bool {
        match self.images.iter().find(|image| image.id == id) {
            Some(image) => {
                self.open(image);
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) {
        self.lightbox = Lightbox::Closed;
    }

    /// Move the lightbox to the next visible image, wrapping at the end
    pub fn next(&mut self) {
        self.step(1);
    }

    /// Move the lightbox to the previous visible image, wrapping at the start
    pub fn previous(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, delta: isize) {
        let Lightbox::Open(current) = self.lightbox else {
            return;
        };
        let visible = self.visible();
        if visible.is_empty() {
            return;
        }
        // An image outside the current filter restarts from the first one
        let next = match visible.iter().position(|image| image.id == current.id) {
            Some(index) => (index as isize + delta).rem_euclid(visible.len() as isize) as usize,
            None => 0,
        };
        self.lightbox = Lightbox::Open(visible[next]);
    }

    // ========== Likes ==========

    /// Toggle the like on `id`; returns whether it is now liked
    pub fn toggle_like(&mut self, id: u32) -> bool {
        if self.liked.remove(&id) {
            false
        } else {
            self.liked.insert(id);
            true
        }
    }

    pub fn is_liked(&self, id: u32) -> bool {
        self.liked.contains(&id)
    }

    /// Catalog count plus this session's like
    pub fn like_count(&self, image: &GalleryImage) -> u32 {
        image.likes + u32::from(self.is_liked(image.id))
    }

    // ========== Share ==========

    pub fn share_payload(&self, image: &GalleryImage, site_url: &str) -> SharePayload {
        let site = site_url.trim_end_matches('/');
        SharePayload {
            title: image.caption.get(self.locale).to_string(),
            text: image.story.get(self.locale).to_string(),
            url: format!("{}/gallery/{}", site, image.id),
            media_url: format!("{}{}", site, image.src),
        }
    }

    /// Share through `capability` when one is available; otherwise do nothing.
    pub fn share(
        &self,
        image: &GalleryImage,
        site_url: &str,
        capability: Option<&dyn ShareCapability>,
    ) -> ClientResult<ShareOutcome> {
        let Some(capability) = capability else {
            tracing::debug!(image = image.id, "No share capability, skipping");
            return Ok(ShareOutcome::Unavailable);
        };
        capability.share(&self.share_payload(image, site_url))?;
        tracing::debug!(image = image.id, "Image shared");
        Ok(ShareOutcome::Shared)
    }
}
