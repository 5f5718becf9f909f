//! Gifs / stickers and the envelopes the api wraps them in.

use crate::error::{Error, ErrorContext};
use crate::internal::serde::{
    deserialize_giphy_time, deserialize_maybe_null_to_default, deserialize_skip_null_values,
    deserialize_string_number,
};
use crate::Result;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// One rendition of a [`Giph`], e.g. `original` or `fixed_height_small`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Gif {
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub url: String,
    #[serde(deserialize_with = "deserialize_string_number")]
    pub width: u32,
    #[serde(deserialize_with = "deserialize_string_number")]
    pub height: u32,
    #[serde(deserialize_with = "deserialize_string_number")]
    pub size: u64,
    #[serde(deserialize_with = "deserialize_string_number")]
    pub frames: u32,

    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub mp4: String,
    #[serde(deserialize_with = "deserialize_string_number")]
    pub mp4_size: u64,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub webp: String,
    #[serde(deserialize_with = "deserialize_string_number")]
    pub webp_size: u64,
}

/// A gif or sticker.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Giph {
    /// Either `gif` or `sticker`.
    #[serde(rename = "type", deserialize_with = "deserialize_maybe_null_to_default")]
    pub giph_type: String,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub slug: String,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub url: String,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub bitly_url: String,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub bitly_gif_url: String,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub embed_url: String,
    #[serde(rename = "username", deserialize_with = "deserialize_maybe_null_to_default")]
    pub owner: String,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub source: String,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub title: String,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub rating: String,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub caption: String,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub content_url: String,

    #[serde(rename = "source_tld", deserialize_with = "deserialize_maybe_null_to_default")]
    pub source_top_level_domain: String,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub source_post_url: String,

    #[serde(rename = "import_datetime", deserialize_with = "deserialize_giphy_time")]
    pub import_date: Option<DateTime<Utc>>,
    #[serde(rename = "trending_datetime", deserialize_with = "deserialize_giphy_time")]
    pub trending_date: Option<DateTime<Utc>>,

    /// All available renditions, keyed by their name (`original`, `fixed_width`, ...).
    #[serde(rename = "images", deserialize_with = "deserialize_skip_null_values")]
    pub sizes: HashMap<String, Gif>,

    // the random endpoints flatten a few renditions into the top level object
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub image_original_url: String,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub image_url: String,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub image_mp4_url: String,
    #[serde(rename = "image_frames", deserialize_with = "deserialize_string_number")]
    pub frame_count: u32,
    #[serde(deserialize_with = "deserialize_string_number")]
    pub image_width: u32,
    #[serde(deserialize_with = "deserialize_string_number")]
    pub image_height: u32,

    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub fixed_height_downsampled_url: String,
    #[serde(deserialize_with = "deserialize_string_number")]
    pub fixed_height_downsampled_width: u32,
    #[serde(deserialize_with = "deserialize_string_number")]
    pub fixed_height_downsampled_height: u32,

    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub fixed_height_small_url: String,
    #[serde(deserialize_with = "deserialize_string_number")]
    pub fixed_height_small_width: u32,
    #[serde(deserialize_with = "deserialize_string_number")]
    pub fixed_height_small_height: u32,

    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub fixed_height_small_still_url: String,
    #[serde(deserialize_with = "deserialize_string_number")]
    pub fixed_height_small_still_width: u32,
    #[serde(deserialize_with = "deserialize_string_number")]
    pub fixed_height_small_still_height: u32,

    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub fixed_width_downsampled_url: String,
    #[serde(deserialize_with = "deserialize_string_number")]
    pub fixed_width_downsampled_width: u32,
    #[serde(deserialize_with = "deserialize_string_number")]
    pub fixed_width_downsampled_height: u32,

    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub fixed_width_small_url: String,
    #[serde(deserialize_with = "deserialize_string_number")]
    pub fixed_width_small_width: u32,
    #[serde(deserialize_with = "deserialize_string_number")]
    pub fixed_width_small_height: u32,

    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub fixed_width_small_still_url: String,
    #[serde(deserialize_with = "deserialize_string_number")]
    pub fixed_width_small_still_width: u32,
    #[serde(deserialize_with = "deserialize_string_number")]
    pub fixed_width_small_still_height: u32,
}

impl Giph {
    /// The `original` rendition, if the response contained one.
    pub fn original(&self) -> Option<&Gif> {
        self.sizes.get("original")
    }

    /// If this is a sticker rather than a gif.
    pub fn is_sticker(&self) -> bool {
        self.giph_type == "sticker"
    }
}

/// Pagination metadata of a search / trending response.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PaginationMeta {
    #[serde(deserialize_with = "deserialize_string_number")]
    pub total_count: u64,
    #[serde(deserialize_with = "deserialize_string_number")]
    pub offset: u64,
    #[serde(deserialize_with = "deserialize_string_number")]
    pub count: u64,
}

/// Status information every api response carries.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Meta {
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub status: u16,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub msg: String,
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub response_id: String,
}

/// Response body of the paginated endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct PageResponse {
    #[serde(deserialize_with = "deserialize_maybe_null_to_default")]
    pub(crate) data: Vec<Giph>,
    pub(crate) pagination: Option<PaginationMeta>,
    pub(crate) meta: Option<Meta>,
}

/// Response body of the single item endpoints. `data` is kept raw because giphy answers with an
/// empty array instead of an object if e.g. a random lookup finds nothing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SingleResponse {
    pub(crate) data: Value,
}

impl SingleResponse {
    /// Extract the item. A response without an item, or with an item that has no id, is an
    /// [`Error::EmptyResponse`].
    pub(crate) fn into_giph(self, url: &str) -> Result<Giph> {
        let empty = || {
            Error::EmptyResponse(
                ErrorContext::new("could not parse the response from the server").with_url(url),
            )
        };

        let is_blank = match &self.data {
            Value::Null => true,
            Value::Array(array) => array.is_empty(),
            Value::Object(object) => object.is_empty(),
            _ => false,
        };
        if is_blank {
            return Err(empty());
        }

        let giph: Giph = serde_json::from_value(self.data).map_err(|e| {
            Error::Decode(ErrorContext::new(e.to_string()).with_url(url))
        })?;
        if giph.id.trim().is_empty() {
            return Err(empty());
        }

        Ok(giph)
    }
}
