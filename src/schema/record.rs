//! Wire record for a persisted animation.

use serde::{Deserialize, Serialize};

use crate::animation::format;
use crate::error::FetchError;
use crate::model::Frame;

/// `{ "title": ..., "data": ... }` as served by the animation API.
///
/// `data` is the flat concatenation of every frame's color codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationRecord {
    pub title: String,
    pub data: String,
}

impl AnimationRecord {
    pub fn new(title: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            data: data.into(),
        }
    }

    /// Encode frames into a record.
    pub fn from_frames(title: impl Into<String>, frames: &[Frame]) -> Self {
        Self::new(title, format::encode(frames))
    }

    /// Split `data` into frames. May be empty.
    pub fn frames(&self) -> Vec<Frame> {
        format::decode(&self.data)
    }

    pub fn from_json(json: &str) -> Result<Self, FetchError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
