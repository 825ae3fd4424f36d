use crate::ClientResult;
use crate::api::models::ImageUpload;

use reqwest::RequestBuilder;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::Value;

/// Payload of an outgoing request.
#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    /// Text fields plus an optional file part
    Multipart {
        fields: Vec<(String, String)>,
        file: Option<(String, ImageUpload)>,
    },
}

impl RequestBody {
    pub fn json<T: Serialize>(value: &T) -> ClientResult<Self> {
        Ok(RequestBody::Json(serde_json::to_value(value)?))
    }

    /// Multipart when an image is attached, JSON object of the fields otherwise.
    pub fn form(
        fields: Vec<(&'static str, String)>,
        image_field: &str,
        image: Option<ImageUpload>,
    ) -> Self {
        match image {
            Some(image) => RequestBody::Multipart {
                fields: fields
                    .into_iter()
                    .map(|(name, value)| (name.to_string(), value))
                    .collect(),
                file: Some((image_field.to_string(), image)),
            },
            None => RequestBody::Json(Value::Object(
                fields
                    .into_iter()
                    .map(|(name, value)| (name.to_string(), Value::String(value)))
                    .collect(),
            )),
        }
    }

    pub(crate) fn apply(self, req: RequestBuilder) -> ClientResult<RequestBuilder> {
        match self {
            RequestBody::Empty => Ok(req),
            RequestBody::Json(value) => Ok(req.json(&value)),
            RequestBody::Multipart { fields, file } => {
                let mut form = Form::new();
                for (name, value) in fields {
                    form = form.text(name, value);
                }
                if let Some((field, image)) = file {
                    let part = Part::bytes(image.bytes)
                        .file_name(image.file_name)
                        .mime_str(&image.mime_type)?;
                    form = form.part(field, part);
                }
                Ok(req.multipart(form))
            }
        }
    }
}
