use serde::{Deserialize, Serialize};

/// Returned with 200 when the model answered but produced no text.
pub const EMPTY_BLUEPRINT_HTML: &str =
    "<h3>Error</h3><p>Could not generate your marketing blueprint.</p>";

/// Returned with 500 whenever generation failed.
pub const FAILED_BLUEPRINT_HTML: &str = "<div class='text-center p-8'><h3 class='text-2xl font-bold text-red-600'>ERROR</h3><p class='text-lg text-gray-600 mt-4'>Could not generate your marketing blueprint.</p></div>";

pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method Not Allowed";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintResponse {
    pub blueprint_html: String,
}

impl BlueprintResponse {
    pub fn new(blueprint_html: impl Into<String>) -> Self {
        Self {
            blueprint_html: blueprint_html.into(),
        }
    }

    pub fn failed() -> Self {
        Self::new(FAILED_BLUEPRINT_HTML)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn method_not_allowed() -> Self {
        Self {
            message: METHOD_NOT_ALLOWED_MESSAGE.to_string(),
        }
    }
}
