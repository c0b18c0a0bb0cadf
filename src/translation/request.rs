// Request translation (analysis request → OpenAI chat completion)
// Author: kelexine (https://github.com/kelexine)

use super::prompt::ANALYSIS_PROMPT;
use crate::config::OpenAiConfig;
use crate::error::{ProxyError, Result};
use crate::models::analyze::AnalyzeRequest;
use crate::models::openai::{
    ChatCompletionRequest, ChatMessage, ContentPart, ImageUrl, ResponseFormat, Role,
};
use crate::vision::models::ImageFormat;
use tracing::debug;

/// Pull the base64 payload out of an inbound request.
///
/// An absent or empty `image` is `MissingImage`.
pub fn extract_image(request: AnalyzeRequest) -> Result<String> {
    match request.image {
        Some(image) if !image.is_empty() => Ok(image),
        _ => Err(ProxyError::MissingImage),
    }
}

/// Wrap a raw base64 payload as a JPEG data URI.
pub fn image_data_uri(image: &str) -> String {
    format!("data:{};base64,{}", ImageFormat::Jpeg.mime_type(), image)
}

/// Build the upstream chat completion for one image.
///
/// One user message: the fixed prompt first, the image second.
pub fn build_completion_request(image: &str, config: &OpenAiConfig) -> ChatCompletionRequest {
    debug!(
        "Building completion request: model={}, image_chars={}",
        config.model,
        image.len()
    );

    ChatCompletionRequest {
        model: config.model.clone(),
        messages: vec![ChatMessage {
            role: Role::User,
            content: vec![
                ContentPart::Text {
                    text: ANALYSIS_PROMPT.to_string(),
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: image_data_uri(image),
                    },
                },
            ],
        }],
        max_tokens: config.max_tokens,
        response_format: ResponseFormat::JsonObject,
    }
}
