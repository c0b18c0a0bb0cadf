// Translation module - analysis request ↔ OpenAI chat completion
// Author: kelexine (https://github.com/kelexine)

pub mod prompt;
pub mod request;
pub mod response;

pub use prompt::ANALYSIS_PROMPT;
pub use request::{build_completion_request, extract_image, image_data_uri};
pub use response::passthrough_response;
