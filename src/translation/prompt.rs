// Fixed instructional prompt sent with every image
// Author: kelexine (https://github.com/kelexine)

/// Instructions for the "visual-algorithm interpreter".
///
/// Asks for a JSON object with exactly four keys: `raw_scene`, `tags`,
/// `inner_voice` and `receipt`. Downstream consumers parse the model's reply
/// against this contract; the proxy itself never inspects it.
pub const ANALYSIS_PROMPT: &str = r#"
You are a “visual-algorithm interpreter.” Your task is to analyze the image I provide and generate an explanation suitable for the public, helping viewers understand how an algorithm “sees” a person.
Please output valid JSON ONLY with the following keys:
1. "raw_scene": Provide 3–5 simple, objective, non-judgmental sentences describing the person and environment. If uncertain, say “uncertain.”
2. "tags": An array of 10 abstract, atmospheric, algorithmic poetic phrases (3–8 words each), centered on fashion, lifestyle, mood, and visual signals, while avoiding literal descriptors or identity assumptions.
3. "inner_voice": Write an 80–150-word “algorithm monologue” in a light, non-sarcastic tone (First-Person). Describe what visual features you notice and how you might use them for recommendation/classification. Emphasize statistical guesses.
4. "receipt": An array of objects representing items detected in the image and their estimated futuristic/market value. Keys: 'item' (string), 'price' (string like '$150'). Include 3-5 items and a 'TOTAL' entry at the end.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_every_output_key() {
        for key in ["\"raw_scene\"", "\"tags\"", "\"inner_voice\"", "\"receipt\""] {
            assert!(ANALYSIS_PROMPT.contains(key), "prompt is missing {}", key);
        }
    }

    #[test]
    fn test_prompt_demands_json_only() {
        assert!(ANALYSIS_PROMPT.contains("valid JSON ONLY"));
        assert!(ANALYSIS_PROMPT.contains("'TOTAL'"));
    }
}
