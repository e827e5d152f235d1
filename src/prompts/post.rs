use crate::consts::RESULT_SEPARATOR;
use crate::search::SearchResult;

const INTRO: &str = "You are an AI assistant that generates LinkedIn posts based on recent news.";
const INSTRUCTIONS_HEADER: &str = "INSTRUCTIONS:";
const INSTRUCTIONS: &[&str] = &[
    "You will be given a topic and a set of recent news search results.",
    "Synthesize the key information from the search results.",
    "Generate a professional and engaging LinkedIn-style post (200-400 characters, 1st person).",
    "Extract the 2-3 most important source URLs from the search results.",
    "Provide an optional image suggestion (a simple description).",
];
const FORMAT_HEADER: &str = "FINAL RESPONSE FORMAT:";
const FORMAT_RULE: &str = "You MUST output your final answer as exactly one valid JSON object and nothing else. No markdown fences, no text before or after it.";
const FORMAT_EXAMPLE: &str = "Example:\n{\"news_sources\": [\"url1\", \"url2\"], \"linkedin_post\": \"The AI world is buzzing! Recent developments in... [generated text]\", \"image_suggestion\": \"A graphic showing AI growth\"}";

/// Render search results as one block of text, provider order preserved.
/// No results renders as an empty string.
pub fn format_results(results: &[SearchResult]) -> String {
    results
        .iter()
        .map(|r| format!("URL: {}\nContent: {}", r.url, r.content))
        .collect::<Vec<_>>()
        .join(RESULT_SEPARATOR)
}

/// Fill the post-generation template with a topic and formatted results.
pub fn build_post_prompt(topic: &str, search_results: &str) -> String {
    let instructions = INSTRUCTIONS
        .iter()
        .map(|line| format!("- {}", line))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{intro}\n\n{instructions_header}\n{instructions}\n\nTOPIC:\n{topic}\n\nSEARCH RESULTS:\n{search_results}\n\n{format_header}\n{format_rule}\n\n{format_example}\n\nJSON OUTPUT:\n",
        intro = INTRO,
        instructions_header = INSTRUCTIONS_HEADER,
        instructions = instructions,
        topic = topic,
        search_results = search_results,
        format_header = FORMAT_HEADER,
        format_rule = FORMAT_RULE,
        format_example = FORMAT_EXAMPLE,
    )
}
