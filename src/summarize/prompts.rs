//! Fixed instructions sent to the generative models

use crate::search::Query;

pub const SUMMARY: &str = "Summarize the following search results for the user. \
Focus on recent news or events. Provide an introductory sentence or two, followed by \
two to three bullet points for the main points, and any final remarks with an \
additional sentence.";

pub const SUGGESTIONS: &str =
    "Suggest related search queries for the user based on their input.";

pub const LIVE: &str = "You are an AI assistant that conducts real-time web searches to \
provide very concise, fact-based summaries from trusted sources. Focus on recent news, \
stories, and information from authoritative and credible sources. Keep responses under \
200 words. Always perform web searches to gather the most recent and authoritative \
information. At the end of your response, provide a Sources section with the URLs of the \
sources cited in the order they appear.";

pub fn suggestions_input(query: &Query) -> String {
    format!("User's query: \"{}\"", query)
}

pub fn live_input(query: &Query) -> String {
    format!(
        "Provide a short summary of the most recent news and information about {}.",
        query
    )
}
