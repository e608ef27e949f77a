use super::aggregate::truncate_chars;
use super::rank::RankedSpeakers;

/// Display cap for snippets in the rendered summary
pub const SNIPPET_DISPLAY_CHARS: usize = 150;

/// Sent in reply to the transport's /start command
pub const WELCOME_MESSAGE: &str = "Welcome to The Hansard Bot! Ask me something like \
     'Who spoke about teenage boys in care last year?'";

/// The API answered with zero rows
pub const NO_DEBATES_MESSAGE: &str = "No debates found matching your query.";

/// Rows came back but no speaker could be resolved at any tier
pub const NO_SPEAKERS_MESSAGE: &str = "No relevant speakers found in the top results.";

pub const TIMEOUT_MESSAGE: &str =
    "The Hansard search took too long to respond. Please try again in a moment.";

pub const UNAVAILABLE_MESSAGE: &str =
    "The Hansard search service could not be reached. Please try again later.";

pub const MISSING_KEY_MESSAGE: &str = "This bot is not configured with a TheyWorkForYou API key, \
     so it cannot search Hansard. Set THEYWORKFORYOU_API_KEY and restart.";

pub const GENERIC_APOLOGY: &str = "Sorry, something went wrong while searching.";

/// Escape Telegram-Markdown metacharacters in API-supplied text.
///
/// Speaker names and debate titles are interpolated into a Markdown
/// message; an unescaped underscore or bracket in either would corrupt
/// the rendering.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '_' | '*' | '`' | '[') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Render the ranked speakers into the reply message.
///
/// An optional preamble (stance analysis or web context) goes first, then
/// a header naming the top speaker with tier-appropriate confidence
/// wording, then one block per speaker.
pub fn render_summary(ranked: &RankedSpeakers, base_url: &str, preamble: Option<&str>) -> String {
    let mut message = String::new();

    if let Some(preamble) = preamble {
        message.push_str(preamble.trim_end());
        message.push_str("\n\n");
    }

    let top = &ranked.speakers[0];
    message.push_str(&format!(
        "🏛 Top voice: *{}* — {}.\n\n",
        escape_markdown(&top.name),
        ranked.tier.confidence_line()
    ));

    let blocks: Vec<String> = ranked
        .speakers
        .iter()
        .map(|speaker| {
            let mut block = format!("🗣 *{}*", escape_markdown(&speaker.name));
            match (&speaker.payload.party, &speaker.payload.constituency) {
                (Some(party), Some(constituency)) => {
                    block.push_str(&format!(
                        " ({}, {})",
                        escape_markdown(party),
                        escape_markdown(constituency)
                    ));
                }
                (Some(party), None) => block.push_str(&format!(" ({})", escape_markdown(party))),
                _ => {}
            }
            block.push_str(&format!(
                " — {} mention{}",
                speaker.mentions,
                if speaker.mentions == 1 { "" } else { "s" }
            ));

            if !speaker.payload.debate_title.is_empty() {
                block.push_str(&format!(
                    "\n📄 {}",
                    escape_markdown(&speaker.payload.debate_title)
                ));
            }
            if !speaker.payload.snippet.is_empty() {
                let snippet = truncate_chars(&speaker.payload.snippet, SNIPPET_DISPLAY_CHARS);
                block.push_str(&format!("\n💬 {}", escape_markdown(&snippet)));
            }
            if !speaker.payload.link.is_empty() {
                block.push_str(&format!("\n🔗 {}{}", base_url, speaker.payload.link));
            }
            block
        })
        .collect();

    message.push_str(&blocks.join("\n\n"));
    message
}
