//! Server-side rendering of the single chat page.

use crate::{render_transcript, Banner, ChatModel, ChatSession, Role};

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;max-width:46rem;margin:2rem auto;padding:0 1rem;color:#222}\
textarea{width:100%;box-sizing:border-box;font:inherit}\
.row{display:flex;gap:1rem;align-items:end;margin-top:.5rem}\
.banner{padding:.6rem .8rem;border-radius:.3rem;margin:1rem 0}\
.warning{background:#fff6d6}\
.error{background:#fde2e2}\
.turn{white-space:pre-wrap}\
#busy{margin-top:.5rem;color:#666}\
.caption{color:#666}";

const BUSY_SCRIPT: &str = "document.getElementById('busy').hidden=false;\
document.getElementById('ask').disabled=true;";

/// Escape text for element content and double-quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn render_page(session: &ChatSession) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Groq Chat</title>\n");
    html.push_str(&format!("<style>{}</style>\n", STYLE));
    html.push_str("</head>\n<body>\n");
    html.push_str("<h1>Groq Chat 🤖</h1>\n");
    html.push_str("<p class=\"caption\">Ask a question and get an answer using Groq models.</p>\n");

    render_form(&mut html, session);

    if let Some(banner) = session.banner() {
        render_banner(&mut html, banner);
    }

    render_conversation(&mut html, session);

    html.push_str("<hr>\n<p class=\"caption\">Run with: <code>groqchat serve</code></p>\n");
    html.push_str("</body>\n</html>\n");
    html
}

fn render_form(html: &mut String, session: &ChatSession) {
    html.push_str(&format!(
        "<form method=\"post\" action=\"/\" onsubmit=\"{}\">\n",
        BUSY_SCRIPT
    ));
    html.push_str("<label for=\"prompt\">Your question</label>\n");
    // A newline right after <textarea> is swallowed by HTML parsers.
    html.push_str(&format!(
        "<textarea id=\"prompt\" name=\"prompt\" rows=\"5\" placeholder=\"Type your question here…\">\n{}</textarea>\n",
        escape_html(session.draft())
    ));
    html.push_str("<div class=\"row\">\n<div>\n<label for=\"model\">Model</label><br>\n");
    html.push_str("<select id=\"model\" name=\"model\">\n");
    for model in ChatModel::all() {
        let selected = if *model == session.selected_model() {
            " selected"
        } else {
            ""
        };
        html.push_str(&format!(
            "<option value=\"{id}\"{selected}>{id}</option>\n",
            id = model.as_str(),
            selected = selected
        ));
    }
    html.push_str("</select>\n</div>\n");
    html.push_str("<div><button id=\"ask\" type=\"submit\">Ask</button></div>\n</div>\n");
    html.push_str("<div id=\"busy\" hidden>Thinking…</div>\n");
    html.push_str("</form>\n");
}

fn render_banner(html: &mut String, banner: &Banner) {
    let class = match banner {
        Banner::Warning(_) => "warning",
        Banner::Error(_) => "error",
    };
    html.push_str(&format!(
        "<div class=\"banner {}\" role=\"alert\">{}</div>\n",
        class,
        escape_html(&banner.display_line())
    ));
}

fn render_conversation(html: &mut String, session: &ChatSession) {
    let history = session.history();
    if history.is_empty() {
        return;
    }

    html.push_str("<section id=\"conversation\">\n<h2>Conversation</h2>\n");
    for (turn, line) in history.turns().iter().zip(render_transcript(history)) {
        let class = match turn.role() {
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        html.push_str(&format!(
            "<p class=\"turn {}\">{}</p>\n",
            class,
            escape_html(&line)
        ));
    }
    html.push_str("</section>\n");
}
