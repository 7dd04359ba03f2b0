//! # Post Renderer
//!
//! Renders a whole document to a static HTML string: header metadata,
//! each section through a fixed per-kind wrapper, then the
//! de-duplicated bibliography collected while rendering the sections.
//! Free-text fields are always escaped.

use chrono::Utc;
use tracing::debug;
use typecase_content::{escape_html, render_html, Bibliography, Document, Section, SectionKind};

/// Render a document to HTML.
pub fn render_post(doc: &Document) -> String {
    debug!(
        title = %doc.title,
        sections = doc.sections.len(),
        "rendering post"
    );

    let today = Utc::now().format("%Y-%m-%d").to_string();
    let publish_date = doc.publish_date.as_deref().unwrap_or(&today);
    let modified_date = doc.modified_date.as_deref().unwrap_or(&today);
    let author = doc.author.as_deref().unwrap_or("Anonymous");

    // One accumulator per render; sections record citations into it
    // as they render.
    let mut bib = Bibliography::new();
    let mut body = String::new();
    for section in &doc.sections {
        body.push_str(&render_section(section, &mut bib));
    }

    let mut out = String::new();
    out.push_str(
        "<article class=\"tc-post\" itemscope itemtype=\"http://schema.org/BlogPosting\">",
    );
    out.push_str("<header>");
    out.push_str(&format!(
        "<h1 class=\"tc-post-title\" itemprop=\"headline\">{}</h1>",
        escape_html(&doc.title)
    ));
    out.push_str(&format!(
        "<meta itemprop=\"datePublished\" content=\"{}\">",
        escape_html(publish_date)
    ));
    out.push_str(&format!(
        "<meta itemprop=\"dateModified\" content=\"{}\">",
        escape_html(modified_date)
    ));

    if doc.tags.first().is_some_and(|tag| !tag.is_empty()) {
        out.push_str("<div class=\"tc-post-tags\" itemprop=\"keywords\">");
        for tag in &doc.tags {
            out.push_str(&format!(
                "<span class=\"tc-post-tag\">{}</span>",
                escape_html(tag)
            ));
        }
        out.push_str("</div>");
    }

    if !doc.summary.is_empty() {
        out.push_str(&format!(
            "<div class=\"tc-post-summary\" itemprop=\"description\">{}</div>",
            escape_html(&doc.summary)
        ));
    }

    out.push_str("<div class=\"tc-post-meta\">");
    out.push_str(&format!(
        "<span class=\"tc-post-author\" itemprop=\"author\">Written by {}</span>",
        escape_html(author)
    ));
    out.push_str(&format!(
        "<span class=\"tc-post-date\">Published: {}</span>",
        escape_html(publish_date)
    ));
    out.push_str(&format!(
        "<span class=\"tc-post-modified\">Last modified: {}</span>",
        escape_html(modified_date)
    ));
    out.push_str("</div>");
    out.push_str("</header>");

    out.push_str("<div class=\"tc-post-content\" itemprop=\"articleBody\">");
    out.push_str(&body);
    out.push_str("</div>");

    out.push_str(&render_bibliography(&bib));
    out.push_str("</article>");
    out
}

fn render_section(section: &Section, bib: &mut Bibliography) -> String {
    let content = render_html(&section.content, bib);

    match section.kind {
        SectionKind::Paragraph => {
            format!("<section class=\"tc-post-paragraph-section\">{content}</section>")
        }
        SectionKind::Subheader => {
            format!("<section class=\"tc-post-subheader-section\"><h3>{content}</h3></section>")
        }
        SectionKind::Image => {
            format!("<section class=\"tc-post-image-section\">{content}</section>")
        }
        SectionKind::Quote => format!(
            "<section class=\"tc-post-quote-section\"><blockquote>{content}</blockquote></section>"
        ),
        SectionKind::Code => {
            let lang = match &section.language {
                Some(language) => format!(" lang=\"{}\"", escape_html(language)),
                None => String::new(),
            };
            format!(
                "<section class=\"tc-post-code-section\"><pre><code{lang}>{content}</code></pre></section>"
            )
        }
        SectionKind::Callout => format!(
            "<div class=\"tc-post-callout-section\"><div class=\"callout\">{content}</div></div>"
        ),
        // Unknown section types degrade; the rest of the post still
        // renders.
        SectionKind::Other => String::new(),
    }
}

fn render_bibliography(bib: &Bibliography) -> String {
    if bib.is_empty() {
        return String::new();
    }

    let mut out = String::from("<section class=\"tc-post-bibliography\"><h2>References</h2><ol>");
    for entry in bib.entries() {
        out.push_str(&format!(
            "<li id=\"{}\">{}</li>",
            escape_html(&entry.ref_id),
            escape_html(&entry.ref_content)
        ));
    }
    out.push_str("</ol></section>");
    out
}
