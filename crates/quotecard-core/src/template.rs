//! SVG card template.
//!
//! Cards are SVG documents wrapping an XHTML body in a `foreignObject`, so
//! CSS fonts and animations apply the same way they do on the rendering
//! service. The local preview uses a `data:` URI instead of a network fetch.

use std::fmt::Write as _;

use base64::Engine;

use crate::descriptor::RenderDescriptor;
use crate::registry::LayoutKind;

pub const SVG_MIME: &str = "image/svg+xml";

/// Escape text for XML character data and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn stylesheet(desc: &RenderDescriptor) -> String {
    let theme = &desc.theme;
    let mut css = String::new();

    if let Some(import) = desc.font.import_url {
        let _ = writeln!(css, "@import url('{}');", import);
    }
    if !desc.animation.keyframes.is_empty() {
        let _ = writeln!(css, "{}", desc.animation.keyframes);
    }

    let _ = writeln!(
        css,
        ".container {{ font-family: {font}; background: {bg}; width: 100%; height: 100%; \
         box-sizing: border-box; padding: 20px; display: flex; flex-direction: column; \
         justify-content: center; border-radius: 5px; animation: {anim}; }}",
        font = desc.font.family,
        bg = theme.bg_color,
        anim = if desc.animation.name.is_empty() { "none" } else { desc.animation.name },
    );
    let _ = writeln!(
        css,
        ".quote {{ color: {}; font-size: 19px; margin: 0; }}",
        theme.quote_color
    );
    let _ = writeln!(
        css,
        ".author {{ color: {}; font-size: 14px; margin-top: 12px; }}",
        theme.author_color
    );

    let layout_css = match desc.layout.kind {
        LayoutKind::Bordered => format!(
            ".container {{ border: 1px solid {}; }} .author {{ text-align: right; }}",
            desc.border_color
        ),
        LayoutKind::QuoteMark => format!(
            ".mark {{ color: {}; font-size: 64px; line-height: 0.6; float: left; margin-right: 12px; }}",
            theme.accent_color
        ),
        LayoutKind::SideBar => format!(
            ".container {{ border-left: 6px solid {}; }}",
            theme.accent_color
        ),
        LayoutKind::Centered => format!(
            ".container {{ text-align: center; }} .author {{ border-bottom: 2px solid {}; align-self: center; }}",
            theme.accent_color
        ),
    };
    css.push_str(&layout_css);
    css
}

fn body(desc: &RenderDescriptor) -> String {
    let quote = escape_xml(&desc.data.quote);
    let author = escape_xml(&desc.data.author);

    match desc.layout.kind {
        LayoutKind::QuoteMark => format!(
            r#"<div class="container"><span class="mark">&#8220;</span><p class="quote">{quote}</p><div class="author">{author}</div></div>"#
        ),
        LayoutKind::Bordered | LayoutKind::SideBar | LayoutKind::Centered => format!(
            r#"<div class="container"><p class="quote">{quote}</p><div class="author">- {author}</div></div>"#
        ),
    }
}

/// Render a descriptor into a standalone SVG document.
pub fn render_svg(desc: &RenderDescriptor) -> String {
    let width = desc.layout.width;
    let height = desc.layout.height;
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" fill="none"><style><![CDATA[{css}]]></style><foreignObject width="100%" height="100%"><div xmlns="http://www.w3.org/1999/xhtml" style="width: 100%; height: 100%;">{body}</div></foreignObject></svg>"#,
        css = stylesheet(desc),
        body = body(desc),
    )
}

/// Encode an SVG document as a `data:` URI usable as an image source.
pub fn svg_data_uri(svg: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(svg.as_bytes());
    format!("data:{};base64,{}", SVG_MIME, encoded)
}
