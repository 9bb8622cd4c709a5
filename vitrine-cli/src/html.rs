//! Static HTML rendering of the styleguide index.
//!
//! Produces a single self-contained page with embedded CSS: the same data the
//! host framework would hand to its index template, frozen ahead of time so a
//! styleguide can be previewed or published without running the host app.

use vitrine_catalog::{Component, Module};

const STYLESHEET: &str = "\
  body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 60rem; color: #222; }
  a { color: #0a6594; text-decoration: none; }
  .sg-nav ul { list-style: none; padding: 0; display: flex; gap: 1rem; }
  .sg-module { border-top: 2px solid #ddd; margin-top: 2rem; padding-top: 1rem; }
  .sg-component { margin: 1.5rem 0; padding-left: 1rem; border-left: 3px solid #eee; }
  .sg-component code { background: #f5f5f5; padding: 0 0.3rem; }
  .sg-doc dt { font-weight: bold; margin-top: 0.5rem; }
  .sg-doc dd { margin: 0; white-space: pre-wrap; }
";

/// Render the index page for the given modules.
///
/// With a current module only that module's section is shown, mirroring the
/// module route of the live view; the navigation always lists everything.
pub fn render_index(modules: &[Module], current: Option<&Module>) -> String {
    let mut body = String::new();

    body.push_str("<nav class=\"sg-nav\"><ul>\n");
    for module in modules {
        body.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            escape(&module.link),
            escape(&module.name)
        ));
    }
    body.push_str("</ul></nav>\n");

    let shown = match current {
        Some(module) => std::slice::from_ref(module),
        None => modules,
    };
    for module in shown {
        render_module(&mut body, module);
    }

    wrap_in_document(&body, current.map(|m| m.name.as_str()).unwrap_or("Styleguide"))
}

fn render_module(out: &mut String, module: &Module) {
    out.push_str(&format!(
        "<section class=\"sg-module\" id=\"{}\">\n<h2>{}</h2>\n",
        escape(&module.id),
        escape(&module.name)
    ));
    render_doc(out, module.doc.iter());
    for component in &module.components {
        render_component(out, component);
    }
    out.push_str("</section>\n");
}

fn render_component(out: &mut String, component: &Component) {
    out.push_str(&format!(
        "<article class=\"sg-component\" id=\"{}\">\n<h3>{}</h3>\n<p><code>{}</code></p>\n",
        escape(&component.id),
        escape(&component.name),
        escape(&component.template)
    ));
    render_doc(out, component.doc.iter());
    out.push_str("</article>\n");
}

fn render_doc<'a, I>(out: &mut String, tags: I)
where
    I: Iterator<Item = (&'a String, &'a String)>,
{
    let mut wrote_any = false;
    for (tag, body) in tags {
        if !wrote_any {
            out.push_str("<dl class=\"sg-doc\">\n");
            wrote_any = true;
        }
        out.push_str(&format!(
            "<dt>{}</dt><dd>{}</dd>\n",
            escape(tag),
            escape(body)
        ));
    }
    if wrote_any {
        out.push_str("</dl>\n");
    }
}

fn wrap_in_document(body: &str, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>\n{}</style>\n</head>\n<body>\n\
         <h1>{}</h1>\n{}</body>\n</html>\n",
        escape(title),
        STYLESHEET,
        escape(title),
        body
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
