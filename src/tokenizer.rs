//! Tag-stream tokenizer.
//!
//! Parses HTML with `dom_query` (html5ever under the hood) and replays the
//! resulting tree as a depth-first stream of open/text/close events. The
//! parser repairs malformed markup, so the emitted stream is always
//! balanced: every open is eventually followed by its close.
//!
//! Only elements and text nodes are reported. Comments, doctypes and
//! processing instructions are dropped.

use dom_query::{Document, NodeRef};
use tracing::debug;

use crate::adapter::TagSink;
use crate::Result;

enum Step<'a> {
    Visit(NodeRef<'a>),
    Close(String),
}

/// Parse `html` and feed its events into `sink`.
///
/// Stops at the first error returned by the sink.
pub fn tokenize<T: TagSink>(html: &str, sink: &mut T) -> Result<()> {
    let doc = Document::from(html);
    tokenize_document(&doc, sink)
}

/// Feed the events of an already parsed document into `sink`.
pub fn tokenize_document<T: TagSink>(doc: &Document, sink: &mut T) -> Result<()> {
    let mut pending: Vec<Step<'_>> = doc.root().children().into_iter().rev().map(Step::Visit).collect();
    let mut elements = 0usize;

    while let Some(step) = pending.pop() {
        match step {
            Step::Close(name) => sink.element_close(&name)?,
            Step::Visit(node) if node.is_element() => {
                let Some(name) = node.node_name() else {
                    continue;
                };
                let attrs = attributes(&node);

                sink.element_open(&name, &attrs)?;
                elements += 1;

                // Children are popped in document order, then the close.
                pending.push(Step::Close(name.to_string()));
                pending.extend(node.children().into_iter().rev().map(Step::Visit));
            }
            Step::Visit(node) if node.is_text() => {
                let text = node.text();
                if !text.is_empty() {
                    sink.text(&text)?;
                }
            }
            Step::Visit(_) => {}
        }
    }

    debug!("Tokenized {elements} elements");
    Ok(())
}

/// Attribute pairs of an element, in source order.
fn attributes(node: &NodeRef<'_>) -> Vec<(String, String)> {
    node.attrs()
        .iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect()
}
