use super::mode::{Content, RenderMode};

/// The element kinds a `WhenVisible` wrapper can be rendered as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapperTag {
    #[default]
    Div,
    Span,
    Section,
    Article,
    Aside,
    Li,
    P,
}
impl WrapperTag {
    pub fn as_str(self) -> &'static str {
        match self {
            WrapperTag::Div => "div",
            WrapperTag::Span => "span",
            WrapperTag::Section => "section",
            WrapperTag::Article => "article",
            WrapperTag::Aside => "aside",
            WrapperTag::Li => "li",
            WrapperTag::P => "p",
        }
    }
}
impl core::fmt::Display for WrapperTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the host framework's nodes for the render contract.
///
/// The dioxus binding produces `Element`s; tests can produce plain strings.
pub trait ElementFactory {
    type Node;

    /// The observed anchor element, identified by `anchor_id`, around `content`
    fn wrapper(&self, tag: WrapperTag, anchor_id: &str, content: Option<Self::Node>)
        -> Self::Node;

    /// `content` with no wrapper at all (`None` renders nothing)
    fn bare(&self, content: Option<Self::Node>) -> Self::Node;
}

/// Apply `mode` with `factory`.
///
/// Only the node that is actually displayed is consumed; the other is dropped.
pub fn render<F: ElementFactory>(
    factory: &F,
    mode: RenderMode,
    tag: WrapperTag,
    anchor_id: &str,
    children: Option<F::Node>,
    fallback: Option<F::Node>,
) -> F::Node {
    match mode {
        RenderMode::Wrapped(Content::Children) => factory.wrapper(tag, anchor_id, children),
        RenderMode::Wrapped(Content::Fallback) => factory.wrapper(tag, anchor_id, fallback),
        RenderMode::BareChildren => factory.bare(children),
    }
}
