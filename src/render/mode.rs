/// What goes inside the anchor wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content {
    Children,
    Fallback,
}

/// Rendering decision of a `WhenVisible`, derived on every render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// The anchor wrapper (observed element) around `Content`
    Wrapped(Content),
    /// The children alone: no wrapper, no anchor, nothing left to observe
    BareChildren,
}

impl RenderMode {
    pub fn has_anchor(self) -> bool {
        matches!(self, RenderMode::Wrapped(_))
    }
}

pub fn render_mode(always: bool, loaded: bool) -> RenderMode {
    match (always, loaded) {
        (false, true) => RenderMode::BareChildren,
        (_, true) => RenderMode::Wrapped(Content::Children),
        (_, false) => RenderMode::Wrapped(Content::Fallback),
    }
}
