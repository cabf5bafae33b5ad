//! # Render
//!
//! The placeholder/loaded rendering contract: a pure decision from `(always, loaded)`
//! plus a small factory trait so any UI binding can materialize it.

mod element;
mod mode;

pub use element::{render, ElementFactory, WrapperTag};
pub use mode::{render_mode, Content, RenderMode};
