pub fn log_error<E: core::fmt::Display>(error: E) -> String {
    log::error!("{error}");
    error.to_string()
}

// pub type CheapClone<T> = std::sync::Arc<T>;
pub type CheapClone<T> = std::rc::Rc<T>;

/// Unique DOM id for an anchor element
pub fn anchor_id() -> String {
    format!("when-visible-{}", uuid::Uuid::new_v4())
}
