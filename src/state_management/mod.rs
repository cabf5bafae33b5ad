mod page_props;
mod reload_service;

pub use page_props::{merge_partial_props, read_page_prop, PartialProps, PAGE_PROPS};
pub use reload_service::{
    use_reload_service, ReloadCommand, ReloadService, Transport, TransportFuture,
};
