mod visibility;

pub mod prelude {
    pub use super::visibility::AnchorRef;
    pub mod helper_hooks {
        pub use super::super::visibility::use_visibility_observer;
    }
}
