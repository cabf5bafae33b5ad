pub mod when_visible;
