pub mod gestures;
pub mod types;

pub use types::{Point, PointerEvent, PointerEventKind};

pub mod prelude {
    pub use super::types::{Point, PointerEvent, PointerEventKind};
}
