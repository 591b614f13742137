use leptos::{html, prelude::*};

/// Extra pull radius around the element, in pixels
pub const MAGNETIC_PADDING: f64 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Offset that pulls an element towards the pointer. Zero once the pointer
/// leaves the element box grown by `padding`.
pub fn magnetic_offset(pointer: (f64, f64), bounds: Bounds, strength: f64, padding: f64) -> (f64, f64) {
    let (x, y) = pointer;
    let inside = x >= bounds.left - padding
        && x <= bounds.left + bounds.width + padding
        && y >= bounds.top - padding
        && y <= bounds.top + bounds.height + padding;
    if !inside {
        return (0.0, 0.0);
    }

    let cx = bounds.left + bounds.width / 2.0;
    let cy = bounds.top + bounds.height / 2.0;
    ((x - cx) * strength, (y - cy) * strength)
}

/// Pointer-following translation for `node`, in pixels
pub fn use_magnetic(node: NodeRef<html::Div>, strength: f64) -> ReadSignal<(f64, f64)> {
    let (offset, set_offset) = signal((0.0, 0.0));

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::mousemove, move |ev| {
            let Some(el) = node.get_untracked() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            let bounds = Bounds {
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
            };
            let pointer = (f64::from(ev.client_x()), f64::from(ev.client_y()));
            let next = magnetic_offset(pointer, bounds, strength, MAGNETIC_PADDING);
            if offset.get_untracked() != next {
                set_offset.set(next);
            }
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (node, strength, set_offset);

    offset
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: Bounds = Bounds {
        left: 100.0,
        top: 100.0,
        width: 100.0,
        height: 40.0,
    };

    #[test]
    fn centre_has_no_offset() {
        assert_eq!(magnetic_offset((150.0, 120.0), BOX, 0.3, 0.0), (0.0, 0.0));
    }

    #[test]
    fn pulls_towards_pointer() {
        let (dx, dy) = magnetic_offset((200.0, 100.0), BOX, 0.5, 0.0);
        assert_eq!(dx, 25.0);
        assert_eq!(dy, -10.0);
    }

    #[test]
    fn padding_extends_the_pull_area() {
        assert_eq!(magnetic_offset((210.0, 120.0), BOX, 0.5, 0.0), (0.0, 0.0));
        assert_eq!(magnetic_offset((210.0, 120.0), BOX, 0.5, 24.0), (30.0, 0.0));
    }
}
