//! gpui host view for the drawer.
//!
//! Pointer events are turned into the drawer's touch stream. A press on the
//! front panel (or on the mask while open) starts a touch; moves and the
//! release are tracked at window level from then on, because the front
//! panel shrinks away from a pointer pinned near the left edge mid-drag.
//!
//! Each render paints `Drawer::layers` and keeps requesting frames while a
//! commit is animating. gpui divs have no scale transform, so the front
//! panel's scale is expressed by resizing it about its centre.

use std::time::Instant;

use gpui::prelude::FluentBuilder;
use gpui::*;

use crate::config::PanelStyle;
use crate::drawer::Drawer;
use crate::gesture::PanGesture;
use crate::layers::{DrawerLayers, Shadow};

/// Press origin of the pointer sequence in progress. Pans are measured from
/// the origin alone, so moves and the release count wherever they land.
#[derive(Debug, Clone, Copy, Default)]
struct PointerTrack {
    origin: Option<(f32, f32)>,
}

impl PointerTrack {
    fn press(&mut self, x: f32, y: f32) {
        self.origin = Some((x, y));
    }

    fn moved(&self, x: f32, y: f32) -> Option<PanGesture> {
        Some(PanGesture::from_points(self.origin?, (x, y)))
    }

    fn released(&mut self, x: f32, y: f32) -> Option<PanGesture> {
        let pan = self.moved(x, y);
        self.origin = None;
        pan
    }
}

fn coords(position: Point<Pixels>) -> (f32, f32) {
    (f32::from(position.x), f32::from(position.y))
}

/// Drawer hosted in a gpui window: `background` is revealed, `front` moves.
pub struct DrawerView {
    drawer: Drawer,
    background: AnyView,
    front: AnyView,
    pointer: PointerTrack,
}

impl DrawerView {
    pub fn new(drawer: Drawer, background: AnyView, front: AnyView) -> Self {
        Self {
            drawer,
            background,
            front,
            pointer: PointerTrack::default(),
        }
    }

    pub fn drawer(&self) -> &Drawer {
        &self.drawer
    }

    pub fn open(&mut self, cx: &mut Context<Self>) {
        self.drawer.open();
        cx.notify();
    }

    pub fn close(&mut self, cx: &mut Context<Self>) {
        self.drawer.close();
        cx.notify();
    }

    pub fn set_blocked(&mut self, blocked: bool) {
        self.drawer.set_blocked(blocked);
    }

    fn handle_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let (x, y) = coords(event.position);
        self.pointer.press(x, y);
        let was_open = self.drawer.is_open();
        self.drawer.touch_start(x, y);
        if was_open {
            cx.notify();
        }
    }

    fn pointer_moved(&mut self, event: &MouseMoveEvent, cx: &mut Context<Self>) {
        if event.pressed_button != Some(MouseButton::Left) {
            return;
        }
        let (x, y) = coords(event.position);
        let Some(pan) = self.pointer.moved(x, y) else {
            return;
        };

        if self.drawer.touch_move(pan).is_claimed() {
            cx.stop_propagation();
            cx.notify();
        }
    }

    fn pointer_released(&mut self, event: &MouseUpEvent, cx: &mut Context<Self>) {
        if event.button != MouseButton::Left {
            return;
        }
        let (x, y) = coords(event.position);
        let Some(pan) = self.pointer.released(x, y) else {
            return;
        };
        self.drawer.touch_end(pan);
        cx.notify();
    }

    /// Hitbox-free overlay whose paint pass subscribes this view to window
    /// mouse moves and releases for the next frame.
    fn pointer_tracker(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let view = cx.entity().clone();
        canvas(
            |_, _, _| {},
            move |_, _, window, _| {
                let on_move = view.clone();
                window.on_mouse_event(move |event: &MouseMoveEvent, phase, _, cx| {
                    if phase == DispatchPhase::Bubble {
                        on_move.update(cx, |this, cx| this.pointer_moved(event, cx));
                    }
                });
                let on_up = view.clone();
                window.on_mouse_event(move |event: &MouseUpEvent, phase, _, cx| {
                    if phase == DispatchPhase::Bubble {
                        on_up.update(cx, |this, cx| this.pointer_released(event, cx));
                    }
                });
            },
        )
        .absolute()
        .size_full()
    }
}

/// `backgroundColor` of a passthrough style, when it is a colour gpui parses.
fn style_background(style: &PanelStyle) -> Option<Rgba> {
    let value = style.get("backgroundColor")?.as_str()?;
    Rgba::try_from(value).ok()
}

/// Parse a CSS `rgba(r,g,b,a)` colour with 0-255 channels.
fn parse_css_rgba(value: &str) -> Option<Rgba> {
    let inner = value.trim().strip_prefix("rgba(")?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(|p| p.trim().parse::<f32>());
    let r = parts.next()?.ok()?;
    let g = parts.next()?.ok()?;
    let b = parts.next()?.ok()?;
    let a = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Rgba {
        r: r / 255.0,
        g: g / 255.0,
        b: b / 255.0,
        a,
    })
}

/// gpui has no elevation; only the offset, blur and colour carry over.
fn box_shadow(shadow: &Shadow) -> BoxShadow {
    let mut color = parse_css_rgba(shadow.color).unwrap_or(Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    });
    color.a *= shadow.opacity;

    BoxShadow {
        color: color.into(),
        offset: point(px(shadow.offset_x), px(shadow.offset_y)),
        blur_radius: px(shadow.radius),
        spread_radius: px(0.),
    }
}

impl Render for DrawerView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let now = Instant::now();
        let DrawerLayers {
            container,
            background,
            mask,
            front,
        } = self.drawer.layers(now);

        if self.drawer.is_animating(now) {
            window.request_animation_frame();
        }

        let viewport_width = background.width;
        let viewport_height = background.height;
        let scale = front.transform.scale;
        let front_width = viewport_width * scale;
        let front_height = front.height * scale;
        let front_left = front.transform.offset_x + (viewport_width - front_width) / 2.0;
        let front_top = (front.height - front_height) / 2.0;

        let front_bg = style_background(&front.style)
            .or_else(|| Rgba::try_from(front.background).ok())
            .unwrap_or_else(|| rgb(0xffffff));

        let mut root = div().relative().size_full().overflow_hidden();
        if let Some(color) = style_background(&container) {
            root = root.bg(color);
        }

        let mut back = div()
            .absolute()
            .top_0()
            .left_0()
            .w(px(viewport_width))
            .h(px(viewport_height))
            .child(self.background.clone());
        if let Some(color) = style_background(&background.style) {
            back = back.bg(color);
        }

        root.child(back)
            .when_some(mask, |this, mask| {
                // Swallows presses on the revealed content; a press here is a
                // touch start like one on the front panel
                this.child(
                    div()
                        .id("reveal-drawer-mask")
                        .absolute()
                        .top_0()
                        .left_0()
                        .w(px(mask.width))
                        .h(px(mask.height))
                        .occlude()
                        .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_mouse_down)),
                )
            })
            .child(
                div()
                    .id("reveal-drawer-front")
                    .absolute()
                    .top(px(front_top))
                    .left(px(front_left))
                    .w(px(front_width))
                    .h(px(front_height))
                    .bg(front_bg)
                    .shadow(vec![box_shadow(&front.shadow)])
                    .overflow_hidden()
                    .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_mouse_down))
                    .child(self.front.clone()),
            )
            .child(self.pointer_tracker(cx))
    }
}
