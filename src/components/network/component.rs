//! Leptos component wrapping the node-mesh canvas.
//!
//! Creates a fullscreen canvas behind the page content and drives the
//! animation via `requestAnimationFrame`. Window-level listeners feed pointer
//! and viewport state into the shared context; each frame reads that state,
//! ticks the field, and redraws. The frame callback reschedules itself only
//! while the `running` flag is set; the flag is an `Arc<AtomicBool>` because
//! `on_cleanup` requires a `Send + Sync` closure, which rules out capturing
//! the `Rc`-held context there.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use log::info;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::config::{DeviceProfile, NetworkConfig};
use super::field::{ParticleField, PointerState, Viewport};
use super::render;
use super::theme::ResolvedTheme;

/// Bundles the field with the per-frame inputs its tick reads.
struct FieldContext {
	field: ParticleField,
	pointer: PointerState,
	viewport: Viewport,
	profile: DeviceProfile,
	theme: ResolvedTheme,
	config: NetworkConfig,
}

/// Renders the animated node mesh on a fixed fullscreen canvas.
///
/// The canvas sits behind the page (negative z-index) and resizes itself with
/// the window. Resizes that cross the device breakpoint reseed the field with
/// the new profile's particle count; resizes within a class keep the current
/// particles, which bounce back into the new bounds on their own.
#[component]
pub fn NetworkCanvas(#[prop(default = NetworkConfig::default())] config: NetworkConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let pointer_move_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));
	let pointer_out_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));
	let running = Arc::new(AtomicBool::new(true));

	let running_cleanup = running.clone();
	on_cleanup(move || {
		running_cleanup.store(false, Ordering::Relaxed);
	});

	let (context_init, animate_init, running_init) =
		(context.clone(), animate.clone(), running.clone());
	let (resize_cb_init, move_cb_init, out_cb_init) = (
		resize_cb.clone(),
		pointer_move_cb.clone(),
		pointer_out_cb.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = (
			window.inner_width().unwrap().as_f64().unwrap(),
			window.inner_height().unwrap().as_f64().unwrap(),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let viewport = Viewport {
			width: w,
			height: h,
		};
		let profile = config.profile_for_width(w);
		let theme = config.theme.resolve();
		let field = ParticleField::new(profile.particle_count, viewport, theme.node_radius);
		info!(
			"node-mesh: seeded {} particles for {}x{}",
			profile.particle_count, w as u32, h as u32
		);

		*context_init.borrow_mut() = Some(FieldContext {
			field,
			pointer: PointerState::default(),
			viewport,
			profile,
			theme,
			config: config.clone(),
		});

		let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			let (nw, nh) = (
				win.inner_width().unwrap().as_f64().unwrap(),
				win.inner_height().unwrap().as_f64().unwrap(),
			);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);

			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.viewport = Viewport {
					width: nw,
					height: nh,
				};
				let profile = c.config.profile_for_width(nw);
				if profile != c.profile {
					c.profile = profile;
					c.field
						.reseed(profile.particle_count, c.viewport, c.theme.node_radius);
					info!(
						"node-mesh: reseeded {} particles for {}x{}",
						profile.particle_count, nw as u32, nh as u32
					);
				}
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let context_move = context_init.clone();
		*move_cb_init.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			if let Some(ref mut c) = *context_move.borrow_mut() {
				c.pointer.set(ev.client_x() as f64, ev.client_y() as f64);
			}
		}));
		if let Some(ref cb) = *move_cb_init.borrow() {
			let _ =
				window.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}

		let context_out = context_init.clone();
		*out_cb_init.borrow_mut() = Some(Closure::new(move |_: MouseEvent| {
			if let Some(ref mut c) = *context_out.borrow_mut() {
				c.pointer.clear();
			}
		}));
		if let Some(ref cb) = *out_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("mouseout", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner, running_anim) = (
			context_init.clone(),
			animate_init.clone(),
			running_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let mut keep_running = false;
			if running_anim.load(Ordering::Relaxed) {
				if let Some(ref mut c) = *context_anim.borrow_mut() {
					keep_running = true;
					c.field
						.tick(c.pointer.get(), c.viewport, &c.profile.attraction);
					render::render(&ctx, &c.field, c.viewport, c.config.link_threshold, &c.theme);
				}
			}
			if keep_running {
				if let Some(ref cb) = *animate_inner.borrow() {
					let _ = web_sys::window()
						.unwrap()
						.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="node-mesh-canvas"
			style="position: fixed; inset: 0; z-index: -1; display: block;"
		/>
	}
}
