//! Skyburst entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_show {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, Window};

    use skyburst::renderer::CanvasRenderer;
    use skyburst::sim::{ShowState, tick};

    /// Canvas element id; an existing canvas with this id is reused
    const CANVAS_ID: &str = "skyburst-canvas";

    /// Everything the frame loop needs between callbacks
    struct Show {
        state: ShowState,
        renderer: CanvasRenderer,
    }

    fn window() -> Window {
        web_sys::window().expect("no window")
    }

    fn document() -> Document {
        window().document().expect("no document")
    }

    fn window_size() -> Option<(f64, f64)> {
        let width = window().inner_width().ok()?.as_f64()?;
        let height = window().inner_height().ok()?.as_f64()?;
        Some((width, height))
    }

    /// Find the show's canvas, creating and attaching a full-viewport one
    /// behind the page content if it does not exist yet.
    fn acquire_canvas(width: f64, height: f64) -> Result<HtmlCanvasElement, JsValue> {
        if let Some(existing) = document().get_element_by_id(CANVAS_ID) {
            return Ok(existing.dyn_into::<HtmlCanvasElement>()?);
        }

        let canvas = document()
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;

        canvas.set_id(CANVAS_ID);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let style = canvas.style();
        style.set_property("margin", "0")?;
        style.set_property("padding", "0")?;
        style.set_property("position", "fixed")?;
        style.set_property("touch-action", "none")?;
        style.set_property("top", "0")?;
        style.set_property("left", "0")?;
        style.set_property("z-index", "-1")?;

        document().body().expect("no body").append_child(&canvas)?;

        Ok(canvas)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Skyburst starting...");

        let (width, height) =
            window_size().ok_or_else(|| JsValue::from_str("window has no dimensions"))?;

        let canvas = acquire_canvas(width, height)?;
        let renderer = CanvasRenderer::new(&canvas)?;

        let seed = js_sys::Date::now() as u64;
        let show = Rc::new(RefCell::new(Show {
            state: ShowState::new(seed, width, height),
            renderer,
        }));

        log::info!("Show initialized with seed: {}", seed);

        // Resize the canvas with the window; rockets keep their targets
        {
            let show = show.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_: JsValue| {
                let Some((width, height)) = window_size() else {
                    return;
                };
                canvas.set_width(width as u32);
                canvas.set_height(height as u32);
                show.borrow_mut().state.resize(width, height);
                log::info!("Resized to {}x{}", width, height);
            });
            window().add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        request_animation_frame(show);

        log::info!("Skyburst running!");

        Ok(())
    }

    fn request_animation_frame(show: Rc<RefCell<Show>>) {
        let closure = Closure::once(move || {
            frame(show);
        });
        let _ = window().request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(show: Rc<RefCell<Show>>) {
        {
            let mut show = show.borrow_mut();
            let Show { state, renderer } = &mut *show;

            // Draw first: the frame shows pre-update positions
            if let Err(e) = renderer.render(state) {
                log::warn!("Render error: {:?}", e);
            }

            tick(state);
        }

        request_animation_frame(show);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_show::run() {
        log::error!("Failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use skyburst::sim::{ShowState, tick};

    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    log::info!("Skyburst (native) starting headless run with seed {}", seed);

    let mut state = ShowState::new(seed, 800.0, 600.0);
    let mut ticks: u64 = 0;

    while !state.is_finished() {
        tick(&mut state);
        ticks += 1;

        if ticks % 25 == 0 {
            log::debug!("tick {}: {} rockets live", ticks, state.fireworks.len());
        }
    }

    log::info!("Show burned out after {} ticks", ticks);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
