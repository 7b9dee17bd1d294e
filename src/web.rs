use std::{cell::RefCell, rc::Rc};

use anyhow::{anyhow, Result};
use js_sys::Function;
use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, HtmlButtonElement, HtmlCanvasElement};

use crate::config::Settings;
use crate::gpu::Gpu;
use crate::hud::Hud;
use crate::input::{action_for_key, Action, InputQueue};
use crate::render::{Palette, Scene};
use crate::storage::LocalStorage;
use crate::timer::FrameTimer;
use crate::Game;

type SharedInput = Rc<RefCell<InputQueue>>;

pub async fn start() -> Result<(), JsValue> {
    let window = window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    let canvas = document
        .get_element_by_id("game-canvas")
        .ok_or_else(|| JsValue::from_str("Missing canvas"))?
        .dyn_into::<HtmlCanvasElement>()?;

    let hud = Hud::new(&document)?;
    let settings = Settings::from_query(&window.location().search().unwrap_or_default());

    let input: SharedInput = Rc::new(RefCell::new(InputQueue::default()));
    install_trigger_jump(&window, &input)?;
    install_input_listeners(&window, &canvas, hud.restart_button(), &input)?;

    let (width, height) = fit_canvas(&canvas);
    let gpu = match Gpu::new(&canvas, settings.uncapped).await {
        Ok(gpu) => gpu,
        Err(err) => {
            error!("{:#}", err);
            hud.set_error("WebGPU not available\nCheck browser support (Safari 17.4/iOS 17.4+)");
            return Err(JsValue::from_str(&format!("{err:#}")));
        }
    };

    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let game = Game::new(
        width as f32,
        height as f32,
        Box::new(LocalStorage::open()),
        seed,
    );
    info!("canvas {width}x{height}, game ready");

    let state = Rc::new(RefCell::new(AppState {
        gpu,
        game,
        scene: Scene::new(Palette::default()),
        hud,
        input,
        canvas,
        timer: FrameTimer::default(),
        settings,
        raf_closure: None,
    }));

    start_animation_loop(state).map_err(|err| JsValue::from_str(&format!("{err:#}")))
}

fn install_trigger_jump(window: &web_sys::Window, input: &SharedInput) -> Result<(), JsValue> {
    let queue = input.clone();
    let closure = Closure::wrap(Box::new(move || {
        queue.borrow_mut().push(Action::Primary);
    }) as Box<dyn Fn()>);

    let func: &Function = closure.as_ref().unchecked_ref();
    js_sys::Reflect::set(window, &JsValue::from_str("triggerJump"), func)?;
    closure.forget();
    Ok(())
}

fn install_input_listeners(
    window: &web_sys::Window,
    canvas: &HtmlCanvasElement,
    restart: &HtmlButtonElement,
    input: &SharedInput,
) -> Result<(), JsValue> {
    let queue_key = input.clone();
    let key_closure = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
        if let Some(action) = action_for_key(&event.code(), event.repeat()) {
            event.prevent_default();
            queue_key.borrow_mut().push(action);
        }
    }) as Box<dyn FnMut(_)>);
    window.add_event_listener_with_callback("keydown", key_closure.as_ref().unchecked_ref())?;
    key_closure.forget();

    let queue_mouse = input.clone();
    let mouse_closure = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
        queue_mouse.borrow_mut().push(Action::Primary);
    }) as Box<dyn FnMut(_)>);
    canvas.add_event_listener_with_callback("mousedown", mouse_closure.as_ref().unchecked_ref())?;
    mouse_closure.forget();

    let queue_touch = input.clone();
    let touch_closure = Closure::wrap(Box::new(move |event: web_sys::TouchEvent| {
        // Keeps the browser from scrolling or zooming.
        event.prevent_default();
        queue_touch.borrow_mut().push(Action::Primary);
    }) as Box<dyn FnMut(_)>);
    canvas.add_event_listener_with_callback("touchstart", touch_closure.as_ref().unchecked_ref())?;
    touch_closure.forget();

    let queue_restart = input.clone();
    let restart_closure = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
        queue_restart.borrow_mut().push(Action::Restart);
    }) as Box<dyn FnMut(_)>);
    restart.add_event_listener_with_callback("click", restart_closure.as_ref().unchecked_ref())?;
    restart_closure.forget();

    Ok(())
}

fn start_animation_loop(state: Rc<RefCell<AppState>>) -> Result<()> {
    let performance = window()
        .and_then(|win| win.performance())
        .ok_or_else(|| anyhow!("No performance timer"))?;
    let mut last = performance.now();
    let closure_state = state.clone();

    let closure = Closure::wrap(Box::new(move |time: f64| {
        let dt = (((time - last) / 1000.0) as f32).max(0.0);
        last = time;

        {
            let mut state = closure_state.borrow_mut();
            if let Err(err) = state.frame(dt) {
                error!("Frame error: {err:#}");
                state.hud.set_error(&format!("WebGPU error\n{err:#}"));
                state.raf_closure = None;
                return;
            }
        }

        if !request_frame(&closure_state) {
            error!("Failed to schedule animation frame");
        }
    }) as Box<dyn FnMut(f64)>);

    state.borrow_mut().raf_closure = Some(closure);
    if !request_frame(&state) {
        return Err(anyhow!("Failed to request animation frame"));
    }
    Ok(())
}

/// Queues the stored frame callback. False when the loop has been stopped or
/// the browser refused the request.
fn request_frame(state: &Rc<RefCell<AppState>>) -> bool {
    let state = state.borrow();
    match (window(), state.raf_closure.as_ref()) {
        (Some(win), Some(cb)) => win.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok(),
        _ => false,
    }
}

/// Matches the canvas backing size to its containing box.
fn fit_canvas(canvas: &HtmlCanvasElement) -> (u32, u32) {
    let (width, height) = match canvas.parent_element() {
        Some(parent) => (parent.client_width(), parent.client_height()),
        None => (canvas.client_width(), canvas.client_height()),
    };
    let width = width.max(1) as u32;
    let height = height.max(1) as u32;
    if canvas.width() != width {
        canvas.set_width(width);
    }
    if canvas.height() != height {
        canvas.set_height(height);
    }
    (width, height)
}

struct AppState {
    gpu: Gpu,
    game: Game,
    scene: Scene,
    hud: Hud,
    input: SharedInput,
    canvas: HtmlCanvasElement,
    timer: FrameTimer,
    settings: Settings,
    raf_closure: Option<Closure<dyn FnMut(f64)>>,
}

impl AppState {
    fn frame(&mut self, dt: f32) -> Result<()> {
        let actions = self.input.borrow_mut().drain();
        for action in actions {
            self.game.handle(action);
        }

        self.timer.accumulate(dt);
        while self.timer.take_step() {
            self.game.tick();
        }

        self.resize_if_needed();

        self.hud.set_fps(self.timer.fps());
        self.hud.sync(&self.game);

        self.game.render(&mut self.scene);
        self.gpu
            .render(self.scene.instances(), self.scene.size(), self.settings.sky)
    }

    fn resize_if_needed(&mut self) {
        let (width, height) = fit_canvas(&self.canvas);
        if (width, height) != self.gpu.size() {
            self.gpu.resize(width, height);
            self.game.resize(width as f32, height as f32);
        }
    }
}
