use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlDivElement, HtmlElement};

use crate::phase::Phase;
use crate::Game;

const ROOT_CSS: &str = "position:fixed;top:16px;left:16px;color:white;font-family:'Inter',sans-serif;font-size:16px;pointer-events:none;text-shadow:0 0 6px rgba(0,0,0,0.45);z-index:1000;";
const STATUS_CSS: &str = "max-width:320px;line-height:1.4;transition:opacity 0.2s ease;";
const PANEL_CSS: &str = "position:fixed;top:50%;left:50%;transform:translate(-50%,-50%);padding:24px 32px;border-radius:12px;background:rgba(0,0,0,0.55);color:white;font-family:'Inter',sans-serif;text-align:center;z-index:1001;";

/// DOM overlay with the live score, prompts and the game-over panel.
pub struct Hud {
    fps: HtmlDivElement,
    score: HtmlDivElement,
    status: HtmlDivElement,
    panel: HtmlDivElement,
    final_score: HtmlDivElement,
    restart: HtmlButtonElement,
    shown: Option<(Phase, u32, u32)>,
}

impl Hud {
    pub fn new(document: &Document) -> Result<Self, wasm_bindgen::JsValue> {
        let body = document
            .body()
            .ok_or_else(|| wasm_bindgen::JsValue::from_str("document has no body"))?;

        let root = div(document)?;
        root.set_class_name("hud-root");
        set_style(&root, ROOT_CSS);

        let fps = div(document)?;
        fps.set_inner_text("FPS: --");
        set_style(&fps, "margin-bottom:4px;font-weight:600;");

        let score = div(document)?;
        score.set_inner_text("Score: 0");
        set_style(&score, "margin-bottom:4px;font-size:28px;font-weight:700;");

        let status = div(document)?;
        set_style(&status, STATUS_CSS);

        root.append_child(&fps)?;
        root.append_child(&score)?;
        root.append_child(&status)?;

        let panel = div(document)?;
        panel.set_class_name("game-over");
        set_style(&panel, PANEL_CSS);
        panel.set_hidden(true);

        let title = div(document)?;
        title.set_inner_text("Game Over");
        set_style(&title, "font-size:28px;font-weight:700;margin-bottom:8px;");

        let final_score = div(document)?;
        set_style(&final_score, "margin-bottom:16px;line-height:1.4;");

        let restart: HtmlButtonElement = document.create_element("button")?.dyn_into()?;
        restart.set_inner_text("Restart");
        set_style(
            &restart,
            "font-size:18px;padding:8px 20px;border:none;border-radius:8px;cursor:pointer;",
        );

        panel.append_child(&title)?;
        panel.append_child(&final_score)?;
        panel.append_child(&restart)?;

        body.append_child(&root)?;
        body.append_child(&panel)?;

        Ok(Self {
            fps,
            score,
            status,
            panel,
            final_score,
            restart,
            shown: None,
        })
    }

    pub fn restart_button(&self) -> &HtmlButtonElement {
        &self.restart
    }

    pub fn set_fps(&self, fps: f32) {
        self.fps
            .set_inner_text(&format!("FPS: {:>3.0}", fps.round().clamp(0.0, 999.0)));
    }

    /// Refreshes the texts that depend on game progress. DOM writes only
    /// happen when something changed.
    pub fn sync(&mut self, game: &Game) {
        let current = (game.phase(), game.score(), game.best_score());
        if self.shown == Some(current) {
            return;
        }
        let (phase, score, best) = current;
        let phase_changed = self.shown.map(|(p, _, _)| p) != Some(phase);
        self.shown = Some(current);

        if best > 0 {
            self.score
                .set_inner_text(&format!("Score: {}  (best {})", score, best));
        } else {
            self.score.set_inner_text(&format!("Score: {}", score));
        }

        if !phase_changed {
            return;
        }
        let text = game.status_text();
        self.status.set_inner_text(text);
        let opacity = if text.is_empty() { 0 } else { 1 };
        set_style(&self.status, &format!("opacity:{opacity};{STATUS_CSS}"));

        if phase == Phase::GameOver {
            self.final_score
                .set_inner_text(&format!("Score: {}\nBest: {}", score, best));
        }
        self.panel.set_hidden(phase != Phase::GameOver);
    }

    pub fn set_error(&self, text: &str) {
        self.status.set_inner_text(text);
        set_style(
            &self.status,
            "color:#ff8080;font-weight:600;max-width:320px;line-height:1.4;",
        );
    }
}

fn div(document: &Document) -> Result<HtmlDivElement, wasm_bindgen::JsValue> {
    Ok(document.create_element("div")?.dyn_into()?)
}

fn set_style(element: &HtmlElement, css: &str) {
    element.style().set_css_text(css);
}
