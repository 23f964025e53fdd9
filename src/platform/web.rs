//! Browser host
//!
//! Binds the game to the page's `#ball`, `#rod1` and `#rod2` elements.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, KeyboardEvent, Window};

use crate::consts::TICK_MS;
use crate::game::{GameLoop, KeyOutcome, StartOutcome};
use crate::geometry::{GeometryProvider, Rect, Viewport};
use crate::render::{Element, Renderer};
use crate::settings::Settings;
use crate::wins::{Side, WinSink, WinTally};

/// Geometry read straight from the page
struct DomGeometry {
    window: Window,
    ball: HtmlElement,
    rod1: HtmlElement,
    rod2: HtmlElement,
}

impl DomGeometry {
    fn new(window: Window, document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            ball: element_by_id(document, Element::Ball.id())?,
            rod1: element_by_id(document, Element::Rod1.id())?,
            rod2: element_by_id(document, Element::Rod2.id())?,
            window,
        })
    }

    fn element(&self, element: Element) -> &HtmlElement {
        match element {
            Element::Ball => &self.ball,
            Element::Rod1 => &self.rod1,
            Element::Rod2 => &self.rod2,
        }
    }

    fn bounds(el: &HtmlElement) -> Rect {
        let r = el.get_bounding_client_rect();
        Rect::new(r.x() as f32, r.y() as f32, r.width() as f32, r.height() as f32)
    }
}

impl GeometryProvider for DomGeometry {
    fn ball_box(&self) -> Rect {
        Self::bounds(&self.ball)
    }

    fn rod1_box(&self) -> Rect {
        Self::bounds(&self.rod1)
    }

    fn rod2_box(&self) -> Rect {
        Self::bounds(&self.rod2)
    }

    fn viewport(&self) -> Viewport {
        let size = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        Viewport::new(
            size(self.window.inner_width()) as f32,
            size(self.window.inner_height()) as f32,
        )
    }
}

/// Writes placements into element styles
struct DomRenderer {
    ball: HtmlElement,
    rod1: HtmlElement,
    rod2: HtmlElement,
}

impl Renderer for DomRenderer {
    fn place(&mut self, element: Element, left: i32, top: i32) {
        let el = match element {
            Element::Ball => &self.ball,
            Element::Rod1 => &self.rod1,
            Element::Rod2 => &self.rod2,
        };
        let style = el.style();
        if let Err(e) = style
            .set_property("left", &format!("{}px", left))
            .and_then(|_| style.set_property("top", &format!("{}px", top)))
        {
            log::warn!("Failed to place #{}: {:?}", element.id(), e);
        }
    }
}

/// Tally that saves itself and updates the optional score elements
struct PageWins {
    tally: WinTally,
    persist: bool,
    document: Document,
}

impl PageWins {
    fn show(&self) {
        for side in [Side::Rod1, Side::Rod2] {
            let id = match side {
                Side::Rod1 => "wins-rod1",
                Side::Rod2 => "wins-rod2",
            };
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(&self.tally.wins(side).to_string()));
            }
        }
    }
}

impl WinSink for PageWins {
    fn store_win(&mut self, side: Side) {
        self.tally.store_win(side);
        if self.persist {
            self.tally.save();
        }
        self.show();
    }
}

/// Everything the event closures share
struct Host {
    game: GameLoop,
    geometry: DomGeometry,
    renderer: DomRenderer,
    wins: PageWins,
}

fn element_by_id(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{}", id)))?;
    Ok(el.dyn_into::<HtmlElement>()?)
}

/// Wire the game into the page
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    log::info!("Rod Ball starting...");

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let settings = Settings::load();
    // Writes back the defaults on a first visit so they can be edited in storage
    settings.save();
    let geometry = DomGeometry::new(window.clone(), &document)?;
    let renderer = DomRenderer {
        ball: geometry.element(Element::Ball).clone(),
        rod1: geometry.element(Element::Rod1).clone(),
        rod2: geometry.element(Element::Rod2).clone(),
    };
    let tally = if settings.persist_wins {
        WinTally::load()
    } else {
        WinTally::new()
    };
    let wins = PageWins {
        tally,
        persist: settings.persist_wins,
        document: document.clone(),
    };
    wins.show();

    let host = Rc::new(RefCell::new(Host {
        game: GameLoop::new(&settings, &geometry),
        geometry,
        renderer,
        wins,
    }));

    setup_keyboard(&window, host)?;

    log::info!("Rod Ball ready, press {} to start", settings.keys.start);
    Ok(())
}

fn setup_keyboard(window: &Window, host: Rc<RefCell<Host>>) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
        let outcome = {
            let mut h = host.borrow_mut();
            let Host {
                game,
                geometry,
                renderer,
                ..
            } = &mut *h;
            game.handle_key_press(&event.code(), &*geometry, renderer)
        };

        if outcome == KeyOutcome::Start(StartOutcome::Started) {
            if let Err(e) = start_ticking(host.clone()) {
                log::error!("Failed to start tick timer: {:?}", e);
            }
        }
    });
    window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Install the repeating tick. Called once, on the first start.
fn start_ticking(host: Rc<RefCell<Host>>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let closure = Closure::<dyn FnMut()>::new(move || {
        let mut h = host.borrow_mut();
        let Host {
            game,
            geometry,
            renderer,
            wins,
        } = &mut *h;
        game.tick(&*geometry, wins, renderer);
    });
    window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        TICK_MS as i32,
    )?;
    closure.forget();
    Ok(())
}
