//! Browser glue: mounts the game into the page, dispatches button clicks and runs
//! the one-second round timer while a case is on screen.

pub mod view;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, window};

use crate::config::GameConfig;
use crate::error::UiError;
use crate::game::{GamePhase, GameSession};
use view::Action;

pub const ROOT_ID: &str = "tib-root";

const ROOT_STYLE: &str = "min-height:100vh; display:flex; flex-direction:column; \
                          align-items:center; justify-content:center; padding:16px; \
                          font-family:system-ui, sans-serif; text-align:center; gap:16px;";

/// Live interval; clearing happens on drop so the callback never outlives it.
struct Ticker {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if let Some(w) = window() {
            w.clear_interval_with_handle(self.handle);
        }
    }
}

struct App {
    session: GameSession,
    root: Element,
    // false when the page supplied its own #tib-root; we only clear it on teardown
    owns_root: bool,
    click: Closure<dyn FnMut(Event)>,
    ticker: Option<Ticker>,
}

thread_local! {
    static APP: std::cell::RefCell<Option<App>> = std::cell::RefCell::new(None);
}

pub fn mount(config: GameConfig) -> Result<(), UiError> {
    unmount();
    let session = GameSession::new(config)?;
    let win = window().ok_or(UiError::NoWindow)?;
    let doc = win.document().ok_or(UiError::NoDocument)?;

    // Reuse a page-provided container or create one at the end of <body>
    let (root, owns_root) = if let Some(el) = doc.get_element_by_id(ROOT_ID) {
        (el, false)
    } else {
        let el = doc.create_element("div")?;
        el.set_id(ROOT_ID);
        el.set_attribute("style", ROOT_STYLE)?;
        doc.body().ok_or(UiError::NoBody)?.append_child(&el)?;
        (el, true)
    };

    let click = Closure::wrap(Box::new(move |evt: Event| on_click(&evt)) as Box<dyn FnMut(_)>);
    if let Err(e) = root.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())
    {
        if owns_root {
            root.remove();
        }
        return Err(e.into());
    }

    let app = App { session, root, owns_root, click, ticker: None };
    render(&app);
    APP.with(|cell| cell.replace(Some(app)));
    log::info!("mounted into #{ROOT_ID}");
    Ok(())
}

/// Tear down: stop the timer, detach the listener, clear the view.
pub fn unmount() {
    let Some(mut app) = APP.with(|cell| cell.borrow_mut().take()) else {
        return;
    };
    app.ticker = None;
    let _ = app
        .root
        .remove_event_listener_with_callback("click", app.click.as_ref().unchecked_ref());
    if app.owns_root {
        app.root.remove();
    } else {
        app.root.set_inner_html("");
    }
    log::info!("unmounted");
}

fn on_click(evt: &Event) {
    let Some(action) = evt
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("[data-action]").ok().flatten())
        .and_then(|el| el.get_attribute("data-action"))
        .and_then(|attr| Action::from_attr(&attr))
    else {
        return;
    };
    APP.with(|cell| {
        if let Some(app) = cell.borrow_mut().as_mut() {
            if let Err(e) = dispatch(app, action) {
                log::error!("{:?} failed: {}", action, e);
            }
        }
    });
}

fn dispatch(app: &mut App, action: Action) -> Result<(), UiError> {
    let result = match action {
        Action::Start | Action::Restart => app.session.start(),
        Action::Decide(decision) => app.session.decide(decision).map(|_| ()),
        Action::Next => app.session.next_case().map(|_| ()),
    };
    if let Err(e) = result {
        log::debug!("ignored {:?}: {}", action, e);
        return Ok(());
    }
    sync_ticker(app)?;
    render(app);
    Ok(())
}

// Each newly presented case gets a fresh interval so the first tick lands a full
// period after the case appears.
fn sync_ticker(app: &mut App) -> Result<(), UiError> {
    app.ticker = None;
    if app.session.phase() == GamePhase::Playing {
        app.ticker = Some(start_ticker(app.session.config().tick_interval_ms)?);
    }
    Ok(())
}

fn start_ticker(period_ms: u32) -> Result<Ticker, UiError> {
    let win = window().ok_or(UiError::NoWindow)?;
    let callback = Closure::wrap(Box::new(on_tick) as Box<dyn FnMut()>);
    let timeout = i32::try_from(period_ms).unwrap_or(i32::MAX);
    let handle = win.set_interval_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        timeout,
    )?;
    Ok(Ticker { handle, _callback: callback })
}

fn on_tick() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow_mut().as_mut() {
            if let Some(secs) = app.session.tick() {
                // Update the clock in place instead of re-rendering the whole card
                if let Some(doc) = window().and_then(|w| w.document()) {
                    if let Some(el) = doc.get_element_by_id(view::TIMER_ID) {
                        el.set_text_content(Some(&view::timer_text(secs)));
                    }
                }
            }
        }
    });
}

fn render(app: &App) {
    app.root.set_inner_html(&view::render(&app.session));
}
