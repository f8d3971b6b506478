//! Notifier
//!
//! Transient alert banners. Each banner lives in its own host element under
//! `body`, so banners stack without knowing about each other. A banner goes
//! away on its close button or after the configured delay, whichever comes
//! first; either way its mounted view is released with it.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::future::TimeoutFuture;
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, HtmlElement};

use crate::diagnostics::Diagnostics;
use crate::dom::Subscription;
use crate::error::describe_js;
use crate::models::Notice;

/// Class on every banner host
pub const HOST_CLASS: &str = "notice-host";

const CLOSE_SELECTOR: &str = ".btn-close";

const BANNER_STYLE: &str = "top: 20px; right: 20px; z-index: 1050; min-width: 300px;";

pub trait Notifier {
    fn notify(&self, notice: Notice);
}

// ========================
// Banner Lifetime
// ========================

/// One shown banner. Dropping it detaches the host and unmounts the view.
struct Banner {
    host: Element,
    _view: Box<dyn Any>,
    _close: Subscription,
    open: Rc<Cell<usize>>,
}

impl Drop for Banner {
    fn drop(&mut self) {
        dismiss(&self.host);
        self.open.set(self.open.get().saturating_sub(1));
    }
}

/// Shared by the dismiss timer and the close button; emptied by whichever fires first
type BannerSlot = Rc<RefCell<Option<Banner>>>;

fn close_banner(slot: &BannerSlot) {
    let banner = slot.borrow_mut().take();
    drop(banner);
}

fn is_close_click(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(CLOSE_SELECTOR).ok().flatten())
        .is_some()
}

// ========================
// Notifier
// ========================

/// Renders notices as Bootstrap alerts
pub struct BannerNotifier {
    document: web_sys::Document,
    dismiss_after_ms: u32,
    diagnostics: Rc<dyn Diagnostics>,
    open: Rc<Cell<usize>>,
}

impl BannerNotifier {
    pub fn new(
        document: web_sys::Document,
        dismiss_after_ms: u32,
        diagnostics: Rc<dyn Diagnostics>,
    ) -> Self {
        Self {
            document,
            dismiss_after_ms,
            diagnostics,
            open: Rc::new(Cell::new(0)),
        }
    }

    /// Banners shown and not yet released
    pub fn open_banners(&self) -> usize {
        self.open.get()
    }

    fn show(&self, notice: Notice) -> Result<BannerSlot, JsValue> {
        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        let host: HtmlElement = self
            .document
            .create_element("div")?
            .dyn_into()
            .map_err(JsValue::from)?;
        host.set_class_name(HOST_CLASS);

        let slot: BannerSlot = Rc::new(RefCell::new(None));
        let weak: Weak<RefCell<Option<Banner>>> = Rc::downgrade(&slot);
        // Closing drops this listener, so the release waits until the click has been handled
        let close = Subscription::listen(&host, "click", move |event| {
            if !is_close_click(&event) {
                return;
            }
            let weak = weak.clone();
            spawn_local(async move {
                if let Some(slot) = weak.upgrade() {
                    close_banner(&slot);
                }
            });
        })?;

        let alert_class = notice.alert_class();
        let message = notice.message;
        let mounted = mount_to(host.clone(), move || {
            view! { <NoticeBanner alert_class=alert_class message=message /> }
        });

        body.append_child(&host)?;
        self.open.set(self.open.get() + 1);
        *slot.borrow_mut() = Some(Banner {
            host: host.into(),
            _view: Box::new(mounted),
            _close: close,
            open: self.open.clone(),
        });
        Ok(slot)
    }
}

impl Notifier for BannerNotifier {
    fn notify(&self, notice: Notice) {
        match self.show(notice) {
            Ok(slot) => schedule_dismiss(slot, self.dismiss_after_ms),
            Err(e) => self
                .diagnostics
                .error(&format!("Failed to show notice: {}", describe_js(&e))),
        }
    }
}

fn schedule_dismiss(slot: BannerSlot, delay_ms: u32) {
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        close_banner(&slot);
    });
}

/// Removes a banner host unless it is already gone
fn dismiss(host: &Element) {
    if host.is_connected() {
        host.remove();
    }
}

#[component]
fn NoticeBanner(alert_class: String, message: String) -> impl IntoView {
    view! {
        <div class=alert_class style=BANNER_STYLE role="alert">
            {message}
            <button type="button" class="btn-close" aria-label="Close"></button>
        </div>
    }
}
