//! Watches the signed-in session and ends it when the token expires or the
//! user goes idle, then redirects to the sign-in page with a notice.
//!
//! The decision logic lives in [`SessionMonitor`], a plain struct driven by
//! caller-supplied clock readings so it can be tested without a browser.
//! [`SessionTimeout`] wires it to DOM activity events and a poll interval.

use leptos::*;

use crate::state::session;
use crate::utils::jwt;

/// How often the monitor re-checks the session.
pub const CHECK_PERIOD_MS: u32 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutReason {
    Expired,
    Idle,
}

impl LogoutReason {
    pub fn notice(&self) -> &'static str {
        match self {
            LogoutReason::Expired => "Your session has expired. Please sign in again.",
            LogoutReason::Idle => "You were signed out after a period of inactivity.",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionMonitor {
    last_activity_ms: i64,
    idle_timeout_ms: i64,
}

impl SessionMonitor {
    pub fn new(idle_timeout_ms: i64, now_ms: i64) -> Self {
        Self {
            last_activity_ms: now_ms,
            idle_timeout_ms,
        }
    }

    /// Records user activity, pushing the idle deadline forward.
    pub fn touch(&mut self, now_ms: i64) {
        self.last_activity_ms = now_ms;
    }

    /// Checks the session without side effects. Returns the reason the
    /// session should end, or `None` while it is still live. With no token
    /// stored there is nothing to end, so the result is always `None`.
    pub fn poll(&self, now_ms: i64) -> Option<LogoutReason> {
        let token = session::auth_token()?;
        if let Some(exp_ms) = jwt::token_exp_ms(&token) {
            if exp_ms <= now_ms {
                return Some(LogoutReason::Expired);
            }
        }
        if now_ms - self.last_activity_ms >= self.idle_timeout_ms {
            return Some(LogoutReason::Idle);
        }
        None
    }

    /// Polls and, when the session should end, clears both session slots.
    /// The cleared token makes every later poll return `None`, so a reason
    /// is surfaced at most once per sign-in.
    pub fn enforce(&self, now_ms: i64) -> Option<LogoutReason> {
        let reason = self.poll(now_ms)?;
        log::info!("ending session: {:?}", reason);
        session::clear_session();
        Some(reason)
    }
}

/// Mounts the session monitor for the lifetime of the surrounding view.
/// Renders nothing.
#[component]
pub fn SessionTimeout() -> impl IntoView {
    #[cfg(target_arch = "wasm32")]
    wasm::activate();

    view! { <></> }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use leptos::on_cleanup;
    use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    use super::{LogoutReason, SessionMonitor, CHECK_PERIOD_MS};
    use crate::config;
    use crate::utils::time;

    const ACTIVITY_EVENTS: &[&str] = &[
        "mousemove",
        "mousedown",
        "keydown",
        "scroll",
        "touchstart",
        "focus",
    ];

    pub fn activate() {
        let window = match web_sys::window() {
            Some(window) => window,
            None => return,
        };

        let monitor = Rc::new(RefCell::new(SessionMonitor::new(
            config::idle_timeout_ms(),
            time::now_ms(),
        )));

        let touch = {
            let monitor = Rc::clone(&monitor);
            Closure::<dyn Fn(web_sys::Event)>::new(move |_event: web_sys::Event| {
                monitor.borrow_mut().touch(time::now_ms());
            })
        };
        for event in ACTIVITY_EVENTS {
            let _ = window
                .add_event_listener_with_callback(event, touch.as_ref().unchecked_ref());
        }
        if let Some(document) = window.document() {
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                touch.as_ref().unchecked_ref(),
            );
        }

        let interval = {
            let monitor = Rc::clone(&monitor);
            gloo_timers::callback::Interval::new(CHECK_PERIOD_MS, move || {
                if let Some(reason) = monitor.borrow().enforce(time::now_ms()) {
                    redirect_to_login(reason);
                }
            })
        };

        on_cleanup(move || {
            if let Some(window) = web_sys::window() {
                for event in ACTIVITY_EVENTS {
                    let _ = window
                        .remove_event_listener_with_callback(event, touch.as_ref().unchecked_ref());
                }
                if let Some(document) = window.document() {
                    let _ = document.remove_event_listener_with_callback(
                        "visibilitychange",
                        touch.as_ref().unchecked_ref(),
                    );
                }
            }
            drop(touch);
            interval.cancel();
        });
    }

    fn redirect_to_login(reason: LogoutReason) {
        let notice = utf8_percent_encode(reason.notice(), NON_ALPHANUMERIC).to_string();
        let target = format!("/auth?mode=login&notice={notice}");
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&target);
        }
    }
}
