use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::config::AppConfig;
use crate::slider::{Geometry, SwipeToStart};
use crate::theme::Theme;

/// Signals raised by widgets and handled by the screen on the next tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Started,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Alert,
}

pub struct App {
    pub slider: SwipeToStart,
    pub popup: Popup,
    pub theme: Theme,

    // Alert text shown when the swipe completes
    pub message: String,
    pub notifications: bool,

    pub should_quit: bool,

    events: UnboundedReceiver<AppEvent>,
    last_tick: Instant,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let (tx, events) = mpsc::unbounded_channel();

        let slider = SwipeToStart::new(move || {
            let _ = tx.send(AppEvent::Started);
        })
        .with_geometry(Geometry::new(config.handle_width, config.margin))
        .with_shimmer_period(Duration::from_millis(config.shimmer_ms))
        .with_spring(config.spring);

        Self {
            slider,
            popup: Popup::None,
            theme: Theme::from_config(&config.colors),
            message: config.message.clone(),
            notifications: config.notifications,
            should_quit: false,
            events,
            last_tick: Instant::now(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.popup {
            Popup::Alert => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.popup = Popup::None;
                }
            }
            Popup::None => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    self.should_quit = true;
                }
            }
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        // The alert is modal: it swallows input until dismissed
        if self.popup == Popup::Alert {
            if matches!(mouse.kind, MouseEventKind::Down(_)) {
                self.popup = Popup::None;
            }
            return;
        }

        self.slider.handle_mouse(mouse);
    }

    /// Advance animations to `now` and react to queued widget events
    pub fn tick(&mut self, now: Instant) {
        let dt = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        self.slider.tick(dt);

        while let Ok(event) = self.events.try_recv() {
            match event {
                AppEvent::Started => self.on_start(),
            }
        }
    }

    fn on_start(&mut self) {
        self.popup = Popup::Alert;

        if self.notifications {
            spawn_notification(self.message.clone());
        }
    }
}

/// Desktop notification, sent off the UI thread
fn spawn_notification(body: String) {
    let Ok(handle) = tokio::runtime::Handle::try_current() else {
        tracing::debug!("No runtime, skipping desktop notification");
        return;
    };

    handle.spawn_blocking(move || {
        if let Err(e) = notify("swipe-to-start", &body) {
            tracing::warn!("Failed to send notification: {}", e);
        }
    });
}

fn notify(summary: &str, body: &str) -> anyhow::Result<()> {
    notify_rust::Notification::new()
        .summary(summary)
        .body(body)
        .icon("media-playback-start")
        .show()?;
    Ok(())
}
