//! Native desktop host.
//!
//! Owns the winit event loop, translates keyboard state into the session's
//! `InputState`, and drives one `GameSession` tick per frame from
//! `about_to_wait`. No renderer is wired in yet; session events land in the
//! HUD model and the log, and the window title carries the vitals line.

use client_core::input::InputState;
use client_core::presenter::Presenter;
use client_core::session::GameSession;
use data_runtime::configs::combat::CombatCfg;
use data_runtime::configs::world_gen::WorldGenCfg;
use data_runtime::configs::{combat, world_gen};
use data_runtime::item::ItemCatalog;
use glam::Vec3;
use std::time::Instant;
use ux_hud::{HudModel, InventoryLine};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes},
};
use world_core::chunk::{ChunkContent, ChunkKey, Token};

#[cfg(feature = "demo_server")]
mod demo_server;

/// Milliseconds between window-title refreshes.
const TITLE_REFRESH_MS: u128 = 250;

/// Routes session events into the HUD model and the log for the frame being
/// ticked. Rebuilt each frame so it only borrows the HUD.
struct HudEvents<'a> {
    hud: &'a mut HudModel,
}

impl Presenter for HudEvents<'_> {
    fn remote_spawned(&mut self, id: &str, pos: Vec3) {
        log::info!("remote joined: {id} at ({:.1}, {:.1})", pos.x, pos.z);
    }
    fn remote_despawned(&mut self, id: &str) {
        log::info!("remote left: {id}");
    }
    fn chunk_spawned(&mut self, key: ChunkKey, content: &ChunkContent) {
        log::debug!(
            "chunk in ({}, {}): {} trees, {} tokens",
            key.cx,
            key.cz,
            content.trees.len(),
            content.tokens.len()
        );
    }
    fn chunk_evicted(&mut self, key: ChunkKey) {
        log::debug!("chunk out ({}, {})", key.cx, key.cz);
    }
    fn token_collected(&mut self, _key: ChunkKey, token: &Token) {
        log::info!("picked up a {:?} token", token.tier);
    }
    fn game_over(&mut self) {
        self.hud.set_game_over(true);
    }
    fn restarted(&mut self) {
        self.hud.set_game_over(false);
    }
    fn paused(&mut self, paused: bool) {
        self.hud.set_paused(paused);
    }
}

struct App {
    window: Option<Window>,
    session: GameSession,
    input: InputState,
    hud: HudModel,
    last_title: Instant,
    #[cfg(feature = "demo_server")]
    demo: Option<demo_server::DemoServer>,
}

impl App {
    fn new(session: GameSession) -> Self {
        Self {
            window: None,
            session,
            input: InputState::default(),
            hud: HudModel::default(),
            last_title: Instant::now(),
            #[cfg(feature = "demo_server")]
            demo: None,
        }
    }

    fn on_key(&mut self, code: KeyCode, pressed: bool, repeat: bool) {
        match code {
            // Held levels.
            KeyCode::KeyW | KeyCode::ArrowUp => self.input.forward = pressed,
            KeyCode::KeyS | KeyCode::ArrowDown => self.input.backward = pressed,
            KeyCode::KeyA | KeyCode::ArrowLeft => self.input.left = pressed,
            KeyCode::KeyD | KeyCode::ArrowRight => self.input.right = pressed,
            KeyCode::KeyK => self.input.heavy_held = pressed,
            KeyCode::KeyF | KeyCode::ControlLeft => self.input.defend = pressed,
            // One-shot edges fire on fresh presses only; key repeat must not
            // retrigger actions.
            _ if pressed && !repeat => match code {
                KeyCode::Space => self.input.jump_pressed = true,
                KeyCode::KeyJ => self.input.light_pressed = true,
                KeyCode::KeyL | KeyCode::ShiftLeft => self.input.dodge_pressed = true,
                KeyCode::KeyE => self.input.equip_toggle = true,
                KeyCode::KeyI => {
                    self.input.inventory_toggle = true;
                    self.hud.toggle_inventory();
                }
                KeyCode::Enter => self.input.restart_pressed = true,
                KeyCode::Escape => self.input.pause_toggle = true,
                KeyCode::F1 => self.hud.toggle_hud(),
                KeyCode::F3 => self.hud.toggle_perf(),
                _ => {}
            },
            _ => {}
        }
    }

    fn frame(&mut self) {
        #[cfg(feature = "demo_server")]
        if let Some(srv) = self.demo.as_mut() {
            srv.step();
        }
        let mut events = HudEvents { hud: &mut self.hud };
        self.session.tick(&self.input, &mut events);
        self.input.clear_edges();
        self.refresh_hud();
        if let Some(win) = &self.window {
            if self.last_title.elapsed().as_millis() >= TITLE_REFRESH_MS {
                self.last_title = Instant::now();
                win.set_title(&self.title_line());
            }
            win.request_redraw();
        }
    }

    /// Pull per-frame vitals out of the session. Event-shaped state (banners,
    /// pause) arrives through `HudEvents` instead.
    fn refresh_hud(&mut self) {
        let Some(p) = self.session.player() else {
            return;
        };
        self.hud.set_player_hp(p.hp.fraction());
        if let Some(e) = self.session.enemy() {
            let dist = if e.visible {
                e.tr.pos.distance(p.tr.pos)
            } else {
                f32::INFINITY
            };
            self.hud.set_enemy(e.hp.fraction(), dist);
        }
        let items: Vec<InventoryLine> = p
            .inventory
            .iter()
            .map(|id| InventoryLine {
                name: self
                    .session
                    .catalog()
                    .get(id)
                    .map_or_else(|| id.as_str().to_string(), |def| def.name.clone()),
                equipped: p.equipped.as_ref() == Some(id),
            })
            .collect();
        self.hud.set_inventory(items);
        let w = self.session.wallet();
        self.hud.set_wallet(w.bronze, w.silver, w.gold);
        self.hud.set_connected(self.session.connected());
    }

    fn title_line(&self) -> String {
        let hp = (self.hud.player_bar() * 100.0).round() as i32;
        let mut line = format!("Greenwold  hp {hp}%  {}", self.hud.wallet_line());
        if let Some(banner) = self.hud.banner() {
            line.push_str("  [");
            line.push_str(banner);
            line.push(']');
        }
        if let Some(marker) = self.hud.offline_marker() {
            line.push_str("  ");
            line.push_str(marker);
        }
        line
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = event_loop
                .create_window(WindowAttributes::default().with_title("Greenwold"))
                .expect("create window");
            self.window = Some(window);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = &self.window else {
            return;
        };
        if window.id() != window_id {
            return;
        }
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.on_key(code, event.state.is_pressed(), event.repeat);
                }
            }
            // Key releases are lost while unfocused; drop held levels so the
            // player does not keep walking on refocus.
            WindowEvent::Focused(false) => self.input.clear(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        self.frame();
    }
}

fn is_headless() -> bool {
    if std::env::var("GREENWOLD_HEADLESS")
        .map(|v| v == "1")
        .unwrap_or(false)
    {
        return true;
    }
    if std::env::var("CI")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false)
    {
        return true;
    }
    #[cfg(any(
        target_os = "linux",
        target_os = "freebsd",
        target_os = "dragonfly",
        target_os = "netbsd",
        target_os = "openbsd",
    ))]
    {
        if std::env::var_os("DISPLAY").is_none() && std::env::var_os("WAYLAND_DISPLAY").is_none() {
            return true;
        }
    }
    false
}

/// Build the session from on-disk config and hand it to the event loop.
/// Headless environments return immediately so CI never hangs on a window.
pub fn run() -> anyhow::Result<()> {
    if is_headless() {
        log::info!("headless environment; not opening a window");
        return Ok(());
    }
    let combat = combat::load_default().unwrap_or_else(|e| {
        log::warn!("combat config: {e:#}; using defaults");
        CombatCfg::default()
    });
    let worldgen = world_gen::load_default().unwrap_or_else(|e| {
        log::warn!("world_gen config: {e:#}; using defaults");
        WorldGenCfg::default()
    });
    let catalog = ItemCatalog::load_default().unwrap_or_else(|e| {
        log::warn!("item catalog: {e:#}; using builtin");
        ItemCatalog::builtin()
    });
    let mut session = GameSession::from_configs(&combat, &worldgen, catalog);

    #[cfg(feature = "demo_server")]
    let demo = {
        let (client_end, server_end) = net_core::transport::LocalLoopbackTransport::new(256);
        session.connect(Box::new(client_end), "local-demo")?;
        Some(demo_server::DemoServer::new(server_end))
    };

    let event_loop = EventLoop::new()?;
    let mut app = App::new(session);
    #[cfg(feature = "demo_server")]
    {
        app.demo = demo;
    }
    event_loop.run_app(&mut app)?;
    Ok(())
}
