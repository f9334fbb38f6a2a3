//! The game session: one explicitly owned simulation context.
//!
//! Everything mutable lives here (actors, world grid, wallet, roster, RNG)
//! and is threaded through the systems in a fixed per-tick order:
//! input/actions, player strike, enemy AI, locomotion, world streaming,
//! pickups, outbound position, inbound replication, smoothing, presentation.
//! Nothing in a tick blocks and nothing escalates; a failed send demotes the
//! session to single-player instead of aborting the loop.

use crate::input::InputState;
use crate::presenter::Presenter;
use crate::replication::RemoteRoster;
use data_runtime::configs::combat::CombatCfg;
use data_runtime::configs::world_gen::WorldGenCfg;
use data_runtime::ids::ItemId;
use data_runtime::item::{ItemCatalog, ItemKind};
use glam::Vec3;
use net_core::command::ClientCmd;
use net_core::transport::{self, Transport};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sim_core::actions::{ActionKind, ActionTuning};
use sim_core::actor::{Actor, ActorId, ActorKind, ActorStore, Health};
use sim_core::clock::{Frame, GameClock};
use sim_core::combat::{self, Strike};
use sim_core::systems::enemy::{self, EnemyTuning};
use sim_core::systems::movement::{self, MoveTuning};
use sim_core::systems::pose;
use world_core::bounds::Aabb;
use world_core::chunk::GenTuning;
use world_core::grid::WorldGrid;
use world_core::wallet::Wallet;

/// Player collision box: feet at `pos.y`, about two units tall.
const PLAYER_HALF: Vec3 = Vec3::new(0.5, 1.0, 0.5);
const PLAYER_BOX_LIFT: f32 = 0.9;

/// One fixed-position world item outside the chunk system.
#[derive(Debug, Clone)]
struct WorldPickup {
    item: ItemId,
    pos: Vec3,
}

fn starter_sword() -> WorldPickup {
    WorldPickup {
        item: ItemId::from("sword"),
        pos: Vec3::new(3.0, 0.5, -5.0),
    }
}

/// All tunables the session needs, folded once from config.
#[derive(Debug, Clone, Copy)]
pub struct SessionTuning {
    pub movement: MoveTuning,
    pub actions: ActionTuning,
    pub enemy: EnemyTuning,
    pub max_hp: i32,
}

impl Default for SessionTuning {
    fn default() -> Self {
        Self {
            movement: MoveTuning::default(),
            actions: ActionTuning::default(),
            enemy: EnemyTuning::default(),
            max_hp: 100,
        }
    }
}

impl SessionTuning {
    #[must_use]
    pub fn from_config(cfg: &CombatCfg) -> Self {
        Self {
            movement: MoveTuning::default(),
            actions: ActionTuning::from_config(cfg),
            enemy: EnemyTuning::from_config(cfg),
            max_hp: cfg.player_max_hp(),
        }
    }
}

pub struct GameSession {
    clock: GameClock,
    store: ActorStore,
    player: ActorId,
    enemy: ActorId,
    world: WorldGrid,
    wallet: Wallet,
    roster: RemoteRoster,
    catalog: ItemCatalog,
    t: SessionTuning,
    rng: ChaCha8Rng,
    transport: Option<Box<dyn Transport>>,
    sword: Option<WorldPickup>,
    heavy_was_held: bool,
    game_over: bool,
}

impl GameSession {
    #[must_use]
    pub fn new(seed: u64, t: SessionTuning, catalog: ItemCatalog, world_gen: GenTuning) -> Self {
        let mut store = ActorStore::default();
        let player = store.spawn(ActorKind::Player, Vec3::ZERO, Health::new(t.max_hp));
        let enemy = store.spawn(ActorKind::Enemy, t.enemy.spawn, Health::new(t.max_hp));
        log::info!("session up: seed {seed}, enemy at {:?}", t.enemy.spawn);
        Self {
            clock: GameClock::new(),
            store,
            player,
            enemy,
            world: WorldGrid::new(seed, world_gen),
            wallet: Wallet::default(),
            roster: RemoteRoster::default(),
            catalog,
            t,
            // Offset so the session stream never aliases chunk (0,0)'s.
            rng: ChaCha8Rng::seed_from_u64(seed.wrapping_add(0x9E37_79B9_7F4A_7C15)),
            transport: None,
            sword: Some(starter_sword()),
            heavy_was_held: false,
            game_over: false,
        }
    }

    /// Build a session from loaded configs. The seed comes from config when
    /// pinned there, otherwise from entropy (content differs across runs).
    #[must_use]
    pub fn from_configs(combat: &CombatCfg, world_gen: &WorldGenCfg, catalog: ItemCatalog) -> Self {
        let seed = world_gen.seed.unwrap_or_else(rand::random);
        Self::new(
            seed,
            SessionTuning::from_config(combat),
            catalog,
            GenTuning::from_config(world_gen),
        )
    }

    /// Attach a transport and introduce ourselves. The token is opaque here;
    /// the authentication layer minted it.
    pub fn connect(&mut self, link: Box<dyn Transport>, token: &str) -> anyhow::Result<()> {
        transport::send_msg(
            link.as_ref(),
            &ClientCmd::Hello {
                token: token.to_string(),
            },
        )?;
        self.transport = Some(link);
        log::info!("connected");
        Ok(())
    }

    /// One wall-clock tick, driven by the host's frame callback.
    pub fn tick(&mut self, input: &InputState, presenter: &mut dyn Presenter) {
        if input.pause_toggle {
            self.toggle_pause(presenter);
        }
        let frame = self.clock.tick();
        self.run_frame(input, &frame, presenter);
    }

    /// One deterministic tick. Tests and fixed-rate drivers use this.
    pub fn step(&mut self, input: &InputState, dt: f32, presenter: &mut dyn Presenter) {
        if input.pause_toggle {
            self.toggle_pause(presenter);
        }
        let frame = self.clock.advance(dt);
        self.run_frame(input, &frame, presenter);
    }

    fn toggle_pause(&mut self, presenter: &mut dyn Presenter) {
        let paused = !self.clock.paused();
        self.clock.set_paused(paused);
        log::info!("{}", if paused { "paused" } else { "resumed" });
        presenter.paused(paused);
    }

    fn run_frame(&mut self, input: &InputState, frame: &Frame, presenter: &mut dyn Presenter) {
        let now = frame.elapsed;
        if input.restart_pressed {
            self.restart(presenter);
        }
        if self.clock.paused() {
            // Frozen frame: keep drawing, run nothing.
            self.present(presenter, now, false, false);
            return;
        }
        metrics::histogram!("session.tick_dt").record(f64::from(frame.dt));

        if input.equip_toggle {
            self.toggle_equip(presenter);
        }
        if let Some(kind) = self.player_actions(input, now) {
            self.resolve_player_strike(kind, now);
        }

        let enemy_before = self.store.get(self.enemy).map(|e| e.tr.pos);
        if let Some(out) = enemy::drive(
            &mut self.store,
            self.enemy,
            self.player,
            frame,
            &self.t.enemy,
            &mut self.rng,
        ) {
            log::debug!("enemy strike: {out:?}");
        }
        let enemy_moved = enemy_before
            .zip(self.store.get(self.enemy).map(|e| e.tr.pos))
            .is_some_and(|(a, b)| a != b);

        let player_moved = self.move_player(input, frame);

        self.stream_world(presenter);
        self.resolve_pickups(presenter);

        if player_moved {
            self.send_position();
        }
        self.pump_network();
        self.roster.step();
        let events = self.roster.take_events();
        for id in &events.spawned {
            let pos = self.roster.get(id).map_or(Vec3::ZERO, |p| p.current);
            presenter.remote_spawned(id, pos);
        }
        for id in &events.despawned {
            presenter.remote_despawned(id);
        }

        if !self.game_over && self.store.get(self.player).is_some_and(|p| !p.hp.alive()) {
            self.game_over = true;
            metrics::counter!("session.game_over").increment(1);
            log::info!("player down; awaiting restart");
            presenter.game_over();
        }

        self.present(presenter, now, player_moved, enemy_moved);
    }

    /// Feed this tick's input to the player FSM. Returns a started attack.
    fn player_actions(&mut self, input: &InputState, now: f64) -> Option<ActionKind> {
        let heavy_was_held = std::mem::replace(&mut self.heavy_was_held, input.heavy_held);
        if self.game_over {
            return None;
        }
        let t = self.t.actions;
        let p = self.store.get_mut(self.player)?;
        p.fsm.set_defending(input.defend);
        if input.dodge_pressed {
            p.fsm.try_start(ActionKind::Dodge, now, &t);
        }
        let mut started = None;
        if input.light_pressed && p.fsm.try_start(ActionKind::Light, now, &t) {
            started = Some(ActionKind::Light);
        }
        if input.heavy_held {
            p.fsm.begin_charge(now);
        } else if heavy_was_held && p.fsm.release_charge(now, &t).is_some() {
            started = Some(ActionKind::Heavy);
        }
        started
    }

    fn resolve_player_strike(&mut self, kind: ActionKind, now: f64) {
        let Some(p) = self.store.get(self.player) else {
            return;
        };
        let origin = p.tr.pos;
        let bonus = p
            .equipped
            .as_ref()
            .map_or(0, |id| self.catalog.weapon_damage(id));
        let strike = Strike::melee(
            origin,
            self.t.actions.damage(kind),
            bonus,
            self.t.actions.melee_range,
        );
        let radius = self.t.enemy.respawn_radius;
        let Some(enemy) = self.store.get_mut(self.enemy) else {
            return;
        };
        let out = combat::resolve_hit(&strike, enemy, now, radius, &mut self.rng);
        log::debug!("{kind:?} vs enemy: {out:?}");
    }

    /// Locomotion runs even under an action lock; only death stops it.
    fn move_player(&mut self, input: &InputState, frame: &Frame) -> bool {
        if self.game_over {
            return false;
        }
        let mt = self.t.movement;
        let Some(p) = self.store.get_mut(self.player) else {
            return false;
        };
        if !p.hp.alive() {
            return false;
        }
        let before = p.tr.pos;
        movement::steer(p, input.move_dir(), mt.speed, frame.dt);
        movement::fall(p, input.jump_pressed, frame.dt, &mt);
        p.tr.pos != before
    }

    fn stream_world(&mut self, presenter: &mut dyn Presenter) {
        let Some(pos) = self.store.get(self.player).map(|p| p.tr.pos) else {
            return;
        };
        let events = self.world.refresh(pos);
        for key in &events.spawned {
            if let Some(content) = self.world.get(*key) {
                presenter.chunk_spawned(*key, content);
            }
        }
        for key in &events.evicted {
            presenter.chunk_evicted(*key);
        }
    }

    fn resolve_pickups(&mut self, presenter: &mut dyn Presenter) {
        let Some((pos, alive)) = self
            .store
            .get(self.player)
            .map(|p| (p.tr.pos, p.hp.alive()))
        else {
            return;
        };
        if !alive {
            return;
        }
        let player_box =
            Aabb::from_center_half(pos + Vec3::new(0.0, PLAYER_BOX_LIFT, 0.0), PLAYER_HALF);
        let picked = self.world.collect(&player_box);
        if !picked.is_empty() {
            for (key, tok) in &picked {
                self.wallet.credit(tok.tier);
                log::info!("picked up {:?} token in {key:?}", tok.tier);
                presenter.token_collected(*key, tok);
            }
            presenter.wallet_changed(&self.wallet);
        }
        // The one fixed weapon pickup outside the chunk system.
        if let Some(pickup) = &self.sword {
            let reach = Aabb::from_center_half(pickup.pos, Vec3::splat(0.5));
            if player_box.overlaps(&reach) {
                let item = pickup.item.clone();
                self.sword = None;
                if let Some(p) = self.store.get_mut(self.player) {
                    if p.inventory.contains(&item) {
                        return;
                    }
                    log::info!("picked up {item}");
                    p.inventory.push(item);
                    presenter.inventory_changed(&p.inventory);
                }
            }
        }
    }

    fn toggle_equip(&mut self, presenter: &mut dyn Presenter) {
        if self.game_over {
            return;
        }
        let catalog = &self.catalog;
        let Some(p) = self.store.get_mut(self.player) else {
            return;
        };
        if p.equipped.take().is_none() {
            p.equipped = p
                .inventory
                .iter()
                .find(|id| catalog.get(id).is_some_and(|d| d.kind == ItemKind::Weapon))
                .cloned();
        }
        match &p.equipped {
            Some(id) => log::debug!("equipped {id}"),
            None => log::debug!("hands free"),
        }
        presenter.equipped_changed(p.equipped.as_ref());
    }

    fn send_position(&mut self) {
        let Some(pos) = self.store.get(self.player).map(|p| p.tr.pos) else {
            return;
        };
        let Some(link) = self.transport.as_deref() else {
            return;
        };
        let cmd = ClientCmd::Move {
            pos: pos.to_array(),
        };
        if let Err(e) = transport::send_msg(link, &cmd) {
            log::warn!("link lost; continuing single-player: {e:#}");
            metrics::counter!("session.disconnects").increment(1);
            self.transport = None;
        }
    }

    fn pump_network(&mut self) {
        let Some(link) = self.transport.as_deref() else {
            return;
        };
        for payload in transport::recv_payloads(link) {
            self.roster.apply_message(&payload);
        }
    }

    fn present(
        &self,
        presenter: &mut dyn Presenter,
        now: f64,
        player_moved: bool,
        enemy_moved: bool,
    ) {
        for a in self.store.iter() {
            let moving = match a.kind {
                ActorKind::Player => player_moved,
                ActorKind::Enemy => enemy_moved,
            };
            let limb_pose = pose::sample(a, now, moving);
            presenter.entity_pose(a.id, a.kind, &a.tr, &limb_pose);
            presenter.entity_visible(a.id, a.visible);
            presenter.health_fraction(a.id, a.hp.fraction());
        }
        for p in self.roster.iter() {
            let closing = (p.target - p.current).length_squared() > 1e-4;
            presenter.remote_pose(&p.id, p.current, closing);
        }
    }

    /// Reset the local run: player and enemy back to spawn at full health,
    /// inventory and wallet cleared, world pickup restored. The clock keeps
    /// running and the remote roster is untouched; a restart is local.
    pub fn restart(&mut self, presenter: &mut dyn Presenter) {
        metrics::counter!("session.restarts").increment(1);
        log::info!("restart");
        let max_hp = self.t.max_hp;
        if let Some(p) = self.store.get_mut(self.player) {
            p.hp = Health::new(max_hp);
            p.tr.pos = Vec3::ZERO;
            p.tr.yaw = 0.0;
            p.vel_y = 0.0;
            p.airborne = false;
            p.visible = true;
            p.fsm.reset();
            p.inventory.clear();
            p.equipped = None;
        }
        let enemy_spawn = self.t.enemy.spawn;
        if let Some(e) = self.store.get_mut(self.enemy) {
            e.hp = Health::new(max_hp);
            e.tr.pos = enemy_spawn;
            e.tr.yaw = 0.0;
            e.visible = true;
            e.fsm.reset();
            e.next_attack_at = 0.0;
        }
        self.wallet.reset();
        self.sword = Some(starter_sword());
        self.heavy_was_held = false;
        self.game_over = false;
        if self.clock.paused() {
            self.clock.set_paused(false);
            presenter.paused(false);
        }
        presenter.restarted();
        presenter.wallet_changed(&self.wallet);
        presenter.inventory_changed(&[]);
        presenter.equipped_changed(None);
    }

    // Read-side accessors for the HUD and hosts.

    #[must_use]
    pub fn player(&self) -> Option<&Actor> {
        self.store.get(self.player)
    }

    #[must_use]
    pub fn enemy(&self) -> Option<&Actor> {
        self.store.get(self.enemy)
    }

    #[must_use]
    pub fn player_id(&self) -> ActorId {
        self.player
    }

    #[must_use]
    pub fn enemy_id(&self) -> ActorId {
        self.enemy
    }

    #[must_use]
    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    #[must_use]
    pub fn world(&self) -> &WorldGrid {
        &self.world
    }

    #[must_use]
    pub fn roster(&self) -> &RemoteRoster {
        &self.roster
    }

    #[must_use]
    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn paused(&self) -> bool {
        self.clock.paused()
    }

    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    #[must_use]
    pub fn connected(&self) -> bool {
        self.transport.is_some()
    }
}
