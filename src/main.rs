//! Duel entry point
//!
//! Loads the sprites, opens the window and drives the match loop:
//! one tick of input, simulation and rendering per 1/60 s.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use duel::assets::{AssetBundle, SpriteAtlas};
use duel::consts::*;
use duel::error::Result;
use duel::platform::{KeyState, LoopPhase, TickClock};
use duel::renderer::{FrameBuilder, RenderState, pipeline};
use duel::scene::{self, Screen};
use duel::sim::{MatchRules, MatchState, tick};

struct Game {
    atlas: SpriteAtlas,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    state: MatchState,
    keys: KeyState,
    clock: TickClock,
    phase: LoopPhase,
    failed: bool,
}

impl Game {
    fn new(atlas: SpriteAtlas, rules: MatchRules) -> Self {
        Self {
            atlas,
            window: None,
            render_state: None,
            state: MatchState::new(rules),
            keys: KeyState::new(),
            clock: TickClock::new(TICKS_PER_SECOND, Instant::now()),
            phase: LoopPhase::Playing,
            failed: false,
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(ARENA_WIDTH as f64, ARENA_HEIGHT as f64))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attributes)?);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone())?;
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let render_state = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width,
            size.height,
            &self.atlas,
        ))?;

        self.window = Some(window);
        self.render_state = Some(render_state);
        self.clock = TickClock::new(TICKS_PER_SECOND, Instant::now());
        Ok(())
    }

    fn render(&mut self, event_loop: &ActiveEventLoop, screen: Screen) {
        let Some(render_state) = self.render_state.as_mut() else {
            return;
        };

        let mut builder = FrameBuilder::new(&self.atlas.layout);
        scene::draw_screen(screen, &self.state, &mut builder);
        let frame = builder.finish();

        match render_state.render(&frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_state.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                self.failed = true;
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }

    /// Run one tick and react to the match ending
    fn step(&mut self, event_loop: &ActiveEventLoop, now: Instant) {
        let input = self.keys.tick_input();
        tick(&mut self.state, &input);

        self.phase = self.phase.after_tick(self.state.outcome(), now);
        if !self.state.is_running() {
            self.log_report();
        }
        for screen in self.phase.screens_after_tick() {
            self.render(event_loop, screen);
        }
        if self.phase == LoopPhase::Done {
            event_loop.exit();
        }
    }

    fn log_report(&self) {
        match serde_json::to_string(&self.state.report()) {
            Ok(json) => log::info!("Match report: {json}"),
            Err(e) => log::warn!("Could not serialize match report: {e}"),
        }
    }
}

impl ApplicationHandler for Game {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_graphics(event_loop) {
            log::error!("Startup failed: {e}");
            self.failed = true;
            event_loop.exit();
            return;
        }
        log::info!("Duel running!");
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.window.as_ref().map(|w| w.id()) != Some(window_id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                if self.phase == LoopPhase::Playing {
                    self.keys.request_quit();
                }
                self.phase = self.phase.close_requested();
                if self.phase == LoopPhase::Done {
                    event_loop.exit();
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.keys.handle_key(code, event.state);
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(render_state) = self.render_state.as_mut() {
                    render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(screen) = self.phase.screen() {
                    self.render(event_loop, screen);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.render_state.is_none() || event_loop.exiting() {
            return;
        }

        let now = Instant::now();
        if self.phase == LoopPhase::Playing && self.clock.is_due(now) {
            self.clock.advance(now);
            self.step(event_loop, now);
        }

        self.phase = self.phase.poll(now);
        match self.phase.wake_at(self.clock.deadline()) {
            Some(wake) => event_loop.set_control_flow(ControlFlow::WaitUntil(wake)),
            None => event_loop.exit(),
        }
    }
}

fn load_atlas() -> Result<SpriteAtlas> {
    let bundle = AssetBundle::load(Path::new("."))?;
    Ok(SpriteAtlas::pack(&bundle, pipeline::max_texture_dimension())?)
}

fn run() -> Result<bool> {
    let atlas = load_atlas()?;
    let event_loop = EventLoop::new()?;
    let mut game = Game::new(atlas, MatchRules::default());
    event_loop.run_app(&mut game)?;
    Ok(!game.failed)
}

fn main() {
    env_logger::init();
    log::info!("Duel starting...");

    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
