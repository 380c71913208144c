//! The launcher frame loop.
//!
//! Each iteration drains all pending input, applies the mapped commands in
//! arrival order, renders the post-update state once, presents it and then
//! sleeps out the rest of the frame period. A `Quit` command stops the loop
//! after the current frame has been presented.

use crate::backend::{DrawCommand, InputBackend, SdiBackend, TextMetrics, submit};
use crate::command::{Command, InputMapper};
use crate::config::LauncherConfig;
use crate::content::ProviderSet;
use crate::error::Result;
use crate::input::InputEvent;
use crate::layout::Layout;
use crate::pacer::FramePacer;
use crate::registry::ScreenRegistry;
use crate::render::Renderer;
use crate::state::{AppState, StateMachine};

/// Whether the loop should keep going after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the launcher state and every component that reads or writes it.
pub struct MainLoop {
    machine: StateMachine,
    providers: ProviderSet,
    mapper: InputMapper,
    renderer: Renderer,
    state: AppState,
    running: bool,
    target_fps: u32,
}

impl MainLoop {
    /// Build the launcher from validated configuration.
    pub fn new(config: &LauncherConfig, providers: ProviderSet) -> Result<Self> {
        config.validate()?;
        let registry = ScreenRegistry::from_config(&config.menu)?;
        let palette = config.palette.resolve()?;
        let renderer = Renderer::new(Layout::from_config(config), palette);
        log::debug!("Menu has {} entries", registry.len());
        Ok(Self {
            machine: StateMachine::new(registry),
            providers,
            mapper: InputMapper::new(),
            renderer,
            state: AppState::new(),
            running: true,
            target_fps: config.target_fps,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn registry(&self) -> &ScreenRegistry {
        self.machine.registry()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Map one input event and apply the resulting command, if any.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<Command> {
        let command = self.mapper.map(event)?;
        self.apply_command(command);
        Some(command)
    }

    /// Apply a command. `Quit` clears the running flag; everything else
    /// goes to the state machine.
    pub fn apply_command(&mut self, command: Command) {
        if command == Command::Quit {
            if self.running {
                log::info!("Quit requested");
            }
            self.running = false;
            return;
        }
        self.machine.apply(&mut self.state, command);
    }

    /// Draw commands for the current state.
    pub fn frame(&self, metrics: &dyn TextMetrics) -> Vec<DrawCommand> {
        self.renderer
            .render(&self.state, self.machine.registry(), &self.providers, metrics)
    }

    /// Clear and draw the current state into the back buffer without
    /// presenting it.
    pub fn draw_frame<B: SdiBackend>(&self, backend: &mut B) -> Result<()> {
        let commands = self.frame(&*backend);
        backend.clear(self.renderer.palette().background)?;
        submit(&commands, backend)
    }

    /// Clear, draw and present the current state.
    pub fn render_frame<B: SdiBackend>(&self, backend: &mut B) -> Result<()> {
        self.draw_frame(backend)?;
        backend.swap_buffers()
    }

    /// One loop iteration without pacing.
    ///
    /// A polling failure is logged and the frame is rendered with the state
    /// unchanged.
    pub fn step<B: SdiBackend + InputBackend>(&mut self, backend: &mut B) -> Result<Flow> {
        match backend.poll_events() {
            Ok(events) => {
                for event in &events {
                    self.handle_event(event);
                }
            },
            Err(e) => log::warn!("Input polling failed, skipping input this frame: {e}"),
        }
        self.render_frame(backend)?;
        Ok(if self.running {
            Flow::Continue
        } else {
            Flow::Quit
        })
    }

    /// Run until quit, then shut the backend down. Returns the number of
    /// frames presented.
    pub fn run<B: SdiBackend + InputBackend>(&mut self, backend: &mut B) -> Result<u64> {
        let mut pacer = FramePacer::new(self.target_fps);
        let mut frames: u64 = 0;
        log::info!("Entering main loop at {} fps", self.target_fps);
        loop {
            let flow = self.step(backend)?;
            frames += 1;
            if flow == Flow::Quit {
                break;
            }
            pacer.wait();
        }
        backend.shutdown()?;
        log::info!("Main loop finished after {frames} frames");
        Ok(frames)
    }
}
