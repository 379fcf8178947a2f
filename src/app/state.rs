use std::time::Instant;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::{
    app::{
        controls::{ControlPanel, Nudge, SceneUpdate},
        events::{AppEvent, start_frame_task},
        icon::IconTransition,
    },
    cli::{Cli, IconMode},
    domain::weather::WeatherState,
    ui::{
        animation::{AnimationLoop, FrameReport},
        canvas::{PixelCanvas, Viewport},
        layout::split_screen,
        scene::Scene,
    },
};

const DEFAULT_COLUMNS: u16 = 80;
const DEFAULT_ROWS: u16 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Running,
    Quit,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub weather: WeatherState,
    pub scene: Scene,
    pub canvas: PixelCanvas,
    pub animation: AnimationLoop,
    pub controls: ControlPanel,
    pub icon: IconTransition,
    pub icon_mode: IconMode,
    pub last_frame: Option<FrameReport>,
}

impl AppState {
    pub fn new(cli: &Cli) -> Self {
        let weather = WeatherState::new(cli.temperature, cli.intensity, cli.wind, cli.cloudiness);
        let viewport = sky_viewport(DEFAULT_COLUMNS, DEFAULT_ROWS);
        let mut scene = Scene::new(viewport, cli.cloud_drift.into(), cli.seed);
        scene.populate(&weather);

        Self {
            mode: AppMode::Running,
            running: true,
            weather,
            scene,
            canvas: PixelCanvas::new(viewport),
            animation: AnimationLoop::start(),
            controls: ControlPanel::default(),
            icon: IconTransition::new(weather.condition()),
            icon_mode: cli.icon_mode(),
            last_frame: None,
        }
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                cli.validate()?;
                info!(fps = cli.fps, seed = ?cli.seed, "starting animation");
                start_frame_task(tx.clone(), cli.fps);
            }
            AppEvent::TickFrame => self.tick_frame(Instant::now()),
            AppEvent::Input(event) => self.handle_input(event, tx).await?,
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
                self.animation.stop();
            }
        }

        Ok(())
    }

    pub fn tick_frame(&mut self, now: Instant) {
        self.icon.settle(now);
        self.last_frame = self
            .animation
            .tick(&self.weather, &mut self.scene, &mut self.canvas);
    }

    async fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if is_quit_key(key) {
                    tx.send(AppEvent::Quit).await?;
                } else {
                    self.handle_control_key(key.code, Instant::now());
                }
            }
            Event::Resize(columns, rows) => self.resize(columns, rows),
            _ => {}
        }

        Ok(())
    }

    /// Slider keys. Returns whether the key was consumed.
    pub fn handle_control_key(&mut self, code: KeyCode, now: Instant) -> bool {
        let update = match code {
            KeyCode::Up | KeyCode::BackTab => {
                self.controls.focus_prev();
                return true;
            }
            KeyCode::Down | KeyCode::Tab => {
                self.controls.focus_next();
                return true;
            }
            KeyCode::Left => self.controls.nudge(&mut self.weather, Nudge::Down),
            KeyCode::Right => self.controls.nudge(&mut self.weather, Nudge::Up),
            KeyCode::PageDown => self.controls.nudge(&mut self.weather, Nudge::CoarseDown),
            KeyCode::PageUp => self.controls.nudge(&mut self.weather, Nudge::CoarseUp),
            KeyCode::Char('d') => {
                self.weather = WeatherState::default();
                SceneUpdate::All
            }
            _ => return false,
        };
        self.apply_update(update, now);
        true
    }

    /// Pushes a weather change into the scene and the icon.
    pub fn apply_update(&mut self, update: SceneUpdate, now: Instant) {
        match update {
            SceneUpdate::None => return,
            SceneUpdate::Precipitation => self.scene.reinitialize_particles(&self.weather),
            SceneUpdate::Wind => self.scene.sync_wind(self.weather.wind_speed),
            SceneUpdate::Clouds => self.scene.reinitialize_clouds(&self.weather),
            SceneUpdate::All => self.scene.populate(&self.weather),
        }
        debug!(?update, weather = ?self.weather, "controls changed");
        self.icon.request(self.weather.condition(), now);
    }

    /// Rebuilds canvas and fields for a terminal of `columns` x `rows` cells.
    pub fn resize(&mut self, columns: u16, rows: u16) {
        let viewport = sky_viewport(columns, rows);
        if viewport == self.scene.viewport() {
            return;
        }
        self.canvas = PixelCanvas::new(viewport);
        self.scene.resize(viewport, &self.weather);
    }
}

fn is_quit_key(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q'))
        || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
}

fn sky_viewport(columns: u16, rows: u16) -> Viewport {
    let (sky, _) = split_screen(Rect::new(0, 0, columns, rows));
    Viewport::from_cells(sky.width, sky.height)
}
