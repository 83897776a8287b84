//! Single-scene run command, plus the session setup shared with `tour`

use anyhow::{anyhow, Context, Result};
use clap::Args;
use serde::Serialize;
use stagecraft_runtime::{FrameClock, SceneHost, ScenePhase};
use stagecraft_scenes::{showcase_host, SceneId, ShowcaseConfig, ShowcaseScenes};
use stagecraft_stage::{FileTextureLoader, MemoryStage, Stage, TextureLoader};
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// How long a switch waits for disk loads before simulating anyway
const LOAD_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Args)]
pub struct SessionArgs {
    /// TOML config file; defaults apply to anything it leaves out
    #[arg(long)]
    pub config: Option<String>,

    /// Read textures from this directory instead of the built-in catalog
    #[arg(long)]
    pub assets: Option<String>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

pub struct RunArgs {
    pub scene: String,
    pub frames: u64,
    pub fps: f64,
    pub realtime: bool,
    pub session: SessionArgs,
}

/// A host and the headless stage it draws on
pub struct Session {
    pub host: SceneHost<ShowcaseScenes>,
    pub stage: MemoryStage,
}

impl Session {
    pub fn open(args: &SessionArgs) -> Result<Self> {
        let config = match &args.config {
            Some(path) => ShowcaseConfig::load(path)
                .with_context(|| format!("failed to load config '{}'", path))?,
            None => ShowcaseConfig::default(),
        };

        let loader: Rc<dyn TextureLoader> = match &args.assets {
            Some(dir) => {
                info!(target: "stagecraft::cli", assets = %dir, "loading textures from disk");
                Rc::new(FileTextureLoader::new(dir))
            }
            None => Rc::new(config.builtin_textures()),
        };

        let stage = MemoryStage::new(
            config.stage.width,
            config.stage.height,
            config.stage.resolution,
        );
        Ok(Self {
            host: showcase_host(config, loader),
            stage,
        })
    }

    /// Switch scenes and let the new scene's loads land before time starts
    pub fn switch_to(&mut self, id: SceneId) {
        self.host.switch_to(id.as_str(), &mut self.stage);
        self.wait_until_loaded(LOAD_TIMEOUT);
    }

    /// Pump zero-length frames while the scene is still loading
    fn wait_until_loaded(&mut self, timeout: Duration) {
        let deadline = Instant::now() + timeout;
        while self.host.current_phase() == Some(ScenePhase::Loading) {
            if Instant::now() >= deadline {
                warn!(target: "stagecraft::cli", "textures still loading after {:?}", timeout);
                return;
            }
            self.host.on_tick(0.0, 0.0, &mut self.stage);
            if self.host.current_phase() == Some(ScenePhase::Loading) {
                std::thread::sleep(Duration::from_millis(1));
            }
        }
    }

    /// Simulate `frames` fixed-rate frames
    pub fn simulate(&mut self, frames: u64, fps: f64) -> f64 {
        let mut clock = FrameClock::fixed(fps);
        for _ in 0..frames {
            let tick = clock.step_fixed();
            self.host.on_tick(tick.delta_ms, tick.fps, &mut self.stage);
        }
        clock.total_ms
    }

    /// Run `frames` frames paced by the wall clock
    pub fn run_realtime(&mut self, frames: u64, fps: f64) -> f64 {
        let mut clock = FrameClock::fixed(fps);
        let frame = Duration::from_secs_f64(clock.frame_duration_ms() / 1000.0);
        for _ in 0..frames {
            let tick = clock.tick_realtime();
            self.host.on_tick(tick.delta_ms, tick.fps, &mut self.stage);
            std::thread::sleep(frame);
        }
        clock.total_ms
    }

    pub fn summary(&self, id: SceneId, frames: u64, elapsed_ms: f64) -> SceneSummary {
        SceneSummary {
            id: id.as_str().to_string(),
            name: self.host.current_name().unwrap_or_default().to_string(),
            phase: self
                .host
                .current_phase()
                .map(|p| format!("{:?}", p))
                .unwrap_or_else(|| "None".to_string()),
            nodes: self.stage.node_count(),
            visible_nodes: self.stage.visible_count(),
            frames,
            elapsed_ms,
            stale_loads: self.host.loads().stale_drops(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SceneSummary {
    pub id: String,
    pub name: String,
    pub phase: String,
    pub nodes: usize,
    pub visible_nodes: usize,
    pub frames: u64,
    pub elapsed_ms: f64,
    pub stale_loads: usize,
}

impl SceneSummary {
    pub fn print(&self) {
        println!("{} ({})", self.name, self.id);
        println!("  phase:   {}", self.phase);
        println!("  nodes:   {} ({} visible)", self.nodes, self.visible_nodes);
        println!("  frames:  {} ({:.0} ms)", self.frames, self.elapsed_ms);
        if self.stale_loads > 0 {
            println!("  dropped: {} stale load(s)", self.stale_loads);
        }
    }
}

pub fn parse_scene(id: &str) -> Result<SceneId> {
    SceneId::parse(id).ok_or_else(|| {
        let known: Vec<_> = SceneId::ALL.iter().map(|s| s.as_str()).collect();
        anyhow!("unknown scene '{}'; valid scenes: {}", id, known.join(", "))
    })
}

pub fn run(args: RunArgs) -> Result<()> {
    let id = parse_scene(&args.scene)?;
    let mut session = Session::open(&args.session)?;
    session.switch_to(id);

    let elapsed_ms = if args.realtime {
        session.run_realtime(args.frames, args.fps)
    } else {
        session.simulate(args.frames, args.fps)
    };
    let summary = session.summary(id, args.frames, elapsed_ms);

    if args.session.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        summary.print();
    }

    session.host.shutdown(&mut session.stage);
    Ok(())
}
