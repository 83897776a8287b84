//! Tour command: every scene in menu order on one host

use super::run::{SceneSummary, Session, SessionArgs};
use anyhow::Result;
use serde::Serialize;
use stagecraft_scenes::SceneId;
use stagecraft_stage::Stage;

pub struct TourArgs {
    pub frames_per_scene: u64,
    pub fps: f64,
    pub session: SessionArgs,
}

#[derive(Debug, Serialize)]
pub struct TourReport {
    pub scenes: Vec<SceneSummary>,
    /// Nodes left on the stage after the host shut down
    pub nodes_after_shutdown: usize,
    pub generations: u64,
}

pub fn tour(session: &mut Session, frames_per_scene: u64, fps: f64) -> TourReport {
    let mut scenes = Vec::with_capacity(SceneId::ALL.len());
    for id in SceneId::ALL {
        session.switch_to(id);
        let elapsed_ms = session.simulate(frames_per_scene, fps);
        scenes.push(session.summary(id, frames_per_scene, elapsed_ms));
    }
    session.host.shutdown(&mut session.stage);

    TourReport {
        scenes,
        nodes_after_shutdown: session.stage.node_count(),
        generations: session.host.generation(),
    }
}

pub fn run(args: TourArgs) -> Result<()> {
    let mut session = Session::open(&args.session)?;
    let report = tour(&mut session, args.frames_per_scene, args.fps);

    if args.session.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for summary in &report.scenes {
            summary.print();
        }
        println!(
            "{} scene(s) visited, {} node(s) left after shutdown",
            report.generations, report.nodes_after_shutdown
        );
    }
    Ok(())
}
