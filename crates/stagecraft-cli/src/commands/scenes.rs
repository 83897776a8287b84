//! Scene listing command

use anyhow::Result;
use stagecraft_scenes::SceneId;

pub fn run() -> Result<()> {
    for id in SceneId::ALL {
        println!("{:<12} {}", id.as_str(), id.display_name());
    }
    Ok(())
}
