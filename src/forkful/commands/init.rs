use crate::commands::{AppPaths, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::fs::DATA_FILENAME;
use std::fs;

pub fn run(paths: &AppPaths) -> Result<CmdResult> {
    fs::create_dir_all(paths.photos_dir())?;

    let data_file = paths.data_dir.join(DATA_FILENAME);
    if !data_file.exists() {
        fs::write(&data_file, "[]")?;
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized recipe box at {}",
        paths.data_dir.display()
    )));
    Ok(result)
}
