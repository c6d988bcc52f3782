use tracker_patch::app::patches::tracker_row;
use tracker_patch::utils::logger;
use tracker_patch::{LocalFiles, PatchRunner};

fn main() -> anyhow::Result<()> {
    logger::init_script_logger();

    let patch = tracker_row::patch();
    PatchRunner::new(LocalFiles::current_dir()).run(&patch)?;

    println!("{}", patch.confirmation);
    Ok(())
}
