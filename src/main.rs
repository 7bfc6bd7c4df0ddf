use anyhow::Result;

mod abc;
mod catalog;
mod cmds;

fn main() -> Result<()> {
    simplelog::SimpleLogger::init(log::LevelFilter::Debug, Default::default())?;

    cmds::handle_commands()
}
