use crate::terminal::print;

pub fn info() -> anyhow::Result<()> {
    print::aligned_line("Name", env!("CARGO_PKG_NAME"));
    print::aligned_line("Version", env!("CARGO_PKG_VERSION"));
    print::aligned_line("About", "in-memory library catalog, loan desk included");
    print::aligned_line("Storage", "process memory only, state ends with the run");
    print::blank();
    Ok(())
}
