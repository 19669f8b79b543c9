//! The multidoc command-line executable.

fn main() -> anyhow::Result<()> {
    multidoc::run()
}
