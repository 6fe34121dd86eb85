//! The pylintrc-splice command-line executable.

fn main() -> anyhow::Result<()> {
    pylintrc_splice::run()
}
