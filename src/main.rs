mod cli;
mod logging;
mod notebook;
mod paths;
mod rewrite;
mod rules;
mod runner;
mod templates;

fn main() -> anyhow::Result<()> {
    logging::init();
    let app = cli::parse();
    runner::run(app)
}
