use clap::Parser;
use treesnap::{run, Options, TreeError};

#[snafu::report]
fn main() -> Result<(), TreeError> {
    let cli = Options::parse();
    setup_tracing(&cli);

    run(&cli)
}

fn setup_tracing(cli: &Options) {
    if let Some(level) = cli.log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}
