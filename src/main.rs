use json_digest::cli;

fn main() -> anyhow::Result<()> {
    cli::CommandLineInterface::load().run()
}
