use taskhub::commands::Cli;

fn main() -> anyhow::Result<()> {
    Cli::menu()
}
