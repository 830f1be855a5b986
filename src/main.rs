pub mod cli;
pub mod codegen;
pub mod infer;
pub mod input;
pub mod naming;
pub mod schema;

fn main() -> anyhow::Result<()> {
    let command_line_interface = cli::CommandLineInterface::load();
    command_line_interface.run()
}
