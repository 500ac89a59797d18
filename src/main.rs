fn main() -> anyhow::Result<()> {
    let command_line_interface = json_dummy::cli::CommandLineInterface::load();
    command_line_interface.run()
}
