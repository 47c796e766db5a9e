use std::io;

fn main() {
    grandprix_cli::logging::init_logging();
    let code = grandprix_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
