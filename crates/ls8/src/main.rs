use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let [program_path] = args.as_slice() else {
        eprintln!("{}", ls8::USAGE);
        return ExitCode::from(2);
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match ls8::run_file(program_path, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
