use bldf::filter;
use bldf::runner;

/// Run the build, report its exit status, then reprint its stdout minus the
/// known-noisy lines. The build's exit code is informational only; filtering
/// runs either way and this tool exits 0 on any completed run.
fn run() -> anyhow::Result<()> {
    let result = runner::run_build()?;

    if result.exit_code == 0 {
        println!("Batch file ran successfully");
    } else {
        println!("Batch file failed with return code {}", result.exit_code);
    }

    for line in filter::apply(&result.stdout) {
        println!("{line}");
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("[bldf] error: {e:#}");
        std::process::exit(1);
    }
}
