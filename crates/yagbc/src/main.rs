use anyhow::{Context, Result};

const USAGE: &str = "Usage: yagbc [showcase | run <rom_path> [steps]]";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_else(|| "showcase".to_string());

    match command.as_str() {
        "showcase" => {
            if !yagbc::run_all_showcases()? {
                std::process::exit(1);
            }
        }
        "run" => {
            let Some(rom_path) = args.next() else {
                eprintln!("{USAGE}");
                std::process::exit(2);
            };
            let steps = match args.next() {
                Some(steps) => steps
                    .parse()
                    .with_context(|| format!("invalid step count '{steps}'"))?,
                None => yagbc::DEFAULT_STEPS,
            };

            log::info!("Running ROM path: '{}'", rom_path);
            let rom = std::fs::read(&rom_path)
                .with_context(|| format!("failed to read ROM '{rom_path}'"))?;
            let gb = yagbc::run_rom(&rom, steps)?;

            println!("{}", yagbc::format_registers(&gb.cpu().regs));
            println!("Cycles: {}", gb.cpu().total_cycles());
        }
        other => {
            eprintln!("Unknown command '{other}'.\n{USAGE}");
            std::process::exit(2);
        }
    }

    Ok(())
}
