use std::fmt::Write as _;

use anyhow::{Context, Result};
use yagbc_gb::{Flags, GameBoy, Registers};

/// Number of instructions `run_rom` executes when the caller gives none.
pub const DEFAULT_STEPS: usize = 16;

/// A small hand-assembled program with the register state it must end in.
pub struct Showcase {
    pub title: &'static str,
    pub listing: &'static [&'static str],
    pub program: &'static [u8],
    pub steps: usize,
    pub check: fn(&Registers) -> bool,
    pub expected: &'static str,
}

pub const SHOWCASES: [Showcase; 7] = [
    Showcase {
        title: "Basic Arithmetic",
        listing: &["LD A, 10", "LD B, 20", "ADD A, B"],
        program: &[0x3E, 0x0A, 0x06, 0x14, 0x80],
        steps: 3,
        check: check_arithmetic,
        expected: "A = 30 (0x1E)",
    },
    Showcase {
        title: "Register Copying",
        listing: &["LD B, 0x42", "LD A, B", "LD C, 0x99", "LD A, C"],
        program: &[0x06, 0x42, 0x78, 0x0E, 0x99, 0x79],
        steps: 4,
        check: check_register_copy,
        expected: "A = 0x99, B = 0x42, C = 0x99",
    },
    Showcase {
        title: "Jump Instruction",
        listing: &[
            "0x0000  LD A, 0x11",
            "0x0002  JP 0x0008",
            "0x0005  LD A, 0xFF  (skipped)",
            "0x0007  NOP         (skipped)",
            "0x0008  LD A, 0x22",
        ],
        program: &[0x3E, 0x11, 0xC3, 0x08, 0x00, 0x3E, 0xFF, 0x00, 0x3E, 0x22],
        steps: 3,
        check: check_jump,
        expected: "A = 0x22, PC = 0x000A",
    },
    Showcase {
        title: "Zero Flag",
        listing: &["LD A, 0x00", "LD B, 0x00", "ADD A, B"],
        program: &[0x3E, 0x00, 0x06, 0x00, 0x80],
        steps: 3,
        check: check_zero_flag,
        expected: "A = 0x00, Z = 1",
    },
    Showcase {
        title: "Half-Carry Flag",
        listing: &["LD A, 0x0F", "LD B, 0x01", "ADD A, B"],
        program: &[0x3E, 0x0F, 0x06, 0x01, 0x80],
        steps: 3,
        check: check_half_carry_flag,
        expected: "A = 0x10, H = 1",
    },
    Showcase {
        title: "Carry Flag",
        listing: &["LD A, 0xFF", "LD B, 0x01", "ADD A, B"],
        program: &[0x3E, 0xFF, 0x06, 0x01, 0x80],
        steps: 3,
        check: check_carry_flag,
        expected: "A = 0x00, C = 1, Z = 1",
    },
    Showcase {
        title: "Subtract Flag After ADD",
        listing: &["LD A, 0xFF", "LD B, 0x01", "ADD A, B"],
        program: &[0x3E, 0xFF, 0x06, 0x01, 0x80],
        steps: 3,
        check: check_subtract_flag_clear,
        expected: "N = 0",
    },
];

fn check_arithmetic(r: &Registers) -> bool {
    r.a == 30
}

fn check_register_copy(r: &Registers) -> bool {
    r.a == 0x99 && r.b == 0x42 && r.c == 0x99
}

fn check_jump(r: &Registers) -> bool {
    r.a == 0x22 && r.pc == 0x000A
}

fn check_zero_flag(r: &Registers) -> bool {
    r.a == 0 && r.flag(Flags::Z)
}

fn check_half_carry_flag(r: &Registers) -> bool {
    r.a == 0x10 && r.flag(Flags::H)
}

fn check_carry_flag(r: &Registers) -> bool {
    r.a == 0 && r.flag(Flags::C) && r.flag(Flags::Z)
}

fn check_subtract_flag_clear(r: &Registers) -> bool {
    !r.flag(Flags::N)
}

/// Outcome of running one `Showcase`.
pub struct ShowcaseResult {
    pub registers: Registers,
    pub cycles: u64,
    pub passed: bool,
}

pub fn run_showcase(showcase: &Showcase) -> Result<ShowcaseResult> {
    let mut gb = GameBoy::new();
    gb.load_program(showcase.program)
        .with_context(|| format!("loading showcase '{}'", showcase.title))?;

    for _ in 0..showcase.steps {
        gb.step();
    }

    let registers = gb.cpu().regs;
    Ok(ShowcaseResult {
        registers,
        cycles: gb.cpu().total_cycles(),
        passed: (showcase.check)(&registers),
    })
}

/// Run every built-in showcase, printing each one. Returns `true` when all
/// of them pass.
pub fn run_all_showcases() -> Result<bool> {
    let mut all_passed = true;

    for showcase in &SHOWCASES {
        let result = run_showcase(showcase)?;
        println!("== {}", showcase.title);
        for line in showcase.listing {
            println!("  {line}");
        }
        println!("Expected: {}", showcase.expected);
        println!("{}", format_registers(&result.registers));
        println!("Cycles: {}", result.cycles);
        println!("{}", if result.passed { "PASS" } else { "FAIL" });
        println!();

        all_passed &= result.passed;
    }

    Ok(all_passed)
}

/// Load `rom` and execute `steps` instructions from the power-on state.
pub fn run_rom(rom: &[u8], steps: usize) -> Result<GameBoy> {
    let mut gb = GameBoy::new();
    gb.load_program(rom).context("loading ROM image")?;

    for _ in 0..steps {
        gb.step();
    }

    log::info!(
        "executed {steps} instructions in {} cycles",
        gb.cpu().total_cycles()
    );
    Ok(gb)
}

/// Multi-line register and flag dump.
pub fn format_registers(regs: &Registers) -> String {
    let flag = |f: Flags| u8::from(regs.flag(f));
    let mut out = String::new();
    let _ = writeln!(
        out,
        "AF=0x{:04X} BC=0x{:04X} DE=0x{:04X} HL=0x{:04X}",
        regs.af(),
        regs.bc(),
        regs.de(),
        regs.hl()
    );
    let _ = writeln!(out, "SP=0x{:04X} PC=0x{:04X}", regs.sp, regs.pc);
    let _ = write!(
        out,
        "Z={} N={} H={} C={}",
        flag(Flags::Z),
        flag(Flags::N),
        flag(Flags::H),
        flag(Flags::C)
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_showcase_passes() {
        for showcase in &SHOWCASES {
            let result = run_showcase(showcase).unwrap();
            assert!(result.passed, "showcase '{}' failed", showcase.title);
        }
    }

    #[test]
    fn arithmetic_showcase_cycle_count() {
        let result = run_showcase(&SHOWCASES[0]).unwrap();
        assert_eq!(result.cycles, 8 + 8 + 4);
        assert_eq!(result.registers.a, 0x1E);
    }

    #[test]
    fn jump_showcase_skips_the_load_in_between() {
        let jump = SHOWCASES
            .iter()
            .find(|s| s.title == "Jump Instruction")
            .unwrap();

        let result = run_showcase(jump).unwrap();

        assert_eq!(result.registers.a, 0x22);
        assert_eq!(result.registers.pc, 0x000A);
        // LD A,n + JP nn + LD A,n; the skipped LD and NOP cost nothing.
        assert_eq!(result.cycles, 8 + 16 + 8);
    }

    #[test]
    fn flag_showcases_cover_each_flag() {
        let flags_of = |title: &str| {
            let showcase = SHOWCASES.iter().find(|s| s.title == title).unwrap();
            run_showcase(showcase).unwrap().registers.flags()
        };

        assert_eq!(flags_of("Zero Flag"), Flags::Z);
        assert_eq!(flags_of("Half-Carry Flag"), Flags::H);
        assert_eq!(flags_of("Carry Flag"), Flags::Z | Flags::H | Flags::C);
        assert!(!flags_of("Subtract Flag After ADD").contains(Flags::N));
    }

    #[test]
    fn showcase_checks_reject_wrong_results() {
        let mut regs = Registers::default();
        regs.a = 0x22;
        regs.pc = 0x0009;
        assert!(!check_jump(&regs));

        regs.a = 0x00;
        assert!(!check_zero_flag(&regs));

        regs.set_flag(Flags::N, true);
        assert!(!check_subtract_flag_clear(&regs));
    }

    #[test]
    fn run_rom_rejects_oversized_image() {
        let rom = vec![0u8; 0x8001];
        let Err(err) = run_rom(&rom, 1) else {
            panic!("oversized ROM was accepted");
        };
        assert!(format!("{err:#}").contains("program too large for ROM"));
    }

    #[test]
    fn run_rom_executes_requested_steps() {
        let gb = run_rom(&[0x3E, 0x05, 0x06, 0x03, 0x80], 3).unwrap();
        assert_eq!(gb.cpu().regs.a, 0x08);
        assert_eq!(gb.cpu().total_cycles(), 20);
    }

    #[test]
    fn register_dump_format() {
        let mut regs = Registers::default();
        regs.sp = 0xFFFE;
        regs.pc = 0x0150;
        regs.set_af(0x01B0);

        let dump = format_registers(&regs);

        assert_eq!(
            dump,
            "AF=0x01B0 BC=0x0000 DE=0x0000 HL=0x0000\nSP=0xFFFE PC=0x0150\nZ=1 N=0 H=1 C=1"
        );
    }
}
