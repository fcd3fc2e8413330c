use super::*;


fn program(lines: &[(u32, &str)]) -> Program {
    let mut p = Program::new();
    for (number, text) in lines {
        p.set(*number, text);
    }
    p
}

/// Runs to a halt, or gives up after `cycles` statements.
fn run_cycles(program: &Program, cycles: usize) -> (String, Option<Halt>) {
    let mut out = String::new();
    let halt = match Execution::new(program) {
        Some(mut execution) => execution.run(cycles, &mut out),
        None => None,
    };
    (out, halt)
}

fn run(program: &Program) -> (String, Option<Halt>) {
    run_cycles(program, 5000)
}
